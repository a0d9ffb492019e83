use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
    pub data_received: bool,
    pub saved_as: String,
}

/// POST /webhook — receive a completed configuration, log it, and archive it
/// to disk. The payload is treated as opaque JSON; the sink never validates
/// the wizard's schema.
pub async fn receive(
    State(app): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<WebhookResponse>, AppError> {
    let now = Utc::now();
    let data_received = payload
        .as_object()
        .map(|o| !o.is_empty())
        .unwrap_or(!payload.is_null());

    // Colon-free timestamp so the filename is portable.
    let filename = format!("config-{}.json", now.format("%Y-%m-%dT%H-%M-%S%.3fZ"));
    let path = app.archive_dir.join(&filename);

    let pretty = serde_json::to_vec_pretty(&payload)?;
    let bytes = pretty.len();
    let result = tokio::task::spawn_blocking(move || kickoff_core::io::atomic_write(&path, &pretty))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;
    result?;

    tracing::info!(
        project = payload
            .pointer("/configuration/projectOverview/projectName")
            .and_then(|v| v.as_str())
            .unwrap_or("<unnamed>"),
        bytes,
        saved_as = %filename,
        "submission archived"
    );

    Ok(Json(WebhookResponse {
        success: true,
        message: "Configuration received and archived",
        timestamp: now,
        data_received,
        saved_as: filename,
    }))
}
