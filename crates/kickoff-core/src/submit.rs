use crate::error::{Result, WizardError};
use crate::form::{FormState, FORM_VERSION, PAGE_COUNT};
use crate::sections::{DeveloperInfo, Sections};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Required-field validation
// ---------------------------------------------------------------------------

/// Human labels for the developer-identity fields that must be filled before
/// anything goes over the wire.
const REQUIRED_FIELDS: [(&str, fn(&DeveloperInfo) -> &str); 8] = [
    ("Full Name", |d| &d.name),
    ("Email", |d| &d.email),
    ("Address", |d| &d.address),
    ("City", |d| &d.city),
    ("State/Region", |d| &d.region),
    ("Postal Code", |d| &d.postal_code),
    ("Country", |d| &d.country),
    ("Phone Number", |d| &d.phone),
];

/// Labels of required developer-identity fields that are still blank.
pub fn missing_required_fields(info: &DeveloperInfo) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|(_, get)| get(info).trim().is_empty())
        .map(|(label, _)| (*label).to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Immutable snapshot sent to the sink. Built from the state at call time,
/// so the user may keep editing while a submission is in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub generated_at: DateTime<Utc>,
    pub form_version: String,
    pub total_pages: u32,
    pub completed_pages: usize,
    pub configuration: Sections,
}

impl SubmissionPayload {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            generated_at: Utc::now(),
            form_version: FORM_VERSION.to_string(),
            total_pages: PAGE_COUNT,
            completed_pages: state.completed_count(),
            configuration: state.sections.clone(),
        }
    }
}

/// Acknowledgement from the sink; the optional message is echoed to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ack {
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

pub struct SinkClient {
    url: String,
    client: reqwest::blocking::Client,
}

impl SinkClient {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self {
            url: url.into(),
            client,
        }
    }

    /// POST the payload as JSON. Any 2xx is success; the body's optional
    /// `message` field is surfaced, a non-JSON body is tolerated.
    pub fn send(&self, payload: &SubmissionPayload) -> Result<Ack> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .map_err(|e| WizardError::Submission(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(WizardError::Submission(format!(
                "sink returned {status}: {body}"
            )));
        }

        let message = response
            .json::<serde_json::Value>()
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));
        Ok(Ack { message })
    }
}

// ---------------------------------------------------------------------------
// Submission flow
// ---------------------------------------------------------------------------

/// Validate, snapshot, and send the completed form.
///
/// Validation failures never reach the network. A transport failure or
/// non-2xx leaves the state untouched so the user can retry; only a
/// successful acknowledgement marks the session submitted.
pub fn submit(state: &mut FormState, url: &str) -> Result<Ack> {
    if state.submitted {
        return Err(WizardError::AlreadySubmitted);
    }
    let missing = missing_required_fields(&state.sections.developer_info);
    if !missing.is_empty() {
        return Err(WizardError::MissingRequiredFields(missing));
    }

    state.complete_page(PAGE_COUNT);
    let payload = SubmissionPayload::from_state(state);
    let ack = SinkClient::new(url).send(&payload)?;
    state.submitted = true;
    Ok(ack)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SectionKey;

    fn filled_state() -> FormState {
        let mut state = FormState::new();
        state
            .update_section(
                SectionKey::DeveloperInfo,
                &serde_json::json!({
                    "name": "Ada Lovelace",
                    "email": "ada@example.com",
                    "address": "12 Analytical Way",
                    "city": "London",
                    "region": "Greater London",
                    "postalCode": "N1 9GU",
                    "country": "UK",
                    "phone": "+44 20 7946 0000",
                }),
            )
            .unwrap();
        state
    }

    #[test]
    fn fresh_state_is_missing_all_eight_fields() {
        let missing = missing_required_fields(&FormState::new().sections.developer_info);
        assert_eq!(missing.len(), 8);
        assert_eq!(missing[0], "Full Name");
        assert_eq!(missing[7], "Phone Number");
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut info = filled_state().sections.developer_info;
        info.city = "   ".to_string();
        assert_eq!(missing_required_fields(&info), ["City"]);
    }

    #[test]
    fn validation_failure_makes_no_network_call() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/webhook")
            .expect(0)
            .with_status(200)
            .create();

        let mut state = FormState::new();
        let err = submit(&mut state, &format!("{}/webhook", server.url())).unwrap_err();
        match err {
            WizardError::MissingRequiredFields(labels) => assert_eq!(labels.len(), 8),
            other => panic!("expected validation error, got {other}"),
        }
        assert!(!state.submitted);
        mock.assert();
    }

    #[test]
    fn successful_submission_marks_state() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/webhook")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"message":"Configuration received!"}"#)
            .create();

        let mut state = filled_state();
        let ack = submit(&mut state, &format!("{}/webhook", server.url())).unwrap();
        assert_eq!(ack.message.as_deref(), Some("Configuration received!"));
        assert!(state.submitted);
        assert!(state.completed_pages.contains(&PAGE_COUNT));
        mock.assert();
    }

    #[test]
    fn non_2xx_is_an_error_and_state_survives() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/webhook")
            .with_status(500)
            .with_body("boom")
            .create();

        let mut state = filled_state();
        let before_sections = state.sections.clone();
        let err = submit(&mut state, &format!("{}/webhook", server.url())).unwrap_err();
        assert!(matches!(err, WizardError::Submission(_)));
        assert!(!state.submitted);
        assert_eq!(state.sections, before_sections);
    }

    #[test]
    fn transport_failure_is_a_submission_error() {
        // Nothing listens on this port.
        let mut state = filled_state();
        let err = submit(&mut state, "http://127.0.0.1:1/webhook").unwrap_err();
        assert!(matches!(err, WizardError::Submission(_)));
        assert!(!state.submitted);
    }

    #[test]
    fn resubmission_requires_reset() {
        let mut state = filled_state();
        state.submitted = true;
        let err = submit(&mut state, "http://127.0.0.1:1/webhook").unwrap_err();
        assert!(matches!(err, WizardError::AlreadySubmitted));
    }

    #[test]
    fn payload_shape() {
        let mut state = filled_state();
        state.next_page();
        state.next_page();
        let payload = SubmissionPayload::from_state(&state);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["formVersion"], FORM_VERSION);
        assert_eq!(json["totalPages"], PAGE_COUNT);
        assert_eq!(json["completedPages"], 2);
        assert!(json["generatedAt"].as_str().unwrap().contains('T'));
        let config = json["configuration"].as_object().unwrap();
        assert_eq!(config.len(), SectionKey::all().len());
        assert_eq!(config["developerInfo"]["name"], "Ada Lovelace");
    }

    #[test]
    fn tolerates_non_json_success_body() {
        let mut server = mockito::Server::new();
        server.mock("POST", "/webhook").with_status(204).create();

        let mut state = filled_state();
        let ack = submit(&mut state, &format!("{}/webhook", server.url())).unwrap();
        assert_eq!(ack.message, None);
        assert!(state.submitted);
    }
}
