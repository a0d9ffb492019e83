use thiserror::Error;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("unknown field '{field}' in section '{section}'")]
    UnknownField { section: String, field: String },

    #[error("invalid patch for section '{section}': {reason}")]
    InvalidPatch { section: String, reason: String },

    #[error("unknown control level: {0}")]
    UnknownLevel(String),

    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    #[error("submission failed: {0}")]
    Submission(String),

    #[error("form already submitted: reset to start over")]
    AlreadySubmitted,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WizardError>;
