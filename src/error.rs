use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorylinkError {
    #[error("Jira not configured. Please connect first.")]
    NotConfigured,

    #[error("Jira API error: {status}. {body}")]
    Remote { status: StatusCode, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl StorylinkError {
    /// True when the failure means the held Jira credentials are missing or rejected.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            StorylinkError::NotConfigured => true,
            StorylinkError::Remote { status, .. } => {
                *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, StorylinkError>;
