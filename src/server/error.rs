use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::StorylinkError;

pub const INVALID_RESPONSE_FORMAT: &str = "Invalid response format";
pub const CONNECT_FAILED: &str = "Failed to connect to Jira. Please check your credentials.";

/// An error leaving the HTTP boundary as `{ "error": message }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }
}

impl From<StorylinkError> for ApiError {
    fn from(err: StorylinkError) -> Self {
        let status = match &err {
            e if e.is_auth_failure() => StatusCode::UNAUTHORIZED,
            StorylinkError::Validation(_) => StatusCode::BAD_REQUEST,
            StorylinkError::Internal(message) => {
                return Self::new(StatusCode::INTERNAL_SERVER_ERROR, message.as_str());
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
