//! API Error Types
//!
//! Failures of calls against the backend REST API, shared by the dashboard
//! client and anything else that decodes the same responses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// A call that needs a bearer token was attempted without one
    #[error("Authentication token not found")]
    Unauthenticated,

    /// The server returned `success: false`
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Build a status error, preferring the server's own message
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("Request failed with status {}", status));
        ApiError::Status { status, message }
    }

    /// The session is no longer valid and the user must sign in again
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthenticated | ApiError::Status { status: 401, .. }
        )
    }

    /// Text suitable for a toast or inline error
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Result type alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;
