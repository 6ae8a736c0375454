//! API Errors
//!
//! Failure taxonomy for calls to the gallery server.

use thiserror::Error;

/// Result type alias for API calls
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Server answered outside 2xx
    #[error("{status} {status_text}: {message}")]
    Status {
        message: String,
        status: u16,
        status_text: String,
    },

    /// Request never completed
    #[error("Network error: {message}")]
    Network { message: String },

    /// Body was not the expected JSON
    #[error("Response error: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, 0 when no response was received
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Status { status, .. } => *status,
            ApiError::Network { .. } | ApiError::Decode(_) => 0,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Only 2xx counts as success
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
