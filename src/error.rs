//! # Client Error Types
//!
//! Unified error handling for pptgen-client library and CLI operations.

use anyhow::Result;
use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for generation client operations
///
/// Two failure classes matter to callers: transport failures where no
/// response arrived at all (`HttpError`), and application failures where
/// the server answered with a non-success status (`ApiError`, message
/// taken from the response body when the backend supplied one).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ClientError {
    /// Create an API error from HTTP response
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create an invalid input error for client-side validation failures
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if error is recoverable (worth retrying)
    ///
    /// The client itself never retries; this classification is for
    /// callers that own retry UX, such as the CLI's polling mode.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClientError::HttpError(e) => e.is_timeout() || e.is_connect(),
            ClientError::ApiError { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Check if error is a transport failure (no response from the server)
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::HttpError(_))
    }
}
