//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, transport)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Store answered with a non-success status
    #[error("store returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store client operations
pub type ClientResult<T> = Result<T, ClientError>;
