//! Client error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors talking to the remote cipher service
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered non-200 with a structured error body
    #[error("service error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the documented shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// True when the remote service itself rejected the request
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}
