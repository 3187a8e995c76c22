//! Device API error definitions.

use thiserror::Error;

/// Errors that can occur when talking to the gateway backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection or transport failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// Base URL could not be parsed or joined.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl ApiError {
    /// HTTP status carried by the error, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::InvalidBaseUrl(_) => None,
        }
    }
}

/// Result type for device API operations.
pub type ApiResult<T> = Result<T, ApiError>;
