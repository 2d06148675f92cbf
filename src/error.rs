//! Gateway Errors

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by the request gateway
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport failure, no response received
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("request failed with status {status}")]
    Http { status: u16 },

    #[error("failed to encode request body: {0}")]
    Encode(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected our credentials
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
