//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with the expected envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 401 - no token, or an expired one
    #[error("Authentication required")]
    Unauthorized,

    /// 403
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400
    #[error("Validation error: {0}")]
    Validation(String),

    /// 422 - e.g. an illegal status transition refused by the server
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// A well-formed error envelope returned with a 2xx status
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    /// Anything else the server threw back
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a non-2xx HTTP status and its body to a typed error.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden(body),
            StatusCode::NOT_FOUND => Self::NotFound(body),
            StatusCode::BAD_REQUEST => Self::Validation(body),
            StatusCode::UNPROCESSABLE_ENTITY => Self::BusinessRule(body),
            _ => Self::Internal(body),
        }
    }

    /// Whether retrying with fresh credentials could help
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
