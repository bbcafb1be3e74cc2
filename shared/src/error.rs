//! Unified error system for the Souk suite
//!
//! Stable string codes travel in the API envelope; the typed errors
//! below are what the rest of the workspace handles.
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 2xxx: Permission errors
//! - 3xxx: Authentication errors
//! - 4xxx: Document errors
//! - 9xxx: System errors

use thiserror::Error;

/// Standard API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Success
    Success,
    /// Validation error (400)
    Validation,
    /// Authentication required (401)
    Unauthorized,
    /// Permission denied (403)
    Forbidden,
    /// Resource not found (404)
    NotFound,
    /// Resource already exists (409)
    Conflict,
    /// Business rule violation (422)
    BusinessRule,
    /// Illegal document status transition (422)
    IllegalTransition,
    /// Internal server error (500)
    Internal,
    /// Invalid request (400)
    Invalid,
}

impl ApiErrorCode {
    /// (stable code, default message)
    fn info(self) -> (&'static str, &'static str) {
        match self {
            Self::Success => ("E0000", "Success"),
            Self::Validation => ("E0002", "Validation failed"),
            Self::Unauthorized => ("E3001", "Authentication required"),
            Self::Forbidden => ("E2001", "Permission denied"),
            Self::NotFound => ("E0003", "Resource not found"),
            Self::Conflict => ("E0004", "Resource already exists"),
            Self::BusinessRule => ("E0005", "Business rule violation"),
            Self::IllegalTransition => ("E4001", "Illegal status transition"),
            Self::Internal => ("E9001", "Internal server error"),
            Self::Invalid => ("E0006", "Invalid request"),
        }
    }

    /// Stable code string, as it travels in the envelope
    pub fn code(self) -> &'static str {
        self.info().0
    }

    /// Default message for this code
    pub fn default_message(self) -> &'static str {
        self.info().1
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Unified error type for the suite
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error
    #[error("{message}")]
    Validation { message: String },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {message}")]
    Forbidden { message: String },

    /// Resource not found
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Resource already exists
    #[error("Resource already exists: {resource}")]
    Conflict { resource: String },

    /// Business rule violation
    #[error("Business rule violation: {message}")]
    BusinessRule { message: String },

    /// Illegal document status transition
    #[error("Illegal status transition: {from} -> {to}")]
    IllegalTransition { from: String, to: String },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Invalid request
    #[error("Invalid request: {message}")]
    Invalid { message: String },
}

impl ApiError {
    // ========== Convenient constructors ==========

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation { message: msg.into() }
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden { message: msg.into() }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    pub fn conflict(resource: impl Into<String>) -> Self {
        Self::Conflict { resource: resource.into() }
    }

    pub fn business_rule(msg: impl Into<String>) -> Self {
        Self::BusinessRule { message: msg.into() }
    }

    pub fn illegal_transition(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::IllegalTransition {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal { message: msg.into() }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid { message: msg.into() }
    }

    // ========== Error inspection methods ==========

    /// Get the error code for this error
    pub fn error_code(&self) -> ApiErrorCode {
        match self {
            Self::Validation { .. } => ApiErrorCode::Validation,
            Self::Unauthorized => ApiErrorCode::Unauthorized,
            Self::Forbidden { .. } => ApiErrorCode::Forbidden,
            Self::NotFound { .. } => ApiErrorCode::NotFound,
            Self::Conflict { .. } => ApiErrorCode::Conflict,
            Self::BusinessRule { .. } => ApiErrorCode::BusinessRule,
            Self::IllegalTransition { .. } => ApiErrorCode::IllegalTransition,
            Self::Internal { .. } => ApiErrorCode::Internal,
            Self::Invalid { .. } => ApiErrorCode::Invalid,
        }
    }

    /// Human-facing message, without the code prefix
    pub fn message(&self) -> String {
        match self {
            Self::Unauthorized => "Please login first".to_string(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::Conflict { resource } => format!("{} already exists", resource),
            Self::IllegalTransition { from, to } => {
                format!("cannot move document from {} to {}", from, to)
            }
            Self::Validation { message }
            | Self::Forbidden { message }
            | Self::BusinessRule { message }
            | Self::Internal { message }
            | Self::Invalid { message } => message.clone(),
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ApiErrorCode::Success.code(), "E0000");
        assert_eq!(ApiErrorCode::IllegalTransition.code(), "E4001");
        assert_eq!(ApiErrorCode::Internal.code(), "E9001");
    }

    #[test]
    fn test_illegal_transition_message() {
        let err = ApiError::illegal_transition("PAID", "DRAFT");
        assert_eq!(err.error_code(), ApiErrorCode::IllegalTransition);
        assert_eq!(err.message(), "cannot move document from PAID to DRAFT");
    }

    #[test]
    fn test_constructor_helpers() {
        let err = ApiError::not_found("Bon d'achat");
        assert_eq!(err.error_code(), ApiErrorCode::NotFound);
        assert_eq!(err.message(), "Bon d'achat not found");
        assert_eq!(err.to_string(), "Resource not found: Bon d'achat");
    }
}
