//! API Response types
//!
//! Envelope format spoken by the remote document API. Every endpoint,
//! success or failure, answers with the same three-field JSON object:
//!
//! ```json
//! { "code": "E0000", "message": "Success", "data": { ... } }
//! ```

use serde::{Deserialize, Serialize};

/// Standard API response code
pub const API_CODE_SUCCESS: &str = "E0000";

/// Unified API response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (E0000 = success, others = error codes)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful envelope around `data`
    pub fn ok(data: T) -> Self {
        Self {
            code: API_CODE_SUCCESS.into(),
            message: "Success".into(),
            data: Some(data),
        }
    }

    /// Create an error envelope with no data
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Whether the envelope carries a success code
    pub fn is_success(&self) -> bool {
        self.code == API_CODE_SUCCESS
    }

    /// Unwrap the envelope; error envelopes yield `None` even when they
    /// carry diagnostic data.
    pub fn into_data(self) -> Option<T> {
        if self.is_success() { self.data } else { None }
    }
}
