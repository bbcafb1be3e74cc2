//! Shared types for the Souk back-office suite
//!
//! Domain models for the two commercial document types (bon d'achat and
//! bon d'avoir), their status lifecycles, list filtering, the API
//! response envelope, and the French amount-in-words converter used by
//! the printable document renderers.

pub mod error;
pub mod filter;
pub mod models;
pub mod response;
pub mod util;
pub mod words;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiError, ApiErrorCode, ApiResult};
pub use filter::{DocumentFilter, Filterable, PaginatedResponse};
pub use response::ApiResponse;
pub use words::amount_to_words;
