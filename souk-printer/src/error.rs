//! Renderer error types

use thiserror::Error;

/// Renderer error type
#[derive(Debug, Error)]
pub enum RenderError {
    /// The total could not be spelled out
    #[error("amount spelling failed: {0}")]
    Words(#[from] shared::words::WordsError),

    /// Printing a document with no lines is refused
    #[error("document has no items")]
    EmptyDocument,
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
