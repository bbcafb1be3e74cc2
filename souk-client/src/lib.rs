//! Souk Client - HTTP client for the back-office document API
//!
//! Provides network-based HTTP calls to the remote API that owns
//! persistence and business-rule enforcement for bons d'achat and
//! bons d'avoir.

pub mod client;
pub mod config;
pub mod error;

pub use client::{DocumentApi, SoukClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

// Re-export shared types for convenience
pub use shared::models::credit_note::{CreditNote, CreditNoteCreate, CreditNoteUpdate};
pub use shared::models::purchase_order::{
    PurchaseOrder, PurchaseOrderCreate, PurchaseOrderUpdate,
};
pub use shared::response::ApiResponse;
