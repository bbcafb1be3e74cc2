//! # souk-printer
//!
//! Printable document rendering - HTML generation only.
//!
//! ## Scope
//!
//! This crate handles HOW a document is laid out for printing:
//! - HTML building and escaping
//! - French amount formatting
//! - Bon d'achat / bon d'avoir page rendering, including the legal
//!   amount-in-words statement
//!
//! Print-window and PDF mechanics (opening the window, rasterization)
//! stay in the UI shell that consumes the rendered page.
//!
//! ## Example
//!
//! ```ignore
//! use souk_printer::PurchaseOrderRenderer;
//!
//! let html = PurchaseOrderRenderer::new(&order, &company).render()?;
//! print_window.load(&html);
//! ```

mod credit_note;
mod error;
mod format;
mod html;
mod purchase_order;

pub use credit_note::CreditNoteRenderer;
pub use error::{RenderError, RenderResult};
pub use format::{format_amount, format_number};
pub use html::{HtmlBuilder, escape};
pub use purchase_order::PurchaseOrderRenderer;
