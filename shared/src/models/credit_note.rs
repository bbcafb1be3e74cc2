//! Credit Note ("Bon d'Avoir") Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{StatusBadge, round_centimes};
use crate::error::{ApiError, ApiResult};
use crate::filter::Filterable;
use crate::util::now_millis;

/// Credit note status lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditNoteStatus {
    #[default]
    Draft,
    Validated,
    Used,
    Cancelled,
}

impl CreditNoteStatus {
    /// Wire name, as the API spells it
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Validated => "VALIDATED",
            Self::Used => "USED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// French display label for the list screens
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Brouillon",
            Self::Validated => "Validé",
            Self::Used => "Utilisé",
            Self::Cancelled => "Annulé",
        }
    }

    /// Badge severity for the list screens
    pub fn badge(self) -> StatusBadge {
        match self {
            Self::Draft => StatusBadge::Neutral,
            Self::Validated => StatusBadge::Info,
            Self::Used => StatusBadge::Success,
            Self::Cancelled => StatusBadge::Danger,
        }
    }

    /// Statuses reachable from this one.
    ///
    /// A consumed credit can no longer be cancelled.
    pub fn allowed_transitions(self) -> &'static [CreditNoteStatus] {
        match self {
            Self::Draft => &[Self::Validated, Self::Cancelled],
            Self::Validated => &[Self::Used, Self::Cancelled],
            Self::Used => &[],
            Self::Cancelled => &[],
        }
    }

    pub fn can_transition(self, next: CreditNoteStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

/// Credit note line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreditNoteItem {
    /// Product designation as printed on the document
    pub designation: String,
    pub quantity: f64,
    /// Unit price in MAD
    pub unit_price: f64,
}

impl CreditNoteItem {
    pub fn new(designation: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            designation: designation.into(),
            quantity,
            unit_price,
        }
    }

    /// Line total in MAD, rounded to the centime
    pub fn line_total(&self) -> f64 {
        round_centimes(self.quantity * self.unit_price)
    }
}

/// Credit note entity ("Bon d'Avoir")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditNote {
    pub id: Option<String>,
    /// Human-facing reference, e.g. "AV-2025-0007"
    pub reference: String,
    pub supplier_name: String,
    pub date: NaiveDate,
    pub status: CreditNoteStatus,
    pub items: Vec<CreditNoteItem>,
    /// Total amount in MAD, as reported by the API
    pub total_amount: f64,
    /// Motif de l'avoir (returned goods, billing error, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Reference of the bon d'achat this note credits, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_ref: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl CreditNote {
    /// Create a local draft, before the API has assigned an id
    pub fn new_draft(
        reference: impl Into<String>,
        supplier_name: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            reference: reference.into(),
            supplier_name: supplier_name.into(),
            date,
            status: CreditNoteStatus::Draft,
            items: Vec::new(),
            total_amount: 0.0,
            reason: None,
            purchase_order_ref: None,
            created_at: Some(now_millis()),
            updated_at: None,
        }
    }

    /// Recompute the total from line items, rounded to the centime
    pub fn computed_total(&self) -> f64 {
        round_centimes(self.items.iter().map(|i| i.line_total()).sum())
    }

    /// Apply a status transition, rejecting illegal moves
    pub fn transition(&mut self, next: CreditNoteStatus) -> ApiResult<()> {
        if !self.status.can_transition(next) {
            return Err(ApiError::illegal_transition(
                self.status.as_str(),
                next.as_str(),
            ));
        }
        self.status = next;
        self.updated_at = Some(now_millis());
        Ok(())
    }
}

impl Filterable for CreditNote {
    fn reference(&self) -> &str {
        &self.reference
    }

    fn supplier(&self) -> &str {
        &self.supplier_name
    }

    fn status_key(&self) -> &'static str {
        self.status.as_str()
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Create credit note payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditNoteCreate {
    pub reference: String,
    pub supplier_name: String,
    pub date: NaiveDate,
    pub items: Vec<CreditNoteItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_ref: Option<String>,
}

/// Update credit note payload (partial)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreditNoteUpdate {
    pub supplier_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub items: Option<Vec<CreditNoteItem>>,
    pub reason: Option<String>,
    pub purchase_order_ref: Option<String>,
}

/// Update status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditNoteStatusUpdate {
    pub status: CreditNoteStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_note() -> CreditNote {
        let mut note = CreditNote::new_draft(
            "AV-2025-0007",
            "Droguerie El Amal",
            NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
        );
        note.items = vec![CreditNoteItem::new("Ciment 25kg (retour)", 2.0, 30.0)];
        note.reason = Some("Marchandise endommagée".to_string());
        note
    }

    #[test]
    fn test_computed_total() {
        assert_eq!(make_note().computed_total(), 60.0);
    }

    #[test]
    fn test_full_lifecycle() {
        let mut note = make_note();
        note.transition(CreditNoteStatus::Validated).unwrap();
        note.transition(CreditNoteStatus::Used).unwrap();
        assert!(note.status.is_terminal());
    }

    #[test]
    fn test_used_note_cannot_be_cancelled() {
        let mut note = make_note();
        note.transition(CreditNoteStatus::Validated).unwrap();
        note.transition(CreditNoteStatus::Used).unwrap();
        let err = note.transition(CreditNoteStatus::Cancelled).unwrap_err();
        assert_eq!(err.message(), "cannot move document from USED to CANCELLED");
    }

    #[test]
    fn test_draft_cannot_be_used_directly() {
        let mut note = make_note();
        assert!(!note.status.can_transition(CreditNoteStatus::Used));
        assert!(note.transition(CreditNoteStatus::Used).is_err());
        assert_eq!(note.status, CreditNoteStatus::Draft);
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&CreditNoteStatus::Validated).unwrap();
        assert_eq!(json, "\"VALIDATED\"");
    }
}
