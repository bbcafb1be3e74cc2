//! Purchase Order ("Bon d'Achat") Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{StatusBadge, round_centimes};
use crate::error::{ApiError, ApiResult};
use crate::filter::Filterable;
use crate::util::now_millis;

/// Purchase order status lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseOrderStatus {
    #[default]
    Draft,
    Ordered,
    Received,
    Paid,
    Cancelled,
}

impl PurchaseOrderStatus {
    /// Wire name, as the API spells it
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Ordered => "ORDERED",
            Self::Received => "RECEIVED",
            Self::Paid => "PAID",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// French display label for the list screens
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Brouillon",
            Self::Ordered => "Commandé",
            Self::Received => "Reçu",
            Self::Paid => "Payé",
            Self::Cancelled => "Annulé",
        }
    }

    /// Badge severity for the list screens
    pub fn badge(self) -> StatusBadge {
        match self {
            Self::Draft => StatusBadge::Neutral,
            Self::Ordered => StatusBadge::Info,
            Self::Received => StatusBadge::Warning,
            Self::Paid => StatusBadge::Success,
            Self::Cancelled => StatusBadge::Danger,
        }
    }

    /// Statuses reachable from this one.
    ///
    /// Cancellation is only possible before goods are received.
    pub fn allowed_transitions(self) -> &'static [PurchaseOrderStatus] {
        match self {
            Self::Draft => &[Self::Ordered, Self::Cancelled],
            Self::Ordered => &[Self::Received, Self::Cancelled],
            Self::Received => &[Self::Paid],
            Self::Paid => &[],
            Self::Cancelled => &[],
        }
    }

    pub fn can_transition(self, next: PurchaseOrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

/// Purchase order line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrderItem {
    /// Product designation as printed on the document
    pub designation: String,
    pub quantity: f64,
    /// Unit price in MAD
    pub unit_price: f64,
}

impl PurchaseOrderItem {
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

/// Purchase order entity ("Bon d'Achat")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: Option<String>,
    /// Human-facing reference, e.g. "BA-2025-0042"
    pub reference: String,
    pub supplier_name: String,
    /// ICE identifier of the supplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_ice: Option<String>,
    pub date: NaiveDate,
    pub status: PurchaseOrderStatus,
    pub items: Vec<PurchaseOrderItem>,
    /// Total amount in MAD, as reported by the API
    pub total_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl PurchaseOrder {
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
            supplier_ice: None,
            date,
            status: PurchaseOrderStatus::Draft,
            items: Vec::new(),
            total_amount: 0.0,
            note: None,
            created_at: Some(now_millis()),
            updated_at: None,
        }
    }

    /// Recompute the total from line items, rounded to the centime
    pub fn computed_total(&self) -> f64 {
        round_centimes(self.items.iter().map(|i| i.line_total()).sum())
    }

    /// Apply a status transition, rejecting illegal moves
    pub fn transition(&mut self, next: PurchaseOrderStatus) -> ApiResult<()> {
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

impl Filterable for PurchaseOrder {
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

/// Create purchase order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderCreate {
    pub reference: String,
    pub supplier_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_ice: Option<String>,
    pub date: NaiveDate,
    pub items: Vec<PurchaseOrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Update purchase order payload (partial)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PurchaseOrderUpdate {
    pub supplier_name: Option<String>,
    pub supplier_ice: Option<String>,
    pub date: Option<NaiveDate>,
    pub items: Option<Vec<PurchaseOrderItem>>,
    pub note: Option<String>,
}

/// Update status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderStatusUpdate {
    pub status: PurchaseOrderStatus,
}
