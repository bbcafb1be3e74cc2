//! List filtering and pagination
//!
//! The document screens fetch whole lists from the API and narrow them
//! in memory; this module holds the filter state those screens bind to,
//! and the pagination applied to the filtered result.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Accessors the filter needs from a document
pub trait Filterable {
    fn reference(&self) -> &str;
    fn supplier(&self) -> &str;
    /// Status wire name, e.g. "ORDERED"
    fn status_key(&self) -> &'static str;
    fn date(&self) -> NaiveDate;
}

/// Filter state for the document list screens
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFilter {
    /// Case-insensitive needle matched against reference and supplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Status wire name, e.g. "ORDERED"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Inclusive lower date bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

impl DocumentFilter {
    /// Create an empty filter (matches everything)
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a search needle
    pub fn with_search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    /// Add a status constraint
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Add an inclusive date range
    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Whether a single document passes the filter
    pub fn matches<T: Filterable>(&self, doc: &T) -> bool {
        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            let hit = doc.reference().to_lowercase().contains(&needle)
                || doc.supplier().to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if doc.status_key() != status {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if doc.date() < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if doc.date() > to {
                return false;
            }
        }
        true
    }

    /// Apply the filter, preserving input order
    pub fn apply<'a, T: Filterable>(&self, docs: &'a [T]) -> Vec<&'a T> {
        docs.iter().filter(|d| self.matches(*d)).collect()
    }
}

/// Paginated slice of a filtered list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Data for the requested page
    pub data: Vec<T>,
    /// Total record count before paging
    pub total: u64,
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Total page count
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            ((total as f64) / (limit as f64)).ceil() as u32
        } else {
            1
        };

        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Create a single-page response (when not paginating)
    pub fn single_page(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self {
            data,
            total,
            page: 1,
            limit: total as u32,
            total_pages: 1,
        }
    }
}

/// Slice a list into one page; out-of-range pages yield empty data with
/// correct metadata.
pub fn paginate<T: Clone>(items: &[T], page: u32, limit: u32) -> PaginatedResponse<T> {
    let page = page.max(1);
    let total = items.len() as u64;
    if limit == 0 {
        return PaginatedResponse::new(Vec::new(), total, page, limit);
    }
    let start = ((page - 1) as usize).saturating_mul(limit as usize);
    let data = if start >= items.len() {
        Vec::new()
    } else {
        items[start..(start + limit as usize).min(items.len())].to_vec()
    };
    PaginatedResponse::new(data, total, page, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::purchase_order::{PurchaseOrder, PurchaseOrderStatus};

    fn make_orders() -> Vec<PurchaseOrder> {
        let mut orders = Vec::new();
        for (i, (supplier, status)) in [
            ("Droguerie El Amal", PurchaseOrderStatus::Draft),
            ("Quincaillerie du Port", PurchaseOrderStatus::Ordered),
            ("Droguerie Centrale", PurchaseOrderStatus::Paid),
        ]
        .iter()
        .enumerate()
        {
            let mut order = PurchaseOrder::new_draft(
                format!("BA-2025-{:04}", i + 1),
                *supplier,
                NaiveDate::from_ymd_opt(2025, 3, (i + 10) as u32).unwrap(),
            );
            order.status = *status;
            orders.push(order);
        }
        orders
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let orders = make_orders();
        assert_eq!(DocumentFilter::all().apply(&orders).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let orders = make_orders();
        let filter = DocumentFilter::all().with_search("droguerie");
        let hits = filter.apply(&orders);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].reference, "BA-2025-0001");
    }

    #[test]
    fn test_search_matches_reference() {
        let orders = make_orders();
        let filter = DocumentFilter::all().with_search("0002");
        assert_eq!(filter.apply(&orders).len(), 1);
    }

    #[test]
    fn test_status_filter() {
        let orders = make_orders();
        let filter = DocumentFilter::all().with_status("ORDERED");
        let hits = filter.apply(&orders);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].supplier_name, "Quincaillerie du Port");
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let orders = make_orders();
        let filter = DocumentFilter::all().between(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 11).unwrap(),
        );
        assert_eq!(filter.apply(&orders).len(), 2);
    }

    #[test]
    fn test_combined_filters() {
        let orders = make_orders();
        let filter = DocumentFilter::all()
            .with_search("droguerie")
            .with_status("PAID");
        let hits = filter.apply(&orders);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].supplier_name, "Droguerie Centrale");
    }

    #[test]
    fn test_paginate() {
        let items: Vec<i32> = (1..=25).collect();
        let page = paginate(&items, 2, 10);
        assert_eq!(page.data, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_paginate_out_of_range_page() {
        let items: Vec<i32> = (1..=5).collect();
        let page = paginate(&items, 9, 10);
        assert!(page.data.is_empty());
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let items: Vec<i32> = (1..=25).collect();
        let page = paginate(&items, 3, 10);
        assert_eq!(page.data, vec![21, 22, 23, 24, 25]);
    }
}
