//! Render a sample bon d'achat to stdout.
//!
//! Usage: cargo run --example render_order > bon.html

use chrono::NaiveDate;
use shared::models::company::CompanyInfo;
use shared::models::purchase_order::{PurchaseOrder, PurchaseOrderItem};
use souk_printer::PurchaseOrderRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let company = CompanyInfo {
        name: "Matériaux Atlas SARL".to_string(),
        address: "12 Rue des Oudayas, Casablanca".to_string(),
        ice: "001234567000089".to_string(),
        fiscal_id: Some("45678912".to_string()),
        rc: Some("98765".to_string()),
        phone: Some("0522-123456".to_string()),
        email: None,
    };

    let mut order = PurchaseOrder::new_draft(
        "BA-2025-0042",
        "Droguerie El Amal",
        NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date"),
    );
    order.items = vec![
        PurchaseOrderItem::new("Ciment 25kg", 10.0, 30.0),
        PurchaseOrderItem::new("Peinture blanche 5L", 1.0, 25.50),
    ];

    let html = PurchaseOrderRenderer::new(&order, &company).render()?;
    println!("{}", html);
    Ok(())
}
