//! List documents from a running API server.
//!
//! Usage: cargo run --example list_documents -- http://localhost:8080
//!
//! Set SOUK_TOKEN to authenticate.

use souk_client::{ClientConfig, DocumentApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    let mut client = ClientConfig::new(&base_url).build_client();
    if let Ok(token) = std::env::var("SOUK_TOKEN") {
        client.set_token(token);
    }

    let orders = client.list_purchase_orders().await?;
    println!("{} bons d'achat", orders.len());
    for order in &orders {
        println!(
            "  {}  {}  {}  [{}]",
            order.reference,
            order.date,
            order.supplier_name,
            order.status.label()
        );
    }

    let notes = client.list_credit_notes().await?;
    println!("{} bons d'avoir", notes.len());
    for note in &notes {
        println!(
            "  {}  {}  {}  [{}]",
            note.reference,
            note.date,
            note.supplier_name,
            note.status.label()
        );
    }

    Ok(())
}
