//! Bon d'achat print rendering

use shared::models::company::CompanyInfo;
use shared::models::purchase_order::{PurchaseOrder, PurchaseOrderStatus};
use shared::words::amount_to_words;
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::format::{format_amount, format_number, format_quantity};
use crate::html::{HtmlBuilder, PAGE_STYLE};

/// Renders a bon d'achat as a self-contained printable HTML page
pub struct PurchaseOrderRenderer<'a> {
    order: &'a PurchaseOrder,
    company: &'a CompanyInfo,
}

impl<'a> PurchaseOrderRenderer<'a> {
    pub fn new(order: &'a PurchaseOrder, company: &'a CompanyInfo) -> Self {
        Self { order, company }
    }

    pub fn render(&self) -> RenderResult<String> {
        if self.order.items.is_empty() {
            return Err(RenderError::EmptyDocument);
        }
        debug!(reference = %self.order.reference, "rendering bon d'achat");

        let total = self.order.computed_total();
        let words = amount_to_words(total)?;

        let mut b = HtmlBuilder::new();
        b.raw("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n");
        b.raw("<title>");
        b.text(&self.order.reference);
        b.raw("</title>\n");
        b.raw(PAGE_STYLE);
        b.raw("</head>\n<body>\n");

        self.company_block(&mut b);

        if self.order.status == PurchaseOrderStatus::Cancelled {
            b.element_class("div", "void-banner", "*** ANNULÉ ***");
        }

        b.element("h1", &format!("Bon d'Achat N° {}", self.order.reference));
        self.meta_block(&mut b);
        self.items_table(&mut b, total);

        b.element_class(
            "p",
            "legal",
            &format!("Arrêté le présent bon d'achat à la somme de : {}", words),
        );

        if let Some(note) = &self.order.note {
            b.element_class("p", "note", &format!("Note : {}", note));
        }

        b.open_class("div", "signatures");
        b.element("div", "Le Responsable");
        b.element("div", "Le Fournisseur");
        b.close("div");

        b.raw("</body>\n</html>\n");
        Ok(b.finalize())
    }

    fn company_block(&self, b: &mut HtmlBuilder) {
        b.open_class("div", "company");
        b.element("strong", &self.company.name);
        b.element("div", &self.company.address);
        b.element("div", &format!("ICE : {}", self.company.ice));
        if let Some(fiscal_id) = &self.company.fiscal_id {
            b.element("div", &format!("IF : {}", fiscal_id));
        }
        if let Some(rc) = &self.company.rc {
            b.element("div", &format!("RC : {}", rc));
        }
        if let Some(phone) = &self.company.phone {
            b.element("div", &format!("Tél : {}", phone));
        }
        if let Some(email) = &self.company.email {
            b.element("div", &format!("Email : {}", email));
        }
        b.close("div");
    }

    fn meta_block(&self, b: &mut HtmlBuilder) {
        b.open_class("div", "meta");
        b.element(
            "div",
            &format!("Fournisseur : {}", self.order.supplier_name),
        );
        if let Some(ice) = &self.order.supplier_ice {
            b.element("div", &format!("ICE fournisseur : {}", ice));
        }
        b.element(
            "div",
            &format!("Date : {}", self.order.date.format("%d/%m/%Y")),
        );
        b.element("div", &format!("Statut : {}", self.order.status.label()));
        b.close("div");
    }

    fn items_table(&self, b: &mut HtmlBuilder, total: f64) {
        b.open_class("table", "items");
        b.open("thead");
        b.open("tr");
        b.header_cell("Désignation");
        b.element_class("th", "num", "Qté");
        b.element_class("th", "num", "P.U. (DH)");
        b.element_class("th", "num", "Montant (DH)");
        b.close("tr");
        b.close("thead");

        b.open("tbody");
        for item in &self.order.items {
            b.open("tr");
            b.cell(&item.designation);
            b.cell_num(&format_quantity(item.quantity));
            b.cell_num(&format_number(item.unit_price));
            b.cell_num(&format_number(item.line_total()));
            b.close("tr");
        }
        b.open_class("tr", "total-row");
        b.raw("<td colspan=\"3\">Total</td>");
        b.cell_num(&format_amount(total));
        b.close("tr");
        b.close("tbody");
        b.close("table");
    }
}
