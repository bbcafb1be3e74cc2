//! Bon d'avoir print rendering

use shared::models::company::CompanyInfo;
use shared::models::credit_note::{CreditNote, CreditNoteStatus};
use shared::words::amount_to_words;
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::format::{format_amount, format_number, format_quantity};
use crate::html::{HtmlBuilder, PAGE_STYLE};

/// Renders a bon d'avoir as a self-contained printable HTML page
pub struct CreditNoteRenderer<'a> {
    note: &'a CreditNote,
    company: &'a CompanyInfo,
}

impl<'a> CreditNoteRenderer<'a> {
    pub fn new(note: &'a CreditNote, company: &'a CompanyInfo) -> Self {
        Self { note, company }
    }

    pub fn render(&self) -> RenderResult<String> {
        if self.note.items.is_empty() {
            return Err(RenderError::EmptyDocument);
        }
        debug!(reference = %self.note.reference, "rendering bon d'avoir");

        let total = self.note.computed_total();
        let words = amount_to_words(total)?;

        let mut b = HtmlBuilder::new();
        b.raw("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n");
        b.raw("<title>");
        b.text(&self.note.reference);
        b.raw("</title>\n");
        b.raw(PAGE_STYLE);
        b.raw("</head>\n<body>\n");

        self.company_block(&mut b);

        if self.note.status == CreditNoteStatus::Cancelled {
            b.element_class("div", "void-banner", "*** ANNULÉ ***");
        }

        b.element("h1", &format!("Bon d'Avoir N° {}", self.note.reference));
        self.meta_block(&mut b);
        self.items_table(&mut b, total);

        b.element_class(
            "p",
            "legal",
            &format!("Arrêté le présent bon d'avoir à la somme de : {}", words),
        );

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
        b.element("div", &format!("Fournisseur : {}", self.note.supplier_name));
        b.element(
            "div",
            &format!("Date : {}", self.note.date.format("%d/%m/%Y")),
        );
        b.element("div", &format!("Statut : {}", self.note.status.label()));
        if let Some(po_ref) = &self.note.purchase_order_ref {
            b.element("div", &format!("Référence bon d'achat : {}", po_ref));
        }
        if let Some(reason) = &self.note.reason {
            b.element("div", &format!("Motif : {}", reason));
        }
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
        for item in &self.note.items {
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::credit_note::CreditNoteItem;

    fn make_company() -> CompanyInfo {
        CompanyInfo {
            name: "Matériaux Atlas SARL".to_string(),
            address: "12 Rue des Oudayas, Casablanca".to_string(),
            ice: "001234567000089".to_string(),
            fiscal_id: None,
            rc: Some("98765".to_string()),
            phone: None,
            email: None,
        }
    }

    fn make_note() -> CreditNote {
        let mut note = CreditNote::new_draft(
            "AV-2025-0007",
            "Droguerie El Amal",
            NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
        );
        note.items = vec![CreditNoteItem::new("Ciment 25kg (retour)", 2.0, 30.0)];
        note.reason = Some("Marchandise endommagée".to_string());
        note.purchase_order_ref = Some("BA-2025-0042".to_string());
        note
    }

    #[test]
    fn test_render_contains_legal_line() {
        let company = make_company();
        let note = make_note();
        let html = CreditNoteRenderer::new(&note, &company).render().unwrap();
        assert!(html.contains(
            "Arrêté le présent bon d&#39;avoir à la somme de : Soixante dirhams"
        ));
    }

    #[test]
    fn test_render_links_back_to_purchase_order() {
        let company = make_company();
        let note = make_note();
        let html = CreditNoteRenderer::new(&note, &company).render().unwrap();
        assert!(html.contains("Référence bon d&#39;achat : BA-2025-0042"));
        assert!(html.contains("Motif : Marchandise endommagée"));
    }

    #[test]
    fn test_render_contains_total() {
        let company = make_company();
        let note = make_note();
        let html = CreditNoteRenderer::new(&note, &company).render().unwrap();
        assert!(html.contains("<td class=\"num\">60,00 DH</td>"));
    }

    #[test]
    fn test_cancelled_note_gets_banner() {
        let company = make_company();
        let mut note = make_note();
        note.status = CreditNoteStatus::Cancelled;
        let html = CreditNoteRenderer::new(&note, &company).render().unwrap();
        assert!(html.contains("*** ANNULÉ ***"));
    }

    #[test]
    fn test_empty_document_is_refused() {
        let company = make_company();
        let mut note = make_note();
        note.items.clear();
        let err = CreditNoteRenderer::new(&note, &company).render().unwrap_err();
        assert!(matches!(err, RenderError::EmptyDocument));
    }
}
