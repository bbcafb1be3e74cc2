//! Minimal HTML building for print pages
//!
//! A builder over a single growable buffer; all user-supplied text goes
//! through [`escape`] before it reaches the page.

/// Shared stylesheet for printable pages (A4 print window)
pub(crate) const PAGE_STYLE: &str = "<style>\n\
body { font-family: \"Helvetica Neue\", Arial, sans-serif; font-size: 12px; color: #111; margin: 24px; }\n\
h1 { font-size: 18px; text-align: center; margin: 16px 0; }\n\
table.items { width: 100%; border-collapse: collapse; margin-top: 12px; }\n\
table.items th, table.items td { border: 1px solid #444; padding: 4px 6px; }\n\
table.items th { background: #eee; text-align: left; }\n\
td.num, th.num { text-align: right; }\n\
.company { line-height: 1.4; }\n\
.meta { margin-top: 12px; }\n\
.total-row td { font-weight: bold; }\n\
.legal { margin-top: 16px; font-style: italic; }\n\
.note { margin-top: 8px; }\n\
.void-banner { color: #b00020; border: 2px solid #b00020; text-align: center; font-size: 16px; font-weight: bold; padding: 6px; margin: 12px 0; }\n\
.signatures { display: flex; justify-content: space-between; margin-top: 48px; }\n\
.signatures div { width: 40%; border-top: 1px solid #111; padding-top: 4px; text-align: center; }\n\
@media print { body { margin: 0; } }\n\
</style>\n";

/// Escape text for safe splicing into HTML
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML page builder
pub struct HtmlBuilder {
    buf: String,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    // --- Basic Operations ---

    /// Append raw markup, unescaped
    pub fn raw(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Append escaped text
    pub fn text(&mut self, s: &str) {
        self.buf.push_str(&escape(s));
    }

    // --- Elements ---

    pub fn open(&mut self, tag: &str) {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push('>');
    }

    pub fn open_class(&mut self, tag: &str, class: &str) {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push_str(" class=\"");
        self.buf.push_str(class);
        self.buf.push_str("\">");
    }

    pub fn close(&mut self, tag: &str) {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    /// `<tag>escaped text</tag>`
    pub fn element(&mut self, tag: &str, text: &str) {
        self.open(tag);
        self.text(text);
        self.close(tag);
    }

    /// `<tag class="...">escaped text</tag>`
    pub fn element_class(&mut self, tag: &str, class: &str, text: &str) {
        self.open_class(tag, class);
        self.text(text);
        self.close(tag);
    }

    // --- Table Helpers ---

    pub fn header_cell(&mut self, text: &str) {
        self.element("th", text);
    }

    pub fn cell(&mut self, text: &str) {
        self.element("td", text);
    }

    /// Right-aligned numeric cell
    pub fn cell_num(&mut self, text: &str) {
        self.element_class("td", "num", text);
    }

    pub fn finalize(self) -> String {
        self.buf
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("A&B <Frères>"), "A&amp;B &lt;Frères&gt;");
        assert_eq!(escape("dit \"l'ancien\""), "dit &quot;l&#39;ancien&quot;");
        assert_eq!(escape("rien à échapper"), "rien à échapper");
    }

    #[test]
    fn test_element_escapes_text() {
        let mut b = HtmlBuilder::new();
        b.element("td", "<script>");
        assert_eq!(b.finalize(), "<td>&lt;script&gt;</td>\n");
    }

    #[test]
    fn test_element_class() {
        let mut b = HtmlBuilder::new();
        b.element_class("p", "legal", "texte");
        assert_eq!(b.finalize(), "<p class=\"legal\">texte</p>\n");
    }
}
