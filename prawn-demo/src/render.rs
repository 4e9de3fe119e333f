//! Dialect renderers
//!
//! [`render`] turns a [`Document`] into the payload a specific driver
//! expects. Rendering is pure: same document and dialect, same bytes.
//!
//! The renderer owns layout (separators, blank lines, column widths); the
//! document owns content. Three dialects exist:
//!
//! - `Markup`: declarative line markup for native thermal drivers
//! - `EscPos`: raw ESC/POS control sequences for serial transports
//! - `Html`: print-service fallback document

use crate::document::{Align, CodePayload, Document, DocumentVariant, TextLine};
use prawn_printer::{EscPosBuilder, MarkupAlign, MarkupBuilder, PrintError, PrintResult};
use rust_decimal::Decimal;

/// Paper width in characters for the ESC/POS dialect
const ESCPOS_WIDTH: usize = 36;

/// Width of the dash rule above the total row in the markup dialect
const MARKUP_RULE: usize = 32;

/// Payload encoding scheme a driver expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Markup,
    EscPos,
    Html,
}

/// Render a document for the given dialect
pub fn render(doc: &Document, dialect: Dialect) -> PrintResult<String> {
    match dialect {
        Dialect::Markup => render_markup(doc),
        Dialect::EscPos => render_escpos(doc),
        Dialect::Html => Ok(render_html(doc)),
    }
}

fn money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

fn receipt_total(doc: &Document) -> PrintResult<Decimal> {
    if doc.items.is_empty() {
        return Err(PrintError::InvalidDocument(
            "receipt has no item rows".into(),
        ));
    }
    doc.total
        .ok_or_else(|| PrintError::InvalidDocument("receipt has no total".into()))
}

// === Markup ===

fn markup_align(align: Align) -> MarkupAlign {
    match align {
        Align::Left => MarkupAlign::Left,
        Align::Center => MarkupAlign::Center,
        Align::Right => MarkupAlign::Right,
    }
}

fn markup_line(b: &mut MarkupBuilder, line: &TextLine) {
    if line.text.is_empty() {
        b.blank();
        return;
    }
    let mut text = line.text.clone();
    if line.emphasized {
        text = prawn_printer::font_big(&text);
    }
    if line.underlined {
        text = prawn_printer::underline(&text);
    }
    b.line(markup_align(line.align), &text);
}

fn render_markup(doc: &Document) -> PrintResult<String> {
    let mut b = MarkupBuilder::new();

    for line in &doc.header {
        markup_line(&mut b, line);
    }

    if doc.variant == DocumentVariant::Receipt {
        let total = receipt_total(doc)?;
        b.blank();
        for item in &doc.items {
            b.item_row(&item.label, &money(item.amount));
        }
        b.blank();
        b.line(MarkupAlign::Center, &"-".repeat(MARKUP_RULE));
        b.item_row(
            &prawn_printer::font_big("Total"),
            &prawn_printer::font_big(&money(total)),
        );
        b.blank();
    }

    for code in &doc.codes {
        match code {
            CodePayload::Barcode { data } => b.barcode(data),
            CodePayload::QrCode { data, size } => b.qrcode(*size, data),
        };
    }

    for line in &doc.footer {
        markup_line(&mut b, line);
    }

    Ok(b.build())
}

// === ESC/POS ===

fn escpos_align(b: &mut EscPosBuilder, current: &mut Option<Align>, align: Align) {
    if *current == Some(align) {
        return;
    }
    match align {
        Align::Left => b.align_left(),
        Align::Center => b.align_center(),
        Align::Right => b.align_right(),
    };
    *current = Some(align);
}

fn escpos_line(b: &mut EscPosBuilder, current: &mut Option<Align>, line: &TextLine) {
    if line.text.is_empty() {
        b.blank();
        return;
    }
    escpos_align(b, current, line.align);
    if line.emphasized {
        b.emphasis_big();
        b.write_line(&line.text);
        b.emphasis_off();
    } else {
        b.write_line(&line.text);
    }
}

fn render_escpos(doc: &Document) -> PrintResult<String> {
    let mut b = EscPosBuilder::new(ESCPOS_WIDTH);
    let mut current: Option<Align> = None;

    for line in &doc.header {
        escpos_line(&mut b, &mut current, line);
    }

    if doc.variant == DocumentVariant::Receipt {
        let total = receipt_total(doc)?;
        b.blank();
        escpos_align(&mut b, &mut current, Align::Left);
        for item in &doc.items {
            b.line_lr(&item.label, &money(item.amount));
        }
        b.blank();
        escpos_align(&mut b, &mut current, Align::Center);
        b.dash_sep();
        b.emphasis_bold();
        b.line_lr("Total:", &money(total));
        b.emphasis_off();
        b.blank();
    }

    // No barcode/QR support in this dialect; codes are skipped.

    for line in &doc.footer {
        escpos_line(&mut b, &mut current, line);
    }

    b.blank().blank().blank();
    b.feed_and_cut();
    Ok(b.finalize())
}

// === HTML ===

fn render_html(doc: &Document) -> String {
    let mut s = String::with_capacity(2048);
    s.push_str("<html>\n<body style=\"width: 300px; font-family: monospace;\">\n");

    s.push_str("<div style=\"text-align: center;\">\n");
    for line in &doc.header {
        push_html_line(&mut s, line);
    }
    s.push_str("</div>\n");

    if doc.variant == DocumentVariant::Receipt {
        s.push_str("<hr style=\"border-top: 1px dashed #8c8c8c;\">\n");
        for item in &doc.items {
            s.push_str(&format!(
                "<div style=\"display: flex; justify-content: space-between;\">\
                 <span>{}</span><span>{}</span></div>\n",
                item.label,
                money(item.amount)
            ));
        }
        s.push_str("<hr style=\"border-top: 1px dashed #8c8c8c;\">\n");
        if let Some(total) = doc.total {
            s.push_str(&format!(
                "<div style=\"display: flex; justify-content: space-between; \
                 font-weight: bold;\"><span>Total</span><span>{}</span></div>\n",
                money(total)
            ));
        }
    }

    s.push_str("<div style=\"text-align: center; margin-top: 20px;\">\n");
    for line in &doc.footer {
        push_html_line(&mut s, line);
    }
    s.push_str("</div>\n</body>\n</html>\n");
    s
}

fn push_html_line(s: &mut String, line: &TextLine) {
    if line.text.is_empty() {
        s.push_str("<br>\n");
    } else if line.emphasized {
        s.push_str(&format!("<h2>{}</h2>\n", line.text));
    } else {
        s.push_str(&format!("<p>{}</p>\n", line.text));
    }
}
