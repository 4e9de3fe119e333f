//! Printable document model
//!
//! A [`Document`] is the abstract representation of something to print:
//! header lines, item rows with prices, a total, footer lines, and
//! barcode/QR payloads. Documents are built fresh per print action and
//! never mutated afterwards; the renderers in [`crate::render`] turn them
//! into dialect-specific payloads.

use chrono::Local;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Line alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A styled line of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub align: Align,
    pub emphasized: bool,
    pub underlined: bool,
}

impl TextLine {
    pub fn new(text: impl Into<String>, align: Align) -> Self {
        Self {
            text: text.into(),
            align,
            emphasized: false,
            underlined: false,
        }
    }

    pub fn center(text: impl Into<String>) -> Self {
        Self::new(text, Align::Center)
    }

    pub fn left(text: impl Into<String>) -> Self {
        Self::new(text, Align::Left)
    }

    pub fn emphasized(mut self) -> Self {
        self.emphasized = true;
        self
    }

    pub fn underlined(mut self) -> Self {
        self.underlined = true;
        self
    }
}

/// One item row: label plus amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
}

impl LineItem {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Barcode or QR payload embedded in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodePayload {
    Barcode { data: String },
    /// `size` is the QR module size in dots
    QrCode { data: String, size: u8 },
}

/// Which canned document to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentVariant {
    TestPage,
    Receipt,
}

impl DocumentVariant {
    /// Build the canned document for this variant, stamped with the
    /// current local time.
    pub fn document_now(self) -> Document {
        match self {
            DocumentVariant::TestPage => Document::test_page_now(),
            DocumentVariant::Receipt => Document::sample_receipt_now(),
        }
    }
}

/// A printable document
///
/// Receipts carry a non-empty `items` list and a `total`; test pages carry
/// neither, only header/footer lines and code payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub variant: DocumentVariant,
    pub header: Vec<TextLine>,
    pub items: Vec<LineItem>,
    pub total: Option<Decimal>,
    pub footer: Vec<TextLine>,
    pub codes: Vec<CodePayload>,
}

const RULE: usize = 32;

impl Document {
    /// Canned test page with a fixed timestamp string
    pub fn test_page(timestamp: &str) -> Self {
        Self {
            variant: DocumentVariant::TestPage,
            header: vec![
                TextLine::center("TEST PAGE").emphasized().underlined(),
                TextLine::center("Thermal Printer Demo"),
                TextLine::left(format!("Date: {}", timestamp)),
            ],
            items: Vec::new(),
            total: None,
            footer: vec![TextLine::center("End of test")],
            codes: vec![
                CodePayload::Barcode {
                    data: "12345678".into(),
                },
                CodePayload::QrCode {
                    data: "https://example.com".into(),
                    size: 20,
                },
            ],
        }
    }

    /// Canned test page stamped with the current local time
    pub fn test_page_now() -> Self {
        Self::test_page(&now_string())
    }

    /// Canned sample receipt with a fixed timestamp string
    pub fn sample_receipt(timestamp: &str) -> Self {
        Self {
            variant: DocumentVariant::Receipt,
            header: vec![
                TextLine::center("STORE NAME").emphasized(),
                TextLine::center("123 Main Street"),
                TextLine::center("City, State 12345"),
                TextLine::center("Tel: (123) 456-7890"),
                TextLine::center("=".repeat(RULE)),
                TextLine::center("Receipt #1001"),
                TextLine::center(timestamp),
                TextLine::center("=".repeat(RULE)),
            ],
            items: vec![
                LineItem::new("Item A", Decimal::new(1099, 2)),
                LineItem::new("Item B", Decimal::new(599, 2)),
                LineItem::new("Item C", Decimal::new(750, 2)),
            ],
            total: Some(Decimal::new(2448, 2)),
            footer: vec![
                TextLine::center("www.example.com"),
                TextLine::center(""),
                TextLine::center("Thank you for your purchase!"),
            ],
            codes: vec![CodePayload::QrCode {
                data: "https://example.com".into(),
                size: 20,
            }],
        }
    }

    /// Canned sample receipt stamped with the current local time
    pub fn sample_receipt_now() -> Self {
        Self::sample_receipt(&now_string())
    }
}

fn now_string() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_carries_no_items_or_total() {
        let doc = Document::test_page("2024-01-01 12:00:00");
        assert_eq!(doc.variant, DocumentVariant::TestPage);
        assert!(doc.items.is_empty());
        assert!(doc.total.is_none());
        assert_eq!(doc.codes.len(), 2);
    }

    #[test]
    fn sample_receipt_total_matches_items() {
        let doc = Document::sample_receipt("2024-01-01 12:00:00");
        assert_eq!(doc.variant, DocumentVariant::Receipt);
        assert!(!doc.items.is_empty());
        let sum: Decimal = doc.items.iter().map(|i| i.amount).sum();
        assert_eq!(doc.total, Some(sum));
    }

    #[test]
    fn constructors_are_deterministic() {
        let a = Document::test_page("ts");
        let b = Document::test_page("ts");
        assert_eq!(a, b);
    }
}
