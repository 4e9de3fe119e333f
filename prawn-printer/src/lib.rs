//! # prawn-printer
//!
//! Thermal printer payload building and wire transport - low-level only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS command building (generic serial printers)
//! - Markup dialect building (native thermal-printer drivers)
//! - Raw TCP printing (port 9100 convention)
//!
//! What to print (documents, receipts, transport selection) lives in
//! `prawn-demo`.
//!
//! ## Example
//!
//! ```ignore
//! use prawn_printer::{EscPosBuilder, NetworkPrinter, Printer};
//!
//! // Build ESC/POS content
//! let mut builder = EscPosBuilder::new(36);
//! builder.align_center();
//! builder.emphasis_big();
//! builder.write_line("TEST PAGE");
//! builder.emphasis_off();
//! builder.feed_and_cut();
//!
//! // Send to a network printer
//! let printer = NetworkPrinter::new("192.168.1.100", 9100)?;
//! printer.print(builder.finalize().as_bytes()).await?;
//! ```

mod error;
mod escpos;
mod markup;
mod printer;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use escpos::EscPosBuilder;
pub use markup::{MarkupAlign, MarkupBuilder, font_big, underline};
pub use printer::{NetworkPrinter, Printer};
