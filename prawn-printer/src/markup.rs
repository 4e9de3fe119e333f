//! Markup dialect builder
//!
//! Native thermal-printer drivers accept a declarative line-markup dialect
//! instead of raw control bytes: each line starts with an alignment tag
//! (`[C]`, `[L]`, `[R]`), inline `<font size='big'>` / `<u>` tags control
//! emphasis, and `<barcode>` / `<qrcode>` tags embed code payloads. The
//! driver performs its own layout and command generation from this text.

/// Line alignment within the markup dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupAlign {
    Left,
    Center,
    Right,
}

impl MarkupAlign {
    fn tag(self) -> &'static str {
        match self {
            MarkupAlign::Left => "[L]",
            MarkupAlign::Center => "[C]",
            MarkupAlign::Right => "[R]",
        }
    }
}

/// Builder for markup-dialect payloads
///
/// Accumulates one `\n`-terminated line per content element.
pub struct MarkupBuilder {
    buf: String,
}

impl MarkupBuilder {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(1024),
        }
    }

    /// Write one aligned line
    ///
    /// Empty text produces a bare blank line with no alignment tag.
    pub fn line(&mut self, align: MarkupAlign, text: &str) -> &mut Self {
        if text.is_empty() {
            self.buf.push('\n');
            return self;
        }
        self.buf.push_str(align.tag());
        self.buf.push_str(text);
        self.buf.push('\n');
        self
    }

    /// Write an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Write an item row: left-aligned label, right-aligned amount
    ///
    /// The driver right-justifies everything after the `[R]` tag, so no
    /// manual padding is needed in this dialect.
    pub fn item_row(&mut self, label: &str, amount: &str) -> &mut Self {
        self.buf.push_str("[L]");
        self.buf.push_str(label);
        self.buf.push_str("[R]");
        self.buf.push_str(amount);
        self.buf.push('\n');
        self
    }

    /// Write a centered barcode line
    pub fn barcode(&mut self, data: &str) -> &mut Self {
        self.buf.push_str("[C]<barcode>");
        self.buf.push_str(data);
        self.buf.push_str("</barcode>\n");
        self
    }

    /// Write a centered QR code line with the given module size
    pub fn qrcode(&mut self, size: u8, data: &str) -> &mut Self {
        self.buf.push_str("[C]<qrcode size='");
        self.buf.push_str(&size.to_string());
        self.buf.push_str("'>");
        self.buf.push_str(data);
        self.buf.push_str("</qrcode>\n");
        self
    }

    /// Finalize and return the accumulated payload
    pub fn build(self) -> String {
        self.buf
    }

    /// Get the current buffer as a string reference
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

impl Default for MarkupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap text in the large-font emphasis tag
pub fn font_big(text: &str) -> String {
    format!("<font size='big'>{}</font>", text)
}

/// Wrap text in the underline tag
pub fn underline(text: &str) -> String {
    format!("<u>{}</u>", text)
}
