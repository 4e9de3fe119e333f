//! ESC/POS command builder
//!
//! Builds the ESC/POS control sequences understood by generic serial
//! thermal printers. The builder accumulates a UTF-8 `String` in which
//! control bytes are embedded as `\x1B..` escapes; callers convert to raw
//! bytes with [`str::as_bytes`] when handing the payload to a transport.

/// String-based ESC/POS builder
///
/// Starts every payload with `ESC @` (printer reset). Alignment uses
/// `ESC a n`, emphasis uses `ESC ! n`, and [`EscPosBuilder::feed_and_cut`]
/// terminates the document with `ESC d 3`.
pub struct EscPosBuilder {
    buf: String,
    width: usize,
}

impl EscPosBuilder {
    /// Create a builder with the given paper width in characters
    ///
    /// The demo targets 80mm paper with a 36-character print area.
    pub fn new(width: usize) -> Self {
        let mut buf = String::with_capacity(1024);
        // Initialize printer (ESC @)
        buf.push_str("\x1B\x40");
        Self { buf, width }
    }

    /// Get the configured paper width
    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Write raw text
    pub fn write(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Write text followed by newline
    pub fn write_line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Write an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    // === Alignment ===

    /// Align text to center (ESC a 1)
    pub fn align_center(&mut self) -> &mut Self {
        self.buf.push_str("\x1B\x61\x01");
        self
    }

    /// Align text to left (ESC a 0, default)
    pub fn align_left(&mut self) -> &mut Self {
        self.buf.push_str("\x1B\x61\x00");
        self
    }

    /// Align text to right (ESC a 2)
    pub fn align_right(&mut self) -> &mut Self {
        self.buf.push_str("\x1B\x61\x02");
        self
    }

    // === Emphasis ===

    /// Double-size bold text (ESC ! 0x30)
    pub fn emphasis_big(&mut self) -> &mut Self {
        self.buf.push_str("\x1B\x21\x30");
        self
    }

    /// Bold text at normal size (ESC ! 0x10)
    pub fn emphasis_bold(&mut self) -> &mut Self {
        self.buf.push_str("\x1B\x21\x10");
        self
    }

    /// Back to normal text (ESC ! 0)
    pub fn emphasis_off(&mut self) -> &mut Self {
        self.buf.push_str("\x1B\x21\x00");
        self
    }

    // === Separators ===

    /// Print a line of '=' characters across the paper
    pub fn eq_sep(&mut self) -> &mut Self {
        let sep = "=".repeat(self.width);
        self.write_line(&sep)
    }

    /// Print a line of '-' characters across the paper
    pub fn dash_sep(&mut self) -> &mut Self {
        let sep = "-".repeat(self.width);
        self.write_line(&sep)
    }

    // === Layout Helpers ===

    /// Print left and right text on the same line
    ///
    /// Pads with spaces so the whole row spans exactly the paper width and
    /// the right text ends flush with the right edge. Rows that do not fit
    /// fall back to a single separating space.
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = left.chars().count();
        let rw = right.chars().count();

        if lw + rw >= self.width {
            self.write(left);
            self.write(" ");
            self.write_line(right);
        } else {
            let gap = self.width - lw - rw;
            self.write(left);
            self.write(&" ".repeat(gap));
            self.write_line(right);
        }
        self
    }

    // === Paper Control ===

    /// Feed three lines and cut (ESC d 3)
    ///
    /// This is the terminal command of every payload; nothing should be
    /// appended after it.
    pub fn feed_and_cut(&mut self) -> &mut Self {
        self.buf.push_str("\x1B\x64\x03");
        self
    }

    // === Build ===

    /// Finalize and return the accumulated payload
    pub fn finalize(self) -> String {
        self.buf
    }

    /// Get the current buffer as a string reference
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

impl Default for EscPosBuilder {
    fn default() -> Self {
        Self::new(36)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_reset() {
        let b = EscPosBuilder::new(36);
        assert!(b.as_str().as_bytes().starts_with(&[0x1B, 0x40]));
    }

    #[test]
    fn feed_and_cut_is_terminal() {
        let mut b = EscPosBuilder::new(36);
        b.write_line("hello").feed_and_cut();
        let out = b.finalize();
        assert!(out.as_bytes().ends_with(&[0x1B, 0x64, 0x03]));
    }

    #[test]
    fn line_lr_spans_full_width() {
        let mut b = EscPosBuilder::new(36);
        b.line_lr("Item A", "$10.99");
        let out = b.finalize();
        let row = out
            .lines()
            .find(|l| l.contains("Item A"))
            .expect("row missing");
        assert_eq!(row.chars().count(), 36);
        assert!(row.starts_with("Item A"));
        assert!(row.ends_with("$10.99"));
    }

    #[test]
    fn line_lr_too_long_falls_back_to_single_space() {
        let mut b = EscPosBuilder::new(10);
        b.line_lr("a very long label", "$1.00");
        let out = b.finalize();
        assert!(out.contains("a very long label $1.00\n"));
    }

    #[test]
    fn separators_span_width() {
        let mut b = EscPosBuilder::new(12);
        b.eq_sep().dash_sep();
        let out = b.finalize();
        assert!(out.contains("============\n"));
        assert!(out.contains("------------\n"));
    }
}
