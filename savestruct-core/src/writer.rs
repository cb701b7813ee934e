//! Container writer.

use std::fmt;

/// Growable text buffer that save routines append tagged values to.
///
/// # Example
/// ```
/// use savestruct_core::TagWriter;
///
/// let mut out = TagWriter::new();
/// out.open("gps");
/// out.field("x", 3);
/// out.close("gps");
/// assert_eq!(out.as_str(), "<gps>\n<x>3</x>\n</gps>\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagWriter {
    buf: String,
}

impl TagWriter {
    /// Creates an empty writer.
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Creates an empty writer with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Writes `<tag>` and a newline.
    pub fn open(&mut self, tag: &str) {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    /// Writes `</tag>` and a newline.
    pub fn close(&mut self, tag: &str) {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    /// Writes `<tag>value</tag>` and a newline.
    pub fn field(&mut self, tag: &str, value: impl fmt::Display) {
        use fmt::Write;
        // Writing into a String cannot fail.
        let _ = writeln!(self.buf, "<{tag}>{value}</{tag}>");
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the writer and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Returns the number of bytes written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Discards everything written.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl fmt::Display for TagWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl From<TagWriter> for String {
    fn from(writer: TagWriter) -> Self {
        writer.buf
    }
}
