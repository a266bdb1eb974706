//! `OutputBuffer`: In-memory terminal sink.

use std::io::Write;

use super::{markup, Terminal};

/// Pre-allocated buffer that accumulates drawn text.
///
/// Everything a widget tree draws lands here untouched, face markers
/// included, so it can be inspected or flushed in a single `write()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    data: String,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: String::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical screenful (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Get the buffer length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the completed and trailing lines, without terminators.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.data.lines()
    }

    /// Take the accumulated text.
    pub fn into_string(self) -> String {
        self.data
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.data.as_bytes())?;
        writer.flush()
    }
}

impl Terminal for OutputBuffer {
    #[inline]
    fn write(&mut self, text: &str) {
        self.data.push_str(text);
    }

    fn string_width(&self, text: &str) -> usize {
        markup::display_width(text)
    }
}

impl std::fmt::Display for OutputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_appends_verbatim() {
        let mut out = OutputBuffer::new();
        out.write(markup::FACE_HEADER);
        out.write("--[x]\n");
        assert_eq!(out.as_str(), "%(face-header)s--[x]\n");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_string_width_skips_markers() {
        let out = OutputBuffer::new();
        assert_eq!(out.string_width("%(face-header)s[Stats]"), 7);
    }

    #[test]
    fn test_clear_and_flush() {
        let mut out = OutputBuffer::with_capacity(16);
        out.write("abc");
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"abc");

        out.clear();
        assert!(out.is_empty());
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn test_mut_ref_is_terminal() {
        fn draw_into(mut terminal: impl Terminal) {
            terminal.write("hi");
        }

        let mut out = OutputBuffer::new();
        draw_into(&mut out);
        assert_eq!(out.into_string(), "hi");
    }
}
