//! Cell: The smallest drawable unit.

use super::traits::{push_padding, Widget};
use crate::error::{ensure, LayoutError};
use crate::terminal::Terminal;

/// A fixed piece of text, padded with one space on either side.
///
/// An empty cell has zero width and draws as pure padding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Padded contents, or empty.
    contents: String,
}

impl Cell {
    /// Create a cell holding `text`.
    pub fn new(text: impl AsRef<str>) -> Self {
        let text = text.as_ref();
        if text.is_empty() {
            return Self::empty();
        }
        Self {
            contents: format!(" {text} "),
        }
    }

    /// Create a cell with no contents.
    pub const fn empty() -> Self {
        Self {
            contents: String::new(),
        }
    }

    /// The stored, padded contents.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Measured width of the padded contents.
    pub fn width(&self, terminal: &dyn Terminal) -> usize {
        terminal.string_width(&self.contents)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

const fn fits(needed: usize, available: usize) -> Result<(), LayoutError> {
    if needed > available {
        return Err(LayoutError::CellOverflow { needed, available });
    }
    Ok(())
}

impl Widget for Cell {
    /// Write the contents followed by enough spaces to fill `width`.
    ///
    /// No newline is written.
    fn draw(&self, terminal: &mut dyn Terminal, width: usize) {
        let needed = self.width(terminal);
        ensure(fits(needed, width));

        let mut line = String::with_capacity(self.contents.len() + width - needed);
        line.push_str(&self.contents);
        push_padding(&mut line, width - needed);
        terminal.write(&line);
    }

    fn check(&self, terminal: &dyn Terminal, width: usize) -> Result<(), LayoutError> {
        fits(self.width(terminal), width)
    }
}
