//! Widget trait: the single capability every drawable element shares.

use crate::error::LayoutError;
use crate::terminal::Terminal;

/// An element that can draw itself into a terminal within a column budget.
///
/// Drawing is a single top-down pass: each widget writes its own lines,
/// newline terminators included, straight to the terminal.
pub trait Widget {
    /// Draw this widget using at most `width` columns per line.
    ///
    /// # Panics
    ///
    /// Panics if the widget cannot fit in `width`. That is a sizing bug in
    /// the caller; use [`Widget::check`] to find out beforehand.
    fn draw(&self, terminal: &mut dyn Terminal, width: usize);

    /// Verify, without writing anything, that [`Widget::draw`] would succeed.
    fn check(&self, terminal: &dyn Terminal, width: usize) -> Result<(), LayoutError>;
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn draw(&self, terminal: &mut dyn Terminal, width: usize) {
        (**self).draw(terminal, width);
    }

    fn check(&self, terminal: &dyn Terminal, width: usize) -> Result<(), LayoutError> {
        (**self).check(terminal, width)
    }
}

/// Append `columns` spaces to `line`.
pub(crate) fn push_padding(line: &mut String, columns: usize) {
    line.extend(std::iter::repeat(' ').take(columns));
}

/// Write `columns` spaces to the terminal, skipping the write when zero.
pub(crate) fn write_padding(terminal: &mut dyn Terminal, columns: usize) {
    if columns > 0 {
        terminal.write(&" ".repeat(columns));
    }
}
