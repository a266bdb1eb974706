//! # Sectional
//!
//! Width-budgeted widgets for line-oriented terminal output.
//!
//! Sectional lays out a small tree of sections, tables, rows and cells
//! within a caller-supplied column width and writes the result as plain
//! lines of text to a [`Terminal`] sink.
//!
//! ## Core Concepts
//!
//! - **Single pass**: drawing is one top-down traversal with no layout buffer
//! - **Grid tables**: rows aligned into shared, ragged-right columns
//! - **Flow tables**: uniform cells wrapped into centered lines
//! - **Face markup**: opaque `%(face-NAME)s` markers that measure as zero width
//!
//! ## Example
//!
//! ```rust
//! use sectional::{Cell, FlowTable, Section, Table};
//!
//! let mut flags = FlowTable::new();
//! for flag in ["CF", "PF", "ZF", "SF", "IF"] {
//!     flags.add_cell(Cell::new(flag));
//! }
//!
//! let mut section = Section::titled("Flags");
//! section.add_component(Table::from(flags));
//!
//! let text = sectional::render(&section, 40);
//! assert!(text.lines().next().unwrap().ends_with("[Flags]"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use error::LayoutError;
pub use terminal::{markup, Console, OutputBuffer, Terminal, DEFAULT_WIDTH};
pub use widget::{Cell, FlowLayout, FlowTable, GridTable, Row, Section, SectionConfig, Table, Widget};

/// Draw `widget` into a fresh [`OutputBuffer`] and return the text.
///
/// # Panics
///
/// Panics if the widget does not fit in `width`.
pub fn render<W: Widget + ?Sized>(widget: &W, width: usize) -> String {
    let mut out = OutputBuffer::new();
    widget.draw(&mut out, width);
    out.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_full_tree() {
        let mut registers = GridTable::new();
        registers.add_row(Row::from_cells([Cell::new("rax"), Cell::new("0x1")]));
        registers.add_row(Row::from_cells([Cell::new("rip"), Cell::new("0x401000")]));

        let flags: FlowTable = ["CF", "ZF", "IF"].into_iter().map(Cell::new).collect();

        let mut section = Section::titled("Registers");
        section.add_component(registers);
        section.add_component(Table::from(flags));

        let text = render(&section, 40);
        assert_eq!(text.lines().count(), 4);
        for line in text.lines() {
            assert_eq!(markup::display_width(line), 38);
        }
        assert!(text.contains(" rip  0x401000 "));
        assert_eq!(section.check(&OutputBuffer::new(), 40), Ok(()));
    }

    #[test]
    fn test_console_fallback_width_is_exported() {
        assert_eq!(DEFAULT_WIDTH, terminal::DEFAULT_WIDTH);
        assert!(Console::new().width() > 0);
    }

    #[test]
    fn test_render_boxed_widget() {
        let widget: Box<dyn Widget> = Box::new(Cell::new("x"));
        assert_eq!(render(&widget, 4), " x  ");
        assert_eq!(render(widget.as_ref(), 3), " x ");
    }
}
