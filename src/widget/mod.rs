//! Widgets: the drawable tree.
//!
//! A tree is built from a [`Section`] owning child widgets, usually
//! [`Table`]s of [`Row`]s and [`Cell`]s, then drawn once with a total column
//! width. Each node narrows or redistributes that width for its children and
//! writes straight to the terminal in document order.
//!
//! # Example
//!
//! ```rust
//! use sectional::widget::{Cell, GridTable, Row, Section, Widget};
//! use sectional::terminal::OutputBuffer;
//!
//! let mut registers = GridTable::new();
//! registers.add_row(Row::from_cells([Cell::new("rip"), Cell::new("0x401000")]));
//!
//! let mut section = Section::titled("Registers");
//! section.add_component(registers);
//!
//! let mut out = OutputBuffer::new();
//! section.draw(&mut out, 40);
//! assert_eq!(out.lines().count(), 2);
//! ```

mod cell;
mod row;
mod section;
mod table;
mod traits;

pub use cell::Cell;
pub use row::Row;
pub use section::{Section, SectionConfig};
pub use table::{FlowLayout, FlowTable, GridTable, Table};
pub use traits::Widget;
