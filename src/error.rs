//! Layout precondition failures.
//!
//! Drawing never recovers from these: a widget asked to draw into a budget it
//! cannot fit panics with the matching message. [`Widget::check`] reports the
//! same conditions as values so callers can size their widths up front.
//!
//! [`Widget::check`]: crate::widget::Widget::check

use thiserror::Error;

/// A width budget that a widget cannot be drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A cell is wider than the column it was given.
    #[error("cell needs {needed} columns but only {available} are available")]
    CellOverflow {
        /// Measured width of the cell.
        needed: usize,
        /// Column budget.
        available: usize,
    },

    /// A row was given a different number of column widths than it has cells.
    #[error("row has {cells} cells but {columns} column widths were supplied")]
    ColumnCountMismatch {
        /// Cells in the row.
        cells: usize,
        /// Column widths supplied.
        columns: usize,
    },

    /// A row's content is wider than the sum of its column widths.
    #[error("row needs {needed} columns but its column widths sum to {available}")]
    RowOverflow {
        /// Natural width of the row.
        needed: usize,
        /// Sum of the supplied column widths.
        available: usize,
    },

    /// A section title does not fit in the section's inner width.
    #[error("section title needs {needed} columns but the header is {available} wide")]
    TitleOverflow {
        /// Measured width of the bracketed title.
        needed: usize,
        /// Inner width of the section.
        available: usize,
    },

    /// A section header fill character does not occupy exactly one column.
    #[error("header fill {fill:?} is {width} columns wide, expected 1")]
    FillWidth {
        /// Configured fill character.
        fill: char,
        /// Its measured width.
        width: usize,
    },

    /// Not even one flow cell fits on a line.
    #[error("flow cells are {cell_width} columns wide but the table is only {width} wide")]
    FlowTooNarrow {
        /// Uniform width of every flow cell.
        cell_width: usize,
        /// Table width.
        width: usize,
    },

    /// Every flow cell is empty, so no column width can be derived.
    #[error("flow table holds only empty cells")]
    ZeroWidthCells,

    /// The aligned grid columns are wider than the table.
    #[error("grid columns need {needed} columns but the table is {available} wide")]
    GridOverflow {
        /// Sum of the grid column widths.
        needed: usize,
        /// Table width.
        available: usize,
    },
}

/// Panic with the message of a failed layout check.
///
/// Draw paths call this where a caller broke a sizing precondition.
#[track_caller]
pub(crate) fn ensure<T>(check: Result<T, LayoutError>) -> T {
    match check {
        Ok(value) => value,
        Err(e) => panic!("layout precondition violated: {e}"),
    }
}
