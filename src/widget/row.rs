//! Row: An ordered run of cells drawn against caller-supplied column widths.

use super::cell::Cell;
use super::traits::Widget;
use crate::error::{ensure, LayoutError};
use crate::terminal::Terminal;

/// A sequence of cells, displayed in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create an empty row.
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Create a row from cells.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// The cells of this row.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Append a cell.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Natural width: the sum of the cell widths.
    pub fn width(&self, terminal: &dyn Terminal) -> usize {
        self.cells.iter().map(|cell| cell.width(terminal)).sum()
    }

    /// Verify that [`Row::draw`] would accept `column_widths`.
    pub fn check(&self, terminal: &dyn Terminal, column_widths: &[usize]) -> Result<(), LayoutError> {
        if column_widths.len() != self.cells.len() {
            return Err(LayoutError::ColumnCountMismatch {
                cells: self.cells.len(),
                columns: column_widths.len(),
            });
        }

        let needed = self.width(terminal);
        let available: usize = column_widths.iter().sum();
        if needed > available {
            return Err(LayoutError::RowOverflow { needed, available });
        }

        self.cells
            .iter()
            .zip(column_widths)
            .try_for_each(|(cell, &width)| cell.check(terminal, width))
    }

    /// Draw each cell into its column, with no separators and no newline.
    ///
    /// # Panics
    ///
    /// Panics if `column_widths` does not have one entry per cell, or if the
    /// cells do not fit.
    pub fn draw(&self, terminal: &mut dyn Terminal, column_widths: &[usize]) {
        ensure(self.check(terminal, column_widths));

        for (cell, &width) in self.cells.iter().zip(column_widths) {
            cell.draw(terminal, width);
        }
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

impl Extend<Cell> for Row {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{markup, OutputBuffer};

    fn row(texts: &[&str]) -> Row {
        texts.iter().copied().map(Cell::new).collect()
    }

    #[test]
    fn test_row_width_sums_cells() {
        let out = OutputBuffer::new();
        let row = row(&["ab", "abcd", ""]);
        assert_eq!(row.len(), 3);
        assert_eq!(row.width(&out), 4 + 6);
    }

    #[test]
    fn test_row_add_cell_keeps_order() {
        let mut row = Row::new();
        assert!(row.is_empty());
        row.add_cell(Cell::new("a"));
        row.extend([Cell::new("b")]);
        let contents: Vec<_> = row.cells().iter().map(Cell::contents).collect();
        assert_eq!(contents, [" a ", " b "]);
    }

    #[test]
    fn test_row_draw_fills_columns() {
        let mut out = OutputBuffer::new();
        row(&["ab", "abcd"]).draw(&mut out, &[5, 8]);
        assert_eq!(out.as_str(), " ab   abcd   ");
        assert_eq!(markup::display_width(out.as_str()), 13);
    }

    #[test]
    fn test_row_output_width_matches_columns() {
        for widths in [[4, 6], [10, 6], [4, 20]] {
            let mut out = OutputBuffer::new();
            row(&["ab", "abcd"]).draw(&mut out, &widths);
            assert_eq!(markup::display_width(out.as_str()), widths.iter().sum::<usize>());
        }
    }

    #[test]
    fn test_row_check_column_count() {
        let out = OutputBuffer::new();
        assert_eq!(
            row(&["a", "b"]).check(&out, &[3]),
            Err(LayoutError::ColumnCountMismatch { cells: 2, columns: 1 })
        );
    }

    #[test]
    fn test_row_check_total_width() {
        let out = OutputBuffer::new();
        assert_eq!(
            row(&["abc", "d"]).check(&out, &[3, 3]),
            Err(LayoutError::RowOverflow { needed: 8, available: 6 })
        );
    }

    #[test]
    fn test_row_check_each_cell() {
        let out = OutputBuffer::new();
        assert_eq!(
            row(&["abc", "d"]).check(&out, &[3, 6]),
            Err(LayoutError::CellOverflow { needed: 5, available: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "row has 2 cells but 3 column widths were supplied")]
    fn test_row_draw_mismatch_panics() {
        let mut out = OutputBuffer::new();
        row(&["a", "b"]).draw(&mut out, &[3, 3, 3]);
    }
}
