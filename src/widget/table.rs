//! Table: Grid-aligned rows or a centered flow of uniform cells.
//!
//! A table holds either [`Row`]s or loose [`Cell`]s, never both:
//!
//! - **Grid** ([`GridTable`]): every column is as wide as its widest cell
//!   across all rows, so rows line up vertically. Lines are ragged-right and
//!   padded out to the table width.
//! - **Flow** ([`FlowTable`]): all cells share the width of the widest one and
//!   are packed as many per line as fit. Full lines are centered; a short last
//!   line keeps the same left margin and is padded on the right.

use tracing::trace;

use super::cell::Cell;
use super::row::Row;
use super::traits::{write_padding, Widget};
use crate::error::{ensure, LayoutError};
use crate::terminal::Terminal;

/// Rows aligned into shared columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridTable {
    rows: Vec<Row>,
}

impl GridTable {
    /// Create an empty grid.
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a row.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// The rows, in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Width of each column: the widest cell found in that position.
    ///
    /// Rows may have different cell counts; the result is as long as the
    /// longest row.
    pub fn column_widths(&self, terminal: &dyn Terminal) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            if widths.len() < row.len() {
                widths.resize(row.len(), 0);
            }
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.width(terminal));
            }
        }
        widths
    }

    fn fits(column_widths: &[usize], width: usize) -> Result<(), LayoutError> {
        let needed: usize = column_widths.iter().sum();
        if needed > width {
            return Err(LayoutError::GridOverflow {
                needed,
                available: width,
            });
        }
        Ok(())
    }
}

impl Widget for GridTable {
    /// Draw one line per row, padded to `width`.
    ///
    /// A row shorter than the widest row uses only its leading columns.
    fn draw(&self, terminal: &mut dyn Terminal, width: usize) {
        if self.rows.is_empty() {
            return;
        }

        let column_widths = self.column_widths(terminal);
        ensure(Self::fits(&column_widths, width));
        trace!(?column_widths, width, "grid layout");

        for row in &self.rows {
            let columns = &column_widths[..row.len()];
            row.draw(terminal, columns);
            write_padding(terminal, width - columns.iter().sum::<usize>());
            terminal.write("\n");
        }
    }

    fn check(&self, terminal: &dyn Terminal, width: usize) -> Result<(), LayoutError> {
        let column_widths = self.column_widths(terminal);
        Self::fits(&column_widths, width)?;
        self.rows
            .iter()
            .try_for_each(|row| row.check(terminal, &column_widths[..row.len()]))
    }
}

impl FromIterator<Row> for GridTable {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Geometry of a flow table at a given width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowLayout {
    /// Uniform width given to every cell.
    pub cell_width: usize,
    /// Cells on each full line.
    pub cells_per_row: usize,
    /// Spaces before the first cell of every line.
    pub pad_left: usize,
    /// Spaces after the last cell of every full line.
    pub pad_right: usize,
}

impl FlowLayout {
    /// Compute the layout for cells of `cell_width` in a table of `width`.
    ///
    /// Divisions truncate; any odd column of slack goes to the right.
    pub const fn new(cell_width: usize, width: usize) -> Result<Self, LayoutError> {
        if cell_width == 0 {
            return Err(LayoutError::ZeroWidthCells);
        }
        let cells_per_row = width / cell_width;
        if cells_per_row == 0 {
            return Err(LayoutError::FlowTooNarrow { cell_width, width });
        }

        let used_width = cell_width * cells_per_row;
        let pad_left = (width - used_width) / 2;
        Ok(Self {
            cell_width,
            cells_per_row,
            pad_left,
            pad_right: width - used_width - pad_left,
        })
    }

    /// Columns taken by the cells of a full line.
    pub const fn used_width(&self) -> usize {
        self.cell_width * self.cells_per_row
    }

    /// Lines needed to lay out `cells` cells.
    pub const fn line_count(&self, cells: usize) -> usize {
        cells.div_ceil(self.cells_per_row)
    }
}

/// Loose cells packed into centered lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowTable {
    cells: Vec<Cell>,
}

impl FlowTable {
    /// Create an empty flow.
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Append a cell.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// The cells, in display order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Width of the widest cell; every cell is drawn this wide.
    pub fn cell_width(&self, terminal: &dyn Terminal) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.width(terminal))
            .max()
            .unwrap_or(0)
    }

    /// Layout these cells would get in a table of `width`.
    pub fn flow_layout(&self, terminal: &dyn Terminal, width: usize) -> Result<FlowLayout, LayoutError> {
        FlowLayout::new(self.cell_width(terminal), width)
    }
}

impl Widget for FlowTable {
    fn draw(&self, terminal: &mut dyn Terminal, width: usize) {
        if self.cells.is_empty() {
            return;
        }

        let layout = ensure(self.flow_layout(terminal, width));
        trace!(?layout, width, cells = self.cells.len(), "flow layout");

        let line_break = format!(
            "{}\n{}",
            " ".repeat(layout.pad_right),
            " ".repeat(layout.pad_left)
        );

        write_padding(terminal, layout.pad_left);
        let mut offset = 0;
        for cell in &self.cells {
            if offset == layout.cells_per_row {
                terminal.write(&line_break);
                offset = 0;
            }
            cell.draw(terminal, layout.cell_width);
            offset += 1;
        }

        write_padding(terminal, width - layout.cell_width * offset - layout.pad_left);
        terminal.write("\n");
    }

    fn check(&self, terminal: &dyn Terminal, width: usize) -> Result<(), LayoutError> {
        if self.cells.is_empty() {
            return Ok(());
        }
        self.flow_layout(terminal, width).map(|_| ())
    }
}

impl FromIterator<Cell> for FlowTable {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// A table in one of its two layout modes.
///
/// Build the content as a [`GridTable`] or [`FlowTable`] first, then convert
/// with `From`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Table {
    /// Rows aligned into shared columns.
    Grid(GridTable),
    /// Uniform cells wrapped into centered lines.
    Flow(FlowTable),
}

impl Table {
    /// Check if the table has no content.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Grid(grid) => grid.rows().is_empty(),
            Self::Flow(flow) => flow.cells().is_empty(),
        }
    }
}

impl From<GridTable> for Table {
    fn from(grid: GridTable) -> Self {
        Self::Grid(grid)
    }
}

impl From<FlowTable> for Table {
    fn from(flow: FlowTable) -> Self {
        Self::Flow(flow)
    }
}

impl Widget for Table {
    fn draw(&self, terminal: &mut dyn Terminal, width: usize) {
        match self {
            Self::Grid(grid) => grid.draw(terminal, width),
            Self::Flow(flow) => flow.draw(terminal, width),
        }
    }

    fn check(&self, terminal: &dyn Terminal, width: usize) -> Result<(), LayoutError> {
        match self {
            Self::Grid(grid) => grid.check(terminal, width),
            Self::Flow(flow) => flow.check(terminal, width),
        }
    }
}
