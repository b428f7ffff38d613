//! Mapping between table-relative screen coordinates and logical cells.

use crate::geometry::Cell;
use crate::layout::ColumnLayout;
use crate::viewport::ViewportState;

/// What a screen position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResult {
    Cell(Cell),
    /// Header or header underline of a logical column.
    Header(usize),
}

/// Hit testing against one layout pass.
///
/// Coordinates are relative to the table's top-left corner. The separator
/// after a column belongs to that column.
#[derive(Debug, Clone, Copy)]
pub struct HitTester<'a> {
    layout: &'a ColumnLayout,
    viewport: &'a ViewportState,
    header_rows: usize,
    total_rows: usize,
}

impl<'a> HitTester<'a> {
    pub fn new(
        layout: &'a ColumnLayout,
        viewport: &'a ViewportState,
        header_rows: usize,
        total_rows: usize,
    ) -> Self {
        Self {
            layout,
            viewport,
            header_rows,
            total_rows,
        }
    }

    /// Logical column rendered at `x`.
    pub fn column_at(&self, x: usize) -> Option<usize> {
        self.layout
            .columns
            .iter()
            .find(|c| x >= c.x && x <= c.separator_x())
            .map(|c| c.index)
    }

    pub fn screen_to_cell(&self, x: usize, y: usize) -> Option<Cell> {
        if y < self.header_rows || y >= self.viewport.visible_height {
            return None;
        }
        let row = self.viewport.row_offset + (y - self.header_rows);
        if row >= self.total_rows {
            return None;
        }
        let col = self.column_at(x)?;
        Some(Cell::new(col, row))
    }

    pub fn screen_to_cell_or_header(&self, x: usize, y: usize) -> Option<HitResult> {
        if y < self.header_rows {
            return self.column_at(x).map(HitResult::Header);
        }
        self.screen_to_cell(x, y).map(HitResult::Cell)
    }

    /// Screen position of the first content cell of `cell`, when rendered.
    pub fn cell_to_screen(&self, cell: Cell) -> Option<(usize, usize)> {
        let column = self.layout.get(cell.col)?;
        if !self
            .viewport
            .visible_rows(self.header_rows, self.total_rows)
            .contains(&cell.row)
        {
            return None;
        }
        Some((column.x, self.header_rows + cell.row - self.viewport.row_offset))
    }
}
