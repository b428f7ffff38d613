//! Scroll offsets of a table and the algorithms that keep them valid.

use std::ops::Range;

use crate::geometry::Cell;
use crate::layout::{ColumnLayout, ColumnLayoutEngine};
use crate::source::DataSource;
use crate::style::{GridShape, TableStyle};

/// What part of the grid is on screen.
///
/// `row_offset` and `column_offset` are the logical indices of the first
/// shown row and column. `visible_width`/`visible_height` are the screen
/// cells available to the table, header rows included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
    pub row_offset: usize,
    pub column_offset: usize,
    pub visible_width: usize,
    pub visible_height: usize,
}

impl ViewportState {
    pub fn new(visible_width: usize, visible_height: usize) -> Self {
        Self {
            visible_width,
            visible_height,
            ..Default::default()
        }
    }

    pub fn resize(&mut self, visible_width: usize, visible_height: usize) {
        self.visible_width = visible_width;
        self.visible_height = visible_height;
    }

    /// Data rows that fit below the header.
    pub fn visible_row_count(&self, header_rows: usize) -> usize {
        self.visible_height.saturating_sub(header_rows)
    }

    /// Logical rows currently on screen.
    pub fn visible_rows(&self, header_rows: usize, total_rows: usize) -> Range<usize> {
        let start = self.row_offset.min(total_rows);
        let end = (self.row_offset + self.visible_row_count(header_rows)).min(total_rows);
        start..end
    }

    /// Clamp both offsets into `[0, total - 1]`; an empty grid resets both
    /// to zero.
    pub fn ensure_valid_offsets(&mut self, total_rows: usize, total_cols: usize) {
        if total_rows == 0 || total_cols == 0 {
            self.row_offset = 0;
            self.column_offset = 0;
            return;
        }
        self.row_offset = self.row_offset.min(total_rows - 1);
        self.column_offset = self.column_offset.min(total_cols - 1);
    }

    /// Lay out columns for the current offsets.
    pub fn column_layout<S: DataSource + ?Sized>(
        &self,
        source: &S,
        style: &TableStyle,
    ) -> ColumnLayout {
        let rows = self.visible_rows(style.header_rows(), source.row_count());
        ColumnLayoutEngine::new(source, style).layout(self.column_offset, rows, self.visible_width)
    }

    /// Scroll the minimum amount so `row` is on screen.
    pub fn ensure_row_visible(&mut self, row: usize, header_rows: usize) {
        let count = self.visible_row_count(header_rows);
        if row < self.row_offset || count == 0 {
            self.row_offset = row;
        } else if row >= self.row_offset + count {
            self.row_offset = row + 1 - count;
        }
    }

    /// Scroll so `active` is on screen.
    ///
    /// Rows move the minimum distance. Columns left of the offset snap the
    /// offset to them. Columns right of the view either advance the offset
    /// one visible column at a time until the active column is placed whole
    /// (`smooth`), or jump the offset straight to the active column.
    pub fn ensure_selected_cell_visible<S: DataSource + ?Sized>(
        &mut self,
        active: Cell,
        smooth: bool,
        source: &S,
        style: &TableStyle,
    ) {
        let shape = GridShape::of(source, style);
        if shape.is_empty() {
            return;
        }

        self.ensure_row_visible(active.row, style.header_rows());

        if active.col < self.column_offset {
            self.column_offset = active.col;
            return;
        }
        if self.is_column_fully_visible(active.col, source, style) {
            return;
        }

        if !smooth {
            log::trace!("snapping column offset to {}", active.col);
            self.column_offset = active.col;
            return;
        }

        while !self.is_column_fully_visible(active.col, source, style) {
            match shape.next_visible_column(self.column_offset) {
                Some(next) if next <= active.col => self.column_offset = next,
                _ => break,
            }
        }
        log::trace!("smooth scroll settled at column offset {}", self.column_offset);
    }

    /// True when the layout places `col` at its full candidate width, or as
    /// the first column (which is shown even when squeezed).
    fn is_column_fully_visible<S: DataSource + ?Sized>(
        &self,
        col: usize,
        source: &S,
        style: &TableStyle,
    ) -> bool {
        let layout = self.column_layout(source, style);
        let Some(placed) = layout.get(col) else {
            return false;
        };
        if layout.columns.first().is_some_and(|first| first.index == col) {
            return true;
        }
        let engine = ColumnLayoutEngine::new(source, style);
        let rows = self.visible_rows(style.header_rows(), source.row_count());
        placed.width >= engine.candidate_width(col, engine.content_width(col, rows))
    }

    /// Move the offsets by whole rows and visible columns, then re-clamp.
    pub fn scroll_by(&mut self, delta_rows: isize, delta_cols: isize, shape: GridShape<'_>) {
        self.row_offset = self.row_offset.saturating_add_signed(delta_rows);
        if delta_cols != 0
            && let Some(start) = shape.nearest_visible_column(self.column_offset)
        {
            self.column_offset = shape.step_visible_column(start, delta_cols);
        }
        self.ensure_valid_offsets(shape.rows, shape.columns);
    }
}
