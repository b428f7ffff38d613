//! Column layout: which columns fit on screen and how wide they are.
//!
//! Layout starts at the viewport's column offset and places visible columns
//! left to right, each followed by one separator cell, until the next one no
//! longer fits. A column is either placed whole (possibly squeezed down to
//! its minimum acceptable width) or not at all.

use std::ops::Range;

use crate::source::DataSource;
use crate::style::{GridShape, TableStyle};

/// A column placed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnToRender {
    /// Logical column index.
    pub index: usize,
    /// Screen x of the first content cell, relative to the table.
    pub x: usize,
    /// Rendered width, excluding the trailing separator.
    pub width: usize,
}

impl ColumnToRender {
    /// x of the separator cell after this column.
    pub fn separator_x(&self) -> usize {
        self.x + self.width
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    pub columns: Vec<ColumnToRender>,
    /// A visible column exists left of the offset.
    pub can_scroll_left: bool,
    /// A visible column exists right of the last placed column.
    pub can_scroll_right: bool,
}

impl ColumnLayout {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColumnToRender> {
        self.columns.iter().find(|c| c.index == index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// `(index, width)` pairs in screen order.
    pub fn widths(&self) -> Vec<(usize, usize)> {
        self.columns.iter().map(|c| (c.index, c.width)).collect()
    }
}

/// Computes [`ColumnLayout`]s for a source under a style.
#[derive(Debug)]
pub struct ColumnLayoutEngine<'a, S: ?Sized> {
    source: &'a S,
    style: &'a TableStyle,
}

impl<'a, S: DataSource + ?Sized> ColumnLayoutEngine<'a, S> {
    pub fn new(source: &'a S, style: &'a TableStyle) -> Self {
        Self { source, style }
    }

    /// Widest representation in `rows` of column `col`, header included
    /// when headers are shown.
    pub fn content_width(&self, col: usize, rows: Range<usize>) -> usize {
        let end = rows.end.min(self.source.row_count());
        let header = if self.style.show_headers {
            unicode_width::UnicodeWidthStr::width(self.source.column_name(col).as_str())
        } else {
            0
        };
        (rows.start..end)
            .map(|row| {
                self.source
                    .cell_value(row, col)
                    .display_width(&self.style.null_symbol)
            })
            .fold(header, usize::max)
    }

    /// Content width clamped to the table and column bounds. Never below 1.
    pub fn candidate_width(&self, col: usize, content_width: usize) -> usize {
        let column = self.style.column_style(col);
        let min = self.style.min_cell_width.max(column.min_width.unwrap_or(1));
        let max = self
            .style
            .max_cell_width
            .min(column.max_width.unwrap_or(usize::MAX));
        content_width.max(min).min(max).max(1)
    }

    /// Place columns starting at `column_offset` into `available_width`
    /// cells, measuring content over `rows`.
    pub fn layout(
        &self,
        column_offset: usize,
        rows: Range<usize>,
        available_width: usize,
    ) -> ColumnLayout {
        let shape = GridShape::of(self.source, self.style);
        if shape.first_visible_column().is_none() {
            return ColumnLayout::default();
        }

        let can_scroll_left = shape.prev_visible_column(column_offset).is_some();
        let mut placed: Vec<ColumnToRender> = Vec::new();
        let mut x = self.style.leading_border();

        for index in (column_offset..shape.columns).filter(|c| shape.is_column_visible(*c)) {
            let remaining = available_width.saturating_sub(x);
            if remaining == 0 {
                break;
            }

            let width = self.candidate_width(index, self.content_width(index, rows.clone()));
            if width <= remaining {
                placed.push(ColumnToRender { index, x, width });
                x += width + 1;
                continue;
            }

            // Doesn't fit whole. The first column is always shown; later ones
            // only if they accept being squeezed this far.
            let min_acceptable = self.style.column_style(index).min_acceptable_width;
            if placed.is_empty() || remaining >= min_acceptable {
                placed.push(ColumnToRender {
                    index,
                    x,
                    width: remaining,
                });
            }
            break;
        }

        if self.style.expand_last_column
            && let Some(last) = placed.last_mut()
        {
            last.width = last.width.max(available_width.saturating_sub(last.x));
        }

        let can_scroll_right = match placed.last() {
            Some(last) => shape.next_visible_column(last.index).is_some(),
            None => (column_offset..shape.columns).any(|c| shape.is_column_visible(c)),
        };

        ColumnLayout {
            columns: placed,
            can_scroll_left,
            can_scroll_right,
        }
    }
}

/// Convenience wrapper around [`ColumnLayoutEngine::layout`].
pub fn calculate_column_layout<S: DataSource + ?Sized>(
    source: &S,
    style: &TableStyle,
    column_offset: usize,
    rows: Range<usize>,
    available_width: usize,
) -> ColumnLayout {
    ColumnLayoutEngine::new(source, style).layout(column_offset, rows, available_width)
}
