//! Table and column configuration.

use std::collections::HashMap;

use crate::geometry::Cell;
use crate::source::DataSource;

/// Default for [`ColumnStyle::min_acceptable_width`]. Large enough that
/// columns are never squeezed unless a style asks for it.
pub const DEFAULT_MIN_ACCEPTABLE_WIDTH: usize = 100;

/// Default for [`TableStyle::max_cell_width`].
pub const DEFAULT_MAX_CELL_WIDTH: usize = 100;

/// Horizontal alignment of cell content. Carried for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Per-column layout constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnStyle {
    /// Hidden columns take no space and can never be selected.
    pub visible: bool,
    /// Lower bound on the rendered width.
    pub min_width: Option<usize>,
    /// Upper bound on the rendered width.
    pub max_width: Option<usize>,
    /// Smallest width this column may be squeezed to when it is the last one
    /// that would otherwise not fit.
    pub min_acceptable_width: usize,
    pub alignment: Alignment,
}

impl Default for ColumnStyle {
    fn default() -> Self {
        Self {
            visible: true,
            min_width: None,
            max_width: None,
            min_acceptable_width: DEFAULT_MIN_ACCEPTABLE_WIDTH,
            alignment: Alignment::Left,
        }
    }
}

impl ColumnStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hidden() -> Self {
        Self {
            visible: false,
            ..Default::default()
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn min_acceptable_width(mut self, width: usize) -> Self {
        self.min_acceptable_width = width;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Table-wide configuration.
///
/// # Examples
///
/// ```
/// use gridview::style::{ColumnStyle, TableStyle};
///
/// let style = TableStyle::new()
///     .smooth_horizontal_scrolling(false)
///     .full_row_select(true)
///     .column(2, ColumnStyle::hidden());
///
/// assert!(!style.is_column_visible(2));
/// assert_eq!(style.header_rows(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TableStyle {
    /// Styles keyed by logical column index. Missing entries use defaults.
    pub column_styles: HashMap<usize, ColumnStyle>,
    pub show_headers: bool,
    /// Underline row below the header. Only drawn with headers shown.
    pub show_header_underline: bool,
    /// Draw cell separators; also reserves a leading border cell at x = 0.
    pub show_vertical_cell_lines: bool,
    /// Grow the last rendered column to fill the remaining width.
    pub expand_last_column: bool,
    /// Reveal off-screen columns one at a time instead of snapping to them.
    pub smooth_horizontal_scrolling: bool,
    pub min_cell_width: usize,
    pub max_cell_width: usize,
    /// A selected cell selects every visible cell of its row.
    pub full_row_select: bool,
    /// Allow extending selections and multiple regions.
    pub multi_select: bool,
    /// Representation of empty cells.
    pub null_symbol: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            column_styles: HashMap::new(),
            show_headers: true,
            show_header_underline: true,
            show_vertical_cell_lines: true,
            expand_last_column: true,
            smooth_horizontal_scrolling: true,
            min_cell_width: 0,
            max_cell_width: DEFAULT_MAX_CELL_WIDTH,
            full_row_select: false,
            multi_select: true,
            null_symbol: "-".to_string(),
        }
    }
}

impl TableStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style of one column.
    pub fn column(mut self, col: usize, style: ColumnStyle) -> Self {
        self.column_styles.insert(col, style);
        self
    }

    pub fn show_headers(mut self, show: bool) -> Self {
        self.show_headers = show;
        self
    }

    pub fn show_header_underline(mut self, show: bool) -> Self {
        self.show_header_underline = show;
        self
    }

    pub fn show_vertical_cell_lines(mut self, show: bool) -> Self {
        self.show_vertical_cell_lines = show;
        self
    }

    pub fn expand_last_column(mut self, expand: bool) -> Self {
        self.expand_last_column = expand;
        self
    }

    pub fn smooth_horizontal_scrolling(mut self, smooth: bool) -> Self {
        self.smooth_horizontal_scrolling = smooth;
        self
    }

    pub fn min_cell_width(mut self, width: usize) -> Self {
        self.min_cell_width = width;
        self
    }

    pub fn max_cell_width(mut self, width: usize) -> Self {
        self.max_cell_width = width;
        self
    }

    pub fn full_row_select(mut self, enabled: bool) -> Self {
        self.full_row_select = enabled;
        self
    }

    pub fn multi_select(mut self, enabled: bool) -> Self {
        self.multi_select = enabled;
        self
    }

    pub fn null_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.null_symbol = symbol.into();
        self
    }

    /// Style for a column, falling back to the default.
    pub fn column_style(&self, col: usize) -> ColumnStyle {
        self.column_styles.get(&col).cloned().unwrap_or_default()
    }

    /// Mutable style for a column, inserting the default first.
    pub fn column_style_mut(&mut self, col: usize) -> &mut ColumnStyle {
        self.column_styles.entry(col).or_default()
    }

    pub fn is_column_visible(&self, col: usize) -> bool {
        self.column_styles.get(&col).is_none_or(|s| s.visible)
    }

    /// Screen rows above the data: header plus optional underline (0..=2).
    pub fn header_rows(&self) -> usize {
        match (self.show_headers, self.show_header_underline) {
            (false, _) => 0,
            (true, false) => 1,
            (true, true) => 2,
        }
    }

    /// x of the first column: 1 when a leading border cell is reserved.
    pub fn leading_border(&self) -> usize {
        usize::from(self.show_vertical_cell_lines)
    }
}

// =============================================================================
// Grid shape
// =============================================================================

/// Row/column extent of a grid plus column visibility.
///
/// Selection and viewport code work against this instead of the data
/// source, so they can be exercised without one.
#[derive(Debug, Clone, Copy)]
pub struct GridShape<'a> {
    pub rows: usize,
    pub columns: usize,
    style: &'a TableStyle,
}

impl<'a> GridShape<'a> {
    pub fn new(rows: usize, columns: usize, style: &'a TableStyle) -> Self {
        Self {
            rows,
            columns,
            style,
        }
    }

    pub fn of<S: DataSource + ?Sized>(source: &S, style: &'a TableStyle) -> Self {
        Self::new(source.row_count(), source.column_count(), style)
    }

    pub fn style(&self) -> &'a TableStyle {
        self.style
    }

    pub fn is_column_visible(&self, col: usize) -> bool {
        col < self.columns && self.style.is_column_visible(col)
    }

    /// Visible column indices, ascending.
    pub fn visible_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns).filter(|c| self.style.is_column_visible(*c))
    }

    pub fn visible_column_count(&self) -> usize {
        self.visible_columns().count()
    }

    /// No rows, or no visible columns.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.first_visible_column().is_none()
    }

    pub fn first_visible_column(&self) -> Option<usize> {
        self.visible_columns().next()
    }

    pub fn last_visible_column(&self) -> Option<usize> {
        (0..self.columns)
            .rev()
            .find(|c| self.style.is_column_visible(*c))
    }

    /// First visible column strictly after `col`.
    pub fn next_visible_column(&self, col: usize) -> Option<usize> {
        (col.saturating_add(1)..self.columns).find(|c| self.style.is_column_visible(*c))
    }

    /// Last visible column strictly before `col`.
    pub fn prev_visible_column(&self, col: usize) -> Option<usize> {
        (0..col.min(self.columns))
            .rev()
            .find(|c| self.style.is_column_visible(*c))
    }

    /// `col` itself when visible, else the next visible column, else the
    /// previous one.
    pub fn nearest_visible_column(&self, col: usize) -> Option<usize> {
        let col = col.min(self.columns.saturating_sub(1));
        if self.is_column_visible(col) {
            return Some(col);
        }
        self.next_visible_column(col)
            .or_else(|| self.prev_visible_column(col))
    }

    /// Move `cell` into the grid onto a visible column. `None` when the grid
    /// is empty.
    pub fn clamp_cell(&self, cell: Cell) -> Option<Cell> {
        if self.is_empty() {
            return None;
        }
        let col = self.nearest_visible_column(cell.col)?;
        Some(Cell::new(col, cell.row.min(self.rows - 1)))
    }

    /// Step `steps` visible columns right (positive) or left (negative) from
    /// `col`, stopping at the outermost visible column.
    pub fn step_visible_column(&self, col: usize, steps: isize) -> usize {
        let mut current = col;
        for _ in 0..steps.unsigned_abs() {
            let next = if steps > 0 {
                self.next_visible_column(current)
            } else {
                self.prev_visible_column(current)
            };
            match next {
                Some(c) => current = c,
                None => break,
            }
        }
        current
    }
}
