//! [`TableView`] state and navigation.

use std::ops::Range;

use crate::geometry::Cell;
use crate::hit::{HitResult, HitTester};
use crate::layout::ColumnLayout;
use crate::scrollbar::HostContentView;
use crate::selection::SelectionModel;
use crate::source::DataSource;
use crate::style::{GridShape, TableStyle};
use crate::viewport::ViewportState;

use super::events::TableEvent;

/// A scrollable, selectable view over a [`DataSource`].
///
/// Owns the source so every mutation can be followed by a reconcile pass.
/// Sources shared with other owners can be mutated out of band as long as
/// [`TableView::reconcile`] is called before the next query.
#[derive(Debug)]
pub struct TableView<S: DataSource> {
    pub(super) source: S,
    pub(super) style: TableStyle,
    pub(super) viewport: ViewportState,
    pub(super) selection: SelectionModel,
    pub(super) events: Vec<TableEvent>,
}

impl<S: DataSource> TableView<S> {
    pub fn new(source: S, style: TableStyle) -> Self {
        let mut table = Self {
            source,
            style,
            viewport: ViewportState::default(),
            selection: SelectionModel::new(),
            events: Vec::new(),
        };
        table.reconcile();
        table
    }

    /// Same as [`TableView::new`] followed by [`TableView::set_bounds`].
    pub fn with_bounds(source: S, style: TableStyle, width: usize, height: usize) -> Self {
        let mut table = Self::new(source, style);
        table.set_bounds(width, height);
        table
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn active_cell(&self) -> Cell {
        self.selection.active()
    }

    pub fn shape(&self) -> GridShape<'_> {
        GridShape::of(&self.source, &self.style)
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Mutate the source, then reconcile selection and offsets with it.
    pub fn update_source<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> R {
        let result = f(&mut self.source);
        self.reconcile();
        result
    }

    /// Change the style (column visibility, selection mode), then reconcile.
    pub fn update_style<R>(&mut self, f: impl FnOnce(&mut TableStyle) -> R) -> R {
        let result = f(&mut self.style);
        self.reconcile();
        result
    }

    /// Clip the selection to the current data and re-clamp the offsets.
    pub fn reconcile(&mut self) {
        let shape = GridShape::of(&self.source, &self.style);
        self.selection.reconcile(shape);
        self.viewport
            .ensure_valid_offsets(shape.rows, shape.columns);
    }

    /// Resize the area the table is drawn in, header rows included.
    pub fn set_bounds(&mut self, width: usize, height: usize) {
        self.viewport.resize(width, height);
        self.viewport
            .ensure_valid_offsets(self.source.row_count(), self.source.column_count());
        self.ensure_active_visible();
    }

    fn ensure_active_visible(&mut self) {
        self.viewport.ensure_selected_cell_visible(
            self.selection.active(),
            self.style.smooth_horizontal_scrolling,
            &self.source,
            &self.style,
        );
    }

    /// Scroll without moving the selection.
    pub fn scroll_by(&mut self, delta_rows: isize, delta_cols: isize) {
        let shape = GridShape::of(&self.source, &self.style);
        self.viewport.scroll_by(delta_rows, delta_cols, shape);
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Move the active cell, clamped into the grid. Returns true when it
    /// moved.
    pub fn set_selection(&mut self, col: usize, row: usize, extend: bool) -> bool {
        let shape = GridShape::of(&self.source, &self.style);
        let old = self.selection.active();
        let changed = self.selection.set_selection(col, row, extend, shape);
        self.ensure_active_visible();
        if changed {
            let new = self.selection.active();
            log::trace!("active cell {old} -> {new}");
            self.events.push(TableEvent::SelectedCellChanged { old, new });
        }
        changed
    }

    /// Move by `dx` visible columns and `dy` rows.
    pub fn change_selection_by_offset(&mut self, dx: isize, dy: isize, extend: bool) -> bool {
        let active = self.selection.active();
        let col = self.shape().step_visible_column(active.col, dx);
        let row = active.row.saturating_add_signed(dy);
        self.set_selection(col, row, extend)
    }

    pub fn page_up(&mut self, extend: bool) -> bool {
        let page = self.page_rows();
        self.change_selection_by_offset(0, -page, extend)
    }

    pub fn page_down(&mut self, extend: bool) -> bool {
        let page = self.page_rows();
        self.change_selection_by_offset(0, page, extend)
    }

    fn page_rows(&self) -> isize {
        let rows = self.viewport.visible_row_count(self.style.header_rows()).max(1);
        isize::try_from(rows).unwrap_or(isize::MAX)
    }

    pub fn change_selection_to_start_of_row(&mut self, extend: bool) -> bool {
        let Some(col) = self.shape().first_visible_column() else {
            return false;
        };
        self.set_selection(col, self.selection.active().row, extend)
    }

    pub fn change_selection_to_end_of_row(&mut self, extend: bool) -> bool {
        let Some(col) = self.shape().last_visible_column() else {
            return false;
        };
        self.set_selection(col, self.selection.active().row, extend)
    }

    pub fn change_selection_to_start_of_table(&mut self, extend: bool) -> bool {
        let Some(col) = self.shape().first_visible_column() else {
            return false;
        };
        self.set_selection(col, 0, extend)
    }

    pub fn change_selection_to_end_of_table(&mut self, extend: bool) -> bool {
        let shape = self.shape();
        let Some(col) = shape.last_visible_column() else {
            return false;
        };
        let row = shape.rows.saturating_sub(1);
        self.set_selection(col, row, extend)
    }

    pub fn select_all(&mut self) -> bool {
        let shape = GridShape::of(&self.source, &self.style);
        self.selection.select_all(shape)
    }

    /// Toggle the current selection. Returns true when it ended up toggled.
    ///
    /// The source hears about the rows involved through
    /// [`DataSource::rows_toggled`].
    pub fn toggle_active_selection(&mut self) -> bool {
        let shape = GridShape::of(&self.source, &self.style);
        let rows = self.selection.toggle_rows(shape);
        let toggled = self.selection.toggle_active_selection(shape);
        if !rows.is_empty() && self.source.rows_toggled(&rows, toggled) {
            self.reconcile();
        }
        self.events.push(TableEvent::SelectionToggled { toggled });
        toggled
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn is_selected(&self, col: usize, row: usize) -> bool {
        self.selection.is_selected(col, row, self.shape())
    }

    /// De-duplicated selected cells, most recent region first.
    pub fn selected_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.selection.selected_cells(self.shape())
    }

    /// Columns placed at the current offsets, in screen order.
    pub fn column_layout(&self) -> ColumnLayout {
        self.viewport.column_layout(&self.source, &self.style)
    }

    /// Logical indices of the columns on screen.
    pub fn visible_columns(&self) -> Vec<usize> {
        self.column_layout()
            .columns
            .iter()
            .map(|c| c.index)
            .collect()
    }

    /// Logical rows on screen.
    pub fn visible_rows(&self) -> Range<usize> {
        self.viewport
            .visible_rows(self.style.header_rows(), self.source.row_count())
    }

    pub fn screen_to_cell(&self, x: usize, y: usize) -> Option<Cell> {
        let layout = self.column_layout();
        self.hit_tester(&layout).screen_to_cell(x, y)
    }

    pub fn screen_to_cell_or_header(&self, x: usize, y: usize) -> Option<HitResult> {
        let layout = self.column_layout();
        self.hit_tester(&layout).screen_to_cell_or_header(x, y)
    }

    pub fn cell_to_screen(&self, cell: Cell) -> Option<(usize, usize)> {
        let layout = self.column_layout();
        self.hit_tester(&layout).cell_to_screen(cell)
    }

    fn hit_tester<'a>(&'a self, layout: &'a ColumnLayout) -> HitTester<'a> {
        HitTester::new(
            layout,
            &self.viewport,
            self.style.header_rows(),
            self.source.row_count(),
        )
    }

    /// Take the queued notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Horizontal units are visible columns, so hidden columns never take a
/// scrollbar position.
impl<S: DataSource> HostContentView for TableView<S> {
    fn content_size(&self) -> (usize, usize) {
        let shape = self.shape();
        (shape.visible_column_count(), shape.rows)
    }

    fn viewport_size(&self) -> (usize, usize) {
        (
            self.column_layout().columns.len(),
            self.viewport.visible_row_count(self.style.header_rows()),
        )
    }

    fn offset(&self) -> (usize, usize) {
        let shape = self.shape();
        let column = shape
            .visible_columns()
            .take_while(|c| *c < self.viewport.column_offset)
            .count();
        (column, self.viewport.row_offset)
    }

    fn set_offset(&mut self, x: usize, y: usize) {
        let shape = GridShape::of(&self.source, &self.style);
        if let Some(col) = shape
            .visible_columns()
            .nth(x)
            .or_else(|| shape.last_visible_column())
        {
            self.viewport.column_offset = col;
        }
        self.viewport.row_offset = y;
        self.viewport.ensure_valid_offsets(shape.rows, shape.columns);
    }
}
