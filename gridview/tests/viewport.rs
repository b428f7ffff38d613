use gridview::{Cell, ColumnStyle, GridShape, TableStyle, VecSource, ViewportState};
use proptest::prelude::*;

/// Six one-wide columns A..F with a single row.
fn narrow_grid() -> VecSource {
    VecSource::new(["A", "B", "C", "D", "E", "F"]).with_rows([["x", "x", "x", "x", "x", "x"]])
}

// =============================================================================
// Offsets
// =============================================================================

#[test]
fn test_ensure_valid_offsets_clamps() {
    let mut viewport = ViewportState::new(10, 10);
    viewport.row_offset = 50;
    viewport.column_offset = 9;

    viewport.ensure_valid_offsets(20, 4);

    assert_eq!(viewport.row_offset, 19);
    assert_eq!(viewport.column_offset, 3);
}

#[test]
fn test_ensure_valid_offsets_empty_grid_resets() {
    let mut viewport = ViewportState::new(10, 10);
    viewport.row_offset = 5;
    viewport.column_offset = 2;

    viewport.ensure_valid_offsets(0, 4);

    assert_eq!((viewport.row_offset, viewport.column_offset), (0, 0));
}

#[test]
fn test_visible_rows_exclude_header() {
    let mut viewport = ViewportState::new(10, 7);
    viewport.row_offset = 3;

    assert_eq!(viewport.visible_row_count(2), 5);
    assert_eq!(viewport.visible_rows(2, 100), 3..8);
    assert_eq!(viewport.visible_rows(2, 6), 3..6);
    assert_eq!(ViewportState::new(10, 1).visible_row_count(2), 0);
}

// =============================================================================
// Ensure visible
// =============================================================================

#[test]
fn test_snap_scrolling_jumps_to_column() {
    let source = narrow_grid();
    let style = TableStyle::new();
    let mut viewport = ViewportState::new(7, 5);

    assert_eq!(viewport.column_layout(&source, &style).columns.len(), 3);

    viewport.ensure_selected_cell_visible(Cell::new(3, 0), false, &source, &style);

    assert_eq!(viewport.column_offset, 3);
    let shown: Vec<usize> = viewport
        .column_layout(&source, &style)
        .columns
        .iter()
        .map(|c| c.index)
        .collect();
    assert_eq!(shown, vec![3, 4, 5]);
}

#[test]
fn test_smooth_scrolling_reveals_one_column() {
    let source = narrow_grid();
    let style = TableStyle::new();
    let mut viewport = ViewportState::new(7, 5);

    viewport.ensure_selected_cell_visible(Cell::new(3, 0), true, &source, &style);

    assert_eq!(viewport.column_offset, 1);
    let shown: Vec<usize> = viewport
        .column_layout(&source, &style)
        .columns
        .iter()
        .map(|c| c.index)
        .collect();
    assert_eq!(shown, vec![1, 2, 3]);
}

#[test]
fn test_column_left_of_offset_snaps() {
    let source = narrow_grid();
    let style = TableStyle::new();
    let mut viewport = ViewportState::new(7, 5);
    viewport.column_offset = 4;

    viewport.ensure_selected_cell_visible(Cell::new(1, 0), true, &source, &style);

    assert_eq!(viewport.column_offset, 1);
}

#[test]
fn test_smooth_scrolling_skips_hidden_columns() {
    let source = narrow_grid();
    let style = TableStyle::new().column(1, ColumnStyle::hidden());
    let mut viewport = ViewportState::new(7, 5);

    viewport.ensure_selected_cell_visible(Cell::new(4, 0), true, &source, &style);

    assert_eq!(viewport.column_offset, 2);
}

#[test]
fn test_visible_column_leaves_offset_alone() {
    let source = narrow_grid();
    let style = TableStyle::new();
    let mut viewport = ViewportState::new(7, 5);

    viewport.ensure_selected_cell_visible(Cell::new(2, 0), true, &source, &style);

    assert_eq!(viewport.column_offset, 0);
}

#[test]
fn test_rows_scroll_minimum_distance() {
    let source = VecSource::filled(2, 50);
    let style = TableStyle::new();
    let mut viewport = ViewportState::new(40, 7);

    viewport.ensure_selected_cell_visible(Cell::new(0, 10), true, &source, &style);
    assert_eq!(viewport.row_offset, 6);

    viewport.ensure_selected_cell_visible(Cell::new(0, 8), true, &source, &style);
    assert_eq!(viewport.row_offset, 6);

    viewport.ensure_selected_cell_visible(Cell::new(0, 2), true, &source, &style);
    assert_eq!(viewport.row_offset, 2);
}

// =============================================================================
// Scroll by
// =============================================================================

#[test]
fn test_scroll_by_clamps_and_skips_hidden() {
    let style = TableStyle::new().column(2, ColumnStyle::hidden());
    let shape = GridShape::new(10, 5, &style);
    let mut viewport = ViewportState::new(10, 5);

    viewport.scroll_by(3, 2, shape);
    assert_eq!((viewport.row_offset, viewport.column_offset), (3, 3));

    viewport.scroll_by(-10, -1, shape);
    assert_eq!((viewport.row_offset, viewport.column_offset), (0, 1));

    viewport.scroll_by(100, 100, shape);
    assert_eq!((viewport.row_offset, viewport.column_offset), (9, 4));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_ensure_valid_offsets_is_idempotent(
        row_offset in 0usize..200,
        column_offset in 0usize..50,
        rows in 0usize..100,
        cols in 0usize..30,
    ) {
        let mut once = ViewportState::new(20, 10);
        once.row_offset = row_offset;
        once.column_offset = column_offset;
        once.ensure_valid_offsets(rows, cols);

        let mut twice = once;
        twice.ensure_valid_offsets(rows, cols);

        prop_assert_eq!(once, twice);
        prop_assert!(once.row_offset <= rows.saturating_sub(1));
        prop_assert!(once.column_offset <= cols.saturating_sub(1));
    }

    #[test]
    fn prop_active_column_is_placed_after_ensure_visible(
        col in 0usize..6,
        smooth in any::<bool>(),
        start in 0usize..6,
    ) {
        let source = narrow_grid();
        let style = TableStyle::new();
        let mut viewport = ViewportState::new(7, 5);
        viewport.column_offset = start;

        viewport.ensure_selected_cell_visible(Cell::new(col, 0), smooth, &source, &style);

        prop_assert!(viewport.column_layout(&source, &style).contains(col));
    }
}
