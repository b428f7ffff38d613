use gridview::{Cell, HitResult, TableStyle, TableView, VecSource};

/// Columns of width 4 at x = 1, 6, 11, 16; headers on rows 0-1, data on
/// rows 2-5.
fn table(rows: usize) -> TableView<VecSource> {
    TableView::with_bounds(VecSource::filled(4, rows), TableStyle::new(), 20, 6)
}

#[test]
fn test_screen_to_cell_inside_columns() {
    let table = table(10);

    assert_eq!(table.screen_to_cell(1, 2), Some(Cell::new(0, 0)));
    assert_eq!(table.screen_to_cell(6, 3), Some(Cell::new(1, 1)));
    assert_eq!(table.screen_to_cell(19, 5), Some(Cell::new(3, 3)));
}

#[test]
fn test_separator_belongs_to_left_column() {
    let table = table(10);

    assert_eq!(table.screen_to_cell(5, 2), Some(Cell::new(0, 0)));
    assert_eq!(table.screen_to_cell(10, 2), Some(Cell::new(1, 0)));
}

#[test]
fn test_misses() {
    let table = table(10);

    assert_eq!(table.screen_to_cell(0, 2), None);
    assert_eq!(table.screen_to_cell(21, 2), None);
    assert_eq!(table.screen_to_cell(6, 0), None);
    assert_eq!(table.screen_to_cell(6, 6), None);
}

#[test]
fn test_row_past_data_misses() {
    let table = table(2);

    assert_eq!(table.screen_to_cell(1, 3), Some(Cell::new(0, 1)));
    assert_eq!(table.screen_to_cell(1, 4), None);
}

#[test]
fn test_header_rows_hit_header() {
    let table = table(10);

    assert_eq!(table.screen_to_cell_or_header(6, 0), Some(HitResult::Header(1)));
    assert_eq!(table.screen_to_cell_or_header(6, 1), Some(HitResult::Header(1)));
    assert_eq!(
        table.screen_to_cell_or_header(6, 2),
        Some(HitResult::Cell(Cell::new(1, 0)))
    );
    assert_eq!(table.screen_to_cell_or_header(0, 0), None);
}

#[test]
fn test_without_headers_first_row_is_data() {
    let style = TableStyle::new().show_headers(false);
    let table = TableView::with_bounds(VecSource::filled(4, 10), style, 20, 6);

    assert_eq!(
        table.screen_to_cell_or_header(1, 0),
        Some(HitResult::Cell(Cell::new(0, 0)))
    );
}

#[test]
fn test_hit_follows_row_offset() {
    let mut table = table(10);
    table.set_selection(0, 7, false);

    assert_eq!(table.viewport().row_offset, 4);
    assert_eq!(table.screen_to_cell(1, 2), Some(Cell::new(0, 4)));
}

#[test]
fn test_cell_to_screen_inverts_hit() {
    let table = table(10);

    assert_eq!(table.cell_to_screen(Cell::new(1, 1)), Some((6, 3)));
    assert_eq!(table.cell_to_screen(Cell::new(0, 5)), None);

    for row in 0..4 {
        for col in 0..4 {
            let cell = Cell::new(col, row);
            let (x, y) = table.cell_to_screen(cell).unwrap();
            assert_eq!(table.screen_to_cell(x, y), Some(cell));
        }
    }
}
