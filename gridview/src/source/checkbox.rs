//! Checkbox/radio column wrapper.

use std::collections::BTreeSet;

use super::{CellValue, DataSource};

/// Wraps a source and prepends a check column.
///
/// Column 0 reads as [`CellValue::Bool`]; the wrapped source's columns follow
/// shifted by one. Checked state is tracked by row index, so callers that
/// insert or remove rows in the inner source should mirror the change with
/// [`CheckBoxSource::row_inserted`] / [`CheckBoxSource::row_removed`].
#[derive(Debug, Clone)]
pub struct CheckBoxSource<S> {
    inner: S,
    checked: BTreeSet<usize>,
    radio: bool,
}

impl<S: DataSource> CheckBoxSource<S> {
    /// Index of the check column.
    pub const CHECK_COLUMN: usize = 0;

    /// Multi-check (checkbox) mode.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            checked: BTreeSet::new(),
            radio: false,
        }
    }

    /// Radio mode: at most one row is checked at a time.
    pub fn radio(inner: S) -> Self {
        Self {
            radio: true,
            ..Self::new(inner)
        }
    }

    pub fn is_radio(&self) -> bool {
        self.radio
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    pub fn is_checked(&self, row: usize) -> bool {
        self.checked.contains(&row)
    }

    /// Checked rows that still exist, ascending.
    pub fn checked_rows(&self) -> Vec<usize> {
        let rows = self.inner.row_count();
        self.checked.range(..rows).copied().collect()
    }

    pub fn set_checked(&mut self, row: usize, checked: bool) {
        if row >= self.inner.row_count() {
            return;
        }
        if checked {
            if self.radio {
                self.checked.clear();
            }
            self.checked.insert(row);
        } else {
            self.checked.remove(&row);
        }
    }

    /// Flip a set of rows as one unit.
    ///
    /// If every row is already checked they are all unchecked; otherwise all
    /// become checked. In radio mode only the first row is considered.
    pub fn toggle_rows(&mut self, rows: impl IntoIterator<Item = usize>) {
        let row_count = self.inner.row_count();
        let rows: BTreeSet<usize> = rows.into_iter().filter(|r| *r < row_count).collect();
        if rows.is_empty() {
            return;
        }

        if self.radio {
            if let Some(&row) = rows.first() {
                let checked = self.is_checked(row);
                self.set_checked(row, !checked);
            }
            return;
        }

        if rows.iter().all(|r| self.checked.contains(r)) {
            for row in &rows {
                self.checked.remove(row);
            }
        } else {
            self.checked.extend(rows);
        }
    }

    /// Check every row, or clear them all when every row is already checked.
    /// Radio mode ignores this.
    pub fn toggle_all(&mut self) {
        if self.radio {
            return;
        }
        let row_count = self.inner.row_count();
        if row_count > 0 && self.checked.range(..row_count).count() == row_count {
            self.checked.clear();
        } else {
            self.checked.extend(0..row_count);
        }
    }

    pub fn clear_checked(&mut self) {
        self.checked.clear();
    }

    /// Shift checked indices after a row was inserted at `row`.
    pub fn row_inserted(&mut self, row: usize) {
        self.checked = self
            .checked
            .iter()
            .map(|&r| if r >= row { r + 1 } else { r })
            .collect();
    }

    /// Drop and shift checked indices after the row at `row` was removed.
    pub fn row_removed(&mut self, row: usize) {
        self.checked = self
            .checked
            .iter()
            .filter(|&&r| r != row)
            .map(|&r| if r > row { r - 1 } else { r })
            .collect();
    }
}

impl<S: DataSource> DataSource for CheckBoxSource<S> {
    fn row_count(&self) -> usize {
        self.inner.row_count()
    }

    fn column_count(&self) -> usize {
        self.inner.column_count() + 1
    }

    fn column_name(&self, col: usize) -> String {
        match col {
            0 => String::new(),
            c => self.inner.column_name(c - 1),
        }
    }

    fn cell_value(&self, row: usize, col: usize) -> CellValue {
        if row >= self.inner.row_count() {
            return CellValue::Empty;
        }
        match col {
            0 => CellValue::Bool(self.is_checked(row)),
            c => self.inner.cell_value(row, c - 1),
        }
    }

    /// The check column header toggles every row; other headers go to the
    /// wrapped source.
    fn header_clicked(&mut self, col: usize) -> bool {
        match col {
            0 if self.radio => false,
            0 => {
                self.toggle_all();
                true
            }
            c => self.inner.header_clicked(c - 1),
        }
    }

    /// Clicking a check cell flips its row.
    fn cell_clicked(&mut self, row: usize, col: usize) -> bool {
        match col {
            0 => {
                self.toggle_rows([row]);
                true
            }
            c => self.inner.cell_clicked(row, c - 1),
        }
    }

    /// Toggled rows become checked, untoggled rows unchecked. Radio mode
    /// only follows the first row.
    fn rows_toggled(&mut self, rows: &[usize], toggled: bool) -> bool {
        let rows = if self.radio {
            &rows[..rows.len().min(1)]
        } else {
            rows
        };
        for &row in rows {
            self.set_checked(row, toggled);
        }
        self.inner.rows_toggled(rows, toggled) || !rows.is_empty()
    }
}
