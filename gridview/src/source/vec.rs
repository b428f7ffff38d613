//! In-memory grid of values.

use super::{CellValue, DataSource};

/// A mutable grid of [`CellValue`]s with named columns.
///
/// Rows shorter than the column list read as empty cells.
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl VecSource {
    /// Create an empty source with the given column names.
    pub fn new<I, N>(columns: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Builder: append rows.
    pub fn with_rows<R, V>(mut self, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        for row in rows {
            self.push_row(row);
        }
        self
    }

    /// A `columns` x `rows` grid whose cells hold their own `"c{col}r{row}"`
    /// coordinates and whose columns are named `A`, `B`, ...
    pub fn filled(columns: usize, rows: usize) -> Self {
        let names = (0..columns).map(column_letter);
        let mut source = Self::new(names);
        for r in 0..rows {
            source.push_row((0..columns).map(|c| format!("c{c}r{r}")));
        }
        source
    }

    pub fn push_row<V: Into<CellValue>>(&mut self, values: impl IntoIterator<Item = V>) {
        self.rows.push(values.into_iter().map(Into::into).collect());
    }

    /// Insert a row before `index` (appends when past the end).
    pub fn insert_row<V: Into<CellValue>>(
        &mut self,
        index: usize,
        values: impl IntoIterator<Item = V>,
    ) {
        let index = index.min(self.rows.len());
        self.rows
            .insert(index, values.into_iter().map(Into::into).collect());
    }

    /// Remove a row, returning its values.
    pub fn remove_row(&mut self, index: usize) -> Option<Vec<CellValue>> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    /// Append a column; existing rows read it as empty.
    pub fn push_column(&mut self, name: impl Into<String>) {
        self.columns.push(name.into());
    }

    /// Remove a column and its values from every row.
    pub fn remove_column(&mut self, index: usize) -> Option<String> {
        if index >= self.columns.len() {
            return None;
        }
        for row in &mut self.rows {
            if index < row.len() {
                row.remove(index);
            }
        }
        Some(self.columns.remove(index))
    }

    /// Overwrite a cell, growing the row when needed. Out-of-range rows are
    /// ignored.
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<CellValue>) {
        if col >= self.columns.len() {
            return;
        }
        if let Some(values) = self.rows.get_mut(row) {
            if values.len() <= col {
                values.resize(col + 1, CellValue::Empty);
            }
            values[col] = value.into();
        }
    }

    pub fn clear_rows(&mut self) {
        self.rows.clear();
    }
}

impl DataSource for VecSource {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column_name(&self, col: usize) -> String {
        self.columns.get(col).cloned().unwrap_or_default()
    }

    fn cell_value(&self, row: usize, col: usize) -> CellValue {
        self.rows
            .get(row)
            .and_then(|values| values.get(col))
            .cloned()
            .unwrap_or_default()
    }
}

/// Spreadsheet-style column name: A..Z, AA, AB, ...
fn column_letter(mut index: usize) -> String {
    let mut name = Vec::new();
    loop {
        name.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}
