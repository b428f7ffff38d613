//! Data sources feeding a table.
//!
//! A [`DataSource`] is read fresh on every query: the engine never caches
//! row counts or values across calls, since the data may change between
//! frames. Wrappers such as [`CheckBoxSource`] add behavior by composing a
//! base source rather than extending it.

mod checkbox;
mod object;
mod vec;

pub use checkbox::CheckBoxSource;
pub use object::{ObjectColumn, ObjectSource};
pub use vec::VecSource;

use unicode_width::UnicodeWidthStr;

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value. Rendered with the table's null symbol.
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// String form used for display and measurement.
    ///
    /// `null_symbol` stands in for [`CellValue::Empty`].
    pub fn representation(&self, null_symbol: &str) -> String {
        match self {
            CellValue::Empty => null_symbol.to_string(),
            other => other.to_string(),
        }
    }

    /// Terminal display width of the representation.
    pub fn display_width(&self, null_symbol: &str) -> usize {
        match self {
            CellValue::Empty => null_symbol.width(),
            CellValue::Text(s) => s.width(),
            other => other.to_string().width(),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// Anything with rows and named columns.
///
/// Out-of-range indices must not panic: return [`CellValue::Empty`] or an
/// empty name instead.
pub trait DataSource {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns, hidden ones included.
    fn column_count(&self) -> usize;

    /// Header text of a column.
    fn column_name(&self, col: usize) -> String;

    /// Value at a cell.
    fn cell_value(&self, row: usize, col: usize) -> CellValue;

    /// True when there are no rows or no columns.
    fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }

    /// A header was clicked. Sources that react to it (sorting, check-all)
    /// return true when they changed.
    fn header_clicked(&mut self, col: usize) -> bool {
        let _ = col;
        false
    }

    /// A data cell was clicked. Returns true when the source changed.
    fn cell_clicked(&mut self, row: usize, col: usize) -> bool {
        let _ = (row, col);
        false
    }

    /// The selection over `rows` was toggled on or off. Sources that track
    /// a per-row mark follow it and return true when they changed.
    fn rows_toggled(&mut self, rows: &[usize], toggled: bool) -> bool {
        let _ = (rows, toggled);
        false
    }
}

impl<S: DataSource + ?Sized> DataSource for &S {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn column_name(&self, col: usize) -> String {
        (**self).column_name(col)
    }

    fn cell_value(&self, row: usize, col: usize) -> CellValue {
        (**self).cell_value(row, col)
    }
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn column_name(&self, col: usize) -> String {
        (**self).column_name(col)
    }

    fn cell_value(&self, row: usize, col: usize) -> CellValue {
        (**self).cell_value(row, col)
    }

    fn header_clicked(&mut self, col: usize) -> bool {
        (**self).header_clicked(col)
    }

    fn cell_clicked(&mut self, row: usize, col: usize) -> bool {
        (**self).cell_clicked(row, col)
    }

    fn rows_toggled(&mut self, rows: &[usize], toggled: bool) -> bool {
        (**self).rows_toggled(rows, toggled)
    }
}
