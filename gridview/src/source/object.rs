//! Grid of objects with getter columns.

use super::{CellValue, DataSource};

/// A named column that reads one value out of an object.
pub struct ObjectColumn<T> {
    pub name: String,
    getter: Box<dyn Fn(&T) -> CellValue>,
}

impl<T> ObjectColumn<T> {
    pub fn new<V, F>(name: impl Into<String>, getter: F) -> Self
    where
        F: Fn(&T) -> V + 'static,
        V: Into<CellValue>,
    {
        Self {
            name: name.into(),
            getter: Box::new(move |item| getter(item).into()),
        }
    }

    pub fn value(&self, item: &T) -> CellValue {
        (self.getter)(item)
    }
}

impl<T> std::fmt::Debug for ObjectColumn<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectColumn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// One row per object, one column per getter.
///
/// # Examples
///
/// ```
/// use gridview::source::{DataSource, ObjectColumn, ObjectSource};
///
/// struct User { name: String, age: i64 }
///
/// let source = ObjectSource::new(vec![User { name: "ada".into(), age: 36 }])
///     .column(ObjectColumn::new("Name", |u: &User| u.name.clone()))
///     .column(ObjectColumn::new("Age", |u: &User| u.age));
///
/// assert_eq!(source.column_count(), 2);
/// assert_eq!(source.cell_value(0, 1).to_string(), "36");
/// ```
#[derive(Debug)]
pub struct ObjectSource<T> {
    objects: Vec<T>,
    columns: Vec<ObjectColumn<T>>,
}

impl<T> ObjectSource<T> {
    pub fn new(objects: Vec<T>) -> Self {
        Self {
            objects,
            columns: Vec::new(),
        }
    }

    /// Builder: add a column.
    pub fn column(mut self, column: ObjectColumn<T>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    /// Mutable access to the backing objects. Callers that change the row
    /// count must reconcile the owning table afterwards.
    pub fn objects_mut(&mut self) -> &mut Vec<T> {
        &mut self.objects
    }

    pub fn get(&self, row: usize) -> Option<&T> {
        self.objects.get(row)
    }
}

impl<T> DataSource for ObjectSource<T> {
    fn row_count(&self) -> usize {
        self.objects.len()
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column_name(&self, col: usize) -> String {
        self.columns
            .get(col)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }

    fn cell_value(&self, row: usize, col: usize) -> CellValue {
        match (self.objects.get(row), self.columns.get(col)) {
            (Some(item), Some(column)) => column.value(item),
            _ => CellValue::Empty,
        }
    }
}
