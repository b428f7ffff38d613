//! Check-column helpers for tables over a [`CheckBoxSource`].

use crate::source::{CheckBoxSource, DataSource};
use crate::style::GridShape;

use super::state::TableView;

impl<S: DataSource> TableView<CheckBoxSource<S>> {
    /// Flip the checked state of every row holding a selected cell, or of
    /// the active row when nothing is selected.
    pub fn toggle_checked_rows(&mut self) {
        let shape = GridShape::of(&self.source, &self.style);
        if shape.is_empty() {
            return;
        }
        let mut rows = self.selection.selected_rows(shape);
        if rows.is_empty() {
            rows.push(self.selection.active().row);
        }
        log::debug!("toggling {} checked row(s)", rows.len());
        self.source.toggle_rows(rows);
    }

    pub fn checked_rows(&self) -> Vec<usize> {
        self.source.checked_rows()
    }

    /// Check or uncheck every row. Ignored in radio mode.
    pub fn toggle_all_checked(&mut self) {
        self.source.toggle_all();
    }
}
