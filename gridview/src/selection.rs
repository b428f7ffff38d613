//! Cell selection: the active cell plus a stack of rectangular regions.
//!
//! Regions are kept oldest-first in a `Vec` and read back most-recent-first.
//! The collection is only ever pushed to, retained, or rebuilt from a filter
//! pass; the union logic for toggling lives in
//! [`SelectionModel::toggle_active_selection`] alone.
//!
//! Every operation takes a [`GridShape`] describing the grid as it is now,
//! so stale regions are clipped at the point of use and never read out of
//! range.

use std::collections::HashSet;

use crate::error::GridError;
use crate::geometry::{Cell, CellRect};
use crate::style::GridShape;

/// A rectangular block of selected cells anchored at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRegion {
    /// The active cell when the region was started. Extending a region
    /// spans from here to the new active cell.
    pub origin: Cell,
    pub rect: CellRect,
    /// Produced by an explicit toggle (checkbox-style) rather than by cursor
    /// movement. Toggled regions ignore cursor movement.
    pub is_toggled: bool,
}

impl SelectionRegion {
    /// A 1x1 cursor region.
    pub fn single(cell: Cell) -> Self {
        Self {
            origin: cell,
            rect: CellRect::single(cell),
            is_toggled: false,
        }
    }

    /// A region from explicit bounds. Fails when the bounds are empty.
    pub fn new(
        origin: Cell,
        col: usize,
        row: usize,
        width: usize,
        height: usize,
        is_toggled: bool,
    ) -> Result<Self, GridError> {
        Ok(Self {
            origin,
            rect: CellRect::new(col, row, width, height)?,
            is_toggled,
        })
    }

    /// The region spanning `origin` to `end`.
    pub fn spanning(origin: Cell, end: Cell) -> Self {
        Self {
            origin,
            rect: CellRect::from_corners(origin, end),
            is_toggled: false,
        }
    }

    fn toggled(origin: Cell, rect: CellRect) -> Self {
        Self {
            origin,
            rect,
            is_toggled: true,
        }
    }
}

/// Active cell and selected regions of a grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionModel {
    active: Cell,
    regions: Vec<SelectionRegion>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cursor cell.
    pub fn active(&self) -> Cell {
        self.active
    }

    /// Regions, most recent first.
    pub fn regions(&self) -> impl Iterator<Item = &SelectionRegion> {
        self.regions.iter().rev()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Toggled regions, most recent first.
    pub fn toggled_regions(&self) -> impl Iterator<Item = &SelectionRegion> {
        self.regions().filter(|r| r.is_toggled)
    }

    /// Push a region onto the stack. The rect is clipped to the grid; a
    /// region entirely outside it is rejected.
    pub fn push_region(
        &mut self,
        region: SelectionRegion,
        shape: GridShape<'_>,
    ) -> Result<(), GridError> {
        let rect = region
            .rect
            .clip(shape.columns, shape.rows)
            .ok_or(GridError::InvalidRegion {
                width: 0,
                height: 0,
            })?;
        self.regions.push(SelectionRegion {
            origin: clamp_into(region.origin, &rect),
            rect,
            ..region
        });
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Move the active cell to `(col, row)`.
    ///
    /// The target is clamped into the grid and onto a visible column, so
    /// moving past an edge leaves everything where it was. Without `extend`
    /// (or with multi-select off) non-toggled regions are dropped and a fresh
    /// 1x1 region starts at the target. With `extend` the most recent
    /// non-toggled region is stretched from its origin to the target.
    ///
    /// Returns true when the active cell changed.
    pub fn set_selection(&mut self, col: usize, row: usize, extend: bool, shape: GridShape<'_>) -> bool {
        let Some(target) = shape.clamp_cell(Cell::new(col, row)) else {
            return false;
        };
        let previous = self.active;
        let extend = extend && shape.style().multi_select;

        if extend {
            let index = match self.regions.iter().rposition(|r| !r.is_toggled) {
                Some(index) => index,
                None => {
                    let anchor = shape.clamp_cell(self.active).unwrap_or(target);
                    self.regions.push(SelectionRegion::single(anchor));
                    self.regions.len() - 1
                }
            };
            let region = &mut self.regions[index];
            let origin = shape.clamp_cell(region.origin).unwrap_or(target);
            *region = SelectionRegion::spanning(origin, target);
        } else {
            self.regions.retain(|r| r.is_toggled);
            self.regions.push(SelectionRegion::single(target));
        }

        self.active = target;
        previous != target
    }

    /// Select every cell. Existing toggles are kept; the active cell stays.
    pub fn select_all(&mut self, shape: GridShape<'_>) -> bool {
        if !shape.style().multi_select || shape.is_empty() {
            return false;
        }
        let (Some(first), Some(last)) = (shape.first_visible_column(), shape.last_visible_column())
        else {
            return false;
        };
        self.regions.retain(|r| r.is_toggled);
        self.regions.push(SelectionRegion::spanning(
            Cell::new(first, 0),
            Cell::new(last, shape.rows - 1),
        ));
        true
    }

    /// Drop every region, toggled or not.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Flip the checked state of the current selection.
    ///
    /// The current selection is the most recent non-toggled region, or the
    /// active cell when there is none. The rect is cut out of the toggled
    /// regions when every one of its cells is toggled, or when it touches at
    /// least one toggled region and encloses each region it touches (so
    /// spanning two separate toggles clears both, gaps included). Otherwise
    /// the whole rect becomes toggled and is unioned with earlier toggles.
    /// Touching toggled rects are merged afterwards, so toggling the same
    /// footprint twice always restores the previous state.
    ///
    /// Returns true when the selection ended up toggled on.
    pub fn toggle_active_selection(&mut self, shape: GridShape<'_>) -> bool {
        let Some((current, rect)) = self.current_selection(shape) else {
            return false;
        };
        let targets: Vec<Cell> = region_cells(rect, shape).collect();
        let mut touched = self
            .regions
            .iter()
            .filter(|r| r.is_toggled && r.rect.overlaps(&rect))
            .peekable();
        let encloses_toggles =
            touched.peek().is_some() && touched.all(|r| rect.contains_rect(&r.rect));
        let all_toggled =
            encloses_toggles || targets.iter().all(|cell| self.is_toggled(*cell));

        let mut next = Vec::with_capacity(self.regions.len() + 4);
        for region in self.regions.drain(..) {
            if region.is_toggled && region.rect.overlaps(&rect) {
                for part in region.rect.subtract(&rect) {
                    next.push(SelectionRegion::toggled(clamp_into(region.origin, &part), part));
                }
            } else {
                next.push(region);
            }
        }
        self.regions = next;

        if !all_toggled {
            self.regions
                .push(SelectionRegion::toggled(clamp_into(current.origin, &rect), rect));
        }
        self.coalesce_toggled();

        log::debug!(
            "toggle {} over {}x{} at {}",
            if all_toggled { "off" } else { "on" },
            rect.width,
            rect.height,
            Cell::new(rect.col, rect.row)
        );
        !all_toggled
    }

    /// The region a toggle acts on and its rect, clipped to the grid and
    /// widened to whole rows under full-row select. `None` when it covers no
    /// visible cell.
    fn current_selection(&self, shape: GridShape<'_>) -> Option<(SelectionRegion, CellRect)> {
        if shape.is_empty() {
            return None;
        }
        let current = self
            .regions
            .iter()
            .rev()
            .find(|r| !r.is_toggled)
            .copied()
            .unwrap_or_else(|| SelectionRegion::single(self.active));

        let mut rect = current.rect.clip(shape.columns, shape.rows)?;
        if shape.style().full_row_select {
            rect = CellRect {
                col: 0,
                width: shape.columns,
                ..rect
            };
        }
        region_cells(rect, shape).next()?;
        Some((current, rect))
    }

    /// Rows the next toggle would act on, ascending.
    pub fn toggle_rows(&self, shape: GridShape<'_>) -> Vec<usize> {
        self.current_selection(shape)
            .map(|(_, rect)| (rect.row..rect.bottom()).collect())
            .unwrap_or_default()
    }

    /// Merge toggled regions whose union is a rectangle. The merged region
    /// takes the stack slot of the more recent one.
    fn coalesce_toggled(&mut self) {
        'restart: loop {
            for j in (0..self.regions.len()).rev() {
                if !self.regions[j].is_toggled {
                    continue;
                }
                for i in (0..j).rev() {
                    if !self.regions[i].is_toggled {
                        continue;
                    }
                    if let Some(merged) = self.regions[i].rect.merge(&self.regions[j].rect) {
                        let origin = clamp_into(self.regions[j].origin, &merged);
                        self.regions[j] = SelectionRegion::toggled(origin, merged);
                        self.regions.remove(i);
                        continue 'restart;
                    }
                }
            }
            break;
        }
    }

    /// Clip regions and the active cell to the grid after a data mutation.
    ///
    /// Regions left with no cells are removed from the stack.
    pub fn reconcile(&mut self, shape: GridShape<'_>) {
        let before = self.regions.len();
        self.regions = self
            .regions
            .drain(..)
            .filter_map(|region| {
                let rect = region.rect.clip(shape.columns, shape.rows)?;
                Some(SelectionRegion {
                    origin: clamp_into(region.origin, &rect),
                    rect,
                    ..region
                })
            })
            .collect();
        if self.regions.len() != before {
            log::debug!(
                "reconcile dropped {} region(s) outside {}x{}",
                before - self.regions.len(),
                shape.columns,
                shape.rows
            );
        }
        self.active = shape.clamp_cell(self.active).unwrap_or_default();
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Whether a cell is selected. Hidden columns never are.
    pub fn is_selected(&self, col: usize, row: usize, shape: GridShape<'_>) -> bool {
        if !shape.is_column_visible(col) || row >= shape.rows {
            return false;
        }
        let full_row = shape.style().full_row_select;
        self.regions
            .iter()
            .any(|r| r.rect.contains(col, row) || (full_row && r.rect.contains_row(row)))
    }

    /// Whether a cell is covered by a toggled region.
    pub fn is_toggled(&self, cell: Cell) -> bool {
        self.regions
            .iter()
            .any(|r| r.is_toggled && r.rect.contains(cell.col, cell.row))
    }

    /// Every selected cell, de-duplicated: regions most recent first, then
    /// row-major within each region. Computed lazily on each call.
    pub fn selected_cells<'s>(&'s self, shape: GridShape<'s>) -> impl Iterator<Item = Cell> + 's {
        let mut seen = HashSet::new();
        self.regions
            .iter()
            .rev()
            .flat_map(move |region| region_cells(region.rect, shape))
            .filter(move |cell| seen.insert(*cell))
    }

    /// Rows containing at least one selected cell, ascending.
    pub fn selected_rows(&self, shape: GridShape<'_>) -> Vec<usize> {
        let mut rows: Vec<usize> = self.selected_cells(shape).map(|c| c.row).collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }
}

/// Cells of `rect` inside the grid on visible columns, row-major. Full-row
/// selection widens each row to every visible column.
fn region_cells<'s>(rect: CellRect, shape: GridShape<'s>) -> impl Iterator<Item = Cell> + 's {
    let (col_start, col_end) = if shape.style().full_row_select {
        (0, shape.columns)
    } else {
        (rect.col, rect.right().min(shape.columns))
    };
    let rows = rect.row.min(shape.rows)..rect.bottom().min(shape.rows);
    rows.flat_map(move |row| {
        (col_start..col_end)
            .filter(move |c| shape.is_column_visible(*c))
            .map(move |col| Cell::new(col, row))
    })
}

/// Nearest cell to `cell` inside `rect`.
fn clamp_into(cell: Cell, rect: &CellRect) -> Cell {
    Cell::new(
        cell.col.clamp(rect.col, rect.right() - 1),
        cell.row.clamp(rect.row, rect.bottom() - 1),
    )
}
