//! Logical cell coordinates and rectangles.
//!
//! These index the data source, not the screen. Screen coordinates use
//! [`gridterm::Rect`].

use crate::error::GridError;

/// A logical cell: zero-based row and data-source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// A rectangular block of logical cells. Always at least 1x1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    pub col: usize,
    pub row: usize,
    pub width: usize,
    pub height: usize,
}

impl CellRect {
    /// Create a rectangle, rejecting empty bounds.
    pub fn new(col: usize, row: usize, width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidRegion { width, height });
        }
        Ok(Self {
            col,
            row,
            width,
            height,
        })
    }

    /// A single-cell rectangle.
    pub const fn single(cell: Cell) -> Self {
        Self {
            col: cell.col,
            row: cell.row,
            width: 1,
            height: 1,
        }
    }

    /// The normalized rectangle spanning two corner cells (inclusive).
    pub fn from_corners(a: Cell, b: Cell) -> Self {
        let col = a.col.min(b.col);
        let row = a.row.min(b.row);
        Self {
            col,
            row,
            width: a.col.max(b.col) - col + 1,
            height: a.row.max(b.row) - row + 1,
        }
    }

    /// One past the last column.
    pub const fn right(&self) -> usize {
        self.col + self.width
    }

    /// One past the last row.
    pub const fn bottom(&self) -> usize {
        self.row + self.height
    }

    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        col >= self.col && col < self.right() && row >= self.row && row < self.bottom()
    }

    pub fn contains_row(&self, row: usize) -> bool {
        row >= self.row && row < self.bottom()
    }

    /// True when every cell of `other` is inside `self`.
    pub fn contains_rect(&self, other: &CellRect) -> bool {
        other.col >= self.col
            && other.right() <= self.right()
            && other.row >= self.row
            && other.bottom() <= self.bottom()
    }

    pub fn overlaps(&self, other: &CellRect) -> bool {
        self.col < other.right()
            && self.right() > other.col
            && self.row < other.bottom()
            && self.bottom() > other.row
    }

    /// The overlapping part of two rectangles, if any.
    pub fn intersect(&self, other: &CellRect) -> Option<CellRect> {
        let col = self.col.max(other.col);
        let row = self.row.max(other.row);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right > col && bottom > row {
            Some(CellRect {
                col,
                row,
                width: right - col,
                height: bottom - row,
            })
        } else {
            None
        }
    }

    /// Clip to a grid of `columns` x `rows` cells starting at the origin.
    pub fn clip(&self, columns: usize, rows: usize) -> Option<CellRect> {
        let bounds = CellRect {
            col: 0,
            row: 0,
            width: columns,
            height: rows,
        };
        self.intersect(&bounds)
    }

    /// The cells of `self` not covered by `other`, as at most four
    /// non-overlapping rectangles (full-width bands above and below, then
    /// the left and right slices of the middle band).
    pub fn subtract(&self, other: &CellRect) -> Vec<CellRect> {
        let Some(hole) = self.intersect(other) else {
            return vec![*self];
        };

        let mut parts = Vec::with_capacity(4);
        if hole.row > self.row {
            parts.push(CellRect {
                col: self.col,
                row: self.row,
                width: self.width,
                height: hole.row - self.row,
            });
        }
        if hole.bottom() < self.bottom() {
            parts.push(CellRect {
                col: self.col,
                row: hole.bottom(),
                width: self.width,
                height: self.bottom() - hole.bottom(),
            });
        }
        if hole.col > self.col {
            parts.push(CellRect {
                col: self.col,
                row: hole.row,
                width: hole.col - self.col,
                height: hole.height,
            });
        }
        if hole.right() < self.right() {
            parts.push(CellRect {
                col: hole.right(),
                row: hole.row,
                width: self.right() - hole.right(),
                height: hole.height,
            });
        }
        parts
    }

    /// Merge two rectangles whose union is itself a rectangle: same column
    /// span touching vertically, or same row span touching horizontally.
    pub fn merge(&self, other: &CellRect) -> Option<CellRect> {
        if self.col == other.col && self.width == other.width {
            if self.bottom() == other.row {
                return Some(CellRect {
                    height: self.height + other.height,
                    ..*self
                });
            }
            if other.bottom() == self.row {
                return Some(CellRect {
                    height: self.height + other.height,
                    ..*other
                });
            }
        }
        if self.row == other.row && self.height == other.height {
            if self.right() == other.col {
                return Some(CellRect {
                    width: self.width + other.width,
                    ..*self
                });
            }
            if other.right() == self.col {
                return Some(CellRect {
                    width: self.width + other.width,
                    ..*other
                });
            }
        }
        None
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let CellRect {
            col,
            row,
            width,
            height,
        } = *self;
        (row..row + height).flat_map(move |r| (col..col + width).map(move |c| Cell::new(c, r)))
    }
}
