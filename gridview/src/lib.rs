//! Grid selection, viewport and scrollbar engine for terminal tables.
//!
//! The crate decides which columns of a data grid fit on screen, keeps the
//! scroll offsets and the cell selection consistent while the data mutates,
//! and keeps a pair of scrollbars in step with the content they scroll.
//! Painting is left to the caller: everything here is state plus queries.

pub mod error;
pub mod geometry;
pub mod hit;
pub mod layout;
pub mod scrollbar;
pub mod selection;
pub mod source;
pub mod style;
pub mod table;
pub mod viewport;

pub use error::GridError;
pub use geometry::{Cell, CellRect};
pub use hit::{HitResult, HitTester};
pub use layout::{ColumnLayout, ColumnToRender};
pub use scrollbar::{
    GrabArbiter, HostContentView, MouseGrab, Orientation, ScrollBarId, ScrollBarState, ScrollBars,
};
pub use selection::{SelectionModel, SelectionRegion};
pub use source::{CellValue, CheckBoxSource, DataSource, ObjectSource, VecSource};
pub use style::{Alignment, ColumnStyle, GridShape, TableStyle};
pub use table::{EventResult, TableEvent, TableView};
pub use viewport::ViewportState;

pub mod prelude {
    pub use crate::error::GridError;
    pub use crate::geometry::{Cell, CellRect};
    pub use crate::scrollbar::{GrabArbiter, HostContentView, MouseGrab, Orientation, ScrollBars};
    pub use crate::source::{CellValue, CheckBoxSource, DataSource, ObjectSource, VecSource};
    pub use crate::style::{ColumnStyle, TableStyle};
    pub use crate::table::{EventResult, TableEvent, TableView};
    pub use gridterm::{KeyCommand, Motion, MouseEvent, MouseEventKind};
}
