//! Error types for the grid engine.
//!
//! Only configuration mistakes surface as errors. Out-of-range cursor
//! movement and stale cell references are absorbed by clamping.

use thiserror::Error;

use crate::scrollbar::{Orientation, ScrollBarId};

/// Errors returned by fallible grid operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Two scrollbars of the same orientation cannot be partners.
    #[error("cannot pair two {orientation} scrollbars")]
    OrientationConflict {
        /// Orientation shared by both bars.
        orientation: Orientation,
    },

    /// A selection rectangle must cover at least one cell.
    #[error("selection region of {width}x{height} cells cannot be normalized")]
    InvalidRegion { width: usize, height: usize },

    /// The handle does not refer to a live scrollbar.
    #[error("scrollbar {0} does not exist")]
    UnknownScrollBar(ScrollBarId),
}
