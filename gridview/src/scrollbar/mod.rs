//! Scrollbars bound to a scrolling host.
//!
//! Bars live in a [`ScrollBars`] arena and refer to their orthogonal partner
//! by [`ScrollBarId`]. Content size and position flow in from the host
//! ([`ScrollBars::sync_host`]); dragging a bar pushes the position back out
//! ([`ScrollBars::set_position`]), after which the host's offset is read back
//! as the authoritative value.
//!
//! Mouse drags need exclusive input. Whoever dispatches mouse events owns a
//! [`GrabArbiter`] and hands it to the bars; [`MouseGrab`] is the plain
//! single-slot implementation.

mod state;

use std::fmt;

pub use state::{ScrollBarState, ScrollBars};

/// Axis a scrollbar moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn other(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Pick this axis' component out of an `(x, y)` pair.
    pub fn along(self, (x, y): (usize, usize)) -> usize {
        match self {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        }
    }

    /// Replace this axis' component of an `(x, y)` pair.
    pub fn with(self, (x, y): (usize, usize), value: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (value, y),
            Orientation::Vertical => (x, value),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Handle to a bar in a [`ScrollBars`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScrollBarId(pub(crate) usize);

impl fmt::Display for ScrollBarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Content a pair of scrollbars scrolls.
///
/// All pairs are `(horizontal, vertical)` in the host's own scroll units.
pub trait HostContentView {
    /// Total scrollable extent.
    fn content_size(&self) -> (usize, usize);

    /// How much of the content is on screen at once.
    fn viewport_size(&self) -> (usize, usize);

    fn offset(&self) -> (usize, usize);

    /// Request a new offset. The host may clamp or adjust it; callers read
    /// [`offset`](HostContentView::offset) back afterwards.
    fn set_offset(&mut self, x: usize, y: usize);
}

/// Exclusive ownership of mouse-drag input.
pub trait GrabArbiter {
    /// The bar currently holding the grab.
    fn grabbed(&self) -> Option<ScrollBarId>;

    /// Give the grab to `id`, replacing any holder.
    fn grab(&mut self, id: ScrollBarId);

    /// Release the grab, returning the previous holder.
    fn release(&mut self) -> Option<ScrollBarId>;
}

/// Single-slot [`GrabArbiter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseGrab {
    holder: Option<ScrollBarId>,
}

impl MouseGrab {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GrabArbiter for MouseGrab {
    fn grabbed(&self) -> Option<ScrollBarId> {
        self.holder
    }

    fn grab(&mut self, id: ScrollBarId) {
        self.holder = Some(id);
    }

    fn release(&mut self) -> Option<ScrollBarId> {
        self.holder.take()
    }
}
