//! Scrollbar state and the arena that links bars to a host.

use gridterm::{MouseButton, MouseEvent, MouseEventKind, Rect};

use super::{GrabArbiter, HostContentView, Orientation, ScrollBarId};
use crate::error::GridError;

/// One scrollbar.
///
/// `size` is the content extent and `position` the scroll offset, both in the
/// host's units. `extent` is the bar's own length, corner cell included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollBarState {
    pub orientation: Orientation,
    pub size: usize,
    pub position: usize,
    pub show_indicator: bool,
    /// Visibility follows whether the content overflows.
    pub auto_hide: bool,
    /// Clamp the position so a full viewport of content stays visible,
    /// rather than allowing scrolling until only the last unit is left.
    pub keep_content_in_viewport: bool,
    pub extent: usize,
    other: Option<ScrollBarId>,
    viewport_extent: usize,
    track: Option<Rect>,
    grab_offset: usize,
}

impl ScrollBarState {
    fn new(orientation: Orientation, extent: usize) -> Self {
        Self {
            orientation,
            size: 0,
            position: 0,
            show_indicator: false,
            auto_hide: true,
            keep_content_in_viewport: true,
            extent,
            other: None,
            viewport_extent: extent,
            track: None,
            grab_offset: 0,
        }
    }

    /// The orthogonal partner, if attached.
    pub fn partner(&self) -> Option<ScrollBarId> {
        self.other
    }

    /// Content visible at once along this axis, as of the last sync.
    pub fn viewport_extent(&self) -> usize {
        self.viewport_extent
    }

    /// Screen rectangle set by [`ScrollBars::set_track`].
    pub fn track(&self) -> Option<Rect> {
        self.track
    }

    /// Largest position the clamp rule allows.
    pub fn max_position(&self) -> usize {
        let keep = if self.keep_content_in_viewport {
            self.viewport_extent
        } else {
            1
        };
        self.size.saturating_sub(keep)
    }

    /// Thumb `(start, len)` within a track of `track_len` cells.
    pub fn thumb(&self, track_len: usize) -> (usize, usize) {
        if track_len == 0 {
            return (0, 0);
        }
        let viewport = self.viewport_extent.max(1);
        if self.size <= viewport {
            return (0, track_len);
        }
        let len = (track_len * viewport).div_ceil(self.size).clamp(1, track_len);
        let range = track_len - len;
        let max = self.max_position();
        let start = if max == 0 {
            0
        } else {
            (self.position.min(max) * range + max / 2) / max
        };
        (start, len)
    }

    /// Position whose thumb starts at `offset` cells into the track.
    pub fn position_from_track(&self, offset: usize, track_len: usize) -> usize {
        let (_, len) = self.thumb(track_len);
        let range = track_len.saturating_sub(len);
        if range == 0 {
            return 0;
        }
        let max = self.max_position();
        (offset.min(range) * max + range / 2) / range
    }

    fn refresh(&mut self, size: usize, viewport_extent: usize, position: usize) {
        self.size = size;
        self.viewport_extent = viewport_extent;
        if self.auto_hide {
            self.show_indicator = size > viewport_extent;
        }
        self.position = position.min(self.max_position());
    }

    /// Pointer coordinate along the track and the track length. Points past
    /// either end saturate.
    fn track_coordinate(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let track = self.track?;
        let (pointer, start, len) = match self.orientation {
            Orientation::Horizontal => (x, track.x, track.width),
            Orientation::Vertical => (y, track.y, track.height),
        };
        let rel = usize::from(pointer.saturating_sub(start)).min(usize::from(len));
        Some((rel, usize::from(len)))
    }
}

/// Arena of scrollbars addressed by [`ScrollBarId`].
///
/// Slots of destroyed bars are never reused, so a stale id reports
/// [`GridError::UnknownScrollBar`] instead of reaching another bar.
#[derive(Debug, Clone, Default)]
pub struct ScrollBars {
    bars: Vec<Option<ScrollBarState>>,
}

impl ScrollBars {
    pub fn new() -> Self {
        Self::default()
    }

    /// New auto-hiding bar that keeps a full viewport of content visible.
    pub fn create(&mut self, orientation: Orientation, extent: usize) -> ScrollBarId {
        self.bars.push(Some(ScrollBarState::new(orientation, extent)));
        ScrollBarId(self.bars.len() - 1)
    }

    pub fn get(&self, id: ScrollBarId) -> Option<&ScrollBarState> {
        self.bars.get(id.0).and_then(Option::as_ref)
    }

    pub fn bar(&self, id: ScrollBarId) -> Result<&ScrollBarState, GridError> {
        self.get(id).ok_or(GridError::UnknownScrollBar(id))
    }

    fn get_mut(&mut self, id: ScrollBarId) -> Result<&mut ScrollBarState, GridError> {
        self.bars
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(GridError::UnknownScrollBar(id))
    }

    /// Live bar ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = ScrollBarId> + '_ {
        self.bars
            .iter()
            .enumerate()
            .filter(|(_, bar)| bar.is_some())
            .map(|(index, _)| ScrollBarId(index))
    }

    pub fn len(&self) -> usize {
        self.ids().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -------------------------------------------------------------------------
    // Links
    // -------------------------------------------------------------------------

    /// Make `a` and `b` partners. Any previous partner of either is unlinked.
    pub fn attach(&mut self, a: ScrollBarId, b: ScrollBarId) -> Result<(), GridError> {
        let orientation = self.bar(a)?.orientation;
        if self.bar(b)?.orientation == orientation {
            log::warn!("refusing to pair {orientation} scrollbars {a} and {b}");
            return Err(GridError::OrientationConflict { orientation });
        }
        self.detach(a)?;
        self.detach(b)?;
        self.get_mut(a)?.other = Some(b);
        self.get_mut(b)?.other = Some(a);
        Ok(())
    }

    /// Unlink `id` from its partner, clearing both sides.
    pub fn detach(&mut self, id: ScrollBarId) -> Result<(), GridError> {
        let partner = self.get_mut(id)?.other.take();
        if let Some(partner) = partner
            && let Ok(bar) = self.get_mut(partner)
            && bar.other == Some(id)
        {
            bar.other = None;
        }
        Ok(())
    }

    /// Remove a bar. Its partner is unlinked and a grab it holds released.
    pub fn destroy(
        &mut self,
        id: ScrollBarId,
        grab: &mut dyn GrabArbiter,
    ) -> Result<ScrollBarState, GridError> {
        self.detach(id)?;
        if grab.grabbed() == Some(id) {
            grab.release();
            log::debug!("released grab held by destroyed scrollbar {id}");
        }
        self.bars
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(GridError::UnknownScrollBar(id))
    }

    fn partner_shown(&self, id: ScrollBarId) -> Result<bool, GridError> {
        Ok(self
            .bar(id)?
            .other
            .and_then(|partner| self.get(partner))
            .is_some_and(|partner| partner.show_indicator))
    }

    // -------------------------------------------------------------------------
    // Host synchronisation
    // -------------------------------------------------------------------------

    pub fn set_extent(&mut self, id: ScrollBarId, extent: usize) -> Result<(), GridError> {
        self.get_mut(id)?.extent = extent;
        Ok(())
    }

    /// Take a new content size and position for one bar.
    ///
    /// The viewport is the bar's extent, less the corner cell when the
    /// partner is shown. Returns the clamped position.
    pub fn sync_from_host(
        &mut self,
        id: ScrollBarId,
        size: usize,
        position: usize,
    ) -> Result<usize, GridError> {
        let corner = usize::from(self.partner_shown(id)?);
        let bar = self.get_mut(id)?;
        let viewport = bar.extent.saturating_sub(corner);
        bar.refresh(size, viewport, position);
        Ok(bar.position)
    }

    /// Read size, viewport and offset for `id` and its partner from `host`.
    ///
    /// Visibility of both bars is settled first. Each bar's viewport is then
    /// the host's, capped at the bar's extent less the corner cell when the
    /// partner is shown.
    pub fn sync_host(
        &mut self,
        id: ScrollBarId,
        host: &dyn HostContentView,
    ) -> Result<(), GridError> {
        let content = host.content_size();
        let viewport = host.viewport_size();
        let offset = host.offset();
        let partner = self.bar(id)?.other;
        let ids: Vec<ScrollBarId> = std::iter::once(id).chain(partner).collect();

        for &id in &ids {
            let bar = self.get_mut(id)?;
            if bar.auto_hide {
                let axis = bar.orientation;
                bar.show_indicator = axis.along(content) > axis.along(viewport);
            }
        }
        for &id in &ids {
            let corner = usize::from(self.partner_shown(id)?);
            let bar = self.get_mut(id)?;
            let axis = bar.orientation;
            let extent = axis.along(viewport).min(bar.extent.saturating_sub(corner));
            bar.refresh(axis.along(content), extent, axis.along(offset));
        }
        Ok(())
    }

    /// Scroll the host to `position` along this bar's axis.
    ///
    /// The host's offset after the call is authoritative: the bar takes
    /// whatever value it reads back. Returns that value.
    pub fn set_position(
        &mut self,
        id: ScrollBarId,
        position: usize,
        host: &mut dyn HostContentView,
    ) -> Result<usize, GridError> {
        let bar = self.bar(id)?;
        let axis = bar.orientation;
        let clamped = position.min(bar.max_position());

        let (x, y) = axis.with(host.offset(), clamped);
        host.set_offset(x, y);
        let actual = axis.along(host.offset());
        if actual != clamped {
            log::debug!("host corrected {axis} scrollbar {id} from {clamped} to {actual}");
        }

        self.get_mut(id)?.position = actual;
        Ok(actual)
    }

    /// `None` lets visibility follow content overflow; `Some` locks it.
    pub fn force_visibility(
        &mut self,
        id: ScrollBarId,
        visible: Option<bool>,
    ) -> Result<(), GridError> {
        let bar = self.get_mut(id)?;
        match visible {
            Some(visible) => {
                bar.auto_hide = false;
                bar.show_indicator = visible;
            }
            None => {
                bar.auto_hide = true;
                bar.show_indicator = bar.size > bar.viewport_extent;
            }
        }
        Ok(())
    }

    pub fn set_keep_content_in_viewport(
        &mut self,
        id: ScrollBarId,
        keep: bool,
    ) -> Result<(), GridError> {
        let bar = self.get_mut(id)?;
        bar.keep_content_in_viewport = keep;
        bar.position = bar.position.min(bar.max_position());
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Mouse
    // -------------------------------------------------------------------------

    /// Where the bar is drawn, in the same coordinates as mouse events.
    pub fn set_track(&mut self, id: ScrollBarId, track: Rect) -> Result<(), GridError> {
        self.get_mut(id)?.track = Some(track);
        Ok(())
    }

    /// The shown bar whose track contains `(x, y)`.
    pub fn bar_at(&self, x: u16, y: u16) -> Option<ScrollBarId> {
        self.ids().find(|id| {
            self.get(*id).is_some_and(|bar| {
                bar.show_indicator && bar.track.is_some_and(|track| track.contains(x, y))
            })
        })
    }

    /// Dispatch a mouse event to the bars. Returns true when a bar used it.
    ///
    /// A left press on a shown bar takes the grab, releasing any other holder
    /// first. Pressing the thumb starts a drag from that point; pressing the
    /// track jumps so the thumb centers on the pointer. Drags move the
    /// grabbing bar. Any release drops the grab.
    pub fn handle_mouse(
        &mut self,
        event: &MouseEvent,
        host: &mut dyn HostContentView,
        grab: &mut dyn GrabArbiter,
    ) -> bool {
        match event.kind {
            MouseEventKind::Press(MouseButton::Left) => match self.bar_at(event.x, event.y) {
                Some(id) => self.press(id, event.x, event.y, host, grab).is_ok(),
                None => false,
            },
            MouseEventKind::Drag(MouseButton::Left) => match grab.grabbed() {
                Some(id) => self.drag(id, event.x, event.y, host).is_ok(),
                None => false,
            },
            MouseEventKind::Release(_) => grab
                .release()
                .is_some_and(|id| self.get(id).is_some()),
            _ => false,
        }
    }

    fn press(
        &mut self,
        id: ScrollBarId,
        x: u16,
        y: u16,
        host: &mut dyn HostContentView,
        grab: &mut dyn GrabArbiter,
    ) -> Result<usize, GridError> {
        self.bar(id)?;
        if let Some(previous) = grab.grabbed()
            && previous != id
        {
            log::debug!("grab moves from scrollbar {previous} to {id}");
            grab.release();
        }
        grab.grab(id);

        let bar = self.get_mut(id)?;
        let Some((rel, track_len)) = bar.track_coordinate(x, y) else {
            return Ok(bar.position);
        };
        let (start, len) = bar.thumb(track_len);
        if rel >= start && rel < start + len {
            bar.grab_offset = rel - start;
            return Ok(bar.position);
        }

        bar.grab_offset = len / 2;
        let target = bar.position_from_track(rel.saturating_sub(bar.grab_offset), track_len);
        self.set_position(id, target, host)
    }

    fn drag(
        &mut self,
        id: ScrollBarId,
        x: u16,
        y: u16,
        host: &mut dyn HostContentView,
    ) -> Result<usize, GridError> {
        let bar = self.bar(id)?;
        let Some((rel, track_len)) = bar.track_coordinate(x, y) else {
            return Ok(bar.position);
        };
        let target = bar.position_from_track(rel.saturating_sub(bar.grab_offset), track_len);
        self.set_position(id, target, host)
    }
}
