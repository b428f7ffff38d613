use gridterm::{MouseButton, MouseEvent, MouseEventKind, Rect};
use gridview::{
    GrabArbiter, GridError, HostContentView, MouseGrab, Orientation, ScrollBars,
};

/// Host that optionally refuses to scroll past a limit on either axis.
#[derive(Debug, Default)]
struct FakeHost {
    content: (usize, usize),
    viewport: (usize, usize),
    offset: (usize, usize),
    limit: Option<(usize, usize)>,
}

impl HostContentView for FakeHost {
    fn content_size(&self) -> (usize, usize) {
        self.content
    }

    fn viewport_size(&self) -> (usize, usize) {
        self.viewport
    }

    fn offset(&self) -> (usize, usize) {
        self.offset
    }

    fn set_offset(&mut self, x: usize, y: usize) {
        self.offset = match self.limit {
            Some((max_x, max_y)) => (x.min(max_x), y.min(max_y)),
            None => (x, y),
        };
    }
}

// =============================================================================
// Links
// =============================================================================

#[test]
fn test_create_defaults() {
    let mut bars = ScrollBars::new();
    let id = bars.create(Orientation::Vertical, 10);
    let bar = bars.bar(id).unwrap();

    assert!(bar.auto_hide);
    assert!(bar.keep_content_in_viewport);
    assert_eq!(bar.partner(), None);
    assert_eq!(bar.extent, 10);
}

#[test]
fn test_same_orientation_cannot_pair() {
    let mut bars = ScrollBars::new();
    let a = bars.create(Orientation::Vertical, 10);
    let b = bars.create(Orientation::Vertical, 10);

    let err = bars.attach(a, b).unwrap_err();

    assert_eq!(
        err,
        GridError::OrientationConflict {
            orientation: Orientation::Vertical
        }
    );
    assert_eq!(err.to_string(), "cannot pair two vertical scrollbars");
    assert_eq!(bars.bar(a).unwrap().partner(), None);
    assert_eq!(bars.bar(b).unwrap().partner(), None);
}

#[test]
fn test_attach_links_both_ways() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    let h = bars.create(Orientation::Horizontal, 20);

    bars.attach(v, h).unwrap();

    assert_eq!(bars.bar(v).unwrap().partner(), Some(h));
    assert_eq!(bars.bar(h).unwrap().partner(), Some(v));
}

#[test]
fn test_reattach_unlinks_old_partner() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    let h1 = bars.create(Orientation::Horizontal, 20);
    let h2 = bars.create(Orientation::Horizontal, 20);
    bars.attach(v, h1).unwrap();

    bars.attach(h2, v).unwrap();

    assert_eq!(bars.bar(v).unwrap().partner(), Some(h2));
    assert_eq!(bars.bar(h2).unwrap().partner(), Some(v));
    assert_eq!(bars.bar(h1).unwrap().partner(), None);
}

#[test]
fn test_detach_clears_both_sides() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    let h = bars.create(Orientation::Horizontal, 20);
    bars.attach(v, h).unwrap();

    bars.detach(h).unwrap();

    assert_eq!(bars.bar(v).unwrap().partner(), None);
    assert_eq!(bars.bar(h).unwrap().partner(), None);
}

#[test]
fn test_destroy_unlinks_and_releases_grab() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    let h = bars.create(Orientation::Horizontal, 20);
    bars.attach(v, h).unwrap();
    let mut grab = MouseGrab::new();
    grab.grab(v);

    bars.destroy(v, &mut grab).unwrap();

    assert_eq!(grab.grabbed(), None);
    assert_eq!(bars.bar(h).unwrap().partner(), None);
    assert!(bars.get(v).is_none());
    assert_eq!(bars.len(), 1);
    assert_eq!(bars.bar(v).unwrap_err(), GridError::UnknownScrollBar(v));
}

#[test]
fn test_destroy_leaves_other_grab_alone() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    let h = bars.create(Orientation::Horizontal, 20);
    let mut grab = MouseGrab::new();
    grab.grab(h);

    bars.destroy(v, &mut grab).unwrap();

    assert_eq!(grab.grabbed(), Some(h));
}

#[test]
fn test_stale_id_is_an_error() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    bars.destroy(v, &mut MouseGrab::new()).unwrap();
    let h = bars.create(Orientation::Horizontal, 10);

    assert_ne!(v, h);
    assert!(matches!(
        bars.attach(v, h),
        Err(GridError::UnknownScrollBar(id)) if id == v
    ));
}

// =============================================================================
// Host sync
// =============================================================================

#[test]
fn test_sync_clamps_to_full_viewport() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);

    let position = bars.sync_from_host(v, 100, 95).unwrap();

    let bar = bars.bar(v).unwrap();
    assert_eq!(position, 90);
    assert_eq!(bar.position, 90);
    assert!(bar.show_indicator);
}

#[test]
fn test_sync_without_keep_content_allows_last_unit() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    bars.set_keep_content_in_viewport(v, false).unwrap();

    assert_eq!(bars.sync_from_host(v, 100, 200).unwrap(), 99);
}

#[test]
fn test_axes_clamp_independently() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    let h = bars.create(Orientation::Horizontal, 10);
    bars.set_keep_content_in_viewport(h, false).unwrap();

    assert_eq!(bars.sync_from_host(v, 100, 200).unwrap(), 90);
    assert_eq!(bars.sync_from_host(h, 100, 200).unwrap(), 99);
}

#[test]
fn test_shown_partner_takes_corner_cell() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    let h = bars.create(Orientation::Horizontal, 20);
    bars.attach(v, h).unwrap();
    bars.force_visibility(h, Some(true)).unwrap();

    bars.sync_from_host(v, 100, 200).unwrap();

    let bar = bars.bar(v).unwrap();
    assert_eq!(bar.viewport_extent(), 9);
    assert_eq!(bar.position, 91);
}

#[test]
fn test_content_that_fits_hides_bar() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);

    bars.sync_from_host(v, 8, 3).unwrap();

    let bar = bars.bar(v).unwrap();
    assert!(!bar.show_indicator);
    assert_eq!(bar.position, 0);
}

#[test]
fn test_force_visibility() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    bars.sync_from_host(v, 100, 0).unwrap();

    bars.force_visibility(v, Some(false)).unwrap();
    assert!(!bars.bar(v).unwrap().show_indicator);
    bars.sync_from_host(v, 200, 0).unwrap();
    assert!(!bars.bar(v).unwrap().show_indicator);

    bars.force_visibility(v, None).unwrap();
    assert!(bars.bar(v).unwrap().show_indicator);
}

#[test]
fn test_sync_host_updates_both_bars() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 20);
    let h = bars.create(Orientation::Horizontal, 5);
    bars.attach(v, h).unwrap();
    let host = FakeHost {
        content: (50, 200),
        viewport: (5, 20),
        offset: (3, 190),
        limit: None,
    };

    bars.sync_host(v, &host).unwrap();

    let vertical = bars.bar(v).unwrap();
    assert_eq!((vertical.size, vertical.position), (200, 181));
    let horizontal = bars.bar(h).unwrap();
    assert_eq!((horizontal.size, horizontal.position), (50, 3));
    assert!(vertical.show_indicator && horizontal.show_indicator);
}

#[test]
fn test_sync_host_reserves_corner_cell() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    let h = bars.create(Orientation::Horizontal, 10);
    bars.attach(v, h).unwrap();
    let host = FakeHost {
        content: (30, 30),
        viewport: (10, 10),
        offset: (25, 25),
        limit: None,
    };

    bars.sync_host(h, &host).unwrap();

    for id in [v, h] {
        let bar = bars.bar(id).unwrap();
        assert!(bar.show_indicator);
        assert_eq!(bar.viewport_extent(), 9);
        assert_eq!(bar.position, 21);
    }
}

#[test]
fn test_sync_host_keeps_smaller_host_viewport() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 12);
    let h = bars.create(Orientation::Horizontal, 40);
    bars.attach(v, h).unwrap();
    let host = FakeHost {
        content: (6, 100),
        viewport: (4, 10),
        offset: (0, 0),
        limit: None,
    };

    bars.sync_host(v, &host).unwrap();

    assert_eq!(bars.bar(v).unwrap().viewport_extent(), 10);
    assert_eq!(bars.bar(h).unwrap().viewport_extent(), 4);
    assert_eq!(bars.bar(v).unwrap().orientation.other(), Orientation::Horizontal);
}

#[test]
fn test_set_position_reads_back_host_value() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    bars.sync_from_host(v, 100, 0).unwrap();
    let mut host = FakeHost {
        offset: (7, 0),
        limit: Some((100, 50)),
        ..Default::default()
    };

    let position = bars.set_position(v, 80, &mut host).unwrap();

    assert_eq!(position, 50);
    assert_eq!(bars.bar(v).unwrap().position, 50);
    assert_eq!(host.offset, (7, 50));
}

#[test]
fn test_set_position_clamps_before_host() {
    let mut bars = ScrollBars::new();
    let h = bars.create(Orientation::Horizontal, 10);
    bars.sync_from_host(h, 30, 0).unwrap();
    let mut host = FakeHost::default();

    assert_eq!(bars.set_position(h, 1000, &mut host).unwrap(), 20);
    assert_eq!(host.offset, (20, 0));
}

// =============================================================================
// Thumb geometry
// =============================================================================

#[test]
fn test_thumb_tracks_position() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    bars.sync_from_host(v, 100, 45).unwrap();
    let bar = bars.bar(v).unwrap();

    assert_eq!(bar.thumb(10), (5, 1));
    assert_eq!(bar.position_from_track(9, 10), 90);
    assert_eq!(bar.position_from_track(0, 10), 0);
}

#[test]
fn test_thumb_fills_track_when_content_fits() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    bars.sync_from_host(v, 5, 0).unwrap();

    assert_eq!(bars.bar(v).unwrap().thumb(10), (0, 10));
    assert_eq!(bars.bar(v).unwrap().position_from_track(4, 10), 0);
}

// =============================================================================
// Mouse
// =============================================================================

fn press(x: u16, y: u16) -> MouseEvent {
    MouseEvent::new(x, y, MouseEventKind::Press(MouseButton::Left))
}

fn drag(x: u16, y: u16) -> MouseEvent {
    MouseEvent::new(x, y, MouseEventKind::Drag(MouseButton::Left))
}

fn release(x: u16, y: u16) -> MouseEvent {
    MouseEvent::new(x, y, MouseEventKind::Release(MouseButton::Left))
}

#[test]
fn test_track_click_jumps_and_drag_follows() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    bars.sync_from_host(v, 100, 0).unwrap();
    bars.set_track(v, Rect::new(10, 0, 1, 10)).unwrap();
    let mut host = FakeHost::default();
    let mut grab = MouseGrab::new();

    assert!(bars.handle_mouse(&press(10, 9), &mut host, &mut grab));
    assert_eq!(grab.grabbed(), Some(v));
    assert_eq!(bars.bar(v).unwrap().position, 90);
    assert_eq!(host.offset, (0, 90));

    assert!(bars.handle_mouse(&drag(10, 0), &mut host, &mut grab));
    assert_eq!(bars.bar(v).unwrap().position, 0);

    assert!(bars.handle_mouse(&release(10, 0), &mut host, &mut grab));
    assert_eq!(grab.grabbed(), None);
    assert!(!bars.handle_mouse(&drag(10, 5), &mut host, &mut grab));
}

#[test]
fn test_press_on_thumb_keeps_position() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    bars.sync_from_host(v, 100, 45).unwrap();
    bars.set_track(v, Rect::new(0, 0, 1, 10)).unwrap();
    let mut host = FakeHost {
        offset: (0, 45),
        ..Default::default()
    };
    let mut grab = MouseGrab::new();

    assert!(bars.handle_mouse(&press(0, 5), &mut host, &mut grab));

    assert_eq!(bars.bar(v).unwrap().position, 45);
    assert_eq!(host.offset, (0, 45));
}

#[test]
fn test_press_moves_grab_between_bars() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    let h = bars.create(Orientation::Horizontal, 10);
    bars.sync_from_host(v, 100, 0).unwrap();
    bars.sync_from_host(h, 100, 0).unwrap();
    bars.set_track(v, Rect::new(10, 0, 1, 10)).unwrap();
    bars.set_track(h, Rect::new(0, 10, 10, 1)).unwrap();
    let mut host = FakeHost::default();
    let mut grab = MouseGrab::new();

    bars.handle_mouse(&press(10, 0), &mut host, &mut grab);
    assert_eq!(grab.grabbed(), Some(v));

    bars.handle_mouse(&press(0, 10), &mut host, &mut grab);
    assert_eq!(grab.grabbed(), Some(h));
}

#[test]
fn test_hidden_bar_ignores_press() {
    let mut bars = ScrollBars::new();
    let v = bars.create(Orientation::Vertical, 10);
    bars.sync_from_host(v, 5, 0).unwrap();
    bars.set_track(v, Rect::new(10, 0, 1, 10)).unwrap();
    let mut grab = MouseGrab::new();

    assert!(!bars.handle_mouse(&press(10, 3), &mut FakeHost::default(), &mut grab));
    assert_eq!(grab.grabbed(), None);
}
