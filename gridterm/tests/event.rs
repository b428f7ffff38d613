use gridterm::{Key, KeyCommand, Modifiers, Motion, MouseButton, MouseEvent, MouseEventKind, Rect};

// ============================================================================
// Key Bindings
// ============================================================================

#[test]
fn test_arrows_move_without_extending() {
    assert_eq!(
        KeyCommand::from_key(Key::Down, Modifiers::new()),
        Some(KeyCommand::Move {
            motion: Motion::Down,
            extend: false
        })
    );
    assert_eq!(
        KeyCommand::from_key(Key::Left, Modifiers::new()),
        Some(KeyCommand::Move {
            motion: Motion::Left,
            extend: false
        })
    );
}

#[test]
fn test_shift_extends_selection() {
    assert_eq!(
        KeyCommand::from_key(Key::Right, Modifiers::shift()),
        Some(KeyCommand::Move {
            motion: Motion::Right,
            extend: true
        })
    );
    assert_eq!(
        KeyCommand::from_key(Key::PageDown, Modifiers::shift()),
        Some(KeyCommand::Move {
            motion: Motion::PageDown,
            extend: true
        })
    );
}

#[test]
fn test_home_end_respect_ctrl() {
    assert_eq!(
        KeyCommand::from_key(Key::Home, Modifiers::new()),
        Some(KeyCommand::Move {
            motion: Motion::RowStart,
            extend: false
        })
    );
    assert_eq!(
        KeyCommand::from_key(Key::End, Modifiers::ctrl()),
        Some(KeyCommand::Move {
            motion: Motion::TableEnd,
            extend: false
        })
    );
}

#[test]
fn test_command_keys() {
    assert_eq!(
        KeyCommand::from_key(Key::Char(' '), Modifiers::new()),
        Some(KeyCommand::Toggle)
    );
    assert_eq!(
        KeyCommand::from_key(Key::Char('a'), Modifiers::ctrl()),
        Some(KeyCommand::SelectAll)
    );
    assert_eq!(
        KeyCommand::from_key(Key::Enter, Modifiers::new()),
        Some(KeyCommand::Activate)
    );
}

#[test]
fn test_unbound_keys() {
    assert_eq!(KeyCommand::from_key(Key::Char('a'), Modifiers::new()), None);
    assert_eq!(KeyCommand::from_key(Key::Escape, Modifiers::new()), None);
    assert_eq!(KeyCommand::from_key(Key::Other, Modifiers::new()), None);
}

// ============================================================================
// Crossterm Conversion
// ============================================================================

#[test]
fn test_crossterm_key_event() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    let event = KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT);
    assert_eq!(
        KeyCommand::from_crossterm(event),
        Some(KeyCommand::Move {
            motion: Motion::Up,
            extend: true
        })
    );
}

#[test]
fn test_crossterm_mouse_event() {
    use crossterm::event::{KeyModifiers, MouseButton as CtButton, MouseEventKind as CtKind};

    let event = crossterm::event::MouseEvent {
        kind: CtKind::Down(CtButton::Left),
        column: 12,
        row: 4,
        modifiers: KeyModifiers::CONTROL,
    };
    let converted = MouseEvent::from_crossterm(event).unwrap();
    assert_eq!(converted.x, 12);
    assert_eq!(converted.y, 4);
    assert_eq!(converted.kind, MouseEventKind::Press(MouseButton::Left));
    assert!(converted.modifiers.ctrl);

    let moved = crossterm::event::MouseEvent {
        kind: CtKind::Moved,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(MouseEvent::from_crossterm(moved), None);
}

#[test]
fn test_unknown_key_code() {
    let key: Key = crossterm::event::KeyCode::CapsLock.into();
    assert_eq!(key, Key::Other);
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_mouse_translation() {
    let event = MouseEvent::new(10, 5, MouseEventKind::ScrollDown);
    let local = event.translated(4, 2).unwrap();
    assert_eq!((local.x, local.y), (6, 3));
    assert_eq!(event.translated(11, 0), None);
}

#[test]
fn test_rect_relative() {
    let rect = Rect::new(5, 5, 10, 4);
    assert_eq!(rect.relative(5, 5), Some((0, 0)));
    assert_eq!(rect.relative(14, 8), Some((9, 3)));
    assert_eq!(rect.relative(15, 8), None);
    assert!(Rect::from_size(0, 3).is_empty());
}
