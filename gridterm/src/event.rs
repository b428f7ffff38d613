//! Structured input events.
//!
//! Raw terminal decoding is crossterm's job. This module narrows its events
//! down to what grid widgets consume: keys with modifiers, mouse events in
//! screen coordinates, and the [`KeyCommand`]s a key resolves to.

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    /// A key crossterm reports that widgets never bind.
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What happened with the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Press(MouseButton),
    /// Motion with a button held.
    Drag(MouseButton),
    Release(MouseButton),
    /// Produced by decoders that track click timing; crossterm never emits it.
    DoubleClick(MouseButton),
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
}

/// A mouse event in absolute screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub x: u16,
    pub y: u16,
    pub kind: MouseEventKind,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn new(x: u16, y: u16, kind: MouseEventKind) -> Self {
        Self {
            x,
            y,
            kind,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Same event, translated so that `(origin_x, origin_y)` becomes `(0, 0)`.
    ///
    /// Returns `None` when the event lies above or left of the origin.
    pub fn translated(self, origin_x: u16, origin_y: u16) -> Option<Self> {
        Some(Self {
            x: self.x.checked_sub(origin_x)?,
            y: self.y.checked_sub(origin_y)?,
            ..self
        })
    }

    /// Convert a crossterm mouse event. Plain motion has no counterpart and
    /// yields `None`.
    pub fn from_crossterm(event: crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::MouseEventKind as Ct;
        let kind = match event.kind {
            Ct::Down(btn) => MouseEventKind::Press(btn.into()),
            Ct::Up(btn) => MouseEventKind::Release(btn.into()),
            Ct::Drag(btn) => MouseEventKind::Drag(btn.into()),
            Ct::ScrollUp => MouseEventKind::ScrollUp,
            Ct::ScrollDown => MouseEventKind::ScrollDown,
            Ct::ScrollLeft => MouseEventKind::ScrollLeft,
            Ct::ScrollRight => MouseEventKind::ScrollRight,
            Ct::Moved => return None,
        };
        Some(Self {
            x: event.column,
            y: event.row,
            kind,
            modifiers: event.modifiers.into(),
        })
    }
}

// ============================================================================
// Key commands
// ============================================================================

/// Cursor motion understood by grid widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    RowStart,
    RowEnd,
    TableStart,
    TableEnd,
}

/// A key press resolved to the action a grid performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    /// Move the active cell. `extend` grows the current selection instead of
    /// starting a new one.
    Move { motion: Motion, extend: bool },
    /// Flip the checked state of the current selection.
    Toggle,
    SelectAll,
    /// Activate the active cell (Enter, double-click).
    Activate,
}

impl KeyCommand {
    /// Resolve a key using the default grid bindings.
    ///
    /// Arrows and paging keys move (shift extends), Home/End jump within the
    /// row, Ctrl+Home/Ctrl+End jump to the table corners, Space toggles,
    /// Ctrl+A selects everything and Enter activates.
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        let extend = modifiers.shift;
        let motion = match key {
            Key::Up => Motion::Up,
            Key::Down => Motion::Down,
            Key::Left => Motion::Left,
            Key::Right => Motion::Right,
            Key::PageUp => Motion::PageUp,
            Key::PageDown => Motion::PageDown,
            Key::Home if modifiers.ctrl => Motion::TableStart,
            Key::End if modifiers.ctrl => Motion::TableEnd,
            Key::Home => Motion::RowStart,
            Key::End => Motion::RowEnd,
            Key::Char(' ') => return Some(KeyCommand::Toggle),
            Key::Char('a') | Key::Char('A') if modifiers.ctrl => {
                return Some(KeyCommand::SelectAll);
            }
            Key::Enter => return Some(KeyCommand::Activate),
            _ => return None,
        };
        Some(KeyCommand::Move { motion, extend })
    }

    /// Resolve a crossterm key event. Key releases are ignored.
    pub fn from_crossterm(event: crossterm::event::KeyEvent) -> Option<Self> {
        if event.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
        Self::from_key(event.code.into(), event.modifiers.into())
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
