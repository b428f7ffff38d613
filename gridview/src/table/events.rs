//! Input dispatch for [`TableView`].

use gridterm::{KeyCommand, Motion, MouseButton, MouseEvent, MouseEventKind};

use crate::geometry::Cell;
use crate::hit::HitResult;
use crate::source::DataSource;

use super::state::TableView;

/// Rows scrolled per wheel notch.
const WHEEL_ROWS: isize = 3;

/// Whether a handler used an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag; route following drags here.
    StartDrag,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Notifications queued by a [`TableView`] for its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    SelectedCellChanged { old: Cell, new: Cell },
    /// Enter or double-click on a cell.
    CellActivated(Cell),
    HeaderClicked(usize),
    /// The toggle command ran; `toggled` is the resulting state.
    SelectionToggled { toggled: bool },
}

impl<S: DataSource> TableView<S> {
    pub fn process_key(&mut self, command: KeyCommand) -> EventResult {
        if self.shape().is_empty() {
            return EventResult::Ignored;
        }

        match command {
            KeyCommand::Move { motion, extend } => {
                match motion {
                    Motion::Up => self.change_selection_by_offset(0, -1, extend),
                    Motion::Down => self.change_selection_by_offset(0, 1, extend),
                    Motion::Left => self.change_selection_by_offset(-1, 0, extend),
                    Motion::Right => self.change_selection_by_offset(1, 0, extend),
                    Motion::PageUp => self.page_up(extend),
                    Motion::PageDown => self.page_down(extend),
                    Motion::RowStart => self.change_selection_to_start_of_row(extend),
                    Motion::RowEnd => self.change_selection_to_end_of_row(extend),
                    Motion::TableStart => self.change_selection_to_start_of_table(extend),
                    Motion::TableEnd => self.change_selection_to_end_of_table(extend),
                };
                EventResult::Consumed
            }
            KeyCommand::Toggle => {
                self.toggle_active_selection();
                EventResult::Consumed
            }
            KeyCommand::SelectAll => {
                if self.select_all() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            KeyCommand::Activate => {
                let cell = self.active_cell();
                self.events.push(TableEvent::CellActivated(cell));
                EventResult::Consumed
            }
        }
    }

    /// Handle a mouse event whose coordinates are relative to the table.
    pub fn process_mouse(&mut self, event: MouseEvent) -> EventResult {
        let (x, y) = (usize::from(event.x), usize::from(event.y));

        match event.kind {
            MouseEventKind::Press(MouseButton::Left) => {
                match self.screen_to_cell_or_header(x, y) {
                    Some(HitResult::Cell(cell)) => {
                        self.set_selection(cell.col, cell.row, event.modifiers.shift);
                        if self.source.cell_clicked(cell.row, cell.col) {
                            self.reconcile();
                        }
                        EventResult::StartDrag
                    }
                    Some(HitResult::Header(col)) => {
                        if self.source.header_clicked(col) {
                            self.reconcile();
                        }
                        self.events.push(TableEvent::HeaderClicked(col));
                        EventResult::Consumed
                    }
                    None => EventResult::Ignored,
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => match self.screen_to_cell(x, y) {
                Some(cell) => {
                    self.set_selection(cell.col, cell.row, true);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            MouseEventKind::DoubleClick(MouseButton::Left) => match self.screen_to_cell(x, y) {
                Some(cell) => {
                    self.set_selection(cell.col, cell.row, false);
                    self.events.push(TableEvent::CellActivated(cell));
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            MouseEventKind::ScrollUp => self.wheel(-WHEEL_ROWS, 0),
            MouseEventKind::ScrollDown => self.wheel(WHEEL_ROWS, 0),
            MouseEventKind::ScrollLeft => self.wheel(0, -1),
            MouseEventKind::ScrollRight => self.wheel(0, 1),
            _ => EventResult::Ignored,
        }
    }

    fn wheel(&mut self, delta_rows: isize, delta_cols: isize) -> EventResult {
        if self.shape().is_empty() {
            return EventResult::Ignored;
        }
        self.scroll_by(delta_rows, delta_cols);
        EventResult::Consumed
    }
}
