//! Interactive table explorer.
//!
//! Arrows/PageUp/PageDown/Home/End move (shift extends). Space toggles the
//! selection and checks its rows; `x` flips the checks of the selected rows.
//! `d` deletes the active row, `h` hides or shows column B, `q` quits. The
//! mouse selects, drags, ticks check cells and works both scrollbars. Logs
//! go to `explorer.log`.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use gridterm::Rect;
use gridview::{Alignment, ScrollBarId};
use gridview::prelude::*;
use log::LevelFilter;
use unicode_width::UnicodeWidthChar;

type Table = TableView<CheckBoxSource<VecSource>>;

/// Raw mode and the alternate screen for as long as it lives.
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(Self { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), Show, LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

// ============================================================================
// Screen layout
// ============================================================================

/// Table area, bar tracks and status line for a terminal size.
struct Screen {
    table: Rect,
    vertical: Rect,
    horizontal: Rect,
    status_y: u16,
}

impl Screen {
    fn new(width: u16, height: u16) -> Self {
        let table = Rect::new(0, 0, width.saturating_sub(1), height.saturating_sub(2));
        Self {
            table,
            vertical: Rect::new(table.right(), 0, 1, table.height),
            horizontal: Rect::new(0, table.bottom(), table.width, 1),
            status_y: height.saturating_sub(1),
        }
    }
}

struct Bars {
    arena: ScrollBars,
    vertical: ScrollBarId,
    horizontal: ScrollBarId,
    grab: MouseGrab,
}

impl Bars {
    fn new(screen: &Screen) -> Result<Self, GridError> {
        let mut arena = ScrollBars::new();
        let vertical = arena.create(Orientation::Vertical, usize::from(screen.vertical.height));
        let horizontal =
            arena.create(Orientation::Horizontal, usize::from(screen.horizontal.width));
        arena.attach(vertical, horizontal)?;
        let mut bars = Self {
            arena,
            vertical,
            horizontal,
            grab: MouseGrab::new(),
        };
        bars.place(screen)?;
        Ok(bars)
    }

    fn place(&mut self, screen: &Screen) -> Result<(), GridError> {
        self.arena.set_track(self.vertical, screen.vertical)?;
        self.arena.set_track(self.horizontal, screen.horizontal)?;
        self.arena
            .set_extent(self.vertical, usize::from(screen.vertical.height))?;
        self.arena
            .set_extent(self.horizontal, usize::from(screen.horizontal.width))
    }
}

// ============================================================================
// Drawing
// ============================================================================

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// `text` cut or padded to exactly `width` terminal cells.
fn fit(text: &str, width: usize, alignment: Alignment) -> String {
    let mut body = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        body.push(c);
        used += w;
    }
    let pad = width - used;
    let left = match alignment {
        Alignment::Left => 0,
        Alignment::Center => pad / 2,
        Alignment::Right => pad,
    };
    let mut out: String = std::iter::repeat_n(' ', left).collect();
    out.push_str(&body);
    out.extend(std::iter::repeat_n(' ', pad - left));
    out
}

fn draw(out: &mut impl Write, table: &Table, bars: &Bars, screen: &Screen) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    let style = table.style();
    let layout = table.column_layout();
    let header_rows = style.header_rows();

    if style.show_headers {
        for column in &layout.columns {
            let name = table.source().column_name(column.index);
            let alignment = style.column_style(column.index).alignment;
            queue!(
                out,
                MoveTo(to_u16(column.x), 0),
                SetAttribute(Attribute::Bold),
                Print(fit(&name, column.width, alignment)),
                SetAttribute(Attribute::Reset)
            )?;
        }
        if style.show_header_underline {
            let line = "-".repeat(usize::from(screen.table.width));
            queue!(out, MoveTo(0, 1), Print(line))?;
        }
    }

    for (i, row) in table.visible_rows().enumerate() {
        let y = to_u16(header_rows + i);
        for column in &layout.columns {
            let text = table
                .source()
                .cell_value(row, column.index)
                .representation(&style.null_symbol);
            let alignment = style.column_style(column.index).alignment;
            let attribute = if table.is_selected(column.index, row) {
                Attribute::Reverse
            } else {
                Attribute::Reset
            };
            queue!(
                out,
                MoveTo(to_u16(column.x), y),
                SetAttribute(attribute),
                Print(fit(&text, column.width, alignment)),
                SetAttribute(Attribute::Reset)
            )?;
            if style.show_vertical_cell_lines {
                queue!(out, MoveTo(to_u16(column.separator_x()), y), Print('|'))?;
            }
        }
    }

    for id in [bars.vertical, bars.horizontal] {
        draw_bar(out, &bars.arena, id)?;
    }

    let active = table.active_cell();
    let status = format!(
        "active {active}  selected {}  checked {:?}",
        table.selected_cells().count(),
        table.checked_rows()
    );
    queue!(out, MoveTo(0, screen.status_y), Print(status))?;
    out.flush()
}

fn draw_bar(out: &mut impl Write, arena: &ScrollBars, id: ScrollBarId) -> io::Result<()> {
    let Some(bar) = arena.get(id) else {
        return Ok(());
    };
    let Some(track) = bar.track() else {
        return Ok(());
    };
    if !bar.show_indicator {
        return Ok(());
    }
    let track_len = match bar.orientation {
        Orientation::Vertical => usize::from(track.height),
        Orientation::Horizontal => usize::from(track.width),
    };
    let (start, len) = bar.thumb(track_len);
    for i in 0..track_len {
        let glyph = if (start..start + len).contains(&i) { '#' } else { '.' };
        let (x, y) = match bar.orientation {
            Orientation::Vertical => (track.x, track.y + to_u16(i)),
            Orientation::Horizontal => (track.x + to_u16(i), track.y),
        };
        queue!(out, MoveTo(x, y), Print(glyph))?;
    }
    Ok(())
}

// ============================================================================
// Main
// ============================================================================

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = terminal::size()?;
    let screen = Screen::new(width, height);

    let source = CheckBoxSource::new(VecSource::filled(26, 400));
    let mut table = TableView::with_bounds(
        source,
        TableStyle::new()
            .column(0, ColumnStyle::new().align(Alignment::Center))
            .column(1, ColumnStyle::new().min_width(3).align(Alignment::Right)),
        usize::from(screen.table.width),
        usize::from(screen.table.height),
    );
    let mut bars = Bars::new(&screen)?;
    let mut screen = screen;
    let mut guard = TerminalGuard::new()?;

    loop {
        bars.arena.sync_host(bars.vertical, &table)?;
        draw(&mut guard.stdout, &table, &bars, &screen)?;

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('x') => table.toggle_checked_rows(),
                KeyCode::Char('d') => {
                    let row = table.active_cell().row;
                    table.update_source(|s| {
                        s.inner_mut().remove_row(row);
                        s.row_removed(row);
                    });
                }
                KeyCode::Char('h') => {
                    table.update_style(|style| {
                        let column = style.column_style_mut(2);
                        column.visible = !column.visible;
                    });
                }
                _ => {
                    if let Some(command) = KeyCommand::from_crossterm(key) {
                        table.process_key(command);
                    }
                }
            },
            Event::Mouse(mouse) => {
                let Some(mouse) = MouseEvent::from_crossterm(mouse) else {
                    continue;
                };
                if !bars.arena.handle_mouse(&mouse, &mut table, &mut bars.grab)
                    && let Some(local) = mouse.translated(screen.table.x, screen.table.y)
                {
                    table.process_mouse(local);
                }
            }
            Event::Resize(width, height) => {
                screen = Screen::new(width, height);
                table.set_bounds(
                    usize::from(screen.table.width),
                    usize::from(screen.table.height),
                );
                bars.place(&screen)?;
            }
            _ => {}
        }

        for event in table.drain_events() {
            log::info!("{event:?}");
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = gridterm::init_file_logger("explorer.log", LevelFilter::Debug) {
        eprintln!("Error: {e}");
    }

    if let Err(e) = run() {
        eprintln!("Error: {e}");
    }
}
