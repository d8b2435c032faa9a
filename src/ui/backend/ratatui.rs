use crate::ui::backend::Surface;
use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::style::{Color, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Terminal;
use std::io;

/// A cell surface backed by a ratatui terminal.
///
/// Cells are written into an off-screen buffer; `flush` hands the whole
/// buffer to ratatui, which diffs it against the previous frame.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    buf: Buffer,
    cursor: Option<Pos>,
}

impl TerminalSurface {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        let (w, h) = crossterm::terminal::size()?;
        Ok(Self {
            terminal,
            buf: Buffer::empty(RRect::new(0, 0, w, h)),
            cursor: None,
        })
    }

    /// Re-reads the terminal size and resizes the off-screen buffer.
    pub fn sync_size(&mut self) -> io::Result<Size> {
        let (w, h) = crossterm::terminal::size()?;
        if self.buf.area.width != w || self.buf.area.height != h {
            self.buf.resize(RRect::new(0, 0, w, h));
            self.terminal.autoresize()?;
        }
        Ok(Size::new(w, h))
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> Size {
        Size::new(self.buf.area.width, self.buf.area.height)
    }

    fn set_cell(&mut self, x: i32, y: i32, ch: char, style: Style) {
        let Some(pos) = Pos::from_signed(x, y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((pos.x, pos.y)) {
            cell.set_char(ch).set_style(to_ratatui_style(style));
        }
    }

    fn clear(&mut self, style: Style) {
        let style = to_ratatui_style(style);
        let area = self.buf.area;
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_style(style);
                }
            }
        }
    }

    fn set_cursor(&mut self, pos: Option<Pos>) {
        self.cursor = pos;
    }

    fn flush(&mut self) -> io::Result<()> {
        let buf = &self.buf;
        let cursor = self.cursor;
        self.terminal.draw(|frame| {
            frame.render_widget(BufferView { buf }, frame.area());
            if let Some(pos) = cursor {
                // If this is not called, ratatui hides the cursor for this frame.
                frame.set_cursor_position((pos.x, pos.y));
            }
        })?;
        Ok(())
    }
}

struct BufferView<'a> {
    buf: &'a Buffer,
}

impl Widget for BufferView<'_> {
    fn render(self, area: RRect, buf: &mut Buffer) {
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                let (Some(src), Some(dst)) = (self.buf.cell((x, y)), buf.cell_mut((x, y))) else {
                    continue;
                };
                *dst = src.clone();
            }
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    RStyle::default()
        .fg(to_ratatui_color(s.fg))
        .bg(to_ratatui_color(s.bg))
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Default => RColor::Reset,
        Color::Black => RColor::Black,
        Color::Red => RColor::Red,
        Color::Green => RColor::Green,
        Color::Yellow => RColor::Yellow,
        Color::Blue => RColor::Blue,
        Color::Magenta => RColor::Magenta,
        Color::Cyan => RColor::Cyan,
        // ANSI colour 7; ratatui's `White` is the bright variant.
        Color::White => RColor::Gray,
        Color::Indexed(i) => RColor::Indexed(i),
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
    }
}

// Surface-level behaviour is covered through `TestSurface`; this file only adapts it to ratatui.
