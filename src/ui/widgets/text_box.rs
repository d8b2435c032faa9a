use crate::core::event::{Key, KeyCode};
use crate::core::text;
use crate::runtime::EventSink;
use crate::ui::backend::Surface;
use crate::ui::core::draw;
use crate::ui::core::geom::{Extent, Rect, Size};
use crate::ui::core::style::Style;
use crate::ui::core::widget::Widget;
use std::io::BufRead;

/// Text alignment inside a box. The same values serve both axes:
/// `Left`/`Right`/`Center` horizontally, `Top`/`Bottom`/`Center` vertically;
/// anything else is flush left / flush top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Justify {
    Left,
    Right,
    Center,
    Top,
    Bottom,
    #[default]
    Default,
}

/// A fixed-size box of text that wraps, aligns and scrolls its content.
///
/// With a border the frame is drawn inside the box's own area, so the text
/// area loses one cell on every side.
pub struct TextBox {
    width: u16,
    height: u16,
    border: bool,
    wrap: bool,
    justify_h: Justify,
    justify_v: Justify,
    style: Style,
    scrolling: bool,

    lines: Vec<String>,
    scroll: usize,
    reader: Option<Box<dyn BufRead>>,
}

impl TextBox {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            border: false,
            wrap: false,
            justify_h: Justify::Default,
            justify_v: Justify::Default,
            style: Style::default(),
            scrolling: true,
            lines: Vec::new(),
            scroll: 0,
            reader: None,
        }
    }

    /// Resolves `Auto` dimensions against `screen` now. A fixed width wider
    /// than the screen is clamped to it.
    pub fn sized(width: Extent, height: Extent, screen: Size) -> Self {
        let width = width.resolve(screen.w).min(screen.w);
        Self::new(width, height.resolve(screen.h))
    }

    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn justify(mut self, horizontal: Justify, vertical: Justify) -> Self {
        self.justify_h = horizontal;
        self.justify_v = vertical;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// A non-scrolling box stops accepting lines once it is full.
    pub fn scrolling(mut self, scrolling: bool) -> Self {
        self.scrolling = scrolling;
        self
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn interior_width(&self) -> u16 {
        if self.border {
            self.width.saturating_sub(2)
        } else {
            self.width
        }
    }

    pub fn visible_height(&self) -> u16 {
        if self.border {
            self.height.saturating_sub(2)
        } else {
            self.height
        }
    }

    /// Appends `text`, one buffer line per physical line (after tab
    /// expansion and wrapping).
    ///
    /// An empty line ends processing: everything after a blank line in
    /// `text` is dropped.
    pub fn add_text(&mut self, text: &str) {
        let width = self.interior_width() as usize;
        let height = self.visible_height() as usize;

        for raw in text.split('\n') {
            let line = text::expand_tabs(raw);
            if line.is_empty() {
                break;
            }

            let pieces = if self.wrap {
                text::wrap_line(&line, width)
            } else {
                vec![line]
            };
            for piece in pieces {
                if !self.scrolling && self.lines.len() >= height {
                    return;
                }
                self.lines.push(piece);
            }
        }
    }

    /// Attaches a line source. Every draw pulls at most one line from it and
    /// appends it like [`TextBox::add_text`].
    pub fn add_text_from(&mut self, reader: impl BufRead + 'static) {
        self.reader = Some(Box::new(reader));
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + (self.visible_height() as usize) < self.lines.len() {
            self.scroll += 1;
        }
    }

    fn pull_from_reader(&mut self) {
        let Some(reader) = self.reader.as_mut() else {
            return;
        };
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {}
            Ok(_) => self.add_text(&line),
            Err(e) => {
                tracing::warn!(error = %e, "text box reader failed, detaching it");
                self.reader = None;
            }
        }
    }
}

impl Widget for TextBox {
    fn draw(&mut self, surface: &mut dyn Surface, x: i32, y: i32) {
        self.pull_from_reader();

        let area = Rect::new(x, y, self.width, self.height);
        let interior = if self.border {
            draw::rectangle(surface, area, self.style);
            area.shrink(1)
        } else {
            draw::fill_area(surface, area, self.style);
            area
        };

        let start = self.scroll.min(self.lines.len());
        let end = (start + interior.h as usize).min(self.lines.len());
        let visible = &self.lines[start..end];
        let count = visible.len() as i32;

        for (i, line) in visible.iter().enumerate() {
            let i = i as i32;
            let lx = match self.justify_h {
                Justify::Center => draw::center_x(line, interior.w, interior.x),
                Justify::Right => interior.right() - text::width(line) as i32,
                _ => interior.x,
            };
            let ly = match self.justify_v {
                Justify::Center => interior.y + interior.h as i32 / 2 + i,
                Justify::Bottom => interior.bottom() - count + i,
                _ => interior.y + i,
            };
            draw::text_clipped(surface, lx, ly, line, self.style, interior);
        }
    }

    fn handle_key(&mut self, key: Key, _events: &EventSink) -> bool {
        match key.code {
            KeyCode::Up => {
                self.scroll_up();
                true
            }
            KeyCode::Down => {
                self.scroll_down();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/text_box.rs"]
mod tests;
