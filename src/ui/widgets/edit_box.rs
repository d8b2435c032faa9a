use super::text_box::{Justify, TextBox};
use crate::core::event::{Key, KeyCode};
use crate::core::text;
use crate::runtime::{EventSink, UiEvent};
use crate::ui::backend::Surface;
use crate::ui::core::geom::{Extent, Pos, Size};
use crate::ui::core::style::Style;
use crate::ui::core::widget::Widget;

const PROMPT: &str = "/> ";
const HEIGHT: u16 = 4;
const TAB: [char; 4] = [' '; 4];

/// Single-line text input.
///
/// Enter submits the buffer as a `String` event tagged with the box's custom
/// tag and clears it. Long input scrolls inside the box; the stored buffer
/// always holds everything typed.
pub struct EditBox {
    width: u16,
    value: Vec<char>,
    cursor: usize,
    custom: u16,
    style: Style,
}

impl EditBox {
    /// The cursor starts after `value`.
    pub fn new(width: Extent, value: &str, custom: u16, style: Style, screen: Size) -> Self {
        let value: Vec<char> = value.chars().collect();
        Self {
            width: width.resolve(screen.w),
            cursor: value.len(),
            value,
            custom,
            style,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn custom(&self) -> u16 {
        self.custom
    }

    /// The part of the buffer that fits beside the prompt, kept around the
    /// cursor.
    pub fn visible(&self) -> String {
        self.value[self.visible_range()].iter().collect()
    }

    fn visible_range(&self) -> std::ops::Range<usize> {
        // One column stays free for the cursor past the last character.
        let available = (self.width as usize).saturating_sub(text::width(PROMPT) + 1);
        text::cursor_window(&self.value, self.cursor, available)
    }

    fn insert(&mut self, chars: &[char]) {
        let at = self.cursor.min(self.value.len());
        self.value.splice(at..at, chars.iter().copied());
        self.cursor = at + chars.len();
    }

    fn submit(&mut self, events: &EventSink) {
        let value = self.value();
        tracing::debug!(custom = self.custom, len = self.value.len(), "edit box submitted");
        if !events.send(UiEvent::text(self.custom, &value)) {
            tracing::debug!(custom = self.custom, "edit box result dropped");
        }
        self.value.clear();
        self.cursor = 0;
    }
}

impl Widget for EditBox {
    fn draw(&mut self, surface: &mut dyn Surface, x: i32, y: i32) {
        let range = self.visible_range();
        let before_cursor = text::chars_width(&self.value[range.start..self.cursor.max(range.start)]);
        let shown: String = self.value[range].iter().collect();

        let mut line = TextBox::new(self.width, HEIGHT)
            .justify(Justify::Default, Justify::Center)
            .style(self.style);
        line.add_text(&format!("{PROMPT}{shown}"));
        line.draw(surface, x, y);

        let cx = x + text::width(PROMPT) as i32 + before_cursor as i32;
        let cy = y + HEIGHT as i32 / 2;
        surface.set_cursor(Pos::from_signed(cx, cy));
    }

    fn handle_key(&mut self, key: Key, events: &EventSink) -> bool {
        match key.code {
            KeyCode::Enter => self.submit(events),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.value.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.value.len()),
            KeyCode::Tab => self.insert(&TAB),
            _ => match key.printable() {
                Some(ch) => self.insert(&[ch]),
                None => return false,
            },
        }
        true
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/edit_box.rs"]
mod tests;
