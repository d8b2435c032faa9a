use super::text_box::TextBox;
use crate::core::event::{Key, KeyCode};
use crate::runtime::{EventSink, UiEvent};
use crate::ui::backend::Surface;
use crate::ui::core::style::Style;
use crate::ui::core::widget::Widget;

/// A framed label that sends a fixed event when Enter is pressed on it.
pub struct Button {
    text: String,
    width: u16,
    height: u16,
    event: UiEvent,
    style: Style,
    active: bool,
}

impl Button {
    pub fn new(width: u16, height: u16, text: impl Into<String>, event: UiEvent) -> Self {
        Self {
            text: text.into(),
            width,
            height,
            event,
            style: Style::default(),
            active: false,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn event(&self) -> &UiEvent {
        &self.event
    }
}

impl Widget for Button {
    fn draw(&mut self, surface: &mut dyn Surface, x: i32, y: i32) {
        let style = if self.active {
            self.style.highlighted()
        } else {
            self.style
        };
        let mut label = TextBox::new(self.width, self.height)
            .border(true)
            .style(style);
        label.add_text(&self.text);
        label.draw(surface, x, y);
    }

    fn handle_key(&mut self, key: Key, events: &EventSink) -> bool {
        if key.code != KeyCode::Enter {
            return false;
        }
        if !events.send(self.event.clone()) {
            tracing::debug!(custom = self.event.custom, "button event dropped");
        }
        true
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/button.rs"]
mod tests;
