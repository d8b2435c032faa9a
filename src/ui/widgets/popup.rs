use super::text_box::{Justify, TextBox};
use crate::core::event::Key;
use crate::runtime::EventSink;
use crate::ui::backend::Surface;
use crate::ui::core::geom::{Extent, Size};
use crate::ui::core::style::Style;
use crate::ui::core::widget::Widget;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopupPosition {
    Top,
    Bottom,
    #[default]
    Center,
}

/// A framed title with an optional body, placed relative to the screen.
///
/// Popups position themselves: the coordinates passed to `draw` are
/// ignored. With a body, a rule separates it from the title.
pub struct Popup {
    title: String,
    content: String,
    position: PopupPosition,
    width: u16,
    height: u16,
    style: Style,
}

impl Popup {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        position: PopupPosition,
        width: Extent,
        height: Extent,
        screen: Size,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            position,
            width: width.resolve(screen.w),
            height: height.resolve(screen.h),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Top-left corner on a screen of `screen` cells.
    pub fn origin(&self, screen: Size) -> (i32, i32) {
        let x = (screen.w as i32 - self.width as i32) / 2;
        let y = match self.position {
            PopupPosition::Top => 0,
            PopupPosition::Bottom => screen.h as i32 - self.height as i32,
            PopupPosition::Center => (screen.h as i32 - self.height as i32) / 2,
        };
        (x, y)
    }
}

impl Widget for Popup {
    fn draw(&mut self, surface: &mut dyn Surface, _x: i32, _y: i32) {
        let mut body = TextBox::new(self.width, self.height)
            .border(true)
            .wrap(true)
            .justify(Justify::Center, Justify::Default)
            .style(self.style);

        body.add_text(&self.title);
        if !self.content.is_empty() {
            let rule = "─".repeat(self.width.saturating_sub(4) as usize);
            body.add_text(&rule);
            body.add_text(&self.content);
        }

        let (x, y) = self.origin(surface.size());
        body.draw(surface, x, y);
    }

    fn handle_key(&mut self, _key: Key, _events: &EventSink) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/popup.rs"]
mod tests;
