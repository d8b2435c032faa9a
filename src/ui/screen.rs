use crate::core::event::Key;
use crate::runtime::{EventRegistry, EventSink, UiEvent};
use crate::ui::backend::Surface;
use crate::ui::core::style::Style;
use crate::ui::core::widget::Widget;
use std::io;

/// A widget placed on a screen. The position is fixed once added.
pub struct Field {
    x: i32,
    y: i32,
    widget: Box<dyn Widget>,
    has_focus: bool,
}

impl Field {
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }
}

/// One screen: an ordered set of fields drawn back to front, plus the
/// callbacks that react to their results.
///
/// Input goes to the first field with focus; the rest only draw.
pub struct Ui {
    style: Style,
    fields: Vec<Field>,
    events: EventRegistry,
}

impl Ui {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            fields: Vec::new(),
            events: EventRegistry::new(),
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Appends a field. Later fields draw over earlier ones.
    pub fn add_field(&mut self, widget: impl Widget + 'static, x: i32, y: i32, has_focus: bool) {
        self.fields.push(Field {
            x,
            y,
            widget: Box::new(widget),
            has_focus,
        });
    }

    /// Clears to the screen style, draws every field in insertion order and
    /// flushes once. The cursor stays hidden unless a field places it.
    pub fn draw(&mut self, surface: &mut dyn Surface) -> io::Result<()> {
        surface.set_cursor(None);
        surface.clear(self.style);
        for field in &mut self.fields {
            field.widget.draw(surface, field.x, field.y);
        }
        surface.flush()
    }

    /// Routes `key` to the first focused field. Returns whether it was used;
    /// `false` when no field has focus.
    pub fn handle_input(&mut self, key: Key, events: &EventSink) -> bool {
        let Some((index, field)) = self
            .fields
            .iter_mut()
            .enumerate()
            .find(|(_, f)| f.has_focus)
        else {
            tracing::debug!(?key, "no focused field");
            return false;
        };
        let consumed = field.widget.handle_key(key, events);
        tracing::debug!(field = index, ?key, consumed, "key routed");
        consumed
    }

    /// Registers `callback` for results tagged `tag`, replacing any earlier
    /// one.
    pub fn on_event(&mut self, tag: u16, callback: impl FnMut(&UiEvent) + 'static) {
        self.events.register(tag, callback);
    }

    /// Hands `event` to the callback registered for its tag. Returns `false`
    /// when none is registered.
    pub fn dispatch_event(&mut self, event: &UiEvent) -> bool {
        let handled = self.events.dispatch(event);
        if !handled {
            tracing::debug!(custom = event.custom, kind = ?event.kind, "unhandled result");
        }
        handled
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/screen.rs"]
mod tests;
