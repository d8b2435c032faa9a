use crate::core::event::Key;
use crate::runtime::EventSink;
use crate::ui::backend::Surface;

/// Anything that can be placed on a screen.
///
/// `draw` takes `&mut self` because a widget may settle lazy state while
/// rendering, such as a text box pulling its next line from a reader.
pub trait Widget {
    /// Renders the widget with its top-left corner at `(x, y)`.
    fn draw(&mut self, surface: &mut dyn Surface, x: i32, y: i32);

    /// Handles one key. Returns `true` when the key was used. Finished
    /// interactions are reported on `events`.
    fn handle_key(&mut self, key: Key, events: &EventSink) -> bool;
}
