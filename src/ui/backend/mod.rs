//! Rendering surfaces.
//!
//! Widgets only ever see `dyn Surface`; the terminal implementation lives
//! behind the `tui` feature so the widget core does not depend on `ratatui`.

use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::style::Style;
use std::io;

pub trait Surface {
    /// Current size in cells.
    fn size(&self) -> Size;

    /// Writes one cell. Coordinates outside the surface are ignored.
    fn set_cell(&mut self, x: i32, y: i32, ch: char, style: Style);

    /// Resets every cell to a blank with `style`.
    fn clear(&mut self, style: Style);

    fn set_cursor(&mut self, pos: Option<Pos>);

    /// Pushes everything drawn since the last flush to the output.
    fn flush(&mut self) -> io::Result<()>;
}

// Named for what it is, not for the library behind it.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
