pub mod draw;
pub mod geom;
pub mod style;
pub mod widget;

pub use geom::{Extent, Pos, Rect, Size};
pub use style::{Color, Style};
pub use widget::Widget;
