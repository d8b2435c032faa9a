//! The stock widgets. Each one draws through a `Surface` and reports finished
//! interactions as `UiEvent`s.

pub mod button;
pub mod edit_box;
pub mod menu;
pub mod popup;
pub mod table;
pub mod text_box;

pub use button::Button;
pub use edit_box::EditBox;
pub use menu::{Menu, MenuCommand, MenuMode, MenuOption};
pub use popup::{Popup, PopupPosition};
pub use table::Table;
pub use text_box::{Justify, TextBox};
