//! Widget layer: geometry and drawing primitives, the surface abstraction,
//! the stock widgets and the `Ui` that composes them into a screen.
//!
//! Nothing here depends on a real terminal; `backend::terminal` (feature
//! `tui`) adapts a surface onto `ratatui`.

pub mod backend;
pub mod core;
pub mod screen;
pub mod widgets;

pub use screen::{Field, Ui};
