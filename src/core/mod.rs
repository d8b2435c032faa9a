//! Frontend-independent building blocks: key input and text layout helpers.

pub mod event;
pub mod text;

pub use event::{InputEvent, Key, KeyCode, KeyModifiers};
