//! Terminal shell (crossterm + ratatui): event conversion, terminal setup and
//! the input loop.
//!
//! Kept apart from `ui` so widgets and screens can be driven headless.

pub mod crossterm;
pub mod run;
pub mod terminal_guard;

pub use run::run;
