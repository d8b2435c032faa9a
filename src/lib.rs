//! cellkit - character-cell terminal widgets
//!
//! Modules:
//! - core: key events and text layout helpers
//! - ui: surfaces, drawing primitives, widgets and the `Ui` screen
//! - runtime: result events, the command dispatcher and callback registry
//! - config / logging: runtime settings and file logging
//! - tui: crossterm/ratatui shell (feature `tui`)

pub mod config;
pub mod core;
pub mod logging;
pub mod runtime;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
