use super::popup::{Popup, PopupPosition};
use super::table::Table;
use super::text_box::{Justify, TextBox};
use crate::core::event::{Key, KeyCode};
use crate::runtime::{EventSink, UiEvent};
use crate::ui::backend::Surface;
use crate::ui::core::draw;
use crate::ui::core::geom::Extent;
use crate::ui::core::style::Style;
use crate::ui::core::widget::Widget;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

const HELP_TITLE: &str = "ABOUT";
const HELP_HEIGHT: u16 = 6;
/// Rows taken by the header and its rule, plus one blank row.
const HEADER_ROWS: i32 = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuMode {
    #[default]
    List,
    /// Two columns, filled top to bottom then left to right.
    Grid,
}

pub type MenuCommand = Arc<dyn Fn() -> UiEvent + Send + Sync>;

#[derive(Clone)]
pub struct MenuOption {
    pub title: String,
    pub help: String,
    pub command: MenuCommand,
}

impl MenuOption {
    pub fn new<F>(title: impl Into<String>, help: impl Into<String>, command: F) -> Self
    where
        F: Fn() -> UiEvent + Send + Sync + 'static,
    {
        Self {
            title: title.into(),
            help: help.into(),
            command: Arc::new(command),
        }
    }
}

impl fmt::Debug for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuOption")
            .field("title", &self.title)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// A selectable list (or two-column grid) of commands.
///
/// Arrow keys and the digits `1`..`9` move the selection; Enter runs the
/// selected command off the input loop and its result arrives on the event
/// channel later. Only `height` rows are shown at once; the window follows
/// the selection.
///
/// The window is tracked in rows. In list mode a row is one option; in grid
/// mode a row holds up to two options. Moving within a column slides the
/// window by at most one row. A step that wraps into the other column
/// (Down from the bottom of the left column, Up from the top of the right
/// one) re-anchors the window on the new row instead.
pub struct Menu {
    width: u16,
    height: u16,
    header: String,
    mode: MenuMode,
    help_enabled: bool,
    show_help: bool,
    style: Style,

    options: Vec<MenuOption>,
    active: usize,
    window_top: usize,
}

impl Menu {
    pub fn new(
        width: u16,
        height: u16,
        header: impl Into<String>,
        mode: MenuMode,
        help_enabled: bool,
        style: Style,
    ) -> Self {
        Self {
            width,
            height,
            header: header.into(),
            mode,
            help_enabled,
            show_help: false,
            style,
            options: Vec::new(),
            active: 0,
            window_top: 0,
        }
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_option(&self) -> Option<&MenuOption> {
        self.options.get(self.active)
    }

    pub fn is_help_shown(&self) -> bool {
        self.show_help
    }

    /// The visible rows, `[top, bottom)`.
    pub fn window(&self) -> Range<usize> {
        let len = (self.height as usize).min(self.rows());
        self.window_top..self.window_top + len
    }

    pub fn push_option(&mut self, option: MenuOption) {
        self.insert_option(None, option);
    }

    /// Inserts at `index`, or appends when `index` is `None` or past the end.
    pub fn insert_option(&mut self, index: Option<usize>, option: MenuOption) {
        match index {
            Some(i) if i < self.options.len() => self.options.insert(i, option),
            _ => self.options.push(option),
        }
        self.settle();
    }

    /// Removes and returns the option at `index`, if there is one.
    pub fn remove_option(&mut self, index: usize) -> Option<MenuOption> {
        if index >= self.options.len() {
            return None;
        }
        let removed = self.options.remove(index);
        self.settle();
        Some(removed)
    }

    /// Returns `false` and leaves the menu unchanged when `index` is out of
    /// range.
    pub fn replace_option(&mut self, index: usize, option: MenuOption) -> bool {
        match self.options.get_mut(index) {
            Some(slot) => {
                *slot = option;
                true
            }
            None => false,
        }
    }

    /// Selects `index` if it exists and scrolls it into view.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        self.active = index;
        self.follow_active();
        true
    }

    fn columns(&self) -> usize {
        match self.mode {
            MenuMode::List => 1,
            MenuMode::Grid => 2,
        }
    }

    fn rows(&self) -> usize {
        self.options.len().div_ceil(self.columns())
    }

    fn active_row(&self) -> usize {
        match self.rows() {
            0 => 0,
            rows => self.active % rows,
        }
    }

    /// Slides the window the least distance that brings the active row back
    /// into view.
    fn follow_active(&mut self) {
        let row = self.active_row();
        let len = self.window().len();
        if row < self.window_top {
            self.window_top = row;
        } else if row >= self.window_top + len {
            self.window_top = row + 1 - len;
        }
    }

    /// Restores the selection and window invariants after the option list
    /// changed size.
    fn settle(&mut self) {
        if self.options.is_empty() {
            self.active = 0;
            self.window_top = 0;
            return;
        }
        self.active = self.active.min(self.options.len().saturating_sub(1));
        let len = self.window().len();
        self.window_top = self.window_top.min(self.rows() - len);
        self.follow_active();
    }

    fn move_up(&mut self) {
        if self.active > 0 {
            self.active -= 1;
            self.follow_active();
        }
    }

    fn move_down(&mut self) {
        if self.active + 1 < self.options.len() {
            self.active += 1;
            self.follow_active();
        }
    }

    fn move_column(&mut self, right: bool) {
        let rows = self.rows();
        let target = if right {
            self.active + rows
        } else {
            match self.active.checked_sub(rows) {
                Some(t) => t,
                None => return,
            }
        };
        if target < self.options.len() {
            self.active = target;
            self.follow_active();
        }
    }

    fn run_active(&self, events: &EventSink) {
        let Some(option) = self.options.get(self.active) else {
            return;
        };
        tracing::debug!(index = self.active, title = %option.title, "menu command dispatched");
        let command = Arc::clone(&option.command);
        events.dispatch(move || command());
    }

    fn draw_help(&self, surface: &mut dyn Surface) {
        let Some(option) = self.active_option() else {
            return;
        };
        let mut popup = Popup::new(
            HELP_TITLE,
            option.help.as_str(),
            PopupPosition::Bottom,
            Extent::Auto,
            Extent::Cells(HELP_HEIGHT),
            surface.size(),
        )
        .style(self.style);
        popup.draw(surface, 0, 0);
    }
}

impl Widget for Menu {
    fn draw(&mut self, surface: &mut dyn Surface, x: i32, y: i32) {
        let mut y = y;
        if !self.header.is_empty() {
            let mut title = TextBox::new(self.width, 1)
                .justify(Justify::Center, Justify::Default)
                .style(self.style);
            title.add_text(&self.header);
            title.draw(surface, x, y);
            draw::hline(surface, x, y + 1, self.width, self.style);
            y += HEADER_ROWS;
        }

        if !self.options.is_empty() {
            let rows = self.rows();
            let columns = self.columns();
            let window = self.window();

            let table_height = u16::try_from(rows).unwrap_or(u16::MAX);
            let mut table = Table::new(self.width, table_height, columns, rows)
                .numbers(true)
                .style(self.style);
            for (i, option) in self.options.iter().enumerate() {
                table.set_cell(i / rows, i % rows, option.title.as_str());
            }
            table.set_active(Some(self.active / rows), Some(self.active % rows));
            table.set_viewport(window.start, window.len());
            table.draw(surface, x, y);
        }

        if self.show_help {
            self.draw_help(surface);
        }
    }

    fn handle_key(&mut self, key: Key, events: &EventSink) -> bool {
        match key.code {
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Left | KeyCode::Right if self.mode == MenuMode::Grid => {
                self.move_column(key.code == KeyCode::Right)
            }
            KeyCode::Enter => self.run_active(events),
            KeyCode::F(1) if self.help_enabled => self.show_help = !self.show_help,
            _ => match key.printable().and_then(|ch| ch.to_digit(10)) {
                Some(digit @ 1..=9) => return self.select(digit as usize - 1),
                _ => return false,
            },
        }
        true
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/menu.rs"]
mod tests;
