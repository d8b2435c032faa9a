//! Edit box whose submissions are echoed back with their case swapped.
//!
//! Usage: `text_entry [config.json]`. Esc or Ctrl-C quits.

use cellkit::config::UiConfig;
use cellkit::core::text;
use cellkit::ui::core::{Extent, Size, Style};
use cellkit::ui::widgets::{EditBox, Justify, TextBox};
use cellkit::ui::Ui;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

const CHANGE_USER_TEXT: u16 = 0;
const INPUT_WIDTH: u16 = 30;
const TITLE: &str = "Input your message in the box below.\n \nPress `Enter` to display your input all funky and whatnot.\nPress `Esc` to quit.";

fn main() -> io::Result<()> {
    let config = std::env::args()
        .nth(1)
        .map(UiConfig::load_or_default)
        .unwrap_or_default();
    let _logging = cellkit::logging::init(&config.log);

    let user_text = Rc::new(RefCell::new("example string".to_string()));
    cellkit::tui::run(&config, |screen| Some(build(&user_text, screen)))
}

fn build(user_text: &Rc<RefCell<String>>, screen: Size) -> Ui {
    let style = Style::default();
    let mut ui = Ui::new(style);

    let title_width = TITLE.lines().map(text::width).max().unwrap_or(0) as u16 + 2;
    let mut headline =
        TextBox::new(title_width, 7).justify(Justify::Center, Justify::Default);
    headline.add_text(TITLE);
    let mut y = 1;
    ui.add_field(headline, (screen.w as i32 - title_width as i32) / 2, y, false);

    let mut echo = TextBox::new(screen.w.saturating_sub(2), 3)
        .justify(Justify::Center, Justify::Center);
    echo.add_text(&funkify(&user_text.borrow()));
    y += 4;
    ui.add_field(echo, 1, y, false);

    let input = EditBox::new(
        Extent::Cells(INPUT_WIDTH),
        &user_text.borrow(),
        CHANGE_USER_TEXT,
        style,
        screen,
    );
    y += 3;
    ui.add_field(input, (screen.w as i32 - INPUT_WIDTH as i32) / 2, y, true);

    let state = Rc::clone(user_text);
    ui.on_event(CHANGE_USER_TEXT, move |event| match event.as_text() {
        Ok(value) => *state.borrow_mut() = value.to_string(),
        Err(e) => tracing::warn!(error = %e, "unreadable text result"),
    });

    ui
}

/// Swaps spaces and underscores and flips the case of everything else.
fn funkify(s: &str) -> String {
    s.chars()
        .flat_map(|ch| -> Box<dyn Iterator<Item = char>> {
            match ch {
                ' ' => Box::new(std::iter::once('_')),
                '_' => Box::new(std::iter::once(' ')),
                c if c.is_lowercase() => Box::new(c.to_uppercase()),
                c => Box::new(c.to_lowercase()),
            }
        })
        .collect()
}
