//! Menu screen that recolours itself.
//!
//! Usage: `menu_demo [config.json]`. Arrow keys or digits select, Enter runs
//! the option, F1 toggles help, Esc or Ctrl-C quits.

use cellkit::config::UiConfig;
use cellkit::runtime::UiEvent;
use cellkit::ui::core::{Color, Size, Style};
use cellkit::ui::widgets::{Menu, MenuMode, MenuOption, TextBox};
use cellkit::ui::Ui;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

const MENU_CHANGE: u16 = 0;
const FG_CHANGE: u16 = 1;
const BG_CHANGE: u16 = 2;
const QUIT: u16 = 3;

const MENU_HEIGHT: u16 = 10;
const MENU_TOP: i32 = 16;

const PALETTE: [(&str, Color); 9] = [
    ("Default", Color::Default),
    ("Black", Color::Black),
    ("White", Color::White),
    ("Red", Color::Red),
    ("Green", Color::Green),
    ("Blue", Color::Blue),
    ("Yellow", Color::Yellow),
    ("Cyan", Color::Cyan),
    ("Magenta", Color::Magenta),
];

const HEADLINE: &str = r#"          ____
        ,'  , `.
     ,-+-,.' _ |
  ,-+-. ;   , ||              ,---,          ,--,
 ,--.'|'   |  ;|          ,-+-. /  |       ,'_ /|
|   |  ,', |  ':  ,---.  ,--.'|'   |  .--. |  | :
|   | /  | |  || /     \|   |  ,"' |,'_ /| :  . |
'   | :  | :  |,/    /  |   | /  | ||  ' | |  . .
;   . |  ; |--'.    ' / |   | |  | ||  | ' |  | |
|   : |  | ,   '   ;   /|   | |  |/ :  | : ;  ; |
|   : '  |/    '   |  / |   | |--'  '  :  `--'   \
;   | |`-'     |   :    |   |/      :  ,      .-./
|   ;/          \   \  /'---'        `--`----'
'---'            `----'"#;
const HEADLINE_WIDTH: u16 = 51;
const HEADLINE_HEIGHT: u16 = 14;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Screen {
    #[default]
    Main,
    Foreground,
    Background,
}

impl Screen {
    fn code(self) -> u16 {
        match self {
            Screen::Main => 0,
            Screen::Foreground => 1,
            Screen::Background => 2,
        }
    }

    fn from_code(code: u16) -> Self {
        match code {
            1 => Screen::Foreground,
            2 => Screen::Background,
            _ => Screen::Main,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Settings {
    screen: Screen,
    style: Style,
    quit: bool,
}

type Shared = Rc<RefCell<Settings>>;

fn main() -> io::Result<()> {
    let config = std::env::args()
        .nth(1)
        .map(UiConfig::load_or_default)
        .unwrap_or_default();
    let _logging = cellkit::logging::init(&config.log);

    let settings: Shared = Rc::default();
    cellkit::tui::run(&config, |screen| build(&settings, screen))
}

fn build(settings: &Shared, screen: Size) -> Option<Ui> {
    let current = *settings.borrow();
    if current.quit {
        return None;
    }

    let mut ui = Ui::new(current.style);

    let mut headline = TextBox::new(HEADLINE_WIDTH, HEADLINE_HEIGHT).style(current.style);
    headline.add_text(HEADLINE);
    let x = (screen.w as i32 - HEADLINE_WIDTH as i32) / 2;
    ui.add_field(headline, x, 0, false);

    let width = screen.w.saturating_sub(18);
    let menu = match current.screen {
        Screen::Main => main_menu(width, current.style),
        Screen::Foreground => color_menu(width, current.style, FG_CHANGE),
        Screen::Background => color_menu(width, current.style, BG_CHANGE),
    };
    ui.add_field(menu, 2, MENU_TOP, true);

    let state = Rc::clone(settings);
    ui.on_event(MENU_CHANGE, move |event| {
        if let Ok(code) = event.as_u16() {
            state.borrow_mut().screen = Screen::from_code(code);
        }
    });
    let state = Rc::clone(settings);
    ui.on_event(FG_CHANGE, move |event| {
        if let Some(color) = palette_color(event) {
            state.borrow_mut().style.fg = color;
        }
    });
    let state = Rc::clone(settings);
    ui.on_event(BG_CHANGE, move |event| {
        if let Some(color) = palette_color(event) {
            state.borrow_mut().style.bg = color;
        }
    });
    let state = Rc::clone(settings);
    ui.on_event(QUIT, move |_| state.borrow_mut().quit = true);

    Some(ui)
}

fn palette_color(event: &UiEvent) -> Option<Color> {
    let index = event.as_u16().ok()?;
    PALETTE.get(index as usize).map(|(_, color)| *color)
}

fn main_menu(width: u16, style: Style) -> Menu {
    let mut menu = Menu::new(
        width,
        MENU_HEIGHT,
        "F1 - Toggle help text.",
        MenuMode::List,
        true,
        style,
    );
    menu.push_option(MenuOption::new("Font Color", "Change the font color.", || {
        UiEvent::u16(MENU_CHANGE, Screen::Foreground.code())
    }));
    menu.push_option(MenuOption::new(
        "Background Color",
        "Change the background color.",
        || UiEvent::u16(MENU_CHANGE, Screen::Background.code()),
    ));
    menu.push_option(MenuOption::new("Quit", "Exit the menu example.", || {
        UiEvent::none(QUIT)
    }));
    menu
}

fn color_menu(width: u16, style: Style, tag: u16) -> Menu {
    let mut menu = Menu::new(width, MENU_HEIGHT, "Colors", MenuMode::List, true, style);
    for (index, (name, _)) in PALETTE.iter().enumerate() {
        let help = if index == 0 {
            "Use the terminal's default color."
        } else {
            "Do you seriously need help text here?"
        };
        let value = index as u16;
        menu.push_option(MenuOption::new(*name, help, move || UiEvent::u16(tag, value)));
    }
    menu.push_option(MenuOption::new(
        "Go back",
        "Return to the previous screen.",
        || UiEvent::u16(MENU_CHANGE, Screen::Main.code()),
    ));
    menu
}
