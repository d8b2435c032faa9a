use super::*;
use crate::runtime::CommandRuntime;
use crate::ui::backend::test::TestSurface;
use crate::ui::core::style::Color;

#[test]
fn draws_a_framed_label() {
    let mut button = Button::new(6, 3, "OK", UiEvent::none(1));
    let mut surface = TestSurface::new(6, 3);
    button.draw(&mut surface, 0, 0);
    assert_eq!(surface.dump(), "┌────┐\n│OK  │\n└────┘");
}

#[test]
fn active_button_uses_the_inverted_style() {
    let style = Style::new(Color::Yellow, Color::Blue);
    let mut button = Button::new(6, 3, "OK", UiEvent::none(1)).style(style);
    let mut surface = TestSurface::new(6, 3);

    button.draw(&mut surface, 0, 0);
    assert_eq!(surface.cell(1, 1).unwrap().style, style);

    button.set_active(true);
    button.draw(&mut surface, 0, 0);
    assert_eq!(surface.cell(1, 1).unwrap().style, style.highlighted());
}

#[test]
fn enter_sends_a_copy_of_the_event_each_time() {
    let runtime = CommandRuntime::new(1).unwrap();
    let (sink, rx) = runtime.channel();
    let event = UiEvent::text(7, "go");
    let mut button = Button::new(6, 3, "Go", event.clone());

    assert!(button.handle_key(Key::simple(KeyCode::Enter), &sink));
    assert!(button.handle_key(Key::simple(KeyCode::Enter), &sink));
    assert_eq!(rx.try_recv().unwrap(), event);
    assert_eq!(rx.try_recv().unwrap(), event);
    assert_eq!(button.event(), &event);
}

#[test]
fn other_keys_are_ignored() {
    let runtime = CommandRuntime::new(1).unwrap();
    let (sink, rx) = runtime.channel();
    let mut button = Button::new(6, 3, "Go", UiEvent::none(0));
    assert!(!button.handle_key(Key::ch(' '), &sink));
    assert!(!button.handle_key(Key::simple(KeyCode::Down), &sink));
    assert!(rx.try_recv().is_err());
}
