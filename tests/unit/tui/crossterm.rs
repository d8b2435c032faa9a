use super::*;
use crossterm::event::{
    Event, KeyCode as CtKeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers as CtMods,
};

fn press(code: CtKeyCode, mods: CtMods) -> Event {
    Event::Key(KeyEvent::new(code, mods))
}

#[test]
fn ctrl_space_normalizes_from_null() {
    let converted = into_key(KeyEvent::new(CtKeyCode::Null, CtMods::NONE)).unwrap();
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn printable_keys_keep_their_character() {
    let event = into_input_event(press(CtKeyCode::Char('q'), CtMods::NONE)).unwrap();
    assert_eq!(event, InputEvent::Key(Key::ch('q')));
}

#[test]
fn modifiers_are_carried_over() {
    let event = into_input_event(press(CtKeyCode::Char('c'), CtMods::CONTROL | CtMods::ALT));
    let key = *event.unwrap().as_key().unwrap();
    assert!(key.modifiers.contains(KeyModifiers::CONTROL));
    assert!(key.modifiers.contains(KeyModifiers::ALT));
    assert!(!key.modifiers.contains(KeyModifiers::SHIFT));
}

#[test]
fn navigation_and_function_keys_map_directly() {
    for (from, to) in [
        (CtKeyCode::Up, KeyCode::Up),
        (CtKeyCode::Enter, KeyCode::Enter),
        (CtKeyCode::Backspace, KeyCode::Backspace),
        (CtKeyCode::F(1), KeyCode::F(1)),
        (CtKeyCode::Esc, KeyCode::Esc),
    ] {
        let key = into_key(KeyEvent::new(from, CtMods::NONE)).unwrap();
        assert_eq!(key, Key::simple(to));
    }
}

#[test]
fn back_tab_becomes_shift_tab() {
    let key = into_key(KeyEvent::new(CtKeyCode::BackTab, CtMods::NONE)).unwrap();
    assert_eq!(key.code, KeyCode::Tab);
    assert!(key.modifiers.contains(KeyModifiers::SHIFT));
}

#[test]
fn releases_and_non_key_events_are_dropped() {
    let release = KeyEvent {
        code: CtKeyCode::Char('a'),
        modifiers: CtMods::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert!(into_key(release).is_none());
    assert!(into_input_event(Event::FocusGained).is_none());
    assert!(into_input_event(Event::Paste("x".into())).is_none());
}

#[test]
fn resize_is_forwarded() {
    assert_eq!(
        into_input_event(Event::Resize(80, 24)),
        Some(InputEvent::Resize(80, 24))
    );
}
