use super::*;

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('c'));
    assert_eq!(key.code, KeyCode::Char('c'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_key_from_code() {
    let key: Key = KeyCode::Enter.into();
    assert_eq!(key, Key::simple(KeyCode::Enter));
    assert!(key.modifiers.is_empty());
}

#[test]
fn printable_accepts_plain_and_shifted_chars() {
    assert_eq!(Key::ch('a').printable(), Some('a'));
    assert_eq!(Key::ch(' ').printable(), Some(' '));
    let shifted = Key::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
    assert_eq!(shifted.printable(), Some('A'));
}

#[test]
fn printable_rejects_chords_and_named_keys() {
    assert_eq!(Key::ctrl(KeyCode::Char('s')).printable(), None);
    let alt = Key::new(KeyCode::Char('x'), KeyModifiers::ALT);
    assert_eq!(alt.printable(), None);
    assert_eq!(Key::simple(KeyCode::Tab).printable(), None);
    assert_eq!(Key::ch('\u{7}').printable(), None);
}

#[test]
fn test_input_event_accessors() {
    let input = InputEvent::Key(Key::ch('q'));
    assert!(input.is_key());
    assert_eq!(input.as_key(), Some(&Key::ch('q')));

    let resize = InputEvent::Resize(80, 24);
    assert!(!resize.is_key());
    assert_eq!(resize.as_key(), None);
}

#[test]
fn modifiers_combine() {
    let mut mods = KeyModifiers::SHIFT;
    mods |= KeyModifiers::CONTROL;
    assert!(mods.contains(KeyModifiers::SHIFT));
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(!mods.contains(KeyModifiers::ALT));
    assert_eq!(KeyModifiers::SHIFT | KeyModifiers::CONTROL, mods);
}
