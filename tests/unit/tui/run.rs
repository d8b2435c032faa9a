use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn esc_and_ctrl_c_quit() {
    assert!(is_quit_key(&Key::simple(KeyCode::Esc)));
    assert!(is_quit_key(&Key::ctrl(KeyCode::Char('c'))));
    assert!(!is_quit_key(&Key::ch('c')));
    assert!(!is_quit_key(&Key::simple(KeyCode::Enter)));
}

#[test]
fn drain_hands_every_result_to_the_screen() {
    let (tx, rx) = mpsc::channel();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut ui = Ui::default();
    let log = Rc::clone(&seen);
    ui.on_event(1, move |event| log.borrow_mut().push(event.as_u16().unwrap()));

    tx.send(UiEvent::u16(1, 10)).unwrap();
    tx.send(UiEvent::failed(2, "boom")).unwrap();
    tx.send(UiEvent::u16(1, 20)).unwrap();

    assert_eq!(drain_results(&mut ui, &rx), 3);
    assert_eq!(*seen.borrow(), vec![10, 20]);
    assert_eq!(drain_results(&mut ui, &rx), 0);
}
