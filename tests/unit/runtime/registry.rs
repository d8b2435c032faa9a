use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn dispatch_invokes_the_matching_callback() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut registry = EventRegistry::new();

    let sink = seen.clone();
    registry.register(7, move |event| {
        sink.borrow_mut()
            .push(event.as_text().unwrap_or_default().to_string());
    });

    assert!(registry.dispatch(&UiEvent::text(7, "hello")));
    assert!(!registry.dispatch(&UiEvent::text(8, "ignored")));
    assert_eq!(&*seen.borrow(), &["hello".to_string()]);
}

#[test]
fn register_replaces_previous_callback() {
    let hits = Rc::new(RefCell::new((0, 0)));
    let mut registry = EventRegistry::new();

    let first = hits.clone();
    registry.register(1, move |_| first.borrow_mut().0 += 1);
    let second = hits.clone();
    registry.register(1, move |_| second.borrow_mut().1 += 1);

    registry.dispatch(&UiEvent::none(1));
    assert_eq!(*hits.borrow(), (0, 1));
    assert_eq!(registry.len(), 1);
    assert!(registry.contains(1));
}

#[test]
fn empty_registry_reports_nothing_handled() {
    let mut registry = EventRegistry::new();
    assert!(registry.is_empty());
    assert!(!registry.dispatch(&UiEvent::none(0)));
    assert_eq!(format!("{:?}", registry), "EventRegistry { tags: [] }");
}
