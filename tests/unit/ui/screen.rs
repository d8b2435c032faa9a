use super::*;
use crate::core::event::KeyCode;
use crate::runtime::CommandRuntime;
use crate::ui::backend::test::TestSurface;
use crate::ui::core::geom::Pos;
use crate::ui::core::style::Color;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

struct Probe {
    name: char,
    log: Log,
    consume: bool,
}

impl Widget for Probe {
    fn draw(&mut self, surface: &mut dyn Surface, x: i32, y: i32) {
        self.log.borrow_mut().push(format!("draw {}", self.name));
        surface.set_cell(x, y, self.name, Style::default());
    }

    fn handle_key(&mut self, _key: Key, _events: &EventSink) -> bool {
        self.log.borrow_mut().push(format!("key {}", self.name));
        self.consume
    }
}

fn probe(name: char, log: &Log) -> Probe {
    Probe {
        name,
        log: Rc::clone(log),
        consume: true,
    }
}

#[test]
fn input_goes_to_the_focused_field_and_both_draw_in_order() {
    let runtime = CommandRuntime::new(1).unwrap();
    let (events, _rx) = runtime.channel();
    let log: Log = Rc::default();

    let mut ui = Ui::default();
    ui.add_field(probe('a', &log), 0, 0, false);
    ui.add_field(probe('b', &log), 0, 0, true);

    assert!(ui.handle_input(Key::ch('x'), &events));
    assert_eq!(*log.borrow(), vec!["key b".to_string()]);

    log.borrow_mut().clear();
    let mut surface = TestSurface::new(4, 2);
    ui.draw(&mut surface).unwrap();
    assert_eq!(*log.borrow(), vec!["draw a".to_string(), "draw b".to_string()]);
    assert_eq!(surface.cell(0, 0).unwrap().ch, 'b');
}

#[test]
fn first_focused_field_wins() {
    let runtime = CommandRuntime::new(1).unwrap();
    let (events, _rx) = runtime.channel();
    let log: Log = Rc::default();

    let mut ui = Ui::default();
    ui.add_field(probe('a', &log), 0, 0, false);
    ui.add_field(probe('b', &log), 1, 0, true);
    ui.add_field(probe('c', &log), 2, 0, true);

    ui.handle_input(Key::simple(KeyCode::Enter), &events);
    assert_eq!(*log.borrow(), vec!["key b".to_string()]);
}

#[test]
fn focused_field_result_is_returned() {
    let runtime = CommandRuntime::new(1).unwrap();
    let (events, _rx) = runtime.channel();
    let log: Log = Rc::default();

    let mut ui = Ui::default();
    let mut lazy = probe('a', &log);
    lazy.consume = false;
    ui.add_field(lazy, 0, 0, true);
    assert!(!ui.handle_input(Key::ch('x'), &events));
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn no_focus_means_not_consumed() {
    let runtime = CommandRuntime::new(1).unwrap();
    let (events, _rx) = runtime.channel();
    let log: Log = Rc::default();

    let mut ui = Ui::default();
    assert!(!ui.handle_input(Key::ch('x'), &events));
    ui.add_field(probe('a', &log), 0, 0, false);
    assert!(!ui.handle_input(Key::ch('x'), &events));
    assert!(log.borrow().is_empty());
}

#[test]
fn draw_clears_hides_the_cursor_and_flushes_once() {
    let style = Style::new(Color::White, Color::Blue);
    let log: Log = Rc::default();
    let mut ui = Ui::new(style);
    ui.add_field(probe('a', &log), 1, 1, false);

    let mut surface = TestSurface::new(3, 3);
    surface.set_cursor(Some(Pos::new(2, 2)));
    ui.draw(&mut surface).unwrap();

    assert_eq!(surface.flush_count(), 1);
    assert_eq!(surface.cursor(), None);
    assert_eq!(surface.cell(0, 0).unwrap().style, style);
    assert_eq!(surface.cell(1, 1).unwrap().ch, 'a');
    assert_eq!(ui.fields().len(), 1);
    assert_eq!(ui.fields()[0].position(), (1, 1));
    assert!(!ui.fields()[0].has_focus());
}

#[test]
fn results_reach_registered_callbacks() {
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let mut ui = Ui::default();
    let sink = Rc::clone(&seen);
    ui.on_event(3, move |event| {
        sink.borrow_mut().push(event.as_text().unwrap_or_default().to_string());
    });

    assert!(ui.dispatch_event(&UiEvent::text(3, "hello")));
    assert!(!ui.dispatch_event(&UiEvent::text(4, "ignored")));
    assert_eq!(*seen.borrow(), vec!["hello".to_string()]);
}
