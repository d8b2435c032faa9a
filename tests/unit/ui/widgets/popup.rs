use super::*;
use crate::core::event::KeyCode;
use crate::runtime::CommandRuntime;
use crate::ui::backend::test::TestSurface;

fn popup(position: PopupPosition, w: u16, h: u16) -> Popup {
    Popup::new(
        "T",
        "ab",
        position,
        Extent::Cells(w),
        Extent::Cells(h),
        Size::new(80, 24),
    )
}

#[test]
fn origin_follows_the_position() {
    let screen = Size::new(20, 10);
    assert_eq!(popup(PopupPosition::Top, 10, 4).origin(screen), (5, 0));
    assert_eq!(popup(PopupPosition::Bottom, 10, 4).origin(screen), (5, 6));
    assert_eq!(popup(PopupPosition::Center, 10, 4).origin(screen), (5, 3));
}

#[test]
fn auto_extent_takes_the_screen_size() {
    let p = Popup::new(
        "t",
        "",
        PopupPosition::Bottom,
        Extent::Auto,
        Extent::Cells(6),
        Size::new(40, 12),
    );
    assert_eq!((p.width(), p.height()), (40, 6));
}

#[test]
fn title_only_popup_is_centered_in_its_frame() {
    let mut p = Popup::new(
        "HI",
        "",
        PopupPosition::Center,
        Extent::Cells(6),
        Extent::Cells(3),
        Size::new(12, 5),
    );
    let mut surface = TestSurface::new(12, 5);
    p.draw(&mut surface, 0, 0);
    assert_eq!(surface.dump(), "\n   ┌────┐\n   │ HI │\n   └────┘\n");
}

#[test]
fn content_is_separated_from_the_title_by_a_rule() {
    let mut p = popup(PopupPosition::Bottom, 8, 5);
    let mut surface = TestSurface::new(8, 5);
    p.draw(&mut surface, 0, 0);
    assert_eq!(
        surface.dump(),
        "┌──────┐\n│  T   │\n│ ──── │\n│  ab  │\n└──────┘"
    );
}

#[test]
fn draw_coordinates_are_ignored() {
    let mut p = popup(PopupPosition::Bottom, 8, 5);
    let mut at_origin = TestSurface::new(8, 5);
    let mut elsewhere = TestSurface::new(8, 5);
    p.draw(&mut at_origin, 0, 0);
    p.draw(&mut elsewhere, 30, 30);
    assert_eq!(at_origin.dump(), elsewhere.dump());
}

#[test]
fn popups_consume_no_input() {
    let runtime = CommandRuntime::new(1).unwrap();
    let (sink, _rx) = runtime.channel();
    let mut p = popup(PopupPosition::Top, 8, 5);
    assert!(!p.handle_key(Key::simple(KeyCode::Enter), &sink));
    assert!(!p.handle_key(Key::ch('q'), &sink));
}
