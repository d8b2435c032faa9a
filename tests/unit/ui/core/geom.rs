use super::*;

#[test]
fn extent_auto_takes_the_screen_dimension() {
    assert_eq!(Extent::Auto.resolve(80), 80);
    assert_eq!(Extent::Cells(12).resolve(80), 12);
    assert_eq!(Extent::from(7), Extent::Cells(7));
}

#[test]
fn rect_contains_respects_signed_origin() {
    let r = Rect::new(-1, -1, 3, 3);
    assert!(r.contains(-1, -1));
    assert!(r.contains(1, 1));
    assert!(!r.contains(2, 0));
    assert!(!Rect::new(0, 0, 0, 5).contains(0, 0));
}

#[test]
fn rect_shrink_saturates() {
    assert_eq!(Rect::new(2, 3, 10, 4).shrink(1), Rect::new(3, 4, 8, 2));
    assert!(Rect::new(0, 0, 1, 1).shrink(1).is_empty());
}

#[test]
fn pos_from_signed_rejects_negative() {
    assert_eq!(Pos::from_signed(3, 4), Some(Pos::new(3, 4)));
    assert_eq!(Pos::from_signed(-1, 4), None);
    assert_eq!(Pos::from_signed(70_000, 0), None);
}
