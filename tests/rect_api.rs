use center_rect::{Center, Point, Position, Rect, RectErr};

#[test]
fn rect_and_point_share_a_center() {
    let anchor = Center::new(Point::new(0.0, 0.0));
    let mut a = Rect::new(anchor.clone(), 2.0, 1.0);
    let b = Rect::new(anchor.clone(), 0.5, 0.5);

    a.set_x(5.0);
    assert_eq!(anchor.x(), 5.0);
    assert_eq!(b.x(), 5.0);
    assert!(b.contains(&Point::new(5.25, 0.0)));
    assert!(a.intersects(&b));
}

#[test]
fn documented_containment_cases() {
    let r = Rect::from_xywh(0.0, 0.0, 2.0, 1.0);
    assert!(r.contains(&Point::new(1.0, 0.5)));
    assert!(!r.contains(&Point::new(2.0, 0.0)));
    assert!(!r.contains(&Point::new(3.0, 0.0)));
}

#[test]
fn sweep_keeps_intersection_symmetric() {
    let fixed = Rect::from_xywh(0.0, 0.0, 1.0, 1.0);
    let mut moving = Rect::from_xywh(-4.0, 0.5, 1.0, 0.5);
    let mut hits = Vec::new();
    for step in 0..=16 {
        moving.set_x(-4.0 + step as f64 * 0.5);
        let hit = fixed.intersects(&moving);
        assert_eq!(hit, moving.intersects(&fixed), "step {}", step);
        hits.push(hit);
    }
    // x in [-2, 2] overlaps or touches, which are steps 4 through 12
    let expected: Vec<bool> = (0..=16).map(|s| (4..=12).contains(&s)).collect();
    assert_eq!(hits, expected);
}

#[test]
fn validated_construction() {
    let center = Center::new(Point::new(1.0, 1.0));
    let ok = Rect::try_new(center.clone(), 1.0, 1.0).map(|r| r.x());
    assert_eq!(ok, Ok(1.0));
    let err = Rect::try_new(center, 1.0, -0.5).map(|r| r.x());
    assert_eq!(err, Err(RectErr::NegativeHeight));
    assert_eq!(RectErr::NegativeHeight.to_string(), "NegativeHeight");
}
