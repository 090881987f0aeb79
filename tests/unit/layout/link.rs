use super::*;
use kurbo::{ParamCurve, PathEl, Shape};

#[test]
fn curve_starts_and_ends_at_endpoints() {
    let a = Point::new(100.0, 0.0);
    let b = Point::new(40.0, 200.0);
    let path = bump_y(a, b);
    let segs: Vec<_> = path.segments().collect();
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].eval(0.0), a);
    assert_eq!(segs[0].eval(1.0), b);
}

#[test]
fn control_points_share_the_midline() {
    let path = bump_y(Point::new(0.0, 10.0), Point::new(50.0, 30.0));
    let PathEl::CurveTo(c1, c2, _) = path.elements()[1] else {
        panic!("expected a cubic segment");
    };
    assert_eq!(c1, Point::new(0.0, 20.0));
    assert_eq!(c2, Point::new(50.0, 20.0));
}

#[test]
fn vertical_link_is_straight() {
    let path = bump_y(Point::new(5.0, 0.0), Point::new(5.0, 100.0));
    let bbox = path.bounding_box();
    assert_eq!(bbox.width(), 0.0);
    assert_eq!(bbox.height(), 100.0);
}
