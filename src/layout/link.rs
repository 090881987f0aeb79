use crate::foundation::core::{BezPath, Point};

/// Vertical "bump" curve from `source` to `target`.
///
/// Both control points sit on the horizontal midline between the endpoints, so the curve
/// leaves the parent and enters the child vertically.
pub fn bump_y(source: Point, target: Point) -> BezPath {
    let mid_y = (source.y + target.y) / 2.0;
    let mut path = BezPath::new();
    path.move_to(source);
    path.curve_to(
        Point::new(source.x, mid_y),
        Point::new(target.x, mid_y),
        target,
    );
    path
}

#[cfg(test)]
#[path = "../../tests/unit/layout/link.rs"]
mod tests;
