//! Exact orientation predicates on integer points.
//!
//! Differences of `i32` coordinates need 33 bits, so products are evaluated
//! in `i128`.

use super::Point;

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Signed cross product `(a - o) × (b - o)`.
///
/// Twice the signed area of the triangle `o, a, b`.
#[must_use]
pub fn cross(o: Point, a: Point, b: Point) -> i128 {
    let (ax, ay) = (i128::from(a.x) - i128::from(o.x), i128::from(a.y) - i128::from(o.y));
    let (bx, by) = (i128::from(b.x) - i128::from(o.x), i128::from(b.y) - i128::from(o.y));
    ax * by - ay * bx
}

/// Orientation of `p -> q -> r` from the sign of `(q - p) × (r - q)`.
///
/// Exactly zero is collinear.
#[must_use]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let (ux, uy) = (i128::from(q.x) - i128::from(p.x), i128::from(q.y) - i128::from(p.y));
    let (vx, vy) = (i128::from(r.x) - i128::from(q.x), i128::from(r.y) - i128::from(q.y));
    match (ux * vy - uy * vx).signum() {
        0 => Orientation::Collinear,
        1 => Orientation::CounterClockwise,
        _ => Orientation::Clockwise,
    }
}

/// General-position segment crossing test.
///
/// True when the endpoints of each segment lie on different sides of the
/// other. A single collinear endpoint (a touch) still counts. Fully collinear
/// overlapping segments are NOT reported: all four orientations agree.
#[must_use]
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    orientation(a1, a2, b1) != orientation(a1, a2, b2)
        && orientation(b1, b2, a1) != orientation(b1, b2, a2)
}

/// Whether `q` lies within the bounding box of segment `p`-`r`.
///
/// Only meaningful when `p`, `q`, `r` are already known to be collinear.
#[must_use]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Whether `q` lies on the closed segment `p`-`r`.
#[must_use]
pub fn point_on_segment(p: Point, q: Point, r: Point) -> bool {
    orientation(p, q, r) == Orientation::Collinear && on_segment(p, q, r)
}
