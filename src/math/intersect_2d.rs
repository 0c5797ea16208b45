use super::{Point, Point2, Vector2};

/// Bounded segment-segment intersection in 2D.
///
/// Solves `a0 + t * (a1 - a0) = b0 + u * (b1 - b0)` and returns the hit point
/// when both `t` and `u` lie in the closed range `[0, 1]`, so touching at an
/// endpoint counts. Parallel segments (zero determinant) never intersect,
/// collinear overlaps included.
///
/// The range test runs on exact integer numerators; only the returned point is
/// computed in floating point.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn segment_intersection_point(a0: Point, a1: Point, b0: Point, b1: Point) -> Option<Point2> {
    let (x1, y1) = (i128::from(a0.x), i128::from(a0.y));
    let (x2, y2) = (i128::from(a1.x), i128::from(a1.y));
    let (x3, y3) = (i128::from(b0.x), i128::from(b0.y));
    let (x4, y4) = (i128::from(b1.x), i128::from(b1.y));

    let mut denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom == 0 {
        return None;
    }
    let mut t_num = (x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4);
    let mut u_num = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3));

    if denom < 0 {
        denom = -denom;
        t_num = -t_num;
        u_num = -u_num;
    }
    if !(0..=denom).contains(&t_num) || !(0..=denom).contains(&u_num) {
        return None;
    }

    let t = t_num as f64 / denom as f64;
    let origin = a0.to_point2();
    let dir = Vector2::new(f64::from(a1.x) - origin.x, f64::from(a1.y) - origin.y);
    Some(origin + dir * t)
}
