use crate::error::ShapeDefect;
use crate::geometry::Quadrilateral;
use crate::math::predicates::{cross, segments_intersect};
use crate::math::Point;

/// Outcome of [`ValidatePolygon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonVerdict {
    Valid,
    Invalid(ShapeDefect),
}

impl PolygonVerdict {
    #[must_use]
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }

    #[must_use]
    pub fn defect(self) -> Option<ShapeDefect> {
        match self {
            Self::Valid => None,
            Self::Invalid(defect) => Some(defect),
        }
    }

    /// Human-readable verdict, e.g. `"Polygon is not convex."`.
    #[must_use]
    pub fn reason(self) -> String {
        match self {
            Self::Valid => "Polygon is valid.".to_owned(),
            Self::Invalid(defect) => defect.to_string(),
        }
    }

    /// Converts to a `Result` for `?` propagation.
    ///
    /// # Errors
    ///
    /// Returns the defect when the polygon is invalid.
    pub fn into_result(self) -> Result<(), ShapeDefect> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(defect) => Err(defect),
        }
    }
}

/// Checks that a quadrilateral is a simple, non-degenerate convex polygon.
///
/// Checks run in a fixed order and the first failure wins:
/// duplicate corners, then crossing edges, then convexity.
pub struct ValidatePolygon {
    quad: Quadrilateral,
}

impl ValidatePolygon {
    /// Creates a new `ValidatePolygon` query.
    #[must_use]
    pub fn new(quad: Quadrilateral) -> Self {
        Self { quad }
    }

    /// Creates the query from individual corners.
    #[must_use]
    pub fn from_corners(ul: Point, ur: Point, lr: Point, ll: Point) -> Self {
        Self::new(Quadrilateral::new(ul, ur, lr, ll))
    }

    /// Executes the validation.
    #[must_use]
    pub fn execute(&self) -> PolygonVerdict {
        let points = self.quad.points();
        if has_duplicate_points(&points) {
            PolygonVerdict::Invalid(ShapeDefect::DuplicatePoints)
        } else if is_self_intersecting(&points) {
            PolygonVerdict::Invalid(ShapeDefect::SelfIntersecting)
        } else if !is_convex(&points) {
            PolygonVerdict::Invalid(ShapeDefect::NotConvex)
        } else {
            PolygonVerdict::Valid
        }
    }
}

fn has_duplicate_points(points: &[Point]) -> bool {
    points
        .iter()
        .enumerate()
        .any(|(i, p)| points[i + 1..].contains(p))
}

/// Whether any two non-adjacent edges of the closed polygon cross.
///
/// Adjacent edges share a vertex and are skipped, including the wraparound
/// pair (first edge, last edge).
fn is_self_intersecting(points: &[Point]) -> bool {
    let n = points.len();
    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_intersect(points[i], points[(i + 1) % n], points[j], points[(j + 1) % n]) {
                return true;
            }
        }
    }
    false
}

/// Whether every non-zero turn of the closed polygon has the same sign.
///
/// Collinear triples are ignored. Fewer than three points is never convex.
fn is_convex(points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0;
    for i in 0..n {
        let turn = cross(points[i], points[(i + 1) % n], points[(i + 2) % n]).signum();
        if turn == 0 {
            continue;
        }
        if sign == 0 {
            sign = turn;
        } else if sign != turn {
            return false;
        }
    }
    true
}
