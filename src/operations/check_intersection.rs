use std::fmt::Write as _;

use crate::geometry::Quadrilateral;
use crate::math::intersect_2d::segment_intersection_point;
use crate::math::Point2;

/// A single boundary crossing found by [`CheckIntersection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHit {
    /// The intersection point.
    pub point: Point2,
    /// Edge index on the first quadrilateral (0 = `UL-UR`, ..., 3 = `LL-UL`).
    pub edge_a: usize,
    /// Edge index on the second quadrilateral.
    pub edge_b: usize,
}

/// Result of a boundary intersection check between two quadrilaterals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntersectionReport {
    hits: Vec<EdgeHit>,
}

impl IntersectionReport {
    /// True when the two boundaries do not meet at all.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.hits.is_empty()
    }

    /// Number of intersection points, counted once per edge pair.
    #[must_use]
    pub fn count(&self) -> usize {
        self.hits.len()
    }

    #[must_use]
    pub fn hits(&self) -> &[EdgeHit] {
        &self.hits
    }

    /// Intersection points in edge-pair order. Coincident points are kept.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.hits.iter().map(|h| h.point).collect()
    }

    /// Human-readable verdict including every intersection point.
    #[must_use]
    pub fn reason(&self) -> String {
        if self.hits.is_empty() {
            return "The placement is valid. The quadrilaterals do not intersect.".to_owned();
        }
        let mut listed = String::new();
        for (i, hit) in self.hits.iter().enumerate() {
            if i > 0 {
                listed.push_str(", ");
            }
            let _ = write!(listed, "({:?}, {:?})", hit.point.x, hit.point.y);
        }
        format!(
            "The placement is not valid. The quadrilaterals intersect at {} point(s): [{listed}]",
            self.hits.len()
        )
    }
}

/// Finds every point where the boundaries of two quadrilaterals meet.
///
/// Each of the 4 edges of the first quadrilateral is tested against each of
/// the 4 edges of the second. Endpoint touches count, so two quads sharing a
/// corner report that corner once per touching edge pair. A quadrilateral
/// lying entirely inside the other has no boundary hits and passes.
pub struct CheckIntersection {
    a: Quadrilateral,
    b: Quadrilateral,
}

impl CheckIntersection {
    /// Creates a new `CheckIntersection` query.
    #[must_use]
    pub fn new(a: Quadrilateral, b: Quadrilateral) -> Self {
        Self { a, b }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> IntersectionReport {
        let edges_b = self.b.edges();
        let mut hits = Vec::new();
        for (edge_a, (a0, a1)) in self.a.edges().into_iter().enumerate() {
            for (edge_b, &(b0, b1)) in edges_b.iter().enumerate() {
                if let Some(point) = segment_intersection_point(a0, a1, b0, b1) {
                    hits.push(EdgeHit {
                        point,
                        edge_a,
                        edge_b,
                    });
                }
            }
        }
        IntersectionReport { hits }
    }
}
