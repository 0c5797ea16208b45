pub mod intersect_2d;
pub mod predicates;

use serde::{Deserialize, Serialize};

/// 2D point type for computed (non-integral) positions.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Integer pixel coordinate on the camera frame.
///
/// Zone corners are always integral. Exact comparisons on these values are
/// meaningful, so the predicates built on top of them use no tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The all-zero point used by the fallback quadrilateral.
    pub const ORIGIN: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts to a floating-point `nalgebra` point.
    #[must_use]
    pub fn to_point2(self) -> Point2 {
        Point2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
