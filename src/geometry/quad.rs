use serde::{Deserialize, Serialize};

use crate::math::Point;

/// Corner label of a zone quadrilateral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    UpperLeft,
    UpperRight,
    LowerRight,
    LowerLeft,
}

impl Corner {
    /// All corners in boundary traversal order.
    pub const ALL: [Self; 4] = [
        Self::UpperLeft,
        Self::UpperRight,
        Self::LowerRight,
        Self::LowerLeft,
    ];

    /// Short label used in records and messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::UpperLeft => "UL",
            Self::UpperRight => "UR",
            Self::LowerRight => "LR",
            Self::LowerLeft => "LL",
        }
    }
}

/// Four labelled corners bounding a zone.
///
/// The boundary is always walked `UL -> UR -> LR -> LL -> UL`. Corner labels
/// travel with their points: permuting them yields a different polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Quadrilateral {
    #[serde(rename = "UL")]
    pub ul: Point,
    #[serde(rename = "UR")]
    pub ur: Point,
    #[serde(rename = "LR")]
    pub lr: Point,
    #[serde(rename = "LL")]
    pub ll: Point,
}

impl Quadrilateral {
    /// The all-(0, 0) quadrilateral returned when no default layout exists.
    pub const DEGENERATE: Self = Self::new(Point::ORIGIN, Point::ORIGIN, Point::ORIGIN, Point::ORIGIN);

    #[must_use]
    pub const fn new(ul: Point, ur: Point, lr: Point, ll: Point) -> Self {
        Self { ul, ur, lr, ll }
    }

    /// Axis-aligned rectangle from its left, top, right and bottom extents.
    #[must_use]
    pub const fn rect(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(
            Point::new(left, top),
            Point::new(right, top),
            Point::new(right, bottom),
            Point::new(left, bottom),
        )
    }

    /// Returns the point at the given corner.
    #[must_use]
    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::UpperLeft => self.ul,
            Corner::UpperRight => self.ur,
            Corner::LowerRight => self.lr,
            Corner::LowerLeft => self.ll,
        }
    }

    /// Corner points in traversal order.
    #[must_use]
    pub fn points(&self) -> [Point; 4] {
        [self.ul, self.ur, self.lr, self.ll]
    }

    /// Closed boundary edges: `UL-UR`, `UR-LR`, `LR-LL`, `LL-UL`.
    #[must_use]
    pub fn edges(&self) -> [(Point, Point); 4] {
        [
            (self.ul, self.ur),
            (self.ur, self.lr),
            (self.lr, self.ll),
            (self.ll, self.ul),
        ]
    }
}

impl From<[Point; 4]> for Quadrilateral {
    fn from([ul, ur, lr, ll]: [Point; 4]) -> Self {
        Self::new(ul, ur, lr, ll)
    }
}

impl std::fmt::Display for Quadrilateral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, corner) in Corner::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", corner.label(), self.corner(corner))?;
        }
        Ok(())
    }
}
