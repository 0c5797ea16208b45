use thiserror::Error;

use crate::zone::{Direction, Step, ZoneName};

/// Top-level error type for table zone configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableZonesError {
    #[error(transparent)]
    Shape(#[from] ShapeDefect),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Step(#[from] StepError),

    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// Why four points do not form a usable zone boundary.
///
/// Variants are listed in the order the checks run; the first failing check
/// decides the defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeDefect {
    #[error("Polygon has duplicate points.")]
    DuplicatePoints,

    #[error("Polygon is self-intersecting.")]
    SelfIntersecting,

    #[error("Polygon is not convex.")]
    NotConvex,
}

/// Rejections of a proposed zone placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error(transparent)]
    InvalidShape(#[from] ShapeDefect),

    #[error("Boundary {step} intersects with {zone} boundary.")]
    Overlap {
        step: Step,
        zone: ZoneName,
        /// Number of boundary intersection points found.
        points: usize,
    },

    #[error("step {0} has no zone to place")]
    NoZoneAtStep(Step),
}

/// Errors related to moving through the step sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("Cannot move {direction} from {step} step.")]
    Boundary { direction: Direction, step: Step },

    #[error("step {step} is not part of the sequence for capacity {capacity}")]
    NotInSequence { step: Step, capacity: u8 },
}

/// Errors related to creating, loading and looking up table setups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("Invalid capacity {0}. Must be between {min} and {max}.", min = crate::config::MIN_CAPACITY, max = crate::config::MAX_CAPACITY)]
    InvalidCapacity(u8),

    #[error("no setup found for camera {0}")]
    NotFound(String),

    #[error("a setup already exists for table {table_id} or camera {camera_id}")]
    AlreadyExists { table_id: String, camera_id: String },

    #[error("zone {0} is missing")]
    MissingZone(ZoneName),

    #[error("zone {0} appears more than once")]
    DuplicateZone(ZoneName),

    #[error("zone {0} is outside the table capacity")]
    UnexpectedZone(ZoneName),

    #[error("unknown zone or step name {0:?}")]
    UnknownName(String),

    #[error("unknown direction {0:?}, expected \"next\" or \"previous\"")]
    UnknownDirection(String),
}

/// Convenience type alias for results using [`TableZonesError`].
pub type Result<T> = std::result::Result<T, TableZonesError>;
