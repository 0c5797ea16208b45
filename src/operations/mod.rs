mod change_step;
mod check_intersection;
mod placement;
mod validate_polygon;

pub use change_step::{ChangeStep, StepChange};
pub use check_intersection::{CheckIntersection, EdgeHit, IntersectionReport};
pub use placement::{relevant_neighbors, AttemptPlacement};
pub use validate_polygon::{PolygonVerdict, ValidatePolygon};
