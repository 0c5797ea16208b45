//! Geometry validation and guided placement of camera table zones.
//!
//! A table seen by a camera is described by an OUTER frame, a TABLE surface
//! and up to six numbered seating slots, each bounded by a quadrilateral. An
//! operator places them one step at a time; each placement must be a simple
//! convex polygon and must not touch the zones its step forbids.

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod setup;
pub mod zone;

pub use error::{Result, TableZonesError};
pub use geometry::Quadrilateral;
pub use math::Point;
pub use setup::{SetupRegistry, TableSetup};
pub use zone::{Capacity, Direction, Step, Zone, ZoneName, ZoneSet};
