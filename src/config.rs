//! Fixed configuration values shared by the zone layout and the step sequence.

/// Smallest number of numbered seating slots a table can have.
pub const MIN_CAPACITY: u8 = 1;

/// Largest number of numbered seating slots a table can have.
pub const MAX_CAPACITY: u8 = 6;

/// Camera frame width in pixels.
pub const FRAME_WIDTH: i32 = 1920;

/// Camera frame height in pixels.
pub const FRAME_HEIGHT: i32 = 1080;

/// Inset of the default OUTER zone from the frame edges.
pub const OUTER_MARGIN: i32 = 40;

/// Default TABLE zone extents (left, top, right, bottom).
pub const TABLE_EXTENTS: (i32, i32, i32, i32) = (480, 360, 1440, 720);

/// Half of the default slot height; slots straddle the table's long edges.
pub const SLOT_HALF_HEIGHT: i32 = 120;

/// Horizontal gap between neighbouring default slots.
pub const SLOT_GAP: i32 = 40;
