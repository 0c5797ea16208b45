pub mod quad;

pub use quad::{Corner, Quadrilateral};
