//! Points and vertex sequences shared by every shape.

pub mod point;
pub mod sequence;

pub use point::Point;
pub use sequence::{Edges, PointSequence};
