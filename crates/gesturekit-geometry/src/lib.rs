//! Pure math for gesturekit
//!
//! This crate contains the geometry primitives shared by the input layer and
//! the gesture recognisers: points, vectors, rectangles and the affine
//! transform used to map stage coordinates into a host's local space.

mod angle;
mod geometry;
mod transform;

pub use angle::*;
pub use geometry::*;
pub use transform::*;

pub mod prelude {
    pub use crate::angle::{angle_between_degrees, round_half_even};
    pub use crate::geometry::{Point, Rect, Size, Vector};
    pub use crate::transform::Transform;
}
