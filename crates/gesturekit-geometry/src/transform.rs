//! Placement of a display object relative to the stage.

use crate::{Point, Vector};

/// Translation, rotation and non-uniform scale of a host in stage space.
///
/// `local_to_global` scales, then rotates, then translates. Rotation is in
/// degrees and follows [`Vector::rotated_degrees`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Point,
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Point::ZERO,
        rotation: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    pub fn translation(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_scale(mut self, scale_x: f32, scale_y: f32) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    pub fn local_to_global(&self, local: Point) -> Point {
        let scaled = Vector::new(local.x * self.scale_x, local.y * self.scale_y);
        self.position + scaled.rotated_degrees(self.rotation)
    }

    /// Maps a stage point into local space. A zero scale axis collapses to 0.
    pub fn global_to_local(&self, global: Point) -> Point {
        let unrotated = (global - self.position).rotated_degrees(-self.rotation);
        Point::new(
            divide_or_zero(unrotated.x, self.scale_x),
            divide_or_zero(unrotated.y, self.scale_y),
        )
    }
}

fn divide_or_zero(value: f32, scale: f32) -> f32 {
    if scale == 0.0 {
        0.0
    } else {
        value / scale
    }
}
