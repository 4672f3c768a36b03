//! Shared gesture constants for consistent touch handling.
//!
//! Angles are in degrees and measured in the host's local coordinate space.

/// Rotation a two-finger pair must exceed before a rotation gesture begins.
///
/// The comparison is strict and signed: the gesture activates on the first
/// move whose angle from the reference vector is greater than this value.
pub const ROTATION_THRESHOLD_DEGREES: f32 = 5.0;

/// Number of touches a rotation gesture tracks.
pub const ROTATION_TOUCH_COUNT: usize = 2;
