//! Assertion utilities for gesture tests
//!
//! Angles come out of trigonometry in `f32`, so most comparisons need a
//! tolerance.

use gesturekit_core::EventType;
use gesturekit_geometry::Vector;

/// Tolerance for angles computed without snapping.
pub const ANGLE_TOLERANCE: f32 = 1e-3;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that an angle in degrees matches within [`ANGLE_TOLERANCE`].
pub fn assert_degrees_eq(actual: f32, expected: f32, msg: &str) {
    assert_approx_eq(actual, expected, ANGLE_TOLERANCE, msg);
}

/// Assert that two vectors are approximately equal.
pub fn assert_vector_approx_eq(actual: Vector, expected: Vector, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert the exact sequence of notification types.
pub fn assert_event_sequence(actual: &[EventType], expected: &[EventType], msg: &str) {
    assert_eq!(
        actual, expected,
        "{}: expected events {:?}, got {:?}",
        msg, expected, actual
    );
}
