//! Angle helpers for rotation gestures.

use crate::Vector;

/// Signed angle in degrees from `reference` to `current`.
///
/// This is the raw difference of the two `atan2` directions and is not
/// wrapped, so the result lies in the open interval (-360, 360).
pub fn angle_between_degrees(reference: Vector, current: Vector) -> f32 {
    (current.angle() - reference.angle()).to_degrees()
}

/// Rounds to the nearest integer, resolving .5 ties to the even neighbour.
pub fn round_half_even(value: f32) -> f32 {
    value.round_ties_even()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_between_counter_clockwise() {
        let reference = Vector::new(100.0, 0.0);
        let current = Vector::new(0.0, 100.0);
        assert!((angle_between_degrees(reference, current) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn angle_between_is_not_wrapped() {
        // 170 deg -> -170 deg crosses the atan2 branch cut.
        let reference = Vector::from_angle_degrees(170.0);
        let current = Vector::from_angle_degrees(-170.0);
        let angle = angle_between_degrees(reference, current);
        assert!((angle + 340.0).abs() < 1e-3, "got {angle}");
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(round_half_even(0.5), 0.0);
        assert_eq!(round_half_even(1.5), 2.0);
        assert_eq!(round_half_even(2.5), 2.0);
        assert_eq!(round_half_even(-0.5), 0.0);
        assert_eq!(round_half_even(5.4), 5.0);
        assert_eq!(round_half_even(5.6), 6.0);
    }
}
