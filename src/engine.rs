use serde::{Deserialize, Serialize};
use crate::constants::*;
use crate::error::{EngineError, InputField};
use crate::types::*;

/// The three scalars collected from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineInput {
    pub magnitude1: f64,
    pub magnitude2: f64,
    pub angle_degrees: f64,
}

impl Default for EngineInput {
    fn default() -> Self {
        Self {
            magnitude1: MAGNITUDE1_DEFAULT,
            magnitude2: MAGNITUDE2_DEFAULT,
            angle_degrees: ANGLE_DEFAULT,
        }
    }
}

impl EngineInput {
    pub fn new(magnitude1: f64, magnitude2: f64, angle_degrees: f64) -> Self {
        Self {
            magnitude1,
            magnitude2,
            angle_degrees,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        check_magnitude(InputField::Magnitude1, self.magnitude1)?;
        check_magnitude(InputField::Magnitude2, self.magnitude2)?;
        if !self.angle_degrees.is_finite() {
            return Err(EngineError::NonFinite { field: InputField::Angle, value: self.angle_degrees });
        }
        Ok(())
    }

    pub fn compute(&self) -> Result<EngineResult, EngineError> {
        compute(self.magnitude1, self.magnitude2, self.angle_degrees)
    }
}

/// Everything derived from one `EngineInput`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineResult {
    pub v1: Vector2D,
    pub v2: Vector2D,
    pub resultant: Vector2D,
    pub resultant_magnitude: f64,
    /// In (-180, 180]. A zero resultant reports 0.
    pub resultant_angle_degrees: f64,
}

/// Adds `v1 = (magnitude1, 0)` to `v2`, which sits `angle_degrees`
/// counter-clockwise from the x-axis.
///
/// The angle is reduced modulo 360 first, so 360 and 0 give identical
/// results. Negative or non-finite magnitudes and non-finite angles are
/// rejected rather than clamped. A magnitude of `-0.0` is accepted and kept
/// as is in `v1`.
pub fn compute(magnitude1: f64, magnitude2: f64, angle_degrees: f64) -> Result<EngineResult, EngineError> {
    EngineInput::new(magnitude1, magnitude2, angle_degrees).validate()?;

    let v1 = vector2d(magnitude1, 0.0);
    let v2 = magnitude2 * unit_direction(normalize_degrees(angle_degrees));
    let resultant = v1 + v2;

    Ok(EngineResult {
        v1,
        v2,
        resultant,
        resultant_magnitude: resultant.norm(),
        resultant_angle_degrees: direction_degrees(&resultant),
    })
}

/// Reduces an angle into [0, 360).
pub fn normalize_degrees(angle_degrees: f64) -> f64 {
    let normalized = angle_degrees.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if normalized >= FULL_TURN_DEGREES {
        0.0
    } else {
        normalized
    }
}

/// Four-quadrant direction of `vector` in degrees, within (-180, 180].
pub fn direction_degrees(vector: &Vector2D) -> f64 {
    if vector.x == 0.0 && vector.y == 0.0 {
        return 0.0;
    }
    let degrees = vector.y.atan2(vector.x).to_degrees();
    // atan2(-0.0, x < 0) lands on -180.
    if degrees <= -180.0 {
        degrees + FULL_TURN_DEGREES
    } else {
        // Turns atan2(-0.0, x > 0) into +0.
        degrees + 0.0
    }
}

/// Unit vector at `angle_degrees` (already in [0, 360)). Quadrantal angles
/// are exact so opposite vectors of equal length cancel to a true zero.
fn unit_direction(angle_degrees: f64) -> Vector2D {
    if angle_degrees == 0.0 {
        vector2d(1.0, 0.0)
    } else if angle_degrees == 90.0 {
        vector2d(0.0, 1.0)
    } else if angle_degrees == 180.0 {
        vector2d(-1.0, 0.0)
    } else if angle_degrees == 270.0 {
        vector2d(0.0, -1.0)
    } else {
        let radians = angle_degrees.to_radians();
        vector2d(radians.cos(), radians.sin())
    }
}

fn check_magnitude(field: InputField, value: f64) -> Result<(), EngineError> {
    if !value.is_finite() {
        return Err(EngineError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(EngineError::NegativeMagnitude { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_default_input() {
        let input = EngineInput::default();
        assert_eq!(input, EngineInput::new(5.0, 3.0, 45.0));
        let result = input.compute().unwrap();
        assert_eq!(result.v1, vector2d(5.0, 0.0));
        assert_relative_eq!(result.v2.x, 3.0 * 45f64.to_radians().cos(), epsilon = 1e-12);
        assert_relative_eq!(result.v2.y, 3.0 * 45f64.to_radians().sin(), epsilon = 1e-12);
        assert_eq!(format!("{:.2}", result.resultant_magnitude), "7.43");
        assert_eq!(format!("{:.2}", result.resultant_angle_degrees), "16.59");
    }

    #[test]
    fn test_parallel_addition() {
        let result = compute(5.0, 3.0, 0.0).unwrap();
        assert_eq!(result.v1, vector2d(5.0, 0.0));
        assert_eq!(result.v2, vector2d(3.0, 0.0));
        assert_eq!(result.resultant, vector2d(8.0, 0.0));
        assert_eq!(result.resultant_magnitude, 8.0);
        assert_eq!(result.resultant_angle_degrees, 0.0);
    }

    #[test]
    fn test_right_angle() {
        let result = compute(3.0, 4.0, 90.0).unwrap();
        assert_eq!(result.v1, vector2d(3.0, 0.0));
        assert_eq!(result.v2, vector2d(0.0, 4.0));
        assert_eq!(result.resultant, vector2d(3.0, 4.0));
        assert_relative_eq!(result.resultant_magnitude, 5.0, epsilon = 1e-9);
        assert_relative_eq!(result.resultant_angle_degrees, 4f64.atan2(3.0).to_degrees(), epsilon = 1e-9);
        assert_eq!(format!("{:.2}", result.resultant_angle_degrees), "53.13");
    }

    #[test]
    fn test_cancellation_reports_zero_angle() {
        let result = compute(5.0, 5.0, 180.0).unwrap();
        assert_eq!(result.v2, vector2d(-5.0, 0.0));
        assert_eq!(result.resultant, vector2d(0.0, 0.0));
        assert_eq!(result.resultant_magnitude, 0.0);
        assert_eq!(result.resultant_angle_degrees, 0.0);
    }

    #[test]
    fn test_zero_magnitudes_any_angle() {
        for angle in [0.0, 33.0, 90.0, 180.0, 270.0, 359.0, 360.0] {
            let result = compute(0.0, 0.0, angle).unwrap();
            assert_eq!(result.resultant, vector2d(0.0, 0.0));
            assert_eq!(result.resultant_magnitude, 0.0);
            assert_eq!(result.resultant_angle_degrees, 0.0);
        }
    }

    #[test]
    fn test_full_turn_matches_zero() {
        assert_eq!(compute(5.0, 5.0, 360.0).unwrap(), compute(5.0, 5.0, 0.0).unwrap());
        assert_eq!(compute(2.5, 7.0, 405.0).unwrap(), compute(2.5, 7.0, 45.0).unwrap());
        assert_eq!(compute(2.5, 7.0, -90.0).unwrap(), compute(2.5, 7.0, 270.0).unwrap());
    }

    #[test]
    fn test_swapping_magnitudes_keeps_resultant_length() {
        let a = compute(5.0, 3.0, 45.0).unwrap();
        let b = compute(3.0, 5.0, 45.0).unwrap();
        let c = compute(3.0, 5.0, -45.0).unwrap();
        assert_relative_eq!(a.resultant_magnitude, b.resultant_magnitude, epsilon = 1e-9);
        assert_relative_eq!(a.resultant_magnitude, c.resultant_magnitude, epsilon = 1e-9);
    }

    #[test]
    fn test_opposite_direction_is_positive_180() {
        let result = compute(0.0, 5.0, 180.0).unwrap();
        assert_eq!(result.resultant, vector2d(-5.0, 0.0));
        assert_eq!(result.resultant_angle_degrees, 180.0);

        assert_eq!(direction_degrees(&vector2d(-2.0, -0.0)), 180.0);
    }

    #[test]
    fn test_negative_zero_y_reports_positive_zero() {
        let degrees = direction_degrees(&vector2d(1.0, -0.0));
        assert_eq!(degrees, 0.0);
        assert!(degrees.is_sign_positive());
        assert_eq!(format!("{degrees:.2}"), "0.00");
    }

    #[test]
    fn test_below_axis_is_negative() {
        let result = compute(1.0, 2.0, 270.0).unwrap();
        assert_eq!(result.resultant, vector2d(1.0, -2.0));
        assert!(result.resultant_angle_degrees < 0.0);
        assert_relative_eq!(result.resultant_angle_degrees, (-2f64).atan2(1.0).to_degrees(), epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(720.5), 0.5);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-1e-20), 0.0);
    }

    #[test]
    fn test_rejects_negative_magnitude() {
        assert_eq!(
            compute(-0.1, 3.0, 45.0),
            Err(EngineError::NegativeMagnitude { field: InputField::Magnitude1, value: -0.1 }),
        );
        assert_eq!(
            compute(1.0, -3.0, 45.0),
            Err(EngineError::NegativeMagnitude { field: InputField::Magnitude2, value: -3.0 }),
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = compute(f64::NAN, 3.0, 45.0).unwrap_err();
        assert_eq!(err.field(), InputField::Magnitude1);
        assert!(matches!(err, EngineError::NonFinite { .. }));

        let err = compute(1.0, f64::INFINITY, 45.0).unwrap_err();
        assert_eq!(err.field(), InputField::Magnitude2);

        let err = compute(1.0, 3.0, f64::NEG_INFINITY).unwrap_err();
        assert_eq!(err.field(), InputField::Angle);
    }

    #[test]
    fn test_sampled_inputs_hold_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let magnitude1 = rng.gen_range(MAGNITUDE_MIN..=MAGNITUDE_MAX);
            let magnitude2 = rng.gen_range(MAGNITUDE_MIN..=MAGNITUDE_MAX);
            let angle = rng.gen_range(ANGLE_MIN..=ANGLE_MAX);
            let result = compute(magnitude1, magnitude2, angle).unwrap();

            assert_eq!(result.resultant, result.v1 + result.v2);
            let length = (result.resultant.x.powi(2) + result.resultant.y.powi(2)).sqrt();
            assert_relative_eq!(result.resultant_magnitude, length, epsilon = 1e-9);
            assert!(result.resultant_angle_degrees > -180.0);
            assert!(result.resultant_angle_degrees <= 180.0);
            assert_relative_eq!(result.v2.norm(), magnitude2, epsilon = 1e-9);
        }
    }
}
