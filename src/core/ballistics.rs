use thiserror::Error;

pub const STANDARD_GRAVITY_MPS2: f64 = 9.807;
pub const MAX_LAUNCH_ANGLE_DEG: f64 = 180.0;

/// Rejected launch inputs. Raised before any formula runs, so callers never
/// see NaN or infinite kinematics.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("mass cannot be negative ({0} kg)")]
    NegativeMass(f64),
    #[error("velocity cannot be negative ({0} m/s)")]
    NegativeVelocity(f64),
    #[error("launch angle must be within 0..=180 degrees, got {0}")]
    AngleOutOfRange(f64),
    #[error("gravity must be positive, got {0} m/s^2")]
    InvalidGravity(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchInputs {
    /// Collected for display only; no formula depends on it.
    pub mass_kg: f64,
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub gravity_mps2: f64,
}

impl LaunchInputs {
    pub fn new(mass_kg: f64, speed_mps: f64, angle_deg: f64) -> Self {
        Self {
            mass_kg,
            speed_mps,
            angle_deg,
            gravity_mps2: STANDARD_GRAVITY_MPS2,
        }
    }

    pub fn with_gravity(self, gravity_mps2: f64) -> Self {
        Self {
            gravity_mps2,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("mass", self.mass_kg),
            ("velocity", self.speed_mps),
            ("angle", self.angle_deg),
            ("gravity", self.gravity_mps2),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }
        }
        if self.mass_kg < 0.0 {
            return Err(InputError::NegativeMass(self.mass_kg));
        }
        if self.speed_mps < 0.0 {
            return Err(InputError::NegativeVelocity(self.speed_mps));
        }
        if !(0.0..=MAX_LAUNCH_ANGLE_DEG).contains(&self.angle_deg) {
            return Err(InputError::AngleOutOfRange(self.angle_deg));
        }
        if self.gravity_mps2 <= 0.0 {
            return Err(InputError::InvalidGravity(self.gravity_mps2));
        }
        Ok(())
    }
}

// The formulas below take degrees and do no validation. Division by a zero
// gravity yields inf/NaN; use `KinematicSummary::compute` for checked inputs.

pub fn velocity_components(speed_mps: f64, angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    (speed_mps * theta.cos(), speed_mps * theta.sin())
}

pub fn range(speed_mps: f64, angle_deg: f64, gravity_mps2: f64) -> f64 {
    speed_mps * speed_mps * (2.0 * angle_deg.to_radians()).sin() / gravity_mps2
}

pub fn flight_time(speed_mps: f64, angle_deg: f64, gravity_mps2: f64) -> f64 {
    2.0 * speed_mps * angle_deg.to_radians().sin() / gravity_mps2
}

pub fn max_height(speed_mps: f64, angle_deg: f64, gravity_mps2: f64) -> f64 {
    let vy = speed_mps * angle_deg.to_radians().sin();
    vy * vy / (2.0 * gravity_mps2)
}

pub fn time_to_max_height(speed_mps: f64, angle_deg: f64, gravity_mps2: f64) -> f64 {
    speed_mps * angle_deg.to_radians().sin() / gravity_mps2
}

pub fn x_at(time_s: f64, speed_mps: f64, angle_deg: f64) -> f64 {
    speed_mps * angle_deg.to_radians().cos() * time_s
}

pub fn y_at(time_s: f64, speed_mps: f64, angle_deg: f64, gravity_mps2: f64) -> f64 {
    speed_mps * angle_deg.to_radians().sin() * time_s - 0.5 * gravity_mps2 * time_s * time_s
}

/// Closed-form quantities derived once per set of inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicSummary {
    pub flight_time_s: f64,
    pub range_m: f64,
    pub max_height_m: f64,
    pub time_to_max_height_s: f64,
    pub apex_x_m: f64,
    pub apex_y_m: f64,
}

impl KinematicSummary {
    pub fn compute(inputs: &LaunchInputs) -> Result<Self, InputError> {
        inputs.validate()?;

        let LaunchInputs {
            speed_mps: v0,
            angle_deg: theta,
            gravity_mps2: g,
            ..
        } = *inputs;
        let t_apex = time_to_max_height(v0, theta, g);

        Ok(Self {
            flight_time_s: flight_time(v0, theta, g),
            range_m: range(v0, theta, g),
            max_height_m: max_height(v0, theta, g),
            time_to_max_height_s: t_apex,
            apex_x_m: x_at(t_apex, v0, theta),
            apex_y_m: y_at(t_apex, v0, theta, g),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn computes_reference_values_at_45_degrees() {
        let summary = KinematicSummary::compute(&LaunchInputs::new(1.0, 20.0, 45.0))
            .expect("calculation should succeed");

        assert_close(summary.range_m, 40.79, 0.05);
        assert_close(summary.flight_time_s, 2.885, 0.005);
        assert_close(summary.max_height_m, 10.19, 0.05);
    }

    #[test]
    fn flight_time_is_twice_apex_time() {
        for angle in [0.0, 10.0, 33.0, 45.0, 60.0, 90.0, 135.0, 180.0] {
            for speed in [0.0, 1.0, 12.5, 80.0] {
                let t = flight_time(speed, angle, STANDARD_GRAVITY_MPS2);
                let t_apex = time_to_max_height(speed, angle, STANDARD_GRAVITY_MPS2);
                assert_close(t, 2.0 * t_apex, 1e-12);
            }
        }
    }

    #[test]
    fn max_height_is_reached_at_apex_time() {
        for angle in [15.0, 45.0, 75.0, 90.0, 120.0] {
            let speed = 35.0;
            let t_apex = time_to_max_height(speed, angle, STANDARD_GRAVITY_MPS2);
            assert_close(
                y_at(t_apex, speed, angle, STANDARD_GRAVITY_MPS2),
                max_height(speed, angle, STANDARD_GRAVITY_MPS2),
                1e-9,
            );
        }
    }

    #[test]
    fn vertical_shot_has_no_range() {
        assert_close(range(50.0, 90.0, STANDARD_GRAVITY_MPS2), 0.0, 1e-9);
    }

    #[test]
    fn summary_apex_matches_half_range_for_symmetric_flight() {
        let summary = KinematicSummary::compute(&LaunchInputs::new(0.0, 30.0, 30.0))
            .expect("calculation should succeed");

        assert_close(summary.apex_x_m, summary.range_m / 2.0, 1e-9);
        assert_close(summary.apex_y_m, summary.max_height_m, 1e-9);
    }

    #[test]
    fn mass_does_not_change_kinematics() {
        let light = KinematicSummary::compute(&LaunchInputs::new(0.1, 15.0, 40.0)).unwrap();
        let heavy = KinematicSummary::compute(&LaunchInputs::new(900.0, 15.0, 40.0)).unwrap();
        assert_eq!(light, heavy);
    }

    #[test]
    fn rejects_zero_gravity() {
        let err = KinematicSummary::compute(&LaunchInputs::new(1.0, 10.0, 45.0).with_gravity(0.0))
            .expect_err("calculation should fail");
        assert_eq!(err, InputError::InvalidGravity(0.0));
    }

    #[test]
    fn rejects_out_of_range_inputs() {
        assert_eq!(
            LaunchInputs::new(-1.0, 10.0, 45.0).validate(),
            Err(InputError::NegativeMass(-1.0))
        );
        assert_eq!(
            LaunchInputs::new(1.0, -3.0, 45.0).validate(),
            Err(InputError::NegativeVelocity(-3.0))
        );
        assert_eq!(
            LaunchInputs::new(1.0, 3.0, 181.0).validate(),
            Err(InputError::AngleOutOfRange(181.0))
        );
        assert_eq!(
            LaunchInputs::new(1.0, f64::NAN, 45.0).validate(),
            Err(InputError::NonFinite { field: "velocity" })
        );
    }

    #[test]
    fn accepts_boundary_inputs() {
        assert!(LaunchInputs::new(0.0, 0.0, 0.0).validate().is_ok());
        assert!(LaunchInputs::new(0.0, 0.0, 180.0).validate().is_ok());
    }

    #[test]
    fn unchecked_formulas_propagate_non_finite_values() {
        assert!(flight_time(10.0, 45.0, 0.0).is_infinite());
        assert!(range(0.0, 0.0, 0.0).is_nan());
    }
}
