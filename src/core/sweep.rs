//! Fixed-step time sweep over a launch.
//!
//! Timestamps run over the half-open interval `[0, ceil(flight_time))` in
//! `time_step_s` increments. Position samples are kept only while the
//! projectile is at or above the launch height; a negative height drops that
//! single sample and the sweep carries on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::ballistics::{LaunchInputs, velocity_components, x_at, y_at};

pub const DEFAULT_TIME_STEP_S: f64 = 0.001;
pub const DEFAULT_MAX_SAMPLES: usize = 5_000_000;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SweepError {
    #[error("time step must be a positive finite number, got {0}")]
    InvalidStep(f64),
    #[error("sweep needs {required} samples, limit is {limit}")]
    TooManySamples { required: usize, limit: usize },
}

/// Which timestamps the velocity and acceleration series are evaluated at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesAlignment {
    /// Only timestamps whose position sample was kept, so every series has
    /// the same length as the trajectory.
    #[default]
    Retained,
    /// Every swept timestamp, including those below ground.
    Full,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepOptions {
    pub time_step_s: f64,
    pub max_samples: usize,
    pub alignment: SeriesAlignment,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            time_step_s: DEFAULT_TIME_STEP_S,
            max_samples: DEFAULT_MAX_SAMPLES,
            alignment: SeriesAlignment::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionSample {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct KinematicSeries {
    pub time_s: Vec<f64>,
    pub vx_mps: Vec<f64>,
    pub vy_mps: Vec<f64>,
    pub ax_mps2: Vec<f64>,
    pub ay_mps2: Vec<f64>,
}

impl KinematicSeries {
    fn evaluate(inputs: &LaunchInputs, times: impl Iterator<Item = f64>) -> Self {
        let (vx, vy0) = velocity_components(inputs.speed_mps, inputs.angle_deg);
        let g = inputs.gravity_mps2;

        let time_s: Vec<f64> = times.collect();
        let len = time_s.len();
        Self {
            vx_mps: vec![vx; len],
            vy_mps: time_s.iter().map(|t| vy0 - g * t).collect(),
            ax_mps2: vec![0.0; len],
            ay_mps2: vec![-g; len],
            time_s,
        }
    }

    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sweep {
    pub timestamps: Vec<f64>,
    pub samples: Vec<PositionSample>,
    pub series: KinematicSeries,
}

impl Sweep {
    pub fn retained_len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples.iter().map(|s| (s.x_m, s.y_m))
    }

    pub fn heights_over_time(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples.iter().map(|s| (s.time_s, s.y_m))
    }
}

pub fn timestamp_count(flight_time_s: f64, time_step_s: f64) -> Result<usize, SweepError> {
    if !time_step_s.is_finite() || time_step_s <= 0.0 {
        return Err(SweepError::InvalidStep(time_step_s));
    }
    let stop = flight_time_s.ceil();
    if !stop.is_finite() || stop <= 0.0 {
        return Ok(0);
    }
    Ok((stop / time_step_s).ceil() as usize)
}

/// Samples a validated launch. `flight_time_s` is the closed-form flight time
/// for `inputs`.
pub fn sweep(
    inputs: &LaunchInputs,
    flight_time_s: f64,
    options: SweepOptions,
) -> Result<Sweep, SweepError> {
    let count = timestamp_count(flight_time_s, options.time_step_s)?;
    if count > options.max_samples {
        return Err(SweepError::TooManySamples {
            required: count,
            limit: options.max_samples,
        });
    }

    let timestamps: Vec<f64> = (0..count).map(|i| i as f64 * options.time_step_s).collect();

    let samples: Vec<PositionSample> = timestamps
        .iter()
        .filter_map(|&t| {
            let y = y_at(t, inputs.speed_mps, inputs.angle_deg, inputs.gravity_mps2);
            if y < 0.0 {
                return None;
            }
            Some(PositionSample {
                time_s: t,
                x_m: x_at(t, inputs.speed_mps, inputs.angle_deg),
                y_m: y,
            })
        })
        .collect();

    let series = match options.alignment {
        SeriesAlignment::Retained => {
            KinematicSeries::evaluate(inputs, samples.iter().map(|s| s.time_s))
        }
        SeriesAlignment::Full => KinematicSeries::evaluate(inputs, timestamps.iter().copied()),
    };

    tracing::debug!(
        timestamps = timestamps.len(),
        retained = samples.len(),
        alignment = ?options.alignment,
        "time sweep complete"
    );

    Ok(Sweep {
        timestamps,
        samples,
        series,
    })
}
