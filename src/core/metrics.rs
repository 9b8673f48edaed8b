use std::fmt;

use crate::core::ballistics::{KinematicSummary, LaunchInputs};

pub const METERS: &str = "m";
pub const SECONDS: &str = "s";

pub fn format_metric(value: f64, unit: &str) -> String {
    format!("{value:.3} {unit}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// The four headline numbers, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryMetrics {
    pub entries: [Metric; 4],
}

impl SummaryMetrics {
    pub fn from_summary(summary: &KinematicSummary) -> Self {
        Self {
            entries: [
                Metric {
                    label: "Time of flight",
                    value: format_metric(summary.flight_time_s, SECONDS),
                },
                Metric {
                    label: "Max range",
                    value: format_metric(summary.range_m, METERS),
                },
                Metric {
                    label: "Max height",
                    value: format_metric(summary.max_height_m, METERS),
                },
                Metric {
                    label: "Time to max height",
                    value: format_metric(summary.time_to_max_height_s, SECONDS),
                },
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.entries.iter()
    }
}

pub fn apex_label(summary: &KinematicSummary) -> String {
    format!(
        "Max Height ({:.3}, {:.3})",
        summary.apex_x_m, summary.apex_y_m
    )
}

/// Lines for the "Calculation Details" block. The first line is the fixed
/// 10/5 illustration; the rest are the formulas with the inputs substituted.
pub fn calculation_details(inputs: &LaunchInputs, summary: &KinematicSummary) -> Vec<String> {
    let (a, b) = (10, 5);
    let LaunchInputs {
        speed_mps: v0,
        angle_deg: theta,
        gravity_mps2: g,
        ..
    } = *inputs;

    vec![
        format!("Initial velocity (v_0) = {a}/{b}"),
        format!(
            "R = v_0^2 sin(2θ) / g = {v0}^2 · sin({}°) / {g} = {:.3} m",
            2.0 * theta,
            summary.range_m
        ),
        format!(
            "t_flight = 2 v_0 sin(θ) / g = 2 · {v0} · sin({theta}°) / {g} = {:.3} s",
            summary.flight_time_s
        ),
        format!(
            "h_max = (v_0 sin(θ))^2 / 2g = ({v0} · sin({theta}°))^2 / (2 · {g}) = {:.3} m",
            summary.max_height_m
        ),
        format!(
            "t_h_max = v_0 sin(θ) / g = {v0} · sin({theta}°) / {g} = {:.3} s",
            summary.time_to_max_height_s
        ),
    ]
}
