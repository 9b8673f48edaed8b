use crate::core::ballistics::{KinematicSummary, LaunchInputs};
use crate::core::error::PlotterError;
use crate::core::metrics::SummaryMetrics;
use crate::core::sweep::{Sweep, SweepOptions, sweep};

/// Everything one launch produces: validated inputs, closed-form summary,
/// formatted metrics and the sampled series.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectileAnalysis {
    pub inputs: LaunchInputs,
    pub summary: KinematicSummary,
    pub metrics: SummaryMetrics,
    pub sweep: Sweep,
}

impl ProjectileAnalysis {
    pub fn run(inputs: LaunchInputs, options: SweepOptions) -> Result<Self, PlotterError> {
        let summary = KinematicSummary::compute(&inputs)?;
        let sweep = sweep(&inputs, summary.flight_time_s, options)?;
        tracing::info!(
            speed_mps = inputs.speed_mps,
            angle_deg = inputs.angle_deg,
            flight_time_s = summary.flight_time_s,
            retained = sweep.retained_len(),
            "projectile analysed"
        );

        Ok(Self {
            inputs,
            metrics: SummaryMetrics::from_summary(&summary),
            summary,
            sweep,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::InputError;
    use crate::core::sweep::SweepError;

    #[test]
    fn runs_a_full_analysis() {
        let analysis =
            ProjectileAnalysis::run(LaunchInputs::new(2.0, 20.0, 45.0), SweepOptions::default())
                .expect("analysis should succeed");

        assert_eq!(analysis.metrics.entries[1].value, "40.787 m");
        assert_eq!(analysis.sweep.series.len(), analysis.sweep.retained_len());
        assert_eq!(analysis.inputs.mass_kg, 2.0);
    }

    #[test]
    fn surfaces_input_errors() {
        let err = ProjectileAnalysis::run(
            LaunchInputs::new(1.0, 20.0, 45.0).with_gravity(-1.0),
            SweepOptions::default(),
        )
        .expect_err("analysis should fail");

        assert!(matches!(
            err,
            PlotterError::Input(InputError::InvalidGravity(g)) if g == -1.0
        ));
    }

    #[test]
    fn surfaces_sweep_errors() {
        let options = SweepOptions {
            time_step_s: -0.5,
            ..SweepOptions::default()
        };
        let err = ProjectileAnalysis::run(LaunchInputs::new(1.0, 20.0, 45.0), options)
            .expect_err("analysis should fail");

        assert!(matches!(err, PlotterError::Sweep(SweepError::InvalidStep(_))));
    }
}
