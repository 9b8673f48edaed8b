use parabolic_plotter::core::analysis::ProjectileAnalysis;
use parabolic_plotter::core::ballistics::LaunchInputs;
use parabolic_plotter::core::config::PlotterConfig;
use parabolic_plotter::core::sweep::SeriesAlignment;

/// Slider-backed form values. Macroquad widgets work in f32.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LaunchForm {
    pub(crate) mass_kg: f32,
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
}

impl Default for LaunchForm {
    fn default() -> Self {
        Self {
            mass_kg: 1.0,
            speed_mps: 20.0,
            angle_deg: 45.0,
        }
    }
}

impl LaunchForm {
    pub(crate) fn to_inputs(self, gravity_mps2: f64) -> LaunchInputs {
        LaunchInputs::new(
            f64::from(self.mass_kg),
            f64::from(self.speed_mps),
            f64::from(self.angle_deg),
        )
        .with_gravity(gravity_mps2)
    }
}

pub(crate) struct AppRuntime {
    pub(crate) config: PlotterConfig,
    pub(crate) form: LaunchForm,
    pub(crate) analysis: Result<ProjectileAnalysis, String>,
    computed_for: Option<(LaunchForm, SeriesAlignment)>,
}

impl AppRuntime {
    pub(crate) fn new(config: PlotterConfig) -> Self {
        let mut state = Self {
            config,
            form: LaunchForm::default(),
            analysis: Err("not computed yet".to_string()),
            computed_for: None,
        };
        state.refresh();
        state
    }

    /// Recomputes the analysis when the form or alignment changed since the
    /// last frame. Returns whether anything was recomputed.
    pub(crate) fn refresh(&mut self) -> bool {
        let key = (self.form, self.config.alignment);
        if self.computed_for == Some(key) {
            return false;
        }

        let inputs = self.form.to_inputs(self.config.gravity_mps2);
        self.analysis = ProjectileAnalysis::run(inputs, self.config.sweep_options())
            .map_err(|err| err.to_string());
        if let Err(err) = &self.analysis {
            tracing::warn!(%err, "analysis rejected");
        }
        self.computed_for = Some(key);
        true
    }

    pub(crate) fn reset(&mut self) {
        self.form = LaunchForm::default();
    }

    pub(crate) fn toggle_alignment(&mut self) {
        self.config.alignment = match self.config.alignment {
            SeriesAlignment::Retained => SeriesAlignment::Full,
            SeriesAlignment::Full => SeriesAlignment::Retained,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recomputes_only_when_inputs_change() {
        let mut state = AppRuntime::new(PlotterConfig::default());
        assert!(state.analysis.is_ok());
        assert!(!state.refresh());

        state.form.angle_deg = 60.0;
        assert!(state.refresh());
        assert!(!state.refresh());

        state.toggle_alignment();
        assert!(state.refresh());
    }

    #[test]
    fn zero_speed_gives_an_empty_but_valid_analysis() {
        let mut state = AppRuntime::new(PlotterConfig::default());
        state.form.speed_mps = 0.0;
        state.refresh();

        let analysis = state.analysis.as_ref().expect("analysis should succeed");
        assert!(analysis.sweep.is_empty());
    }

    #[test]
    fn reset_restores_default_form() {
        let mut state = AppRuntime::new(PlotterConfig::default());
        state.form.mass_kg = 70.0;
        state.reset();
        assert_eq!(state.form, LaunchForm::default());
    }
}
