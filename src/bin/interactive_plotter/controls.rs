use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use parabolic_plotter::core::sweep::SeriesAlignment;

use crate::constants::{
    ANGLE_RANGE_DEG, MASS_RANGE_KG, PANEL_H, PANEL_W, PANEL_X, PANEL_Y, SPEED_RANGE_MPS,
};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) reset: bool,
    pub(crate) toggle_alignment: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            reset: self.reset || other.reset,
            toggle_alignment: self.toggle_alignment || other.toggle_alignment,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        reset: is_key_pressed(KeyCode::R),
        toggle_alignment: is_key_pressed(KeyCode::A),
    }
}

pub(crate) fn alignment_text(alignment: SeriesAlignment) -> &'static str {
    match alignment {
        SeriesAlignment::Retained => "above-ground samples",
        SeriesAlignment::Full => "every timestamp",
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let gravity = state.config.gravity_mps2;
    let step = state.config.time_step_s;
    let alignment = state.config.alignment;

    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(PANEL_X, PANEL_Y), vec2(PANEL_W, PANEL_H))
        .label("Launch Inputs")
        .ui(&mut *root_ui(), |ui| {
            ui.label(None, &format!("g = {gravity:.3} m/s^2 | step = {step} s"));
            ui.separator();
            ui.slider(hash!(), "Mass (kg)", MASS_RANGE_KG, &mut state.form.mass_kg);
            ui.slider(
                hash!(),
                "Velocity (m/s)",
                SPEED_RANGE_MPS,
                &mut state.form.speed_mps,
            );
            ui.slider(
                hash!(),
                "Angle (deg)",
                ANGLE_RANGE_DEG,
                &mut state.form.angle_deg,
            );
            ui.separator();
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            if ui.button(None, "Toggle Series Alignment (A)") {
                actions.toggle_alignment = true;
            }
            ui.label(
                None,
                &format!("Velocity/acceleration over {}", alignment_text(alignment)),
            );
        });

    actions
}

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.reset {
        state.reset();
    }
    if actions.toggle_alignment {
        state.toggle_alignment();
    }
}
