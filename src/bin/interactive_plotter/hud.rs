use macroquad::prelude::*;
use parabolic_plotter::core::metrics::SummaryMetrics;

use crate::constants::{
    CONTROLS_Y, DETAILS_LINE_H, DETAILS_Y, HEADER_COLOR, METRICS_Y, PANEL_X, PLOTS_LEFT, TITLE_Y,
};
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_header_block(left: f32, font: Option<&Font>) {
    draw_ui_text(
        "Parabolic Trajectory Plotter",
        left,
        TITLE_Y,
        32,
        HEADER_COLOR,
        font,
    );
    draw_ui_text(
        "Controls: drag the sliders to change mass, velocity and angle | R reset | A series alignment",
        left + 12.0,
        CONTROLS_Y,
        20,
        DARKGRAY,
        font,
    );
}

pub(crate) fn draw_metric_row(metrics: &SummaryMetrics, right: f32, font: Option<&Font>) {
    let slot_w = (right - PLOTS_LEFT) / metrics.entries.len() as f32;
    for (idx, metric) in metrics.iter().enumerate() {
        let x = PLOTS_LEFT + idx as f32 * slot_w;
        draw_ui_text(metric.label, x, METRICS_Y - 26.0, 18, DARKGRAY, font);
        draw_ui_text(&metric.value, x, METRICS_Y + 6.0, 30, HEADER_COLOR, font);
    }
}

/// Breaks each detail line at its `=` signs so the chain of substitutions
/// fits the narrow column under the sliders.
pub(crate) fn detail_rows(lines: &[String]) -> Vec<String> {
    let mut rows = Vec::new();
    for line in lines {
        let mut parts = line.split(" = ");
        if let Some(lhs) = parts.next() {
            rows.push(lhs.to_string());
        }
        rows.extend(parts.map(|part| format!("    = {part}")));
    }
    rows
}

pub(crate) fn draw_calculation_details(rows: &[String], font: Option<&Font>) {
    draw_ui_text("Calculation Details", PANEL_X, DETAILS_Y, 20, HEADER_COLOR, font);
    for (idx, row) in rows.iter().enumerate() {
        let y = DETAILS_Y + (idx + 1) as f32 * DETAILS_LINE_H + 6.0;
        draw_ui_text(row, PANEL_X, y, 16, DARKGRAY, font);
    }
}

pub(crate) fn draw_status_line(state: &AppRuntime, screen_h: f32, font: Option<&Font>) {
    let form = state.form;
    let text = match &state.analysis {
        Ok(analysis) => format!(
            "Mass: {:.1} kg (not used by the model) | Velocity: {:.1} m/s | Angle: {:.1} deg | Samples: {} swept, {} above ground",
            form.mass_kg,
            form.speed_mps,
            form.angle_deg,
            analysis.sweep.timestamps.len(),
            analysis.sweep.retained_len()
        ),
        Err(err) => format!("Cannot compute trajectory: {err}"),
    };
    draw_ui_text(&text, 18.0, screen_h - 10.0, 18, DARKGRAY, font);
}

pub(crate) fn draw_error(message: &str, screen_w: f32, screen_h: f32, font: Option<&Font>) {
    let size = measure_text(message, font, 26, 1.0);
    draw_ui_text(
        message,
        PLOTS_LEFT + ((screen_w - PLOTS_LEFT) - size.width).max(0.0) * 0.5,
        screen_h * 0.5,
        26,
        MAROON,
        font,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_rows_split_on_equals_signs() {
        let lines = vec![
            "Initial velocity (v_0) = 10/5".to_string(),
            "t = 2 · 1 / 2 = 1.000 s".to_string(),
        ];
        assert_eq!(
            detail_rows(&lines),
            [
                "Initial velocity (v_0)",
                "    = 10/5",
                "t",
                "    = 2 · 1 / 2",
                "    = 1.000 s",
            ]
        );
    }
}
