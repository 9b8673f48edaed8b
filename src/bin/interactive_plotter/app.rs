use std::path::PathBuf;

use macroquad::prelude::*;
use parabolic_plotter::core::analysis::ProjectileAnalysis;
use parabolic_plotter::core::charts::trajectory_window;
use parabolic_plotter::core::config::PlotterConfig;
use parabolic_plotter::core::metrics::{apex_label, calculation_details};
use parabolic_plotter::core::window::PlotWindow;

use crate::constants::{
    AX_COLOR, AY_COLOR, BACKGROUND, BOTTOM_MARGIN, CONFIG_ENV_VAR, INITIAL_WINDOW_HEIGHT,
    INITIAL_WINDOW_WIDTH, MSAA_SAMPLES, PLOT_GAP, PLOTS_LEFT, PLOTS_TOP, RIGHT_MARGIN,
    TRAJECTORY_COLOR, UI_FONT_PATH, VX_COLOR, VY_COLOR,
};
use crate::controls::{apply_actions, draw_control_panel, hotkey_actions};
use crate::hud::{
    detail_rows, draw_calculation_details, draw_error, draw_header_block, draw_metric_row,
    draw_status_line,
};
use crate::render::{PlotLine, PlotPanel, draw_panel};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Parabolic Trajectory Plotter".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn load_config() -> PlotterConfig {
    let Some(path) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) else {
        return PlotterConfig::default();
    };
    match PlotterConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "falling back to default configuration");
            PlotterConfig::default()
        }
    }
}

fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}

fn build_panels(analysis: &ProjectileAnalysis) -> [PlotPanel<'static>; 4] {
    let summary = &analysis.summary;
    let sweep = &analysis.sweep;
    let series = &sweep.series;

    let positions: Vec<(f64, f64)> = sweep.positions().collect();
    let heights: Vec<(f64, f64)> = sweep.heights_over_time().collect();
    let (times, ys): (Vec<f64>, Vec<f64>) = heights.iter().copied().unzip();
    let apex = apex_label(summary);

    [
        PlotPanel {
            title: "Trajectory",
            x_desc: "Distance (m)",
            y_desc: "Height (m)",
            window: trajectory_window(summary, &positions),
            lines: vec![PlotLine {
                label: "Trajectory",
                points: positions,
                color: TRAJECTORY_COLOR,
                dashed: false,
            }],
            marker: Some(((summary.apex_x_m, summary.apex_y_m), apex.clone())),
        },
        PlotPanel {
            title: "Height vs Time",
            x_desc: "Time (s)",
            y_desc: "Height (m)",
            window: PlotWindow::enclosing([(&times[..], &ys[..])]),
            lines: vec![PlotLine {
                label: "Height",
                points: heights,
                color: TRAJECTORY_COLOR,
                dashed: false,
            }],
            marker: Some((
                (summary.time_to_max_height_s, summary.max_height_m),
                apex,
            )),
        },
        PlotPanel {
            title: "Velocity vs Time",
            x_desc: "Time (s)",
            y_desc: "Velocity (m/s)",
            window: PlotWindow::enclosing([
                (&series.time_s[..], &series.vx_mps[..]),
                (&series.time_s[..], &series.vy_mps[..]),
            ]),
            lines: vec![
                PlotLine {
                    label: "Horizontal Velocity (v_x)",
                    points: zip_points(&series.time_s, &series.vx_mps),
                    color: VX_COLOR,
                    dashed: false,
                },
                PlotLine {
                    label: "Vertical Velocity (v_y)",
                    points: zip_points(&series.time_s, &series.vy_mps),
                    color: VY_COLOR,
                    dashed: false,
                },
            ],
            marker: None,
        },
        PlotPanel {
            title: "Acceleration vs Time",
            x_desc: "Time (s)",
            y_desc: "Acceleration (m/s^2)",
            window: PlotWindow::enclosing([
                (&series.time_s[..], &series.ax_mps2[..]),
                (&series.time_s[..], &series.ay_mps2[..]),
            ]),
            lines: vec![
                PlotLine {
                    label: "Vertical Acceleration",
                    points: zip_points(&series.time_s, &series.ay_mps2),
                    color: AY_COLOR,
                    dashed: false,
                },
                PlotLine {
                    label: "Horizontal Acceleration",
                    points: zip_points(&series.time_s, &series.ax_mps2),
                    color: AX_COLOR,
                    dashed: true,
                },
            ],
            marker: None,
        },
    ]
}

fn build_details(analysis: &ProjectileAnalysis) -> Vec<String> {
    detail_rows(&calculation_details(&analysis.inputs, &analysis.summary))
}

/// Splits the plot area into a 2x2 grid, row by row.
fn panel_rects(left: f32, top: f32, right: f32, bottom: f32) -> [Rect; 4] {
    let w = ((right - left - PLOT_GAP) * 0.5).max(1.0);
    let h = ((bottom - top - PLOT_GAP) * 0.5).max(1.0);
    let col2 = left + w + PLOT_GAP;
    let row2 = top + h + PLOT_GAP;
    [
        Rect::new(left, top, w, h),
        Rect::new(col2, top, w, h),
        Rect::new(left, row2, w, h),
        Rect::new(col2, row2, w, h),
    ]
}

pub(crate) async fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            tracing::info!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new(load_config());
    let mut panels = state.analysis.as_ref().ok().map(build_panels);
    let mut details = state.analysis.as_ref().map(build_details).unwrap_or_default();

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        if state.refresh() {
            panels = state.analysis.as_ref().ok().map(build_panels);
            details = state.analysis.as_ref().map(build_details).unwrap_or_default();
        }

        clear_background(BACKGROUND);
        draw_header_block(18.0, ui_font.as_ref());

        let right = screen_w - RIGHT_MARGIN;
        let bottom = screen_h - BOTTOM_MARGIN;

        match (&state.analysis, &panels) {
            (Ok(analysis), Some(panels)) => {
                draw_metric_row(&analysis.metrics, right, ui_font.as_ref());
                draw_calculation_details(&details, ui_font.as_ref());
                let rects = panel_rects(PLOTS_LEFT, PLOTS_TOP, right, bottom);
                for (rect, panel) in rects.into_iter().zip(panels.iter()) {
                    draw_panel(rect, panel, ui_font.as_ref());
                }
            }
            (Err(err), _) => draw_error(err, screen_w, screen_h, ui_font.as_ref()),
            (Ok(_), None) => {}
        }

        draw_status_line(&state, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parabolic_plotter::core::ballistics::LaunchInputs;
    use parabolic_plotter::core::sweep::SweepOptions;

    #[test]
    fn panels_follow_the_chart_order() {
        let analysis =
            ProjectileAnalysis::run(LaunchInputs::new(1.0, 20.0, 45.0), SweepOptions::default())
                .unwrap();
        let titles: Vec<_> = build_panels(&analysis).iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            [
                "Trajectory",
                "Height vs Time",
                "Velocity vs Time",
                "Acceleration vs Time"
            ]
        );
    }

    #[test]
    fn details_start_with_the_fixed_fraction() {
        let analysis =
            ProjectileAnalysis::run(LaunchInputs::new(1.0, 20.0, 45.0), SweepOptions::default())
                .unwrap();
        let rows = build_details(&analysis);
        assert_eq!(rows[0], "Initial velocity (v_0)");
        assert_eq!(rows[1], "    = 10/5");
        assert!(rows.iter().any(|row| row.ends_with("= 40.787 m")));
    }

    #[test]
    fn panel_grid_does_not_overlap() {
        let rects = panel_rects(0.0, 0.0, 1036.0, 836.0);
        assert_eq!(rects[0].w, 500.0);
        assert_eq!(rects[0].h, 400.0);
        assert!(rects[1].x >= rects[0].x + rects[0].w);
        assert!(rects[2].y >= rects[0].y + rects[0].h);
    }
}
