//! SVG chart output for the projectile and dataset runs.

use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use thiserror::Error;

use crate::core::ballistics::KinematicSummary;
use crate::core::dataset::{HUMIDITY_RANGE, TEMPERATURE_RANGE, WeatherDataset};
use crate::core::metrics::apex_label;
use crate::core::sweep::Sweep;
use crate::core::window::PlotWindow;

pub const TRAJECTORY_FILE: &str = "trajectory.svg";
pub const HEIGHT_TIME_FILE: &str = "height_time.svg";
pub const VELOCITY_TIME_FILE: &str = "velocity_time.svg";
pub const ACCELERATION_TIME_FILE: &str = "acceleration_time.svg";
pub const TEMPERATURE_FILE: &str = "temperature.svg";
pub const HUMIDITY_FILE: &str = "humidity.svg";

const FONT: &str = "sans-serif";
const LINE_WIDTH: u32 = 3;
const APEX_MARKER_RADIUS: i32 = 5;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("could not create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("drawing failed: {0}")]
    Drawing(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Drawing(err.to_string())
    }
}

/// Pixel size of every chart. 800x600 matches an 8x6 inch figure at 100 dpi.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

struct Line<'a> {
    label: &'a str,
    points: Vec<(f64, f64)>,
    color: RGBColor,
    dashed: bool,
}

struct Marker {
    label: String,
    at: (f64, f64),
}

struct ChartSpec<'a> {
    title: &'a str,
    x_desc: &'a str,
    y_desc: &'a str,
    window: PlotWindow,
    lines: Vec<Line<'a>>,
    marker: Option<Marker>,
}

fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}

fn draw_chart(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    spec: ChartSpec<'_>,
) -> Result<(), ChartError> {
    root.fill(&WHITE)?;

    let window = spec.window;
    let mut chart = ChartBuilder::on(root)
        .caption(spec.title, (FONT, 26))
        .margin(16)
        .x_label_area_size(44)
        .y_label_area_size(60)
        .build_cartesian_2d(window.x_min..window.x_max, window.y_min..window.y_max)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .draw()?;

    for line in spec.lines {
        let style = line.color.stroke_width(LINE_WIDTH);
        let legend_style = style;
        if line.dashed {
            chart
                .draw_series(DashedLineSeries::new(line.points, 10, 6, style))?
                .label(line.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], legend_style));
        } else {
            chart
                .draw_series(LineSeries::new(line.points, style))?
                .label(line.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], legend_style));
        }
    }

    if let Some(marker) = spec.marker {
        chart
            .draw_series(std::iter::once(Circle::new(
                marker.at,
                APEX_MARKER_RADIUS,
                RED.filled(),
            )))?
            .label(marker.label)
            .legend(|(x, y)| Circle::new((x + 10, y), APEX_MARKER_RADIUS, RED.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn render_to_file(path: &Path, style: ChartStyle, spec: ChartSpec<'_>) -> Result<(), ChartError> {
    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    draw_chart(&root, spec)?;
    tracing::debug!(path = %path.display(), "wrote chart");
    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<(), ChartError> {
    fs::create_dir_all(dir).map_err(|source| ChartError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Fixed-ratio window around the sampled path and the closed-form extremes.
pub fn trajectory_window(summary: &KinematicSummary, positions: &[(f64, f64)]) -> PlotWindow {
    let (x_lo, x_hi, y_hi) = positions.iter().fold(
        (summary.range_m.min(0.0), summary.range_m.max(0.0), summary.max_height_m),
        |(lo, hi, top), &(x, y)| (lo.min(x), hi.max(x), top.max(y)),
    );
    PlotWindow::fixed_ratio_from(x_lo, x_hi, y_hi)
}

fn projectile_specs<'a>(
    summary: &KinematicSummary,
    sweep: &Sweep,
) -> Vec<(&'static str, ChartSpec<'a>)> {
    let positions: Vec<(f64, f64)> = sweep.positions().collect();
    let heights: Vec<(f64, f64)> = sweep.heights_over_time().collect();
    let series = &sweep.series;

    let trajectory_window = trajectory_window(summary, &positions);
    let (times, ys): (Vec<f64>, Vec<f64>) = heights.iter().copied().unzip();
    let height_window = PlotWindow::enclosing([(&times[..], &ys[..])]);
    let velocity_window = PlotWindow::enclosing([
        (&series.time_s[..], &series.vx_mps[..]),
        (&series.time_s[..], &series.vy_mps[..]),
    ]);
    let acceleration_window = PlotWindow::enclosing([
        (&series.time_s[..], &series.ax_mps2[..]),
        (&series.time_s[..], &series.ay_mps2[..]),
    ]);

    let apex_text = apex_label(summary);

    vec![
        (
            TRAJECTORY_FILE,
            ChartSpec {
                title: "Projectile Trajectory",
                x_desc: "Distance (m)",
                y_desc: "Height (m)",
                window: trajectory_window,
                lines: vec![Line {
                    label: "Trajectory",
                    points: positions,
                    color: BLUE,
                    dashed: false,
                }],
                marker: Some(Marker {
                    label: apex_text.clone(),
                    at: (summary.apex_x_m, summary.apex_y_m),
                }),
            },
        ),
        (
            HEIGHT_TIME_FILE,
            ChartSpec {
                title: "Height vs Time",
                x_desc: "Time (s)",
                y_desc: "Height (m)",
                window: height_window,
                lines: vec![Line {
                    label: "Height",
                    points: heights,
                    color: BLUE,
                    dashed: false,
                }],
                marker: Some(Marker {
                    label: apex_text,
                    at: (summary.time_to_max_height_s, summary.max_height_m),
                }),
            },
        ),
        (
            VELOCITY_TIME_FILE,
            ChartSpec {
                title: "Velocity vs Time",
                x_desc: "Time (s)",
                y_desc: "Velocity (m/s)",
                window: velocity_window,
                lines: vec![
                    Line {
                        label: "Horizontal Velocity (v_x)",
                        points: zip_points(&series.time_s, &series.vx_mps),
                        color: BLUE,
                        dashed: false,
                    },
                    Line {
                        label: "Vertical Velocity (v_y)",
                        points: zip_points(&series.time_s, &series.vy_mps),
                        color: GREEN,
                        dashed: false,
                    },
                ],
                marker: None,
            },
        ),
        (
            ACCELERATION_TIME_FILE,
            ChartSpec {
                title: "Acceleration vs Time",
                x_desc: "Time (s)",
                y_desc: "Acceleration (m/s²)",
                window: acceleration_window,
                lines: vec![
                    Line {
                        label: "Vertical Acceleration",
                        points: zip_points(&series.time_s, &series.ay_mps2),
                        color: RED,
                        dashed: false,
                    },
                    Line {
                        label: "Horizontal Acceleration",
                        points: zip_points(&series.time_s, &series.ax_mps2),
                        color: RGBColor(128, 0, 128),
                        dashed: true,
                    },
                ],
                marker: None,
            },
        ),
    ]
}

/// Writes the trajectory, height, velocity and acceleration charts into
/// `dir` and returns the written paths. Empty sweeps still produce axes.
pub fn render_projectile_charts(
    dir: &Path,
    summary: &KinematicSummary,
    sweep: &Sweep,
    style: ChartStyle,
) -> Result<Vec<PathBuf>, ChartError> {
    ensure_dir(dir)?;

    let mut written = Vec::with_capacity(4);
    for (file, spec) in projectile_specs(summary, sweep) {
        let path = dir.join(file);
        render_to_file(&path, style, spec)?;
        written.push(path);
    }
    Ok(written)
}

fn draw_daily_chart(
    path: &Path,
    style: ChartStyle,
    title: &str,
    y_desc: &str,
    days: &[&str],
    values: &[i32],
    value_range: RangeInclusive<i32>,
) -> Result<(), ChartError> {
    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let last_idx = days.len().saturating_sub(1).max(1) as i32;
    let y_lo = value_range.start() - 5;
    let y_hi = value_range.end() + 5;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT, 26))
        .margin(16)
        .x_label_area_size(44)
        .y_label_area_size(60)
        .build_cartesian_2d(0i32..last_idx, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_labels(days.len().max(2))
        .x_label_formatter(&|idx| {
            usize::try_from(*idx)
                .ok()
                .and_then(|i| days.get(i))
                .map(|day| day.to_string())
                .unwrap_or_default()
        })
        .x_desc("Day")
        .y_desc(y_desc)
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            values.iter().enumerate().map(|(i, v)| (i as i32, *v)),
            BLUE.stroke_width(LINE_WIDTH),
        ))?
        .label(y_desc)
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(LINE_WIDTH))
        });

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    tracing::debug!(path = %path.display(), "wrote chart");
    Ok(())
}

/// Writes one line chart per dataset column, keyed by day.
pub fn render_dataset_charts(
    dir: &Path,
    dataset: &WeatherDataset,
    style: ChartStyle,
) -> Result<Vec<PathBuf>, ChartError> {
    ensure_dir(dir)?;
    let days = dataset.days();

    let temperature = dir.join(TEMPERATURE_FILE);
    draw_daily_chart(
        &temperature,
        style,
        "Temperature",
        "Temperature",
        &days,
        &dataset.temperatures(),
        TEMPERATURE_RANGE,
    )?;

    let humidity = dir.join(HUMIDITY_FILE);
    draw_daily_chart(
        &humidity,
        style,
        "Humidity",
        "Humidity",
        &days,
        &dataset.humidities(),
        HUMIDITY_RANGE,
    )?;

    Ok(vec![temperature, humidity])
}
