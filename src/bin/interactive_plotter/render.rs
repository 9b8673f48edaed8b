use macroquad::prelude::*;
use parabolic_plotter::core::window::PlotWindow;

use crate::constants::{
    AXIS_BOTTOM_PAD, AXIS_LEFT_PAD, GRID_COLOR, INNER_RIGHT_PAD, LABEL_COLOR, MAX_DRAWN_POINTS,
    TITLE_PAD, X_GRID_LINES, Y_GRID_LINES,
};

/// Pixel rectangle of a plot's data area.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlotRect {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotRect {
    /// Inner data area of a panel occupying `outer`, leaving room for the
    /// title and tick labels.
    pub(crate) fn inside(outer: Rect) -> Self {
        Self {
            left: outer.x + AXIS_LEFT_PAD,
            right: outer.x + outer.w - INNER_RIGHT_PAD,
            top: outer.y + TITLE_PAD,
            bottom: outer.y + outer.h - AXIS_BOTTOM_PAD,
        }
    }

    pub(crate) fn project(&self, window: &PlotWindow, point: (f64, f64)) -> Vec2 {
        let (x, y) = window.to_screen(
            point,
            f64::from(self.left),
            f64::from(self.right),
            f64::from(self.top),
            f64::from(self.bottom),
        );
        vec2(x as f32, y as f32)
    }
}

pub(crate) struct PlotLine<'a> {
    pub(crate) label: &'a str,
    pub(crate) points: Vec<(f64, f64)>,
    pub(crate) color: Color,
    pub(crate) dashed: bool,
}

pub(crate) struct PlotPanel<'a> {
    pub(crate) title: &'a str,
    pub(crate) x_desc: &'a str,
    pub(crate) y_desc: &'a str,
    pub(crate) window: PlotWindow,
    pub(crate) lines: Vec<PlotLine<'a>>,
    pub(crate) marker: Option<((f64, f64), String)>,
}

fn format_axis_value(value: f64, axis_span: f64) -> String {
    if axis_span >= 1000.0 {
        format!("{value:.0}")
    } else if axis_span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

/// Index stride that keeps at most `max_points` drawn, always ending on the
/// last sample.
pub(crate) fn decimated_indices(len: usize, max_points: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let stride = len.div_ceil(max_points.max(1)).max(1);
    let mut indices: Vec<usize> = (0..len).step_by(stride).collect();
    if indices.last() != Some(&(len - 1)) {
        indices.push(len - 1);
    }
    indices
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn draw_grid(rect: PlotRect) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = rect.left + t * (rect.right - rect.left);
        draw_line(x, rect.top, x, rect.bottom, 1.0, GRID_COLOR);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = rect.bottom - t * (rect.bottom - rect.top);
        draw_line(rect.left, y, rect.right, y, 1.0, GRID_COLOR);
    }
}

fn draw_axis_tick_labels(rect: PlotRect, window: &PlotWindow, font: Option<&Font>) {
    let tick_font_size: u16 = 14;

    for i in 0..=X_GRID_LINES {
        let t = i as f64 / X_GRID_LINES as f64;
        let x = rect.left + t as f32 * (rect.right - rect.left);
        let label = format_axis_value(window.x_min + t * window.width(), window.width());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            rect.bottom + 18.0,
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f64 / Y_GRID_LINES as f64;
        let y = rect.bottom - t as f32 * (rect.bottom - rect.top);
        let label = format_axis_value(window.y_min + t * window.height(), window.height());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (rect.left - 6.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }
}

fn draw_path(rect: PlotRect, window: &PlotWindow, line: &PlotLine<'_>) {
    let indices = decimated_indices(line.points.len(), MAX_DRAWN_POINTS);
    if indices.len() < 2 {
        if let Some(&only) = indices.first() {
            let p = rect.project(window, line.points[only]);
            draw_circle(p.x, p.y, 2.5, line.color);
        }
        return;
    }

    let mut prev = rect.project(window, line.points[indices[0]]);
    for (n, idx) in indices.iter().skip(1).enumerate() {
        let cur = rect.project(window, line.points[*idx]);
        if !line.dashed || n % 2 == 0 {
            draw_line(prev.x, prev.y, cur.x, cur.y, 2.5, line.color);
        }
        prev = cur;
    }
}

fn draw_legend(rect: PlotRect, panel: &PlotPanel<'_>, font: Option<&Font>) {
    let mut y = rect.top + 18.0;
    let x = rect.right - 250.0;
    for line in &panel.lines {
        draw_line(x, y - 5.0, x + 22.0, y - 5.0, 3.0, line.color);
        draw_ui_text(line.label, x + 30.0, y, 15, DARKGRAY, font);
        y += 20.0;
    }
    if let Some((_, label)) = &panel.marker {
        draw_circle(x + 11.0, y - 5.0, 5.0, RED);
        draw_ui_text(label, x + 30.0, y, 15, DARKGRAY, font);
    }
}

pub(crate) fn draw_panel(outer: Rect, panel: &PlotPanel<'_>, font: Option<&Font>) {
    let rect = PlotRect::inside(outer);

    draw_ui_text(panel.title, rect.left, outer.y + 20.0, 20, DARKGRAY, font);
    draw_grid(rect);
    draw_line(rect.left, rect.bottom, rect.right, rect.bottom, 2.0, DARKGRAY);
    draw_line(rect.left, rect.top, rect.left, rect.bottom, 2.0, DARKGRAY);
    draw_axis_tick_labels(rect, &panel.window, font);

    let x_desc_size = measure_text(panel.x_desc, font, 16, 1.0);
    draw_ui_text(
        panel.x_desc,
        rect.right - x_desc_size.width,
        rect.bottom + 38.0,
        16,
        LABEL_COLOR,
        font,
    );
    draw_ui_text(panel.y_desc, rect.left + 8.0, rect.top + 14.0, 16, LABEL_COLOR, font);

    for line in &panel.lines {
        draw_path(rect, &panel.window, line);
    }

    if let Some((at, _)) = &panel.marker {
        let p = rect.project(&panel.window, *at);
        draw_circle(p.x, p.y, 6.0, RED);
        draw_circle_lines(p.x, p.y, 6.0, 2.0, MAROON);
    }

    draw_legend(rect, panel, font);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimation_keeps_short_series_intact() {
        assert_eq!(decimated_indices(4, 600), vec![0, 1, 2, 3]);
        assert!(decimated_indices(0, 600).is_empty());
    }

    #[test]
    fn decimation_caps_long_series_and_keeps_last_point() {
        let indices = decimated_indices(3000, 600);
        assert!(indices.len() <= 601);
        assert_eq!(indices[0], 0);
        assert_eq!(*indices.last().unwrap(), 2999);
    }

    #[test]
    fn axis_values_get_coarser_with_span() {
        assert_eq!(format_axis_value(12.346, 40.0), "12.35");
        assert_eq!(format_axis_value(123.46, 400.0), "123.5");
        assert_eq!(format_axis_value(1234.4, 4000.0), "1234");
    }
}
