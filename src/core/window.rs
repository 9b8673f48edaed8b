pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Data-space bounds of one chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for PlotWindow {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }
}

impl PlotWindow {
    /// Window anchored at the origin with a fixed x:y ratio, so a trajectory
    /// keeps its shape between launches.
    pub fn fixed_ratio(raw_max_x: f64, raw_max_y: f64) -> Self {
        let raw_x_span = raw_max_x.max(1.0);
        let raw_y_span = raw_max_y.max(1.0);
        let x_pad = raw_x_span * X_PADDING_RATIO;
        let y_pad = raw_y_span * Y_PADDING_RATIO;

        let mut x_span = (raw_max_x + x_pad).max(1.0);
        let mut y_span = (raw_max_y + y_pad).max(1.0);

        if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
            x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
        } else {
            y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
        }

        Self {
            x_min: 0.0,
            x_max: x_span,
            y_min: 0.0,
            y_max: y_span,
        }
    }

    /// Fixed-ratio window for a path that may run left of the origin, as
    /// happens for launch angles past 90 degrees.
    pub fn fixed_ratio_from(x_lo: f64, x_hi: f64, y_hi: f64) -> Self {
        let x_lo = x_lo.min(0.0);
        let x_hi = x_hi.max(0.0);
        let base = Self::fixed_ratio(x_hi - x_lo, y_hi);
        Self {
            x_min: x_lo,
            x_max: x_lo + base.x_max,
            ..base
        }
    }

    /// Smallest padded window holding every point of the given series. The
    /// y range always includes zero with some headroom above it, so a flat
    /// zero line stays visible. Empty or non-finite input gives the unit window.
    pub fn enclosing<'a, I>(series: I) -> Self
    where
        I: IntoIterator<Item = (&'a [f64], &'a [f64])>,
    {
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = 0.0f64;
        let mut y_max = 0.0f64;
        let mut any = false;

        for (xs, ys) in series {
            for (&x, &y) in xs.iter().zip(ys) {
                if !x.is_finite() || !y.is_finite() {
                    continue;
                }
                any = true;
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }

        if !any {
            return Self::default();
        }

        let y_pad = ((y_max - y_min) * Y_PADDING_RATIO).max(0.5);
        Self {
            x_min: 0.0,
            x_max: (x_max * (1.0 + X_PADDING_RATIO)).max(1.0),
            y_min: if y_min < 0.0 { y_min - y_pad } else { 0.0 },
            y_max: y_max + y_pad,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Maps a data point into a pixel rectangle whose y axis grows downwards.
    pub fn to_screen(
        &self,
        (x, y): (f64, f64),
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    ) -> (f64, f64) {
        let plot_w = (right - left).max(1.0);
        let plot_h = (bottom - top).max(1.0);
        let sx = left + ((x - self.x_min) / self.width().max(f64::EPSILON)) * plot_w;
        let sy = bottom - ((y - self.y_min) / self.height().max(f64::EPSILON)) * plot_h;
        (sx, sy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ratio_keeps_two_to_one_aspect() {
        let window = PlotWindow::fixed_ratio(40.0, 10.0);
        assert!((window.width() / window.height() - DISTANCE_TO_HEIGHT_RATIO).abs() < 1e-12);
        assert!(window.x_max >= 40.0);
        assert!(window.y_max >= 10.0);
    }

    #[test]
    fn fixed_ratio_handles_zero_extent() {
        let window = PlotWindow::fixed_ratio(0.0, 0.0);
        assert_eq!(window.y_max, 1.0);
        assert_eq!(window.x_max, 2.0);
    }

    #[test]
    fn fixed_ratio_from_covers_backwards_paths() {
        let window = PlotWindow::fixed_ratio_from(-30.0, 0.0, 8.0);
        assert_eq!(window.x_min, -30.0);
        assert!(window.x_max >= 0.0);
        assert!((window.width() / window.height() - DISTANCE_TO_HEIGHT_RATIO).abs() < 1e-12);
    }

    #[test]
    fn enclosing_empty_series_is_unit_window() {
        let empty: [f64; 0] = [];
        assert_eq!(
            PlotWindow::enclosing([(&empty[..], &empty[..])]),
            PlotWindow::default()
        );
    }

    #[test]
    fn enclosing_spans_negative_values() {
        let t = [0.0, 1.0, 2.0];
        let vy = [10.0, 0.2, -9.6];
        let window = PlotWindow::enclosing([(&t[..], &vy[..])]);
        assert!(window.y_min < -9.6);
        assert!(window.y_max > 10.0);
        assert!(window.x_max >= 2.0);
    }

    #[test]
    fn enclosing_all_negative_series_keeps_zero_inside() {
        let t = [0.0, 1.0];
        let ay = [-9.807, -9.807];
        let window = PlotWindow::enclosing([(&t[..], &ay[..])]);
        assert!(window.y_max > 0.0);
        assert!(window.y_min < -9.807);
    }

    #[test]
    fn enclosing_skips_non_finite_points() {
        let t = [0.0, f64::NAN];
        let y = [1.0, f64::INFINITY];
        let window = PlotWindow::enclosing([(&t[..], &y[..])]);
        assert!(window.y_max.is_finite());
        assert!(window.x_max.is_finite());
    }

    #[test]
    fn to_screen_maps_corners() {
        let window = PlotWindow {
            x_min: 0.0,
            x_max: 10.0,
            y_min: -5.0,
            y_max: 5.0,
        };
        assert_eq!(window.to_screen((0.0, -5.0), 100.0, 300.0, 50.0, 150.0), (100.0, 150.0));
        assert_eq!(window.to_screen((10.0, 5.0), 100.0, 300.0, 50.0, 150.0), (300.0, 50.0));
    }
}
