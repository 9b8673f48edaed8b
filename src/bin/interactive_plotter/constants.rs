use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 1000;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";
pub const CONFIG_ENV_VAR: &str = "PARABOLIC_CONFIG";

pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 120.0;
pub const PANEL_W: f32 = 330.0;
pub const PANEL_H: f32 = 250.0;

pub const PLOTS_LEFT: f32 = PANEL_X + PANEL_W + 30.0;
pub const PLOTS_TOP: f32 = 170.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const BOTTOM_MARGIN: f32 = 30.0;
pub const PLOT_GAP: f32 = 36.0;

// inner margins of a single plot panel
pub const AXIS_LEFT_PAD: f32 = 64.0;
pub const AXIS_BOTTOM_PAD: f32 = 46.0;
pub const TITLE_PAD: f32 = 30.0;
pub const INNER_RIGHT_PAD: f32 = 12.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 82.0;
pub const METRICS_Y: f32 = 138.0;
pub const DETAILS_Y: f32 = PANEL_Y + PANEL_H + 40.0;
pub const DETAILS_LINE_H: f32 = 20.0;
pub const X_GRID_LINES: usize = 8;
pub const Y_GRID_LINES: usize = 6;
pub const MAX_DRAWN_POINTS: usize = 600;

pub const MASS_RANGE_KG: std::ops::Range<f32> = 0.0..100.0;
pub const SPEED_RANGE_MPS: std::ops::Range<f32> = 0.0..100.0;
pub const ANGLE_RANGE_DEG: std::ops::Range<f32> = 0.0..180.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.443, 0.486, 1.0);
pub const HEADER_COLOR: Color = Color::new(0.118, 0.118, 0.137, 1.0);
pub const TRAJECTORY_COLOR: Color = Color::new(0.212, 0.482, 0.961, 1.0);
pub const VX_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const VY_COLOR: Color = Color::new(0.0, 0.5, 0.0, 1.0);
pub const AY_COLOR: Color = Color::new(0.9, 0.16, 0.22, 1.0);
pub const AX_COLOR: Color = Color::new(0.5, 0.0, 0.5, 1.0);
