pub const GUI_PLOT_SIZE: f32 = 640.0;
pub const GUI_SIDEBAR_WIDTH: f32 = 280.0;
pub const GUI_VIEWPORT_PADDING: f32 = 16.0;
pub const GUI_METRICS_HEIGHT: f32 = 96.0;
pub const GUI_NOTE_HEIGHT: f32 = 150.0;

pub const MAGNITUDE_MIN: f64 = 0.0;
pub const MAGNITUDE_MAX: f64 = 10.0;
pub const MAGNITUDE_STEP: f64 = 0.1;
pub const MAGNITUDE1_DEFAULT: f64 = 5.0;
pub const MAGNITUDE2_DEFAULT: f64 = 3.0;

pub const ANGLE_MIN: f64 = 0.0;
pub const ANGLE_MAX: f64 = 360.0;
pub const ANGLE_STEP: f64 = 1.0;
pub const ANGLE_DEFAULT: f64 = 45.0;

pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Half-width of the square plot window, in plot units.
pub const PLOT_BOUND: f64 = 20.0;
pub const PLOT_BOUND_MIN: f64 = 5.0;
pub const PLOT_BOUND_MAX: f64 = 40.0;
pub const PLOT_BOUND_STEP: f64 = 1.0;
pub const PLOT_GRID_STEP: f64 = 5.0;

pub const PLOT_TITLE: &str = "Vectors and their Resultant";
pub const PLOT_X_LABEL: &str = "X-axis";
pub const PLOT_Y_LABEL: &str = "Y-axis";
