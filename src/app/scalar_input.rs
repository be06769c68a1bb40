use eframe::egui::{Slider, Ui};
use vector_addition::constants::*;

/// Range, step and caption of one sidebar slider.
pub struct ScalarInputData {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub suffix: &'static str,
}

pub const MAGNITUDE1_INPUT: ScalarInputData = ScalarInputData {
    label: "Magnitude of Vector 1 (V1)",
    min: MAGNITUDE_MIN,
    max: MAGNITUDE_MAX,
    step: MAGNITUDE_STEP,
    suffix: "",
};

pub const MAGNITUDE2_INPUT: ScalarInputData = ScalarInputData {
    label: "Magnitude of Vector 2 (V2)",
    min: MAGNITUDE_MIN,
    max: MAGNITUDE_MAX,
    step: MAGNITUDE_STEP,
    suffix: "",
};

pub const ANGLE_INPUT: ScalarInputData = ScalarInputData {
    label: "Angle Between Vectors (degrees)",
    min: ANGLE_MIN,
    max: ANGLE_MAX,
    step: ANGLE_STEP,
    suffix: "°",
};

pub const PLOT_BOUND_INPUT: ScalarInputData = ScalarInputData {
    label: "Plot half-width",
    min: PLOT_BOUND_MIN,
    max: PLOT_BOUND_MAX,
    step: PLOT_BOUND_STEP,
    suffix: "",
};

/// Returns true when the value changed this frame.
pub fn scalar_input(ui: &mut Ui, data: &ScalarInputData, value: &mut f64) -> bool {
    ui.label(data.label);
    let slider = Slider::new(value, data.min..=data.max)
        .step_by(data.step)
        .suffix(data.suffix);
    ui.add(slider).changed()
}
