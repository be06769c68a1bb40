use serde::Serialize;
use crate::engine::EngineResult;

pub const USAGE_NOTE_TITLE: &str = "How to Use:";

pub const USAGE_NOTE_STEPS: [&str; 4] = [
    "Use the sliders in the sidebar to adjust the magnitudes of the two vectors (V1 and V2).",
    "Use the angle slider to change the angle between V1 and V2.",
    "The plot will update automatically to show the vectors and their resultant.",
    "The magnitude and angle of the resultant vector are displayed above the plot.",
];

/// The two display values shown above the plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub magnitude: String,
    pub angle: String,
}

impl Metrics {
    pub fn from_result(result: &EngineResult) -> Self {
        Self {
            magnitude: format_magnitude(result.resultant_magnitude),
            angle: format_angle(result.resultant_angle_degrees),
        }
    }
}

pub fn format_magnitude(magnitude: f64) -> String {
    format!("{magnitude:.2}")
}

pub fn format_angle(angle_degrees: f64) -> String {
    format!("{angle_degrees:.2}°")
}

/// Numbered lines of the usage note, e.g. `"1. Use the sliders ..."`.
pub fn usage_note_lines() -> Vec<String> {
    USAGE_NOTE_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect()
}
