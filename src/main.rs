mod app;

use eframe::{NativeOptions, Result, run_native};
use eframe::egui::{Vec2, ViewportBuilder};
use vector_addition::constants::*;
use app::App;

fn main() -> Result {
    let title = "Vector Addition Visualizer";

    let width = GUI_PLOT_SIZE + GUI_SIDEBAR_WIDTH + GUI_VIEWPORT_PADDING * 2.0;
    let height = GUI_METRICS_HEIGHT + GUI_PLOT_SIZE + GUI_NOTE_HEIGHT + GUI_VIEWPORT_PADDING * 2.0;

    let options = NativeOptions {
        viewport: ViewportBuilder {
            inner_size: Some(Vec2::new(width, height)),
            min_inner_size: Some(Vec2::new(width, GUI_PLOT_SIZE)),
            maximize_button: Some(false),
            ..Default::default()
        },
        ..Default::default()
    };

    run_native(
        title,
        options,
        Box::new(|_cc| Ok(Box::<App>::default())),
    )
}
