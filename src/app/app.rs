use eframe::{App as EguiApp, Frame};
use eframe::egui::{CentralPanel, Color32, Context, Frame as EguiFrame, RichText, ScrollArea, SidePanel, Ui};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use vector_addition::constants::*;
use vector_addition::metrics::{usage_note_lines, USAGE_NOTE_TITLE};
use vector_addition::{EngineError, EngineInput, PlotConfig, Scene};
use crate::app::plot::*;
use crate::app::scalar_input::*;

pub struct App {
    input: EngineInput,
    plot_config: PlotConfig,

    scene: Option<Scene>,
    error: Option<EngineError>,

    theme: Theme,
}

impl Default for App {
    fn default() -> Self {
        let mut obj = Self {
            input: EngineInput::default(),
            plot_config: PlotConfig::default(),
            scene: None,
            error: None,
            theme: Theme::Dark,
        };

        obj.recompute();

        obj
    }
}

impl EguiApp for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        SidePanel::left("side_panel")
            .exact_width(GUI_SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    self.side_panel_content(ui);
                });
            });

        CentralPanel::default()
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    self.central_panel_content(ui);
                });
            });

        ctx.set_visuals(self.theme.visuals());
    }
}

impl App {
    /// Runs the engine on the current input and rebuilds the scene.
    pub fn recompute(&mut self) {
        match Scene::new(self.input, &self.plot_config) {
            Ok(scene) => {
                self.scene = Some(scene);
                self.error = None;
            }
            Err(e) => {
                eprintln!("Rejected input {:?}: {}", self.input, e);
                self.scene = None;
                self.error = Some(e);
            }
        }
    }

    pub fn export_scene(&self, path: &Path) -> io::Result<()> {
        let Some(scene) = &self.scene else {
            return Err(io::Error::new(io::ErrorKind::Other, "no scene to export"));
        };
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        scene.write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn side_panel_content(&mut self, ui: &mut Ui) {
        let mut recompute = false;

        ui.heading("Vector Properties");
        recompute |= scalar_input(ui, &MAGNITUDE1_INPUT, &mut self.input.magnitude1);
        recompute |= scalar_input(ui, &MAGNITUDE2_INPUT, &mut self.input.magnitude2);
        recompute |= scalar_input(ui, &ANGLE_INPUT, &mut self.input.angle_degrees);

        if ui.button("Reset vectors").clicked() {
            self.input = EngineInput::default();
            recompute = true;
        }

        ui.separator();

        ui.collapsing("Plot", |ui| {
            recompute |= scalar_input(ui, &PLOT_BOUND_INPUT, &mut self.plot_config.bound);
            recompute |= ui.checkbox(&mut self.plot_config.show_grid, "Grid").changed();
        });

        ui.separator();

        ui.heading("Theme");
        ui.radio_value(&mut self.theme, Theme::Light, "Light");
        ui.radio_value(&mut self.theme, Theme::Dark, "Dark");

        ui.separator();

        ui.heading("Export");
        if ui.button("Export scene (JSON)").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .set_file_name("scene.json")
                .save_file()
            {
                if let Err(e) = self.export_scene(&path) {
                    eprintln!("Failed to export scene to {}: {}", path.display(), e);
                }
            }
        }

        if recompute {
            self.recompute();
        }
    }

    pub fn central_panel_content(&self, ui: &mut Ui) {
        let Some(scene) = &self.scene else {
            if let Some(e) = &self.error {
                ui.colored_label(Color32::RED, e.to_string());
            }
            return;
        };

        ui.heading("Resultant Vector");
        ui.columns(2, |columns| {
            metric(&mut columns[0], "Magnitude", &scene.metrics.magnitude);
            metric(&mut columns[1], "Angle (degrees)", &scene.metrics.angle);
        });

        ui.separator();

        ui.heading("Vector Visualization");
        plot_scene(ui, scene, GUI_PLOT_SIZE);

        ui.separator();

        EguiFrame::group(ui.style())
            .fill(ui.visuals().faint_bg_color)
            .show(ui, |ui| {
                ui.label(RichText::new(USAGE_NOTE_TITLE).strong());
                for line in usage_note_lines() {
                    ui.label(line);
                }
            });
    }
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).small());
    ui.label(RichText::new(value).size(28.0));
}

#[derive(PartialEq)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn visuals(&self) -> eframe::egui::Visuals {
        match self {
            Theme::Light => eframe::egui::Visuals::light(),
            Theme::Dark => eframe::egui::Visuals::dark(),
        }
    }
}
