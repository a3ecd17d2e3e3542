use eframe::egui;
use egui_plot::{Legend, Line, Plot};
use pendulum::Trajectory;
use tracing::debug;

use crate::{ShowConfig, series};

/// Opens a phase-plane plot of `trajectory`: omega against theta.
///
/// Blocks until the window is closed.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show_phase(trajectory: &Trajectory, config: ShowConfig) -> Result<(), eframe::Error> {
    let app = PhaseApp {
        points: series::phase(trajectory),
        legend: config.legend,
    };
    debug!(samples = app.points.len(), "opening phase plot");

    eframe::run_native(
        &config.window_title(),
        config.native_options(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
}

struct PhaseApp {
    points: Vec<[f64; 2]>,
    legend: bool,
}

impl eframe::App for PhaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("phase")
                .x_axis_label("Angular Position (theta)")
                .y_axis_label("Angular Velocity (omega)")
                .show_grid(true);
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                plot_ui.line(Line::new(self.points.clone()).name("Pendulum Motion"));
            });
        });
    }
}
