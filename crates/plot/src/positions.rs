use eframe::egui::{self, Color32};
use egui_plot::{Legend, Plot, PlotUi, Points};
use pendulum::{Bounds, State};
use tracing::debug;

use crate::{ShowConfig, series};

/// Opens a scatter of bob positions for `states` on an arm of `length`.
///
/// Axes share one scale and span `±1.1 length` so every position fits.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show_positions(
    states: &[State],
    length: f64,
    config: ShowConfig,
) -> Result<(), eframe::Error> {
    let app = PositionsApp {
        points: series::positions(states.iter().copied(), length),
        bounds: Bounds::around(length),
        legend: config.legend,
    };
    debug!(samples = app.points.len(), length, "opening positions plot");

    eframe::run_native(
        &config.window_title(),
        config.native_options(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
}

struct PositionsApp {
    points: Vec<[f64; 2]>,
    bounds: Bounds,
    legend: bool,
}

impl eframe::App for PositionsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            show_square(ui, "positions", self.bounds, self.legend, |plot_ui| {
                plot_ui.points(
                    Points::new(self.points.clone())
                        .radius(4.0)
                        .color(Color32::LIGHT_BLUE)
                        .name("Pendulum Positions"),
                );
            });
        });
    }
}

/// Draws an equal-aspect plot covering `bounds` on both axes.
pub(crate) fn show_square(
    ui: &mut egui::Ui,
    id: &str,
    bounds: Bounds,
    legend: bool,
    build: impl FnOnce(&mut PlotUi),
) {
    let mut plot = Plot::new(id)
        .x_axis_label("x-pos")
        .y_axis_label("y-pos")
        .show_grid(true)
        .data_aspect(1.0)
        .include_x(bounds.min)
        .include_x(bounds.max)
        .include_y(bounds.min)
        .include_y(bounds.max);
    if legend {
        plot = plot.legend(Legend::default());
    }
    plot.show(ui, build);
}
