use std::time::Instant;

use eframe::egui::{self, Color32};
use egui_plot::{Line, LineStyle, MarkerShape, Points};
use pendulum::{Bounds, Playback, Trajectory};
use tracing::debug;

use crate::{ShowConfig, positions::show_square, series};

/// Opens a looping flip-book of `trajectory`.
///
/// Frame `i` shows the bob at samples `0..=i` with the arm drawn to the newest
/// one. `playback` sets the frame count and interval; frames index into the
/// precomputed trajectory, so nothing is simulated while drawing.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show_animation(
    trajectory: &Trajectory,
    length: f64,
    playback: Playback,
    config: ShowConfig,
) -> Result<(), eframe::Error> {
    let app = AnimationApp {
        trajectory: trajectory.clone(),
        length,
        bounds: Bounds::around(length),
        playback,
        last_tick: Instant::now(),
        legend: config.legend,
    };
    debug!(
        frames = playback.frame_count(),
        interval_ms = playback.interval().as_millis(),
        "opening animation"
    );

    eframe::run_native(
        &config.window_title(),
        config.native_options(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
}

struct AnimationApp {
    trajectory: Trajectory,
    length: f64,
    bounds: Bounds,
    playback: Playback,
    last_tick: Instant,
    legend: bool,
}

impl eframe::App for AnimationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.playback.advance(now - self.last_tick);
        self.last_tick = now;

        // Frames past the trajectory hold on the last sample.
        let index = self.playback.current().min(self.trajectory.steps());
        let Some(frame) = self.trajectory.frame(index, self.length) else {
            return;
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            show_square(ui, "animation", self.bounds, self.legend, |plot_ui| {
                plot_ui.line(
                    Line::new(series::arm(frame.head()))
                        .color(Color32::GRAY)
                        .style(LineStyle::dashed_loose()),
                );
                plot_ui.points(
                    Points::new(series::frame(&frame))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(5.0)
                        .color(Color32::RED)
                        .name("Pendulum Positions"),
                );
            });
        });

        ctx.request_repaint_after(self.playback.until_next());
    }
}
