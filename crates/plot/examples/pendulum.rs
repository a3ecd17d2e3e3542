//! Simulates the driven pendulum and opens one of the plots.
//!
//! # Usage
//!
//! ```text
//! cargo run -p pendulum-plot --example pendulum -- phase
//! cargo run -p pendulum-plot --example pendulum -- positions
//! cargo run -p pendulum-plot --example pendulum -- snapshots --config crates/plot/examples/swing.toml
//! cargo run -p pendulum-plot --example pendulum -- animate --config crates/plot/examples/swing.toml
//! ```
//!
//! # Modes
//!
//! - **phase** — angular velocity against angular position for the whole run.
//! - **positions** — every bob position as a scatter around the pivot.
//! - **snapshots** — only the samples listed under `snapshots` in the config.
//! - **animate** — a looping flip-book, one frame per sample.
//!
//! Without `--config` the reference run is used (torque 0.1 from rest, 200
//! steps of 0.05). Set `RUST_LOG` to a level such as `debug` for more output.

use std::{error::Error, process};

use pendulum::{Config, Playback};
use pendulum_plot::{ShowConfig, show_animation, show_phase, show_positions};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "phase".into());
    let config = match (args.next().as_deref(), args.next()) {
        (None, _) => Config::default(),
        (Some("--config"), Some(path)) => Config::from_path(path)?,
        _ => usage(),
    };

    let run = config.build()?;
    let trajectory = run.execute()?;
    let length = run.length();
    info!(
        steps = run.steps,
        final_theta = trajectory.last().theta,
        final_omega = trajectory.last().omega,
        "simulated pendulum"
    );

    match mode.as_str() {
        "phase" => show_phase(
            &trajectory,
            ShowConfig::new().title("Theta vs. Omega").legend(),
        )?,
        "positions" => {
            let states: Vec<_> = trajectory.iter().collect();
            show_positions(
                &states,
                length,
                ShowConfig::new().title("Pendulum Positions").legend(),
            )?;
        }
        "snapshots" => {
            let states = trajectory.sample(&run.snapshots)?;
            show_positions(
                &states,
                length,
                ShowConfig::new()
                    .title(format!("Pendulum Positions at steps {:?}", run.snapshots))
                    .legend(),
            )?;
        }
        "animate" => {
            let playback = Playback::new(trajectory.len(), run.frame_interval);
            show_animation(
                &trajectory,
                length,
                playback,
                ShowConfig::new().title("Pendulum").legend(),
            )?;
        }
        other => {
            eprintln!("Unknown mode: {other}");
            usage();
        }
    }

    Ok(())
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::INFO);

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(level).finish(),
    )?;
    Ok(())
}

fn usage() -> ! {
    eprintln!("Usage: pendulum [phase|positions|snapshots|animate] [--config <file.toml>]");
    process::exit(1);
}
