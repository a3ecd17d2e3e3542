//! Windows for looking at pendulum runs.
//!
//! Each `show_*` function opens a blocking egui window and returns when the
//! user closes it:
//!
//! - [`show_phase`] — angular velocity against angular position
//! - [`show_positions`] — bob positions as a scatter around the pivot
//! - [`show_animation`] — a looping flip-book of the precomputed trajectory
//!
//! The pure data preparation lives in [`series`] so it can be checked without
//! opening a window.

mod animation;
mod config;
mod phase;
mod positions;
pub mod series;

pub use animation::show_animation;
pub use config::ShowConfig;
pub use phase::show_phase;
pub use positions::show_positions;
