//! Forward Euler simulation of a damped, driven pendulum.
//!
//! The pendulum obeys
//!
//! ```text
//! m l² theta'' = m g l sin(theta) + tau - c theta'
//! ```
//!
//! with `theta` measured from the upward vertical. [`step`] applies one
//! explicit Euler update and [`Simulator`] folds it over a fixed number of
//! steps into a [`Trajectory`]. The trajectory feeds the phase-plane and
//! spatial plots ([`Position`], [`Bounds`]) and the flip-book animation
//! ([`Frame`], [`Playback`]).
//!
//! ```
//! use pendulum::{Parameters, Simulator, State};
//!
//! let simulator = Simulator::new(Parameters::default(), 0.05, 0.1)?;
//! let trajectory = simulator.run(State::new(0.0, 0.0), 3)?;
//!
//! assert_eq!(trajectory.len(), 4);
//! assert!((trajectory.thetas()[3] - 0.028).abs() < 1e-12);
//! # Ok::<(), pendulum::Error>(())
//! ```

mod animation;
mod config;
mod dynamics;
mod error;
mod geometry;
mod model;
mod parameters;
mod simulator;
mod state;
pub mod torque;
mod trajectory;

pub use animation::{Frame, Playback};
pub use config::{Config, ConfigError, Run};
pub use dynamics::{Rate, step};
pub use error::Error;
pub use geometry::{Bounds, Position};
pub use model::{Input, PendulumModel, PendulumProblem};
pub use parameters::Parameters;
pub use simulator::Simulator;
pub use state::State;
pub use torque::DrivingTorque;
pub use trajectory::Trajectory;
