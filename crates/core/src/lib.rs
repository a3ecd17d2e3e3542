//! Core traits for the pendulum workspace.
//!
//! The solver and domain crates build on a handful of small abstractions:
//!
//! - [`Model`] — a deterministic callable from a typed input to a typed output
//! - [`Observer`] — receives solver events and may answer with an action
//! - [`OdeProblem`] — adapts a model's input and output to an integrable state
//! - [`StepIntegrable`] — a state that knows how to advance along its derivative

mod model;
mod observer;
mod ode;
mod step;

pub use model::Model;
pub use observer::Observer;
pub use ode::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
