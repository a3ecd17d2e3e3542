//! Fixed-step solvers for the pendulum workspace.
//!
//! - [`transient::euler`] — explicit (forward) Euler time stepping

pub mod transient;
