use pendulum_solvers::transient::euler;

/// Errors raised while setting up or running a pendulum simulation.
///
/// Everything except [`Error::Solver`] and [`Error::Interrupted`] is detected
/// before the first step, so a failed run never yields a partial trajectory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{name} must be {requirement}, got {value}")]
    InvalidParameter {
        name: &'static str,
        requirement: &'static str,
        value: f64,
    },

    #[error("step count must be non-negative, got {0}")]
    InvalidStepCount(i64),

    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),

    #[error("initial state must be finite, got theta = {theta}, omega = {omega}")]
    NonFiniteState { theta: f64, omega: f64 },

    #[error("sample index {index} is outside a trajectory of {len} samples")]
    SampleOutOfRange { index: usize, len: usize },

    #[error("run stopped by observer after {steps} steps")]
    Interrupted { steps: usize },

    #[error(transparent)]
    Solver(#[from] euler::Error),
}
