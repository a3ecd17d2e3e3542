//! The damped, driven pendulum equation and its explicit Euler update.
//!
//! ```text
//! theta' = omega
//! omega' = (m g l sin(theta) + tau - c omega) / (m l²)
//! ```

use pendulum_core::StepIntegrable;

use crate::{Parameters, State};

/// Time derivative of a [`State`].
///
/// The angular acceleration is kept factored as net torque over moment of
/// inertia so the Euler update can scale the torque by `dt / (m l²)` directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate {
    pub angular_velocity: f64,
    pub net_torque: f64,
    pub moment_of_inertia: f64,
}

impl Rate {
    /// Evaluates the equation of motion at `state` under `torque`.
    #[must_use]
    pub fn at(parameters: &Parameters, state: State, torque: f64) -> Self {
        Self {
            angular_velocity: state.omega,
            net_torque: parameters.gravity_torque(state.theta) + torque
                - parameters.damping_torque(state.omega),
            moment_of_inertia: parameters.moment_of_inertia(),
        }
    }

    #[must_use]
    pub fn angular_acceleration(&self) -> f64 {
        self.net_torque / self.moment_of_inertia
    }
}

impl StepIntegrable<f64> for State {
    type Derivative = Rate;

    fn step(&self, rate: Rate, dt: f64) -> Self {
        Self {
            theta: self.theta + dt * rate.angular_velocity,
            omega: self.omega + (dt / rate.moment_of_inertia) * rate.net_torque,
        }
    }
}

/// Advances `state` by one explicit Euler step of size `dt`.
///
/// ```text
/// theta_new = theta + dt omega
/// omega_new = omega + dt / (m l²) (m g l sin(theta) + torque - c omega)
/// ```
///
/// Both updates use the state at the start of the step.
#[must_use]
pub fn step(parameters: &Parameters, dt: f64, state: State, torque: f64) -> State {
    state.step(Rate::at(parameters, state, torque), dt)
}
