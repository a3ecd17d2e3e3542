use std::convert::Infallible;

use pendulum_core::{DerivativeOf, Model, OdeProblem};

use crate::{DrivingTorque, Parameters, Rate, State};

/// Model input: the state and the time it is reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub state: State,
    pub time: f64,
}

impl Input {
    /// The input at `t = 0`.
    #[must_use]
    pub fn at_start(state: State) -> Self {
        Self { state, time: 0.0 }
    }
}

/// Evaluates the pendulum's [`Rate`] for a given [`Input`].
#[derive(Debug, Clone)]
pub struct PendulumModel<T> {
    parameters: Parameters,
    torque: T,
}

impl<T: DrivingTorque> PendulumModel<T> {
    #[must_use]
    pub fn new(parameters: Parameters, torque: T) -> Self {
        Self { parameters, torque }
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    #[must_use]
    pub fn torque(&self) -> &T {
        &self.torque
    }
}

impl<T: DrivingTorque> Model for PendulumModel<T> {
    type Input = Input;
    type Output = Rate;
    type Error = Infallible;

    fn call(&self, input: &Input) -> Result<Rate, Infallible> {
        let torque = self.torque.torque_at(input.time);
        Ok(Rate::at(&self.parameters, input.state, torque))
    }
}

/// Integrates [`PendulumModel`] over time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendulumProblem;

impl OdeProblem for PendulumProblem {
    type Input = Input;
    type Output = Rate;
    type Delta = f64;
    type State = State;
    type Error = Infallible;

    fn state(&self, input: &Input) -> Result<State, Infallible> {
        Ok(input.state)
    }

    fn derivative(
        &self,
        _input: &Input,
        output: &Rate,
    ) -> Result<DerivativeOf<State, f64>, Infallible> {
        Ok(*output)
    }

    fn build_input(&self, base: &Input, state: &State, dt: &f64) -> Result<Input, Infallible> {
        Ok(Input {
            state: *state,
            time: base.time + dt,
        })
    }
}
