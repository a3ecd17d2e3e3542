//! Forward Euler integration of an [`OdeProblem`].
//!
//! Each step evaluates the derivative at the start of the step and applies it
//! over the whole step:
//!
//! ```text
//! state_{n+1} = state_n.step(derivative_n, dt)
//! ```
//!
//! How the derivative is applied is up to the state's [`StepIntegrable`]
//! implementation. The step size is fixed for the whole run.
//!
//! # Example
//!
//! ```ignore
//! use pendulum_solvers::transient::euler;
//!
//! let solution = euler::solve_unobserved(&model, &problem, initial, 0.05, 200)?;
//! assert_eq!(solution.history.len(), 201);
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use pendulum_core::{Model, Observer, OdeProblem, StepIntegrable};
use tracing::{debug, trace};

/// Integrates `problem` for `steps` fixed steps of size `dt`.
///
/// `initial` becomes step 0 of the history unchanged. Every later input is
/// built strictly from the one before it, so the history always holds
/// `steps + 1` entries unless the observer stops the run.
///
/// The model is evaluated only when a step is taken, once per step, on the
/// input the step starts from. A run of zero steps never calls it, and the
/// final input is recorded without being evaluated.
///
/// The observer sees step 0 and then every accepted step. Returning
/// [`Action::StopEarly`] ends the run with [`Status::StoppedByObserver`].
///
/// # Errors
///
/// Returns an [`Error`] tagged with the step being computed if the model or
/// the problem fails.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<M::Input>, Error>
where
    M: Model,
    M::Input: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    Obs: Observer<Event<M::Input>, Action>,
{
    debug!(steps, "starting forward Euler run");

    let mut current = initial;
    let mut history = Vec::with_capacity(steps + 1);

    for step in 0..=steps {
        if step > 0 {
            current = advance(model, problem, &current, &dt, step)?;
        }
        history.push(current.clone());

        let event = Event {
            step,
            input: current.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(step, "observer stopped forward Euler run");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }
    }

    debug!(steps, "forward Euler run complete");
    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Integrates like [`solve`], discarding every event.
///
/// # Errors
///
/// Returns an [`Error`] if the model or the problem fails.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input>, Error>
where
    M: Model,
    M::Input: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    solve(model, problem, initial, dt, steps, ())
}

/// Takes Euler step `step`, evaluating the model at `current`.
fn advance<M, P>(
    model: &M,
    problem: &P,
    current: &M::Input,
    dt: &P::Delta,
    step: usize,
) -> Result<M::Input, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    let output = model
        .call(current)
        .map_err(|err| Error::model(step, err))?;
    let state = problem
        .state(current)
        .map_err(|err| Error::problem(step, err))?;
    let derivative = problem
        .derivative(current, &output)
        .map_err(|err| Error::problem(step, err))?;

    let next_state = state.step(derivative, dt.clone());
    let next_input = problem
        .build_input(current, &next_state, dt)
        .map_err(|err| Error::problem(step, err))?;

    trace!(step, "accepted forward Euler step");
    Ok(next_input)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::RefCell, convert::Infallible};

    use approx::assert_relative_eq;
    use pendulum_core::DerivativeOf;

    // --- Fixtures: exponential decay, y' = -k y ---

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Level(f64);

    #[derive(Debug, Clone, Copy)]
    struct DecayRate(f64);

    impl StepIntegrable<f64> for Level {
        type Derivative = DecayRate;

        fn step(&self, derivative: DecayRate, dt: f64) -> Self {
            Level(self.0 + dt * derivative.0)
        }
    }

    #[derive(Debug, Clone)]
    struct Input {
        level: Level,
        time: f64,
    }

    struct Decay {
        k: f64,
    }

    impl Model for Decay {
        type Input = Input;
        type Output = DecayRate;
        type Error = Infallible;

        fn call(&self, input: &Input) -> Result<DecayRate, Infallible> {
            Ok(DecayRate(-self.k * input.level.0))
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("ran past t = {0}")]
    struct Expired(f64);

    /// Fails once time passes `limit`.
    struct Expiring {
        limit: f64,
    }

    impl Model for Expiring {
        type Input = Input;
        type Output = DecayRate;
        type Error = Expired;

        fn call(&self, input: &Input) -> Result<DecayRate, Expired> {
            if input.time > self.limit {
                Err(Expired(self.limit))
            } else {
                Ok(DecayRate(0.0))
            }
        }
    }

    struct DecayProblem;

    impl OdeProblem for DecayProblem {
        type Input = Input;
        type Output = DecayRate;
        type Delta = f64;
        type State = Level;
        type Error = Infallible;

        fn state(&self, input: &Input) -> Result<Level, Infallible> {
            Ok(input.level)
        }

        fn derivative(
            &self,
            _input: &Input,
            output: &DecayRate,
        ) -> Result<DerivativeOf<Level, f64>, Infallible> {
            Ok(*output)
        }

        fn build_input(&self, base: &Input, state: &Level, dt: &f64) -> Result<Input, Infallible> {
            Ok(Input {
                level: *state,
                time: base.time + dt,
            })
        }
    }

    /// Records the time of every evaluation.
    #[derive(Default)]
    struct Recording {
        times: RefCell<Vec<f64>>,
    }

    impl Model for Recording {
        type Input = Input;
        type Output = DecayRate;
        type Error = Infallible;

        fn call(&self, input: &Input) -> Result<DecayRate, Infallible> {
            self.times.borrow_mut().push(input.time);
            Ok(DecayRate(0.0))
        }
    }

    fn start(level: f64) -> Input {
        Input {
            level: Level(level),
            time: 0.0,
        }
    }

    // --- Tests ---

    #[test]
    fn decays_geometrically() {
        let solution = solve_unobserved(&Decay { k: 0.5 }, &DecayProblem, start(1.0), 0.1, 20)
            .expect("decay never fails");

        assert!(solution.is_complete());
        assert_eq!(solution.steps, 20);
        assert_eq!(solution.history.len(), 21);

        // Each step multiplies the level by (1 - k dt).
        for (n, input) in solution.history.iter().enumerate() {
            let n = i32::try_from(n).unwrap();
            assert_relative_eq!(input.level.0, 0.95_f64.powi(n), max_relative = 1e-12);
        }
        assert_relative_eq!(solution.last().unwrap().time, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn initial_input_is_recorded_unchanged() {
        let solution =
            solve_unobserved(&Decay { k: 3.0 }, &DecayProblem, start(0.7), 0.5, 4).unwrap();

        assert_eq!(solution.history[0].level, Level(0.7));
        assert_eq!(solution.history[0].time, 0.0);
    }

    #[test]
    fn zero_steps_returns_only_initial() {
        let solution =
            solve_unobserved(&Decay { k: 1.0 }, &DecayProblem, start(5.0), 0.1, 0).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.history.len(), 1);
        assert_eq!(solution.history[0].level, Level(5.0));
    }

    #[test]
    fn model_is_evaluated_once_per_step() {
        let model = Recording::default();
        solve_unobserved(&model, &DecayProblem, start(1.0), 0.25, 0).unwrap();
        assert!(model.times.borrow().is_empty());

        let model = Recording::default();
        solve_unobserved(&model, &DecayProblem, start(1.0), 0.25, 3).unwrap();
        assert_eq!(*model.times.borrow(), vec![0.0, 0.25, 0.5]);
    }

    #[test]
    fn observer_sees_steps_in_order() {
        let mut steps = Vec::new();
        solve(
            &Decay { k: 1.0 },
            &DecayProblem,
            start(1.0),
            0.25,
            3,
            |event: &Event<Input>| {
                steps.push(event.step);
                None
            },
        )
        .unwrap();

        assert_eq!(steps, vec![0, 1, 2, 3]);
    }

    #[test]
    fn observer_can_stop_early() {
        let solution = solve(
            &Decay { k: 1.0 },
            &DecayProblem,
            start(1.0),
            0.1,
            100,
            |event: &Event<Input>| (event.step == 4).then_some(Action::StopEarly),
        )
        .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 4);
        assert_eq!(solution.history.len(), 5);
    }

    #[test]
    fn model_failure_reports_step() {
        let err = solve_unobserved(
            &Expiring { limit: 0.25 },
            &DecayProblem,
            start(1.0),
            0.1,
            10,
        )
        .unwrap_err();

        // Step 4 starts from the first input past t = 0.25.
        assert!(matches!(err, Error::Model { step: 4, .. }));
        assert_eq!(err.step(), 4);
        assert_eq!(err.to_string(), "model failed at step 4: ran past t = 0.25");
    }
}
