use pendulum_core::Observer;
use pendulum_solvers::transient::euler::{self, Action, Event, Status};
use tracing::{debug, debug_span, warn};

use crate::{
    DrivingTorque, Error, Input, Parameters, PendulumModel, PendulumProblem, State, Trajectory,
};

/// Runs forward Euler simulations of one pendulum.
///
/// A simulator fixes the physical parameters, the step size and the driving
/// torque. Every call to [`run`](Simulator::run) starts from scratch and owns
/// its result, so one simulator can serve any number of independent runs.
#[derive(Debug, Clone)]
pub struct Simulator<T = f64> {
    model: PendulumModel<T>,
    dt: f64,
}

impl<T: DrivingTorque> Simulator<T> {
    /// Creates a simulator stepping by `dt` under `torque`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimeStep`] unless `dt` is finite and positive.
    pub fn new(parameters: Parameters, dt: f64, torque: T) -> Result<Self, Error> {
        if !(dt.is_finite() && dt > 0.0) {
            warn!(dt, "rejected time step");
            return Err(Error::InvalidTimeStep(dt));
        }

        Ok(Self {
            model: PendulumModel::new(parameters, torque),
            dt,
        })
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        self.model.parameters()
    }

    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    #[must_use]
    pub fn torque(&self) -> &T {
        self.model.torque()
    }

    /// Integrates `steps` Euler steps from `initial`.
    ///
    /// The trajectory holds `steps + 1` samples; sample 0 is `initial`
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteState`] if `initial` contains NaN or infinity.
    pub fn run(&self, initial: State, steps: usize) -> Result<Trajectory, Error> {
        self.run_observed(initial, steps, ())
    }

    /// Integrates like [`run`](Simulator::run), reporting each sample to
    /// `observer`.
    ///
    /// The observer sees step 0 (the initial condition) and every step after
    /// it. A run stopped through [`Action::StopEarly`] is an error; partial
    /// trajectories are never returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteState`] for a non-finite initial state and
    /// [`Error::Interrupted`] if the observer stops the run.
    pub fn run_observed<Obs>(
        &self,
        initial: State,
        steps: usize,
        observer: Obs,
    ) -> Result<Trajectory, Error>
    where
        Obs: Observer<Event<Input>, Action>,
    {
        if !initial.is_finite() {
            warn!(?initial, "rejected initial state");
            return Err(Error::NonFiniteState {
                theta: initial.theta,
                omega: initial.omega,
            });
        }

        let span = debug_span!("simulate", steps, dt = self.dt);
        let _guard = span.enter();

        let solution = euler::solve(
            &self.model,
            &PendulumProblem,
            Input::at_start(initial),
            self.dt,
            steps,
            observer,
        )?;

        match solution.status {
            Status::Complete => {
                let states = solution.history.into_iter().map(|input| input.state);
                let trajectory = Trajectory::from_states(states);
                debug!(final_state = ?trajectory.last(), "simulation complete");
                Ok(trajectory)
            }
            Status::StoppedByObserver => Err(Error::Interrupted {
                steps: solution.steps,
            }),
        }
    }
}
