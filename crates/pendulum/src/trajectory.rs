use crate::{Error, Frame, Position, State};

/// The states visited by one simulation run.
///
/// Stored as two index-aligned sequences, `theta` and `omega`. Sample 0 is the
/// initial condition and sample `i` the state after `i` steps, so a run of
/// `n` steps holds `n + 1` samples. Only the simulator builds trajectories,
/// which keeps both sequences the same length and never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    theta: Vec<f64>,
    omega: Vec<f64>,
}

impl Trajectory {
    pub(crate) fn from_states(states: impl ExactSizeIterator<Item = State>) -> Self {
        let mut theta = Vec::with_capacity(states.len());
        let mut omega = Vec::with_capacity(states.len());
        for state in states {
            theta.push(state.theta);
            omega.push(state.omega);
        }
        debug_assert!(!theta.is_empty(), "a trajectory holds its initial state");
        Self { theta, omega }
    }

    /// Angular positions, one per sample.
    #[must_use]
    pub fn thetas(&self) -> &[f64] {
        &self.theta
    }

    /// Angular velocities, one per sample.
    #[must_use]
    pub fn omegas(&self) -> &[f64] {
        &self.omega
    }

    /// Number of samples, one more than the number of steps.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.theta.len()
    }

    /// Number of Euler steps taken.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<State> {
        Some(State::new(*self.theta.get(index)?, *self.omega.get(index)?))
    }

    #[must_use]
    pub fn initial(&self) -> State {
        State::new(self.theta[0], self.omega[0])
    }

    #[must_use]
    pub fn last(&self) -> State {
        let i = self.steps();
        State::new(self.theta[i], self.omega[i])
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = State> + '_ {
        self.theta
            .iter()
            .zip(&self.omega)
            .map(|(&theta, &omega)| State::new(theta, omega))
    }

    /// Bob positions for an arm of `length`, one per sample.
    #[must_use]
    pub fn positions(&self, length: f64) -> Vec<Position> {
        self.theta
            .iter()
            .map(|&theta| Position::from_angle(theta, length))
            .collect()
    }

    /// Picks the samples at `indices`, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SampleOutOfRange`] for the first index past the end.
    pub fn sample(&self, indices: &[usize]) -> Result<Vec<State>, Error> {
        indices
            .iter()
            .map(|&index| {
                self.get(index).ok_or(Error::SampleOutOfRange {
                    index,
                    len: self.len(),
                })
            })
            .collect()
    }

    /// The animation frame showing samples `0..=index`, if `index` exists.
    #[must_use]
    pub fn frame(&self, index: usize, length: f64) -> Option<Frame<'_>> {
        let thetas = self.theta.get(..=index)?;
        Some(Frame {
            index,
            thetas,
            length,
        })
    }

    /// Every animation frame in order, one per sample.
    pub fn frames(&self, length: f64) -> impl ExactSizeIterator<Item = Frame<'_>> + '_ {
        (0..self.len()).map(move |index| Frame {
            index,
            thetas: &self.theta[..=index],
            length,
        })
    }
}
