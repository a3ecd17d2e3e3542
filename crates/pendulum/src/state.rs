/// Instantaneous configuration of the pendulum.
///
/// `theta` is the angle from the upward vertical in radians and `omega` the
/// angular velocity. Angles are never wrapped; a pendulum that swings over the
/// top keeps accumulating `theta`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct State {
    pub theta: f64,
    pub omega: f64,
}

impl State {
    #[must_use]
    pub fn new(theta: f64, omega: f64) -> Self {
        Self { theta, omega }
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.theta.is_finite() && self.omega.is_finite()
    }
}
