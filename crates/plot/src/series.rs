//! Plot-ready point series.
//!
//! Every series is a list of `[x, y]` pairs in the order they should be drawn.

use pendulum::{Frame, Position, State, Trajectory};

/// `[theta, omega]` for every sample, in step order.
#[must_use]
pub fn phase(trajectory: &Trajectory) -> Vec<[f64; 2]> {
    trajectory
        .iter()
        .map(|state| [state.theta, state.omega])
        .collect()
}

/// Bob positions `[x, y]` for the given states on an arm of `length`.
#[must_use]
pub fn positions(states: impl IntoIterator<Item = State>, length: f64) -> Vec<[f64; 2]> {
    states
        .into_iter()
        .map(|state| point(Position::from_angle(state.theta, length)))
        .collect()
}

/// Bob positions shown by one animation frame, oldest first.
#[must_use]
pub fn frame(frame: &Frame<'_>) -> Vec<[f64; 2]> {
    frame.positions().map(point).collect()
}

/// The arm from the pivot to `head`.
#[must_use]
pub fn arm(head: Position) -> Vec<[f64; 2]> {
    vec![[0.0, 0.0], point(head)]
}

fn point(position: Position) -> [f64; 2] {
    [position.x, position.y]
}
