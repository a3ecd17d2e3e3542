/// How an Euler run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every requested step was taken.
    Complete,

    /// An observer returned [`Action::StopEarly`](super::Action::StopEarly).
    StoppedByObserver,
}

/// The recorded history of an Euler run.
#[derive(Debug, Clone)]
pub struct Solution<I> {
    pub status: Status,

    /// Model inputs for steps `0..=steps`, starting with the initial input.
    pub history: Vec<I>,

    /// Number of integration steps taken.
    pub steps: usize,
}

impl<I> Solution<I> {
    /// Returns `true` if every requested step was taken.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }

    /// The input reached after the last step taken.
    #[must_use]
    pub fn last(&self) -> Option<&I> {
        self.history.last()
    }
}
