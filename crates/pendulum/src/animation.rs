//! Flip-book replay of a precomputed [`Trajectory`](crate::Trajectory).

use std::time::Duration;

use crate::Position;

/// One animation frame: the bob positions for samples `0..=index`.
///
/// Frames borrow the trajectory; nothing is re-simulated to draw them.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub(crate) index: usize,
    pub(crate) thetas: &'a [f64],
    pub(crate) length: f64,
}

impl Frame<'_> {
    /// The newest sample shown in this frame.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Positions of every sample shown, oldest first.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.thetas
            .iter()
            .map(|&theta| Position::from_angle(theta, self.length))
    }

    /// Position of the newest sample.
    #[must_use]
    pub fn head(&self) -> Position {
        Position::from_angle(self.thetas[self.index], self.length)
    }
}

/// A looping cursor over animation frames.
///
/// Time is fed in with [`advance`](Playback::advance); the cursor moves one
/// frame per elapsed interval and wraps back to the first frame after the last.
/// Time that does not fill a whole interval carries over to the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    frame_count: usize,
    interval: Duration,
    current: usize,
    carry: Duration,
}

impl Playback {
    /// Frame interval used by the reference animation.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

    /// Creates a cursor at frame 0. There is always at least one frame.
    #[must_use]
    pub fn new(frame_count: usize, interval: Duration) -> Self {
        Self {
            frame_count: frame_count.max(1),
            interval,
            current: 0,
            carry: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The frame to draw now.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Time left before the next frame change.
    #[must_use]
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.carry)
    }

    /// Moves the cursor forward by `elapsed` and returns the new frame.
    ///
    /// A zero interval freezes playback on the current frame.
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        if self.interval.is_zero() {
            return self.current;
        }

        let total = (self.carry + elapsed).as_nanos();
        let interval = self.interval.as_nanos();
        let ticks = total / interval;
        let count = self.frame_count as u128;

        // Both values are below `interval` and `frame_count` respectively.
        self.carry = Duration::from_nanos((total % interval) as u64);
        self.current = ((self.current as u128 + ticks % count) % count) as usize;

        self.current
    }

    /// Returns to frame 0.
    pub fn rewind(&mut self) {
        self.current = 0;
        self.carry = Duration::ZERO;
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_INTERVAL)
    }
}
