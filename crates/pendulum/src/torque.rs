//! External driving torque.
//!
//! A plain `f64` is a constant torque. Use [`from_fn`] for a torque that varies
//! with time.

use std::fmt;

/// A driving torque evaluated at the start of each step.
pub trait DrivingTorque {
    /// Torque applied at `time`.
    fn torque_at(&self, time: f64) -> f64;
}

impl DrivingTorque for f64 {
    fn torque_at(&self, _time: f64) -> f64 {
        *self
    }
}

impl<T: DrivingTorque + ?Sized> DrivingTorque for &T {
    fn torque_at(&self, time: f64) -> f64 {
        (**self).torque_at(time)
    }
}

/// A torque schedule backed by a closure. Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps `f(time) -> torque` as a [`DrivingTorque`].
pub fn from_fn<F: Fn(f64) -> f64>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F: Fn(f64) -> f64> DrivingTorque for FromFn<F> {
    fn torque_at(&self, time: f64) -> f64 {
        (self.0)(time)
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
