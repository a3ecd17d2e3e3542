use tracing::warn;

use crate::Error;

/// Physical constants of one pendulum.
///
/// Fields are private so every instance has passed validation: mass, length
/// and gravity are finite and positive, damping is finite and non-negative.
/// In particular the moment of inertia `m l²` is never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    mass: f64,
    length: f64,
    gravity: f64,
    damping: f64,
}

impl Default for Parameters {
    /// The reference pendulum: 0.1 mass, 0.5 arm, g = 9.8, c = 0.1.
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 0.5, 9.8, 0.1).unwrap()
    }
}

impl Parameters {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first offending value.
    pub fn new(mass: f64, length: f64, gravity: f64, damping: f64) -> Result<Self, Error> {
        Ok(Self {
            mass: positive("mass", mass)?,
            length: positive("length", length)?,
            gravity: positive("gravity", gravity)?,
            damping: non_negative("damping", damping)?,
        })
    }

    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Moment of inertia about the pivot, `m l²`.
    #[must_use]
    pub fn moment_of_inertia(&self) -> f64 {
        self.mass * self.length.powi(2)
    }

    /// Gravitational torque `m g l sin(theta)`.
    ///
    /// `theta` is measured from the upward vertical, so gravity pushes the arm
    /// away from `theta = 0`.
    #[must_use]
    pub fn gravity_torque(&self, theta: f64) -> f64 {
        self.mass * self.gravity * self.length * theta.sin()
    }

    /// Viscous damping torque `c omega`, opposing the motion.
    #[must_use]
    pub fn damping_torque(&self, omega: f64) -> f64 {
        self.damping * omega
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, Error> {
    check(name, value, value.is_finite() && value > 0.0, "finite and positive")
}

fn non_negative(name: &'static str, value: f64) -> Result<f64, Error> {
    check(name, value, value.is_finite() && value >= 0.0, "finite and non-negative")
}

fn check(name: &'static str, value: f64, ok: bool, requirement: &'static str) -> Result<f64, Error> {
    if ok {
        Ok(value)
    } else {
        warn!(name, value, "rejected pendulum parameter");
        Err(Error::InvalidParameter {
            name,
            requirement,
            value,
        })
    }
}
