//! TOML configuration for a simulation run.
//!
//! Every key is optional and defaults to the reference run:
//!
//! ```toml
//! mass = 0.1
//! length = 0.5
//! gravity = 9.8
//! damping = 0.1
//! torque = 0.1
//! dt = 0.05
//! theta_0 = 0.0
//! omega_0 = 0.0
//! steps = 200
//! snapshots = [0, 5, 10, 15]
//! frame_interval_ms = 100
//! ```
//!
//! The short names `m`, `l`, `g`, `c`, `Tt` and `n_end` are accepted as aliases.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use tracing::warn;

use crate::{Error, Parameters, Simulator, State, Trajectory};

/// Raw run settings as read from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[serde(alias = "m")]
    pub mass: f64,
    #[serde(alias = "l")]
    pub length: f64,
    #[serde(alias = "g")]
    pub gravity: f64,
    #[serde(alias = "c")]
    pub damping: f64,
    #[serde(alias = "Tt")]
    pub torque: f64,
    pub dt: f64,
    pub theta_0: f64,
    pub omega_0: f64,
    #[serde(alias = "n_end")]
    pub steps: i64,
    /// Sample indices shown by the snapshot scatter.
    pub snapshots: Vec<usize>,
    /// Delay between animation frames.
    pub frame_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mass: 0.1,
            length: 0.5,
            gravity: 9.8,
            damping: 0.1,
            torque: 0.1,
            dt: 0.05,
            theta_0: 0.0,
            omega_0: 0.0,
            steps: 200,
            snapshots: vec![0, 5, 10, 15],
            frame_interval_ms: 100,
        }
    }
}

/// Errors raised while loading or validating a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] Error),
}

impl Config {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid config.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Validates the physical parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for the first invalid constant.
    pub fn parameters(&self) -> Result<Parameters, Error> {
        Parameters::new(self.mass, self.length, self.gravity, self.damping)
    }

    #[must_use]
    pub fn initial_state(&self) -> State {
        State::new(self.theta_0, self.omega_0)
    }

    /// Validates every setting and prepares a [`Run`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] wrapping the first failed check.
    pub fn build(&self) -> Result<Run, ConfigError> {
        let Ok(steps) = usize::try_from(self.steps) else {
            warn!(steps = self.steps, "rejected step count");
            return Err(Error::InvalidStepCount(self.steps).into());
        };
        let simulator = Simulator::new(self.parameters()?, self.dt, self.torque)?;

        Ok(Run {
            simulator,
            initial: self.initial_state(),
            steps,
            snapshots: self.snapshots.clone(),
            frame_interval: Duration::from_millis(self.frame_interval_ms),
        })
    }
}

/// A validated, ready-to-execute run.
#[derive(Debug, Clone)]
pub struct Run {
    pub simulator: Simulator,
    pub initial: State,
    pub steps: usize,
    pub snapshots: Vec<usize>,
    pub frame_interval: Duration,
}

impl Run {
    /// Simulates the run.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the initial state is not finite.
    pub fn execute(&self) -> Result<Trajectory, Error> {
        self.simulator.run(self.initial, self.steps)
    }

    /// Arm length, needed to place the bob.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.simulator.parameters().length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        io,
        sync::{Arc, Mutex},
    };

    /// Collects formatted log lines in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn empty_config_is_reference_run() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());

        let run = config.build().unwrap();
        assert_eq!(run.steps, 200);
        assert_eq!(run.simulator.dt(), 0.05);
        assert_eq!(*run.simulator.torque(), 0.1);
        assert_eq!(run.frame_interval, Duration::from_millis(100));
        assert_eq!(run.length(), 0.5);
    }

    #[test]
    fn accepts_short_names() {
        let config = Config::from_toml_str(
            r"
            m = 1.0
            l = 2.0
            Tt = 0.0
            n_end = 20
            theta_0 = 0.5
            ",
        )
        .unwrap();

        assert_eq!(config.mass, 1.0);
        assert_eq!(config.length, 2.0);
        assert_eq!(config.torque, 0.0);
        assert_eq!(config.steps, 20);
        assert_eq!(config.initial_state(), State::new(0.5, 0.0));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Config::from_toml_str("mass = 1.0\nspring = 3.0").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_negative_step_count() {
        let err = Config::from_toml_str("steps = -1").unwrap().build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(Error::InvalidStepCount(-1))
        ));
    }

    #[test]
    fn negative_step_count_is_logged() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let config = Config {
            steps: -5,
            ..Config::default()
        };
        let result = tracing::subscriber::with_default(subscriber, || config.build());

        assert!(result.is_err());
        let logs = captured.text();
        assert!(logs.contains("WARN"));
        assert!(logs.contains("rejected step count"));
        assert!(logs.contains("steps=-5"));
    }

    #[test]
    fn rejects_zero_length_before_running() {
        let err = Config::from_toml_str("length = 0.0").unwrap().build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(Error::InvalidParameter { name: "length", .. })
        ));
        assert_eq!(
            err.to_string(),
            "invalid config: length must be finite and positive, got 0"
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::from_path("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
