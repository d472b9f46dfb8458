//! Error types for tbsim.
//!
//! The physics itself has no runtime errors. Everything here is either a
//! rejected configuration or misuse of the run state machine.

use thiserror::Error;

/// Invalid scenario configuration, reported before any step runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The system always holds exactly three bodies
    #[error("expected exactly 3 bodies, found {0}")]
    BodyCount(usize),

    #[error("body {index}: mass must be positive and finite, got {mass}")]
    NonPositiveMass { index: usize, mass: f64 },

    #[error("body {index}: {field} must be finite, got [{}, {}]", .value[0], .value[1])]
    NonFiniteState { index: usize, field: &'static str, value: [f64; 2] },

    /// G, dt and bound share this variant
    #[error("parameter '{name}' must be positive and finite, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },

    #[error("parameter 'steps' must be at least 1")]
    ZeroSteps,

    #[error("failed to parse scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
}

/// Driver used out of order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    #[error("integrator has already been started")]
    AlreadyStarted,

    #[error("integrator has not finished running")]
    NotFinished,
}
