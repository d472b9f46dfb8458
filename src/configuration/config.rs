//! Configuration types for loading three-body scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constant, step size, step budget, bounds
//! - [`BodyConfig`]       – initial state for each of the three bodies
//! - [`RenderConfig`]     – optional GIF / viewer settings
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 1.0          # gravitational constant
//!   dt: 0.005       # fixed step size
//!   steps: 20000    # hard cap on step count
//!   bound: 2.0      # stop once every body has |x| > bound and |y| > bound
//!
//! bodies:
//!   - m: 1.0
//!     x: [ 0.0, 1.0 ]
//!     v: [ -0.5, 0.0 ]
//!   - m: 1.0
//!     x: [ 0.8660254037844386, -0.5 ]
//!     v: [ 0.25, 0.433 ]
//!   - m: 1.0
//!     x: [ -0.8660254037844386, -0.5 ]
//!     v: [ 0.25, -0.433 ]
//!
//! render:                 # optional, every field has a default
//!   output: three_body_simulation.gif
//!   duration: 10.0
//! ```
//!
//! [`ScenarioConfig::validate`] must pass before a scenario is built; the
//! integrator assumes positive masses and parameters.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64,       // gravitational constant
    pub dt: f64,      // time step size
    pub steps: usize, // maximum number of steps
    pub bound: f64,   // bounds radius for early termination
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub m: f64,      // mass
    pub x: [f64; 2], // initial position
    pub v: [f64; 2], // initial velocity
}

/// Output settings for the rendering collaborators
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RenderConfig {
    pub output: PathBuf,  // GIF file written after the run
    pub duration: f64,    // playback length in seconds
    pub size: u32,        // square frame size in pixels
    pub extent: f64,      // view covers [-extent, extent] on both axes
    pub max_frames: usize, // trajectory is subsampled down to at most this many frames
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("three_body_simulation.gif"),
            duration: 10.0,
            size: 800,
            extent: 2.0,
            max_frames: 300,
        }
    }
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub render: RenderConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Three unit masses on the unit circle with G = 1, dt = 0.005,
    /// 20000 steps and a bounds radius of 2
    pub fn equilateral_triangle() -> Self {
        let h = 3f64.sqrt() / 2.0;
        Self {
            parameters: ParametersConfig {
                G: 1.0,
                dt: 0.005,
                steps: 20_000,
                bound: 2.0,
            },
            bodies: vec![
                BodyConfig { m: 1.0, x: [0.0, 1.0], v: [-0.5, 0.0] },
                BodyConfig { m: 1.0, x: [h, -0.5], v: [0.25, 0.433] },
                BodyConfig { m: 1.0, x: [-h, -0.5], v: [0.25, -0.433] },
            ],
            render: RenderConfig::default(),
        }
    }

    /// Reject anything that would make the run numerically undefined
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies.len() != 3 {
            return Err(ConfigError::BodyCount(self.bodies.len()));
        }

        let p = &self.parameters;
        for (name, value) in [("G", p.G), ("dt", p.dt), ("bound", p.bound)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveParameter { name, value });
            }
        }
        if p.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }

        for (index, b) in self.bodies.iter().enumerate() {
            if !(b.m.is_finite() && b.m > 0.0) {
                return Err(ConfigError::NonPositiveMass { index, mass: b.m });
            }
            for (field, value) in [("position", b.x), ("velocity", b.v)] {
                if !value.iter().all(|c| c.is_finite()) {
                    return Err(ConfigError::NonFiniteState { index, field, value });
                }
            }
        }

        Ok(())
    }
}
