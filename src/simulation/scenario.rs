//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it, and produces the
//! runtime bundle consumed by the integrator:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the three bodies at t = 0)
//! - the gravity law (`NewtonianGravity`)

use log::debug;

use crate::configuration::config::{ScenarioConfig, BodyConfig};
use crate::error::ConfigError;
use crate::simulation::params::Parameters;
use crate::simulation::states::{System, Body, NVec2};
use crate::simulation::forces::NewtonianGravity;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub gravity: NewtonianGravity,
}

impl Scenario {
    /// Fails fast on any invalid configuration; nothing is clamped
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body {
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: NVec2::new(bc.v[0], bc.v[1]),
            m: bc.m,
        }).collect();
        let bodies: [Body; 3] = bodies
            .try_into()
            .map_err(|b: Vec<Body>| ConfigError::BodyCount(b.len()))?;

        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            dt: p_cfg.dt,
            max_steps: p_cfg.steps,
            bound: p_cfg.bound,
        };

        debug!("built scenario: {:?}", parameters);

        Ok(Self {
            parameters,
            system: System::new(bodies),
            gravity: NewtonianGravity::new(parameters.G),
        })
    }
}
