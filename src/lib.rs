pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use error::{ConfigError, SimError};

pub use simulation::states::{Body, System, NVec2, BODY_COUNT};
pub use simulation::params::Parameters;
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::symplectic_euler_step;
pub use simulation::trajectory::Trajectory;
pub use simulation::engine::{Integrator, RunState, RunSummary, SimulationOutput, StopReason, out_of_bounds};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig, RenderConfig};

pub use visualization::{playback::PlaybackTiming, gif_export::export_gif, viewer2d::run_2d};
