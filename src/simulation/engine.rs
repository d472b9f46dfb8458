//! Integration driver
//!
//! Owns the system state and the trajectory for one run and walks the
//! `NotStarted -> Running -> Finished` state machine. Each iteration checks
//! the bounds predicate, performs one step, and records the new positions.

use log::{debug, info, warn};

use crate::error::SimError;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::symplectic_euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::System;
use crate::simulation::trajectory::Trajectory;

/// Why a run ended. None of these is a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    OutOfBounds, // every body left the bounds box on both axes
    StepLimit, // the step budget was exhausted
    Cancelled, // the caller's cancel hook fired
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Running,
    Finished(StopReason),
}

/// What the rendering side needs to pace playback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub steps_run: usize,
    pub max_steps: usize,
    pub dt: f64,
    pub stop_reason: StopReason,
    pub first_non_finite_step: Option<usize>, // 1-based step after which the state was first NaN/inf
}

impl RunSummary {
    pub fn simulated_time(&self) -> f64 {
        self.steps_run as f64 * self.dt
    }
}

/// Finished run handed to the rendering collaborators
#[derive(Debug, Clone)]
pub struct SimulationOutput {
    pub trajectory: Trajectory,
    pub summary: RunSummary,
}

/// Upper bound on samples reserved up front; longer runs grow on demand
const PREALLOCATED_STEPS: usize = 1 << 20;

/// True when every body has |x| > bound and |y| > bound
pub fn out_of_bounds(sys: &System, bound: f64) -> bool {
    sys.bodies
        .iter()
        .all(|b| b.x.x.abs() > bound && b.x.y.abs() > bound)
}

pub struct Integrator {
    parameters: Parameters,
    system: System,
    gravity: NewtonianGravity,
    trajectory: Trajectory,
    steps_run: usize,
    state: RunState,
    first_non_finite_step: Option<usize>,
}

impl Integrator {
    pub fn new(scenario: Scenario) -> Self {
        let Scenario { parameters, system, gravity } = scenario;
        Self {
            parameters,
            system,
            gravity,
            trajectory: Trajectory::with_capacity(parameters.max_steps.min(PREALLOCATED_STEPS)),
            steps_run: 0,
            state: RunState::NotStarted,
            first_non_finite_step: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn steps_run(&self) -> usize {
        self.steps_run
    }

    /// Run to completion
    pub fn run(&mut self) -> Result<RunSummary, SimError> {
        self.run_with(|_, _| false)
    }

    /// Run to completion, polling `cancel(step, &system)` before every step
    /// A `true` from the hook stops the run as `StopReason::Cancelled`
    pub fn run_with<F>(&mut self, mut cancel: F) -> Result<RunSummary, SimError>
    where
        F: FnMut(usize, &System) -> bool,
    {
        if self.state != RunState::NotStarted {
            return Err(SimError::AlreadyStarted);
        }
        self.state = RunState::Running;

        let Parameters { G: g, dt, max_steps, bound } = self.parameters;
        let initial_energy = self.system.total_energy(g);
        info!("running up to {max_steps} steps (dt = {dt}, bound = {bound})");

        let reason = loop {
            if self.steps_run >= max_steps {
                break StopReason::StepLimit;
            }
            if out_of_bounds(&self.system, bound) {
                break StopReason::OutOfBounds;
            }
            if cancel(self.steps_run, &self.system) {
                break StopReason::Cancelled;
            }

            let positions = symplectic_euler_step(&mut self.system, &self.gravity, dt);
            self.trajectory.record(positions);
            self.steps_run += 1;

            if self.first_non_finite_step.is_none() && !self.system.is_finite() {
                warn!("non-finite state first seen after step {}", self.steps_run);
                self.first_non_finite_step = Some(self.steps_run);
            }
        };

        self.state = RunState::Finished(reason);

        let final_energy = self.system.total_energy(g);
        info!("finished after {} steps: {:?}", self.steps_run, reason);
        debug!(
            "energy {initial_energy:.6} -> {final_energy:.6} (drift {:.3e})",
            final_energy - initial_energy
        );

        Ok(self.summary(reason))
    }

    /// Hand the read-only trajectory to the rendering side
    pub fn into_output(self) -> Result<SimulationOutput, SimError> {
        match self.state {
            RunState::Finished(reason) => Ok(SimulationOutput {
                summary: self.summary(reason),
                trajectory: self.trajectory,
            }),
            _ => Err(SimError::NotFinished),
        }
    }

    fn summary(&self, stop_reason: StopReason) -> RunSummary {
        RunSummary {
            steps_run: self.steps_run,
            max_steps: self.parameters.max_steps,
            dt: self.parameters.dt,
            stop_reason,
            first_non_finite_step: self.first_non_finite_step,
        }
    }
}
