//! Core state types for the three-body simulation.
//!
//! Defines the planar body and the fixed-size system:
//! - `Body`   position, velocity and mass using `NVec2`
//! - `System` exactly three bodies, identified by index 0, 1, 2
//!
//! The diagnostics at the bottom only read the state; they never feed back
//! into the integrator.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Number of bodies in every system.
pub const BODY_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, fixed for the run
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, m: f64) -> Self {
        Self { x, v, m }
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: [Body; BODY_COUNT], // identity is the array index
}

impl System {
    pub fn new(bodies: [Body; BODY_COUNT]) -> Self {
        Self { bodies }
    }

    /// Current positions in body order
    pub fn positions(&self) -> [NVec2; BODY_COUNT] {
        self.bodies.map(|b| b.x)
    }

    /// Sum of m * v over all bodies
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().fold(NVec2::zeros(), |acc, b| acc + b.momentum())
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    /// Mass-weighted mean position
    pub fn center_of_mass(&self) -> NVec2 {
        let weighted = self.bodies.iter().fold(NVec2::zeros(), |acc, b| acc + b.m * b.x);
        weighted / self.total_mass()
    }

    /// Unweighted mean position
    pub fn centroid(&self) -> NVec2 {
        let sum = self.bodies.iter().fold(NVec2::zeros(), |acc, b| acc + b.x);
        sum / BODY_COUNT as f64
    }

    /// Kinetic plus pairwise potential energy.
    /// Coincident pairs contribute no potential, matching the zero-force policy.
    pub fn total_energy(&self, g: f64) -> f64 {
        let kinetic: f64 = self.bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum();

        let mut potential = 0.0;
        for i in 0..BODY_COUNT {
            for j in (i + 1)..BODY_COUNT {
                let d = (self.bodies[j].x - self.bodies[i].x).norm();
                if d > 0.0 {
                    potential -= g * self.bodies[i].m * self.bodies[j].m / d;
                }
            }
        }

        kinetic + potential
    }

    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(Body::is_finite)
    }
}
