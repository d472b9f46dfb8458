//! Gravitational forces between the three bodies
//!
//! Plain inverse-square attraction without softening. Coincident bodies
//! exert no force on each other.

use crate::simulation::states::{System, NVec2, BODY_COUNT};

/// 2D Newtonian gravity
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl NewtonianGravity {
    #[allow(non_snake_case)]
    pub fn new(G: f64) -> Self {
        Self { G }
    }

    /// Force exerted by body b on body a, pointing from a toward b
    /// Returns the zero vector when the two positions coincide
    pub fn pairwise_force(&self, xa: NVec2, xb: NVec2, ma: f64, mb: f64) -> NVec2 {
        // r points from a to b, so a is pulled along +r
        let r = xb - xa;
        let d = r.norm();
        if d == 0.0 {
            return NVec2::zeros();
        }

        // |F| = G * ma * mb / d^2, direction r / d
        let magnitude = self.G * ma * mb / (d * d);
        magnitude * (r / d)
    }

    /// Net force on every body from positions at the current instant
    /// - `out[i]` is the sum over j != i of the force j exerts on i
    pub fn net_forces(&self, sys: &System) -> [NVec2; BODY_COUNT] {
        let mut out = [NVec2::zeros(); BODY_COUNT];

        for (i, f) in out.iter_mut().enumerate() {
            let bi = &sys.bodies[i];
            for (j, bj) in sys.bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                *f += self.pairwise_force(bi.x, bj.x, bi.m, bj.m);
            }
        }

        out
    }
}
