//! Fixed-step time integrator for the three-body system
//!
//! Semi-implicit (symplectic) Euler: kick every velocity with forces taken
//! from the pre-step positions, then drift every position with the new
//! velocity

use super::states::{System, NVec2, BODY_COUNT};
use super::forces::NewtonianGravity;

/// Advance the system by one step of size `dt`, in place
/// Returns the post-step positions in body order
pub fn symplectic_euler_step(sys: &mut System, gravity: &NewtonianGravity, dt: f64) -> [NVec2; BODY_COUNT] {
    // All forces come from x_n, before anything moves
    let forces = gravity.net_forces(sys);

    // Kick: v_n+1 = v_n + (F_n / m) * dt
    for (b, f) in sys.bodies.iter_mut().zip(forces.iter()) {
        b.v += (*f / b.m) * dt;
    }

    // Drift with the updated velocity: x_n+1 = x_n + v_n+1 * dt
    for b in sys.bodies.iter_mut() {
        b.x += b.v * dt;
    }

    sys.positions()
}
