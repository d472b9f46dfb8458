//! Numerical and physical parameters for a run
//!
//! `Parameters` holds the immutable run settings:
//! - gravitational constant `G`,
//! - fixed step size `dt`,
//! - hard cap on the number of steps,
//! - half-width of the bounds box used for early termination

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // step size
    pub max_steps: usize, // step budget
    pub bound: f64, // bounds radius R
}
