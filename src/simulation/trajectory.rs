//! Append-only record of per-step body positions.
//!
//! The three histories only grow through [`Trajectory::record`], one sample
//! per body per step, so they always have the same length.

use crate::simulation::states::{NVec2, BODY_COUNT};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    paths: [Vec<NVec2>; BODY_COUNT],
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty trajectory with room for `steps` samples per body
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            paths: std::array::from_fn(|_| Vec::with_capacity(steps)),
        }
    }

    /// Append one completed step
    pub fn record(&mut self, positions: [NVec2; BODY_COUNT]) {
        for (path, x) in self.paths.iter_mut().zip(positions) {
            path.push(x);
        }
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.paths[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position history of body `index`
    ///
    /// # Panics
    /// If `index >= 3`.
    pub fn body(&self, index: usize) -> &[NVec2] {
        &self.paths[index]
    }

    /// All three positions after step `step` (0-based)
    pub fn sample(&self, step: usize) -> Option<[NVec2; BODY_COUNT]> {
        if step >= self.len() {
            return None;
        }
        Some(std::array::from_fn(|i| self.paths[i][step]))
    }

    pub fn bodies(&self) -> &[Vec<NVec2>; BODY_COUNT] {
        &self.paths
    }

    pub fn last(&self) -> Option<[NVec2; BODY_COUNT]> {
        self.len().checked_sub(1).and_then(|step| self.sample(step))
    }
}
