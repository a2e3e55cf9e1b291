//! Elastic (Hooke) spring network.
//!
//! Each particle is pulled toward or pushed away from each existing
//! neighbor by `d * (|d| - L) * K`, where `d` points from the particle to
//! the neighbor and `L` is the rest length of the spring between them.
//! The spring is linear, unclamped and undamped; friction does the damping.

use glam::DVec3;
use rayon::prelude::*;

use drape_types::GridIndex;

use crate::grid::ParticleGrid;
use crate::strategy::ForceModel;

/// Contribution of one spring, before scaling by stiffness.
///
/// Coincident endpoints give exactly zero: `d` itself is zero and nothing
/// is divided by its length.
#[inline]
pub fn spring_term(from: DVec3, to: DVec3, rest_length: f64) -> DVec3 {
    let d = to - from;
    d * (d.length() - rest_length)
}

/// Hooke spring network over the 8-connected grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElasticForceModel {
    stiffness: f64,
}

impl ElasticForceModel {
    /// Creates the model with spring stiffness `K`.
    pub fn new(stiffness: f64) -> Self {
        Self { stiffness }
    }

    /// Spring stiffness K.
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    /// Net spring force on particle `idx`.
    pub fn force_at(&self, grid: &ParticleGrid, idx: GridIndex) -> DVec3 {
        let p = grid.position(idx);
        let sum = grid
            .neighbors(idx)
            .fold(DVec3::ZERO, |acc, (n, kind)| {
                acc + spring_term(p, grid.position(n), kind.rest_length())
            });
        sum * self.stiffness
    }
}

impl ForceModel for ElasticForceModel {
    fn compute(&self, grid: &ParticleGrid, out: &mut [DVec3]) {
        let size = grid.size();
        out.par_iter_mut().enumerate().for_each(|(k, f)| {
            *f = self.force_at(grid, GridIndex::from_flat(k, size));
        });
    }

    fn name(&self) -> &str {
        "elastic"
    }
}
