//! Neighbor-velocity friction.
//!
//! The friction force on a particle is the sum of its neighbors' velocities
//! (itself excluded, row-major block order) times the friction coefficient. The integrator
//! subtracts it, which pulls each particle toward the local velocity field.

use glam::DVec3;
use rayon::prelude::*;

use drape_types::GridIndex;

use crate::grid::ParticleGrid;
use crate::strategy::ForceModel;

/// Friction from the 8-connected neighborhood.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionModel {
    coefficient: f64,
}

impl FrictionModel {
    /// Creates the model with friction coefficient `coefficient`.
    pub fn new(coefficient: f64) -> Self {
        Self { coefficient }
    }

    /// Friction coefficient.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Friction force on particle `idx`.
    pub fn force_at(&self, grid: &ParticleGrid, idx: GridIndex) -> DVec3 {
        let sum = grid
            .neighborhood(idx)
            .fold(DVec3::ZERO, |acc, n| acc + grid.velocity(n));
        sum * self.coefficient
    }
}

impl ForceModel for FrictionModel {
    fn compute(&self, grid: &ParticleGrid, out: &mut [DVec3]) {
        let size = grid.size();
        out.par_iter_mut().enumerate().for_each(|(k, f)| {
            *f = self.force_at(grid, GridIndex::from_flat(k, size));
        });
    }

    fn name(&self) -> &str {
        "friction"
    }
}
