//! Render-facing frame snapshot.
//!
//! A [`Frame`] is everything a renderer needs to draw the cloth: positions,
//! the elastic-force magnitude of each particle (for color mapping) and the
//! sphere. It is a copy, so the renderer never touches physics state.
//! Per-particle data is narrowed to `f32` for drawing.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use drape_types::GridIndex;

use crate::collision::CollisionSphere;

/// One drawable frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Grid side length N.
    pub grid_size: usize,
    /// Number of steps executed before this frame.
    pub timestep: u32,
    /// Particle positions, row-major over `(i, j)`.
    pub positions: Vec<Vec3>,
    /// Elastic-force magnitude per particle, row-major over `(i, j)`.
    pub force_magnitudes: Vec<f32>,
    /// Collision sphere for drawing.
    pub sphere: CollisionSphere,
}

impl Frame {
    /// Position of particle `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is outside the grid.
    pub fn position(&self, idx: GridIndex) -> Vec3 {
        self.positions[self.checked(idx)]
    }

    /// Elastic-force magnitude of particle `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is outside the grid.
    pub fn force_magnitude(&self, idx: GridIndex) -> f32 {
        self.force_magnitudes[self.checked(idx)]
    }

    /// Largest elastic-force magnitude in the frame.
    pub fn max_force_magnitude(&self) -> f32 {
        self.force_magnitudes.iter().copied().fold(0.0, f32::max)
    }

    /// Number of particles.
    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }

    fn checked(&self, idx: GridIndex) -> usize {
        assert!(
            idx.i < self.grid_size && idx.j < self.grid_size,
            "grid index ({}, {}) outside {}x{} frame",
            idx.i,
            idx.j,
            self.grid_size,
            self.grid_size
        );
        idx.flat(self.grid_size)
    }
}
