//! Simulation space to view space.
//!
//! The simulation is Z-up with the sheet spanning `[0, N)` in X and Y.
//! Viewers expect Y-up with the cloth centered on the origin, so a point
//! `(x, y, z)` maps to `(x − N/2, z, y − N/2)`.

use drape_types::constants::SPHERE_HEIGHT_FRACTION;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Maps a simulation-space point into view space.
#[inline]
pub fn to_view_space(p: Vec3, grid_size: usize) -> Vec3 {
    let half = grid_size as f32 / 2.0;
    Vec3::new(p.x - half, p.z, p.y - half)
}

/// A look-at camera in view space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// The classic framing: looking down at the sphere from above and to
    /// the side, for a sheet dropped from `height`.
    pub fn overview(height: f64) -> Self {
        Self {
            eye: Vec3::new(150.0, 250.0, 100.0),
            target: Vec3::new(0.0, (height * SPHERE_HEIGHT_FRACTION) as f32, 0.0),
            up: Vec3::Y,
        }
    }
}
