//! Force model trait: the seam between grid state and force buffers.
//!
//! A step runs every force model against the same start-of-step grid,
//! then hands the filled buffers to the integrator:
//!
//! ```text
//! elastic.compute(&grid, &mut elastic_buf);   // these two may run
//! friction.compute(&grid, &mut friction_buf); // concurrently
//! integrator.integrate(&mut grid, &elastic_buf, &friction_buf, ..);
//! ```

use glam::DVec3;

use crate::grid::ParticleGrid;

/// A per-particle force computed purely from the current grid state.
///
/// # Implementations
///
/// - [`ElasticForceModel`](crate::elastic::ElasticForceModel): Hooke springs to the 8 neighbors
/// - [`FrictionModel`](crate::friction::FrictionModel): scaled sum of neighbor velocities
pub trait ForceModel: Send + Sync {
    /// Overwrites `out[k]` with the force on particle `k`.
    ///
    /// Implementations read only `grid` and write only their own slot, so
    /// the result does not depend on evaluation order. `out` must hold
    /// `grid.len()` entries.
    fn compute(&self, grid: &ParticleGrid, out: &mut [DVec3]);

    /// Returns the model's name.
    fn name(&self) -> &str;
}
