//! Particle grid: per-particle state of the cloth.
//!
//! Buffers are row-major over `(i, j)`: particle `(i, j)` lives at
//! `i * N + j`. The particle count is fixed for the life of the grid.

use glam::DVec3;

use drape_types::{DrapeError, DrapeResult, GridIndex};

use crate::stencil::{self, SpringKind};

/// N×N grid of point masses.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleGrid {
    size: usize,
    positions: Vec<DVec3>,
    velocities: Vec<DVec3>,
    /// Last computed acceleration. Overwritten every step.
    accelerations: Vec<DVec3>,
}

impl ParticleGrid {
    /// Creates a grid with every particle at the origin and at rest.
    ///
    /// # Errors
    ///
    /// Returns [`DrapeError::InvalidGrid`] if `size` is zero.
    pub fn new(size: usize) -> DrapeResult<Self> {
        if size == 0 {
            return Err(DrapeError::InvalidGrid(
                "grid size must be greater than zero".into(),
            ));
        }
        let n = size * size;
        Ok(Self {
            size,
            positions: vec![DVec3::ZERO; n],
            velocities: vec![DVec3::ZERO; n],
            accelerations: vec![DVec3::ZERO; n],
        })
    }

    /// Creates the rest pose: particle `(i, j)` at `(i, j, height)`, at rest.
    ///
    /// # Errors
    ///
    /// Returns [`DrapeError::InvalidGrid`] if `size` is zero.
    pub fn flat_sheet(size: usize, height: f64) -> DrapeResult<Self> {
        let mut grid = Self::new(size)?;
        for (k, p) in grid.positions.iter_mut().enumerate() {
            let idx = GridIndex::from_flat(k, size);
            *p = DVec3::new(idx.i as f64, idx.j as f64, height);
        }
        Ok(grid)
    }

    /// Builds a grid from explicit positions and velocities.
    ///
    /// # Errors
    ///
    /// Returns [`DrapeError::InvalidGrid`] if `size` is zero or a buffer
    /// does not hold exactly `size * size` entries.
    pub fn from_parts(size: usize, positions: Vec<DVec3>, velocities: Vec<DVec3>) -> DrapeResult<Self> {
        let mut grid = Self::new(size)?;
        let n = grid.len();
        if positions.len() != n || velocities.len() != n {
            return Err(DrapeError::InvalidGrid(format!(
                "expected {n} positions and velocities, got {} and {}",
                positions.len(),
                velocities.len()
            )));
        }
        grid.positions = positions;
        grid.velocities = velocities;
        Ok(grid)
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of particles (N²).
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false: a grid holds at least one particle.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether `idx` addresses a particle of this grid.
    #[inline]
    pub fn contains(&self, idx: GridIndex) -> bool {
        idx.i < self.size && idx.j < self.size
    }

    /// Flat buffer offset of `idx`, or `None` if out of bounds.
    #[inline]
    pub fn offset(&self, idx: GridIndex) -> Option<usize> {
        self.contains(idx).then(|| idx.flat(self.size))
    }

    /// Row-major iterator over every grid index.
    pub fn indices(&self) -> impl Iterator<Item = GridIndex> {
        let size = self.size;
        (0..size * size).map(move |k| GridIndex::from_flat(k, size))
    }

    /// Existing 8-connected neighbors of `idx`.
    pub fn neighbors(&self, idx: GridIndex) -> impl Iterator<Item = (GridIndex, SpringKind)> {
        stencil::neighbors(idx, self.size)
    }

    /// Existing neighbors of `idx` in row-major block order.
    pub fn neighborhood(&self, idx: GridIndex) -> impl Iterator<Item = GridIndex> {
        stencil::neighborhood(idx, self.size)
    }

    /// Position of particle `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is outside the grid.
    #[inline]
    pub fn position(&self, idx: GridIndex) -> DVec3 {
        self.positions[self.checked(idx)]
    }

    /// Velocity of particle `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is outside the grid.
    #[inline]
    pub fn velocity(&self, idx: GridIndex) -> DVec3 {
        self.velocities[self.checked(idx)]
    }

    /// Acceleration computed for particle `idx` in the last step.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is outside the grid.
    #[inline]
    pub fn acceleration(&self, idx: GridIndex) -> DVec3 {
        self.accelerations[self.checked(idx)]
    }

    /// All positions, row-major.
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// All velocities, row-major.
    pub fn velocities(&self) -> &[DVec3] {
        &self.velocities
    }

    /// All accelerations, row-major.
    pub fn accelerations(&self) -> &[DVec3] {
        &self.accelerations
    }

    /// Mutable views of the position, velocity and acceleration buffers,
    /// for the integrator.
    pub(crate) fn buffers_mut(&mut self) -> (&mut [DVec3], &mut [DVec3], &mut [DVec3]) {
        (
            &mut self.positions,
            &mut self.velocities,
            &mut self.accelerations,
        )
    }

    pub(crate) fn checked(&self, idx: GridIndex) -> usize {
        assert!(
            self.contains(idx),
            "grid index ({}, {}) outside {}x{} grid",
            idx.i,
            idx.j,
            self.size,
            self.size
        );
        idx.flat(self.size)
    }
}
