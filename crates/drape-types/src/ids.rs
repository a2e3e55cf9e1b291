//! Grid coordinates of a particle.
//!
//! Every per-particle buffer is row-major: particle `(i, j)` of an N×N
//! grid lives at `i * N + j`.

use serde::{Deserialize, Serialize};

/// Grid coordinates `(i, j)` of a particle, `0 <= i, j < N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridIndex {
    /// Row coordinate (maps to X in the rest pose).
    pub i: usize,
    /// Column coordinate (maps to Y in the rest pose).
    pub j: usize,
}

impl GridIndex {
    /// Creates a grid index.
    #[inline]
    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// Row-major flat offset for a grid of side `size`.
    #[inline]
    pub const fn flat(self, size: usize) -> usize {
        self.i * size + self.j
    }

    /// Inverse of [`GridIndex::flat`].
    #[inline]
    pub const fn from_flat(index: usize, size: usize) -> Self {
        Self {
            i: index / size,
            j: index % size,
        }
    }
}

impl From<(usize, usize)> for GridIndex {
    fn from((i, j): (usize, usize)) -> Self {
        Self { i, j }
    }
}
