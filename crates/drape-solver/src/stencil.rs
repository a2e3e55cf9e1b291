//! 8-connected neighbor stencil.
//!
//! Every particle is joined to the particles at the four axis offsets
//! (structural springs, rest length 1) and the four diagonal offsets
//! (shear springs, rest length √2). Offsets that leave `[0, N)` are simply
//! skipped: there is no wrap-around and no phantom particle.

use drape_types::constants::{SHEAR_REST_LENGTH, STRUCTURAL_REST_LENGTH};
use drape_types::GridIndex;

/// Kind of spring joining a particle to one of its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpringKind {
    /// Axis-aligned neighbor.
    Structural,
    /// Diagonal neighbor.
    Shear,
}

impl SpringKind {
    /// Rest length of this spring kind.
    #[inline]
    pub const fn rest_length(self) -> f64 {
        match self {
            SpringKind::Structural => STRUCTURAL_REST_LENGTH,
            SpringKind::Shear => SHEAR_REST_LENGTH,
        }
    }
}

/// One entry of the neighbor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborOffset {
    /// Row offset.
    pub di: isize,
    /// Column offset.
    pub dj: isize,
    /// Spring joining the particle to this neighbor.
    pub kind: SpringKind,
}

impl NeighborOffset {
    const fn new(di: isize, dj: isize, kind: SpringKind) -> Self {
        Self { di, dj, kind }
    }

    /// Applies this offset to `idx`, returning `None` if the result falls
    /// outside a grid of side `size`.
    #[inline]
    pub fn apply(self, idx: GridIndex, size: usize) -> Option<GridIndex> {
        let i = idx.i as isize + self.di;
        let j = idx.j as isize + self.dj;
        in_bounds(size, i, j).then(|| GridIndex::new(i as usize, j as usize))
    }
}

/// The eight neighbor offsets, axis neighbors first.
pub const NEIGHBOR_OFFSETS: [NeighborOffset; 8] = [
    NeighborOffset::new(-1, 0, SpringKind::Structural),
    NeighborOffset::new(1, 0, SpringKind::Structural),
    NeighborOffset::new(0, -1, SpringKind::Structural),
    NeighborOffset::new(0, 1, SpringKind::Structural),
    NeighborOffset::new(-1, -1, SpringKind::Shear),
    NeighborOffset::new(-1, 1, SpringKind::Shear),
    NeighborOffset::new(1, -1, SpringKind::Shear),
    NeighborOffset::new(1, 1, SpringKind::Shear),
];

/// Whether signed coordinates `(i, j)` lie inside a grid of side `size`.
#[inline]
pub fn in_bounds(size: usize, i: isize, j: isize) -> bool {
    let n = size as isize;
    (0..n).contains(&i) && (0..n).contains(&j)
}

/// Existing neighbors of `idx` in row-major order over the 3×3 block,
/// `(-1,-1)` first and `(1,1)` last.
///
/// Friction sums velocities in this order; the spring table order above
/// is different, and floating-point sums depend on the order.
pub fn neighborhood(idx: GridIndex, size: usize) -> impl Iterator<Item = GridIndex> {
    (-1isize..=1)
        .flat_map(|di| (-1isize..=1).map(move |dj| (di, dj)))
        .filter(|&(di, dj)| di != 0 || dj != 0)
        .filter_map(move |(di, dj)| {
            let i = idx.i as isize + di;
            let j = idx.j as isize + dj;
            in_bounds(size, i, j).then(|| GridIndex::new(i as usize, j as usize))
        })
}

/// Existing neighbors of `idx` with the spring kind joining them.
pub fn neighbors(idx: GridIndex, size: usize) -> impl Iterator<Item = (GridIndex, SpringKind)> {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(move |off| off.apply(idx, size).map(|n| (n, off.kind)))
}
