//! Triangle topology over the particle grid.
//!
//! Each grid cell `(i, j)` with `i, j < N - 1` becomes two triangles:
//!
//! ```text
//! (i,j) ── (i,j+1)        [(i,j), (i,j+1), (i+1,j)]
//!   │    ╱    │           [(i,j+1), (i+1,j+1), (i+1,j)]
//! (i+1,j) ─ (i+1,j+1)
//! ```
//!
//! Indices are row-major flat offsets, matching `Frame::positions`.

use drape_types::GridIndex;

/// Triangle index buffer for an N×N cloth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClothTopology {
    grid_size: usize,
    indices: Vec<u32>,
}

impl ClothTopology {
    /// Builds the index buffer for an N×N grid. Grids smaller than 2×2
    /// have no cells and produce an empty buffer.
    pub fn new(grid_size: usize) -> Self {
        let cells = grid_size.saturating_sub(1);
        let mut indices = Vec::with_capacity(cells * cells * 6);
        let flat = |i: usize, j: usize| GridIndex::new(i, j).flat(grid_size) as u32;

        for i in 0..cells {
            for j in 0..cells {
                indices.extend_from_slice(&[flat(i, j), flat(i, j + 1), flat(i + 1, j)]);
                indices.extend_from_slice(&[flat(i, j + 1), flat(i + 1, j + 1), flat(i + 1, j)]);
            }
        }

        Self { grid_size, indices }
    }

    /// Grid dimension N.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Flat triangle index buffer, three entries per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices (N²).
    pub fn vertex_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Number of triangles (2·(N−1)²).
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}
