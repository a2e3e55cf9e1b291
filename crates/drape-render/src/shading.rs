//! Force-magnitude color map.
//!
//! Low stress renders blue-green on the front face, high stress shifts
//! toward red. The back face uses a rotated palette so the underside is
//! distinguishable.

use drape_types::constants::FORCE_COLOR_SCALE;
use serde::{Deserialize, Serialize};

/// RGBA diffuse colors for both faces of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceColor {
    pub front: [f32; 4],
    pub back: [f32; 4],
}

/// Colors for a vertex under an elastic force of `magnitude`.
///
/// The magnitude is normalized by [`FORCE_COLOR_SCALE`] and not clamped,
/// so forces above the scale push channels outside `[0, 1]`. Consumers
/// that need a valid color should call [`ForceColor::clamped`].
pub fn force_color(magnitude: f32) -> ForceColor {
    let f = magnitude / FORCE_COLOR_SCALE;
    ForceColor {
        front: [0.5 * f, 0.5 * (1.0 - f), 1.0, 1.0],
        back: [1.0, 0.5 * f, 0.5 * (1.0 - f), 1.0],
    }
}

impl ForceColor {
    /// Same colors with every channel clamped to `[0, 1]`.
    pub fn clamped(self) -> Self {
        let clamp = |c: [f32; 4]| c.map(|v| v.clamp(0.0, 1.0));
        Self {
            front: clamp(self.front),
            back: clamp(self.back),
        }
    }
}
