//! Static sphere collision and the contact latch.
//!
//! A particle is clear of the sphere when its distance to the center
//! exceeds `R + 1`. Particles that are not clear keep their position for
//! the step, and the first such particle latches the contact flag for the
//! rest of the run.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use drape_types::constants::COLLISION_MARGIN;

/// The static obstacle the cloth falls onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionSphere {
    /// Center of the sphere.
    pub center: DVec3,
    /// Radius of the sphere (render radius; the test adds the margin).
    pub radius: f64,
}

impl CollisionSphere {
    /// Creates a new sphere.
    pub fn new(center: DVec3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Whether `position` is strictly outside `radius + COLLISION_MARGIN`.
    #[inline]
    pub fn is_clear(&self, position: DVec3) -> bool {
        position.distance(self.center) > self.radius + COLLISION_MARGIN
    }
}

/// One-way latch recording that the cloth has touched the sphere.
///
/// There is deliberately no way to clear it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactLatch {
    set: bool,
}

impl ContactLatch {
    /// A latch that has not fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// A latch that has already fired (used when resuming a run).
    pub fn engaged() -> Self {
        Self { set: true }
    }

    /// Fires the latch. Returns `true` only on the call that set it.
    #[inline]
    pub fn latch(&mut self) -> bool {
        let newly = !self.set;
        self.set = true;
        newly
    }

    /// Whether contact has ever happened.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.set
    }
}

/// Sphere test plus contact latch, consulted once per particle per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionHandler {
    sphere: CollisionSphere,
    latch: ContactLatch,
}

impl CollisionHandler {
    /// Creates a handler for `sphere` with the latch unset.
    pub fn new(sphere: CollisionSphere) -> Self {
        Self {
            sphere,
            latch: ContactLatch::new(),
        }
    }

    /// Creates a handler with an existing latch state.
    pub fn with_latch(sphere: CollisionSphere, latch: ContactLatch) -> Self {
        Self { sphere, latch }
    }

    /// Tests one particle. Returns `true` if it may move this step;
    /// otherwise latches contact and returns `false`.
    #[inline]
    pub fn admit(&mut self, position: DVec3) -> bool {
        if self.sphere.is_clear(position) {
            true
        } else {
            if self.latch.latch() {
                tracing::debug!(?position, "first contact with collision sphere");
            }
            false
        }
    }

    /// The obstacle.
    pub fn sphere(&self) -> CollisionSphere {
        self.sphere
    }

    /// Whether contact has ever happened.
    pub fn contact(&self) -> bool {
        self.latch.is_set()
    }
}
