//! Semi-implicit Euler integration with sphere holding.
//!
//! ```text
//! a = (-g*m + F_elastic - F_friction) / (2m)
//! v += a * dt                 // every particle
//! p += v * dt                 // only particles clear of the sphere
//! momentum += v               // only particles that moved
//! ```
//!
//! The divisor is `2m`, not `m`. The halving acts as extra damping and the
//! settling behavior of the reference drape depends on it.

use glam::DVec3;

use crate::collision::CollisionHandler;
use crate::config::SimulationConfig;
use crate::grid::ParticleGrid;

/// Aggregate result of integrating every particle once.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntegrationOutcome {
    /// Sum of the velocities of the particles whose position advanced.
    pub momentum: DVec3,
    /// Number of particles held in place by the sphere this step.
    pub held: u32,
}

/// Per-particle time integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    mass: f64,
    gravity: DVec3,
    dt: f64,
}

impl Integrator {
    /// Creates an integrator for particles of mass `mass`.
    pub fn new(mass: f64, gravity: DVec3, dt: f64) -> Self {
        Self { mass, gravity, dt }
    }

    /// Creates an integrator from a configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.mass, config.gravity_vec(), config.dt)
    }

    /// Integration step.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Acceleration for the given elastic and friction forces.
    #[inline]
    pub fn acceleration(&self, elastic: DVec3, friction: DVec3) -> DVec3 {
        (-self.gravity * self.mass + elastic - friction) / (2.0 * self.mass)
    }

    /// Advances every particle by one step.
    ///
    /// `elastic` and `friction` must have been computed from the grid as it
    /// is now, before any particle moves.
    pub fn integrate(
        &self,
        grid: &mut ParticleGrid,
        elastic: &[DVec3],
        friction: &[DVec3],
        collision: &mut CollisionHandler,
    ) -> IntegrationOutcome {
        debug_assert_eq!(elastic.len(), grid.len());
        debug_assert_eq!(friction.len(), grid.len());

        let mut outcome = IntegrationOutcome::default();
        let (positions, velocities, accelerations) = grid.buffers_mut();

        for k in 0..positions.len() {
            let a = self.acceleration(elastic[k], friction[k]);
            accelerations[k] = a;
            velocities[k] += a * self.dt;

            if collision.admit(positions[k]) {
                positions[k] += velocities[k] * self.dt;
                outcome.momentum += velocities[k];
            } else {
                outcome.held += 1;
            }
        }

        outcome
    }
}
