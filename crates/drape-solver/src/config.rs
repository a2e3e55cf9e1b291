//! Simulation configuration.
//!
//! Every physical constant of a run. Values are fixed once the
//! [`SimulationContext`](crate::SimulationContext) is built.

use std::time::Duration;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use drape_types::constants;
use drape_types::{DrapeError, DrapeResult};

/// Configuration for one cloth run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid side length N. The sheet holds N×N particles.
    pub grid_size: usize,

    /// Mass m of every particle.
    pub mass: f64,

    /// Spring stiffness K.
    pub stiffness: f64,

    /// Neighbor-velocity friction coefficient.
    pub friction: f64,

    /// Gravitational acceleration g. Applied as `-g * m`.
    pub gravity: [f64; 3],

    /// Height H of the flat sheet at rest.
    pub initial_height: f64,

    /// Integration step.
    pub dt: f64,

    /// Collision sphere radius R.
    pub sphere_radius: f64,

    /// Collision sphere center. `None` places it under the middle of the
    /// sheet at `0.7 * H`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sphere_center: Option<[f64; 3]>,

    /// Host timer interval T between ticks (milliseconds).
    pub timer_interval_ms: u64,

    /// Stop threshold on the accumulated momentum magnitude.
    pub momentum_threshold: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: constants::REFERENCE_GRID_SIZE,
            mass: constants::REFERENCE_MASS,
            stiffness: constants::REFERENCE_STIFFNESS,
            friction: constants::REFERENCE_FRICTION,
            gravity: constants::REFERENCE_GRAVITY,
            initial_height: constants::REFERENCE_HEIGHT,
            dt: constants::REFERENCE_DT,
            sphere_radius: constants::REFERENCE_SPHERE_RADIUS,
            sphere_center: None,
            timer_interval_ms: constants::REFERENCE_TIMER_INTERVAL_MS,
            momentum_threshold: constants::REFERENCE_MOMENTUM_THRESHOLD,
        }
    }
}

impl SimulationConfig {
    /// The reference drape: 30×30 sheet over a radius-5 sphere.
    pub fn reference() -> Self {
        Self::default()
    }

    /// A 10×10 sheet for quick runs. The sphere stays centered under it.
    pub fn small() -> Self {
        Self {
            grid_size: 10,
            initial_height: 20.0,
            sphere_radius: 2.0,
            ..Default::default()
        }
    }

    /// Checks startup preconditions.
    ///
    /// # Errors
    ///
    /// Returns [`DrapeError::InvalidConfig`] if the grid is empty, or if
    /// mass, step or radius would make the integration meaningless.
    pub fn validate(&self) -> DrapeResult<()> {
        if self.grid_size == 0 {
            return Err(DrapeError::InvalidConfig(
                "grid_size must be greater than zero".into(),
            ));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "mass must be finite and positive, got {}",
                self.mass
            )));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "dt must be finite and positive, got {}",
                self.dt
            )));
        }
        if !(self.sphere_radius.is_finite() && self.sphere_radius >= 0.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "sphere_radius must be finite and non-negative, got {}",
                self.sphere_radius
            )));
        }
        Ok(())
    }

    /// Gravity as a vector.
    pub fn gravity_vec(&self) -> DVec3 {
        DVec3::from_array(self.gravity)
    }

    /// Resolved sphere center.
    ///
    /// The default uses integer halving of N, so a 30-wide sheet puts the
    /// sphere under particle (15, 15).
    pub fn sphere_center_vec(&self) -> DVec3 {
        match self.sphere_center {
            Some(center) => DVec3::from_array(center),
            None => {
                let mid = (self.grid_size / 2) as f64;
                DVec3::new(
                    mid,
                    mid,
                    self.initial_height * constants::SPHERE_HEIGHT_FRACTION,
                )
            }
        }
    }

    /// Host timer interval.
    pub fn timer_interval(&self) -> Duration {
        Duration::from_millis(self.timer_interval_ms)
    }

    /// Total number of particles.
    pub fn particle_count(&self) -> usize {
        self.grid_size * self.grid_size
    }
}
