//! Simulation context: everything a single run owns.
//!
//! The context is created by the host and passed by reference into each
//! phase. There is no process-wide state: two contexts never interact.

use glam::DVec3;

use drape_types::{DrapeError, DrapeResult, GridIndex};

use crate::collision::{CollisionHandler, CollisionSphere, ContactLatch};
use crate::config::SimulationConfig;
use crate::elastic::ElasticForceModel;
use crate::frame::Frame;
use crate::friction::FrictionModel;
use crate::grid::ParticleGrid;
use crate::integrator::{IntegrationOutcome, Integrator};
use crate::strategy::ForceModel;

/// State and parameters of one cloth run.
pub struct SimulationContext {
    config: SimulationConfig,
    grid: ParticleGrid,
    elastic: ElasticForceModel,
    friction: FrictionModel,
    integrator: Integrator,
    collision: CollisionHandler,

    // ─── Per-step force buffers ───
    elastic_force: Vec<DVec3>,
    friction_force: Vec<DVec3>,

    // ─── Per-step results ───
    momentum: DVec3,
    held: u32,
    timestep: u32,
}

impl SimulationContext {
    /// Creates a run with the sheet flat at `initial_height`.
    ///
    /// # Errors
    ///
    /// Returns [`DrapeError::InvalidConfig`] if the configuration fails
    /// validation.
    pub fn new(config: SimulationConfig) -> DrapeResult<Self> {
        config.validate()?;
        let grid = ParticleGrid::flat_sheet(config.grid_size, config.initial_height)?;
        Self::with_grid(config, grid)
    }

    /// Creates a run starting from an arbitrary grid state.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the grid size
    /// differs from `config.grid_size`.
    pub fn with_grid(config: SimulationConfig, grid: ParticleGrid) -> DrapeResult<Self> {
        Self::resume(config, grid, false, 0)
    }

    /// Recreates a run part-way through, with the contact latch and step
    /// counter restored.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the grid size
    /// differs from `config.grid_size`.
    pub fn resume(
        config: SimulationConfig,
        grid: ParticleGrid,
        contact: bool,
        timestep: u32,
    ) -> DrapeResult<Self> {
        config.validate()?;
        if grid.size() != config.grid_size {
            return Err(DrapeError::InvalidGrid(format!(
                "grid is {}x{} but config.grid_size is {}",
                grid.size(),
                grid.size(),
                config.grid_size
            )));
        }

        let sphere = CollisionSphere::new(config.sphere_center_vec(), config.sphere_radius);
        let latch = if contact {
            ContactLatch::engaged()
        } else {
            ContactLatch::new()
        };
        let n = grid.len();

        Ok(Self {
            elastic: ElasticForceModel::new(config.stiffness),
            friction: FrictionModel::new(config.friction),
            integrator: Integrator::from_config(&config),
            collision: CollisionHandler::with_latch(sphere, latch),
            elastic_force: vec![DVec3::ZERO; n],
            friction_force: vec![DVec3::ZERO; n],
            momentum: DVec3::ZERO,
            held: 0,
            timestep,
            config,
            grid,
        })
    }

    /// Phase 1: fills both force buffers from the current grid.
    ///
    /// The two models only read the grid, so they run concurrently.
    pub fn compute_forces(&mut self) {
        let grid = &self.grid;
        let (elastic, friction) = (&self.elastic, &self.friction);
        let (elastic_out, friction_out) = (&mut self.elastic_force, &mut self.friction_force);
        rayon::join(
            || elastic.compute(grid, elastic_out),
            || friction.compute(grid, friction_out),
        );
    }

    /// Phase 2: integrates every particle using the buffers from phase 1.
    pub fn integrate(&mut self) -> IntegrationOutcome {
        let outcome = self.integrator.integrate(
            &mut self.grid,
            &self.elastic_force,
            &self.friction_force,
            &mut self.collision,
        );
        self.momentum = outcome.momentum;
        self.held = outcome.held;
        outcome
    }

    /// Runs both phases and advances the step counter.
    pub fn step(&mut self) -> IntegrationOutcome {
        self.compute_forces();
        let outcome = self.integrate();
        self.timestep += 1;
        outcome
    }

    // ─── Accessors ───

    /// The configuration this run was built from.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Particle state.
    pub fn grid(&self) -> &ParticleGrid {
        &self.grid
    }

    /// Elastic forces from the last step, row-major.
    pub fn elastic_forces(&self) -> &[DVec3] {
        &self.elastic_force
    }

    /// Friction forces from the last step, row-major.
    pub fn friction_forces(&self) -> &[DVec3] {
        &self.friction_force
    }

    /// Elastic force on `idx` from the last step.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is outside the grid.
    pub fn elastic_force(&self, idx: GridIndex) -> DVec3 {
        self.elastic_force[self.grid.checked(idx)]
    }

    /// Momentum accumulated during the last step.
    pub fn momentum(&self) -> DVec3 {
        self.momentum
    }

    /// Particles held by the sphere during the last step.
    pub fn held_count(&self) -> u32 {
        self.held
    }

    /// Whether the cloth has ever touched the sphere.
    pub fn contact(&self) -> bool {
        self.collision.contact()
    }

    /// Steps executed so far.
    pub fn timestep(&self) -> u32 {
        self.timestep
    }

    /// Simulated time in seconds.
    pub fn sim_time(&self) -> f64 {
        f64::from(self.timestep) * self.config.dt
    }

    /// Collision sphere.
    pub fn sphere(&self) -> CollisionSphere {
        self.collision.sphere()
    }

    /// Collision sphere center.
    pub fn sphere_center(&self) -> DVec3 {
        self.collision.sphere().center
    }

    /// Collision sphere radius.
    pub fn sphere_radius(&self) -> f64 {
        self.collision.sphere().radius
    }

    /// Snapshot of what a renderer needs for the current state.
    pub fn frame(&self) -> Frame {
        Frame {
            grid_size: self.grid.size(),
            timestep: self.timestep,
            positions: self.grid.positions().iter().map(|p| p.as_vec3()).collect(),
            force_magnitudes: self
                .elastic_force
                .iter()
                .map(|f| f.length() as f32)
                .collect(),
            sphere: self.sphere(),
        }
    }

    // ─── Diagnostics ───

    /// Total kinetic energy: 0.5 * Σ m * |v|².
    pub fn kinetic_energy(&self) -> f64 {
        let m = self.config.mass;
        self.grid
            .velocities()
            .iter()
            .map(|v| 0.5 * m * v.length_squared())
            .sum()
    }

    /// Largest elastic-force magnitude from the last step.
    pub fn max_force_magnitude(&self) -> f64 {
        self.elastic_force
            .iter()
            .map(|f| f.length())
            .fold(0.0, f64::max)
    }
}
