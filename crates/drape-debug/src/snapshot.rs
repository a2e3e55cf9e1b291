//! State snapshot serialization for replay and debugging.
//!
//! A snapshot holds everything that evolves during a run: particle
//! positions and velocities, the contact latch, the step counter and the
//! scheduler state. Constants come from the [`SimulationConfig`] passed
//! to [`StateSnapshot::restore`].

use glam::DVec3;
use serde::{Deserialize, Serialize};

use drape_solver::{
    ParticleGrid, SchedulerState, SimulationConfig, SimulationContext, StepScheduler,
};
use drape_types::{DrapeError, DrapeResult};

/// A complete simulation state snapshot.
///
/// Serialized with `bincode` for compact binary output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Steps executed when the snapshot was taken.
    pub timestep: u32,
    /// Simulation time in seconds.
    pub sim_time: f64,
    /// Grid dimension N.
    pub grid_size: usize,
    /// Particle positions, row-major.
    pub positions: Vec<DVec3>,
    /// Particle velocities, row-major.
    pub velocities: Vec<DVec3>,
    /// Contact latch.
    pub contact: bool,
    /// Scheduler state.
    pub state: SchedulerState,
}

impl StateSnapshot {
    /// Captures the current state of a run.
    pub fn capture(ctx: &SimulationContext, state: SchedulerState) -> Self {
        let grid = ctx.grid();
        Self {
            timestep: ctx.timestep(),
            sim_time: ctx.sim_time(),
            grid_size: grid.size(),
            positions: grid.positions().to_vec(),
            velocities: grid.velocities().to_vec(),
            contact: ctx.contact(),
            state,
        }
    }

    /// Number of particles in the snapshot.
    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }

    /// Mean particle position.
    pub fn centroid(&self) -> DVec3 {
        if self.positions.is_empty() {
            return DVec3::ZERO;
        }
        self.positions.iter().copied().sum::<DVec3>() / self.positions.len() as f64
    }

    /// Serializes to compact binary format.
    ///
    /// # Errors
    ///
    /// Returns [`DrapeError::Serialization`] if encoding fails.
    pub fn to_bytes(&self) -> DrapeResult<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| DrapeError::Serialization(format!("snapshot encoding failed: {e}")))
    }

    /// Deserializes from binary format.
    ///
    /// # Errors
    ///
    /// Returns [`DrapeError::Serialization`] if the bytes are not a snapshot.
    pub fn from_bytes(data: &[u8]) -> DrapeResult<Self> {
        bincode::deserialize(data)
            .map_err(|e| DrapeError::Serialization(format!("snapshot decoding failed: {e}")))
    }

    /// Rebuilds a context and scheduler that continue from this snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid, if the snapshot's grid size
    /// differs from `config.grid_size`, or if the buffers are inconsistent.
    pub fn restore(
        &self,
        config: SimulationConfig,
    ) -> DrapeResult<(SimulationContext, StepScheduler)> {
        if self.grid_size != config.grid_size {
            return Err(DrapeError::InvariantViolation(format!(
                "snapshot is for a {0}x{0} grid but the config asks for {1}x{1}",
                self.grid_size, config.grid_size
            )));
        }
        let grid = ParticleGrid::from_parts(
            self.grid_size,
            self.positions.clone(),
            self.velocities.clone(),
        )?;
        let scheduler = StepScheduler::resume(self.state, config.momentum_threshold);
        let ctx = SimulationContext::resume(config, grid, self.contact, self.timestep)?;
        tracing::debug!(
            timestep = self.timestep,
            contact = self.contact,
            state = ?self.state,
            "snapshot restored"
        );
        Ok((ctx, scheduler))
    }
}
