//! Step event types.
//!
//! Events are small value types tagged with the step they describe. They
//! carry just enough to follow a run: how long steps take, how the
//! momentum decays, when the cloth first touches the sphere and when the
//! scheduler stops.

use serde::{Deserialize, Serialize};

/// A telemetry event for one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepEvent {
    /// Step number (1 for the first executed step).
    pub timestep: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// A step finished.
    Step {
        /// Simulated time after the step (seconds).
        sim_time: f64,
        /// Wall-clock time of the step (seconds).
        wall_time: f64,
    },

    /// Accumulated momentum of the particles that moved.
    Momentum {
        /// Magnitude of the momentum vector.
        magnitude: f64,
        /// Particles held by the sphere this step.
        held: u32,
    },

    /// The cloth touched the sphere for the first time.
    ContactLatched {
        /// Particles held by the sphere on that step.
        held: u32,
    },

    /// Energy snapshot after the step.
    Energy {
        /// Kinetic energy (0.5 * m * v^2 summed).
        kinetic: f64,
        /// Largest elastic-force magnitude.
        max_force: f64,
    },

    /// The scheduler reached STOPPED.
    Stopped {
        /// Simulated time at the final step (seconds).
        sim_time: f64,
        /// Momentum magnitude that satisfied the stop condition.
        momentum: f64,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl EventKind {
    /// Short machine-friendly name of the variant.
    pub fn label(&self) -> &str {
        match self {
            EventKind::Step { .. } => "step",
            EventKind::Momentum { .. } => "momentum",
            EventKind::ContactLatched { .. } => "contact_latched",
            EventKind::Energy { .. } => "energy",
            EventKind::Stopped { .. } => "stopped",
            EventKind::Custom { label, .. } => label,
        }
    }
}

impl StepEvent {
    /// Creates a new event for the given step.
    pub fn new(timestep: u32, kind: EventKind) -> Self {
        Self { timestep, kind }
    }
}
