//! # drape-solver
//!
//! The mass-spring cloth core: a square grid of point masses joined by
//! structural and shear springs, falling under gravity onto a static sphere.
//!
//! ## Key Types
//!
//! - [`ParticleGrid`]: per-particle positions, velocities, accelerations
//! - [`ElasticForceModel`] / [`FrictionModel`]: the two [`ForceModel`] phases
//! - [`CollisionHandler`]: sphere test plus the one-way contact latch
//! - [`Integrator`]: semi-implicit Euler with the halved-mass divisor
//! - [`SimulationContext`]: everything one run owns, passed into each phase
//! - [`StepScheduler`]: RUNNING/STOPPED state machine driven by host ticks
//! - [`Frame`]: the read-only view a renderer draws from

pub mod collision;
pub mod config;
pub mod context;
pub mod elastic;
pub mod frame;
pub mod friction;
pub mod grid;
pub mod integrator;
pub mod observer;
pub mod scheduler;
pub mod stencil;
pub mod strategy;

pub use collision::{CollisionHandler, CollisionSphere, ContactLatch};
pub use config::SimulationConfig;
pub use context::SimulationContext;
pub use elastic::ElasticForceModel;
pub use frame::Frame;
pub use friction::FrictionModel;
pub use grid::ParticleGrid;
pub use integrator::{IntegrationOutcome, Integrator};
pub use observer::{Fanout, NullObserver, StepObserver};
pub use scheduler::{SchedulerState, StepReport, StepScheduler};
pub use stencil::{NeighborOffset, SpringKind, NEIGHBOR_OFFSETS};
pub use strategy::ForceModel;

pub use glam::{DVec3, Vec3};
