//! # drape-debug
//!
//! Inspection tooling for simulation runs: a step observer that turns
//! each step into telemetry events, and binary state snapshots that can
//! be inspected offline or restored to resume a run.

pub mod hooks;
pub mod snapshot;

pub use hooks::TelemetryHook;
pub use snapshot::StateSnapshot;
