//! # drape-telemetry
//!
//! Event bus for simulation telemetry. Emits structured step events
//! (timing, momentum, contact, energy, termination) that are consumed
//! by pluggable sinks (in-memory log, `tracing`, JSON lines file).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, StepEvent};
pub use sinks::{EventSink, JsonLinesSink, TracingSink, VecSink};
