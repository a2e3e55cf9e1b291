//! Buffered event bus with pluggable sinks.
//!
//! Stepping is single-threaded, so the bus is a plain queue: `emit` buffers
//! and `flush` hands every queued event to every sink, in registration
//! order.

use std::collections::VecDeque;

use crate::events::StepEvent;
use crate::sinks::EventSink;

/// Telemetry event bus.
pub struct EventBus {
    /// Events emitted since the last flush.
    pending: VecDeque<StepEvent>,
    /// Registered sinks.
    sinks: Vec<Box<dyn EventSink>>,
    /// Whether the bus is active. A disabled bus is a no-op.
    enabled: bool,
    /// Events dispatched over the bus's lifetime.
    dispatched: u64,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            sinks: Vec::new(),
            enabled: true,
            dispatched: 0,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        tracing::debug!(sink = sink.name(), "telemetry sink registered");
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. Disabling drops anything still queued.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pending.clear();
        }
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queues an event. No-op on a disabled bus.
    pub fn emit(&mut self, event: StepEvent) {
        if self.enabled {
            self.pending.push_back(event);
        }
    }

    /// Queues several events.
    pub fn emit_all(&mut self, events: impl IntoIterator<Item = StepEvent>) {
        for event in events {
            self.emit(event);
        }
    }

    /// Dispatches every queued event to every sink.
    pub fn flush(&mut self) {
        while let Some(event) = self.pending.pop_front() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            self.dispatched += 1;
        }
    }

    /// Flushes, then lets every sink finalize (close files, etc.).
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Number of events waiting for the next flush.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of events dispatched so far.
    pub fn dispatched_count(&self) -> u64 {
        self.dispatched
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
