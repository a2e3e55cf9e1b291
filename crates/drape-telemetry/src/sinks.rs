//! Pluggable event sinks.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use drape_types::DrapeResult;

use crate::events::{EventKind, StepEvent};

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &StepEvent);

    /// Called when the run ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events in memory.
///
/// The log is shared, so a clone kept by the caller still sees events
/// after the sink itself has been boxed into a bus.
#[derive(Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<StepEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every event received so far.
    pub fn events(&self) -> Vec<StepEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Number of events received so far.
    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    /// Whether no events have been received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &StepEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Logs events through `tracing`.
///
/// Per-step events go out at the configured level; contact and stop
/// events always go out at `INFO` or above so they show in default logs.
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    /// Creates a new tracing sink at the given log level.
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }
}

macro_rules! log_at {
    ($level:expr, $($arg:tt)+) => {
        match $level {
            tracing::Level::ERROR => tracing::error!($($arg)+),
            tracing::Level::WARN => tracing::warn!($($arg)+),
            tracing::Level::INFO => tracing::info!($($arg)+),
            tracing::Level::DEBUG => tracing::debug!($($arg)+),
            _ => tracing::trace!($($arg)+),
        }
    };
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &StepEvent) {
        match &event.kind {
            EventKind::ContactLatched { held } => {
                tracing::info!(timestep = event.timestep, held, "cloth touched the sphere");
            }
            EventKind::Stopped { sim_time, momentum } => {
                tracing::info!(timestep = event.timestep, sim_time, momentum, "simulation stopped");
            }
            kind => {
                log_at!(
                    self.level,
                    timestep = event.timestep,
                    event = kind.label(),
                    payload = ?kind,
                    "step_event"
                );
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}

/// Writes one JSON object per line to a file.
pub struct JsonLinesSink {
    writer: BufWriter<File>,
    written: u64,
}

impl JsonLinesSink {
    /// Creates (or truncates) `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> DrapeResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    /// Lines written so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl EventSink for JsonLinesSink {
    fn handle(&mut self, event: &StepEvent) {
        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode telemetry event");
                return;
            }
        };
        if let Err(e) = writeln!(self.writer, "{line}") {
            tracing::warn!(error = %e, "failed to write telemetry event");
            return;
        }
        self.written += 1;
    }

    fn finalize(&mut self) {
        if let Err(e) = self.writer.flush() {
            tracing::warn!(error = %e, "failed to flush telemetry file");
        }
    }

    fn name(&self) -> &str {
        "json_lines_sink"
    }
}
