//! Telemetry hook for live inspection.
//!
//! [`TelemetryHook`] is a [`StepObserver`] that translates each step
//! report into [`StepEvent`]s and pushes them through its own
//! [`EventBus`]. Register sinks on the bus before running.

use drape_solver::{SimulationContext, StepObserver, StepReport};
use drape_telemetry::events::{EventKind, StepEvent};
use drape_telemetry::EventBus;

/// Observer that bridges scheduler steps to the telemetry event bus.
pub struct TelemetryHook {
    bus: EventBus,
    /// Emit an `Energy` event every this many steps (0 disables).
    energy_interval: u32,
    /// Whether `ContactLatched` has been emitted.
    contact_seen: bool,
}

impl TelemetryHook {
    /// Creates a hook over `bus`, with energy sampling every step.
    pub fn new(bus: EventBus) -> Self {
        Self {
            bus,
            energy_interval: 1,
            contact_seen: false,
        }
    }

    /// Creates a hook for a run restored part-way through. `contact` is the
    /// restored latch, so a run that already touched the sphere does not
    /// report `ContactLatched` again.
    pub fn resumed(bus: EventBus, contact: bool) -> Self {
        Self {
            contact_seen: contact,
            ..Self::new(bus)
        }
    }

    /// Sets how often `Energy` events are emitted. Computing kinetic
    /// energy walks the whole grid, so long runs may want it sparser.
    pub fn with_energy_interval(mut self, interval: u32) -> Self {
        self.energy_interval = interval;
        self
    }

    /// Mutable access to the bus, e.g. to add sinks.
    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Flushes and finalizes every sink.
    pub fn finalize(&mut self) {
        self.bus.finalize();
    }

    /// Finalizes and hands the bus back.
    pub fn into_bus(mut self) -> EventBus {
        self.bus.finalize();
        self.bus
    }
}

impl StepObserver for TelemetryHook {
    fn on_step(&mut self, report: &StepReport, ctx: &SimulationContext) {
        let t = report.timestep;
        self.bus.emit(StepEvent::new(
            t,
            EventKind::Step {
                sim_time: report.sim_time,
                wall_time: report.wall_time,
            },
        ));
        self.bus.emit(StepEvent::new(
            t,
            EventKind::Momentum {
                magnitude: report.momentum.length(),
                held: report.held,
            },
        ));

        if report.contact && !self.contact_seen {
            self.contact_seen = true;
            self.bus
                .emit(StepEvent::new(t, EventKind::ContactLatched { held: report.held }));
        }

        if self.energy_interval > 0 && t % self.energy_interval == 0 {
            self.bus.emit(StepEvent::new(
                t,
                EventKind::Energy {
                    kinetic: ctx.kinetic_energy(),
                    max_force: ctx.max_force_magnitude(),
                },
            ));
        }

        self.bus.flush();
    }

    fn on_stopped(&mut self, report: &StepReport) {
        self.bus.emit(StepEvent::new(
            report.timestep,
            EventKind::Stopped {
                sim_time: report.sim_time,
                momentum: report.momentum.length(),
            },
        ));
        self.bus.flush();
    }

    fn name(&self) -> &str {
        "telemetry_hook"
    }
}
