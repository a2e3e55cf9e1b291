//! Step observer: how the host learns that a step happened.
//!
//! The scheduler calls [`StepObserver::on_step`] after every executed step,
//! whatever state the step left it in. A render driver uses this as its
//! redraw request; telemetry hooks use it to emit events.

use crate::context::SimulationContext;
use crate::scheduler::StepReport;

/// Receives scheduler notifications.
///
/// # Lifecycle
///
/// ```text
/// for each tick while RUNNING:
///   observer.on_step(report, ctx)
///   if the step stopped the run:
///     observer.on_stopped(report)
/// ```
pub trait StepObserver: Send {
    /// Called after every executed step.
    fn on_step(&mut self, report: &StepReport, ctx: &SimulationContext);

    /// Called once, after the step that moved the scheduler to STOPPED.
    fn on_stopped(&mut self, report: &StepReport) {
        let _ = report;
    }

    /// Returns the observer's name for logging.
    fn name(&self) -> &str;
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl StepObserver for NullObserver {
    fn on_step(&mut self, _report: &StepReport, _ctx: &SimulationContext) {}

    fn name(&self) -> &str {
        "null_observer"
    }
}

/// Forwards each notification to several borrowed observers, in order.
pub struct Fanout<'a> {
    observers: Vec<&'a mut dyn StepObserver>,
}

impl<'a> Fanout<'a> {
    /// Creates an empty fan-out.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Adds an observer.
    pub fn with(mut self, observer: &'a mut dyn StepObserver) -> Self {
        self.observers.push(observer);
        self
    }

    /// Number of observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl Default for Fanout<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl StepObserver for Fanout<'_> {
    fn on_step(&mut self, report: &StepReport, ctx: &SimulationContext) {
        for observer in &mut self.observers {
            observer.on_step(report, ctx);
        }
    }

    fn on_stopped(&mut self, report: &StepReport) {
        for observer in &mut self.observers {
            observer.on_stopped(report);
        }
    }

    fn name(&self) -> &str {
        "fanout"
    }
}
