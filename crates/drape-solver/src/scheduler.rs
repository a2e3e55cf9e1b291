//! Step scheduler: the RUNNING/STOPPED state machine.
//!
//! The host owns a fixed-interval timer and calls [`StepScheduler::advance`]
//! on every tick. While RUNNING, each tick runs one full step and decides
//! whether the timer should be re-armed:
//!
//! ```text
//! continue  <=>  |momentum| > threshold  ||  !contact
//! ```
//!
//! Once the condition fails the scheduler is STOPPED for good. Ticks that
//! arrive afterwards do nothing, and the last frame stays on screen.

use std::time::Instant;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::context::SimulationContext;
use crate::observer::StepObserver;

/// Scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchedulerState {
    /// Steps run on every tick.
    Running,
    /// Terminal. Ticks are ignored.
    Stopped,
}

/// Summary of one executed step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// Steps executed so far, including this one.
    pub timestep: u32,
    /// Simulated time after this step (seconds).
    pub sim_time: f64,
    /// Momentum accumulated over the particles that moved.
    pub momentum: DVec3,
    /// Particles held by the sphere this step.
    pub held: u32,
    /// Contact latch after this step.
    pub contact: bool,
    /// Scheduler state after evaluating the stop condition.
    pub state: SchedulerState,
    /// Wall-clock time for the step (seconds).
    pub wall_time: f64,
}

impl StepReport {
    /// Whether the host should re-arm its timer.
    pub fn rearm(&self) -> bool {
        self.state == SchedulerState::Running
    }
}

/// Drives a [`SimulationContext`] one tick at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct StepScheduler {
    state: SchedulerState,
    momentum_threshold: f64,
}

impl StepScheduler {
    /// Creates a running scheduler with the given stop threshold.
    pub fn new(momentum_threshold: f64) -> Self {
        Self {
            state: SchedulerState::Running,
            momentum_threshold,
        }
    }

    /// Creates a running scheduler using `config.momentum_threshold`.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.momentum_threshold)
    }

    /// Creates a scheduler in a given state, for resuming a saved run.
    pub fn resume(state: SchedulerState, momentum_threshold: f64) -> Self {
        Self {
            state,
            momentum_threshold,
        }
    }

    /// Current state.
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Whether ticks still run steps.
    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    /// Stop threshold on the momentum magnitude.
    pub fn momentum_threshold(&self) -> f64 {
        self.momentum_threshold
    }

    /// The re-arm predicate.
    pub fn should_continue(&self, momentum: DVec3, contact: bool) -> bool {
        momentum.length() > self.momentum_threshold || !contact
    }

    /// Handles one timer tick.
    ///
    /// Returns `None` without touching `ctx` or `observer` if the scheduler
    /// is already STOPPED. Otherwise runs one step, notifies `observer`, and
    /// returns the step's report.
    pub fn advance(
        &mut self,
        ctx: &mut SimulationContext,
        observer: &mut dyn StepObserver,
    ) -> Option<StepReport> {
        if self.state == SchedulerState::Stopped {
            return None;
        }

        let start = Instant::now();
        let outcome = ctx.step();
        let contact = ctx.contact();

        if !self.should_continue(outcome.momentum, contact) {
            self.state = SchedulerState::Stopped;
        }

        let report = StepReport {
            timestep: ctx.timestep(),
            sim_time: ctx.sim_time(),
            momentum: outcome.momentum,
            held: outcome.held,
            contact,
            state: self.state,
            wall_time: start.elapsed().as_secs_f64(),
        };

        tracing::trace!(
            timestep = report.timestep,
            momentum = report.momentum.length(),
            held = report.held,
            contact,
            "step"
        );

        observer.on_step(&report, ctx);

        if self.state == SchedulerState::Stopped {
            tracing::info!(
                timestep = report.timestep,
                sim_time = report.sim_time,
                momentum = report.momentum.length(),
                "cloth at rest, scheduler stopped"
            );
            observer.on_stopped(&report);
        }

        Some(report)
    }
}
