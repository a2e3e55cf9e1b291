//! Headless host driver and benchmark runner.
//!
//! [`Runner`] plays the part of the windowing toolkit's timer: it delivers
//! ticks to a [`StepScheduler`] until the scheduler stops or a tick cap is
//! reached, optionally sleeping the configured interval between ticks.

use std::time::{Duration, Instant};

use glam::DVec3;

use drape_solver::{NullObserver, SimulationContext, StepObserver, StepScheduler};
use drape_types::DrapeResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// What happened during a [`Runner::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Steps executed by this run.
    pub steps: u32,
    /// Whether the scheduler reached STOPPED.
    pub stopped: bool,
    /// First step (absolute) on which contact was observed.
    pub contact_step: Option<u32>,
    /// Momentum of the last executed step.
    pub final_momentum: DVec3,
    /// Wall-clock time of each executed step (seconds).
    pub step_times: Vec<f64>,
}

/// Delivers timer ticks to a scheduler.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    max_ticks: Option<u32>,
    interval: Option<Duration>,
}

impl Runner {
    /// Runs until STOPPED with no delay between ticks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops delivering ticks after `max_ticks`.
    pub fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Sleeps `interval` between ticks.
    pub fn realtime(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Ticks the scheduler until it stops or the cap is reached.
    ///
    /// Without a cap a run that never touches the sphere does not end.
    pub fn run(
        &self,
        ctx: &mut SimulationContext,
        scheduler: &mut StepScheduler,
        observer: &mut dyn StepObserver,
    ) -> RunSummary {
        let mut summary = RunSummary {
            steps: 0,
            stopped: !scheduler.is_running(),
            contact_step: ctx.contact().then(|| ctx.timestep()),
            final_momentum: ctx.momentum(),
            step_times: Vec::new(),
        };

        let mut ticks = 0u32;
        while self.max_ticks.map_or(true, |cap| ticks < cap) {
            ticks += 1;
            let Some(report) = scheduler.advance(ctx, observer) else {
                break;
            };

            summary.steps += 1;
            summary.final_momentum = report.momentum;
            summary.step_times.push(report.wall_time);
            if report.contact && summary.contact_step.is_none() {
                summary.contact_step = Some(report.timestep);
            }
            if !report.rearm() {
                summary.stopped = true;
                break;
            }

            if let Some(interval) = self.interval {
                std::thread::sleep(interval);
            }
        }

        summary
    }
}

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario headless and at full speed.
    pub fn run(scenario: &Scenario) -> DrapeResult<BenchmarkMetrics> {
        let mut ctx = SimulationContext::new(scenario.config.clone())?;
        let mut scheduler = StepScheduler::from_config(&scenario.config);
        let initial = ctx.grid().positions().to_vec();

        tracing::info!(
            scenario = scenario.kind.name(),
            particles = ctx.grid().len(),
            max_ticks = scenario.max_ticks,
            "running scenario"
        );

        let start = Instant::now();
        let summary = Runner::new()
            .with_max_ticks(scenario.max_ticks)
            .run(&mut ctx, &mut scheduler, &mut NullObserver);
        let total_wall_time = start.elapsed().as_secs_f64();

        let max_displacement = ctx
            .grid()
            .positions()
            .iter()
            .zip(&initial)
            .map(|(p, p0)| p.distance(*p0))
            .fold(0.0f64, f64::max);

        let times = &summary.step_times;
        let avg_step_time = if times.is_empty() {
            0.0
        } else {
            times.iter().sum::<f64>() / times.len() as f64
        };
        let min_step_time = times.iter().copied().fold(f64::MAX, f64::min);
        let max_step_time = times.iter().copied().fold(0.0, f64::max);

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            particle_count: ctx.grid().len(),
            steps: summary.steps,
            stopped: summary.stopped,
            contact_step: summary.contact_step,
            sim_time: ctx.sim_time(),
            total_wall_time,
            avg_step_time,
            min_step_time: if times.is_empty() { 0.0 } else { min_step_time },
            max_step_time,
            final_momentum: summary.final_momentum.length(),
            final_kinetic_energy: ctx.kinetic_energy(),
            max_displacement,
        })
    }

    /// Run every scenario and return metrics for each.
    pub fn run_all() -> DrapeResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }
}
