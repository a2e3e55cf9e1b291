//! # drape-bench
//!
//! Headless host driver and benchmark suite for the drape simulator.
//!
//! Provides four named scenarios, a [`Runner`] that ticks the scheduler
//! until it stops (optionally at real-time cadence), metric collection
//! and CSV export for regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::{BenchmarkRunner, RunSummary, Runner};
pub use scenarios::{Scenario, ScenarioKind};
