//! Benchmark metrics: data collected during a scenario run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Particle count (N²).
    pub particle_count: usize,
    /// Steps executed.
    pub steps: u32,
    /// Whether the run came to rest (scheduler STOPPED).
    pub stopped: bool,
    /// Step on which the cloth first touched the sphere.
    pub contact_step: Option<u32>,
    /// Simulated time at the end of the run (seconds).
    pub sim_time: f64,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per step (seconds).
    pub avg_step_time: f64,
    /// Minimum step time.
    pub min_step_time: f64,
    /// Maximum step time.
    pub max_step_time: f64,
    /// Momentum magnitude of the final step.
    pub final_momentum: f64,
    /// Final kinetic energy.
    pub final_kinetic_energy: f64,
    /// Maximum particle displacement from the initial sheet.
    pub max_displacement: f64,
}

impl BenchmarkMetrics {
    /// CSV header line.
    pub fn to_csv_header() -> String {
        "scenario,particle_count,steps,stopped,contact_step,sim_time_s,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,final_momentum,final_ke,max_displacement".to_string()
    }

    /// Format this metrics instance as a CSV data row. A run without
    /// contact leaves `contact_step` empty.
    pub fn to_csv_row(&self) -> String {
        let contact = self
            .contact_step
            .map(|s| s.to_string())
            .unwrap_or_default();
        format!(
            "{},{},{},{},{},{:.3},{:.6},{:.4},{:.4},{:.4},{:.4},{:.6e},{:.4}",
            self.scenario,
            self.particle_count,
            self.steps,
            self.stopped,
            contact,
            self.sim_time,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.final_momentum,
            self.final_kinetic_energy,
            self.max_displacement,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
