//! Benchmark scenarios: a configuration plus a tick cap for each case.
//!
//! 1. **Reference drape**: the classic 30×30 sheet dropped onto a sphere
//! 2. **Small drape**: 10×10 sheet for quick runs
//! 3. **Offset drape**: sphere under one quadrant, so the sheet slides off
//! 4. **Free fall**: sphere out of reach; never stops, ends at the cap

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use drape_solver::SimulationConfig;
use drape_types::constants::SPHERE_HEIGHT_FRACTION;
use drape_types::DrapeError;

/// Which scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    ReferenceDrape,
    SmallDrape,
    OffsetDrape,
    FreeFall,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::ReferenceDrape,
            ScenarioKind::SmallDrape,
            ScenarioKind::OffsetDrape,
            ScenarioKind::FreeFall,
        ]
    }

    /// Returns a machine-friendly name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::ReferenceDrape => "reference_drape",
            ScenarioKind::SmallDrape => "small_drape",
            ScenarioKind::OffsetDrape => "offset_drape",
            ScenarioKind::FreeFall => "free_fall",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioKind {
    type Err = DrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DrapeError::InvalidConfig(format!("unknown scenario '{s}'")))
    }
}

/// A fully specified scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Simulation configuration.
    pub config: SimulationConfig,
    /// Upper bound on ticks delivered to the scheduler.
    pub max_ticks: u32,
}

impl Scenario {
    /// The reference configuration, unchanged.
    pub fn reference_drape() -> Self {
        Self {
            kind: ScenarioKind::ReferenceDrape,
            config: SimulationConfig::reference(),
            max_ticks: 10_000,
        }
    }

    /// A 10×10 sheet over a small sphere.
    pub fn small_drape() -> Self {
        Self {
            kind: ScenarioKind::SmallDrape,
            config: SimulationConfig::small(),
            max_ticks: 4_000,
        }
    }

    /// The reference sheet with the sphere moved under one quadrant.
    pub fn offset_drape() -> Self {
        let config = SimulationConfig::reference();
        let n = config.grid_size as f64;
        let z = config.initial_height * SPHERE_HEIGHT_FRACTION;
        Self {
            kind: ScenarioKind::OffsetDrape,
            config: SimulationConfig {
                sphere_center: Some([n * 0.25, n * 0.25, z]),
                ..config
            },
            max_ticks: 10_000,
        }
    }

    /// The reference sheet with the sphere far away from the fall path.
    pub fn free_fall() -> Self {
        Self {
            kind: ScenarioKind::FreeFall,
            config: SimulationConfig {
                sphere_center: Some([1.0e4, 1.0e4, 1.0e4]),
                ..SimulationConfig::reference()
            },
            max_ticks: 300,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::ReferenceDrape => Self::reference_drape(),
            ScenarioKind::SmallDrape => Self::small_drape(),
            ScenarioKind::OffsetDrape => Self::offset_drape(),
            ScenarioKind::FreeFall => Self::free_fall(),
        }
    }

    /// Overrides the tick cap.
    pub fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = max_ticks;
        self
    }
}
