//! Scenario files: an ordered list of spawn/swap steps that replays the
//! console demonstration.
//!
//! ```toml
//! [[step]]
//! action = "spawn"
//! kind = "super_car"
//! strategy = "fast"
//!
//! [[step]]
//! action = "swap"
//! vehicle = 0
//! strategy = "none"
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::error::FleetError;
use crate::movement::{MoveStrategy, StrategyKind};
use crate::vehicle::{Vehicle, VehicleKind};

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScenario {
    #[serde(default)]
    step: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case", deny_unknown_fields)]
enum RawStep {
    Spawn { kind: String, strategy: String },
    Swap { vehicle: usize, strategy: String },
}

impl RawStep {
    fn validate(self) -> Result<Step, FleetError> {
        match self {
            RawStep::Spawn { kind, strategy } => Ok(Step::Spawn {
                kind: kind.parse()?,
                strategy: strategy.parse()?,
            }),
            RawStep::Swap { vehicle, strategy } => Ok(Step::Swap {
                vehicle,
                strategy: strategy.parse()?,
            }),
        }
    }
}

// =============================================================================
// Validated scenario
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Spawn {
        kind: VehicleKind,
        strategy: StrategyKind,
    },
    /// `vehicle` is the 0-based index among spawned vehicles.
    Swap {
        vehicle: usize,
        strategy: StrategyKind,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    steps: Vec<Step>,
}

/// One console line produced by a scenario step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub vehicle_type: &'static str,
    pub movement: String,
    pub swapped: bool,
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.vehicle_type, self.movement)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(vec![
            Step::Spawn {
                kind: VehicleKind::Bike,
                strategy: StrategyKind::Normal,
            },
            Step::Spawn {
                kind: VehicleKind::Car,
                strategy: StrategyKind::Fast,
            },
            Step::Spawn {
                kind: VehicleKind::SuperCar,
                strategy: StrategyKind::Fast,
            },
            Step::Swap {
                vehicle: 2,
                strategy: StrategyKind::Still,
            },
        ])
    }
}

impl Scenario {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn from_toml_str(content: &str) -> Result<Self, FleetError> {
        let raw: RawScenario = toml::from_str(content)?;
        Self::from_raw(raw)
    }

    pub fn from_json_str(content: &str) -> Result<Self, FleetError> {
        let raw: RawScenario = serde_json::from_str(content)?;
        Self::from_raw(raw)
    }

    /// Loads a scenario, picking the format from the extension and falling
    /// back to sniffing the content.
    pub fn load(path: &Path) -> Result<Self, FleetError> {
        let content = fs::read_to_string(path).map_err(|err| FleetError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json_str(&content)
                } else {
                    Self::from_toml_str(&content)
                }
            }
        }
    }

    fn from_raw(raw: RawScenario) -> Result<Self, FleetError> {
        let steps = raw
            .step
            .into_iter()
            .map(RawStep::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(steps))
    }

    /// Runs every step in order, returning one report per step.
    ///
    /// Each strategy kind is instantiated once and shared by every vehicle
    /// that uses it.
    pub fn run(&self) -> Result<Vec<MoveReport>, FleetError> {
        let mut shared: HashMap<StrategyKind, Arc<dyn MoveStrategy>> = HashMap::new();
        let mut vehicles: Vec<Vehicle> = Vec::new();
        let mut reports = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            match *step {
                Step::Spawn { kind, strategy } => {
                    let strategy = Arc::clone(
                        shared
                            .entry(strategy)
                            .or_insert_with(|| strategy.into_strategy()),
                    );
                    let vehicle = Vehicle::new(kind, strategy);
                    info!(
                        index = vehicles.len(),
                        vehicle = kind.label(),
                        strategy = vehicle.strategy_name(),
                        "spawned"
                    );
                    reports.push(report(&vehicle, false));
                    vehicles.push(vehicle);
                }
                Step::Swap { vehicle, strategy } => {
                    let spawned = vehicles.len();
                    let target = vehicles
                        .get_mut(vehicle)
                        .ok_or(FleetError::NoSuchVehicle { index: vehicle, spawned })?;
                    let strategy = Arc::clone(
                        shared
                            .entry(strategy)
                            .or_insert_with(|| strategy.into_strategy()),
                    );
                    target.set_move_strategy(strategy);
                    info!(
                        index = vehicle,
                        vehicle = target.vehicle_type(),
                        strategy = target.strategy_name(),
                        "swapped"
                    );
                    reports.push(report(target, true));
                }
            }
        }

        Ok(reports)
    }
}

fn report(vehicle: &Vehicle, swapped: bool) -> MoveReport {
    MoveReport {
        vehicle_type: vehicle.vehicle_type(),
        movement: vehicle.perform_move(),
        swapped,
    }
}
