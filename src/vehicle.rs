use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::error::FleetError;
use crate::movement::MoveStrategy;

// =============================================================================
// Vehicle kinds
// =============================================================================

/// Concrete vehicle variants. They differ only in their label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Bike,
    Car,
    SuperCar,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [VehicleKind::Bike, VehicleKind::Car, VehicleKind::SuperCar];

    pub fn label(self) -> &'static str {
        match self {
            VehicleKind::Bike => "Bike",
            VehicleKind::Car => "Car",
            VehicleKind::SuperCar => "SuperCar",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleKind {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bike" => Ok(VehicleKind::Bike),
            "car" => Ok(VehicleKind::Car),
            "supercar" | "super_car" | "super-car" => Ok(VehicleKind::SuperCar),
            _ => Err(FleetError::unknown_vehicle(s, &["bike", "car", "supercar"])),
        }
    }
}

// =============================================================================
// Vehicle
// =============================================================================

/// A vehicle that delegates its movement to a replaceable strategy.
///
/// The strategy is shared, not owned: the same `Arc` may sit inside several
/// vehicles, and swapping only changes which strategy this vehicle points to.
#[derive(Clone)]
pub struct Vehicle {
    kind: VehicleKind,
    strategy: Arc<dyn MoveStrategy>,
}

impl Vehicle {
    pub fn new(kind: VehicleKind, strategy: Arc<dyn MoveStrategy>) -> Self {
        Self { kind, strategy }
    }

    pub fn bike(strategy: Arc<dyn MoveStrategy>) -> Self {
        Self::new(VehicleKind::Bike, strategy)
    }

    pub fn car(strategy: Arc<dyn MoveStrategy>) -> Self {
        Self::new(VehicleKind::Car, strategy)
    }

    pub fn super_car(strategy: Arc<dyn MoveStrategy>) -> Self {
        Self::new(VehicleKind::SuperCar, strategy)
    }

    /// Replaces the current strategy. Takes effect on the next `perform_move`.
    pub fn set_move_strategy(&mut self, strategy: Arc<dyn MoveStrategy>) {
        debug!(
            vehicle = self.kind.label(),
            from = self.strategy.name(),
            to = strategy.name(),
            "move strategy replaced"
        );
        self.strategy = strategy;
    }

    pub fn perform_move(&self) -> String {
        self.strategy.describe_move()
    }

    pub fn vehicle_type(&self) -> &'static str {
        self.kind.label()
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// `"<type>: <movement>"`, the console line for this vehicle.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.vehicle_type(), self.perform_move())
    }
}

impl fmt::Debug for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vehicle")
            .field("kind", &self.kind)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
