//! # Vehicle movement with swappable strategies
//!
//! A [`Vehicle`] delegates "how do I move" to a [`MoveStrategy`] it holds
//! behind an `Arc`. The strategy can be replaced at any time and the next
//! [`Vehicle::perform_move`] reflects the change.
//!
//! ```
//! use std::sync::Arc;
//! use vehicle_strategy::{FastMove, NoMove, Vehicle};
//!
//! let mut super_car = Vehicle::super_car(Arc::new(FastMove));
//! assert_eq!(super_car.perform_move(), "Moving at Fast speed.");
//!
//! super_car.set_move_strategy(Arc::new(NoMove));
//! assert_eq!(super_car.report(), "SuperCar: This vehicle does not move..");
//! ```
//!
//! Also here:
//! - [`offering`]: a pricing contract plus shared menu behavior
//! - [`scenario`]: TOML/JSON files that replay a spawn/swap sequence
//!
//! Run the console demo with:
//! ```bash
//! cargo run --bin fleet_demo
//! cargo run --bin fleet_demo -- path/to/scenario.toml
//! ```

pub mod error;
pub mod movement;
pub mod offering;
pub mod scenario;
pub mod vehicle;

pub use error::FleetError;
pub use movement::{FastMove, FnMove, MoveStrategy, NoMove, NormalMove, StrategyKind};
pub use offering::{describe_offering, Concert, HasMenu, Movie, Pricing};
pub use scenario::{MoveReport, Scenario, Step};
pub use vehicle::{Vehicle, VehicleKind};
