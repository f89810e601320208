//! Movement strategies.
//!
//! A [`MoveStrategy`] describes how a vehicle moves. Vehicles hold one behind an
//! `Arc`, so a single instance can be shared by any number of vehicles (and
//! threads) at once. All built-in strategies are stateless.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::FleetError;

pub trait MoveStrategy: Send + Sync {
    /// Human-readable description of the movement. Never empty.
    fn describe_move(&self) -> String;

    /// Short stable identifier, used in logs and scenario files.
    fn name(&self) -> &str;
}

// =============================================================================
// Built-in strategies
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FastMove;

impl MoveStrategy for FastMove {
    fn describe_move(&self) -> String {
        "Moving at Fast speed.".to_string()
    }

    fn name(&self) -> &str {
        "fast"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalMove;

impl MoveStrategy for NormalMove {
    fn describe_move(&self) -> String {
        "Moving at normal speed.".to_string()
    }

    fn name(&self) -> &str {
        "normal"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoMove;

impl MoveStrategy for NoMove {
    fn describe_move(&self) -> String {
        "This vehicle does not move..".to_string()
    }

    fn name(&self) -> &str {
        "none"
    }
}

// =============================================================================
// Closure-backed strategy
// =============================================================================

/// Strategy built from a closure, for one-off behaviors that don't deserve a
/// named type.
pub struct FnMove<F>
where
    F: Fn() -> String + Send + Sync,
{
    name: String,
    describe: F,
}

impl<F> FnMove<F>
where
    F: Fn() -> String + Send + Sync,
{
    pub fn new(name: impl Into<String>, describe: F) -> Self {
        Self {
            name: name.into(),
            describe,
        }
    }
}

impl<F> MoveStrategy for FnMove<F>
where
    F: Fn() -> String + Send + Sync,
{
    fn describe_move(&self) -> String {
        (self.describe)()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for FnMove<F>
where
    F: Fn() -> String + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMove").field("name", &self.name).finish_non_exhaustive()
    }
}

// =============================================================================
// Name table
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Fast,
    Normal,
    Still,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [StrategyKind::Fast, StrategyKind::Normal, StrategyKind::Still];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Fast => "fast",
            StrategyKind::Normal => "normal",
            StrategyKind::Still => "none",
        }
    }

    pub fn into_strategy(self) -> Arc<dyn MoveStrategy> {
        match self {
            StrategyKind::Fast => Arc::new(FastMove),
            StrategyKind::Normal => Arc::new(NormalMove),
            StrategyKind::Still => Arc::new(NoMove),
        }
    }

    fn known_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.name()).collect()
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(StrategyKind::Fast),
            "normal" => Ok(StrategyKind::Normal),
            "none" | "no" | "still" => Ok(StrategyKind::Still),
            _ => Err(FleetError::unknown_strategy(s, &Self::known_names())),
        }
    }
}
