//! Core type definitions used throughout the codebase

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::config::BASE_TICK_MS;

/// Unique identifier for beings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeingId(pub Uuid);

impl BeingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BeingId {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn counter (simulation time unit)
pub type Turn = u64;

/// Simulation speed multiplier
///
/// The tick interval is the base interval divided by the multiplier, so
/// higher speeds fire turns more often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationSpeed {
    X1,
    X2,
    X5,
    X10,
}

impl Default for SimulationSpeed {
    fn default() -> Self {
        Self::X1
    }
}

impl SimulationSpeed {
    pub fn multiplier(self) -> u64 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X5 => 5,
            Self::X10 => 10,
        }
    }

    /// Parse a numeric speed setting (UI sends 1, 2, 5 or 10)
    pub fn from_multiplier(value: u64) -> Option<Self> {
        match value {
            1 => Some(Self::X1),
            2 => Some(Self::X2),
            5 => Some(Self::X5),
            10 => Some(Self::X10),
            _ => None,
        }
    }

    /// Interval between turn firings at this speed
    pub fn tick_interval(self) -> Duration {
        Duration::from_millis(BASE_TICK_MS / self.multiplier())
    }
}
