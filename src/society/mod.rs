//! MicroSociety - aggregate root owning a population, metrics and logs
//!
//! A society does not own a timer. It exposes `tick_interval()` and the
//! `running` state machine; an external driver (the CLI runner, a test loop)
//! fires `simulation::process_turn` while the society is running. Ticks are
//! serialized by the driver, which makes turns non-reentrant by construction.

mod log;
mod metrics;

pub use log::{EventLog, LogEntry, LogKind};
pub use metrics::{MetricsHistory, MetricsSnapshot, SocietyMetrics};

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::being::{alive_count, Being};
use crate::core::types::{SimulationSpeed, Turn};

/// A simulated micro-society
#[derive(Debug, Clone)]
pub struct MicroSociety {
    pub name: String,
    pub goal: String,
    pub beings: Vec<Being>,
    pub metrics: SocietyMetrics,
    pub(crate) turn: Turn,
    pub(crate) running: bool,
    pub(crate) speed: SimulationSpeed,
    pub(crate) metrics_history: MetricsHistory,
    pub(crate) event_log: EventLog,
    pub(crate) rng: ChaCha8Rng,
}

/// Read-only projection of a society for list views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocietySummary {
    pub name: String,
    pub turn: Turn,
    pub running: bool,
    pub population: usize,
    pub health: f32,
}

/// Full owned snapshot of a society for external consumers
///
/// Everything is copied out, so callers cannot reach the live state by
/// reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocietyState {
    pub name: String,
    pub goal: String,
    pub turn: Turn,
    pub running: bool,
    pub speed: SimulationSpeed,
    pub metrics: SocietyMetrics,
    pub beings: Vec<Being>,
}

impl MicroSociety {
    pub fn new(
        name: impl Into<String>,
        goal: impl Into<String>,
        beings: Vec<Being>,
        seed: u64,
    ) -> Self {
        let mut society = Self {
            name: name.into(),
            goal: goal.into(),
            beings,
            metrics: SocietyMetrics::default(),
            turn: 0,
            running: false,
            speed: SimulationSpeed::default(),
            metrics_history: MetricsHistory::default(),
            event_log: EventLog::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        // History always starts with the turn-0 snapshot
        society.metrics_history.push(0, society.metrics);
        tracing::info!(
            society = %society.name,
            beings = society.beings.len(),
            "society created"
        );
        society
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> SimulationSpeed {
        self.speed
    }

    pub fn metrics_history(&self) -> &MetricsHistory {
        &self.metrics_history
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Begin running. No-op when already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        tracing::info!(society = %self.name, turn = self.turn, "simulation started");
    }

    /// Stop running. Idempotent; a driver observes `running` before each
    /// fire, so pausing only prevents future turns.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        tracing::info!(society = %self.name, turn = self.turn, "simulation paused");
    }

    /// Change the speed. Drivers re-read `tick_interval()` on every fire,
    /// so the new interval takes effect immediately.
    pub fn set_speed(&mut self, speed: SimulationSpeed) {
        self.speed = speed;
    }

    /// Interval between turn firings at the current speed
    pub fn tick_interval(&self) -> Duration {
        self.speed.tick_interval()
    }

    pub fn alive_count(&self) -> usize {
        alive_count(&self.beings)
    }

    pub fn alive_beings(&self) -> impl Iterator<Item = &Being> {
        self.beings.iter().filter(|b| b.alive)
    }

    pub fn dead_beings(&self) -> impl Iterator<Item = &Being> {
        self.beings.iter().filter(|b| !b.alive)
    }

    /// Append an entry to the event log at the current turn
    pub fn log(&mut self, kind: LogKind, message: impl Into<String>) {
        self.event_log.push(self.turn, kind, message);
    }

    pub fn summary(&self) -> SocietySummary {
        SocietySummary {
            name: self.name.clone(),
            turn: self.turn,
            running: self.running,
            population: self.alive_count(),
            health: self.metrics.health,
        }
    }

    /// Defensive copy of the full state, beings included
    pub fn state(&self) -> SocietyState {
        SocietyState {
            name: self.name.clone(),
            goal: self.goal.clone(),
            turn: self.turn,
            running: self.running,
            speed: self.speed,
            metrics: self.metrics,
            beings: self.beings.clone(),
        }
    }
}
