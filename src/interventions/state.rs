//! Persisted per-player intervention state
//!
//! The JSON file mirrors the product's `divine-interventions` storage key:
//! `{divinePoints, cooldowns, history}` with no schema version field.
//! Persistence is best-effort; read failures fall back to a fresh state and
//! are never surfaced to the player.

use std::path::{Path, PathBuf};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::{INTERVENTION_HISTORY_CAP, MAX_DIVINE_POINTS};
use crate::core::types::Turn;

/// An active cooldown, tracked against the turn it was registered at
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cooldown {
    #[serde(rename = "startTurn")]
    pub start_turn: Turn,
    pub duration: u64,
}

impl Cooldown {
    /// Turns left before the intervention can be used again
    pub fn remaining(&self, current_turn: Turn) -> u64 {
        let elapsed = current_turn.saturating_sub(self.start_turn);
        self.duration.saturating_sub(elapsed)
    }
}

/// One entry in the bounded usage history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterventionRecord {
    pub id: String,
    pub turn: Turn,
    pub society: String,
}

/// Per-player intervention resources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterventionState {
    #[serde(rename = "divinePoints")]
    pub divine_points: u32,
    pub cooldowns: AHashMap<String, Cooldown>,
    pub history: Vec<InterventionRecord>,
}

impl Default for InterventionState {
    fn default() -> Self {
        Self {
            divine_points: MAX_DIVINE_POINTS,
            cooldowns: AHashMap::new(),
            history: Vec::new(),
        }
    }
}

impl InterventionState {
    /// Drop cooldowns that have run out at the given turn
    pub fn evict_expired(&mut self, current_turn: Turn) {
        self.cooldowns.retain(|_, cd| cd.remaining(current_turn) > 0);
    }

    /// Append to the bounded usage history, dropping the oldest at the cap
    pub fn record(&mut self, id: &str, turn: Turn, society: &str) {
        if self.history.len() >= INTERVENTION_HISTORY_CAP {
            self.history.remove(0);
        }
        self.history.push(InterventionRecord {
            id: id.to_string(),
            turn,
            society: society.to_string(),
        });
    }
}

/// File-backed JSON store for the intervention state
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the state, falling back to defaults on any failure
    pub fn load(&self) -> InterventionState {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e,
                        "corrupt intervention state, starting fresh");
                    InterventionState::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => InterventionState::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e,
                    "cannot read intervention state, starting fresh");
                InterventionState::default()
            }
        }
    }

    /// Write the state, logging instead of failing
    pub fn save(&self, state: &InterventionState) {
        let write = || -> crate::core::error::Result<()> {
            let json = serde_json::to_string_pretty(state)?;
            std::fs::write(&self.path, json)?;
            Ok(())
        };
        if let Err(e) = write() {
            tracing::warn!(path = %self.path.display(), error = %e,
                "failed to persist intervention state");
        }
    }
}
