//! Beings - individual members of a micro-society
//!
//! Beings are soft-deleted: culling flags them dead but never removes them
//! from the owning array, so lineage indices stay stable and resurrection
//! interventions can find them later.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::{FITNESS_PENALTY, FITNESS_REWARD, INITIAL_FITNESS};
use crate::core::types::BeingId;

/// An individual population member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Being {
    pub id: BeingId,
    pub name: String,
    /// Named traits (wisdom, empathy, courage, ...). Non-negative, unbounded above.
    pub attributes: AHashMap<String, f32>,
    /// 0-100. Grows with successful contributions, decays on collective failures.
    pub fitness: f32,
    pub alive: bool,
    /// 1 for seed beings, max(parents) + 1 for hybrids.
    pub generation: u32,
    /// Aggregate strength, averaged across hybridization.
    pub total_power: f32,
    /// Knowledge-fragment provenance. Never mutated by the simulation core.
    pub pieces: Vec<String>,
}

impl Being {
    /// Create a first-generation being from caller-supplied seed data
    pub fn seed(name: impl Into<String>, attributes: &[(&str, f32)]) -> Self {
        let attributes: AHashMap<String, f32> = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.max(0.0)))
            .collect();
        let total_power = attributes.values().sum();

        Self {
            id: BeingId::new(),
            name: name.into(),
            attributes,
            fitness: INITIAL_FITNESS,
            alive: true,
            generation: 1,
            total_power,
            pieces: Vec::new(),
        }
    }

    pub fn with_pieces(mut self, pieces: Vec<String>) -> Self {
        self.pieces = pieces;
        self
    }

    /// Attribute value, or 0 when the being does not carry the trait
    pub fn attribute(&self, name: &str) -> f32 {
        self.attributes.get(name).copied().unwrap_or(0.0)
    }

    /// Flat reward for a successful contribution, capped at 100
    pub fn reward(&mut self) {
        self.fitness = (self.fitness + FITNESS_REWARD).min(100.0);
    }

    /// Collective penalty for a failed event, floored at 0
    pub fn penalize(&mut self) {
        self.fitness = (self.fitness - FITNESS_PENALTY).max(0.0);
    }

    /// Bring a dead being back at the seed fitness level
    pub fn revive(&mut self) {
        self.alive = true;
        self.fitness = INITIAL_FITNESS;
    }
}

/// Count of living beings in a population slice
pub fn alive_count(beings: &[Being]) -> usize {
    beings.iter().filter(|b| b.alive).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_being_defaults() {
        let b = Being::seed("Aria", &[("wisdom", 50.0), ("empathy", 30.0)]);
        assert_eq!(b.fitness, 50.0);
        assert!(b.alive);
        assert_eq!(b.generation, 1);
        assert_eq!(b.total_power, 80.0);
        assert_eq!(b.attribute("wisdom"), 50.0);
        assert_eq!(b.attribute("courage"), 0.0);
    }

    #[test]
    fn test_seed_clamps_negative_attributes() {
        let b = Being::seed("Nadir", &[("wisdom", -10.0)]);
        assert_eq!(b.attribute("wisdom"), 0.0);
    }

    #[test]
    fn test_reward_caps_at_hundred() {
        let mut b = Being::seed("Aria", &[]);
        b.fitness = 98.0;
        b.reward();
        assert_eq!(b.fitness, 100.0);
    }

    #[test]
    fn test_penalize_floors_at_zero() {
        let mut b = Being::seed("Aria", &[]);
        b.fitness = 1.0;
        b.penalize();
        assert_eq!(b.fitness, 0.0);
    }

    #[test]
    fn test_revive_resets_fitness() {
        let mut b = Being::seed("Aria", &[]);
        b.alive = false;
        b.fitness = 3.0;
        b.revive();
        assert!(b.alive);
        assert_eq!(b.fitness, 50.0);
    }

    #[test]
    fn test_alive_count_ignores_dead() {
        let mut beings = vec![Being::seed("A", &[]), Being::seed("B", &[])];
        beings[1].alive = false;
        assert_eq!(alive_count(&beings), 1);
    }
}
