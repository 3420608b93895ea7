//! Society-wide metrics and their bounded history

use serde::{Deserialize, Serialize};

use crate::core::config::{INITIAL_METRIC_VALUE, METRICS_HISTORY_CAP, METRIC_MAX, METRIC_MIN};
use crate::core::types::Turn;

/// Four bounded scalars describing the state of a society
///
/// Every mutation goes through `apply_delta`, which clamps to [0, 100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SocietyMetrics {
    pub health: f32,
    pub knowledge: f32,
    pub action: f32,
    pub cohesion: f32,
}

impl Default for SocietyMetrics {
    fn default() -> Self {
        Self {
            health: INITIAL_METRIC_VALUE,
            knowledge: INITIAL_METRIC_VALUE,
            action: INITIAL_METRIC_VALUE,
            cohesion: INITIAL_METRIC_VALUE,
        }
    }
}

impl SocietyMetrics {
    /// Apply a named delta, clamped to the metric bounds.
    /// Unknown metric names are ignored so stale catalog data cannot crash
    /// a running society.
    pub fn apply_delta(&mut self, metric: &str, delta: f32) {
        let slot = match metric {
            "health" => &mut self.health,
            "knowledge" => &mut self.knowledge,
            "action" => &mut self.action,
            "cohesion" => &mut self.cohesion,
            _ => return,
        };
        *slot = (*slot + delta).clamp(METRIC_MIN, METRIC_MAX);
    }

    pub fn get(&self, metric: &str) -> Option<f32> {
        match metric {
            "health" => Some(self.health),
            "knowledge" => Some(self.knowledge),
            "action" => Some(self.action),
            "cohesion" => Some(self.cohesion),
            _ => None,
        }
    }
}

/// One point-in-time record of the metrics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub turn: Turn,
    pub metrics: SocietyMetrics,
}

/// Bounded FIFO of metric snapshots for UI charting
///
/// Oldest entries are dropped once the cap is reached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsHistory {
    snapshots: Vec<MetricsSnapshot>,
}

impl MetricsHistory {
    pub fn push(&mut self, turn: Turn, metrics: SocietyMetrics) {
        if self.snapshots.len() >= METRICS_HISTORY_CAP {
            self.snapshots.remove(0); // Remove oldest
        }
        self.snapshots.push(MetricsSnapshot { turn, metrics });
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Oldest-first iteration
    pub fn iter(&self) -> impl Iterator<Item = &MetricsSnapshot> {
        self.snapshots.iter()
    }

    pub fn first(&self) -> Option<&MetricsSnapshot> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&MetricsSnapshot> {
        self.snapshots.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_delta_clamps_both_ends() {
        let mut m = SocietyMetrics::default();
        m.apply_delta("health", 500.0);
        assert_eq!(m.health, 100.0);
        m.apply_delta("health", -500.0);
        assert_eq!(m.health, 0.0);
    }

    #[test]
    fn test_apply_delta_ignores_unknown_metric() {
        let mut m = SocietyMetrics::default();
        let before = m;
        m.apply_delta("vitality", 25.0);
        assert_eq!(m.health, before.health);
        assert_eq!(m.knowledge, before.knowledge);
        assert_eq!(m.action, before.action);
        assert_eq!(m.cohesion, before.cohesion);
    }

    #[test]
    fn test_history_drops_oldest_at_cap() {
        let mut history = MetricsHistory::default();
        for turn in 0..150 {
            history.push(turn, SocietyMetrics::default());
        }
        assert_eq!(history.len(), METRICS_HISTORY_CAP);
        assert_eq!(history.first().map(|s| s.turn), Some(50));
        assert_eq!(history.last().map(|s| s.turn), Some(149));
    }
}
