//! Randomized society events
//!
//! Each turn the scheduler draws one event from the catalog and the society
//! either meets its attribute thresholds or suffers the consequences.

mod catalog;

pub use catalog::EventCatalog;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Broad category of a randomized event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Crisis,
    Opportunity,
    Challenge,
    Positive,
    Threat,
    Transformation,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Crisis => "crisis",
            Self::Opportunity => "opportunity",
            Self::Challenge => "challenge",
            Self::Positive => "positive",
            Self::Threat => "threat",
            Self::Transformation => "transformation",
        };
        write!(f, "{label}")
    }
}

/// A static, immutable event the society can face
///
/// Metric deltas are keyed by name ("health", "knowledge", "action",
/// "cohesion"); unknown keys are carried through and ignored when applied,
/// so hand-edited catalogs cannot crash a running society.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDefinition {
    pub kind: EventKind,
    pub name: String,
    pub description: String,
    pub icon: String,
    /// Attribute thresholds the living population must cover in aggregate
    pub required_attributes: AHashMap<String, f32>,
    #[serde(default)]
    pub on_success: AHashMap<String, f32>,
    #[serde(default)]
    pub on_failure: AHashMap<String, f32>,
}
