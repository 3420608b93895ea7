//! Divine interventions - player-triggered, cost-gated society modifiers
//!
//! Interventions spend divine points, sit on per-intervention cooldowns and
//! go through a precondition gate that never throws: misuse comes back as a
//! structured rejection with a user-facing message.

mod catalog;
mod gate;
mod state;

pub use catalog::{DivineIntervention, InterventionCatalog, InterventionCategory, InterventionKind};
pub use gate::{InterventionGate, InterventionOutcome};
pub use state::{Cooldown, InterventionRecord, InterventionState, StateStore};
