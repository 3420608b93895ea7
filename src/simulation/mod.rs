//! Simulation systems - one discrete turn per invocation
//!
//! The systems are free functions over the society, in dependency order:
//! evaluate -> consequences -> hybridize -> cull, orchestrated by
//! `scheduler::process_turn`.

pub mod consequences;
pub mod cull;
pub mod evaluate;
pub mod hybridize;
pub mod scheduler;

pub use consequences::apply_consequences;
pub use cull::cull;
pub use evaluate::{evaluate_response, Contributor, Evaluation};
pub use hybridize::{hybridize, hybridize_society};
pub use scheduler::{process_turn, TurnReport};
