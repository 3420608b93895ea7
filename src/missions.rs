//! Mission-progress collaborator interface
//!
//! The reward/mission system lives outside the simulation core. The
//! scheduler notifies it once per turn through this trait; injecting
//! `NullMissionTracker` keeps the core fully standalone.

use crate::events::EventKind;
use crate::society::MicroSociety;

/// What the mission system learns about a finished turn
#[derive(Debug, Clone, Copy)]
pub struct TurnOutcome {
    pub event_kind: EventKind,
    pub success: bool,
}

/// External mission-progress collaborator, notified once per turn
pub trait MissionTracker {
    fn update_progress(&mut self, society: &MicroSociety, outcome: &TurnOutcome);
}

/// Default collaborator used when no mission system is attached
#[derive(Debug, Default)]
pub struct NullMissionTracker;

impl MissionTracker for NullMissionTracker {
    fn update_progress(&mut self, _society: &MicroSociety, _outcome: &TurnOutcome) {}
}
