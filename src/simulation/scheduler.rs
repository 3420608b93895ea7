//! Turn scheduler - one atomic simulation step
//!
//! `process_turn` runs to completion before a driver can fire the next
//! tick, so turns never interleave for the same society. The exclusive
//! borrow enforces this at compile time.

use super::consequences::apply_consequences;
use super::cull::cull;
use super::evaluate::evaluate_response;
use super::hybridize::hybridize_society;
use crate::core::config::HYBRIDIZATION_PERIOD;
use crate::core::types::Turn;
use crate::events::{EventCatalog, EventKind};
use crate::missions::{MissionTracker, TurnOutcome};
use crate::society::{LogKind, MicroSociety};

/// What happened during one turn, for drivers and UI
#[derive(Debug, Clone)]
pub struct TurnReport {
    pub turn: Turn,
    pub event_name: String,
    pub event_kind: EventKind,
    pub success: bool,
    pub success_rate: f32,
    pub game_over: bool,
}

/// Advance the society by exactly one turn
///
/// Draw an event, evaluate the response, apply consequences, hybridize on
/// the period, cull, snapshot, notify the mission tracker and check the
/// terminal condition. Collapse (health at zero or full extinction) pauses
/// the society; there is no victory state.
pub fn process_turn(
    society: &mut MicroSociety,
    catalog: &EventCatalog,
    tracker: &mut dyn MissionTracker,
) -> TurnReport {
    society.turn += 1;

    let event = catalog.pick_random(&mut society.rng).clone();
    let evaluation = evaluate_response(&event, &society.beings);
    apply_consequences(society, &event, &evaluation);

    if society.turn % HYBRIDIZATION_PERIOD == 0 {
        hybridize_society(society);
    }

    cull(society);

    society.metrics_history.push(society.turn, society.metrics);

    let outcome = TurnOutcome {
        event_kind: event.kind,
        success: evaluation.success,
    };
    tracker.update_progress(society, &outcome);

    let game_over = society.metrics.health <= 0.0 || society.alive_count() == 0;
    if game_over {
        society.pause();
        society.log(
            LogKind::Critical,
            format!("💥 La sociedad '{}' ha colapsado", society.name),
        );
        tracing::info!(society = %society.name, turn = society.turn, "society collapsed");
    }

    tracing::debug!(
        society = %society.name,
        turn = society.turn,
        event = %event.name,
        success = evaluation.success,
        alive = society.alive_count(),
        "turn processed"
    );

    TurnReport {
        turn: society.turn,
        event_name: event.name,
        event_kind: event.kind,
        success: evaluation.success,
        success_rate: evaluation.success_rate,
        game_over,
    }
}
