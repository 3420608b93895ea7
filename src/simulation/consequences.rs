//! Consequence application - mutate the society after an evaluation

use super::evaluate::Evaluation;
use crate::events::EventDefinition;
use crate::society::{LogKind, MicroSociety};

/// Apply an event's consequences to the society in place
///
/// Success rewards every recorded contributor; failure penalizes the whole
/// living population. Metric deltas clamp to [0, 100] and unknown metric
/// keys are ignored.
pub fn apply_consequences(
    society: &mut MicroSociety,
    event: &EventDefinition,
    evaluation: &Evaluation,
) {
    let deltas = if evaluation.success {
        &event.on_success
    } else {
        &event.on_failure
    };
    for (metric, delta) in deltas {
        society.metrics.apply_delta(metric, *delta);
    }

    if evaluation.success {
        for contributor in &evaluation.contributors {
            if let Some(being) = society.beings.iter_mut().find(|b| b.id == contributor.being) {
                being.reward();
            }
        }
    } else {
        for being in society.beings.iter_mut().filter(|b| b.alive) {
            being.penalize();
        }
    }

    let percentage = (evaluation.success_rate * 100.0).round();
    let (kind, verdict) = if evaluation.success {
        (LogKind::Success, "superado")
    } else {
        (LogKind::Failure, "fracasado")
    };
    society.log(
        kind,
        format!("{} {} — {verdict} ({percentage:.0}%)", event.icon, event.name),
    );

    tracing::debug!(
        society = %society.name,
        event = %event.name,
        success = evaluation.success,
        rate = evaluation.success_rate,
        "consequences applied"
    );
}
