//! Society response evaluation
//!
//! Aggregates attribute contributions of the living population against an
//! event's thresholds and decides success or failure.

use crate::being::Being;
use crate::core::config::{CONTRIBUTOR_SHARE, SUCCESS_RATE_THRESHOLD};
use crate::core::types::BeingId;
use crate::events::EventDefinition;

/// A being whose individual contribution covered a meaningful share of an
/// attribute threshold. Recorded even when the group met the threshold
/// without it, so rewards can be handed out afterwards.
#[derive(Debug, Clone)]
pub struct Contributor {
    pub being: BeingId,
    pub name: String,
    pub attribute: String,
    pub contribution: f32,
}

/// Outcome of evaluating a society's response to an event
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub success: bool,
    pub success_rate: f32,
    pub total_score: f32,
    pub required_score: f32,
    pub contributors: Vec<Contributor>,
}

impl Evaluation {
    fn failed_empty() -> Self {
        Self {
            success: false,
            success_rate: 0.0,
            total_score: 0.0,
            required_score: 0.0,
            contributors: Vec::new(),
        }
    }
}

/// Evaluate how the living population responds to an event
///
/// Per required attribute, contributions of all living beings are summed and
/// clipped at the threshold (surplus does not over-count). The success rate
/// is the clipped total over the required total; the society succeeds at
/// 70% or better.
pub fn evaluate_response(event: &EventDefinition, beings: &[Being]) -> Evaluation {
    let alive: Vec<&Being> = beings.iter().filter(|b| b.alive).collect();
    if alive.is_empty() {
        return Evaluation::failed_empty();
    }

    // Stable attribute order keeps contributor lists reproducible
    let mut required: Vec<(&String, f32)> = event
        .required_attributes
        .iter()
        .map(|(k, v)| (k, *v))
        .collect();
    required.sort_by(|a, b| a.0.cmp(b.0));

    let mut total_score = 0.0;
    let mut required_score = 0.0;
    let mut contributors = Vec::new();

    for (attribute, threshold) in required {
        let mut attribute_sum = 0.0;
        for being in &alive {
            let contribution = being.attribute(attribute);
            attribute_sum += contribution;
            if contribution >= CONTRIBUTOR_SHARE * threshold {
                contributors.push(Contributor {
                    being: being.id,
                    name: being.name.clone(),
                    attribute: attribute.clone(),
                    contribution,
                });
            }
        }
        // Surplus beyond the threshold does not over-count
        total_score += attribute_sum.min(threshold);
        required_score += threshold;
    }

    let success_rate = if required_score > 0.0 {
        total_score / required_score
    } else {
        1.0
    };

    Evaluation {
        success: success_rate >= SUCCESS_RATE_THRESHOLD,
        success_rate,
        total_score,
        required_score,
        contributors,
    }
}
