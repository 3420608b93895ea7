//! Culling - soft-remove underperforming beings
//!
//! The population floor is checked once before the pass, not per removal:
//! a single pass starting above the floor can finish below it. This mirrors
//! the observed product behavior and is documented in the tests rather than
//! tightened here.

use crate::core::config::{CULL_FITNESS_THRESHOLD, POPULATION_FLOOR};
use crate::society::{LogKind, MicroSociety};

/// Mark every living being below the fitness threshold as dead
///
/// No-op when the living population is at or below the floor. Returns the
/// number of beings culled.
pub fn cull(society: &mut MicroSociety) -> usize {
    if society.alive_count() <= POPULATION_FLOOR {
        return 0;
    }

    let mut victims = Vec::new();
    for being in society.beings.iter_mut() {
        if being.alive && being.fitness < CULL_FITNESS_THRESHOLD {
            being.alive = false;
            victims.push((being.name.clone(), being.fitness));
        }
    }

    for (name, fitness) in &victims {
        society.log(
            LogKind::Info,
            format!("💀 {name} ha muerto (aptitud {fitness:.0})"),
        );
        tracing::debug!(society = %society.name, being = %name, fitness, "being culled");
    }

    victims.len()
}
