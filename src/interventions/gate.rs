//! Intervention gate - preconditions, cost and cooldown economy
//!
//! Preconditions are checked in a fixed order and the first failure
//! short-circuits with a descriptive rejection, leaving state untouched.
//! Only a structurally-successful effect consumes points and registers a
//! cooldown.

use rand::Rng;

use super::catalog::{InterventionCatalog, InterventionKind};
use super::state::{Cooldown, InterventionState, StateStore};
use crate::core::config::{
    BLESS_FITNESS_BONUS, HEAL_HEALTH_BONUS, INSPIRE_METRIC_BONUS, MAX_DIVINE_POINTS, MUTATE_BOOST,
    POINT_REGEN_PERIOD, SKIP_TURNS_COUNT,
};
use crate::core::types::Turn;
use crate::events::EventCatalog;
use crate::missions::MissionTracker;
use crate::simulation::hybridize::hybridize_society;
use crate::simulation::scheduler::process_turn;
use crate::society::{LogKind, MicroSociety};

/// Result of attempting an intervention. Never an error: rejections carry a
/// user-facing message and leave all state untouched.
#[derive(Debug, Clone)]
pub struct InterventionOutcome {
    pub success: bool,
    pub message: String,
    /// Name of the being created or affected, when there is one
    pub affected: Option<String>,
}

impl InterventionOutcome {
    fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            affected: None,
        }
    }

    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            affected: None,
        }
    }

    fn ok_with(message: impl Into<String>, affected: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            affected: Some(affected.into()),
        }
    }
}

/// Gate holding the player's intervention resources
pub struct InterventionGate {
    catalog: InterventionCatalog,
    state: InterventionState,
    store: Option<StateStore>,
}

impl Default for InterventionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl InterventionGate {
    /// In-memory gate with the default catalog
    pub fn new() -> Self {
        Self {
            catalog: InterventionCatalog::with_defaults(),
            state: InterventionState::default(),
            store: None,
        }
    }

    /// Gate backed by a JSON state file; loads existing state best-effort
    pub fn with_store(store: StateStore) -> Self {
        let state = store.load();
        Self {
            catalog: InterventionCatalog::with_defaults(),
            state,
            store: Some(store),
        }
    }

    pub fn catalog(&self) -> &InterventionCatalog {
        &self.catalog
    }

    pub fn points(&self) -> u32 {
        self.state.divine_points
    }

    pub fn history(&self) -> &[super::state::InterventionRecord] {
        &self.state.history
    }

    /// Turns left on an intervention's cooldown at the given turn
    pub fn cooldown_remaining(&self, id: &str, current_turn: Turn) -> u64 {
        self.state
            .cooldowns
            .get(id)
            .map(|cd| cd.remaining(current_turn))
            .unwrap_or(0)
    }

    /// Attempt an intervention against a society
    pub fn use_intervention(
        &mut self,
        id: &str,
        society: &mut MicroSociety,
        events: &EventCatalog,
        tracker: &mut dyn MissionTracker,
    ) -> InterventionOutcome {
        let Some(entry) = self.catalog.get(id) else {
            return InterventionOutcome::rejected("Intervención desconocida");
        };
        let entry = entry.clone();

        if self.state.divine_points < entry.cost {
            return InterventionOutcome::rejected(format!(
                "Puntos divinos insuficientes ({}/{})",
                self.state.divine_points, entry.cost
            ));
        }

        let turn = society.turn();
        self.state.evict_expired(turn);
        if let Some(cd) = self.state.cooldowns.get(id) {
            return InterventionOutcome::rejected(format!(
                "{} en enfriamiento ({} turnos restantes)",
                entry.name,
                cd.remaining(turn)
            ));
        }

        if entry.requires_dead && society.dead_beings().next().is_none() {
            return InterventionOutcome::rejected("No hay seres muertos");
        }

        let outcome = apply_effect(entry.kind, society, events, tracker);
        if !outcome.success {
            return outcome;
        }

        // Key the cooldown by the turn after the effect ran; skip-turns
        // advances the clock before its cooldown starts
        let turn = society.turn();
        self.state.divine_points -= entry.cost;
        self.state.cooldowns.insert(
            id.to_string(),
            Cooldown {
                start_turn: turn,
                duration: entry.cooldown,
            },
        );
        self.state.record(id, turn, &society.name);
        self.persist();

        tracing::info!(
            intervention = id,
            society = %society.name,
            turn,
            points_left = self.state.divine_points,
            "intervention applied"
        );
        outcome
    }

    /// Passive regeneration: one point every 20 turns, capped.
    /// Invoked by the driver once per turn, not scheduled internally.
    pub fn regenerate_points(&mut self, society: &MicroSociety) {
        let turn = society.turn();
        if turn == 0 || turn % POINT_REGEN_PERIOD != 0 {
            return;
        }
        if self.state.divine_points < MAX_DIVINE_POINTS {
            self.state.divine_points += 1;
            self.persist();
            tracing::debug!(points = self.state.divine_points, turn, "divine point regenerated");
        }
    }

    fn persist(&self) {
        if let Some(store) = &self.store {
            store.save(&self.state);
        }
    }
}

fn apply_effect(
    kind: InterventionKind,
    society: &mut MicroSociety,
    events: &EventCatalog,
    tracker: &mut dyn MissionTracker,
) -> InterventionOutcome {
    match kind {
        InterventionKind::Bless => {
            let mut blessed = 0;
            for being in society.beings.iter_mut().filter(|b| b.alive) {
                being.fitness = (being.fitness + BLESS_FITNESS_BONUS).min(100.0);
                blessed += 1;
            }
            if blessed == 0 {
                return InterventionOutcome::rejected("No hay seres vivos");
            }
            society.log(LogKind::Info, "🙌 Una bendición divina fortalece a la sociedad");
            InterventionOutcome::ok(format!("Bendición concedida a {blessed} seres"))
        }

        InterventionKind::Heal => {
            society.metrics.apply_delta("health", HEAL_HEALTH_BONUS);
            society.log(LogKind::Info, "💚 Las aguas sanadoras restauran la salud");
            InterventionOutcome::ok("La salud de la sociedad mejora")
        }

        InterventionKind::Inspire => {
            society.metrics.apply_delta("knowledge", INSPIRE_METRIC_BONUS);
            society.metrics.apply_delta("cohesion", INSPIRE_METRIC_BONUS);
            society.log(LogKind::Info, "💡 Una ola de inspiración recorre la sociedad");
            InterventionOutcome::ok("Conocimiento y cohesión aumentan")
        }

        InterventionKind::Resurrect => {
            // Oldest lineage first: the lowest-generation dead being returns
            let target = society
                .beings
                .iter_mut()
                .filter(|b| !b.alive)
                .min_by_key(|b| b.generation);
            let Some(being) = target else {
                return InterventionOutcome::rejected("No hay seres muertos");
            };
            being.revive();
            let name = being.name.clone();
            society.log(LogKind::Info, format!("⚡ {name} ha resucitado"));
            InterventionOutcome::ok_with(format!("{name} vuelve a la vida"), name)
        }

        InterventionKind::Mutate => {
            let candidates: Vec<usize> = society
                .beings
                .iter()
                .enumerate()
                .filter(|(_, b)| b.alive && !b.attributes.is_empty())
                .map(|(i, _)| i)
                .collect();
            if candidates.is_empty() {
                return InterventionOutcome::rejected("No hay seres vivos con atributos");
            }
            let pick = candidates[society.rng.gen_range(0..candidates.len())];

            // Stable key order keeps seeded runs reproducible
            let mut keys: Vec<String> = society.beings[pick].attributes.keys().cloned().collect();
            keys.sort();
            let attribute = keys[society.rng.gen_range(0..keys.len())].clone();

            let being = &mut society.beings[pick];
            if let Some(value) = being.attributes.get_mut(&attribute) {
                *value *= MUTATE_BOOST;
            }
            let name = being.name.clone();
            society.log(
                LogKind::Info,
                format!("🧬 {name} ha mutado: {attribute} se intensifica"),
            );
            InterventionOutcome::ok_with(format!("{name} muta su {attribute}"), name)
        }

        InterventionKind::ForceHybridization => match hybridize_society(society) {
            Some(id) => {
                let name = society
                    .beings
                    .iter()
                    .find(|b| b.id == id)
                    .map(|b| b.name.clone())
                    .unwrap_or_default();
                InterventionOutcome::ok_with(format!("Ha nacido {name}"), name)
            }
            None => InterventionOutcome::rejected("Se necesitan al menos 2 seres vivos"),
        },

        InterventionKind::SkipTurns => {
            // Intentionally synchronous and blocking: five turns run
            // back-to-back with no intermediate UI updates
            let mut advanced = 0;
            for _ in 0..SKIP_TURNS_COUNT {
                let report = process_turn(society, events, tracker);
                advanced += 1;
                if report.game_over {
                    break;
                }
            }
            InterventionOutcome::ok(format!("⏩ {advanced} turnos avanzados"))
        }
    }
}
