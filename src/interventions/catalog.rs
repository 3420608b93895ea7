//! Static catalog of divine interventions

use serde::{Deserialize, Serialize};

/// Which effect an intervention performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionKind {
    Bless,
    Resurrect,
    Mutate,
    ForceHybridization,
    SkipTurns,
    Heal,
    Inspire,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterventionCategory {
    Blessing,
    Miracle,
    Evolution,
    Time,
}

/// One catalog entry
#[derive(Debug, Clone)]
pub struct DivineIntervention {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub cost: u32,
    /// Cooldown in society turns
    pub cooldown: u64,
    pub category: InterventionCategory,
    /// Gate precondition: at least one dead being must exist
    pub requires_dead: bool,
    pub kind: InterventionKind,
}

/// Immutable table of available interventions
#[derive(Debug, Clone)]
pub struct InterventionCatalog {
    entries: Vec<DivineIntervention>,
}

impl InterventionCatalog {
    pub fn with_defaults() -> Self {
        use InterventionCategory::*;
        use InterventionKind::*;

        Self {
            entries: vec![
                DivineIntervention {
                    id: "bless",
                    name: "Bendición",
                    icon: "🙌",
                    cost: 2,
                    cooldown: 10,
                    category: Blessing,
                    requires_dead: false,
                    kind: Bless,
                },
                DivineIntervention {
                    id: "heal",
                    name: "Sanación",
                    icon: "💚",
                    cost: 2,
                    cooldown: 15,
                    category: Blessing,
                    requires_dead: false,
                    kind: Heal,
                },
                DivineIntervention {
                    id: "inspire",
                    name: "Inspiración",
                    icon: "💡",
                    cost: 1,
                    cooldown: 10,
                    category: Blessing,
                    requires_dead: false,
                    kind: Inspire,
                },
                DivineIntervention {
                    id: "resurrect",
                    name: "Resurrección",
                    icon: "⚡",
                    cost: 3,
                    cooldown: 25,
                    category: Miracle,
                    requires_dead: true,
                    kind: Resurrect,
                },
                DivineIntervention {
                    id: "mutate",
                    name: "Mutación",
                    icon: "🧬",
                    cost: 2,
                    cooldown: 15,
                    category: Evolution,
                    requires_dead: false,
                    kind: Mutate,
                },
                DivineIntervention {
                    id: "force_hybridization",
                    name: "Hibridación Forzada",
                    icon: "🔗",
                    cost: 3,
                    cooldown: 20,
                    category: Evolution,
                    requires_dead: false,
                    kind: ForceHybridization,
                },
                DivineIntervention {
                    id: "skip_turns",
                    name: "Salto Temporal",
                    icon: "⏩",
                    cost: 1,
                    cooldown: 10,
                    category: Time,
                    requires_dead: false,
                    kind: SkipTurns,
                },
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&DivineIntervention> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DivineIntervention> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
