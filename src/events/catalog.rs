//! Event catalog - the fixed table of events a society can face
//!
//! Ships with built-in defaults and can also be loaded from a TOML file in
//! the same shape (see data/events.toml).

use std::path::Path;

use ahash::AHashMap;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use super::{EventDefinition, EventKind};
use crate::core::error::{Result, SimError};

/// Immutable table of possible events
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<EventDefinition>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    events: Vec<EventDefinition>,
}

impl EventCatalog {
    /// The built-in catalog observed in the live product
    pub fn with_defaults() -> Self {
        Self {
            events: default_events(),
        }
    }

    /// Load a catalog from TOML text, validating it is usable
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        if file.events.is_empty() {
            return Err(SimError::InvalidCatalog("no events defined".into()));
        }
        for event in &file.events {
            if event.name.trim().is_empty() {
                return Err(SimError::InvalidCatalog("event with empty name".into()));
            }
            if event.required_attributes.is_empty() {
                return Err(SimError::InvalidCatalog(format!(
                    "event '{}' requires no attributes",
                    event.name
                )));
            }
            if let Some((attr, _)) = event
                .required_attributes
                .iter()
                .find(|(_, threshold)| **threshold <= 0.0)
            {
                return Err(SimError::InvalidCatalog(format!(
                    "event '{}' has non-positive threshold for '{attr}'",
                    event.name
                )));
            }
        }
        Ok(Self { events: file.events })
    }

    /// Load a catalog from a TOML file on disk
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Uniform random draw over the catalog
    pub fn pick_random(&self, rng: &mut impl Rng) -> &EventDefinition {
        self.events
            .choose(rng)
            .expect("catalog constructors reject empty event lists")
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventDefinition> {
        self.events.iter()
    }
}

fn def(
    kind: EventKind,
    icon: &str,
    name: &str,
    description: &str,
    required: &[(&str, f32)],
    on_success: &[(&str, f32)],
    on_failure: &[(&str, f32)],
) -> EventDefinition {
    let to_map = |pairs: &[(&str, f32)]| -> AHashMap<String, f32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    };
    EventDefinition {
        kind,
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        required_attributes: to_map(required),
        on_success: to_map(on_success),
        on_failure: to_map(on_failure),
    }
}

fn default_events() -> Vec<EventDefinition> {
    use EventKind::*;

    vec![
        def(
            Crisis,
            "🔥",
            "Crisis de Recursos",
            "Las reservas se agotan y la sociedad debe racionar con sabiduría.",
            &[("wisdom", 60.0), ("cooperation", 40.0)],
            &[("health", 5.0), ("cohesion", 5.0)],
            &[("health", -15.0), ("cohesion", -5.0)],
        ),
        def(
            Crisis,
            "🌵",
            "Sequía Prolongada",
            "Meses sin lluvia ponen a prueba la previsión de la comunidad.",
            &[("resilience", 50.0), ("knowledge", 30.0)],
            &[("health", 6.0), ("action", 4.0)],
            &[("health", -12.0), ("action", -5.0)],
        ),
        def(
            Threat,
            "🦠",
            "Epidemia",
            "Una enfermedad desconocida se propaga entre los seres.",
            &[("knowledge", 70.0)],
            &[("health", 8.0), ("knowledge", 4.0)],
            &[("health", -20.0)],
        ),
        def(
            Crisis,
            "⚔️",
            "Conflicto Interno",
            "Dos facciones disputan el rumbo de la sociedad.",
            &[("empathy", 60.0), ("wisdom", 40.0)],
            &[("cohesion", 10.0)],
            &[("cohesion", -15.0), ("health", -5.0)],
        ),
        def(
            Opportunity,
            "🔬",
            "Descubrimiento Científico",
            "Un hallazgo inesperado podría cambiar la forma de vivir.",
            &[("curiosity", 50.0), ("knowledge", 40.0)],
            &[("knowledge", 15.0), ("action", 5.0)],
            &[("knowledge", -3.0)],
        ),
        def(
            Positive,
            "🎉",
            "Festival de la Cosecha",
            "La abundancia invita a celebrar juntos.",
            &[("cooperation", 40.0)],
            &[("cohesion", 10.0), ("health", 5.0)],
            &[("cohesion", -3.0)],
        ),
        def(
            Threat,
            "🛡️",
            "Invasión Externa",
            "Fuerzas hostiles amenazan las fronteras.",
            &[("courage", 70.0), ("strength", 50.0)],
            &[("cohesion", 8.0), ("action", 5.0)],
            &[("health", -18.0), ("cohesion", -8.0)],
        ),
        def(
            Challenge,
            "⚖️",
            "Dilema Ético",
            "Una decisión difícil divide las conciencias.",
            &[("wisdom", 50.0), ("empathy", 50.0)],
            &[("cohesion", 8.0), ("knowledge", 5.0)],
            &[("cohesion", -10.0)],
        ),
        def(
            Transformation,
            "🧭",
            "Gran Migración",
            "La sociedad debe decidir si abandona su territorio.",
            &[("vision", 60.0), ("courage", 40.0)],
            &[("action", 12.0), ("knowledge", 5.0)],
            &[("health", -10.0), ("action", -5.0)],
        ),
        def(
            Transformation,
            "🎨",
            "Renacimiento Cultural",
            "Una ola creativa transforma las costumbres.",
            &[("creativity", 60.0)],
            &[("knowledge", 10.0), ("cohesion", 8.0)],
            &[("action", -5.0)],
        ),
        def(
            Crisis,
            "🌪️",
            "Tormenta Devastadora",
            "Un temporal destruye refugios y cosechas.",
            &[("resilience", 60.0), ("cooperation", 40.0)],
            &[("health", 4.0), ("action", 6.0)],
            &[("health", -15.0), ("action", -8.0)],
        ),
        def(
            Opportunity,
            "🤝",
            "Encuentro con Extraños",
            "Viajeros desconocidos ofrecen intercambio.",
            &[("empathy", 55.0), ("wisdom", 35.0)],
            &[("knowledge", 8.0), ("cohesion", 6.0)],
            &[("cohesion", -6.0), ("health", -4.0)],
        ),
        def(
            Challenge,
            "📚",
            "Escasez de Conocimiento",
            "Los saberes antiguos se pierden sin nuevos guardianes.",
            &[("curiosity", 45.0), ("knowledge", 55.0)],
            &[("knowledge", 12.0)],
            &[("knowledge", -8.0), ("action", -4.0)],
        ),
        def(
            Positive,
            "✨",
            "Despertar Espiritual",
            "Una calma profunda une a la comunidad.",
            &[("harmony", 50.0), ("wisdom", 45.0)],
            &[("cohesion", 12.0), ("health", 6.0)],
            &[("cohesion", -4.0)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_catalog_has_fourteen_events() {
        let catalog = EventCatalog::with_defaults();
        assert_eq!(catalog.len(), 14);
    }

    #[test]
    fn test_default_events_have_positive_thresholds() {
        let catalog = EventCatalog::with_defaults();
        for event in catalog.iter() {
            assert!(!event.required_attributes.is_empty(), "{}", event.name);
            for (attr, threshold) in &event.required_attributes {
                assert!(*threshold > 0.0, "{}/{attr}", event.name);
            }
        }
    }

    #[test]
    fn test_pick_random_is_deterministic_with_seed() {
        let catalog = EventCatalog::with_defaults();
        let mut rng_a = ChaCha8Rng::seed_from_u64(7);
        let mut rng_b = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(
                catalog.pick_random(&mut rng_a).name,
                catalog.pick_random(&mut rng_b).name
            );
        }
    }

    #[test]
    fn test_from_toml_str() {
        let toml = r#"
            [[events]]
            kind = "crisis"
            name = "Prueba"
            description = "Un evento de prueba"
            icon = "🧪"

            [events.required_attributes]
            wisdom = 60.0

            [events.on_success]
            health = 5.0

            [events.on_failure]
            health = -10.0
            vitality = -3.0
        "#;
        let catalog = EventCatalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.len(), 1);
        let event = catalog.iter().next().unwrap();
        assert_eq!(event.kind, EventKind::Crisis);
        // Unknown metric keys survive parsing; they are ignored at apply time
        assert_eq!(event.on_failure.get("vitality"), Some(&-3.0));
    }

    #[test]
    fn test_from_toml_rejects_empty_catalog() {
        assert!(EventCatalog::from_toml_str("events = []").is_err());
    }

    #[test]
    fn test_from_toml_rejects_non_positive_threshold() {
        let toml = r#"
            [[events]]
            kind = "crisis"
            name = "Prueba"
            description = "x"
            icon = "x"

            [events.required_attributes]
            wisdom = 0.0
        "#;
        assert!(EventCatalog::from_toml_str(toml).is_err());
    }
}
