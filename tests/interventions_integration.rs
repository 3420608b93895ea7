//! Integration tests for the divine intervention economy

use microsocieties::being::Being;
use microsocieties::events::EventCatalog;
use microsocieties::interventions::{InterventionGate, StateStore};
use microsocieties::missions::NullMissionTracker;
use microsocieties::simulation::process_turn;
use microsocieties::society::MicroSociety;

fn cast() -> Vec<Being> {
    vec![
        Being::seed("Aria Luz", &[("wisdom", 60.0), ("empathy", 50.0)]),
        Being::seed("Teo Mar", &[("courage", 55.0), ("strength", 45.0)]),
        Being::seed("Nia Sol", &[("knowledge", 65.0), ("curiosity", 60.0)]),
        Being::seed("Vera Pax", &[("harmony", 70.0), ("wisdom", 40.0)]),
    ]
}

fn society() -> MicroSociety {
    MicroSociety::new("Prueba", "florecer", cast(), 17)
}

#[test]
fn test_resurrection_after_a_death() {
    let mut gate = InterventionGate::new();
    let mut s = society();
    let events = EventCatalog::with_defaults();
    let mut tracker = NullMissionTracker;

    s.beings[2].alive = false;
    let before = gate.points();

    let outcome = gate.use_intervention("resurrect", &mut s, &events, &mut tracker);
    assert!(outcome.success, "{}", outcome.message);
    assert!(s.beings[2].alive);
    assert_eq!(s.beings[2].fitness, 50.0);
    assert_eq!(gate.points(), before - 3);
    assert_eq!(gate.history().len(), 1);
    assert_eq!(gate.history()[0].id, "resurrect");

    // A second resurrection has no corpse to work on: rejected before the
    // cooldown is even consulted, nothing further is spent
    let outcome = gate.use_intervention("resurrect", &mut s, &events, &mut tracker);
    assert!(!outcome.success);
    assert_eq!(outcome.message, "No hay seres muertos");
    assert_eq!(gate.points(), before - 3);
}

#[test]
fn test_state_survives_gate_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("divine-interventions.json");
    let events = EventCatalog::with_defaults();
    let mut tracker = NullMissionTracker;

    {
        let mut gate = InterventionGate::with_store(StateStore::new(&path));
        let mut s = society();
        let outcome = gate.use_intervention("bless", &mut s, &events, &mut tracker);
        assert!(outcome.success);
        assert_eq!(gate.points(), 3);
    }

    // A fresh gate over the same store sees the spent points, the history
    // and the still-armed cooldown
    let gate = InterventionGate::with_store(StateStore::new(&path));
    assert_eq!(gate.points(), 3);
    assert_eq!(gate.history().len(), 1);
    assert_eq!(gate.cooldown_remaining("bless", 0), 10);
}

#[test]
fn test_cooldown_expires_with_the_turns() {
    let mut gate = InterventionGate::new();
    let mut s = society();
    // Benign catalog: turns pass without any risk of collapse
    let events = EventCatalog::from_toml_str(
        r#"
        [[events]]
        kind = "positive"
        name = "Día Tranquilo"
        description = "Sin sobresaltos"
        icon = "🌤️"

        [events.required_attributes]
        wisdom = 10.0

        [events.on_success]
        cohesion = 1.0
    "#,
    )
    .unwrap();
    let mut tracker = NullMissionTracker;

    let outcome = gate.use_intervention("inspire", &mut s, &events, &mut tracker);
    assert!(outcome.success);

    // Still cooling down mid-way
    for _ in 0..5 {
        process_turn(&mut s, &events, &mut tracker);
    }
    let outcome = gate.use_intervention("inspire", &mut s, &events, &mut tracker);
    assert!(!outcome.success);
    assert!(outcome.message.contains("enfriamiento"));

    // After the full cooldown the intervention is available again
    for _ in 0..5 {
        process_turn(&mut s, &events, &mut tracker);
    }
    assert_eq!(gate.cooldown_remaining("inspire", s.turn()), 0);
    let outcome = gate.use_intervention("inspire", &mut s, &events, &mut tracker);
    assert!(outcome.success, "{}", outcome.message);
}

#[test]
fn test_economy_drains_and_regenerates() {
    let mut gate = InterventionGate::new();
    let mut s = society();
    let events = EventCatalog::from_toml_str(
        r#"
        [[events]]
        kind = "positive"
        name = "Día Tranquilo"
        description = "Sin sobresaltos"
        icon = "🌤️"

        [events.required_attributes]
        wisdom = 10.0

        [events.on_success]
        cohesion = 1.0
    "#,
    )
    .unwrap();
    let mut tracker = NullMissionTracker;

    // Drain: bless (2) + resurrect is blocked, so use heal (2) + inspire (1)
    assert!(gate.use_intervention("bless", &mut s, &events, &mut tracker).success);
    assert!(gate.use_intervention("heal", &mut s, &events, &mut tracker).success);
    assert!(gate.use_intervention("inspire", &mut s, &events, &mut tracker).success);
    assert_eq!(gate.points(), 0);

    // Broke: even the cheapest intervention bounces
    let outcome = gate.use_intervention("skip_turns", &mut s, &events, &mut tracker);
    assert!(!outcome.success);
    assert!(outcome.message.contains("insuficientes"));

    // One point comes back every 20 turns
    for _ in 0..20 {
        process_turn(&mut s, &events, &mut tracker);
        gate.regenerate_points(&s);
    }
    assert_eq!(gate.points(), 1);
    for _ in 0..20 {
        process_turn(&mut s, &events, &mut tracker);
        gate.regenerate_points(&s);
    }
    assert_eq!(gate.points(), 2);
}

#[test]
fn test_force_hybridization_grows_population() {
    let mut gate = InterventionGate::new();
    let mut s = society();
    let events = EventCatalog::with_defaults();
    let mut tracker = NullMissionTracker;
    let before = s.beings.len();

    let outcome = gate.use_intervention("force_hybridization", &mut s, &events, &mut tracker);
    assert!(outcome.success, "{}", outcome.message);
    assert_eq!(s.beings.len(), before + 1);
    assert_eq!(outcome.affected.as_deref(), s.beings.last().map(|b| b.name.as_str()));
}
