//! Property tests for the simulation invariants
//!
//! Whatever the seed, the cast or the sequence of events: metrics stay in
//! [0, 100], fitness stays in [0, 100], histories stay bounded and hybrid
//! children never carry negative attributes.

use proptest::prelude::*;

use microsocieties::being::Being;
use microsocieties::events::EventCatalog;
use microsocieties::missions::NullMissionTracker;
use microsocieties::simulation::{evaluate_response, hybridize, process_turn};
use microsocieties::society::{MicroSociety, SocietyMetrics};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #[test]
    fn metrics_stay_clamped_under_arbitrary_deltas(
        deltas in prop::collection::vec(
            (prop::sample::select(vec!["health", "knowledge", "action", "cohesion", "vitality"]),
             -200.0f32..200.0),
            0..60,
        )
    ) {
        let mut metrics = SocietyMetrics::default();
        for (metric, delta) in deltas {
            metrics.apply_delta(metric, delta);
            for value in [metrics.health, metrics.knowledge, metrics.action, metrics.cohesion] {
                prop_assert!((0.0..=100.0).contains(&value));
            }
        }
    }

    #[test]
    fn full_runs_never_break_bounds(
        seed in any::<u64>(),
        turns in 1usize..80,
        fitnesses in prop::collection::vec(0.0f32..100.0, 2..10),
    ) {
        let beings: Vec<Being> = fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| {
                let mut b = Being::seed(
                    format!("Ser {i}"),
                    &[("wisdom", 30.0), ("courage", 25.0), ("knowledge", 20.0)],
                );
                b.fitness = f;
                b
            })
            .collect();
        let mut society = MicroSociety::new("Azar", "resistir", beings, seed);
        let catalog = EventCatalog::with_defaults();
        let mut tracker = NullMissionTracker;

        let mut previous_turn = 0;
        for _ in 0..turns {
            let report = process_turn(&mut society, &catalog, &mut tracker);
            prop_assert_eq!(report.turn, previous_turn + 1);
            previous_turn = report.turn;

            let m = &society.metrics;
            for value in [m.health, m.knowledge, m.action, m.cohesion] {
                prop_assert!((0.0..=100.0).contains(&value));
            }
            for being in &society.beings {
                prop_assert!((0.0..=100.0).contains(&being.fitness));
            }
            prop_assert!(society.metrics_history().len() <= 100);
            prop_assert!(society.event_log().len() <= 50);

            if report.game_over {
                break;
            }
        }
    }

    #[test]
    fn hybrid_children_never_go_negative(
        seed in any::<u64>(),
        a1 in 0.0f32..1000.0,
        a2 in 0.0f32..1000.0,
        b1 in 0.0f32..1000.0,
    ) {
        let mut beings = vec![
            Being::seed("Alfa Uno", &[("wisdom", a1), ("courage", a2)]),
            Being::seed("Beta Dos", &[("wisdom", b1), ("empathy", 0.0)]),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let index = hybridize(&mut beings, &mut rng).unwrap();
        for (attribute, value) in &beings[index].attributes {
            prop_assert!(*value >= 0.0, "{attribute} = {value}");
        }
    }

    #[test]
    fn evaluating_the_dead_never_panics(
        threshold in 0.1f32..500.0,
    ) {
        let catalog = EventCatalog::with_defaults();
        let mut event = catalog.iter().next().unwrap().clone();
        event.required_attributes.insert("wisdom".into(), threshold);

        let evaluation = evaluate_response(&event, &[]);
        prop_assert!(!evaluation.success);
        prop_assert_eq!(evaluation.total_score, 0.0);

        // Same result when everyone is dead rather than absent
        let mut beings = vec![Being::seed("Fantasma", &[("wisdom", 900.0)])];
        beings[0].alive = false;
        let evaluation = evaluate_response(&event, &beings);
        prop_assert!(!evaluation.success);
        prop_assert_eq!(evaluation.total_score, 0.0);
    }
}
