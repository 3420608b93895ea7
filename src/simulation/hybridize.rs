//! Hybridization - produce a new being from the two fittest parents

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use rand::Rng;

use crate::being::Being;
use crate::core::config::{INHERITED_PIECES_PER_PARENT, INITIAL_FITNESS, MUTATION_SPREAD};
use crate::core::types::BeingId;
use crate::society::{LogKind, MicroSociety};

/// Produce a hybrid child from the two fittest living beings
///
/// Silently a no-op with fewer than two living beings. The child is
/// appended to the population; parents are never replaced. Returns the
/// index of the new child.
pub fn hybridize(beings: &mut Vec<Being>, rng: &mut impl Rng) -> Option<usize> {
    let mut alive: Vec<usize> = (0..beings.len()).filter(|&i| beings[i].alive).collect();
    if alive.len() < 2 {
        return None;
    }
    // Stable sort: fitness ties keep original population order
    alive.sort_by_key(|&i| Reverse(OrderedFloat(beings[i].fitness)));
    let (parent1, parent2) = (&beings[alive[0]], &beings[alive[1]]);

    let first = parent1.name.split_whitespace().next().unwrap_or(&parent1.name);
    let last = parent2.name.split_whitespace().last().unwrap_or(&parent2.name);
    let name = format!("{first} {last}");

    // Union of parent attribute keys, in stable order so seeded runs are
    // reproducible
    let mut keys: Vec<&String> = parent1
        .attributes
        .keys()
        .chain(parent2.attributes.keys())
        .collect();
    keys.sort();
    keys.dedup();

    let mut attributes = ahash::AHashMap::with_capacity(keys.len());
    for key in keys {
        let average = (parent1.attribute(key) + parent2.attribute(key)) / 2.0;
        // ±5% of the averaged value, symmetric
        let mutation = (rng.gen::<f32>() - 0.5) * MUTATION_SPREAD * average;
        attributes.insert(key.clone(), (average + mutation).max(0.0));
    }

    let pieces: Vec<String> = parent1
        .pieces
        .iter()
        .take(INHERITED_PIECES_PER_PARENT)
        .chain(parent2.pieces.iter().take(INHERITED_PIECES_PER_PARENT))
        .cloned()
        .collect();

    let child = Being {
        id: BeingId::new(),
        name,
        attributes,
        fitness: INITIAL_FITNESS,
        alive: true,
        generation: parent1.generation.max(parent2.generation) + 1,
        total_power: (parent1.total_power + parent2.total_power) / 2.0,
        pieces,
    };

    tracing::debug!(child = %child.name, generation = child.generation, "hybrid born");
    beings.push(child);
    Some(beings.len() - 1)
}

/// Hybridize within a society and record the birth in its event log
pub fn hybridize_society(society: &mut MicroSociety) -> Option<BeingId> {
    let index = hybridize(&mut society.beings, &mut society.rng)?;
    let (id, message) = {
        let child = &society.beings[index];
        (
            child.id,
            format!("✨ Ha nacido {} (generación {})", child.name, child.generation),
        )
    };
    society.log(LogKind::Info, message);
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(99)
    }

    #[test]
    fn test_noop_with_fewer_than_two_alive() {
        let mut beings = vec![Being::seed("Aria Luz", &[("wisdom", 50.0)])];
        assert!(hybridize(&mut beings, &mut rng()).is_none());
        assert_eq!(beings.len(), 1);

        let mut beings = vec![
            Being::seed("Aria Luz", &[]),
            Being::seed("Teo Mar", &[]),
        ];
        beings[1].alive = false;
        assert!(hybridize(&mut beings, &mut rng()).is_none());
        assert_eq!(beings.len(), 2);
    }

    #[test]
    fn test_child_name_joins_parent_tokens() {
        let mut beings = vec![
            Being::seed("Aria Luz", &[("wisdom", 10.0)]),
            Being::seed("Teo del Mar", &[("wisdom", 10.0)]),
        ];
        beings[0].fitness = 90.0;
        beings[1].fitness = 80.0;
        let index = hybridize(&mut beings, &mut rng()).unwrap();
        assert_eq!(beings[index].name, "Aria Mar");
    }

    #[test]
    fn test_child_attributes_near_parent_average() {
        let mut beings = vec![
            Being::seed("Aria Luz", &[("wisdom", 60.0), ("courage", 20.0)]),
            Being::seed("Teo Mar", &[("wisdom", 40.0), ("empathy", 30.0)]),
        ];
        let index = hybridize(&mut beings, &mut rng()).unwrap();
        let child = &beings[index];

        // avg 50 ± 5%
        let wisdom = child.attribute("wisdom");
        assert!((47.5..=52.5).contains(&wisdom), "wisdom = {wisdom}");
        // Keys missing in one parent average against zero
        let courage = child.attribute("courage");
        assert!((9.5..=10.5).contains(&courage), "courage = {courage}");
        let empathy = child.attribute("empathy");
        assert!((14.25..=15.75).contains(&empathy), "empathy = {empathy}");
    }

    #[test]
    fn test_child_bookkeeping() {
        let mut beings = vec![
            Being::seed("Aria Luz", &[("wisdom", 10.0)])
                .with_pieces((0..10).map(|i| format!("a{i}")).collect()),
            Being::seed("Teo Mar", &[("wisdom", 10.0)])
                .with_pieces((0..3).map(|i| format!("b{i}")).collect()),
        ];
        beings[0].generation = 3;
        beings[1].generation = 5;
        beings[0].total_power = 40.0;
        beings[1].total_power = 60.0;
        beings[0].fitness = 95.0;

        let index = hybridize(&mut beings, &mut rng()).unwrap();
        let child = &beings[index];
        assert_eq!(child.generation, 6);
        assert_eq!(child.fitness, 50.0);
        assert_eq!(child.total_power, 50.0);
        // 6 from parent1 plus all 3 of parent2's
        assert_eq!(child.pieces.len(), 9);
        assert_eq!(child.pieces[0], "a0");
        assert_eq!(child.pieces[6], "b0");
    }

    #[test]
    fn test_fitness_ties_break_by_population_order() {
        let mut beings = vec![
            Being::seed("Uno Alfa", &[("wisdom", 10.0)]),
            Being::seed("Dos Beta", &[("wisdom", 10.0)]),
            Being::seed("Tres Gama", &[("wisdom", 10.0)]),
        ];
        // All at the default fitness of 50; parents must be Uno and Dos
        let index = hybridize(&mut beings, &mut rng()).unwrap();
        assert_eq!(beings[index].name, "Uno Beta");
    }

    #[test]
    fn test_society_wrapper_logs_birth() {
        let beings = vec![
            Being::seed("Aria Luz", &[("wisdom", 10.0)]),
            Being::seed("Teo Mar", &[("wisdom", 10.0)]),
        ];
        let mut society = MicroSociety::new("Prueba", "crecer", beings, 7);
        let id = hybridize_society(&mut society).unwrap();
        assert!(society.beings.iter().any(|b| b.id == id));
        let entry = society.event_log().latest().unwrap();
        assert!(entry.message.contains("Ha nacido"));
    }
}
