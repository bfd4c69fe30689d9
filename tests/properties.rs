// Property checks over randomly seeded runs.

use ant_foraging::{Ant, AntConfig, Direction, Location, Model, ModelConfig, Position};
use proptest::prelude::*;

fn seeded(seed: u64, capacity: usize) -> Model {
    let config = ModelConfig::default().with_capacity(capacity);
    Model::with_source(config, fastrand::Rng::with_seed(seed)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn cells_never_exceed_capacity(
        seed in any::<u64>(),
        capacity in 1usize..6,
        ants in 1usize..40,
        ticks in 1u64..40,
    ) {
        let mut model = seeded(seed, capacity);
        model.seed_food(0.3).unwrap();
        model.add_ants(ants).unwrap();

        for _ in 0..ticks {
            model.advance_tick().unwrap();
            for (pos, count) in model.occupancy().iter() {
                // The nest starts over capacity; it can only drain toward it
                let limit = if pos.is_nest() { capacity.max(ants) } else { capacity };
                prop_assert!(count <= limit, "{} holds {}", pos, count);
            }
        }
    }

    #[test]
    fn pheromone_stays_within_trail_ceiling(seed in any::<u64>(), ticks in 1u64..60) {
        let mut model = seeded(seed, 200);
        model.seed_food(0.5).unwrap();
        model.add_ants(30).unwrap();
        model.run(ticks).unwrap();

        for (_, loc) in model.grid().iter() {
            prop_assert!(loc.pheromone() >= 0.0);
            prop_assert!(loc.pheromone() <= 1000.0);
        }
    }

    #[test]
    fn food_is_conserved(seed in any::<u64>(), p in 0.0f64..=1.0, ticks in 1u64..60) {
        let mut model = seeded(seed, 200);
        model.seed_food(p).unwrap();
        model.add_ants(25).unwrap();
        model.run(ticks).unwrap();

        let stats = model.stats();
        prop_assert!(stats.pickups <= stats.food_seeded);
        prop_assert!(stats.deliveries <= stats.pickups);
        prop_assert_eq!(model.food_remaining(), stats.food_seeded - stats.pickups);
    }

    #[test]
    fn evaporation_is_geometric(v in 0.001f64..1.0e6, k in 0i32..200) {
        let mut loc = Location::new();
        loc.set_pheromone(v);
        for _ in 0..k {
            loc.evaporate();
        }
        let expected = v * (29.0f64 / 30.0).powi(k);
        prop_assert!((loc.pheromone() - expected).abs() <= expected * 1e-9);
        prop_assert!(loc.pheromone() > 0.0);
        prop_assert!(loc.pheromone() <= v);
    }

    #[test]
    fn returning_candidates_mirror_outbound(x in -10_000i32..10_000, y in -10_000i32..10_000) {
        let at = Position::new(x, y);
        for dir in Direction::ALL {
            let out = dir.target(at, false);
            let back = dir.target(at, true);
            prop_assert_eq!(back.x - x, -(out.x - x));
            prop_assert_eq!(back.y - y, -(out.y - y));
        }
    }

    #[test]
    fn deposit_is_clamped(current in 0.0f64..2000.0) {
        let config = AntConfig::default();
        let mut model = seeded(0, 200);
        model.set_pheromone_at(Position::NEST, current);

        Ant::new(0).lay_pheromone(&mut model, &config);

        let expected = if current >= 1000.0 { current } else { (current + 1.0).min(1000.0) };
        prop_assert_eq!(model.pheromone_at(Position::NEST), expected);
    }
}
