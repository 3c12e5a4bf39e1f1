//! Property tests for the game loop invariants.

use proptest::prelude::*;

use astromage::rules::update_resources;
use astromage::{
    standard_catalog, Action, Game, GameConfig, ResourcePool, Side, StatusEffect, StatusEffects,
    StatusKind,
};

fn stats() -> impl Strategy<Value = ResourcePool> {
    (
        (-20i64..60, -20i64..60, -20i64..60, -20i64..60, -20i64..60),
        (-5i64..6, -5i64..6, -5i64..6),
    )
        .prop_map(|((health, hull, material, energy, ammunition), (mp, ep, ap))| ResourcePool {
            health,
            hull,
            material,
            energy,
            ammunition,
            material_prod: mp,
            energy_prod: ep,
            ammunition_prod: ap,
        })
}

fn status_kind() -> impl Strategy<Value = StatusKind> {
    prop_oneof![
        Just(StatusKind::Burn),
        Just(StatusKind::Corrosion),
        Just(StatusKind::Repair),
    ]
}

proptest! {
    /// Any sequence of plays and discards keeps both hands full.
    #[test]
    fn prop_hand_size_invariant(
        seed in any::<u64>(),
        hand_size in 1usize..9,
        moves in prop::collection::vec((any::<bool>(), 0usize..9), 1..60),
    ) {
        let config = GameConfig::default().with_seed(seed).with_hand_size(hand_size);
        let mut game = Game::new(config, standard_catalog()).unwrap();
        game.new_game().unwrap();

        for (play, slot) in moves {
            let slot = slot % hand_size;
            let action = if play { Action::play(slot) } else { Action::discard(slot) };
            if game.act(action).is_err() {
                game.discard_card(slot).unwrap();
            }
            game.end_round().unwrap();

            for side in Side::ALL {
                prop_assert_eq!(game.player(side).hand_size(), hand_size);
            }
            if !game.state().is_playing() {
                break;
            }
        }
    }

    /// Production is plain addition: two calls add it twice.
    #[test]
    fn prop_production_additive(start in stats()) {
        let mut pool = start;
        update_resources(&mut pool);
        update_resources(&mut pool);

        prop_assert_eq!(pool.material, start.material + 2 * start.material_prod);
        prop_assert_eq!(pool.energy, start.energy + 2 * start.energy_prod);
        prop_assert_eq!(pool.ammunition, start.ammunition + 2 * start.ammunition_prod);
        prop_assert_eq!(pool.health, start.health);
        prop_assert_eq!(pool.hull, start.hull);
    }

    /// One status pass shortens every effect by exactly one round.
    #[test]
    fn prop_status_decrements(
        effects in prop::collection::vec((status_kind(), 1i64..5, 1u32..5), 0..3),
    ) {
        let mut player = astromage::Player::new(
            "player1",
            im::Vector::new(),
            GameConfig::DEFAULT_STARTING_STATS,
        );
        player.status_effects = effects
            .iter()
            .map(|&(kind, magnitude, rounds)| StatusEffect::new(kind, magnitude, rounds))
            .collect::<StatusEffects>();
        let before = player.status_effects.clone();

        astromage::rules::status_handler(&mut player);

        for effect in before.iter() {
            match player.status_effects.get(effect.kind) {
                Some(after) => prop_assert_eq!(after.remaining, effect.remaining - 1),
                None => prop_assert_eq!(effect.remaining, 1),
            }
        }
        prop_assert!(player.status_effects.iter().all(|e| e.remaining > 0));
    }
}
