//! Opponent strategy integration tests.

use astromage::opponent::play_turn;
use astromage::{
    standard_catalog, ActionKind, CardDefinition, CardId, Game, GameConfig, GreedyStrategy,
    OpponentStrategy, RandomStrategy, Resource, ResourcePool, Side,
};

fn card(id: u32, resource: Resource, cost: i64) -> CardDefinition {
    CardDefinition::new(CardId::new(id), format!("Card {id}"), resource, cost)
}

const STATS: ResourcePool = GameConfig::DEFAULT_STARTING_STATS;

fn strategies() -> Vec<Box<dyn OpponentStrategy>> {
    vec![Box::new(GreedyStrategy), Box::new(RandomStrategy::new(3))]
}

/// Exactly one affordable card: every strategy plays it.
#[test]
fn test_single_affordable_card_is_played() {
    let hand = [
        card(1, Resource::Material, 9),
        card(2, Resource::Energy, 12),
        card(3, Resource::Ammunition, 5),
        card(4, Resource::Material, 6),
    ];

    for mut strategy in strategies() {
        for _ in 0..10 {
            let action = strategy.decide(&hand, &STATS).unwrap();
            assert_eq!(action.kind, ActionKind::Play, "{}", strategy.name());
            assert_eq!(action.index, 2, "{}", strategy.name());
        }
    }
}

/// Nothing affordable: every strategy discards a valid slot.
#[test]
fn test_nothing_affordable_discards() {
    let hand = [
        card(1, Resource::Material, 9),
        card(2, Resource::Energy, 12),
        card(3, Resource::Ammunition, 6),
    ];

    for mut strategy in strategies() {
        for _ in 0..10 {
            let action = strategy.decide(&hand, &STATS).unwrap();
            assert_eq!(action.kind, ActionKind::Discard, "{}", strategy.name());
            assert!(action.index < hand.len());
        }
    }
}

/// Strategies never produce an action the engine refuses.
#[test]
fn test_strategies_always_legal() {
    for mut strategy in strategies() {
        let mut game = Game::new(GameConfig::default(), standard_catalog()).unwrap();
        game.new_game().unwrap();

        for _ in 0..200 {
            let side = game.state().turn;
            let action = play_turn(strategy.as_mut(), game.player(side)).unwrap();
            let winner = game.take_turn(action).unwrap();
            if winner.is_some() {
                break;
            }
        }
    }
}

/// Both sides played by strategies, through `opponent_turn`.
#[test]
fn test_opponent_turn_alternates() {
    let mut game = Game::new(GameConfig::default(), standard_catalog()).unwrap();
    game.new_game().unwrap();
    let mut greedy = GreedyStrategy;

    game.opponent_turn(&mut greedy).unwrap();
    game.opponent_turn(&mut greedy).unwrap();

    let sides: Vec<Side> = game.history().iter().map(|r| r.side).collect();
    assert_eq!(sides, vec![Side::PlayerOne, Side::PlayerTwo]);
}

/// Seeded random strategies repeat themselves.
#[test]
fn test_random_strategy_reproducible() {
    let hand = [
        card(1, Resource::Material, 1),
        card(2, Resource::Energy, 1),
        card(3, Resource::Ammunition, 1),
    ];
    let run = |seed| {
        let mut strategy = RandomStrategy::new(seed);
        (0..20).map(|_| strategy.decide(&hand, &STATS)).collect::<Vec<_>>()
    };

    assert_eq!(run(9), run(9));
}
