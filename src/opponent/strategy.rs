//! Opponent decision procedure.
//!
//! The computer-controlled side asks an `OpponentStrategy` for one action
//! per round. A strategy only looks at the hand and stats it is given; all
//! mutation happens afterwards through the normal play/discard path.
//!
//! Contract for every strategy, for a non-empty hand:
//! - if any card is affordable, return `Play` with an affordable slot;
//! - otherwise return `Discard` with a valid slot.

use tracing::debug;

use crate::cards::CardDefinition;
use crate::core::{Action, GameRng, Player, ResourcePool};

/// Pluggable action selection for the computer-controlled side.
pub trait OpponentStrategy {
    /// Choose an action. Returns `None` only for an empty hand.
    fn decide(&mut self, hand: &[CardDefinition], stats: &ResourcePool) -> Option<Action>;

    /// Name for logs.
    fn name(&self) -> &'static str;
}

/// Ask `strategy` what `player` should do this round.
pub fn play_turn(strategy: &mut dyn OpponentStrategy, player: &Player) -> Option<Action> {
    let hand: Vec<CardDefinition> = player.hand.iter().cloned().collect();
    let action = strategy.decide(&hand, &player.stats);
    debug!(
        player = %player.name,
        strategy = strategy.name(),
        action = ?action,
        "opponent decided"
    );
    action
}

/// How far short the stock is of paying for `card` (zero if affordable).
fn shortfall(card: &CardDefinition, stats: &ResourcePool) -> i64 {
    (card.cost - stats.stock(card.resource)).max(0)
}

/// Plays the most expensive card it can afford; otherwise throws away the
/// card it is furthest from affording.
///
/// Ties go to the lowest slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

impl OpponentStrategy for GreedyStrategy {
    fn decide(&mut self, hand: &[CardDefinition], stats: &ResourcePool) -> Option<Action> {
        let best_play = hand
            .iter()
            .enumerate()
            .filter(|(_, card)| stats.can_afford(card))
            .fold(None, |best: Option<(usize, i64)>, (slot, card)| match best {
                Some((_, cost)) if cost >= card.cost => best,
                _ => Some((slot, card.cost)),
            });

        if let Some((slot, _)) = best_play {
            return Some(Action::play(slot));
        }

        hand.iter()
            .enumerate()
            .fold(None, |worst: Option<(usize, i64)>, (slot, card)| {
                let gap = shortfall(card, stats);
                match worst {
                    Some((_, best_gap)) if best_gap >= gap => worst,
                    _ => Some((slot, gap)),
                }
            })
            .map(|(slot, _)| Action::discard(slot))
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

/// Plays a uniformly random affordable card, else discards a random slot.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a seeded random strategy.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl OpponentStrategy for RandomStrategy {
    fn decide(&mut self, hand: &[CardDefinition], stats: &ResourcePool) -> Option<Action> {
        if hand.is_empty() {
            return None;
        }

        let affordable: Vec<usize> = hand
            .iter()
            .enumerate()
            .filter(|(_, card)| stats.can_afford(card))
            .map(|(slot, _)| slot)
            .collect();

        match self.rng.choose(&affordable) {
            Some(&slot) => Some(Action::play(slot)),
            None => Some(Action::discard(self.rng.gen_index(hand.len()))),
        }
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::{ActionKind, GameConfig, Resource};

    fn card(id: u32, resource: Resource, cost: i64) -> CardDefinition {
        CardDefinition::new(CardId::new(id), format!("Card {id}"), resource, cost)
    }

    const STATS: ResourcePool = GameConfig::DEFAULT_STARTING_STATS;

    #[test]
    fn test_greedy_picks_most_expensive_affordable() {
        let hand = [
            card(1, Resource::Energy, 2),
            card(2, Resource::Material, 5),
            card(3, Resource::Ammunition, 9),
            card(4, Resource::Energy, 5),
        ];

        assert_eq!(GreedyStrategy.decide(&hand, &STATS), Some(Action::play(1)));
    }

    #[test]
    fn test_greedy_discards_furthest_from_affordable() {
        let hand = [
            card(1, Resource::Energy, 8),
            card(2, Resource::Material, 20),
            card(3, Resource::Ammunition, 20),
        ];

        assert_eq!(GreedyStrategy.decide(&hand, &STATS), Some(Action::discard(1)));
    }

    #[test]
    fn test_empty_hand() {
        assert_eq!(GreedyStrategy.decide(&[], &STATS), None);
        assert_eq!(RandomStrategy::new(1).decide(&[], &STATS), None);
    }

    #[test]
    fn test_random_only_plays_affordable() {
        let hand = [
            card(1, Resource::Energy, 99),
            card(2, Resource::Material, 1),
            card(3, Resource::Ammunition, 99),
        ];
        let mut strategy = RandomStrategy::new(11);

        for _ in 0..50 {
            assert_eq!(strategy.decide(&hand, &STATS), Some(Action::play(1)));
        }
    }

    #[test]
    fn test_random_discards_valid_slot() {
        let hand = [card(1, Resource::Energy, 99), card(2, Resource::Material, 99)];
        let mut strategy = RandomStrategy::new(11);

        for _ in 0..50 {
            let action = strategy.decide(&hand, &STATS).unwrap();
            assert_eq!(action.kind, ActionKind::Discard);
            assert!(action.index < hand.len());
        }
    }
}
