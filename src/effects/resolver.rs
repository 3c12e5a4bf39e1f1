//! Card effect resolution.
//!
//! `EffectResolver::play_card` is the authoritative affordability check:
//! an unaffordable play is refused before anything is touched. An affordable
//! play pays the cost, then applies caster deltas, opponent deltas, damage,
//! and the status grant, in that order.
//!
//! The resolver does not touch the hand. Cycling the played card out is the
//! hand manager's job; the game calls the two as a pair.

use tracing::{debug, warn};

use super::effect::{StatDelta, Target};
use crate::cards::{CardDefinition, CardId};
use crate::core::{EngineError, Player, StatusKind};

/// What a resolved play did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The card that resolved.
    pub card: CardId,
    /// Amount taken from the paying stock.
    pub paid: i64,
    /// Hull the opponent lost to damage.
    pub hull_lost: i64,
    /// Health the opponent lost to damage (not counting deltas).
    pub health_lost: i64,
    /// Status effect attached, and to whom.
    pub status_attached: Option<(Target, StatusKind)>,
}

/// Applies card effects to players.
pub struct EffectResolver;

impl EffectResolver {
    /// Refuse the play if the card costs more than the stock its type selects.
    pub fn check_affordable(card: &CardDefinition, player: &Player) -> Result<(), EngineError> {
        let available = player.stats.stock(card.resource);
        if card.cost > available {
            return Err(EngineError::Unaffordable {
                card: card.name.clone(),
                resource: card.resource,
                cost: card.cost,
                available,
            });
        }
        Ok(())
    }

    /// Resolve `card` played by `player` against `opponent`.
    ///
    /// Both players are mutated in place. On error neither is changed.
    pub fn play_card(
        card: &CardDefinition,
        player: &mut Player,
        opponent: &mut Player,
    ) -> Result<PlayOutcome, EngineError> {
        if let Err(err) = Self::check_affordable(card, player) {
            warn!(player = %player.name, card = %card.name, "refused play: {err}");
            return Err(err);
        }

        *player.stats.get_mut(card.resource.stock()) -= card.cost;

        let effect = &card.effect;
        Self::apply_deltas(player, &effect.caster);
        Self::apply_deltas(opponent, &effect.opponent);

        let (hull_lost, health_lost) = opponent.stats.take_damage(effect.damage);

        let status_attached = effect.status.and_then(|grant| {
            let holder = match grant.target {
                Target::Caster => &mut *player,
                Target::Opponent => &mut *opponent,
            };
            holder
                .status_effects
                .attach(grant.effect)
                .then_some((grant.target, grant.effect.kind))
        });

        debug!(
            player = %player.name,
            card = %card.name,
            paid = card.cost,
            hull_lost,
            health_lost,
            "card resolved"
        );

        Ok(PlayOutcome {
            card: card.id,
            paid: card.cost,
            hull_lost,
            health_lost,
            status_attached,
        })
    }

    /// Apply deltas in order, with per-stat flooring.
    pub fn apply_deltas(player: &mut Player, deltas: &[StatDelta]) {
        for delta in deltas {
            player.stats.apply_delta(delta.stat, delta.amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::{GameConfig, Resource, ResourcePool, Stat, StatusEffect};
    use crate::effects::CardEffect;
    use im::Vector;

    fn player(name: &str) -> Player {
        Player::new(name, Vector::new(), GameConfig::DEFAULT_STARTING_STATS)
    }

    fn card(cost: i64, effect: CardEffect) -> CardDefinition {
        CardDefinition::new(CardId::new(1), "Test", Resource::Energy, cost).with_effect(effect)
    }

    #[test]
    fn test_pays_cost_from_matching_stock() {
        let mut me = player("player1");
        let mut them = player("player2");

        EffectResolver::play_card(&card(3, CardEffect::new()), &mut me, &mut them).unwrap();

        assert_eq!(me.stats.energy, 2);
        assert_eq!(me.stats.material, 5);
        assert_eq!(me.stats.ammunition, 5);
    }

    #[test]
    fn test_exact_cost_is_affordable() {
        let mut me = player("player1");
        let mut them = player("player2");

        let outcome =
            EffectResolver::play_card(&card(5, CardEffect::new()), &mut me, &mut them).unwrap();

        assert_eq!(outcome.paid, 5);
        assert_eq!(me.stats.energy, 0);
    }

    #[test]
    fn test_refuses_unaffordable_without_mutation() {
        let mut me = player("player1");
        let mut them = player("player2");
        let effect = CardEffect::new().damage(50).caster(Stat::Hull, 10);

        let err = EffectResolver::play_card(&card(6, effect), &mut me, &mut them).unwrap_err();

        assert!(matches!(err, EngineError::Unaffordable { cost: 6, available: 5, .. }));
        assert_eq!(me.stats, GameConfig::DEFAULT_STARTING_STATS);
        assert_eq!(them.stats, GameConfig::DEFAULT_STARTING_STATS);
    }

    #[test]
    fn test_applies_deltas_and_damage() {
        let mut me = player("player1");
        let mut them = player("player2");
        let effect = CardEffect::new()
            .caster(Stat::EnergyProd, 1)
            .opponent(Stat::Material, -8)
            .damage(13);

        let outcome = EffectResolver::play_card(&card(2, effect), &mut me, &mut them).unwrap();

        assert_eq!(me.stats.energy_prod, 3);
        assert_eq!(them.stats.material, 0);
        assert_eq!(them.stats.hull, 0);
        assert_eq!(them.stats.health, 22);
        assert_eq!((outcome.hull_lost, outcome.health_lost), (10, 3));
    }

    #[test]
    fn test_attaches_status_to_target() {
        let mut me = player("player1");
        let mut them = player("player2");
        let burn = StatusEffect::new(StatusKind::Burn, 2, 3);

        let outcome = EffectResolver::play_card(
            &card(1, CardEffect::new().grant(Target::Opponent, burn)),
            &mut me,
            &mut them,
        )
        .unwrap();

        assert_eq!(outcome.status_attached, Some((Target::Opponent, StatusKind::Burn)));
        assert!(them.status_effects.has(StatusKind::Burn));
        assert!(me.status_effects.is_empty());
    }

    #[test]
    fn test_template_unchanged() {
        let mut me = player("player1");
        let mut them = player("player2");
        let template = card(1, CardEffect::new().damage(4));
        let copy = template.clone();

        EffectResolver::play_card(&template, &mut me, &mut them).unwrap();
        EffectResolver::play_card(&template, &mut me, &mut them).unwrap();

        assert_eq!(template, copy);
        assert_eq!(them.stats.hull, 2);
    }

    #[test]
    fn test_health_deltas_unclamped() {
        let mut me = player("player1");
        let mut them = player("player2");
        them.stats = ResourcePool {
            health: 3,
            ..GameConfig::DEFAULT_STARTING_STATS
        };

        let drain = card(0, CardEffect::new().opponent(Stat::Health, -6));
        EffectResolver::play_card(&drain, &mut me, &mut them).unwrap();

        assert_eq!(them.stats.health, -3);
    }
}
