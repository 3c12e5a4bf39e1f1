//! Card effect descriptions.
//!
//! A card's effect is plain data: stat deltas for the caster, stat deltas for
//! the opponent, damage dealt to the opponent, and optionally one status
//! effect to attach. The resolver interprets it; templates are never mutated.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Stat, StatusEffect};

/// Which player a part of an effect lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// The player who played the card.
    Caster,
    /// The other player.
    Opponent,
}

/// A signed change to one stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatDelta {
    pub stat: Stat,
    pub amount: i64,
}

impl StatDelta {
    #[must_use]
    pub const fn new(stat: Stat, amount: i64) -> Self {
        Self { stat, amount }
    }
}

/// A status effect a card attaches when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusGrant {
    pub target: Target,
    pub effect: StatusEffect,
}

/// Everything a card does when it resolves.
///
/// Built with chained calls:
///
/// ```
/// use astromage::core::{Stat, StatusEffect, StatusKind};
/// use astromage::effects::{CardEffect, Target};
///
/// let missile_barrage = CardEffect::new()
///     .damage(10)
///     .opponent(Stat::Ammunition, -2)
///     .grant(Target::Opponent, StatusEffect::new(StatusKind::Burn, 1, 2));
///
/// assert_eq!(missile_barrage.damage, 10);
/// assert_eq!(missile_barrage.opponent.len(), 1);
/// assert!(missile_barrage.status.is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardEffect {
    /// Deltas applied to the caster, in order.
    pub caster: SmallVec<[StatDelta; 3]>,

    /// Deltas applied to the opponent, in order.
    pub opponent: SmallVec<[StatDelta; 3]>,

    /// Damage to the opponent. Hull absorbs it before health.
    pub damage: i64,

    /// Status effect attached on resolution.
    pub status: Option<StatusGrant>,
}

impl CardEffect {
    /// An effect that does nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a delta to the caster's stats.
    #[must_use]
    pub fn caster(mut self, stat: Stat, amount: i64) -> Self {
        self.caster.push(StatDelta::new(stat, amount));
        self
    }

    /// Add a delta to the opponent's stats.
    #[must_use]
    pub fn opponent(mut self, stat: Stat, amount: i64) -> Self {
        self.opponent.push(StatDelta::new(stat, amount));
        self
    }

    /// Add a delta to either side.
    #[must_use]
    pub fn on(self, target: Target, stat: Stat, amount: i64) -> Self {
        match target {
            Target::Caster => self.caster(stat, amount),
            Target::Opponent => self.opponent(stat, amount),
        }
    }

    /// Deal damage to the opponent.
    #[must_use]
    pub fn damage(mut self, amount: i64) -> Self {
        self.damage += amount;
        self
    }

    /// Attach a status effect to one side.
    #[must_use]
    pub fn grant(mut self, target: Target, effect: StatusEffect) -> Self {
        self.status = Some(StatusGrant { target, effect });
        self
    }

    /// Deltas for one side.
    #[must_use]
    pub fn deltas(&self, target: Target) -> &[StatDelta] {
        match target {
            Target::Caster => &self.caster,
            Target::Opponent => &self.opponent,
        }
    }

    /// Whether the effect is a no-op.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.caster.is_empty()
            && self.opponent.is_empty()
            && self.damage == 0
            && self.status.is_none()
    }
}
