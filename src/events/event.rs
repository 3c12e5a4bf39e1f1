//! Game events.
//!
//! The engine records a discrete event for every state transition a
//! presentation layer might animate. Events are buffered and drained by the
//! caller; the engine never waits on them and nothing flows back.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{Resource, ResourcePool, Side, StatusKind, WinReason};
use crate::rules::StatusTick;

/// Health and hull, the two values a damage/heal pulse is keyed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub health: i64,
    pub hull: i64,
}

impl From<&ResourcePool> for Vitals {
    fn from(stats: &ResourcePool) -> Self {
        Self {
            health: stats.health,
            hull: stats.hull,
        }
    }
}

/// Which pulse animations a vitals change calls for.
///
/// Both can be set at once, for example when hull rises while health drops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pulse {
    pub damage: bool,
    pub heal: bool,
}

impl Pulse {
    /// Compare previous and current vitals.
    #[must_use]
    pub fn between(before: Vitals, after: Vitals) -> Self {
        Self {
            damage: after.hull < before.hull || after.health < before.health,
            heal: after.hull > before.hull || after.health > before.health,
        }
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        !self.damage && !self.heal
    }
}

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new match was dealt.
    GameStarted,

    /// A card resolved.
    CardPlayed {
        side: Side,
        slot: usize,
        card: CardId,
        name: String,
        resource: Resource,
        cost: i64,
    },

    /// A hand slot was cycled (after a play, or as a bare discard).
    CardDiscarded {
        side: Side,
        slot: usize,
        discarded: CardId,
        drawn: CardId,
    },

    /// A player's health or hull changed.
    StatsChanged {
        side: Side,
        before: Vitals,
        after: Vitals,
        pulse: Pulse,
    },

    /// A status effect was attached.
    StatusAttached { side: Side, kind: StatusKind },

    /// A status effect applied its per-round change.
    StatusTicked { side: Side, tick: StatusTick },

    /// A status effect ran out.
    StatusExpired { side: Side, kind: StatusKind },

    /// Production was added to the stocks.
    ResourcesProduced {
        side: Side,
        material: i64,
        energy: i64,
        ammunition: i64,
    },

    /// The round ended and the turn passed.
    RoundEnded { side: Side, next: Side, round: u32 },

    /// The match was won.
    GameWon { winner: Side, reason: WinReason },
}

impl GameEvent {
    /// Build a `StatsChanged` event, or `None` if vitals did not move.
    #[must_use]
    pub fn stats_changed(side: Side, before: Vitals, after: Vitals) -> Option<Self> {
        let pulse = Pulse::between(before, after);
        (!pulse.is_none()).then_some(GameEvent::StatsChanged {
            side,
            before,
            after,
            pulse,
        })
    }

    /// Element key the presentation layer animates for this event, if any.
    ///
    /// Card transitions are keyed on the hand slot, pulses on the player.
    #[must_use]
    pub fn animation_key(&self) -> Option<String> {
        match self {
            GameEvent::CardDiscarded { slot, .. } => Some(format!("card-{slot}")),
            GameEvent::StatsChanged { side, pulse, .. } if pulse.damage => {
                Some(format!("{}-damage-effects", side.identity()))
            }
            GameEvent::StatsChanged { side, .. } => {
                Some(format!("{}-positive-effects", side.identity()))
            }
            _ => None,
        }
    }
}
