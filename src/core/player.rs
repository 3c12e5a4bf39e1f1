//! Sides, per-side storage, and the player record.
//!
//! ## Side
//!
//! AstroMage is strictly two-player, so the turn identity is a two-valued
//! enum rather than an open-ended index.
//!
//! ## SideMap
//!
//! Fixed per-side storage with O(1) access, indexable by `Side`.
//!
//! ## Player
//!
//! Hand, stats and active status effects for one side. Players are owned by
//! the `Game`; other components only ever borrow them for one operation.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::stats::ResourcePool;
use super::status::StatusEffects;
use crate::cards::CardDefinition;

/// Which of the two players a value belongs to.
///
/// `PlayerOne` always moves first in a new game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::PlayerOne, Side::PlayerTwo];

    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::PlayerOne => Side::PlayerTwo,
            Side::PlayerTwo => Side::PlayerOne,
        }
    }

    /// 0-based index (PlayerOne = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::PlayerOne => 0,
            Side::PlayerTwo => 1,
        }
    }

    /// Human-readable label used for turn prompts and the winner banner.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Side::PlayerOne => "Player 1",
            Side::PlayerTwo => "Player 2",
        }
    }

    /// Identity the presentation layer keys its per-player elements on.
    #[must_use]
    pub const fn identity(self) -> &'static str {
        match self {
            Side::PlayerOne => "player1",
            Side::PlayerTwo => "player2",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Exactly one value per side.
///
/// ## Example
///
/// ```
/// use astromage::core::{Side, SideMap};
///
/// let mut wins: SideMap<u32> = SideMap::with_value(0);
/// wins[Side::PlayerTwo] += 1;
///
/// assert_eq!(wins[Side::PlayerOne], 0);
/// assert_eq!(wins[Side::PlayerTwo], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::PlayerOne), factory(Side::PlayerTwo)],
        }
    }

    /// Create a map from player one's and player two's values.
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's value.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's value.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Borrow both values mutably at once: `(side, side.other())`.
    ///
    /// Card resolution needs the caster and the opponent at the same time.
    pub fn pair_mut(&mut self, side: Side) -> (&mut T, &mut T) {
        let [one, two] = &mut self.data;
        match side {
            Side::PlayerOne => (one, two),
            Side::PlayerTwo => (two, one),
        }
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

/// Per-player state for one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Presentation identity (`player1` / `player2`).
    pub name: String,

    /// Cards in hand. Size is fixed for the whole game.
    pub hand: Vector<CardDefinition>,

    /// Stocks and production rates.
    pub stats: ResourcePool,

    /// Active status effects in insertion order.
    pub status_effects: StatusEffects,
}

impl Player {
    /// Create a player with the given hand and starting stats.
    pub fn new(name: impl Into<String>, hand: Vector<CardDefinition>, stats: ResourcePool) -> Self {
        Self {
            name: name.into(),
            hand,
            stats,
            status_effects: StatusEffects::new(),
        }
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
}
