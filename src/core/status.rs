//! Status effects: named, timed modifiers attached to a player.
//!
//! Effects are kept in insertion order. Re-granting a kind that is already
//! active refreshes the existing entry in place instead of stacking a second
//! copy, so a player holds at most one effect per kind.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::stats::Resource;

/// What a status effect does each round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    /// Damage over time straight to health.
    Burn,
    /// Hull loss over time.
    Corrosion,
    /// Hull restored over time.
    Repair,
    /// Extra units of a resource each round.
    Boost(Resource),
    /// Lost units of a resource each round.
    Drain(Resource),
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusKind::Burn => f.write_str("burn"),
            StatusKind::Corrosion => f.write_str("corrosion"),
            StatusKind::Repair => f.write_str("repair"),
            StatusKind::Boost(resource) => write!(f, "{resource} boost"),
            StatusKind::Drain(resource) => write!(f, "{resource} drain"),
        }
    }
}

/// An active (or to-be-attached) status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Amount applied each round.
    pub magnitude: i64,
    /// Rounds left, including the next one processed.
    pub remaining: u32,
}

impl StatusEffect {
    /// Create a new status effect.
    #[must_use]
    pub const fn new(kind: StatusKind, magnitude: i64, remaining: u32) -> Self {
        Self {
            kind,
            magnitude,
            remaining,
        }
    }

    /// Whether the effect would do anything if attached.
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        self.magnitude == 0 || self.remaining == 0
    }
}

/// Active effects on one player, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusEffects {
    effects: Vector<StatusEffect>,
}

impl StatusEffects {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an effect.
    ///
    /// An inert effect is ignored. If the kind is already active, the entry
    /// keeps its position and takes the larger magnitude and duration.
    ///
    /// Returns `true` if anything changed.
    pub fn attach(&mut self, effect: StatusEffect) -> bool {
        if effect.is_inert() {
            return false;
        }

        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            let before = *existing;
            existing.magnitude = existing.magnitude.max(effect.magnitude);
            existing.remaining = existing.remaining.max(effect.remaining);
            return *existing != before;
        }

        self.effects.push_back(effect);
        true
    }

    /// Look up the active effect of a kind.
    #[must_use]
    pub fn get(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    /// Whether an effect of this kind is active.
    #[must_use]
    pub fn has(&self, kind: StatusKind) -> bool {
        self.get(kind).is_some()
    }

    /// Number of active effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether no effects are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    /// Iterate mutably in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut StatusEffect> {
        self.effects.iter_mut()
    }

    /// Drop every effect whose duration has run out.
    pub fn remove_expired(&mut self) {
        self.effects.retain(|e| e.remaining > 0);
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

impl FromIterator<StatusEffect> for StatusEffects {
    fn from_iter<I: IntoIterator<Item = StatusEffect>>(iter: I) -> Self {
        let mut set = Self::new();
        for effect in iter {
            set.attach(effect);
        }
        set
    }
}
