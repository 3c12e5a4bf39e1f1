//! Status effect processing at the round boundary.
//!
//! Each active effect is applied once, in insertion order, then its
//! duration drops by one. Effects that reach zero are removed. Health may go
//! below zero here; the win check deals with that later.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Player, ResourcePool, Stat, StatusEffect, StatusKind};

/// One effect's contribution to a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTick {
    pub kind: StatusKind,
    /// Stat the effect changed.
    pub stat: Stat,
    /// Change actually applied (after flooring).
    pub applied: i64,
    /// Rounds left after this one. Zero means the effect expired.
    pub remaining: u32,
}

impl StatusTick {
    #[must_use]
    pub const fn expired(&self) -> bool {
        self.remaining == 0
    }
}

/// Apply, decay, and expire every active status effect on `player`.
pub fn status_handler(player: &mut Player) -> Vec<StatusTick> {
    let mut ticks = Vec::with_capacity(player.status_effects.len());

    for effect in player.status_effects.iter_mut() {
        let (stat, applied) = apply_effect(&mut player.stats, effect);
        effect.remaining = effect.remaining.saturating_sub(1);
        ticks.push(StatusTick {
            kind: effect.kind,
            stat,
            applied,
            remaining: effect.remaining,
        });
    }

    player.status_effects.remove_expired();

    if !ticks.is_empty() {
        debug!(player = %player.name, effects = ticks.len(), "status effects processed");
    }
    ticks
}

fn apply_effect(stats: &mut ResourcePool, effect: &StatusEffect) -> (Stat, i64) {
    let magnitude = effect.magnitude;
    let (stat, delta) = match effect.kind {
        StatusKind::Burn => (Stat::Health, -magnitude),
        StatusKind::Corrosion => (Stat::Hull, -magnitude),
        StatusKind::Repair => (Stat::Hull, magnitude),
        StatusKind::Boost(resource) => (resource.stock(), magnitude),
        StatusKind::Drain(resource) => (resource.stock(), -magnitude),
    };
    (stat, stats.apply_delta(stat, delta))
}
