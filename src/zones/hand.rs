//! Hand management.
//!
//! A hand has a fixed number of slots. Discarding a slot immediately
//! refills it with a fresh draw, so the size never changes. Discarding is
//! always legal for an occupied slot, whatever the card costs.

use tracing::debug;

use crate::cards::{CardDefinition, CardRegistry};
use crate::core::{EngineError, GameRng, Player};

/// Result of cycling a hand slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discarded {
    /// Slot that was cycled.
    pub slot: usize,
    /// Card that left the hand.
    pub discarded: CardDefinition,
    /// Card that took its place.
    pub drawn: CardDefinition,
}

/// Validate a hand slot.
pub fn check_slot(player: &Player, slot: usize) -> Result<(), EngineError> {
    let len = player.hand.len();
    if slot >= len {
        return Err(EngineError::HandIndexOutOfRange { index: slot, len });
    }
    Ok(())
}

/// Remove the card in `slot` and refill the slot from `pool`.
///
/// An out-of-range slot is a contract violation: the hand is left untouched
/// and the error is returned to the caller.
pub fn discard_card(
    player: &mut Player,
    slot: usize,
    pool: &CardRegistry,
    rng: &mut GameRng,
) -> Result<Discarded, EngineError> {
    check_slot(player, slot)?;

    let drawn = pool.draw(rng)?;
    let discarded = player.hand.set(slot, drawn.clone());

    debug!(
        player = %player.name,
        slot,
        discarded = %discarded.name,
        drawn = %drawn.name,
        "hand slot cycled"
    );

    Ok(Discarded {
        slot,
        discarded,
        drawn,
    })
}
