//! Engine errors.
//!
//! Every failure here is a local contract violation surfaced immediately;
//! nothing is transient and nothing is worth retrying. Errors fall into two
//! groups:
//!
//! - **Rule refusals**: the move is well-formed but not allowed right now
//!   (unaffordable card, acting out of turn or outside a match).
//! - **Contract violations**: the caller broke an engine invariant (a hand
//!   slot that does not exist, an empty hand, an empty card pool). These are
//!   programmer errors; state is left untouched.

use thiserror::Error;

use super::player::Side;
use super::stats::Resource;

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cannot afford {card}: costs {cost} {resource}, only {available} in stock")]
    Unaffordable {
        card: String,
        resource: Resource,
        cost: i64,
        available: i64,
    },

    #[error("hand slot {index} out of range for hand of {len}")]
    HandIndexOutOfRange { index: usize, len: usize },

    #[error("{0} has an empty hand")]
    EmptyHand(Side),

    #[error("card catalog is empty, nothing to draw")]
    EmptyCatalog,

    #[error("no match in progress")]
    GameNotInProgress,

    #[error("{0} already acted this round")]
    ActionAlreadyTaken(Side),

    #[error("{0} must play or discard before ending the round")]
    NoActionTaken(Side),
}

impl EngineError {
    /// Whether the error is a caller bug rather than a refused move.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            EngineError::HandIndexOutOfRange { .. }
                | EngineError::EmptyHand(_)
                | EngineError::EmptyCatalog
        )
    }
}
