//! Match progress: phase, turn ownership, and the winner.
//!
//! `GameState` is the one process-wide record of where a match stands.
//! It moves `NotStarted` → `Playing` → `Won`; only `new_game` leaves `Won`.

use serde::{Deserialize, Serialize};

use super::player::Side;
use super::stats::Stat;

/// Coarse game phase, derived from the state flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Playing,
    Won,
}

/// Why a side won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The opponent's health fell to zero or below.
    OpponentDestroyed,
    /// One of the winner's stocks reached the threshold.
    Threshold(Stat),
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinReason::OpponentDestroyed => f.write_str("opponent destroyed"),
            WinReason::Threshold(stat) => write!(f, "{stat} threshold reached"),
        }
    }
}

/// Match progress record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// A match is in progress.
    pub started: bool,

    /// The match has been won.
    pub win: bool,

    /// Who won, once `win` is set.
    pub winner: Option<Side>,

    /// Why they won.
    pub win_reason: Option<WinReason>,

    /// Whose round it is.
    pub turn: Side,

    /// Rounds completed so far.
    pub round: u32,
}

impl GameState {
    /// The state before any match has been started.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            started: false,
            win: false,
            winner: None,
            win_reason: None,
            turn: Side::PlayerOne,
            round: 0,
        }
    }

    /// A freshly started match, `PlayerOne` to move.
    #[must_use]
    pub fn new_game() -> Self {
        Self {
            started: true,
            ..Self::initial()
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.win {
            Phase::Won
        } else if self.started {
            Phase::Playing
        } else {
            Phase::NotStarted
        }
    }

    /// Whether rounds can still be played.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase() == Phase::Playing
    }

    /// Hand the turn to the other side and count the round.
    pub fn flip_turn(&mut self) {
        self.turn = self.turn.other();
        self.round += 1;
    }

    /// Record a win. The match stops.
    pub fn declare_winner(&mut self, side: Side, reason: WinReason) {
        self.started = false;
        self.win = true;
        self.winner = Some(side);
        self.win_reason = Some(reason);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
