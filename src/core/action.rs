//! Player actions and the action history.
//!
//! Each round the side to move takes exactly one action on a hand slot:
//! play the card there (it is then cycled out), or just discard it.

use serde::{Deserialize, Serialize};

use super::player::Side;
use crate::cards::CardId;

/// The two things a player can do with a hand slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Play,
    Discard,
}

/// An action descriptor: `{ action, index }`.
///
/// ```
/// use astromage::core::{Action, ActionKind};
///
/// let action = Action::play(2);
/// assert_eq!(action.kind, ActionKind::Play);
/// assert_eq!(action.index, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "action")]
    pub kind: ActionKind,
    /// Hand slot the action applies to.
    pub index: usize,
}

impl Action {
    /// Play the card in `index`.
    #[must_use]
    pub const fn play(index: usize) -> Self {
        Self {
            kind: ActionKind::Play,
            index,
        }
    }

    /// Discard the card in `index`.
    #[must_use]
    pub const fn discard(index: usize) -> Self {
        Self {
            kind: ActionKind::Discard,
            index,
        }
    }

    #[must_use]
    pub const fn is_play(&self) -> bool {
        matches!(self.kind, ActionKind::Play)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ActionKind::Play => write!(f, "play slot {}", self.index),
            ActionKind::Discard => write!(f, "discard slot {}", self.index),
        }
    }
}

/// A completed action, kept in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who acted.
    pub side: Side,

    /// What they did.
    pub action: Action,

    /// The card that was in the slot when the action was taken.
    pub card: CardId,

    /// Round number (1-based) the action belongs to.
    pub round: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(side: Side, action: Action, card: CardId, round: u32) -> Self {
        Self {
            side,
            action,
            card,
            round,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(Action::play(0).is_play());
        assert!(!Action::discard(0).is_play());
        assert_eq!(Action::discard(3).to_string(), "discard slot 3");
    }

    #[test]
    fn test_action_wire_shape() {
        let json = serde_json::to_string(&Action::play(4)).unwrap();
        assert_eq!(json, r#"{"action":"play","index":4}"#);

        let back: Action = serde_json::from_str(r#"{"action":"discard","index":1}"#).unwrap();
        assert_eq!(back, Action::discard(1));
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Side::PlayerTwo, Action::play(1), CardId::new(9), 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
