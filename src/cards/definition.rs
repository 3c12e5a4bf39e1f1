//! Card definitions - immutable card templates.
//!
//! A `CardDefinition` is what a player holds in hand: a display name, the
//! resource that pays for it, the cost, and the effect. Playing a card
//! reads the template and never changes it.
//!
//! Asset lookup (name → image) belongs to presentation; the engine only
//! carries the name.

use serde::{Deserialize, Serialize};

use crate::core::Resource;
use crate::effects::CardEffect;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use astromage::cards::{CardDefinition, CardId};
/// use astromage::core::{Resource, Stat};
/// use astromage::effects::CardEffect;
///
/// let reinforce = CardDefinition::new(CardId::new(1), "Reinforce Hull", Resource::Material, 2)
///     .with_effect(CardEffect::new().caster(Stat::Hull, 5));
///
/// assert_eq!(reinforce.cost, 2);
/// assert_eq!(reinforce.resource, Resource::Material);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Resource category; selects the stock that pays the cost.
    #[serde(rename = "type")]
    pub resource: Resource,

    /// Non-negative amount of `resource` needed to play the card.
    pub cost: i64,

    /// What the card does.
    pub effect: CardEffect,
}

impl CardDefinition {
    /// Create a card with no effect.
    ///
    /// Negative costs are raised to zero.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, resource: Resource, cost: i64) -> Self {
        Self {
            id,
            name: name.into(),
            resource,
            cost: cost.max(0),
            effect: CardEffect::default(),
        }
    }

    /// Set the effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effect = effect;
        self
    }
}

impl std::fmt::Display for CardDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} {})", self.name, self.cost, self.resource)
    }
}
