//! Card registry: definition lookup and the draw pool.
//!
//! The `CardRegistry` stores every card a match can draw. Hands are dealt
//! and refilled by drawing uniformly from it, so the pool never runs out.

use im::Vector;
use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::{EngineError, GameRng, Resource};

/// Registry of card definitions.
///
/// Lookup is by `CardId`; draws go through a registration-ordered pool so
/// the same seed always draws the same cards.
///
/// ## Example
///
/// ```
/// use astromage::cards::{CardRegistry, CardDefinition, CardId};
/// use astromage::core::Resource;
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(1), "Ram", Resource::Ammunition, 6));
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Ram");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    pool: Vec<CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.pool.push(card.id);
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Find a card by display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.iter().find(|c| c.name == name)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.pool.iter().filter_map(|id| self.cards.get(id))
    }

    /// Cards paid for with a given resource.
    pub fn find_by_resource(&self, resource: Resource) -> impl Iterator<Item = &CardDefinition> {
        self.iter().filter(move |c| c.resource == resource)
    }

    /// Draw one card uniformly from the pool.
    pub fn draw(&self, rng: &mut GameRng) -> Result<CardDefinition, EngineError> {
        let id = rng.choose(&self.pool).ok_or(EngineError::EmptyCatalog)?;
        self.cards.get(id).cloned().ok_or(EngineError::EmptyCatalog)
    }

    /// Draw a full hand.
    pub fn deal(
        &self,
        size: usize,
        rng: &mut GameRng,
    ) -> Result<Vector<CardDefinition>, EngineError> {
        (0..size).map(|_| self.draw(rng)).collect()
    }
}
