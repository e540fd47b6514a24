//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores all card definitions for a game. It provides
//! fast lookup by `CardId` (or by `&str`) and iterates in declaration order,
//! which is also the order of the per-card progress in `GameState`.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::catalog;
use super::definition::{CardDefinition, CardId};
use super::rarity::Rarity;

/// Catalog construction error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("card with id {0} already registered")]
    DuplicateId(CardId),
}

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use kawa_clicker::cards::{CardDefinition, CardRegistry, CardType, Rarity};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new("bolt", "Bolt", Rarity::Rare, CardType::Clicker));
///
/// let found = registry.get("bolt").unwrap();
/// assert_eq!(found.name, "Bolt");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    order: Vec<CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in card catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for card in catalog::builtin_cards() {
            registry.register(card);
        }
        registry
    }

    /// Build a registry from definitions, rejecting duplicate ids.
    pub fn from_definitions(
        cards: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut registry = Self::new();
        for card in cards {
            registry.try_register(card)?;
        }
        Ok(registry)
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if let Err(e) = self.try_register(card) {
            panic!("{}", e);
        }
    }

    /// Register a card definition, failing on a duplicate id.
    pub fn try_register(&mut self, card: CardDefinition) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }
        self.order.push(card.id.clone());
        self.cards.insert(card.id.clone(), card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over all card definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().filter_map(move |id| self.cards.get(id))
    }

    /// Card IDs in declaration order.
    #[must_use]
    pub fn ids(&self) -> &[CardId] {
        &self.order
    }

    /// Find cards by rarity.
    pub fn find_by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &CardDefinition> {
        self.iter().filter(move |c| c.rarity == rarity)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.iter().filter(move |c| predicate(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    fn card(id: &str, rarity: Rarity) -> CardDefinition {
        CardDefinition::new(id, id.to_uppercase(), rarity, CardType::Clicker)
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        registry.register(card("a", Rarity::Common));

        assert_eq!(registry.get("a").map(|c| c.name.as_str()), Some("A"));
        assert!(registry.get("missing").is_none());
        assert!(registry.contains("a"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut registry = CardRegistry::new();
        registry.register(card("a", Rarity::Common));
        registry.register(card("a", Rarity::Rare));
    }

    #[test]
    fn test_try_register_duplicate() {
        let result = CardRegistry::from_definitions(vec![
            card("a", Rarity::Common),
            card("b", Rarity::Common),
            card("a", Rarity::Epic),
        ]);
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateId(CardId::new("a")));
    }

    #[test]
    fn test_iteration_keeps_declaration_order() {
        let registry = CardRegistry::from_definitions(vec![
            card("z", Rarity::Common),
            card("m", Rarity::Rare),
            card("a", Rarity::Common),
        ])
        .unwrap();

        let ids: Vec<_> = registry.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "m", "a"]);
        assert_eq!(registry.ids().len(), 3);
    }

    #[test]
    fn test_find_by_rarity() {
        let registry = CardRegistry::from_definitions(vec![
            card("a", Rarity::Common),
            card("b", Rarity::Rare),
            card("c", Rarity::Common),
        ])
        .unwrap();

        assert_eq!(registry.find_by_rarity(Rarity::Common).count(), 2);
        assert_eq!(registry.find_by_rarity(Rarity::Mythic).count(), 0);
        assert_eq!(registry.find(|c| c.id.as_str() > "a").count(), 2);
    }

    #[test]
    fn test_builtin_catalog() {
        let registry = CardRegistry::builtin();
        assert_eq!(registry.len(), 18);
        for rarity in Rarity::ALL {
            assert_eq!(registry.find_by_rarity(rarity).count(), 3, "{rarity}");
        }
    }
}
