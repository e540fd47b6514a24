//! Game state: the aggregate root every action produces a new copy of.
//!
//! ## GameState
//!
//! - Wallet balances and lifetime click count
//! - One `CardInstance` per catalog card, in catalog order
//! - Unlocked (discovered) card ids
//! - Derived deck stats
//! - Collection statistics
//!
//! Cards and unlocked ids use `im` persistent structures, so cloning a state
//! is O(1) and the reducer can return a fresh snapshot for every action
//! without touching the previous one.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use super::config::EconomyConfig;
use super::currency::Wallet;
use crate::cards::{CardId, CardInstance, CardRegistry};
use crate::economy::{aggregate_stats, DeckStats};

/// Collection statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    /// Cards acquired through discovery and packs.
    pub total_cards_collected: u64,

    /// Cards of rarity rare or above among those.
    pub rare_cards_found: u64,

    /// Auto-click rate observed on the last tick.
    pub clicks_per_second: f64,

    /// Carried for save compatibility. Nothing updates it.
    pub highest_combo: u64,
}

/// Complete game state.
///
/// Uses `im` persistent data structures for O(1) cloning.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Current balances.
    pub currencies: Wallet,

    /// Manual clicks performed so far.
    pub total_clicks: u64,

    /// Collection statistics.
    pub statistics: Statistics,

    pub(crate) cards: Vector<CardInstance>,
    pub(crate) unlocked: ImHashSet<CardId>,
    pub(crate) stats: DeckStats,
}

impl GameState {
    /// Fresh state for `registry`: starting balances from `config`, every
    /// card at level 0 and unowned, nothing unlocked.
    #[must_use]
    pub fn new(registry: &CardRegistry, config: &EconomyConfig) -> Self {
        Self {
            currencies: config.starting_currencies,
            total_clicks: 0,
            statistics: Statistics::default(),
            cards: registry
                .ids()
                .iter()
                .cloned()
                .map(CardInstance::new)
                .collect(),
            unlocked: ImHashSet::new(),
            stats: DeckStats::BASE,
        }
    }

    /// Current deck stats.
    #[must_use]
    pub fn stats(&self) -> &DeckStats {
        &self.stats
    }

    /// All card instances, in catalog order.
    pub fn cards(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    /// Get a card instance by id.
    #[must_use]
    pub fn card(&self, id: &str) -> Option<&CardInstance> {
        self.cards.iter().find(|c| c.card_id.as_str() == id)
    }

    pub(crate) fn card_mut(&mut self, id: &str) -> Option<&mut CardInstance> {
        let index = self.cards.iter().position(|c| c.card_id.as_str() == id)?;
        self.cards.get_mut(index)
    }

    /// Cards currently in the deck.
    pub fn deck(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter().filter(|c| c.in_deck)
    }

    /// Discovered card ids.
    #[must_use]
    pub fn unlocked(&self) -> &ImHashSet<CardId> {
        &self.unlocked
    }

    /// Check if a card has been discovered.
    #[must_use]
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    /// Discovered ids in sorted order.
    #[must_use]
    pub fn unlocked_sorted(&self) -> Vec<&CardId> {
        let mut ids: Vec<&CardId> = self.unlocked.iter().collect();
        ids.sort();
        ids
    }

    /// Recompute the derived deck stats from the current deck.
    pub(crate) fn recompute_stats(&mut self, registry: &CardRegistry) {
        self.stats = aggregate_stats(
            self.deck()
                .filter_map(|inst| registry.get(inst.card_id.as_str()).map(|def| (def, inst))),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let registry = CardRegistry::builtin();
        let state = GameState::new(&registry, &EconomyConfig::default());

        assert_eq!(state.currencies, Wallet::new(100, 10, 2, 0));
        assert_eq!(state.total_clicks, 0);
        assert_eq!(state.cards().count(), registry.len());
        assert!(state.cards().all(|c| c.level == 0 && c.owned == 0 && !c.in_deck));
        assert!(state.unlocked().is_empty());
        assert_eq!(*state.stats(), DeckStats::BASE);
        assert_eq!(state.statistics, Statistics::default());
    }

    #[test]
    fn test_cards_follow_catalog_order() {
        let registry = CardRegistry::builtin();
        let state = GameState::new(&registry, &EconomyConfig::default());

        let order: Vec<&CardId> = state.cards().map(|c| &c.card_id).collect();
        let expected: Vec<&CardId> = registry.ids().iter().collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_clone_is_independent() {
        let registry = CardRegistry::builtin();
        let state = GameState::new(&registry, &EconomyConfig::default());

        let mut next = state.clone();
        next.card_mut("iron_finger").unwrap().acquire();
        next.unlocked.insert(CardId::new("iron_finger"));

        assert_eq!(state.card("iron_finger").unwrap().owned, 0);
        assert!(!state.is_unlocked("iron_finger"));
        assert_eq!(next.card("iron_finger").unwrap().owned, 1);
        assert!(next.is_unlocked("iron_finger"));
    }

    #[test]
    fn test_recompute_stats_uses_deck_only() {
        let registry = CardRegistry::builtin();
        let mut state = GameState::new(&registry, &EconomyConfig::default());

        state.card_mut("iron_finger").unwrap().level_up();
        state.card_mut("click_bot").unwrap().level_up();
        state.card_mut("click_bot").unwrap().in_deck = true;
        state.recompute_stats(&registry);

        assert_eq!(state.stats().click_power, 1.0);
        assert_eq!(state.stats().auto_click_rate, 3.0);
        assert_eq!(state.deck().count(), 1);
    }

    #[test]
    fn test_unlocked_sorted() {
        let registry = CardRegistry::builtin();
        let mut state = GameState::new(&registry, &EconomyConfig::default());
        for id in ["swift_tap", "auto_finger", "iron_finger"] {
            state.unlocked.insert(CardId::new(id));
        }

        let sorted: Vec<&str> = state.unlocked_sorted().into_iter().map(CardId::as_str).collect();
        assert_eq!(sorted, ["auto_finger", "iron_finger", "swift_tap"]);
    }
}
