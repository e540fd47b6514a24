//! Card instances - per-player card progress.
//!
//! `CardInstance` tracks the mutable side of a catalog card: its level,
//! how many copies the player has acquired, and whether it sits in the
//! deck.
//!
//! ## Invariants
//!
//! - `level > 0` implies `owned > 0`
//! - `in_deck` implies `owned > 0`
//! - `level <= max_level` of the definition

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// Progress on one catalog card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInstance {
    /// Reference to the card definition.
    pub card_id: CardId,

    /// Current level (0 = never upgraded).
    pub level: u32,

    /// Copies acquired, through discovery, packs and upgrades.
    pub owned: u32,

    /// Whether the card contributes its effect.
    pub in_deck: bool,
}

impl CardInstance {
    /// Fresh instance: level 0, none owned, not in deck.
    #[must_use]
    pub fn new(card_id: CardId) -> Self {
        Self {
            card_id,
            level: 0,
            owned: 0,
            in_deck: false,
        }
    }

    /// Check if at least one copy has been acquired.
    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owned > 0
    }

    /// Check if the card has reached `max_level`.
    #[must_use]
    pub fn is_maxed(&self, max_level: u32) -> bool {
        self.level >= max_level
    }

    /// Add one acquired copy.
    pub fn acquire(&mut self) {
        self.owned = self.owned.saturating_add(1);
    }

    /// Raise the level by one. An upgrade also counts as acquiring a copy.
    pub fn level_up(&mut self) {
        self.level += 1;
        self.acquire();
    }

    /// Re-establish the invariants on untrusted data.
    ///
    /// Clamps the level to `max_level`, gives leveled cards at least one
    /// copy, and removes unowned cards from the deck.
    pub fn normalize(&mut self, max_level: u32) {
        self.level = self.level.min(max_level);
        if self.level > 0 && self.owned == 0 {
            self.owned = 1;
        }
        if self.owned == 0 {
            self.in_deck = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_instance() {
        let card = CardInstance::new(CardId::new("auto_finger"));
        assert_eq!(card.level, 0);
        assert_eq!(card.owned, 0);
        assert!(!card.in_deck);
        assert!(!card.is_owned());
    }

    #[test]
    fn test_level_up_acquires() {
        let mut card = CardInstance::new(CardId::new("auto_finger"));
        card.level_up();
        assert_eq!(card.level, 1);
        assert_eq!(card.owned, 1);
        assert!(!card.is_maxed(2));

        card.level_up();
        assert!(card.is_maxed(2));
    }

    #[test]
    fn test_normalize() {
        let mut card = CardInstance {
            card_id: CardId::new("x"),
            level: 9,
            owned: 0,
            in_deck: true,
        };
        card.normalize(3);
        assert_eq!(card.level, 3);
        assert_eq!(card.owned, 1);
        assert!(card.in_deck);

        let mut unowned = CardInstance {
            card_id: CardId::new("y"),
            level: 0,
            owned: 0,
            in_deck: true,
        };
        unowned.normalize(3);
        assert!(!unowned.in_deck);
    }

    #[test]
    fn test_serialization() {
        let mut card = CardInstance::new(CardId::new("void_engine"));
        card.acquire();
        card.in_deck = true;

        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains(r#""inDeck":true"#));
        let back: CardInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
