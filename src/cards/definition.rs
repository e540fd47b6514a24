//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its rarity,
//! type, level cap, base upgrade cost and base effect. For example,
//! "Auto Finger" is an uncommon generator that costs 100 clicks and 2 gems
//! at level 0 and produces one auto-click per level.
//!
//! Per-player progress (level, copies owned, deck membership) is stored
//! separately in `CardInstance`.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use super::rarity::Rarity;
use crate::core::Wallet;

/// Unique, stable identifier for a card definition (e.g. `"rookie_clicker"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a card does for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    /// Adds click power.
    Clicker,
    /// Produces auto-clicks.
    Generator,
    /// Multiplies all click income.
    Multiplier,
    /// Carries a special effect tag.
    Special,
}

/// Per-level effect of a card. Unset fields contribute nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardEffect {
    /// Click power added per level.
    pub click_power: Option<f64>,
    /// Auto-clicks per interval added per level.
    pub auto_clicks: Option<f64>,
    /// Income multiplier applied once per level.
    pub multiplier: Option<f64>,
    /// Free-form effect tag, not interpreted by the economy.
    pub special: Option<String>,
}

impl CardEffect {
    /// Effect adding click power.
    #[must_use]
    pub fn click_power(amount: f64) -> Self {
        Self {
            click_power: Some(amount),
            ..Self::default()
        }
    }

    /// Effect adding auto-clicks.
    #[must_use]
    pub fn auto_clicks(amount: f64) -> Self {
        Self {
            auto_clicks: Some(amount),
            ..Self::default()
        }
    }

    /// Effect multiplying income.
    #[must_use]
    pub fn multiplier(factor: f64) -> Self {
        Self {
            multiplier: Some(factor),
            ..Self::default()
        }
    }

    /// Effect carrying only a special tag.
    #[must_use]
    pub fn special(tag: impl Into<String>) -> Self {
        Self {
            special: Some(tag.into()),
            ..Self::default()
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use kawa_clicker::cards::{CardDefinition, CardEffect, CardType, Rarity};
/// use kawa_clicker::core::Wallet;
///
/// let finger = CardDefinition::new("iron_finger", "Iron Finger", Rarity::Common, CardType::Clicker)
///     .with_max_level(8)
///     .with_cost(Wallet::new(25, 0, 0, 0))
///     .with_effect(CardEffect::click_power(2.0));
///
/// assert_eq!(finger.max_level, 8);
/// assert_eq!(finger.effect.click_power, Some(2.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Flavor text.
    pub description: String,

    /// Rarity tier (drives discovery weight and gem reward).
    pub rarity: Rarity,

    /// Card type.
    #[serde(rename = "type")]
    pub card_type: CardType,

    /// Highest reachable level (at least 1).
    pub max_level: u32,

    /// Upgrade cost at level 0.
    pub base_cost: Wallet,

    /// Effect per level.
    #[serde(rename = "baseEffect")]
    pub effect: CardEffect,
}

impl CardDefinition {
    /// Create a new card definition with max level 1, no cost and no effect.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rarity: Rarity,
        card_type: CardType,
    ) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            description: String::new(),
            rarity,
            card_type,
            max_level: 1,
            base_cost: Wallet::default(),
            effect: CardEffect::default(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the level cap. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level.max(1);
        self
    }

    /// Set the level-0 upgrade cost.
    #[must_use]
    pub fn with_cost(mut self, cost: Wallet) -> Self {
        self.base_cost = cost;
        self
    }

    /// Set the per-level effect.
    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effect = effect;
        self
    }
}
