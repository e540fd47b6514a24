//! Rarity tiers and their lookup tables.
//!
//! Each tier carries a discovery weight, a gem reward paid when a card of
//! that tier is discovered by clicking, and a display color. Tiers are
//! declared from most to least common; discovery walks them in this order.

use serde::{Deserialize, Serialize};

/// Card rarity tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    /// All tiers in declaration order.
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    /// Relative discovery weight.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Rarity::Common => 50.0,
            Rarity::Uncommon => 30.0,
            Rarity::Rare => 15.0,
            Rarity::Epic => 4.0,
            Rarity::Legendary => 0.9,
            Rarity::Mythic => 0.1,
        }
    }

    /// Gems awarded when a card of this tier is discovered by clicking.
    #[must_use]
    pub const fn gem_reward(self) -> u64 {
        match self {
            Rarity::Common => 1,
            Rarity::Uncommon => 2,
            Rarity::Rare => 5,
            Rarity::Epic => 15,
            Rarity::Legendary => 50,
            Rarity::Mythic => 200,
        }
    }

    /// Display color as a hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Rarity::Common => "#9ca3af",
            Rarity::Uncommon => "#10b981",
            Rarity::Rare => "#3b82f6",
            Rarity::Epic => "#8b5cf6",
            Rarity::Legendary => "#f59e0b",
            Rarity::Mythic => "#ef4444",
        }
    }

    /// Rare and above count toward the "rare cards found" statistic.
    #[must_use]
    pub const fn is_rare(self) -> bool {
        !matches!(self, Rarity::Common | Rarity::Uncommon)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }

    /// Sum of all tier weights.
    #[must_use]
    pub fn total_weight() -> f64 {
        Self::ALL.iter().map(|r| r.weight()).sum()
    }

    /// Probability of a weighted draw landing on this tier.
    #[must_use]
    pub fn probability(self) -> f64 {
        self.weight() / Self::total_weight()
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
