//! Card packs: purchasable bundles of discoveries.

use std::str::FromStr;

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::engine::{discover_random_card, DiscoveryMode};
use crate::cards::{CardId, CardRegistry};
use crate::core::{GameRng, Wallet};

/// Largest number of cards any pack yields.
pub const MAX_PACK_SIZE: usize = 7;

/// Cards drawn from one pack.
pub type PackDraw = SmallVec<[CardId; MAX_PACK_SIZE]>;

/// Pack tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackType {
    Basic,
    Rare,
    Epic,
}

impl PackType {
    /// All packs in shop order.
    pub const ALL: [PackType; 3] = [PackType::Basic, PackType::Rare, PackType::Epic];

    /// Number of cards drawn.
    #[must_use]
    pub const fn card_count(self) -> usize {
        match self {
            PackType::Basic => 3,
            PackType::Rare => 5,
            PackType::Epic => MAX_PACK_SIZE,
        }
    }

    /// Purchase price.
    #[must_use]
    pub const fn cost(self) -> Wallet {
        match self {
            PackType::Basic => Wallet::new(0, 5, 0, 0),
            PackType::Rare => Wallet::new(0, 25, 2, 0),
            PackType::Epic => Wallet::new(0, 100, 10, 1),
        }
    }

    /// Lowercase key, matching the serialized form.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            PackType::Basic => "basic",
            PackType::Rare => "rare",
            PackType::Epic => "epic",
        }
    }

    /// Shop display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            PackType::Basic => "Basic Pack",
            PackType::Rare => "Rare Pack",
            PackType::Epic => "Epic Pack",
        }
    }

    /// Shop description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            PackType::Basic => "Three undiscovered cards.",
            PackType::Rare => "Five undiscovered cards.",
            PackType::Epic => "Seven undiscovered cards.",
        }
    }
}

impl std::fmt::Display for PackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Unknown pack name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown pack type {0:?}")]
pub struct UnknownPackType(pub String);

impl FromStr for PackType {
    type Err = UnknownPackType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PackType::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| UnknownPackType(s.to_string()))
    }
}

/// Draw up to `pack.card_count()` distinct cards not in `unlocked`.
///
/// Each draw excludes the unlocked set plus everything drawn so far. Stops
/// early once no candidates remain.
pub fn open_pack(
    pack: PackType,
    registry: &CardRegistry,
    unlocked: &ImHashSet<CardId>,
    rng: &mut GameRng,
    mode: DiscoveryMode,
) -> PackDraw {
    let mut excluded = unlocked.clone();
    let mut drawn = PackDraw::new();

    for _ in 0..pack.card_count() {
        let Some(card) = discover_random_card(registry, &excluded, rng, mode) else {
            break;
        };
        excluded.insert(card.id.clone());
        drawn.push(card.id.clone());
    }

    drawn
}
