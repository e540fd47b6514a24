//! Weighted-random card discovery.
//!
//! ## Algorithm
//!
//! Candidates are the catalog cards not in the exclusion set, in catalog
//! order. A value `r` is drawn uniformly from `[0, total_weight)`, then the
//! rarity tiers are walked in declaration order:
//!
//! - a tier matches when `r < weight`
//! - a matching tier with candidates yields a uniform pick among them
//! - after each tier, `r -= weight`
//!
//! Once a tier has matched, `r` is negative, so an empty matching tier
//! falls through to the next tier that still has candidates. If no tier
//! yields a card, a uniform pick over all candidates is made. Discovery
//! therefore always succeeds while candidates exist.
//!
//! Falling through shifts probability mass from exhausted tiers to the
//! next rarer tier rather than spreading it over all remaining tiers.
//! [`DiscoveryMode::Renormalized`] spreads it proportionally instead.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardDefinition, CardId, CardRegistry, Rarity};
use crate::core::GameRng;

/// How tiers without remaining candidates are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscoveryMode {
    /// Draw over all tiers; an empty tier hands its hit to the next
    /// non-empty tier in declaration order.
    #[default]
    FallThrough,
    /// Draw only over tiers that still have candidates.
    Renormalized,
}

/// Pick one undiscovered card, or `None` when every card is excluded.
pub fn discover_random_card<'r>(
    registry: &'r CardRegistry,
    excluded: &ImHashSet<CardId>,
    rng: &mut GameRng,
    mode: DiscoveryMode,
) -> Option<&'r CardDefinition> {
    let candidates: Vec<&CardDefinition> = registry
        .iter()
        .filter(|c| !excluded.contains(&c.id))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let mut tiers: SmallVec<[(Rarity, SmallVec<[&CardDefinition; 4]>); 6]> = SmallVec::new();
    for rarity in Rarity::ALL {
        let members: SmallVec<[&CardDefinition; 4]> = candidates
            .iter()
            .copied()
            .filter(|c| c.rarity == rarity)
            .collect();
        if mode == DiscoveryMode::FallThrough || !members.is_empty() {
            tiers.push((rarity, members));
        }
    }

    let total: f64 = tiers.iter().map(|(r, _)| r.weight()).sum();
    let mut remaining = rng.gen_below(total);

    for (rarity, members) in &tiers {
        let weight = rarity.weight();
        if remaining < weight {
            if let Some(&card) = rng.choose(members) {
                return Some(card);
            }
        }
        remaining -= weight;
    }

    rng.choose(&candidates).copied()
}
