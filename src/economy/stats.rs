//! Deck stat aggregation.

use serde::{Deserialize, Serialize};

use crate::cards::{CardDefinition, CardInstance};

/// Aggregate bonuses of the current deck.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    /// Clicks per manual click, before the multiplier.
    pub click_power: f64,
    /// Auto-clicks per interval, before the multiplier.
    pub auto_click_rate: f64,
    /// Income multiplier.
    pub multiplier: f64,
}

impl Default for DeckStats {
    fn default() -> Self {
        Self::BASE
    }
}

impl DeckStats {
    /// Stats of an empty deck.
    pub const BASE: DeckStats = DeckStats {
        click_power: 1.0,
        auto_click_rate: 0.0,
        multiplier: 1.0,
    };

    /// Clicks credited for one manual click.
    #[must_use]
    pub fn click_value(&self) -> u64 {
        (self.click_power * self.multiplier).floor() as u64
    }

    /// Clicks credited for one auto-click tick.
    #[must_use]
    pub fn tick_value(&self) -> u64 {
        (self.auto_click_rate * self.multiplier).floor() as u64
    }

    /// Check if auto-clicking produces anything.
    #[must_use]
    pub fn has_auto_clicks(&self) -> bool {
        self.auto_click_rate > 0.0
    }
}

/// Aggregate the effects of the given deck cards.
///
/// Starts from [`DeckStats::BASE`]. Every card with `level > 0` adds
/// `click_power * level` and `auto_clicks * level`, and multiplies the
/// multiplier by `multiplier^level`. Callers pass only cards that are in the
/// deck; this function does not filter on `in_deck`.
pub fn aggregate_stats<'a, I>(deck: I) -> DeckStats
where
    I: IntoIterator<Item = (&'a CardDefinition, &'a CardInstance)>,
{
    let mut stats = DeckStats::BASE;

    for (definition, instance) in deck {
        if instance.level == 0 {
            continue;
        }
        let level = instance.level as f64;
        let effect = &definition.effect;

        if let Some(power) = effect.click_power {
            stats.click_power += power * level;
        }
        if let Some(auto) = effect.auto_clicks {
            stats.auto_click_rate += auto * level;
        }
        if let Some(mult) = effect.multiplier {
            stats.multiplier *= mult.powf(level);
        }
    }

    stats
}
