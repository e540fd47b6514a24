//! Upgrade cost curve.
//!
//! Each level multiplies the base cost by `growth`:
//! `cost[c] = floor(base_cost[c] * growth^level)`.

use crate::cards::{CardDefinition, CardInstance};
use crate::core::{Currency, Wallet};

/// Cost of upgrading `definition` from `level` to `level + 1`.
///
/// ```
/// use kawa_clicker::cards::CardRegistry;
/// use kawa_clicker::economy::upgrade_cost;
///
/// let registry = CardRegistry::builtin();
/// let rookie = registry.get("rookie_clicker").unwrap();
///
/// assert_eq!(upgrade_cost(rookie, 0, 1.5).clicks, 10);
/// assert_eq!(upgrade_cost(rookie, 1, 1.5).clicks, 15);
/// assert_eq!(upgrade_cost(rookie, 2, 1.5).clicks, 22);
/// ```
#[must_use]
pub fn upgrade_cost(definition: &CardDefinition, level: u32, growth: f64) -> Wallet {
    let factor = growth.powi(level.min(i32::MAX as u32) as i32);
    let mut cost = Wallet::default();
    for c in Currency::ALL {
        cost[c] = scale(definition.base_cost[c], factor);
    }
    cost
}

/// Cost of the next upgrade, or `None` if the card is at max level.
#[must_use]
pub fn next_upgrade_cost(
    definition: &CardDefinition,
    instance: &CardInstance,
    growth: f64,
) -> Option<Wallet> {
    if instance.is_maxed(definition.max_level) {
        None
    } else {
        Some(upgrade_cost(definition, instance.level, growth))
    }
}

// Saturating float-to-int: NaN maps to 0, overflow to u64::MAX.
fn scale(base: u64, factor: f64) -> u64 {
    (base as f64 * factor).floor() as u64
}
