//! Currencies and per-currency amounts.
//!
//! ## Currency
//!
//! The four fixed currency kinds: clicks, gems, stardust and essence.
//!
//! ## Wallet
//!
//! A fixed map from every currency to a `u64` amount. The same type is used
//! for player balances and for costs (a cost is just a wallet that gets
//! debited). Amounts never go negative: credits saturate and debits are only
//! performed through [`Wallet::checked_debit`], which refuses when the
//! balance is short.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the four currency kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Clicks,
    Gems,
    Stardust,
    Essence,
}

impl Currency {
    /// All currencies in display order.
    pub const ALL: [Currency; 4] = [
        Currency::Clicks,
        Currency::Gems,
        Currency::Stardust,
        Currency::Essence,
    ];

    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Currency::Clicks => "clicks",
            Currency::Gems => "gems",
            Currency::Stardust => "stardust",
            Currency::Essence => "essence",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Amount held (or owed) per currency.
///
/// Serializes as `{"clicks": .., "gems": .., "stardust": .., "essence": ..}`;
/// missing keys default to zero.
///
/// ## Example
///
/// ```
/// use kawa_clicker::core::{Currency, Wallet};
///
/// let balance = Wallet::new(100, 10, 2, 0);
/// let cost = Wallet::default().with(Currency::Gems, 5);
///
/// assert!(balance.can_afford(&cost));
/// let after = balance.checked_debit(&cost).unwrap();
/// assert_eq!(after[Currency::Gems], 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Wallet {
    pub clicks: u64,
    pub gems: u64,
    pub stardust: u64,
    pub essence: u64,
}

impl Wallet {
    /// Create a wallet from explicit amounts.
    #[must_use]
    pub const fn new(clicks: u64, gems: u64, stardust: u64, essence: u64) -> Self {
        Self {
            clicks,
            gems,
            stardust,
            essence,
        }
    }

    /// Set one currency (builder pattern).
    #[must_use]
    pub fn with(mut self, currency: Currency, amount: u64) -> Self {
        self[currency] = amount;
        self
    }

    /// Amount held for a currency.
    #[must_use]
    pub fn get(&self, currency: Currency) -> u64 {
        self[currency]
    }

    /// Add to a currency, saturating at `u64::MAX`.
    pub fn credit(&mut self, currency: Currency, amount: u64) {
        self[currency] = self[currency].saturating_add(amount);
    }

    /// True iff every balance covers the matching cost entry.
    #[must_use]
    pub fn can_afford(&self, cost: &Wallet) -> bool {
        Currency::ALL.iter().all(|&c| self[c] >= cost[c])
    }

    /// Subtract `cost` from every currency.
    ///
    /// Returns `None` (and leaves nothing changed) if any balance is short.
    #[must_use]
    pub fn checked_debit(&self, cost: &Wallet) -> Option<Wallet> {
        let mut out = *self;
        for c in Currency::ALL {
            out[c] = self[c].checked_sub(cost[c])?;
        }
        Some(out)
    }

    /// Check if every amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        Currency::ALL.iter().all(|&c| self[c] == 0)
    }

    /// Iterate `(currency, amount)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, u64)> + '_ {
        Currency::ALL.into_iter().map(move |c| (c, self[c]))
    }

    /// Iterate only the currencies with a non-zero amount.
    pub fn nonzero(&self) -> impl Iterator<Item = (Currency, u64)> + '_ {
        self.iter().filter(|&(_, amount)| amount > 0)
    }
}

impl Index<Currency> for Wallet {
    type Output = u64;

    fn index(&self, currency: Currency) -> &u64 {
        match currency {
            Currency::Clicks => &self.clicks,
            Currency::Gems => &self.gems,
            Currency::Stardust => &self.stardust,
            Currency::Essence => &self.essence,
        }
    }
}

impl IndexMut<Currency> for Wallet {
    fn index_mut(&mut self, currency: Currency) -> &mut u64 {
        match currency {
            Currency::Clicks => &mut self.clicks,
            Currency::Gems => &mut self.gems,
            Currency::Stardust => &mut self.stardust,
            Currency::Essence => &mut self.essence,
        }
    }
}

/// Compact display form for large amounts: `1.5K`, `2.0M`, `3.1B`.
///
/// Amounts below one thousand are printed as-is.
#[must_use]
pub fn format_amount(amount: u64) -> String {
    let value = amount as f64;
    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        amount.to_string()
    }
}
