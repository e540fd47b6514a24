//! Economy calculator: pure functions over cards and wallets.
//!
//! - `upgrade_cost` / `next_upgrade_cost`: exponential cost curve
//! - `aggregate_stats`: click power, auto-click rate and multiplier of a deck
//!
//! Affordability lives on the wallet itself (`Wallet::can_afford`).

pub mod cost;
pub mod stats;

pub use cost::{next_upgrade_cost, upgrade_cost};
pub use stats::{aggregate_stats, DeckStats};
