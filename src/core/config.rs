//! Economy configuration.
//!
//! `EconomyConfig` holds every tunable constant of the game loop: starting
//! balances, the upgrade cost curve, discovery odds, milestone bonuses, the
//! auto-click interval and persistence settings. The defaults reproduce the
//! shipped game balance.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::currency::Wallet;
use crate::discovery::DiscoveryMode;
use crate::persistence::SnapshotFormat;

/// Default key the session snapshot is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "kawa-clicker-save";

/// Economy and session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EconomyConfig {
    /// Balances of a brand-new game.
    pub starting_currencies: Wallet,

    /// Cost growth per upgrade level: `cost = floor(base * growth^level)`.
    pub upgrade_growth: f64,

    /// Discovery chance added per total click.
    pub discovery_rate_per_click: f64,

    /// Upper bound on the per-click discovery chance.
    pub discovery_chance_cap: f64,

    /// Every n-th total click awards one gem (0 disables).
    pub gem_bonus_interval: u64,

    /// Every n-th total click awards one stardust (0 disables).
    pub stardust_bonus_interval: u64,

    /// Wall time between auto-click ticks.
    pub tick_interval: Duration,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// How rarity tiers with no remaining candidates are handled.
    pub discovery_mode: DiscoveryMode,

    /// Encoding used when writing snapshots.
    pub snapshot_format: SnapshotFormat,

    /// Key the snapshot is stored under.
    pub storage_key: String,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_currencies: Wallet::new(100, 10, 2, 0),
            upgrade_growth: 1.5,
            discovery_rate_per_click: 0.0001,
            discovery_chance_cap: 0.1,
            gem_bonus_interval: 100,
            stardust_bonus_interval: 1000,
            tick_interval: Duration::from_secs(1),
            seed: None,
            discovery_mode: DiscoveryMode::FallThrough,
            snapshot_format: SnapshotFormat::Json,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl EconomyConfig {
    /// Set the starting balances.
    #[must_use]
    pub fn with_starting_currencies(mut self, wallet: Wallet) -> Self {
        self.starting_currencies = wallet;
        self
    }

    /// Use a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the discovery mode.
    #[must_use]
    pub fn with_discovery_mode(mut self, mode: DiscoveryMode) -> Self {
        self.discovery_mode = mode;
        self
    }

    /// Set the snapshot encoding.
    #[must_use]
    pub fn with_snapshot_format(mut self, format: SnapshotFormat) -> Self {
        self.snapshot_format = format;
        self
    }

    /// Set the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the auto-click interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Discovery chance for a click that brings the total to `total_clicks`.
    ///
    /// Grows linearly and is clamped at `discovery_chance_cap`.
    #[must_use]
    pub fn discovery_chance(&self, total_clicks: u64) -> f64 {
        (total_clicks as f64 * self.discovery_rate_per_click).min(self.discovery_chance_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EconomyConfig::default();
        assert_eq!(config.starting_currencies, Wallet::new(100, 10, 2, 0));
        assert_eq!(config.upgrade_growth, 1.5);
        assert_eq!(config.gem_bonus_interval, 100);
        assert_eq!(config.stardust_bonus_interval, 1000);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.seed, None);
        assert_eq!(config.storage_key, "kawa-clicker-save");
    }

    #[test]
    fn test_builder_pattern() {
        let config = EconomyConfig::default()
            .with_seed(123)
            .with_storage_key("slot-2")
            .with_discovery_mode(DiscoveryMode::Renormalized);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.storage_key, "slot-2");
        assert_eq!(config.discovery_mode, DiscoveryMode::Renormalized);
    }

    #[test]
    fn test_discovery_chance_ramp_and_cap() {
        let config = EconomyConfig::default();
        assert_eq!(config.discovery_chance(0), 0.0);
        assert!((config.discovery_chance(500) - 0.05).abs() < 1e-12);
        assert!((config.discovery_chance(1000) - 0.1).abs() < 1e-12);
        assert_eq!(config.discovery_chance(5000), 0.1);
        assert_eq!(config.discovery_chance(u64::MAX), 0.1);
    }

    #[test]
    fn test_serialization() {
        let config = EconomyConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EconomyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
