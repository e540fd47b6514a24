//! # kawa-clicker
//!
//! Economy and state engine for an idle clicker with collectible cards.
//!
//! ## Design Principles
//!
//! 1. **Pure Reducer**: Every action maps one immutable snapshot to the next.
//!    Invalid actions are rejected with a reason and leave the state as it was.
//!
//! 2. **Configuration Over Constants**: Starting balances, cost growth,
//!    discovery odds and milestone intervals live in `EconomyConfig`.
//!
//! 3. **Explicit Ownership**: A `Session` owns the state, the RNG and the
//!    snapshot store. There are no globals.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so each action
//!   returns a full replacement snapshot cheaply.
//!
//! - **Deterministic RNG**: ChaCha8 with capturable state. A seeded session
//!   replays the same discoveries, and a restored session continues the
//!   sequence it was saved with.
//!
//! ## Modules
//!
//! - `core`: Currencies, state, actions, RNG, configuration
//! - `cards`: Catalog, rarity table, definitions and instances
//! - `economy`: Upgrade costs and deck stat aggregation
//! - `discovery`: Weighted-random card discovery and packs
//! - `rules`: The state reducer
//! - `persistence`: Versioned snapshots and snapshot stores
//! - `session`: Live session with auto-click timing and autosave

pub mod core;
pub mod cards;
pub mod economy;
pub mod discovery;
pub mod rules;
pub mod persistence;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    format_amount, Currency, Wallet,
    GameRng, GameRngState,
    EconomyConfig, DEFAULT_STORAGE_KEY,
    Action, Effects, Outcome, Rejection,
    GameState, Statistics,
};

pub use crate::cards::{
    CardDefinition, CardEffect, CardId, CardType, CardInstance,
    CardRegistry, CatalogError, Rarity,
};

pub use crate::economy::{aggregate_stats, next_upgrade_cost, upgrade_cost, DeckStats};

pub use crate::discovery::{discover_random_card, open_pack, DiscoveryMode, PackType};

pub use crate::rules::{apply, RulesContext, Transition};

pub use crate::persistence::{
    FileStore, MemoryStore, PersistError, SaveData, SnapshotFormat, SnapshotStore,
};

pub use crate::session::Session;
