//! Card system: definitions, rarity, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Stable string identifier for card definitions
//! - `CardDefinition`: Static card data (rarity, type, cost, effect)
//! - `Rarity`: Tier with discovery weight, gem reward and color
//! - `CardInstance`: Per-player progress (level, owned, deck flag)
//! - `CardRegistry`: Card definition lookup, preloaded with the built-in catalog

pub mod catalog;
pub mod definition;
pub mod instance;
pub mod rarity;
pub mod registry;

pub use definition::{CardDefinition, CardEffect, CardId, CardType};
pub use instance::CardInstance;
pub use rarity::Rarity;
pub use registry::{CardRegistry, CatalogError};
