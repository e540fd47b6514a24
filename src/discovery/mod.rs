//! Card discovery: weighted-random selection of undiscovered cards.
//!
//! ## Key Types
//!
//! - `DiscoveryMode`: How exhausted rarity tiers are handled
//! - `PackType`: Pack tier with draw count and price
//!
//! Single discoveries come from [`discover_random_card`]; packs batch
//! several draws through [`open_pack`] without repeating an id.

pub mod engine;
pub mod pack;

pub use engine::{discover_random_card, DiscoveryMode};
pub use pack::{open_pack, PackDraw, PackType, UnknownPackType, MAX_PACK_SIZE};
