//! Core engine types: currencies, state, actions, RNG, configuration.
//!
//! This module contains the building blocks the reducer and the session
//! operate on. Balance constants live in `EconomyConfig` rather than in the
//! rules themselves.

pub mod currency;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use currency::{format_amount, Currency, Wallet};
pub use rng::{GameRng, GameRngState};
pub use config::{EconomyConfig, DEFAULT_STORAGE_KEY};
pub use action::{Action, Effects, Outcome, Rejection};
pub use state::{GameState, Statistics};
