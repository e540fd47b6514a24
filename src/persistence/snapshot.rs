//! Versioned game snapshots.
//!
//! ## Versioning
//!
//! - `SAVE_VERSION`: current layout. Bump when fields are added.
//! - `MIN_COMPATIBLE_VERSION`: oldest layout that still loads. Bump only on
//!   breaking changes (a field removed or its meaning changed).
//!
//! Snapshots at or above `MIN_COMPATIBLE_VERSION` load with missing fields
//! defaulted. Anything outside the range is rejected.
//!
//! A JSON object without a `version` field is an unversioned legacy save:
//! the game fields sit at the top level instead of under `game`. It is read
//! as a `GameSave` and upgraded to the current layout on the next write.
//!
//! ## Trust
//!
//! A snapshot is untrusted input. Restoring it skips card ids the catalog
//! does not know, clamps levels to each card's max level, repairs the
//! ownership invariants and recomputes the deck stats instead of reading
//! them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::PersistError;
use crate::cards::{CardId, CardRegistry};
use crate::core::{EconomyConfig, GameRng, GameRngState, GameState, Statistics, Wallet};

/// Current snapshot layout version.
pub const SAVE_VERSION: u32 = 1;

/// Oldest snapshot layout that still loads.
pub const MIN_COMPATIBLE_VERSION: u32 = 1;

/// Byte encoding of a snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SnapshotFormat {
    /// camelCase JSON.
    #[default]
    Json,
    /// Compact `bincode` encoding of the same structure.
    Binary,
}

/// Top-level snapshot envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveData {
    pub version: u32,
    #[serde(default)]
    pub game: GameSave,
    /// RNG position, so a restored session continues the same sequence.
    #[serde(default)]
    pub rng: Option<GameRngState>,
}

/// Persisted game state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSave {
    pub currencies: Wallet,
    pub total_clicks: u64,
    /// Per-card progress, in catalog order.
    pub cards: Vec<CardSave>,
    /// Discovered ids, sorted.
    pub unlocked_cards: Vec<CardId>,
    pub statistics: Statistics,
}

/// Persisted progress on one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSave {
    pub id: CardId,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub owned: u32,
    #[serde(default)]
    pub in_deck: bool,
}

impl SaveData {
    /// Capture `state` and optionally the RNG position.
    #[must_use]
    pub fn capture(state: &GameState, rng: Option<&GameRng>) -> Self {
        Self {
            version: SAVE_VERSION,
            game: GameSave {
                currencies: state.currencies,
                total_clicks: state.total_clicks,
                cards: state
                    .cards()
                    .map(|c| CardSave {
                        id: c.card_id.clone(),
                        level: c.level,
                        owned: c.owned,
                        in_deck: c.in_deck,
                    })
                    .collect(),
                unlocked_cards: state.unlocked_sorted().into_iter().cloned().collect(),
                statistics: state.statistics,
            },
            rng: rng.map(GameRng::state),
        }
    }

    /// Rebuild a game state for `registry`.
    ///
    /// Starts from a fresh state, so catalog cards missing from the
    /// snapshot stay at level 0.
    #[must_use]
    pub fn restore(&self, registry: &CardRegistry, config: &EconomyConfig) -> GameState {
        let save = &self.game;
        let mut state = GameState::new(registry, config);
        state.currencies = save.currencies;
        state.total_clicks = save.total_clicks;
        state.statistics = save.statistics;

        for saved in &save.cards {
            let (Some(definition), Some(card)) =
                (registry.get(saved.id.as_str()), state.card_mut(saved.id.as_str()))
            else {
                debug!(card = %saved.id, "skipping unknown card in snapshot");
                continue;
            };
            card.level = saved.level;
            card.owned = saved.owned;
            card.in_deck = saved.in_deck;
            card.normalize(definition.max_level);
        }

        state.unlocked = save
            .unlocked_cards
            .iter()
            .filter(|id| registry.contains(id.as_str()))
            .cloned()
            .collect();

        state.recompute_stats(registry);
        state
    }

    /// Encode to bytes.
    pub fn encode(&self, format: SnapshotFormat) -> Result<Vec<u8>, PersistError> {
        let bytes = match format {
            SnapshotFormat::Json => serde_json::to_vec(self)?,
            SnapshotFormat::Binary => bincode::serialize(self)?,
        };
        Ok(bytes)
    }

    /// Decode from bytes and check the version.
    pub fn decode(bytes: &[u8], format: SnapshotFormat) -> Result<Self, PersistError> {
        let data: SaveData = match format {
            SnapshotFormat::Json => decode_json(bytes)?,
            SnapshotFormat::Binary => bincode::deserialize(bytes)?,
        };

        if !(MIN_COMPATIBLE_VERSION..=SAVE_VERSION).contains(&data.version) {
            return Err(PersistError::IncompatibleVersion {
                found: data.version,
                min: MIN_COMPATIBLE_VERSION,
                max: SAVE_VERSION,
            });
        }

        Ok(data)
    }

    /// Wrap an unversioned legacy save in the current envelope.
    #[must_use]
    pub fn from_legacy(game: GameSave) -> Self {
        Self {
            version: SAVE_VERSION,
            game,
            rng: None,
        }
    }
}

fn decode_json(bytes: &[u8]) -> Result<SaveData, PersistError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    if value.get("version").is_some() {
        return Ok(serde_json::from_value(value)?);
    }

    debug!("reading unversioned legacy save");
    let game: GameSave = serde_json::from_value(value)?;
    Ok(SaveData::from_legacy(game))
}
