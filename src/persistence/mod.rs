//! Snapshot persistence.
//!
//! ## Key Types
//!
//! - `SaveData`: Versioned snapshot envelope (capture, restore, encode, decode)
//! - `SnapshotFormat`: JSON or `bincode`
//! - `SnapshotStore`: Key-value backend, with `MemoryStore` and `FileStore`
//! - `PersistError`: Everything that can go wrong on the way
//!
//! ## Example
//!
//! ```
//! use kawa_clicker::cards::CardRegistry;
//! use kawa_clicker::core::{EconomyConfig, GameState};
//! use kawa_clicker::persistence::{MemoryStore, SaveData, SnapshotFormat, SnapshotStore};
//!
//! let registry = CardRegistry::builtin();
//! let config = EconomyConfig::default();
//! let state = GameState::new(&registry, &config);
//!
//! let mut store = MemoryStore::new();
//! let bytes = SaveData::capture(&state, None).encode(SnapshotFormat::Json).unwrap();
//! store.save("slot", &bytes).unwrap();
//!
//! let loaded = store.load("slot").unwrap().unwrap();
//! let restored = SaveData::decode(&loaded, SnapshotFormat::Json)
//!     .unwrap()
//!     .restore(&registry, &config);
//! assert_eq!(restored, state);
//! ```

pub mod error;
pub mod snapshot;
pub mod store;

pub use error::PersistError;
pub use snapshot::{
    CardSave, GameSave, SaveData, SnapshotFormat, MIN_COMPATIBLE_VERSION, SAVE_VERSION,
};
pub use store::{FileStore, MemoryStore, SnapshotStore};
