//! Persistence errors.

use thiserror::Error;

/// Failure to read, write, encode or decode a snapshot.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("snapshot io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed json snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed binary snapshot: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("storage key {0:?} is not a valid snapshot name")]
    InvalidKey(String),

    #[error("snapshot version {found} not supported (expected {min}..={max})")]
    IncompatibleVersion { found: u32, min: u32, max: u32 },
}
