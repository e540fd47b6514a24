//! Key-value snapshot stores.
//!
//! A store maps a storage key to the raw bytes of one encoded snapshot. It
//! does not interpret the bytes; encoding lives in [`super::snapshot`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::error::PersistError;

/// Storage backend for encoded snapshots.
pub trait SnapshotStore {
    /// Read the bytes stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, PersistError>;

    /// Replace the bytes stored under `key`.
    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), PersistError>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), PersistError>;
}

/// In-process store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one entry.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(key.into(), bytes.into());
        self
    }

    /// Bytes under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, PersistError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), PersistError> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One file per key in a directory.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so a crash mid-write leaves the previous snapshot intact. The
/// directory is created on first save.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the snapshot files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    ///
    /// Keys map to file names one-to-one: only `[A-Za-z0-9_.-]` is allowed,
    /// and a key may not be empty or start with `.`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, PersistError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(PersistError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.save")))
    }
}

impl SnapshotStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, PersistError> {
        match fs::read(self.path_for(key)?) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), PersistError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension("save.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistError> {
        match fs::remove_file(self.path_for(key)?) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn scratch_dir(name: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "kawa-clicker-store-{}-{}-{}",
            name,
            std::process::id(),
            n
        ))
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("k").unwrap(), None);

        store.save("k", b"abc").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some(&b"abc"[..]));
        assert_eq!(store.len(), 1);

        store.save("k", b"xyz").unwrap();
        assert_eq!(store.get("k"), Some(&b"xyz"[..]));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store() {
        let dir = scratch_dir("basic");
        let mut store = FileStore::new(&dir);

        assert_eq!(store.load("kawa-clicker-save").unwrap(), None);

        store.save("kawa-clicker-save", b"{}").unwrap();
        assert!(dir.join("kawa-clicker-save.save").exists());
        assert_eq!(
            store.load("kawa-clicker-save").unwrap().as_deref(),
            Some(&b"{}"[..])
        );

        store.save("kawa-clicker-save", b"[]").unwrap();
        assert_eq!(
            store.load("kawa-clicker-save").unwrap().as_deref(),
            Some(&b"[]"[..])
        );

        store.remove("kawa-clicker-save").unwrap();
        store.remove("kawa-clicker-save").unwrap();
        assert_eq!(store.load("kawa-clicker-save").unwrap(), None);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_key_mapping() {
        let store = FileStore::new("/tmp/saves");
        assert_eq!(
            store.path_for("slot_1").unwrap(),
            PathBuf::from("/tmp/saves/slot_1.save")
        );
        for key in ["slot 1", "../slot_1", ".hidden", "", "slot/1"] {
            assert!(
                matches!(store.path_for(key), Err(PersistError::InvalidKey(ref k)) if k == key),
                "{key:?}"
            );
        }
    }

    #[test]
    fn test_file_store_rejects_colliding_keys() {
        let dir = scratch_dir("keys");
        let mut store = FileStore::new(&dir);

        store.save("slot_1", b"one").unwrap();
        assert!(store.save("slot 1", b"two").is_err());
        assert!(store.load("slot 1").is_err());
        assert_eq!(store.load("slot_1").unwrap().as_deref(), Some(&b"one"[..]));

        let _ = fs::remove_dir_all(&dir);
    }
}
