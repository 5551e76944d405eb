//! Small string key-value persistence used for favorites and preferences.

use crate::error::StoreError;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name used inside the data directory
pub const STORE_FILE_NAME: &str = "store.json";

/// A string-to-string store; callers decide how to react to failures
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, lost when dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object on disk.
///
/// Every `set` rewrites the whole file through a sibling temp file and a rename.
/// A missing file reads as empty; a corrupt one is replaced on the next `set`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/store.json`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StoreError::Serialization(e)) => {
                warn!(
                    "Discarding unreadable store {}: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&entries)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Wrote key '{}' to {}", key, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::in_dir(dir.path());
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_and_creates_dirs() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let mut store = JsonFileStore::in_dir(&nested);
        store.set("one", "1").unwrap();
        store.set("two", "2").unwrap();

        let reopened = JsonFileStore::in_dir(&nested);
        assert_eq!(reopened.get("one").unwrap().as_deref(), Some("1"));
        assert_eq!(reopened.get("two").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_store_corrupt_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.get("k"),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_file_store_write_replaces_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        fs::write(&path, r#"{"f2t_favorites": "#).unwrap();

        let mut store = JsonFileStore::new(&path);
        store.set("f2t_contrast", "true").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("f2t_contrast").unwrap().as_deref(), Some("true"));
        assert!(!path.with_extension("json.tmp").exists());
    }
}
