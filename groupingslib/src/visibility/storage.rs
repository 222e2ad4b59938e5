//! Key-value persistence collaborators.
//!
//! The visibility store only needs `load(key)` and `save(key, value)` with
//! string values, the same contract a browser's local storage offers.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::GroupingsError;
use crate::Result;

/// String key-value storage that outlives a session.
pub trait KeyValueStorage {
    /// Read a value. `Ok(None)` when the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage. Lives as long as the value does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: pre-populate a key.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a single JSON object file: `{ "<key>": "<value>", ... }`.
///
/// The file is re-read on every access and rewritten on every save, so two
/// processes sharing it see each other's last write. A missing or corrupt
/// file reads as empty.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(GroupingsError::FileRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_str(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring corrupt storage file");
                Ok(BTreeMap::new())
            }
        }
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| GroupingsError::Storage(format!("{}: {e}", parent.display())))?;
            }
        }
        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, json)
            .map_err(|e| GroupingsError::Storage(format!("{}: {e}", self.path.display())))?;

        debug!(path = %self.path.display(), key, "saved storage entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.load("k").unwrap(), None);
        storage.save("k", "v").unwrap();
        assert_eq!(storage.load("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut storage = JsonFileStorage::new(&path);
        storage.save("columnVisibility", r#"{"path":true}"#).unwrap();
        storage.save("other", "x").unwrap();

        let reopened = JsonFileStorage::new(&path);
        assert_eq!(
            reopened.load("columnVisibility").unwrap().as_deref(),
            Some(r#"{"path":true}"#)
        );
        assert_eq!(reopened.load("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("absent.json"));
        assert_eq!(storage.load("columnVisibility").unwrap(), None);
    }

    #[test]
    fn test_file_storage_corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let mut storage = JsonFileStorage::new(&path);
        assert_eq!(storage.load("columnVisibility").unwrap(), None);

        // A save replaces the corrupt document
        storage.save("columnVisibility", "{}").unwrap();
        assert_eq!(storage.load("columnVisibility").unwrap().as_deref(), Some("{}"));
    }
}
