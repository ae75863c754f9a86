//! JSON file store
//!
//! The whole map lives in one JSON object file that is rewritten on every `set`.

use super::KeyValueStore;
use crate::error::StoreError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

/// Store persisted as a JSON object on disk
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// A missing file starts empty. An unreadable or corrupt file also starts
    /// empty (with a warning); it is overwritten by the next `set`.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring corrupt store {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Failed to read store {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };

        debug!("Opened store {} with {} keys", path.display(), values.len());
        Self {
            path,
            values: RwLock::new(values),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self
            .values
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        values.insert(key.to_string(), value.to_string());
        self.flush(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let store = JsonFileStore::open(&path);
        store.set("selectedEngineName", "Google").unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(
            reopened.get("selectedEngineName").as_deref(),
            Some("Google")
        );
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert!(store.get("anything").is_none());

        store.set("k", "v").unwrap();
        assert_eq!(JsonFileStore::open(&path).get("k").as_deref(), Some("v"));
    }
}
