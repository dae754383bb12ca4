use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{ClubError, Result};

/// Key/value string storage that outlives the process, like a browser's
/// local storage.
pub trait PreferenceStorage {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage, mostly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a JSON object file mapping keys to strings.
///
/// The file is re-read on every access; a missing file is an empty store.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<BTreeMap<String, String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        serde_json::from_str(&raw).map_err(|e| ClubError::StorageFormat {
            path: self.path.display().to_string(),
            source: e,
        })
    }

    fn io_error(&self, source: std::io::Error) -> ClubError {
        ClubError::Storage {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl PreferenceStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.read_items() {
            Ok(mut items) => items.remove(key),
            Err(e) => {
                warn!(error = %e, key, "failed to read preference");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read_items()?;
        items.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let raw = serde_json::to_string_pretty(&items).map_err(|e| ClubError::StorageFormat {
            path: self.path.display().to_string(),
            source: e,
        })?;
        std::fs::write(&self.path, raw).map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("lastTab"), None);
        storage.set_item("lastTab", "events").unwrap();
        assert_eq!(storage.get_item("lastTab").as_deref(), Some("events"));
    }

    #[test]
    fn test_file_storage_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("prefs").join("storage.json"));

        assert_eq!(storage.get_item("lastTab"), None);
        storage.set_item("theme", "dark").unwrap();
        storage.set_item("lastTab", "leaderboard").unwrap();

        let reopened = FileStorage::new(storage.path());
        assert_eq!(reopened.get_item("lastTab").as_deref(), Some("leaderboard"));
        assert_eq!(reopened.get_item("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get_item("lastTab"), None);
        assert!(matches!(
            storage.set_item("lastTab", "home"),
            Err(ClubError::StorageFormat { .. })
        ));
    }
}
