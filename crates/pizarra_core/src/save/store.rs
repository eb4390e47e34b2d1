//! Layout storage port
//!
//! The board persists through this narrow key/value interface: the web
//! host backs it with browser local storage, tests and native hosts use
//! the implementations here. Load returns `None` for an absent key,
//! since a first visit is not an error.

use super::error::SaveError;
use std::collections::HashMap;
use std::fs::{rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub trait LayoutStore {
    fn load(&self, key: &str) -> Result<Option<String>, SaveError>;
    fn save(&mut self, key: &str, blob: &str) -> Result<(), SaveError>;
}

/// In-memory store for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl LayoutStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, SaveError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), SaveError> {
        self.entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// File-backed store: one file per key under a directory. Writes go
/// through a temp file and an atomic rename so a crash mid-write never
/// leaves a half-written layout behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn write_atomic(path: &Path, blob: &str) -> Result<(), SaveError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(blob.as_bytes())?;
            file.flush()?;
            file.sync_all()?;
        }
        rename(&temp_path, path)?;

        log::debug!("Saved {} bytes to {:?}", blob.len(), path);
        Ok(())
    }
}

impl LayoutStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, SaveError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let mut file = File::open(&path)?;
        let mut blob = String::new();
        file.read_to_string(&mut blob)?;

        log::debug!("Loaded {} bytes from {:?}", blob.len(), path);
        Ok(Some(blob))
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), SaveError> {
        Self::write_atomic(&self.key_path(key), blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("k").unwrap(), None);

        store.save("k", "value").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("value"));

        store.save("k", "newer").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("newer"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        assert_eq!(store.load("tokens").unwrap(), None);
        store.save("tokens", r#"[{"id":"t0"}]"#).unwrap();
        assert_eq!(store.load("tokens").unwrap().as_deref(), Some(r#"[{"id":"t0"}]"#));
    }

    #[test]
    fn test_file_store_keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.save("a", "1").unwrap();
        store.save("b", "2").unwrap();
        assert_eq!(store.load("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.load("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_store_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.save("tokens", "x").unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map(|x| x == "tmp").unwrap_or(false))
            .collect();
        assert!(leftovers.is_empty());
    }
}
