//! The injected key-value store.
//!
//! The original client keeps everything in browser local storage. This module
//! abstracts that as a [`KeyValueStore`] port with explicit get/set/remove
//! operations: the file-backed implementation reads its contents once at
//! construction time and flushes on every mutation, matching the original's
//! "write on every profile change" lifecycle. The profile codec never touches
//! the store; only the application layer does.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Store key for the creator's own profile.
pub const PROFILE_KEY: &str = "creator_profile";

/// Store key for the session flag.
pub const SESSION_KEY: &str = "isAuthenticated";

/// Store key for the transaction history.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Errors from the store port.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store contents are malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A local-storage-style string-to-string store.
///
/// Values are opaque strings; structured records go through
/// [`get_json`]/[`set_json`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Reads a JSON value under `key`, if present and well-formed.
///
/// A present-but-malformed value is treated as absent, the way the original
/// client shrugs off unparseable local storage, but it is logged.
pub fn get_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(key, %error, "ignoring malformed store entry");
            None
        }
    }
}

/// Writes a value under `key` as JSON.
pub fn set_json<T: Serialize>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON object per store, loaded once at open and
/// flushed on every mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`, creating an empty one if the file does not
    /// exist yet.
    ///
    /// A file that exists but does not parse is an error rather than silent
    /// data loss.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => return Err(error.into()),
        };
        tracing::debug!(path = %path.display(), entries = entries.len(), "opened store");
        Ok(JsonFileStore { path, entries })
    }

    fn flush(&self) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
