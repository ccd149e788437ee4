//! Durable key-value storage for session and preference state.
//!
//! The backend equivalent of browser local storage: a flat string map with
//! an infallible surface. Write failures are logged, never surfaced -
//! callers treat storage the way web code treats `localStorage`.
//!
//! Stores read it once at construction; external changes to the backing
//! file are not watched.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use tracing::error;

/// Storage key for the session bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-encoded logged-in user profile.
pub const USER_KEY: &str = "user";
/// Storage key for the UI theme ("light" | "dark").
pub const THEME_KEY: &str = "theme";

/// A durable string-to-string map.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Ephemeral in-memory storage. Used in tests and for sessions that should
/// not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// File-backed storage: one JSON object persisted write-through.
///
/// A missing or unreadable file starts the map empty rather than failing;
/// state that cannot be decoded is treated as absent.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open (or create on first write) the storage file at `path`.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    fn persist(&self, entries: &BTreeMap<String, String>) {
        match serde_json::to_string_pretty(entries) {
            Ok(json) => {
                if let Err(err) = std::fs::write(&self.path, json) {
                    error!(path = %self.path.display(), %err, "failed to persist storage");
                }
            }
            Err(err) => {
                error!(path = %self.path.display(), %err, "failed to encode storage");
            }
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        self.persist(&entries);
    }
}
