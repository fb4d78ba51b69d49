//! Read-only state store boundary
//!
//! The validator never owns the game state; it reads it from an external
//! key-value store on every pass. [`StateStore`] is that seam, with a
//! file-backed implementation for storage exports and an in-memory one
//! for tests and embedding.

use super::stored::StoredState;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Storage key the puzzle persists its board under
pub const STATE_KEY: &str = "nyt-wordle-state";

/// A read-only, string-keyed view of the host's storage
pub trait StateStore {
    /// Fetch the raw serialized value for a key, if present
    fn get(&self, key: &str) -> Option<String>;

    /// Read and parse the board state under [`STATE_KEY`]
    ///
    /// Absent key and unparsable value both degrade to `None`: no
    /// constraints are known, every rule passes vacuously.
    fn load_state(&self) -> Option<StoredState> {
        StoredState::from_json(&self.get(STATE_KEY)?)
    }
}

/// Store backed by a JSON object file (a storage export)
///
/// The file maps keys to values. A value that is itself a JSON string is
/// returned verbatim (localStorage exports double-encode the payload);
/// any other value is re-serialized before being handed back.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Point the store at an export file; the file is re-read on every `get`
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The export file this store reads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "state file unreadable");
                return None;
            }
        };

        let export: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "state file is not a JSON object");
                return None;
            }
        };

        match export.get(key)? {
            serde_json::Value::String(value) => Some(value.clone()),
            value => Some(value.to_string()),
        }
    }
}

/// In-memory store for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Remove a value
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
