//! Key-value storage backends
//!
//! The transaction store persists everything under a single named entry in a
//! key-value store. Injecting the store as a trait keeps persistence swappable:
//! production uses [`JsonFileStore`] (one file per key, atomic writes), tests
//! use [`MemoryStore`].

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;

/// Local key-value storage with string keys and string values
///
/// Implementations must tolerate `&self` access from a single logical writer;
/// no cross-process locking is required or provided. Two stores over the same
/// backing entry can silently overwrite each other (known limitation).
pub trait KeyValue {
    /// Read the value under `key`, `None` if the entry does not exist
    fn get(&self, key: &str) -> Result<Option<String>, FintrackError>;

    /// Write `value` under `key`, replacing any previous value as one unit
    fn set(&self, key: &str, value: &str) -> Result<(), FintrackError>;
}

// Allows one backend to be shared between a store and the code that built it.
impl<S: KeyValue + ?Sized> KeyValue for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, FintrackError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FintrackError> {
        (**self).set(key, value)
    }
}

/// File-backed key-value store: each key maps to `<dir>/<key>.json`
///
/// Writes are atomic (write to temp, fsync, then rename) so the entry is
/// either completely written or not modified at all, preventing corruption on
/// crashes or power failures.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValue for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, FintrackError> {
        let path = self.entry_path(key);

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| FintrackError::Storage(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FintrackError> {
        let path = self.entry_path(key);

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FintrackError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Create temp file in same directory (important for atomic rename)
        let temp_path = path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| FintrackError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(value.as_bytes())
            .map_err(|e| FintrackError::Storage(format!("Failed to write data: {}", e)))?;

        writer
            .flush()
            .map_err(|e| FintrackError::Storage(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| FintrackError::Storage(format!("Failed to sync data: {}", e)))?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(|e| {
            // Try to clean up temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            FintrackError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}

/// In-memory key-value store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with entries
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FintrackError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FintrackError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
