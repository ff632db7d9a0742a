//! Local JSON storage for per-visitor state.
//!
//! One file per key under a data directory, the desktop rendition of
//! the browser's key-value storage. Values round-trip through
//! serde_json; a missing file reads as `None`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Keys the application persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    Cart,
    Orders,
    GuestId,
}

impl StoreKey {
    /// Returns the filename for this key.
    pub fn filename(&self) -> &'static str {
        match self {
            StoreKey::Cart => "cart.json",
            StoreKey::Orders => "orders.json",
            StoreKey::GuestId => "guest_id.json",
        }
    }
}

/// Errors that can occur reading or writing local state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error for {0}: {1}")]
    Io(PathBuf, #[source] io::Error),

    #[error("Failed to parse {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("Failed to serialize value for {0}: {1}")]
    Serialize(&'static str, #[source] serde_json::Error),
}

/// File-backed key-value store for local state.
#[derive(Debug, Clone)]
pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    /// Creates a store rooted at the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Returns the full path for a key.
    pub fn path(&self, key: StoreKey) -> PathBuf {
        self.data_dir.join(key.filename())
    }

    /// Checks whether a value exists for the key.
    pub fn exists(&self, key: StoreKey) -> bool {
        self.path(key).exists()
    }

    /// Reads and deserializes the value for a key.
    ///
    /// Returns `Ok(None)` if no value has been written yet.
    /// Malformed content is an error here; callers decide whether to
    /// fall back to a default state.
    pub fn read<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Option<T>, StorageError> {
        let path = self.path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => {
                let value =
                    serde_json::from_str(&contents).map_err(|e| StorageError::Parse(path, e))?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(path, e)),
        }
    }

    /// Serializes and writes the value for a key.
    ///
    /// Creates the data directory if it doesn't exist.
    pub fn write<T: Serialize>(&self, key: StoreKey, value: &T) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StorageError::Io(self.data_dir.clone(), e))?;

        let json = serde_json::to_string(value)
            .map_err(|e| StorageError::Serialize(key.filename(), e))?;

        let path = self.path(key);
        fs::write(&path, json).map_err(|e| StorageError::Io(path, e))?;

        Ok(())
    }
}
