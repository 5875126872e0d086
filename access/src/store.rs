//! Advisory key/value persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is `localStorage`; in tests and during server-side
//! rendering it is a [`MemoryStore`]. Keys are independent and unversioned.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error returned by a [`KvStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backend cannot be reached (private browsing, no window, etc.).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// A write was refused, e.g. quota exceeded.
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// A value could not be serialized.
    #[error("failed to encode `{key}`: {reason}")]
    Encode { key: String, reason: String },
}

/// String key/value storage.
pub trait KvStore {
    /// Read a value. `Ok(None)` means the key was never written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend refuses the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a value. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend refuses the delete.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Process-local store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Read and decode a JSON value. Missing, unreadable and malformed values
/// all read as `None`; the latter two are logged.
pub fn load_json<T: DeserializeOwned>(store: &impl KvStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("could not read `{key}`: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed `{key}`: {e}");
            None
        }
    }
}

/// Encode and write a JSON value.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] if serialization fails, or the backend's
/// error if the write fails.
pub fn save_json<T: Serialize>(store: &mut impl KvStore, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|e| StoreError::Encode {
        key: key.to_owned(),
        reason: e.to_string(),
    })?;
    store.set(key, &raw)
}
