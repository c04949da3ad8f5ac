//! Local key-value persistence.
//!
//! The store mirrors its collections to a durable local key-value store under
//! four fixed keys, and hydrates them back at startup. Persistence is
//! fire-and-forget: a failed write is logged as a warning and never blocks
//! the in-memory mutation that triggered it, and an unreadable or corrupt key
//! hydrates as "no saved state". The in-memory store is always the
//! consistency source of truth; storage is only consulted at startup.
//!
//! Two backends are provided: [`FileBackend`] (one JSON file per key under a
//! configured directory) and [`MemoryBackend`] (for tests).

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// The fixed storage keys.
pub mod keys {
    /// Cart entries (sequence of cart items).
    pub const CART: &str = "elegantshop_cart";
    /// Wishlist (sequence of products).
    pub const WISHLIST: &str = "elegantshop_wishlist";
    /// Logged-in user; the key is removed on logout.
    pub const USER: &str = "elegantshop_user";
    /// Order history, newest first.
    pub const ORDERS: &str = "elegantshop_orders";
}

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the underlying storage failed.
    #[error("storage I/O failed for key {key}: {source}")]
    Io {
        /// The key being accessed.
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Stored text could not be parsed, or a value could not be encoded.
    #[error("serialization failed for key {key}: {source}")]
    Serde {
        /// The key being accessed.
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A plain text key-value store.
///
/// Implementations only move strings; JSON encoding happens in
/// [`Persistence`]. Keys are flat identifiers (no paths, no namespacing).
pub trait StorageBackend {
    /// Read the text stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the storage cannot be written.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Typed persistence over a [`StorageBackend`].
///
/// Serializes values to JSON and absorbs failures per the fire-and-forget
/// contract: `save`/`remove` log and continue, `load` degrades to `None`.
pub struct Persistence {
    backend: Box<dyn StorageBackend>,
}

impl Persistence {
    /// Wrap a storage backend.
    #[must_use]
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Persist `value` under `key`, best-effort.
    ///
    /// A write failure (e.g., disk full) is logged as a warning; the caller's
    /// in-memory state is already updated and stays authoritative.
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) {
        let text = match serde_json::to_string(value) {
            Ok(text) => text,
            Err(source) => {
                tracing::warn!(key, error = %source, "failed to encode state for storage");
                return;
            }
        };

        if let Err(error) = self.backend.save(key, &text) {
            tracing::warn!(key, %error, "failed to persist state, continuing with in-memory state");
        }
    }

    /// Load and decode the value under `key`.
    ///
    /// Returns `None` when the key is absent, unreadable, or holds text that
    /// no longer parses; all three degrade to "no saved state".
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = match self.backend.load(key) {
            Ok(text) => text?,
            Err(error) => {
                tracing::warn!(key, %error, "failed to read saved state, starting empty");
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(source) => {
                tracing::warn!(key, error = %source, "saved state is corrupt, starting empty");
                None
            }
        }
    }

    /// Remove `key`, best-effort.
    pub fn remove(&mut self, key: &str) {
        if let Err(error) = self.backend.remove(key) {
            tracing::warn!(key, %error, "failed to remove persisted key");
        }
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").finish_non_exhaustive()
    }
}
