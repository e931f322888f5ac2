//! Key-value persistence for cart and order blobs.
//!
//! The storefront persists everything as JSON strings under string keys,
//! scoped per browser/user profile. Writes are last-write-wins; there is no
//! locking or versioning (cross-tab conflicts are out of scope).

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors from a [`KeyValueStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying filesystem operation failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A scoped get/set/remove-by-string-key blob store.
///
/// Values are opaque strings (JSON in practice). `get` on an absent key is
/// `Ok(None)` and `remove` on an absent key is `Ok(())` - callers rely on
/// both being non-errors.
pub trait KeyValueStore {
    /// Read the blob stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only for I/O faults, never for absent keys.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the blob under `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the delete fails for a reason other than
    /// the key being absent.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
