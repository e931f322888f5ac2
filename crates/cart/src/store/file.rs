//! JSON file store - one file per key, durable across restarts.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

/// A durable [`KeyValueStore`] that writes each blob to its own file under a
/// base directory.
///
/// Key characters outside `[A-Za-z0-9_-]` are mapped to `_` when forming the
/// filename, so `cart:guest` lands in `cart_guest.json`. Writes replace the
/// whole file; concurrent writers get last-write-wins.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Base directory of this store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{stem}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_get_absent_key() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get("cart:guest").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = JsonFileStore::open(dir.path()).unwrap();
            store.set("cart:7", "{\"items\":[]}").unwrap();
        }
        // A fresh instance over the same directory sees the blob
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(
            store.get("cart:7").unwrap().as_deref(),
            Some("{\"items\":[]}")
        );
    }

    #[test]
    fn test_key_sanitization_is_stable() {
        let (_dir, store) = temp_store();
        store.set("cart:guest", "a").unwrap();
        assert_eq!(store.get("cart:guest").unwrap().as_deref(), Some("a"));
        // Distinct sane keys stay distinct
        store.set("cart:9", "b").unwrap();
        assert_eq!(store.get("cart:9").unwrap().as_deref(), Some("b"));
        assert_eq!(store.get("cart:guest").unwrap().as_deref(), Some("a"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, store) = temp_store();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
