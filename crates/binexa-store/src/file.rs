//! Directory-backed key-value store.
//!
//! Each key maps to one file named after the key inside the store's root
//! directory. Writes go to a hidden temp file that is synced and then renamed
//! over the target, so a crash mid-write never leaves a half-written value.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::keys::validate_key;
use crate::traits::KeyValueStore;

/// A [`KeyValueStore`] persisting each key as a file under `root`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::Io {
            operation: "create directory",
            path: root.clone(),
            source: e,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io {
                operation: "read",
                path,
                source: e,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        let temp_path = self.root.join(format!(".{key}.tmp"));

        let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(value.as_bytes()).map_err(|e| StoreError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;
        file.sync_all().map_err(|e| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &path).map_err(|e| StoreError::Io {
            operation: "rename",
            path: path.clone(),
            source: e,
        })?;

        debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io {
                operation: "remove",
                path,
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_creates_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("store");
        let store = FileKeyValueStore::open(&root).unwrap();
        assert!(store.root().is_dir());
    }

    #[test]
    fn set_get_remove_roundtrip() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();

        store.set("binexa_session_id", "abc").unwrap();
        assert_eq!(
            store.get("binexa_session_id").unwrap().as_deref(),
            Some("abc")
        );
        assert!(store.remove("binexa_session_id").unwrap());
        assert!(store.get("binexa_session_id").unwrap().is_none());
        assert!(!store.remove("binexa_session_id").unwrap());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = FileKeyValueStore::open(dir.path()).unwrap();
            store.set("k", "[1,2,3]").unwrap();
        }
        let store = FileKeyValueStore::open(dir.path()).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();
        store.set("k", "v").unwrap();
        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["k".to_string()]);
    }

    #[test]
    fn rejects_traversal_keys() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.set("../x", "v"),
            Err(StoreError::InvalidKey { .. })
        ));
    }
}
