//! File-based store implementation.
//!
//! [`FileStore`] keeps each key in its own file directly under a root
//! directory:
//!
//! ```text
//! {root}/
//! +-- layout.json      # key "layout"
//! +-- draft.json       # key "draft"
//! ```
//!
//! Writes go to a sibling temporary file which is then renamed over the
//! target, so a crash mid-write never leaves a truncated value behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{LayoutStore, StoreError};

const EXTENSION: &str = "json";

/// [`LayoutStore`] rooted at a directory on disk.
///
/// The directory is created lazily on the first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the stored files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`.
    ///
    /// Keys must be non-empty and must not contain path separators or start
    /// with a dot, which keeps every key inside `root`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && !key.contains(['/', '\\'])
            && !key.chars().any(char::is_control);
        if !valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.root.join(format!("{key}.{EXTENSION}")))
    }
}

impl LayoutStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = match self.path_for(key) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("{e}");
                return None;
            }
        };
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("failed to read {}: {e}", path.display());
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|e| StoreError::io(&self.root, e))?;

        let tmp = path.with_extension(format!("{EXTENSION}.tmp"));
        fs::write(&tmp, value).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(&path, e))?;

        tracing::debug!(key, path = %path.display(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(key, "removed stored value");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("store"));

        store.set("layout", r#"[{"i":"item-0"}]"#).unwrap();
        assert_eq!(
            store.get("layout").as_deref(),
            Some(r#"[{"i":"item-0"}]"#)
        );
        assert!(tmp.path().join("store/layout.json").exists());
        assert!(!tmp.path().join("store/layout.json.tmp").exists());
    }

    #[test]
    fn test_get_missing_key() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        assert_eq!(store.get("layout"), None);
    }

    #[test]
    fn test_missing_root_is_absent() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("never/created"));
        assert_eq!(store.get("layout"), None);
    }

    #[test]
    fn test_overwrite() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());

        store.set("layout", "first").unwrap();
        store.set("layout", "second").unwrap();
        assert_eq!(store.get("layout").as_deref(), Some("second"));
    }

    #[test]
    fn test_remove() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());

        store.set("layout", "[]").unwrap();
        store.remove("layout").unwrap();
        assert_eq!(store.get("layout"), None);

        // Removing again is fine
        store.remove("layout").unwrap();
    }

    #[test]
    fn test_keys_are_isolated() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());

        store.set("alpha", "a").unwrap();
        store.set("beta", "b").unwrap();
        assert_eq!(store.get("alpha").as_deref(), Some("a"));
        assert_eq!(store.get("beta").as_deref(), Some("b"));
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());

        for key in ["", "../escape", "a/b", r"a\b", ".hidden"] {
            assert!(
                matches!(store.set(key, "x"), Err(StoreError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
            assert_eq!(store.get(key), None);
        }
    }
}
