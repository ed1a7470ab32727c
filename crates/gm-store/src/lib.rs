//! String-keyed persisted store for gridmark layouts.
//!
//! The layout core only needs to read one serialized value by key, so the
//! [`LayoutStore`] trait is deliberately small:
//!
//! - [`LayoutStore::get`]: read a value, `None` when absent
//! - [`LayoutStore::set`] / [`LayoutStore::remove`]: mutations used by editors
//!
//! # Implementations
//!
//! - [`NullStore`]: never holds anything (always absent)
//! - [`MemoryStore`]: in-process map, handy for tests and previews
//! - [`FileStore`]: one file per key under a directory
//!
//! # Example
//!
//! ```
//! use gm_store::{LayoutStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set("layout", "[]").unwrap();
//! assert_eq!(store.get("layout").as_deref(), Some("[]"));
//! store.remove("layout").unwrap();
//! assert_eq!(store.get("layout"), None);
//! ```

mod error;
mod ext;
mod file;
mod memory;

pub use error::StoreError;
pub use ext::LayoutStoreExt;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A string-keyed store of serialized values.
pub trait LayoutStore: Send + Sync {
    /// Retrieve the value stored under `key`.
    ///
    /// Returns `None` when the key is absent. Backend read failures are
    /// logged and reported as absent, since callers treat a missing value as
    /// "nothing persisted yet".
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// No-op [`LayoutStore`] that never holds a value.
///
/// Use when persistence is disabled: every `get` returns `None` and every
/// mutation is silently discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl LayoutStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}
