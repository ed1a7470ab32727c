//! Extension trait for [`LayoutStore`] with typed convenience methods.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{LayoutStore, StoreError};

/// JSON convenience methods for [`LayoutStore`].
///
/// Implemented as default methods on an extension trait so that
/// [`LayoutStore`] stays object-safe while callers get typed access through
/// the blanket impl.
///
/// # Example
///
/// ```
/// use gm_store::{LayoutStoreExt, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.set_json("sizes", &vec![1, 2, 3]).unwrap();
/// let sizes: Option<Vec<u32>> = store.get_json("sizes");
/// assert_eq!(sizes, Some(vec![1, 2, 3]));
/// ```
pub trait LayoutStoreExt: LayoutStore {
    /// Retrieve and deserialize a JSON value.
    ///
    /// Returns `None` when the key is absent or the stored value does not
    /// deserialize; the latter is logged as a warning.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, "ignoring corrupt stored value: {e}");
                None
            }
        }
    }

    /// Serialize `value` as JSON and store it under `key`.
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: LayoutStore + ?Sized> LayoutStoreExt for S {}
