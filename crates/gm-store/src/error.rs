//! Store error type.

use std::path::PathBuf;

/// Error raised by [`LayoutStore`](crate::LayoutStore) mutations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key cannot be mapped to a storage location.
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
    /// Reading or writing the backing file failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A value could not be serialized to JSON.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
