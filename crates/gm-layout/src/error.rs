//! Layout error type.

use gm_store::StoreError;

/// Error raised by layout persistence and value helpers.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The store rejected a write or removal.
    #[error("{0}")]
    Store(#[from] StoreError),
    /// Every ordinal up to `u64::MAX` is taken; no new key can be generated.
    #[error("no layout key ordinals left")]
    OrdinalsExhausted,
    /// A helper was called with input it cannot work on.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
