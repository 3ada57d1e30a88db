//! Error types for the user content store.
//!
//! Not-found never appears here: lookups return `Option` and filters return
//! empty collections.

use thiserror::Error;

/// Failure reported by a [`KeyValueStore`](crate::KeyValueStore) backend.
#[derive(Error, Debug)]
pub enum KvError {
    /// The backend cannot be reached at all, e.g. storage disabled in the browser.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected an operation, e.g. quota exceeded.
    #[error("storage backend error: {0}")]
    Backend(String),

    #[cfg(feature = "sqlite")]
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Store operation errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Kv(#[from] KvError),

    #[error("failed to encode collection `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
