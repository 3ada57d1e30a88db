//! # Key-value byte store
//!
//! The only persistence primitive the store needs: whole-value reads and
//! writes of UTF-8 text under string keys, all synchronous.
//!
//! Each collection owns one key and always writes its full serialized value,
//! so a backend never sees partial records. Nothing coordinates concurrent
//! writers; the last write to a key wins.

#[cfg(test)]
pub(crate) mod failing;
mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

use crate::error::KvError;

pub trait KeyValueStore {
    /// Value stored under `key`, or `None` if the key was never written or
    /// has been removed.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Replaces the whole value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), KvError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), KvError>;
}
