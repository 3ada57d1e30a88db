//! Backend whose reads and writes can be made to fail, for exercising the
//! error paths of the stores.

use std::cell::Cell;

use super::{KeyValueStore, MemoryStore};
use crate::error::KvError;

#[derive(Debug, Default)]
pub(crate) struct FailingStore {
    inner: MemoryStore,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl FailingStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Stored value, bypassing the failure switches.
    pub(crate) fn raw(&self, key: &str) -> Option<String> {
        self.inner.get(key).unwrap_or_default()
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        if self.fail_reads.get() {
            return Err(KvError::Backend("database is locked".into()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        if self.fail_writes.get() {
            return Err(KvError::Backend("quota exceeded".into()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        if self.fail_writes.get() {
            return Err(KvError::Backend("quota exceeded".into()));
        }
        self.inner.remove(key)
    }
}
