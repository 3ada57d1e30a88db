use std::cell::RefCell;
use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::KvError;

/// Process-local backend. Used when no database path is configured, and as
/// the test double for every store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("reviews").unwrap(), None);

        store.set("reviews", "[]").unwrap();
        store.set("reviews", "[1]").unwrap();
        assert_eq!(store.get("reviews").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.len(), 1);

        store.remove("reviews").unwrap();
        store.remove("reviews").unwrap();
        assert!(store.is_empty());
    }
}
