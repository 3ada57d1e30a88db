//! `KeyValueStore` over the browser's `localStorage`.
//!
//! `localStorage` only stores strings, which matches the store's whole-value
//! JSON encoding. Writes can fail when the origin's quota is exceeded; that
//! surfaces as [`KvError::Backend`].

use academy_store::{KeyValueStore, KvError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// The current window's `localStorage`.
    ///
    /// # Returns
    /// - `Ok(LocalStorage)` when a window exists and storage is enabled.
    /// - `Err(KvError::Unavailable)` outside a browser window or when the
    ///   user agent blocks storage access.
    pub fn from_window() -> Result<Self, KvError> {
        let window =
            web_sys::window().ok_or_else(|| KvError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| KvError::Unavailable(describe(&e)))?
            .ok_or_else(|| KvError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        self.storage
            .get_item(key)
            .map_err(|e| KvError::Backend(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| KvError::Backend(describe(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        self.storage
            .remove_item(key)
            .map_err(|e| KvError::Backend(describe(&e)))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
