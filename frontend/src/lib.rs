//! # Coffee Academy in the browser
//!
//! Runs the user content store on top of `window.localStorage`, so reviews,
//! brews and level progress survive page reloads without a server.
//!
//! ```ignore
//! let content = academy_web::open_user_content(&StoreConfig::default())?;
//! content.progress().mark_completed(1)?;
//! ```
//!
//! When `localStorage` is unavailable (private browsing with storage
//! disabled, sandboxed iframes) the session falls back to an in-memory store
//! and nothing is persisted.

mod local_storage;

use std::rc::Rc;

use academy_store::{KeyValueStore, MemoryStore, StoreConfig, SystemClock, UserContent};

pub use common::ContentCatalog;
pub use local_storage::LocalStorage;

/// Builds the session's user content over `localStorage`.
///
/// `config.database_path` is ignored here: the browser has no file system.
pub fn open_user_content(config: &StoreConfig) -> academy_store::Result<UserContent> {
    config.validate()?;

    let backend: Rc<dyn KeyValueStore> = match LocalStorage::from_window() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            gloo_console::warn!(format!(
                "localStorage unavailable, progress will not be saved: {}",
                e
            ));
            Rc::new(MemoryStore::new())
        }
    };

    Ok(UserContent::with_backend(backend, config, Rc::new(SystemClock)))
}
