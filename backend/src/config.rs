//! # Store configuration
//!
//! Which keys each collection lives under, how new ids are prefixed, and
//! where (if anywhere) data is persisted on disk.
//!
//! Configuration is plain JSON with camelCase keys; every field is optional
//! and falls back to [`StoreConfig::default`], which uses the same keys as
//! the website so both sides read each other's data.
//!
//! ```json
//! { "databasePath": "academy.sqlite", "includeSeed": false }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::kv::{KeyValueStore, MemoryStore};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    pub reviews_key: String,
    pub brews_key: String,
    /// Holds a JSON array of completed level ids.
    pub progress_key: String,
    pub review_id_prefix: String,
    pub brew_id_prefix: String,
    /// SQLite file to persist into. `None` keeps everything in memory.
    pub database_path: Option<PathBuf>,
    /// Whether the seed reviews and brews are merged into reads.
    pub include_seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            reviews_key: "coffee-academy-reviews".to_string(),
            brews_key: "coffee-academy-brews".to_string(),
            progress_key: "coffee-academy-completed-levels".to_string(),
            review_id_prefix: "review".to_string(),
            brew_id_prefix: "brew".to_string(),
            database_path: None,
            include_seed: true,
        }
    }
}

impl StoreConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: StoreConfig =
            serde_json::from_str(raw).map_err(|e| StoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| StoreError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    /// Keys must be non-empty and distinct, since every collection owns its
    /// key outright.
    pub fn validate(&self) -> Result<()> {
        let keys = [&self.reviews_key, &self.brews_key, &self.progress_key];
        if keys.iter().any(|key| key.trim().is_empty()) {
            return Err(StoreError::Config("storage keys must not be empty".into()));
        }
        let distinct: HashSet<&String> = keys.into_iter().collect();
        if distinct.len() != 3 {
            return Err(StoreError::Config(
                "reviews, brews and progress must use different keys".into(),
            ));
        }
        Ok(())
    }

    /// SQLite when `database_path` is set, otherwise an in-memory map.
    pub fn open_backend(&self) -> Result<Rc<dyn KeyValueStore>> {
        match &self.database_path {
            None => Ok(Rc::new(MemoryStore::new())),
            Some(path) => open_database(path),
        }
    }
}

#[cfg(feature = "sqlite")]
fn open_database(path: &Path) -> Result<Rc<dyn KeyValueStore>> {
    Ok(Rc::new(crate::kv::SqliteStore::open(path)?))
}

#[cfg(not(feature = "sqlite"))]
fn open_database(path: &Path) -> Result<Rc<dyn KeyValueStore>> {
    Err(StoreError::Config(format!(
        "cannot open {}: built without the `sqlite` feature",
        path.display()
    )))
}
