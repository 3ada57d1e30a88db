//! Which levels the visitor has finished.
//!
//! Stored as a JSON array of level ids under a single key, in the order the
//! levels were completed.

use std::rc::Rc;

use common::content::Levels;
use log::{debug, warn};

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;

pub struct ProgressStore {
    backend: Rc<dyn KeyValueStore>,
    key: String,
}

impl ProgressStore {
    pub fn new(backend: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Completed level ids in completion order. Missing, unreadable or
    /// undecodable data counts as no progress.
    pub fn completed(&self) -> Vec<u32> {
        self.load().unwrap_or_else(|e| {
            warn!("Reading `{}` failed, assuming no progress: {}", self.key, e);
            Vec::new()
        })
    }

    /// Like [`completed`](Self::completed), but a backend failure is returned
    /// so `mark_completed` never overwrites progress it could not read.
    fn load(&self) -> Result<Vec<u32>> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(Vec::new());
        };

        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Stored `{}` does not decode, assuming no progress: {}", self.key, e);
            Vec::new()
        }))
    }

    pub fn is_completed(&self, level_id: u32) -> bool {
        self.completed().contains(&level_id)
    }

    /// Records `level_id` as finished. Completing a level twice is a no-op.
    pub fn mark_completed(&self, level_id: u32) -> Result<()> {
        let mut completed = self.load()?;
        if completed.contains(&level_id) {
            return Ok(());
        }
        completed.push(level_id);

        let raw = serde_json::to_string(&completed).map_err(|source| StoreError::Encode {
            key: self.key.clone(),
            source,
        })?;
        self.backend.set(&self.key, &raw)?;
        debug!("Level {} completed ({} total)", level_id, completed.len());
        Ok(())
    }

    /// Forgets all progress.
    pub fn reset(&self) -> Result<()> {
        self.backend.remove(&self.key)?;
        Ok(())
    }

    /// Share of the catalog's levels completed, as a whole percentage.
    /// Stored ids that are not levels in `levels` are ignored. Zero when there
    /// are no levels.
    pub fn percent_complete(&self, levels: &Levels) -> u32 {
        let total = levels.total();
        if total == 0 {
            return 0;
        }
        let done = self
            .completed()
            .into_iter()
            .filter(|id| levels.get(*id).is_some())
            .count();
        ((done as f64 / total as f64) * 100.0).round() as u32
    }
}
