//! Session-wide entry point wiring the three collections to one backend.

use std::rc::Rc;

use log::info;

use crate::brews::BrewStore;
use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::progress::ProgressStore;
use crate::reviews::ReviewStore;
use crate::seed;

/// Everything a visitor can write, built once at session start.
pub struct UserContent {
    reviews: ReviewStore,
    brews: BrewStore,
    progress: ProgressStore,
}

impl UserContent {
    /// Opens the backend described by `config` and uses wall-clock time.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        config.validate()?;
        let backend = config.open_backend()?;
        info!(
            "User content ready (persistent: {}, seed records: {})",
            config.database_path.is_some(),
            config.include_seed
        );
        Ok(Self::with_backend(backend, config, Rc::new(SystemClock)))
    }

    /// Wires the stores to an existing backend and clock.
    pub fn with_backend(
        backend: Rc<dyn KeyValueStore>,
        config: &StoreConfig,
        clock: Rc<dyn Clock>,
    ) -> Self {
        let (seed_reviews, seed_brews) = if config.include_seed {
            (seed::reviews(), seed::brews())
        } else {
            (Vec::new(), Vec::new())
        };

        Self {
            reviews: ReviewStore::new(
                backend.clone(),
                clock.clone(),
                config.reviews_key.clone(),
                config.review_id_prefix.clone(),
                seed_reviews,
            ),
            brews: BrewStore::new(
                backend.clone(),
                clock,
                config.brews_key.clone(),
                config.brew_id_prefix.clone(),
                seed_brews,
            ),
            progress: ProgressStore::new(backend, config.progress_key.clone()),
        }
    }

    pub fn reviews(&self) -> &ReviewStore {
        &self.reviews
    }

    pub fn brews(&self) -> &BrewStore {
        &self.brews
    }

    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }
}
