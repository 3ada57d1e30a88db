//! Community brews gallery.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use common::model::brew::{Brew, NewBrew};

use crate::clock::Clock;
use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::records::{RecordStore, UserRecord};

impl UserRecord for Brew {
    type Input = NewBrew;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn create(input: NewBrew, id: String, created_at: DateTime<Utc>) -> Self {
        Brew::from_new(input, id, created_at)
    }

    fn bump_counter(&mut self) {
        self.likes += 1;
    }
}

pub struct BrewStore {
    records: RecordStore<Brew>,
}

impl BrewStore {
    pub fn new(
        backend: Rc<dyn KeyValueStore>,
        clock: Rc<dyn Clock>,
        key: impl Into<String>,
        id_prefix: impl Into<String>,
        seed: Vec<Brew>,
    ) -> Self {
        Self {
            records: RecordStore::new(backend, clock, key, id_prefix, seed),
        }
    }

    /// Every brew, newest first.
    pub fn all(&self) -> Vec<Brew> {
        self.records.all()
    }

    pub fn find(&self, id: &str) -> Option<Brew> {
        self.records.find(id)
    }

    pub fn add(&self, input: NewBrew) -> Result<Brew> {
        self.records.add(input)
    }

    /// Likes a brew. A brew that is not (or no longer) persisted is ignored.
    pub fn like(&self, id: &str) -> Result<()> {
        self.records.increment(id)
    }

    pub fn by_user(&self, user_id: &str) -> Vec<Brew> {
        self.all()
            .into_iter()
            .filter(|brew| brew.user_id == user_id)
            .collect()
    }

    /// Brews that followed the recipe `recipe_id`.
    pub fn for_recipe(&self, recipe_id: &str) -> Vec<Brew> {
        self.all()
            .into_iter()
            .filter(|brew| brew.recipe_id.as_deref() == Some(recipe_id))
            .collect()
    }
}
