//! Reviews of recipes, coffees and equipment.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use common::model::review::{NewReview, Review, TargetType};
use serde::Serialize;

use crate::clock::Clock;
use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;
use crate::records::{RecordStore, UserRecord};

impl UserRecord for Review {
    type Input = NewReview;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn create(input: NewReview, id: String, created_at: DateTime<Utc>) -> Self {
        Review::from_new(input, id, created_at)
    }

    fn bump_counter(&mut self) {
        self.helpful += 1;
    }
}

/// Mean rating of a target and how many reviews it is based on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    /// Rounded to one decimal place. `0.0` when `count` is zero.
    pub average: f64,
    pub count: usize,
}

pub struct ReviewStore {
    records: RecordStore<Review>,
}

impl ReviewStore {
    pub fn new(
        backend: Rc<dyn KeyValueStore>,
        clock: Rc<dyn Clock>,
        key: impl Into<String>,
        id_prefix: impl Into<String>,
        seed: Vec<Review>,
    ) -> Self {
        Self {
            records: RecordStore::new(backend, clock, key, id_prefix, seed),
        }
    }

    /// Every review, newest first.
    pub fn all(&self) -> Vec<Review> {
        self.records.all()
    }

    pub fn find(&self, id: &str) -> Option<Review> {
        self.records.find(id)
    }

    /// Stores a new review. Ratings outside 1..=5 are rejected before
    /// anything is written.
    pub fn add(&self, input: NewReview) -> Result<Review> {
        if !(1..=5).contains(&input.rating) {
            return Err(StoreError::InvalidRating(input.rating));
        }
        self.records.add(input)
    }

    /// Counts one more "this was helpful" vote. Unknown and seed reviews are
    /// left untouched.
    pub fn mark_helpful(&self, id: &str) -> Result<()> {
        self.records.increment(id)
    }

    pub fn for_target(&self, target_type: TargetType, target_id: &str) -> Vec<Review> {
        self.all()
            .into_iter()
            .filter(|review| review.target_type == target_type && review.target_id == target_id)
            .collect()
    }

    pub fn by_user(&self, user_id: &str) -> Vec<Review> {
        self.all()
            .into_iter()
            .filter(|review| review.user_id == user_id)
            .collect()
    }

    pub fn average(&self, target_type: TargetType, target_id: &str) -> RatingSummary {
        let ratings: Vec<u8> = self
            .for_target(target_type, target_id)
            .iter()
            .map(|review| review.rating)
            .collect();
        summarize(&ratings)
    }
}

fn summarize(ratings: &[u8]) -> RatingSummary {
    if ratings.is_empty() {
        return RatingSummary {
            average: 0.0,
            count: 0,
        };
    }

    let total: u32 = ratings.iter().map(|&rating| u32::from(rating)).sum();
    let mean = f64::from(total) / ratings.len() as f64;
    RatingSummary {
        average: (mean * 10.0).round() / 10.0,
        count: ratings.len(),
    }
}
