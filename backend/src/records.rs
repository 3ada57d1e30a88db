//! # Record store
//!
//! Generic persistence for one user-generated collection.
//!
//! ## Reads
//!
//! The persisted collection is read from the backend as a JSON array. A
//! missing key, a backend failure or a value that does not decode all count
//! as an empty collection (the last two are logged). The persisted records
//! are followed by the seed records and the union is stable-sorted newest
//! first, so records sharing a `createdAt` keep that relative order.
//!
//! ## Writes
//!
//! `add` and `increment` read the current persisted collection, change it in
//! memory and write the whole array back. Seed records are never written, so
//! incrementing a seed record's counter does nothing. If the backend fails
//! the read, the operation returns the error without writing; only a value
//! that does not decode is replaced by a fresh collection.

use std::collections::HashSet;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;

/// A record type stored by a [`RecordStore`].
pub trait UserRecord: Clone + Serialize + DeserializeOwned {
    /// The caller-supplied part of a new record.
    type Input;

    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    /// Builds a record with its counter at zero.
    fn create(input: Self::Input, id: String, created_at: DateTime<Utc>) -> Self;

    /// Adds one to the record's counter (`helpful`, `likes`, ...).
    fn bump_counter(&mut self);
}

pub struct RecordStore<R: UserRecord> {
    backend: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
    key: String,
    id_prefix: String,
    seed: Vec<R>,
}

impl<R: UserRecord> RecordStore<R> {
    pub fn new(
        backend: Rc<dyn KeyValueStore>,
        clock: Rc<dyn Clock>,
        key: impl Into<String>,
        id_prefix: impl Into<String>,
        seed: Vec<R>,
    ) -> Self {
        Self {
            backend,
            clock,
            key: key.into(),
            id_prefix: id_prefix.into(),
            seed,
        }
    }

    /// Backend key holding this collection.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persisted and seed records, newest first.
    pub fn all(&self) -> Vec<R> {
        let mut records = self.persisted();
        records.extend(self.seed.iter().cloned());
        records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        records
    }

    pub fn find(&self, id: &str) -> Option<R> {
        self.all().into_iter().find(|record| record.id() == id)
    }

    /// Records written by users, in write order. Seed records are excluded.
    /// A backend read failure is logged and counts as an empty collection.
    pub fn persisted(&self) -> Vec<R> {
        self.load().unwrap_or_else(|e| {
            warn!("Reading `{}` failed, using an empty collection: {}", self.key, e);
            Vec::new()
        })
    }

    /// Persisted records for a read-modify-write. Backend failures are
    /// returned so the caller never writes over data it could not read; a
    /// value that does not decode still counts as empty.
    fn load(&self) -> Result<Vec<R>> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!("Stored `{}` does not decode, using an empty collection: {}", self.key, e);
                Ok(Vec::new())
            }
        }
    }

    /// Stamps `input` with a fresh id and the current time, appends it to the
    /// persisted collection and returns it. Nothing is written if the current
    /// collection cannot be read.
    pub fn add(&self, input: R::Input) -> Result<R> {
        let mut persisted = self.load()?;

        let taken: HashSet<&str> = persisted
            .iter()
            .chain(self.seed.iter())
            .map(|record| record.id())
            .collect();
        let created_at = self.clock.now();
        let id = self.fresh_id(created_at, &taken);

        let record = R::create(input, id, created_at);
        persisted.push(record.clone());
        self.write(&persisted)?;

        debug!("Added `{}` to `{}` ({} records)", record.id(), self.key, persisted.len());
        Ok(record)
    }

    /// Adds one to the counter of the persisted record `id`. Unknown ids,
    /// seed ids included, are ignored and nothing is written.
    pub fn increment(&self, id: &str) -> Result<()> {
        let mut persisted = self.load()?;
        let Some(record) = persisted.iter_mut().find(|record| record.id() == id) else {
            debug!("No persisted record `{}` in `{}`, nothing to increment", id, self.key);
            return Ok(());
        };

        record.bump_counter();
        self.write(&persisted)
    }

    fn write(&self, records: &[R]) -> Result<()> {
        let raw = serde_json::to_string(records).map_err(|source| StoreError::Encode {
            key: self.key.clone(),
            source,
        })?;
        self.backend.set(&self.key, &raw)?;
        Ok(())
    }

    /// `<prefix>-<unix millis>-<8 hex chars>`, retried until it is unused.
    fn fresh_id(&self, at: DateTime<Utc>, taken: &HashSet<&str>) -> String {
        loop {
            let suffix = Uuid::new_v4().simple().to_string();
            let id = format!("{}-{}-{}", self.id_prefix, at.timestamp_millis(), &suffix[..8]);
            if !taken.contains(id.as_str()) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::KvError;
    use crate::kv::failing::FailingStore;
    use crate::kv::MemoryStore;
    use chrono::{Duration, TimeZone};
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        text: String,
        created_at: DateTime<Utc>,
        votes: u32,
    }

    impl UserRecord for Note {
        type Input = String;

        fn id(&self) -> &str {
            &self.id
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }

        fn create(text: String, id: String, created_at: DateTime<Utc>) -> Self {
            Note {
                id,
                text,
                created_at,
                votes: 0,
            }
        }

        fn bump_counter(&mut self) {
            self.votes += 1;
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn seed_note(id: &str, at: DateTime<Utc>) -> Note {
        Note {
            id: id.into(),
            text: "seed".into(),
            created_at: at,
            votes: 3,
        }
    }

    fn setup(seed: Vec<Note>) -> (Rc<MemoryStore>, Rc<ManualClock>, RecordStore<Note>) {
        let backend = Rc::new(MemoryStore::new());
        let clock = Rc::new(ManualClock::new(start()));
        let store = RecordStore::new(backend.clone(), clock.clone(), "notes", "note", seed);
        (backend, clock, store)
    }

    #[test]
    fn missing_key_yields_only_seed() {
        let (_, _, store) = setup(vec![seed_note("s1", start())]);
        assert!(store.persisted().is_empty());
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn corrupt_value_is_treated_as_empty() {
        let (backend, _, store) = setup(vec![seed_note("s1", start())]);
        backend.set("notes", "{not json").unwrap();
        assert!(store.persisted().is_empty());
        assert_eq!(store.all().len(), 1);

        backend.set("notes", r#"{"id":"wrong shape"}"#).unwrap();
        assert!(store.persisted().is_empty());
    }

    #[test]
    fn add_assigns_fresh_id_time_and_zero_counter() {
        let (_, clock, store) = setup(vec![seed_note("s1", start() - Duration::days(1))]);

        let first = store.add("hello".into()).unwrap();
        let second = store.add("again".into()).unwrap();
        clock.advance(Duration::seconds(1));
        let third = store.add("later".into()).unwrap();

        assert_eq!(first.votes, 0);
        assert_eq!(first.created_at, start());
        assert!(first.id.starts_with(&format!("note-{}-", start().timestamp_millis())));
        assert_ne!(first.id, second.id);

        let all = store.all();
        assert_eq!(all.len(), 4);
        assert_eq!(all.iter().filter(|n| n.id == first.id).count(), 1);
        // newest first, ties keep write order, seed last
        let ids: Vec<&str> = all.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec![third.id.as_str(), first.id.as_str(), second.id.as_str(), "s1"]);
    }

    #[test]
    fn add_over_corrupt_value_starts_a_new_collection() {
        let (backend, _, store) = setup(Vec::new());
        backend.set("notes", "garbage").unwrap();

        store.add("fresh".into()).unwrap();
        assert_eq!(store.persisted().len(), 1);
    }

    #[test]
    fn increment_twice_adds_two() {
        let (_, _, store) = setup(Vec::new());
        let note = store.add("vote for me".into()).unwrap();
        let other = store.add("bystander".into()).unwrap();

        store.increment(&note.id).unwrap();
        store.increment(&note.id).unwrap();

        assert_eq!(store.find(&note.id).unwrap().votes, 2);
        assert_eq!(store.find(&other.id).unwrap().votes, 0);
    }

    #[test]
    fn increment_unknown_or_seed_id_changes_nothing() {
        let (backend, _, store) = setup(vec![seed_note("s1", start())]);
        store.add("only one".into()).unwrap();
        let before = backend.get("notes").unwrap();

        store.increment("missing").unwrap();
        store.increment("s1").unwrap();

        assert_eq!(backend.get("notes").unwrap(), before);
        assert_eq!(store.find("s1").unwrap().votes, 3);
        assert_eq!(store.persisted().len(), 1);
    }

    fn failing_setup(seed: Vec<Note>) -> (Rc<FailingStore>, RecordStore<Note>) {
        let backend = Rc::new(FailingStore::new());
        let clock = Rc::new(ManualClock::new(start()));
        let store = RecordStore::new(backend.clone(), clock, "notes", "note", seed);
        (backend, store)
    }

    #[test]
    fn read_failure_during_add_keeps_saved_records() {
        let (backend, store) = failing_setup(Vec::new());
        for text in ["one", "two", "three"] {
            store.add(text.into()).unwrap();
        }
        let saved = backend.raw("notes");

        backend.fail_reads(true);
        assert!(matches!(
            store.add("four".into()),
            Err(StoreError::Kv(KvError::Backend(_)))
        ));
        backend.fail_reads(false);

        assert_eq!(backend.raw("notes"), saved);
        assert_eq!(store.persisted().len(), 3);
    }

    #[test]
    fn read_failure_during_increment_keeps_saved_records() {
        let (backend, store) = failing_setup(Vec::new());
        let note = store.add("vote".into()).unwrap();
        let saved = backend.raw("notes");

        backend.fail_reads(true);
        assert!(store.increment(&note.id).is_err());
        backend.fail_reads(false);

        assert_eq!(backend.raw("notes"), saved);
        assert_eq!(store.find(&note.id).unwrap().votes, 0);
    }

    #[test]
    fn write_failure_is_returned_and_nothing_changes() {
        let (backend, store) = failing_setup(Vec::new());
        let note = store.add("kept".into()).unwrap();
        let saved = backend.raw("notes");

        backend.fail_writes(true);
        assert!(matches!(
            store.add("lost".into()),
            Err(StoreError::Kv(KvError::Backend(_)))
        ));
        assert!(store.increment(&note.id).is_err());
        backend.fail_writes(false);

        assert_eq!(backend.raw("notes"), saved);
        assert_eq!(store.find(&note.id).unwrap().votes, 0);
    }

    #[test]
    fn reads_fall_back_to_seed_when_backend_fails() {
        let (backend, store) = failing_setup(vec![seed_note("s1", start())]);
        store.add("hidden".into()).unwrap();

        backend.fail_reads(true);
        assert!(store.persisted().is_empty());
        let ids: Vec<String> = store.all().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["s1".to_string()]);
        assert!(store.find("s1").is_some());
    }
}
