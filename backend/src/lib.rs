//! # Coffee Academy user content store
//!
//! Persists what visitors submit (reviews, community brews and finished
//! levels) in a key-value byte store, and merges it with the seed records
//! the site ships with.
//!
//! ## Layout
//!
//! - [`kv`]: the [`KeyValueStore`] contract plus an in-memory and an SQLite
//!   backend. The browser `localStorage` backend lives in `academy-web`.
//! - [`records`]: [`RecordStore`], the generic read-merge-sort and
//!   read-modify-write logic shared by every collection.
//! - [`reviews`], [`brews`], [`progress`]: one store per collection, each
//!   owning exactly one key.
//! - [`session`]: [`UserContent`], built once per session from a
//!   [`StoreConfig`].
//!
//! ## Failure policy
//!
//! Reads never fail. A missing key is an empty collection, and a value that
//! cannot be read or decoded is logged and treated as empty. Writes surface
//! backend errors through [`StoreError`], including a failed read of the
//! current value, in which case nothing is written.

pub mod brews;
pub mod clock;
pub mod config;
pub mod error;
pub mod kv;
pub mod progress;
pub mod records;
pub mod reviews;
mod seed;
pub mod session;

pub use brews::BrewStore;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::StoreConfig;
pub use error::{KvError, Result, StoreError};
pub use kv::{KeyValueStore, MemoryStore};
#[cfg(feature = "sqlite")]
pub use kv::SqliteStore;
pub use progress::ProgressStore;
pub use records::{RecordStore, UserRecord};
pub use reviews::{RatingSummary, ReviewStore};
pub use session::UserContent;
