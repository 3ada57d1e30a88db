//! # Coffee Academy content core
//!
//! Shared by the native store (`academy-store`) and the browser crate
//! (`academy-web`). It owns two things:
//!
//! - [`model`]: every record the site shows, with a single JSON encoding that
//!   the browser and the native side agree on.
//! - [`content`]: the read-only [`ContentCatalog`] over the hand-authored
//!   tables (levels, recipes, equipment, glossary, coffee recommendations),
//!   plus the coffee quiz that ranks recommendations against a user's answers.
//!
//! The catalog is built once per session and only ever handed out as shared
//! references, so the tables cannot change after load.

pub mod content;
pub mod model;
mod seed;

pub use content::{ContentCatalog, ContentError};
