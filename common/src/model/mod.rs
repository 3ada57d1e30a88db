//! Record types for the static tables and the user-generated collections.
//!
//! Field names serialize in camelCase and enum variants in lowercase/kebab-case
//! so stored collections stay readable by the browser build.

pub mod brew;
pub mod coffee;
pub mod equipment;
pub mod glossary;
pub mod level;
pub mod recipe;
pub mod review;
