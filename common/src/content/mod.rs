//! # Content accessors
//!
//! Read-only queries over the static tables. Every table exposes the same
//! shape of API:
//!
//! - `all()` returns the table as a slice in declaration order.
//! - `get(..)` looks a record up by its unique key and returns `None` when it
//!   is missing. A miss is an ordinary outcome, not an error.
//! - `by_*(..)` filters `all()` keeping the original order and returns an
//!   empty `Vec` when nothing matches.
//! - derived aggregates (glossary categories, beginner coffees, level count)
//!   are computed in a single pass over `all()`.
//!
//! [`ContentCatalog`] bundles the five tables. It is built once per session,
//! either from the built-in seed data or from caller-provided tables which
//! are validated first.

mod coffee;
mod equipment;
mod glossary;
mod levels;
pub mod quiz;
mod recipes;

use std::collections::HashSet;

use log::warn;
use thiserror::Error;

use crate::model::coffee::CoffeeRecommendation;
use crate::model::equipment::Equipment;
use crate::model::glossary::GlossaryTerm;
use crate::model::level::Level;
use crate::model::recipe::Recipe;
use crate::seed;

pub use coffee::Recommendations;
pub use equipment::EquipmentGuide;
pub use glossary::Glossary;
pub use levels::Levels;
pub use recipes::Recipes;

/// Reasons a set of tables is rejected by [`ContentCatalog::from_tables`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate id `{id}` in the {table} table")]
    DuplicateId { table: &'static str, id: String },

    #[error("recipe `{recipe}` lists step {found} at position {position}")]
    MisnumberedStep {
        recipe: String,
        position: u32,
        found: u32,
    },
}

pub type Result<T> = std::result::Result<T, ContentError>;

/// Raw tables, before validation.
#[derive(Debug, Clone, Default)]
pub struct ContentTables {
    pub levels: Vec<Level>,
    pub recipes: Vec<Recipe>,
    pub equipment: Vec<Equipment>,
    pub glossary: Vec<GlossaryTerm>,
    pub recommendations: Vec<CoffeeRecommendation>,
}

impl ContentTables {
    /// The hand-authored tables shipped with the site.
    pub fn seed() -> Self {
        Self {
            levels: seed::levels(),
            recipes: seed::recipes(),
            equipment: seed::equipment(),
            glossary: seed::glossary(),
            recommendations: seed::recommendations(),
        }
    }

    /// Checks id uniqueness for every keyed table and 1-based step numbering
    /// for every recipe.
    pub fn validate(&self) -> Result<()> {
        ensure_unique("levels", self.levels.iter().map(|level| level.id.to_string()))?;
        ensure_unique("recipes", self.recipes.iter().map(|recipe| recipe.id.clone()))?;
        ensure_unique("equipment", self.equipment.iter().map(|item| item.id.clone()))?;
        ensure_unique(
            "recommendations",
            self.recommendations.iter().map(|coffee| coffee.id.clone()),
        )?;

        for recipe in &self.recipes {
            for (idx, step) in recipe.steps.iter().enumerate() {
                let position = idx as u32 + 1;
                if step.step != position {
                    return Err(ContentError::MisnumberedStep {
                        recipe: recipe.id.clone(),
                        position,
                        found: step.step,
                    });
                }
            }
        }
        Ok(())
    }
}

fn ensure_unique(table: &'static str, ids: impl Iterator<Item = String>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.clone()) {
            return Err(ContentError::DuplicateId { table, id });
        }
    }
    Ok(())
}

/// The session's read-only view of all static content.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    levels: Levels,
    recipes: Recipes,
    equipment: EquipmentGuide,
    glossary: Glossary,
    recommendations: Recommendations,
}

impl ContentCatalog {
    /// Catalog over the built-in tables.
    pub fn seeded() -> Self {
        Self::build(ContentTables::seed())
    }

    /// Catalog over caller-provided tables, rejected if any keyed table has a
    /// duplicate id or a recipe's steps are misnumbered.
    ///
    /// Glossary terms that only differ by case are accepted; lookups return
    /// the first one declared.
    pub fn from_tables(tables: ContentTables) -> Result<Self> {
        tables.validate()?;
        Ok(Self::build(tables))
    }

    fn build(tables: ContentTables) -> Self {
        let glossary = Glossary::new(tables.glossary);
        for term in glossary.shadowed_terms() {
            warn!(
                "glossary term '{}' collides with an earlier entry and will never be returned by lookup",
                term
            );
        }

        Self {
            levels: Levels::new(tables.levels),
            recipes: Recipes::new(tables.recipes),
            equipment: EquipmentGuide::new(tables.equipment),
            glossary,
            recommendations: Recommendations::new(tables.recommendations),
        }
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn recipes(&self) -> &Recipes {
        &self.recipes
    }

    pub fn equipment(&self) -> &EquipmentGuide {
        &self.equipment
    }

    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }

    pub fn recommendations(&self) -> &Recommendations {
        &self.recommendations
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Distinct values in first-seen order, compared by exact string equality.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}

/// Case-insensitive substring match. `needle` must already be lowercase.
fn matches_query(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Lowercased, trimmed search query, or `None` for a blank one.
fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
