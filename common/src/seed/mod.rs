//! Hand-authored tables loaded by [`ContentCatalog::seeded`](crate::ContentCatalog::seeded).
//!
//! Declaration order here is the order every accessor returns.

mod coffee;
mod equipment;
mod glossary;
mod levels;
mod recipes;

pub(crate) use coffee::recommendations;
pub(crate) use equipment::equipment;
pub(crate) use glossary::glossary;
pub(crate) use levels::levels;
pub(crate) use recipes::recipes;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
