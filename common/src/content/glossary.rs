use std::collections::HashSet;

use super::{distinct, matches_query, normalize_query};
use crate::model::glossary::GlossaryTerm;

/// Glossary entries. Term lookups are case-insensitive and the first entry
/// declared wins when two terms differ only by case.
#[derive(Debug, Clone)]
pub struct Glossary {
    terms: Vec<GlossaryTerm>,
}

impl Glossary {
    pub(crate) fn new(terms: Vec<GlossaryTerm>) -> Self {
        Self { terms }
    }

    pub fn all(&self) -> &[GlossaryTerm] {
        &self.terms
    }

    pub fn get(&self, term: &str) -> Option<&GlossaryTerm> {
        let wanted = term.to_lowercase();
        self.terms
            .iter()
            .find(|entry| entry.term.to_lowercase() == wanted)
    }

    pub fn by_category(&self, category: &str) -> Vec<&GlossaryTerm> {
        self.terms
            .iter()
            .filter(|entry| entry.category == category)
            .collect()
    }

    /// Every category once, in the order it first appears.
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.terms.iter().map(|entry| entry.category.as_str()))
    }

    /// Terms whose name or definition contains `query`, ignoring case.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&GlossaryTerm> {
        let Some(needle) = normalize_query(query) else {
            return self.terms.iter().collect();
        };

        self.terms
            .iter()
            .filter(|entry| {
                matches_query(&entry.term, &needle) || matches_query(&entry.definition, &needle)
            })
            .collect()
    }

    /// Terms that can never be returned by [`get`](Self::get) because an
    /// earlier entry normalizes to the same key.
    pub(crate) fn shadowed_terms(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.terms
            .iter()
            .filter(|entry| !seen.insert(entry.term.to_lowercase()))
            .map(|entry| entry.term.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentCatalog;

    fn entry(term: &str, category: &str, definition: &str) -> GlossaryTerm {
        GlossaryTerm {
            term: term.into(),
            definition: definition.into(),
            category: category.into(),
            example: None,
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let catalog = ContentCatalog::seeded();
        let glossary = catalog.glossary();

        let lower = glossary.get("acidity").unwrap();
        assert_eq!(glossary.get("Acidity"), Some(lower));
        assert_eq!(glossary.get("ACIDITY"), Some(lower));

        assert_eq!(glossary.get("Ristretto"), None);
        assert_eq!(glossary.get("RISTRETTO"), None);
    }

    #[test]
    fn every_term_round_trips_through_get() {
        let catalog = ContentCatalog::seeded();
        for term in catalog.glossary().all() {
            assert_eq!(catalog.glossary().get(&term.term), Some(term));
        }
    }

    #[test]
    fn first_declared_term_wins() {
        let glossary = Glossary::new(vec![
            entry("Bloom", "Brewing", "first"),
            entry("BLOOM", "Brewing", "second"),
        ]);
        assert_eq!(glossary.get("bloom").unwrap().definition, "first");
        assert_eq!(glossary.shadowed_terms(), vec!["BLOOM"]);
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let glossary = Glossary::new(vec![
            entry("Body", "Tasting", ""),
            entry("Bloom", "Brewing", ""),
            entry("Acidity", "Tasting", ""),
            entry("Crema", "Espresso", ""),
        ]);
        assert_eq!(glossary.categories(), vec!["Tasting", "Brewing", "Espresso"]);
    }

    #[test]
    fn seed_categories_cover_every_term() {
        let catalog = ContentCatalog::seeded();
        let categories = catalog.glossary().categories();
        for term in catalog.glossary().all() {
            assert!(categories.contains(&term.category.as_str()));
        }
        let total: usize = categories
            .iter()
            .map(|c| catalog.glossary().by_category(c).len())
            .sum();
        assert_eq!(total, catalog.glossary().all().len());
    }

    #[test]
    fn search_matches_definitions() {
        let catalog = ContentCatalog::seeded();
        let hits: Vec<&str> = catalog
            .glossary()
            .search("espresso")
            .iter()
            .map(|t| t.term.as_str())
            .collect();
        assert!(hits.contains(&"Crema"));
        assert!(catalog.glossary().by_category("Unknown").is_empty());
    }
}
