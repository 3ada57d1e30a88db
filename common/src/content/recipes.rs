use super::{matches_query, normalize_query};
use crate::model::recipe::{Difficulty, Recipe, RecipeCategory};

#[derive(Debug, Clone)]
pub struct Recipes {
    recipes: Vec<Recipe>,
}

impl Recipes {
    pub(crate) fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn by_category(&self, category: RecipeCategory) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.category == category)
            .collect()
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.difficulty == difficulty)
            .collect()
    }

    /// Recipes whose name, description or any ingredient contains `query`,
    /// ignoring case. A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        let Some(needle) = normalize_query(query) else {
            return self.recipes.iter().collect();
        };

        self.recipes
            .iter()
            .filter(|recipe| {
                matches_query(&recipe.name, &needle)
                    || matches_query(&recipe.description, &needle)
                    || recipe
                        .ingredients
                        .iter()
                        .any(|ingredient| matches_query(ingredient, &needle))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentCatalog;

    #[test]
    fn finds_v60_by_id() {
        let catalog = ContentCatalog::seeded();
        let recipe = catalog.recipes().get("v60-pour-over").unwrap();
        assert_eq!(recipe.id, "v60-pour-over");
        assert_eq!(catalog.recipes().get("does-not-exist"), None);
    }

    #[test]
    fn every_recipe_round_trips_through_get() {
        let catalog = ContentCatalog::seeded();
        for recipe in catalog.recipes().all() {
            assert_eq!(catalog.recipes().get(&recipe.id), Some(recipe));
        }
    }

    #[test]
    fn category_filter_is_exact_and_ordered() {
        let catalog = ContentCatalog::seeded();
        for category in [RecipeCategory::Cold, RecipeCategory::Hot, RecipeCategory::Beginner] {
            let filtered: Vec<&str> = catalog
                .recipes()
                .by_category(category)
                .iter()
                .map(|r| r.id.as_str())
                .collect();
            let expected: Vec<&str> = catalog
                .recipes()
                .all()
                .iter()
                .filter(|r| r.category == category)
                .map(|r| r.id.as_str())
                .collect();
            assert_eq!(filtered, expected);
        }
    }

    #[test]
    fn difficulty_filter_can_be_empty() {
        let recipes = Recipes::new(Vec::new());
        assert!(recipes.by_difficulty(Difficulty::Hard).is_empty());

        let catalog = ContentCatalog::seeded();
        assert!(catalog
            .recipes()
            .by_difficulty(Difficulty::Hard)
            .iter()
            .all(|r| r.difficulty == Difficulty::Hard));
    }

    #[test]
    fn steps_are_numbered_from_one() {
        let catalog = ContentCatalog::seeded();
        for recipe in catalog.recipes().all() {
            for (idx, step) in recipe.steps.iter().enumerate() {
                assert_eq!(step.step as usize, idx + 1, "recipe {}", recipe.id);
            }
        }
    }

    #[test]
    fn search_ignores_case_and_checks_ingredients() {
        let catalog = ContentCatalog::seeded();

        let by_name: Vec<&str> = catalog
            .recipes()
            .search("CHEMEX")
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(by_name, vec!["chemex"]);

        let by_ingredient = catalog.recipes().search("tonic");
        assert!(by_ingredient.iter().any(|r| r.id == "espresso-tonic"));

        assert!(catalog.recipes().search("matcha").is_empty());
        assert_eq!(catalog.recipes().search("  ").len(), catalog.recipes().all().len());
    }
}
