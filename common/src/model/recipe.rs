use serde::{Deserialize, Serialize};

/// A brewing recipe. `id` is a slug such as `"v60-pour-over"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: RecipeCategory,
    pub difficulty: Difficulty,
    /// Free-form, e.g. `"3-4 min"`.
    pub brew_time: String,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub tools: Vec<String>,
    pub grind_size: GrindSize,
    /// `steps[i].step == i + 1` for every recipe in a valid catalog.
    pub steps: Vec<RecipeStep>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    pub step: u32,
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeCategory {
    Cold,
    Hot,
    Beginner,
}

/// Shared by recipes and equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrindSize {
    ExtraFine,
    Fine,
    MediumFine,
    Medium,
    MediumCoarse,
    Coarse,
}
