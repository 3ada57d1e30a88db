use serde::{Deserialize, Serialize};

/// A bean or blend the site recommends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeRecommendation {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub roast: Roast,
    pub acidity: Acidity,
    pub body: Body,
    pub flavor_profile: Vec<String>,
    pub best_for: Vec<String>,
    pub description: String,
}

impl CoffeeRecommendation {
    /// Medium roast with low or medium acidity. This rule is fixed.
    pub fn is_beginner_friendly(&self) -> bool {
        self.roast == Roast::Medium && matches!(self.acidity, Acidity::Low | Acidity::Medium)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Roast {
    Light,
    Medium,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Acidity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Light,
    Medium,
    Full,
}
