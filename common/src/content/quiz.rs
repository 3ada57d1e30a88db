//! # Coffee quiz
//!
//! Ranks the catalog's coffee recommendations against a short questionnaire.
//! Each answer is optional; an unanswered question contributes nothing.
//!
//! | match                         | points |
//! |-------------------------------|--------|
//! | roast                         | 3      |
//! | acidity                       | 2      |
//! | body                          | 2      |
//! | each shared flavor tag        | 1      |
//! | beginner and beginner-friendly| 1      |
//!
//! Coffees scoring zero are left out. Ties keep catalog order.

use serde::{Deserialize, Serialize};

use crate::ContentCatalog;
use crate::model::coffee::{Acidity, Body, CoffeeRecommendation, Roast};

const ROAST_POINTS: u32 = 3;
const ACIDITY_POINTS: u32 = 2;
const BODY_POINTS: u32 = 2;
const FLAVOR_POINTS: u32 = 1;
const BEGINNER_POINTS: u32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    #[default]
    Beginner,
    Enthusiast,
}

/// What the user told the quiz.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswers {
    pub roast: Option<Roast>,
    pub acidity: Option<Acidity>,
    pub body: Option<Body>,
    /// Flavor notes the user likes, compared to the coffee's flavor profile
    /// ignoring case.
    #[serde(default)]
    pub flavors: Vec<String>,
    #[serde(default)]
    pub experience: Experience,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecommendation<'a> {
    pub coffee: &'a CoffeeRecommendation,
    pub score: u32,
}

/// Scores a single coffee against the answers.
pub fn score(coffee: &CoffeeRecommendation, answers: &QuizAnswers) -> u32 {
    let mut points = 0;

    if answers.roast == Some(coffee.roast) {
        points += ROAST_POINTS;
    }
    if answers.acidity == Some(coffee.acidity) {
        points += ACIDITY_POINTS;
    }
    if answers.body == Some(coffee.body) {
        points += BODY_POINTS;
    }

    let liked: Vec<String> = answers.flavors.iter().map(|f| f.to_lowercase()).collect();
    let shared = coffee
        .flavor_profile
        .iter()
        .filter(|note| liked.contains(&note.to_lowercase()))
        .count() as u32;
    points += shared * FLAVOR_POINTS;

    if answers.experience == Experience::Beginner && coffee.is_beginner_friendly() {
        points += BEGINNER_POINTS;
    }

    points
}

/// The `limit` best matches, highest score first.
pub fn recommend<'a>(
    catalog: &'a ContentCatalog,
    answers: &QuizAnswers,
    limit: usize,
) -> Vec<ScoredRecommendation<'a>> {
    let mut scored: Vec<ScoredRecommendation<'a>> = catalog
        .recommendations()
        .all()
        .iter()
        .map(|coffee| ScoredRecommendation {
            coffee,
            score: score(coffee, answers),
        })
        .filter(|scored| scored.score > 0)
        .collect();

    // sort_by is stable, so equal scores stay in catalog order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}
