use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user review of a recipe, a coffee or a piece of equipment.
///
/// `id`, `created_at` and `helpful` are assigned by the store on write; the
/// caller supplies a [`NewReview`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub target_type: TargetType,
    pub target_id: String,
    /// 1 to 5.
    pub rating: u8,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pros: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cons: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    /// Only ever incremented.
    pub helpful: u32,
}

/// What a review is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Recipe,
    Coffee,
    Equipment,
}

/// Caller-supplied part of a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub user_id: String,
    pub user_name: String,
    pub target_type: TargetType,
    pub target_id: String,
    pub rating: u8,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub pros: Option<Vec<String>>,
    #[serde(default)]
    pub cons: Option<Vec<String>>,
}

impl Review {
    pub fn from_new(input: NewReview, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: input.user_id,
            user_name: input.user_name,
            target_type: input.target_type,
            target_id: input.target_id,
            rating: input.rating,
            title: input.title,
            content: input.content,
            pros: input.pros,
            cons: input.cons,
            created_at,
            helpful: 0,
        }
    }
}
