use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cup shared in the community gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brew {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    pub description: String,
    /// Brew method as typed by the user, e.g. `"V60"` or `"AeroPress"`.
    pub method: String,
    /// Recipe the brew followed, when it followed one from the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Only ever incremented.
    pub likes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrew {
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    pub description: String,
    pub method: String,
    #[serde(default)]
    pub recipe_id: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Brew {
    pub fn from_new(input: NewBrew, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: input.user_id,
            user_name: input.user_name,
            title: input.title,
            description: input.description,
            method: input.method,
            recipe_id: input.recipe_id,
            image_url: input.image_url,
            created_at,
            likes: 0,
        }
    }
}
