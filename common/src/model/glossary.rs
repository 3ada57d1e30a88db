use serde::{Deserialize, Serialize};

/// A glossary entry. Lookups by `term` ignore case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
    /// Free-form facet, e.g. `"Brewing"` or `"Tasting"`.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}
