use serde::{Deserialize, Serialize};

/// One step of the learning path.
///
/// `content` is in display order; nothing in the crate reorders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Unique, expected to run densely from 1.
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Whether the level can be opened without finishing the previous one.
    pub unlocked: bool,
    pub estimated_minutes: u32,
    pub content: Vec<ContentSection>,
}

/// A block of level content. The payload depends on the kind of block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentSection {
    Text(TextSection),
    Comparison(ComparisonSection),
    Diagram(DiagramSection),
    Interactive(InteractiveSection),
}

/// Discriminant of a [`ContentSection`], handy for filtering and faceting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Text,
    Comparison,
    Diagram,
    Interactive,
}

impl ContentSection {
    pub fn kind(&self) -> SectionKind {
        match self {
            ContentSection::Text(_) => SectionKind::Text,
            ContentSection::Comparison(_) => SectionKind::Comparison,
            ContentSection::Diagram(_) => SectionKind::Diagram,
            ContentSection::Interactive(_) => SectionKind::Interactive,
        }
    }

    /// Heading shown above the block, if it has one.
    pub fn heading(&self) -> Option<&str> {
        match self {
            ContentSection::Text(text) => text.heading.as_deref(),
            ContentSection::Comparison(cmp) => Some(cmp.heading.as_str()),
            ContentSection::Diagram(diagram) => Some(diagram.heading.as_str()),
            ContentSection::Interactive(widget) => Some(widget.heading.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub body: String,
}

/// Two-column comparison table, e.g. Arabica vs. Robusta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSection {
    pub heading: String,
    /// Column titles, left then right.
    pub columns: [String; 2],
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub label: String,
    pub left: String,
    pub right: String,
}

/// A labelled sequence of nodes, rendered as a flow or a cross-section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramSection {
    pub heading: String,
    pub nodes: Vec<DiagramNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramNode {
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveSection {
    pub heading: String,
    pub widget: Widget,
    pub prompt: String,
}

/// The interactive widgets a level can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Widget {
    RatioCalculator,
    GrindSelector,
    FlavorWheel,
    Quiz,
}
