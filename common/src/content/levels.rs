use crate::model::level::{Level, SectionKind};

/// The learning path, in declaration order.
#[derive(Debug, Clone)]
pub struct Levels {
    levels: Vec<Level>,
}

impl Levels {
    pub(crate) fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    pub fn all(&self) -> &[Level] {
        &self.levels
    }

    pub fn get(&self, id: u32) -> Option<&Level> {
        self.levels.iter().find(|level| level.id == id)
    }

    pub fn unlocked(&self) -> Vec<&Level> {
        self.levels.iter().filter(|level| level.unlocked).collect()
    }

    /// Levels containing at least one section of the given kind.
    pub fn with_section(&self, kind: SectionKind) -> Vec<&Level> {
        self.levels
            .iter()
            .filter(|level| level.content.iter().any(|section| section.kind() == kind))
            .collect()
    }

    /// Number of levels in the table. Ids are not assumed to be contiguous,
    /// so this is never derived from the highest id.
    pub fn total(&self) -> usize {
        self.levels.len()
    }

    /// Sum of the estimated minutes over every level.
    pub fn total_minutes(&self) -> u32 {
        self.levels.iter().map(|level| level.estimated_minutes).sum()
    }
}
