use serde::Serialize;

use super::ToolRecord;

/// A catalog record rehydrated from the index with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTool {
    #[serde(flatten)]
    pub record: ToolRecord,
    pub score: u32,
}

/// A near-miss title produced by the fuzzy matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuzzyMatch {
    pub id: String,
    /// Original-case title, straight from the catalog record.
    pub title: String,
    pub distance: usize,
}

/// Autocomplete candidate referring to a whole tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSuggestion {
    pub id: String,
    pub title: String,
}

/// The three independent suggestion lists for a partial input.
///
/// Each list is capped at five entries regardless of how many candidates
/// match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    pub tools: Vec<ToolSuggestion>,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
}

impl Suggestions {
    /// True when no sub-list holds any candidate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty() && self.tags.is_empty() && self.categories.is_empty()
    }
}
