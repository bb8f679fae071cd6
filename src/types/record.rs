use serde::{Deserialize, Serialize};

/// One tool's metadata as supplied by the catalog owner.
///
/// The catalog is the canonical copy; the index only ever derives lowercased
/// views from it. Optional fields deserialize to empty defaults so sparse
/// catalog entries index cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub polished: bool,
    #[serde(default)]
    pub complexity: Option<String>,
}

impl ToolRecord {
    /// Create a record with the given id and title and empty everything else.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Replace the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the file reference.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Mark the record as featured.
    #[must_use]
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Mark the record as polished.
    #[must_use]
    pub fn polished(mut self, polished: bool) -> Self {
        self.polished = polished;
        self
    }

    /// Set the complexity label.
    #[must_use]
    pub fn with_complexity(mut self, complexity: impl Into<String>) -> Self {
        self.complexity = Some(complexity.into());
        self
    }
}
