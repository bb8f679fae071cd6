//! In-memory catalog index.
//!
//! The index derives lowercased views from each [`ToolRecord`] once, at build
//! time, so the query-time engines only ever do substring scans over
//! precomputed strings. Rebuilds are wholesale: every `build` starts from an
//! empty index, there is no partial update path.

use std::collections::HashMap;

use crate::types::ToolRecord;

/// Precomputed, lowercased form of one catalog record.
#[derive(Debug, Clone)]
pub struct IndexedEntry {
    pub id: String,
    /// Lowercase concatenation of title, description, category, tags and file.
    pub search_text: String,
    pub title_lower: String,
    pub category: String,
    pub tags_lower: Vec<String>,
    pub featured: bool,
    pub polished: bool,
    pub complexity: Option<String>,
}

impl IndexedEntry {
    fn from_record(record: &ToolRecord) -> Self {
        let mut parts = Vec::with_capacity(4 + record.tags.len());
        parts.push(record.title.as_str());
        parts.push(record.description.as_str());
        parts.push(record.category.as_str());
        parts.extend(record.tags.iter().map(String::as_str));
        parts.push(record.file.as_str());

        Self {
            id: record.id.clone(),
            search_text: parts.join(" ").to_lowercase(),
            title_lower: record.title.to_lowercase(),
            category: record.category.clone(),
            tags_lower: record.tags.iter().map(|tag| tag.to_lowercase()).collect(),
            featured: record.featured,
            polished: record.polished,
            complexity: record.complexity.clone(),
        }
    }
}

/// Searchable representation of a tool catalog.
///
/// Holds one [`IndexedEntry`] per record plus an id lookup used to rehydrate
/// result sets with full record data. Owned exclusively by the worker thread;
/// no synchronization is needed.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    entries: Vec<IndexedEntry>,
    records: HashMap<String, ToolRecord>,
}

impl CatalogIndex {
    /// Build a fresh index over `records`.
    ///
    /// Entries keep the input iteration order. Duplicate ids silently
    /// overwrite in the lookup map, so rehydration sees the last record with
    /// a given id.
    #[must_use]
    pub fn build(records: &[ToolRecord]) -> Self {
        let mut index = Self {
            entries: Vec::with_capacity(records.len()),
            records: HashMap::with_capacity(records.len()),
        };

        for record in records {
            index.entries.push(IndexedEntry::from_record(record));
            index.records.insert(record.id.clone(), record.clone());
        }

        index
    }

    /// Number of indexed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indexed entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[IndexedEntry] {
        &self.entries
    }

    /// Look up the full record behind an entry id.
    #[must_use]
    pub fn record(&self, id: &str) -> Option<&ToolRecord> {
        self.records.get(id)
    }
}
