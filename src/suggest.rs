//! Autocomplete candidates for a partial input.
//!
//! Three independent scans over the index: titles, tags and categories. Each
//! list caps at five entries. Tag candidates rank by how many entries carry
//! the tag; ties keep the order the tags were first seen in, so the output is
//! stable across runs for the same catalog.

use std::collections::{HashMap, HashSet};

use crate::index::CatalogIndex;
use crate::types::{Suggestions, ToolSuggestion};

const MAX_PER_LIST: usize = 5;

/// Collect tool, tag and category suggestions containing `partial`.
///
/// An empty partial yields empty lists. Matching is a case-insensitive
/// substring test throughout.
#[must_use]
pub fn suggestions(index: &CatalogIndex, partial: &str) -> Suggestions {
    if partial.is_empty() {
        return Suggestions::default();
    }
    let partial_lower = partial.to_lowercase();

    let mut tools = Vec::new();
    let mut seen_titles: HashSet<&str> = HashSet::new();
    for entry in index.entries() {
        if !entry.title_lower.contains(&partial_lower) {
            continue;
        }
        if !seen_titles.insert(entry.title_lower.as_str()) {
            continue;
        }
        if let Some(record) = index.record(&entry.id) {
            tools.push(ToolSuggestion {
                id: entry.id.clone(),
                title: record.title.clone(),
            });
        }
        if tools.len() >= MAX_PER_LIST {
            break;
        }
    }

    // Counts in first-seen order so equal counts tie-break deterministically.
    let mut tag_order: Vec<(String, usize)> = Vec::new();
    let mut tag_slots: HashMap<&str, usize> = HashMap::new();
    for entry in index.entries() {
        for tag in &entry.tags_lower {
            if !tag.contains(&partial_lower) {
                continue;
            }
            match tag_slots.get(tag.as_str()).copied() {
                Some(slot) => tag_order[slot].1 += 1,
                None => {
                    tag_slots.insert(tag.as_str(), tag_order.len());
                    tag_order.push((tag.clone(), 1));
                }
            }
        }
    }
    tag_order.sort_by(|a, b| b.1.cmp(&a.1));
    tag_order.truncate(MAX_PER_LIST);
    let tags = tag_order.into_iter().map(|(tag, _)| tag).collect();

    let mut categories: Vec<String> = Vec::new();
    for entry in index.entries() {
        if entry.category.to_lowercase().contains(&partial_lower)
            && !categories.contains(&entry.category)
        {
            categories.push(entry.category.clone());
        }
    }
    categories.truncate(MAX_PER_LIST);

    Suggestions {
        tools,
        tags,
        categories,
    }
}
