//! Term-weighted free-text scoring over the catalog index.
//!
//! Every whitespace-delimited query term must match at least one field of an
//! entry for the entry to qualify; fields contribute fixed weights that stack
//! per term. Title matches dominate, with extra bonuses for prefix and exact
//! title hits, so `painter` ranks "Painter" above tools that merely mention
//! painting in their body text.

use crate::index::CatalogIndex;
use crate::types::ScoredTool;

const TITLE_WEIGHT: u32 = 100;
const TITLE_PREFIX_BONUS: u32 = 50;
const TITLE_EXACT_BONUS: u32 = 100;
const TAG_WEIGHT: u32 = 50;
const CATEGORY_WEIGHT: u32 = 30;
const BODY_WEIGHT: u32 = 10;
const FEATURED_BONUS: u32 = 20;
const POLISHED_BONUS: u32 = 10;

/// Knobs accepted by a search request.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum number of results returned, applied after sorting.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { limit: 50 }
    }
}

/// Run a free-text query against the index.
///
/// Returns rehydrated records in descending score order, truncated to the
/// configured limit. Ties keep catalog order. An empty or all-whitespace
/// query yields no results.
#[must_use]
pub fn search(index: &CatalogIndex, query: &str, options: &SearchOptions) -> Vec<ScoredTool> {
    let query_lower = query.to_lowercase();
    let terms: Vec<&str> = query_lower.split_whitespace().collect();
    if terms.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(usize, u32)> = Vec::new();

    for (position, entry) in index.entries().iter().enumerate() {
        let mut score = 0u32;
        let mut matched_terms = 0usize;

        for term in &terms {
            let mut term_matched = false;

            if entry.title_lower.contains(term) {
                score += TITLE_WEIGHT;
                if entry.title_lower.starts_with(term) {
                    score += TITLE_PREFIX_BONUS;
                }
                if entry.title_lower == *term {
                    score += TITLE_EXACT_BONUS;
                }
                term_matched = true;
            }

            if entry.tags_lower.iter().any(|tag| tag.contains(term)) {
                score += TAG_WEIGHT;
                term_matched = true;
            }

            if entry.category.to_lowercase().contains(term) {
                score += CATEGORY_WEIGHT;
                term_matched = true;
            }

            if entry.search_text.contains(term) {
                score += BODY_WEIGHT;
                term_matched = true;
            }

            if term_matched {
                matched_terms += 1;
            }
        }

        // Every term must have hit at least one field.
        if matched_terms < terms.len() {
            continue;
        }

        if entry.featured {
            score += FEATURED_BONUS;
        }
        if entry.polished {
            score += POLISHED_BONUS;
        }

        ranked.push((position, score));
    }

    // Stable sort keeps catalog order for equal scores.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(options.limit);

    ranked
        .into_iter()
        .filter_map(|(position, score)| {
            let entry = &index.entries()[position];
            index.record(&entry.id).map(|record| ScoredTool {
                record: record.clone(),
                score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToolRecord;

    fn paint_catalog() -> CatalogIndex {
        CatalogIndex::build(&[
            ToolRecord::new("a", "Pixel Painter")
                .with_tags(["art", "pixel"])
                .with_category("creative")
                .featured(true),
            ToolRecord::new("b", "Paint Tool")
                .with_tags(["art"])
                .with_category("creative"),
        ])
    }

    #[test]
    fn prefix_bonus_outranks_featured_boost() {
        let results = search(&paint_catalog(), "paint", &SearchOptions::default());

        let ids: Vec<&str> = results.iter().map(|r| r.record.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        // "b": title contains + prefix + body. "a": title contains + body + featured.
        assert_eq!(results[0].score, 160);
        assert_eq!(results[1].score, 130);
    }

    #[test]
    fn exact_title_outranks_tag_and_body_matches() {
        let index = CatalogIndex::build(&[
            ToolRecord::new("exact", "synth"),
            ToolRecord::new("tagged", "Drum Machine").with_tags(["synth"]),
            ToolRecord::new("body", "Sequencer").with_description("a synth sidekick"),
        ]);
        let results = search(&index, "synth", &SearchOptions::default());

        assert_eq!(results[0].record.id, "exact");
        assert!(results[0].score > results[1].score);
        assert!(results.iter().all(|r| r.score > 0));
    }

    #[test]
    fn featured_flag_adds_exactly_twenty() {
        let plain = ToolRecord::new("x", "Maze Runner").with_tags(["game"]);
        let featured = plain.clone().featured(true);

        let base = search(
            &CatalogIndex::build(&[plain]),
            "maze",
            &SearchOptions::default(),
        );
        let boosted = search(
            &CatalogIndex::build(&[featured]),
            "maze",
            &SearchOptions::default(),
        );

        assert_eq!(boosted[0].score, base[0].score + 20);
    }

    #[test]
    fn every_term_must_match_somewhere() {
        let results = search(&paint_catalog(), "paint nonexistent", &SearchOptions::default());
        assert!(results.is_empty());
    }

    #[test]
    fn multi_term_queries_intersect_fields() {
        // "pixel" hits a's title/tag, "creative" hits the category of both,
        // but only "a" satisfies both terms.
        let results = search(&paint_catalog(), "pixel creative", &SearchOptions::default());
        let ids: Vec<&str> = results.iter().map(|r| r.record.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn blank_queries_return_nothing() {
        assert!(search(&paint_catalog(), "", &SearchOptions::default()).is_empty());
        assert!(search(&paint_catalog(), "   ", &SearchOptions::default()).is_empty());
    }

    #[test]
    fn limit_truncates_after_sorting() {
        let records: Vec<ToolRecord> = (0..10)
            .map(|n| ToolRecord::new(format!("t{n}"), format!("Timer {n}")))
            .collect();
        let index = CatalogIndex::build(&records);

        let results = search(&index, "timer", &SearchOptions { limit: 3 });
        assert_eq!(results.len(), 3);
        // Equal scores fall back to catalog order.
        assert_eq!(results[0].record.id, "t0");
    }
}
