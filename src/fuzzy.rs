//! Edit-distance suggestions for near-miss queries.
//!
//! Matches the query against a prefix of each title rather than the whole
//! title, so a short query is not penalized for everything the title says
//! after it. The distance threshold is a hard cutoff, which is why the
//! Levenshtein computation is the exact dynamic-programming form and not an
//! approximation.

use crate::index::CatalogIndex;
use crate::types::FuzzyMatch;

/// Maximum edit distance a title prefix may be from the query.
const MAX_DISTANCE: usize = 3;
/// Extra characters of title kept beyond the query length when truncating.
const PREFIX_SLACK: usize = 5;
/// Queries shorter than this yield no candidates.
const MIN_QUERY_CHARS: usize = 2;

pub const DEFAULT_LIMIT: usize = 10;

/// Find titles within edit distance [`MAX_DISTANCE`] of the query.
///
/// Results are sorted by ascending distance (ties keep catalog order) and
/// truncated to `limit`. Queries shorter than two characters return nothing.
#[must_use]
pub fn fuzzy_search(index: &CatalogIndex, query: &str, limit: usize) -> Vec<FuzzyMatch> {
    let query_lower = query.to_lowercase();
    let query_chars: Vec<char> = query_lower.chars().collect();
    if query_chars.len() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let mut matches: Vec<FuzzyMatch> = Vec::new();
    let prefix_len = query_chars.len() + PREFIX_SLACK;

    for entry in index.entries() {
        let prefix: Vec<char> = entry.title_lower.chars().take(prefix_len).collect();
        let distance = levenshtein(&query_chars, &prefix);
        if distance > MAX_DISTANCE {
            continue;
        }

        let Some(record) = index.record(&entry.id) else {
            continue;
        };
        matches.push(FuzzyMatch {
            id: entry.id.clone(),
            title: record.title.clone(),
            distance,
        });
    }

    matches.sort_by(|a, b| a.distance.cmp(&b.distance));
    matches.truncate(limit);
    matches
}

/// Exact unit-cost Levenshtein distance between two character sequences.
#[must_use]
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Rolling rows of the (|b|+1) x (|a|+1) table.
    let mut previous: Vec<usize> = (0..=a.len()).collect();
    let mut current = vec![0usize; a.len() + 1];

    for (i, b_char) in b.iter().enumerate() {
        current[0] = i + 1;
        for (j, a_char) in a.iter().enumerate() {
            current[j + 1] = if a_char == b_char {
                previous[j]
            } else {
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[a.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToolRecord;

    fn distance(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        levenshtein(&a, &b)
    }

    #[test]
    fn classic_distances() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_identity() {
        for (a, b) in [("paint", "point"), ("tool", "stool"), ("pixel", "")] {
            assert_eq!(distance(a, b), distance(b, a));
        }
        assert_eq!(distance("pixel painter", "pixel painter"), 0);
    }

    #[test]
    fn near_miss_titles_are_found() {
        let index = CatalogIndex::build(&[
            ToolRecord::new("b", "Paint Tool"),
            ToolRecord::new("c", "Color Mixer"),
        ]);

        // "painttool" vs the 14-char prefix "paint tool": one insertion.
        let matches = fuzzy_search(&index, "painttool", DEFAULT_LIMIT);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "b");
        assert_eq!(matches[0].title, "Paint Tool");
        assert_eq!(matches[0].distance, 1);
    }

    #[test]
    fn closest_match_sorts_first() {
        let index = CatalogIndex::build(&[
            ToolRecord::new("far", "Paint Shop"),
            ToolRecord::new("near", "Paint Tool"),
        ]);

        let matches = fuzzy_search(&index, "paint tool", DEFAULT_LIMIT);
        assert_eq!(matches[0].id, "near");
        assert_eq!(matches[0].distance, 0);
        assert_eq!(matches[1].id, "far");
    }

    #[test]
    fn threshold_is_a_hard_cutoff() {
        let index = CatalogIndex::build(&[ToolRecord::new("a", "Spreadsheet")]);
        // "zzzz" vs "spreadsheet"[..9]: far beyond three edits.
        assert!(fuzzy_search(&index, "zzzz", DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn short_queries_return_nothing() {
        let index = CatalogIndex::build(&[ToolRecord::new("a", "A")]);
        assert!(fuzzy_search(&index, "a", DEFAULT_LIMIT).is_empty());
        assert!(fuzzy_search(&index, "", DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn limit_truncates_candidates() {
        let records: Vec<ToolRecord> = (0..6)
            .map(|n| ToolRecord::new(format!("t{n}"), "Paint"))
            .collect();
        let index = CatalogIndex::build(&records);

        let matches = fuzzy_search(&index, "paint", 4);
        assert_eq!(matches.len(), 4);
    }
}
