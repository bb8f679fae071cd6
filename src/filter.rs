//! Faceted filtering independent of free-text search.

use crate::index::CatalogIndex;
use crate::types::ToolRecord;

/// Exact-match facet constraints, ANDed together.
///
/// Absent fields impose nothing; `featured`/`polished` only constrain when
/// set to `true`, mirroring how the catalog UI exposes them as on/off chips.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub category: Option<String>,
    pub complexity: Option<String>,
    pub featured: bool,
    pub polished: bool,
    pub tags: Vec<String>,
}

impl FilterSpec {
    /// True when no field constrains the candidate set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.complexity.is_none()
            && !self.featured
            && !self.polished
            && self.tags.is_empty()
    }
}

/// Narrow the catalog to entries satisfying every present constraint.
///
/// Returns full rehydrated records in catalog order, unscored and unlimited.
#[must_use]
pub fn filter(index: &CatalogIndex, spec: &FilterSpec) -> Vec<ToolRecord> {
    let filter_tags: Vec<String> = spec.tags.iter().map(|tag| tag.to_lowercase()).collect();

    index
        .entries()
        .iter()
        .filter(|entry| {
            if let Some(category) = &spec.category
                && entry.category != *category
            {
                return false;
            }
            if let Some(complexity) = &spec.complexity
                && entry.complexity.as_deref() != Some(complexity.as_str())
            {
                return false;
            }
            if spec.featured && !entry.featured {
                return false;
            }
            if spec.polished && !entry.polished {
                return false;
            }
            if !filter_tags.is_empty()
                && !filter_tags.iter().any(|tag| entry.tags_lower.contains(tag))
            {
                return false;
            }
            true
        })
        .filter_map(|entry| index.record(&entry.id).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CatalogIndex {
        CatalogIndex::build(&[
            ToolRecord::new("a", "Pixel Painter")
                .with_category("creative")
                .with_tags(["Art", "pixel"])
                .with_complexity("simple")
                .featured(true),
            ToolRecord::new("b", "Paint Tool")
                .with_category("creative")
                .with_tags(["art"])
                .with_complexity("advanced")
                .polished(true),
            ToolRecord::new("c", "Ledger")
                .with_category("finance")
                .with_complexity("simple"),
        ])
    }

    #[test]
    fn empty_spec_returns_the_full_catalog() {
        let results = filter(&catalog(), &FilterSpec::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, "a");
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let spec = FilterSpec {
            category: Some("games".into()),
            ..FilterSpec::default()
        };
        assert!(filter(&catalog(), &spec).is_empty());
    }

    #[test]
    fn constraints_are_intersected() {
        let spec = FilterSpec {
            category: Some("creative".into()),
            complexity: Some("simple".into()),
            ..FilterSpec::default()
        };
        let results = filter(&catalog(), &spec);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "a");
    }

    #[test]
    fn boolean_flags_only_constrain_when_true() {
        let featured = FilterSpec {
            featured: true,
            ..FilterSpec::default()
        };
        let results = filter(&catalog(), &featured);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "a");

        let polished = FilterSpec {
            polished: true,
            ..FilterSpec::default()
        };
        assert_eq!(filter(&catalog(), &polished)[0].id, "b");
    }

    #[test]
    fn tag_filter_intersects_case_insensitively() {
        let spec = FilterSpec {
            tags: vec!["ART".into(), "unused".into()],
            ..FilterSpec::default()
        };
        let results = filter(&catalog(), &spec);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
