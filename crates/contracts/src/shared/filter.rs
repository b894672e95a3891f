//! Client-side list filtering: free-text search plus categorical facets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Facet value meaning "no constraint" (the "All" option of a select).
pub const FACET_ANY: &str = "all";

/// Trait for records that can be narrowed by [`FilterCriteria`]
pub trait Filterable {
    /// Text fields the free-text search looks into
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a categorical field (`status`, `role`, ...), `None` if the
    /// record has no such facet
    fn facet_value(&self, facet: &str) -> Option<String>;
}

/// Search string and facet selections, AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub facets: BTreeMap<String, String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_facet(mut self, facet: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_facet(facet, value);
        self
    }

    pub fn set_facet(&mut self, facet: impl Into<String>, value: impl Into<String>) {
        self.facets.insert(facet.into(), value.into());
    }

    pub fn facet(&self, facet: &str) -> &str {
        self.facets.get(facet).map(String::as_str).unwrap_or(FACET_ANY)
    }

    /// Facets with an actual constraint (not empty, not "all")
    pub fn active_facets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.facets
            .iter()
            .map(|(k, v)| (k.as_str(), v.trim()))
            .filter(|(_, v)| !v.is_empty() && !v.eq_ignore_ascii_case(FACET_ANY))
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.active_facets().next().is_none()
    }

    pub fn reset(&mut self) {
        self.search.clear();
        self.facets.clear();
    }

    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        let query = self.search.trim().to_lowercase();
        if !query.is_empty()
            && !item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        {
            return false;
        }

        self.active_facets().all(|(facet, expected)| {
            item.facet_value(facet)
                .map(|actual| actual.eq_ignore_ascii_case(expected))
                .unwrap_or(false)
        })
    }
}

/// Returns the records matching `criteria`, preserving input order
pub fn apply_filters<T: Filterable + Clone>(items: &[T], criteria: &FilterCriteria) -> Vec<T> {
    if criteria.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| criteria.matches(*item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        slug: &'static str,
        name: &'static str,
        status: &'static str,
        kind: &'static str,
    }

    impl Filterable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.slug, self.name]
        }

        fn facet_value(&self, facet: &str) -> Option<String> {
            match facet {
                "status" => Some(self.status.to_string()),
                "kind" => Some(self.kind.to_string()),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { slug: "general", name: "General Info", status: "active", kind: "system" },
            Row { slug: "vip", name: "VIP Services", status: "inactive", kind: "custom" },
            Row { slug: "spa", name: "Spa & Wellness", status: "active", kind: "custom" },
            Row { slug: "dining", name: "Restaurant", status: "inactive", kind: "system" },
        ]
    }

    #[test]
    fn test_empty_criteria_returns_everything_in_order() {
        let items = rows();
        assert_eq!(apply_filters(&items, &FilterCriteria::new()), items);

        let all = FilterCriteria::new().with_search("   ").with_facet("status", "all");
        assert_eq!(apply_filters(&items, &all), items);
    }

    #[test]
    fn test_status_facet() {
        let items = vec![rows()[0].clone(), rows()[1].clone()];
        let result = apply_filters(&items, &FilterCriteria::new().with_facet("status", "active"));
        assert_eq!(result, vec![rows()[0].clone()]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let result = apply_filters(&rows(), &FilterCriteria::new().with_search("SERV"));
        assert_eq!(result.iter().map(|r| r.slug).collect::<Vec<_>>(), vec!["vip"]);

        let result = apply_filters(&rows(), &FilterCriteria::new().with_search("e"));
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_combined_equals_intersection() {
        let items = rows();
        let by_search = apply_filters(&items, &FilterCriteria::new().with_search("s"));
        let by_kind = apply_filters(&items, &FilterCriteria::new().with_facet("kind", "custom"));
        let combined = apply_filters(
            &items,
            &FilterCriteria::new().with_search("s").with_facet("kind", "custom"),
        );

        let intersection: Vec<Row> = by_search
            .into_iter()
            .filter(|r| by_kind.contains(r))
            .collect();
        assert_eq!(combined, intersection);
        assert_eq!(combined.iter().map(|r| r.slug).collect::<Vec<_>>(), vec!["vip", "spa"]);
    }

    #[test]
    fn test_unknown_facet_excludes() {
        let criteria = FilterCriteria::new().with_facet("role", "admin");
        assert!(apply_filters(&rows(), &criteria).is_empty());
    }

    #[test]
    fn test_facet_value_case_insensitive() {
        let criteria = FilterCriteria::new().with_facet("status", "ACTIVE");
        assert_eq!(apply_filters(&rows(), &criteria).len(), 2);
    }
}
