//! Catalog filtering.
//!
//! Derives the visible subset of the catalog from the transient filter state
//! (free-text query + category chip). Filtering is a pure function of its
//! inputs: same query and category always produce the same records in the
//! same order, and the result preserves catalog order.

use crate::catalog::{self, CategoryFilter, ToolRecord};

/// Transient filter inputs owned by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Free-text query, matched case-insensitively against name and summary.
    pub query: String,
    /// Selected category chip.
    pub category: CategoryFilter,
}

impl FilterState {
    /// Create a filter state from parts.
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Whether this filter passes every record (wildcard category, blank query).
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && self.query.trim().is_empty()
    }

    /// Whether a single record passes both predicates.
    pub fn matches(&self, tool: &ToolRecord) -> bool {
        if !self.category.matches(tool.category) {
            return false;
        }
        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || tool.name.to_lowercase().contains(&query)
            || tool.summary.to_lowercase().contains(&query)
    }
}

/// Filter a tool slice, preserving its order.
pub fn apply<'a>(tools: &'a [ToolRecord], filter: &FilterState) -> Vec<&'a ToolRecord> {
    tools.iter().filter(|tool| filter.matches(tool)).collect()
}

/// Filter the static catalog.
pub fn apply_catalog(filter: &FilterState) -> Vec<&'static ToolRecord> {
    apply(catalog::all(), filter)
}

/// Memoized filter over the static catalog.
///
/// Caches the last `(query, category)` pair so repeated renders with
/// unchanged inputs skip the scan. Purely an optimization: `results` always
/// equals `apply_catalog` for the current filter.
#[derive(Debug, Default)]
pub struct FilterCache {
    cached_for: Option<FilterState>,
    results: Vec<&'static ToolRecord>,
}

impl FilterCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filtered records for `filter`, recomputing only when the inputs changed.
    pub fn results(&mut self, filter: &FilterState) -> &[&'static ToolRecord] {
        if self.cached_for.as_ref() != Some(filter) {
            self.results = apply_catalog(filter);
            self.cached_for = Some(filter.clone());
        }
        &self.results
    }

    /// Number of records the current filter passes.
    pub fn count(&mut self, filter: &FilterState) -> usize {
        self.results(filter).len()
    }
}
