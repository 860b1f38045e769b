//! Post-processing of engine output: filtering, sorting and grouping for display

use std::collections::HashSet;

use crate::tld::TldCatalog;
use crate::types::{SortOption, StrategyName, Suggestion, TldType};

/// Largest TLD length the default window admits
pub const MAX_TLD_LENGTH: usize = 99;

/// What the user wants to see
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub tld_types: HashSet<TldType>,
    pub strategies: HashSet<StrategyName>,
    /// Inclusive bounds on the final TLD length
    pub tld_length_min: usize,
    pub tld_length_max: usize,
    /// Case-insensitive substring of the domain; empty matches everything
    pub search_within: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            tld_types: TldType::ALL.into_iter().collect(),
            strategies: StrategyName::ALL.into_iter().collect(),
            tld_length_min: 0,
            tld_length_max: MAX_TLD_LENGTH,
            search_within: String::new(),
        }
    }
}

impl FilterState {
    /// Whether a single suggestion passes every filter
    pub fn matches(&self, suggestion: &Suggestion, catalog: &TldCatalog, needle: &str) -> bool {
        // TLDs outside the catalog have no type and are never filtered out by it
        if let Some(tld_type) = catalog.tld_type(&suggestion.tld) {
            if !self.tld_types.contains(&tld_type) {
                return false;
            }
        }

        if !self.strategies.contains(&suggestion.strategy) {
            return false;
        }

        let len = suggestion.tld.len();
        if len < self.tld_length_min || len > self.tld_length_max {
            return false;
        }

        needle.is_empty() || suggestion.domain.to_lowercase().contains(needle)
    }
}

/// Keep the suggestions that pass `filter`, preserving order
pub fn apply_filters(suggestions: &[Suggestion], filter: &FilterState, catalog: &TldCatalog) -> Vec<Suggestion> {
    let needle = filter.search_within.trim().to_lowercase();
    suggestions
        .iter()
        .filter(|s| filter.matches(s, catalog, &needle))
        .cloned()
        .collect()
}

/// Stable sort by the chosen key
pub fn sort_suggestions(suggestions: &mut [Suggestion], sort: SortOption) {
    match sort {
        SortOption::Score => suggestions.sort_by(|a, b| b.score.cmp(&a.score)),
        SortOption::Alpha => suggestions.sort_by(|a, b| a.domain.cmp(&b.domain)),
        SortOption::Length => suggestions.sort_by_key(|s| s.domain.len()),
    }
}

/// Suggestions bucketed by strategy in display order; empty buckets are left out
pub fn group_by_strategy(suggestions: &[Suggestion]) -> Vec<(StrategyName, Vec<&Suggestion>)> {
    StrategyName::ALL
        .into_iter()
        .map(|strategy| {
            let group: Vec<&Suggestion> = suggestions.iter().filter(|s| s.strategy == strategy).collect();
            (strategy, group)
        })
        .filter(|(_, group)| !group.is_empty())
        .collect()
}
