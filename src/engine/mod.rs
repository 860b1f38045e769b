//! Suggestion engine: every naming strategy plus the aggregator that merges them
//!
//! The engine is pure. It takes a raw word, a [`TldCatalog`] and an [`EngineConfig`] and returns
//! scored [`Suggestion`]s; loading catalogs and word lists happens elsewhere.

pub mod abbreviation;
pub mod affix;
pub mod hack;
pub mod scoring;
pub mod spelling;
pub mod wordplay;
pub mod words;

use std::sync::Arc;

use crate::tld::{PopularTlds, TldCatalog};
use crate::types::{StrategyName, Suggestion};

pub use abbreviation::find_abbreviation_suggestions;
pub use affix::{find_prefix_suggestions, find_suffix_suggestions};
pub use hack::{detect_multi_level, detect_single_level, find_domain_hacks, MAX_HACK_DEPTH};
pub use scoring::{cap, deduplicate, normalize, DEFAULT_MAX_RESULTS};
pub use spelling::find_alt_spelling_suggestions;
pub use wordplay::find_word_play_suggestions;
pub use words::WordLists;

/// Tunables shared by all strategies
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// TLDs paired directly with generated names, in display order
    pub popular: PopularTlds,
    pub words: WordLists,
    /// Aggregator cap
    pub max_results: usize,
    /// Recursion cap for multi-level hacks
    pub max_hack_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            popular: PopularTlds::default(),
            words: WordLists::builtin(),
            max_results: DEFAULT_MAX_RESULTS,
            max_hack_depth: MAX_HACK_DEPTH,
        }
    }
}

/// Run a single strategy
pub fn run_strategy(
    strategy: StrategyName,
    input: &str,
    catalog: &TldCatalog,
    config: &EngineConfig,
) -> Vec<Suggestion> {
    match strategy {
        StrategyName::DomainHack => find_domain_hacks(input, catalog, config),
        StrategyName::Prefix => find_prefix_suggestions(input, catalog, config),
        StrategyName::Suffix => find_suffix_suggestions(input, catalog, config),
        StrategyName::Abbreviation => find_abbreviation_suggestions(input, catalog, config),
        StrategyName::AltSpelling => find_alt_spelling_suggestions(input, catalog, config),
        StrategyName::WordPlay => find_word_play_suggestions(input, catalog, config),
    }
}

/// Run every strategy, merge duplicates and keep the best `config.max_results`
pub fn run_all_strategies(input: &str, catalog: &TldCatalog, config: &EngineConfig) -> Vec<Suggestion> {
    let mut all = Vec::new();

    for strategy in StrategyName::ALL {
        let found = run_strategy(strategy, input, catalog, config);
        tracing::debug!(strategy = %strategy, count = found.len(), "strategy finished");
        all.extend(found);
    }

    let total = all.len();
    let unique = deduplicate(all);
    tracing::debug!(total, unique = unique.len(), max = config.max_results, "merged suggestions");

    cap(unique, config.max_results)
}

/// Engine bound to one catalog and configuration
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    catalog: Arc<TldCatalog>,
    config: EngineConfig,
}

impl SuggestionEngine {
    pub fn new(catalog: Arc<TldCatalog>, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &TldCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// All strategies, merged and capped
    pub fn suggest(&self, input: &str) -> Vec<Suggestion> {
        run_all_strategies(input, &self.catalog, &self.config)
    }

    /// One strategy, uncapped
    pub fn suggest_with(&self, strategy: StrategyName, input: &str) -> Vec<Suggestion> {
        run_strategy(strategy, input, &self.catalog, &self.config)
    }
}
