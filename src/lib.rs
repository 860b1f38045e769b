//! findthename - creative domain name suggestions
//!
//! Turns a word into domain hacks ("stre.am"), affixed names, abbreviations, alternate
//! spellings and wordplay combinations, each scored 0..=100.

pub mod config;
pub mod engine;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod tld;
pub mod types;

// Re-export commonly used types
pub use config::AppConfig;
pub use engine::{run_all_strategies, run_strategy, EngineConfig, SuggestionEngine};
pub use error::{FindTheNameError, Result};
pub use favorites::FavoritesStore;
pub use filter::{apply_filters, group_by_strategy, sort_suggestions, FilterState};
pub use tld::{PopularTlds, TldCatalog};
pub use types::{SortOption, StrategyName, Suggestion, TldEntry, TldType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
