//! Runtime configuration read from `FINDTHENAME_*` environment variables (and `.env`)

use std::env;
use std::path::PathBuf;

use crate::config_error;
use crate::engine::words::load_word_list;
use crate::engine::{EngineConfig, WordLists, DEFAULT_MAX_RESULTS};
use crate::error::Result;
use crate::tld::{load_catalog, BuiltinSource, JsonFileSource, PopularTlds, TldCatalog, TldSource};

pub const ENV_TLD_FILE: &str = "FINDTHENAME_TLD_FILE";
pub const ENV_FAVORITES: &str = "FINDTHENAME_FAVORITES";
pub const ENV_MAX_RESULTS: &str = "FINDTHENAME_MAX_RESULTS";
pub const ENV_PREFIXES: &str = "FINDTHENAME_PREFIXES";
pub const ENV_SUFFIXES: &str = "FINDTHENAME_SUFFIXES";
pub const ENV_COMBINERS: &str = "FINDTHENAME_COMBINERS";
pub const ENV_POPULAR_TLDS: &str = "FINDTHENAME_POPULAR_TLDS";

/// Default favorites location, relative to the working directory
pub const DEFAULT_FAVORITES_PATH: &str = "output/favorites.json";

/// Everything the binary needs before building an engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON catalog; the built-in list when unset
    pub tld_file: Option<PathBuf>,
    pub favorites_path: PathBuf,
    pub max_results: usize,
    pub prefixes_file: Option<PathBuf>,
    pub suffixes_file: Option<PathBuf>,
    pub combiners_file: Option<PathBuf>,
    pub popular_tlds: Option<Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tld_file: None,
            favorites_path: PathBuf::from(DEFAULT_FAVORITES_PATH),
            max_results: DEFAULT_MAX_RESULTS,
            prefixes_file: None,
            suffixes_file: None,
            combiners_file: None,
            popular_tlds: None,
        }
    }
}

impl AppConfig {
    /// Read the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Favorites location alone; the favorites commands need nothing else
    pub fn favorites_path_from_env() -> PathBuf {
        Self::favorites_path_from_lookup(|key| env::var(key).ok())
    }

    pub fn favorites_path_from_lookup<F>(lookup: F) -> PathBuf
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(ENV_FAVORITES)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FAVORITES_PATH))
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let max_results = match get(ENV_MAX_RESULTS) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(config_error!("{} must be a positive integer, got '{}'", ENV_MAX_RESULTS, raw)),
            },
            None => defaults.max_results,
        };

        let popular_tlds = get(ENV_POPULAR_TLDS).map(|raw| parse_tld_list(&raw)).transpose()?;

        Ok(Self {
            tld_file: get(ENV_TLD_FILE).map(PathBuf::from),
            favorites_path: Self::favorites_path_from_lookup(&lookup),
            max_results,
            prefixes_file: get(ENV_PREFIXES).map(PathBuf::from),
            suffixes_file: get(ENV_SUFFIXES).map(PathBuf::from),
            combiners_file: get(ENV_COMBINERS).map(PathBuf::from),
            popular_tlds,
        })
    }

    /// Catalog provider selected by `FINDTHENAME_TLD_FILE`
    pub fn catalog_source(&self) -> Box<dyn TldSource> {
        match &self.tld_file {
            Some(path) => Box::new(JsonFileSource::new(path.clone())),
            None => Box::new(BuiltinSource),
        }
    }

    pub async fn load_catalog(&self) -> Result<TldCatalog> {
        let source = self.catalog_source();
        load_catalog(source.as_ref()).await
    }

    /// Engine settings, reading any configured word-list files
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut words = WordLists::builtin();
        if let Some(path) = &self.prefixes_file {
            words = words.with_prefixes(load_word_list(path)?);
        }
        if let Some(path) = &self.suffixes_file {
            words = words.with_suffixes(load_word_list(path)?);
        }
        if let Some(path) = &self.combiners_file {
            words = words.with_combiners(load_word_list(path)?);
        }

        let popular = match &self.popular_tlds {
            Some(tlds) => PopularTlds::new(tlds.iter().cloned()),
            None => PopularTlds::default(),
        };

        Ok(EngineConfig {
            popular,
            words,
            max_results: self.max_results,
            ..EngineConfig::default()
        })
    }
}

/// Comma-separated TLDs; a leading dot is tolerated
fn parse_tld_list(raw: &str) -> Result<Vec<String>> {
    let tlds: Vec<String> = raw
        .split(',')
        .map(|t| t.trim().trim_start_matches('.').to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    if let Some(bad) = tlds.iter().find(|t| !t.chars().all(|c| c.is_ascii_lowercase())) {
        return Err(config_error!("{} contains an invalid TLD '{}'", ENV_POPULAR_TLDS, bad));
    }
    if tlds.is_empty() {
        return Err(config_error!("{} is set but lists no TLDs", ENV_POPULAR_TLDS));
    }
    Ok(tlds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FindTheNameError;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.max_results, 500);
        assert_eq!(config.favorites_path, PathBuf::from("output/favorites.json"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_MAX_RESULTS, " 42 "),
            (ENV_FAVORITES, "/tmp/favs.json"),
            (ENV_POPULAR_TLDS, "com, .IO,dev,"),
            (ENV_TLD_FILE, ""),
        ]))
        .unwrap();

        assert_eq!(config.max_results, 42);
        assert_eq!(config.favorites_path, PathBuf::from("/tmp/favs.json"));
        assert_eq!(config.popular_tlds, Some(vec!["com".to_string(), "io".to_string(), "dev".to_string()]));
        assert_eq!(config.tld_file, None);
    }

    #[test]
    fn test_invalid_values() {
        for raw in ["0", "-3", "lots"] {
            let err = AppConfig::from_lookup(lookup(&[(ENV_MAX_RESULTS, raw)])).unwrap_err();
            assert!(matches!(err, FindTheNameError::Config { .. }), "{} accepted", raw);
        }

        let err = AppConfig::from_lookup(lookup(&[(ENV_POPULAR_TLDS, "com,c0m")])).unwrap_err();
        assert!(matches!(err, FindTheNameError::Config { .. }));

        let err = AppConfig::from_lookup(lookup(&[(ENV_POPULAR_TLDS, ", ,")])).unwrap_err();
        assert!(matches!(err, FindTheNameError::Config { .. }));
    }

    #[test]
    fn test_favorites_path_ignores_other_settings() {
        let env = lookup(&[(ENV_FAVORITES, " /tmp/favs.json "), (ENV_MAX_RESULTS, "zero")]);
        assert!(AppConfig::from_lookup(&env).is_err());
        assert_eq!(AppConfig::favorites_path_from_lookup(&env), PathBuf::from("/tmp/favs.json"));
        assert_eq!(
            AppConfig::favorites_path_from_lookup(lookup(&[])),
            PathBuf::from(DEFAULT_FAVORITES_PATH)
        );
    }

    #[test]
    fn test_engine_config_reads_word_lists() {
        let dir = tempfile::tempdir().unwrap();
        let prefixes = dir.path().join("prefixes.txt");
        std::fs::write(&prefixes, "# mine\nMy\nour\n").unwrap();

        let config = AppConfig {
            prefixes_file: Some(prefixes),
            popular_tlds: Some(vec!["xyz".to_string()]),
            max_results: 10,
            ..AppConfig::default()
        };
        let engine = config.engine_config().unwrap();
        assert_eq!(engine.words.prefixes, vec!["my", "our"]);
        assert_eq!(engine.words.suffixes, WordLists::builtin().suffixes);
        assert_eq!(engine.popular.iter().collect::<Vec<_>>(), vec!["xyz"]);
        assert_eq!(engine.max_results, 10);
    }

    #[test]
    fn test_missing_word_list_is_an_error() {
        let config = AppConfig {
            suffixes_file: Some(PathBuf::from("/definitely/not/here.txt")),
            ..AppConfig::default()
        };
        assert!(matches!(config.engine_config(), Err(FindTheNameError::Io { .. })));
    }

    #[tokio::test]
    async fn test_load_builtin_catalog() {
        let catalog = AppConfig::default().load_catalog().await.unwrap();
        assert!(catalog.contains("com"));
        assert!(catalog.contains("am"));
    }
}
