//! Core types and structures for findthename

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FindTheNameError;

/// TLD classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TldType {
    /// Country-code TLD (two letters)
    #[serde(rename = "ccTLD")]
    CcTld,
    /// Generic TLD
    #[serde(rename = "gTLD")]
    GTld,
    /// Sponsored TLD
    #[serde(rename = "sTLD")]
    STld,
}

impl TldType {
    pub const ALL: [TldType; 3] = [TldType::CcTld, TldType::GTld, TldType::STld];
}

impl std::fmt::Display for TldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TldType::CcTld => write!(f, "ccTLD"),
            TldType::GTld => write!(f, "gTLD"),
            TldType::STld => write!(f, "sTLD"),
        }
    }
}

impl FromStr for TldType {
    type Err = FindTheNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cctld" | "cc" => Ok(TldType::CcTld),
            "gtld" | "g" => Ok(TldType::GTld),
            "stld" | "s" => Ok(TldType::STld),
            other => Err(FindTheNameError::validation(format!(
                "Unknown TLD type '{}' (expected ccTLD, gTLD or sTLD)",
                other
            ))),
        }
    }
}

/// A single catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TldEntry {
    pub tld: String,
    #[serde(rename = "type")]
    pub tld_type: TldType,
}

impl TldEntry {
    pub fn new(tld: impl Into<String>, tld_type: TldType) -> Self {
        Self {
            tld: tld.into(),
            tld_type,
        }
    }
}

/// Which generation strategy produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrategyName {
    DomainHack,
    Prefix,
    Suffix,
    Abbreviation,
    AltSpelling,
    WordPlay,
}

impl StrategyName {
    /// Every strategy, in aggregation and display order
    pub const ALL: [StrategyName; 6] = [
        StrategyName::DomainHack,
        StrategyName::Prefix,
        StrategyName::Suffix,
        StrategyName::Abbreviation,
        StrategyName::AltSpelling,
        StrategyName::WordPlay,
    ];

    /// Human-readable heading
    pub fn label(&self) -> &'static str {
        match self {
            StrategyName::DomainHack => "Domain Hacks",
            StrategyName::Prefix => "Prefix",
            StrategyName::Suffix => "Suffix",
            StrategyName::Abbreviation => "Abbreviation",
            StrategyName::AltSpelling => "Alt Spelling",
            StrategyName::WordPlay => "Word Play",
        }
    }
}

impl std::fmt::Display for StrategyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyName::DomainHack => write!(f, "domainHack"),
            StrategyName::Prefix => write!(f, "prefix"),
            StrategyName::Suffix => write!(f, "suffix"),
            StrategyName::Abbreviation => write!(f, "abbreviation"),
            StrategyName::AltSpelling => write!(f, "altSpelling"),
            StrategyName::WordPlay => write!(f, "wordPlay"),
        }
    }
}

impl FromStr for StrategyName {
    type Err = FindTheNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "domainhack" | "hack" => Ok(StrategyName::DomainHack),
            "prefix" => Ok(StrategyName::Prefix),
            "suffix" => Ok(StrategyName::Suffix),
            "abbreviation" | "abbrev" => Ok(StrategyName::Abbreviation),
            "altspelling" | "spelling" => Ok(StrategyName::AltSpelling),
            "wordplay" => Ok(StrategyName::WordPlay),
            _ => Err(FindTheNameError::validation(format!(
                "Unknown strategy '{}'. Supported: {}",
                s,
                StrategyName::ALL
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A proposed domain name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Full domain, possibly with several dots for multi-level hacks
    pub domain: String,
    /// Final-level TLD
    pub tld: String,
    /// Label in front of the first-level split
    pub prefix: String,
    pub strategy: StrategyName,
    /// 0..=100, higher is better
    pub score: u8,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_multi_level: bool,
}

impl Suggestion {
    /// Build a single-level suggestion `prefix.tld`
    pub fn new(
        prefix: impl Into<String>,
        tld: impl Into<String>,
        strategy: StrategyName,
        score: u8,
    ) -> Self {
        let prefix = prefix.into();
        let tld = tld.into();
        Self {
            domain: format!("{}.{}", prefix, tld),
            tld,
            prefix,
            strategy,
            score: score.min(100),
            is_multi_level: false,
        }
    }

    /// Identity used for dedup and favorites.
    ///
    /// Single-level records have `domain == prefix.tld`, so the domain string is the key for
    /// both kinds.
    pub fn key(&self) -> &str {
        &self.domain
    }

    /// Same domain attributed to another strategy with a new score
    pub fn retagged(&self, strategy: StrategyName, score: u8) -> Self {
        Self {
            strategy,
            score: score.min(100),
            ..self.clone()
        }
    }

    /// Number of dot-separated labels
    #[cfg(test)]
    pub(crate) fn label_count(&self) -> usize {
        self.domain.split('.').count()
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.domain)
    }
}

/// Ordering applied by the consumer layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Best score first
    #[default]
    Score,
    /// Alphabetical by domain
    Alpha,
    /// Shortest domain first
    Length,
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOption::Score => write!(f, "score"),
            SortOption::Alpha => write!(f, "alpha"),
            SortOption::Length => write!(f, "length"),
        }
    }
}

impl FromStr for SortOption {
    type Err = FindTheNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "score" => Ok(SortOption::Score),
            "alpha" | "az" => Ok(SortOption::Alpha),
            "length" | "short" => Ok(SortOption::Length),
            other => Err(FindTheNameError::validation(format!(
                "Unknown sort '{}' (expected score, alpha or length)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_serde_spelling() {
        let json = serde_json::to_string(&StrategyName::AltSpelling).unwrap();
        assert_eq!(json, "\"altSpelling\"");
        let parsed: StrategyName = serde_json::from_str("\"domainHack\"").unwrap();
        assert_eq!(parsed, StrategyName::DomainHack);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("wordPlay".parse::<StrategyName>().unwrap(), StrategyName::WordPlay);
        assert_eq!("alt-spelling".parse::<StrategyName>().unwrap(), StrategyName::AltSpelling);
        assert!("rhymes".parse::<StrategyName>().is_err());
    }

    #[test]
    fn test_tld_entry_json() {
        let entry: TldEntry = serde_json::from_str(r#"{"tld":"us","type":"ccTLD"}"#).unwrap();
        assert_eq!(entry, TldEntry::new("us", TldType::CcTld));
        let out = serde_json::to_string(&TldEntry::new("museum", TldType::STld)).unwrap();
        assert_eq!(out, r#"{"tld":"museum","type":"sTLD"}"#);
    }

    #[test]
    fn test_suggestion_json_omits_single_level_flag() {
        let s = Suggestion::new("delicio", "us", StrategyName::DomainHack, 90);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"domain\":\"delicio.us\""));
        assert!(!json.contains("isMultiLevel"));

        let mut multi = s.clone();
        multi.is_multi_level = true;
        let json = serde_json::to_string(&multi).unwrap();
        assert!(json.contains("\"isMultiLevel\":true"));
    }

    #[test]
    fn test_suggestion_score_clamped() {
        let s = Suggestion::new("a", "io", StrategyName::Prefix, 250);
        assert_eq!(s.score, 100);
        assert_eq!(s.retagged(StrategyName::Suffix, 130).score, 100);
    }
}
