//! TLD catalog: classification, lookup-by-length index and membership

mod builtin;
pub mod source;

pub use builtin::BUILTIN_TLDS;
pub use source::{
    load_catalog, parse_iana_listing, save_entries, BuiltinSource, JsonFileSource, TldSource,
    IANA_TLD_URL,
};
#[cfg(feature = "iana")]
pub use source::IanaSource;

use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{FindTheNameError, Result};
use crate::types::{TldEntry, TldType};
use crate::validation_error;

/// Sponsored TLDs; everything else is classified by length
pub const SPONSORED_TLDS: &[&str] = &[
    "aero", "asia", "cat", "coop", "edu", "gov", "int", "jobs",
    "mil", "museum", "post", "tel", "travel", "xxx",
];

/// Widely recognized TLDs, in pairing order
pub const DEFAULT_POPULAR_TLDS: &[&str] = &[
    "com", "io", "ly", "co", "me", "us", "am", "to", "is",
    "dev", "app", "ai", "net", "org", "so", "it", "do",
];

/// Classify a raw TLD string
pub fn classify_tld(tld: &str) -> TldType {
    if SPONSORED_TLDS.contains(&tld) {
        TldType::STld
    } else if tld.len() == 2 {
        TldType::CcTld
    } else {
        TldType::GTld
    }
}

/// Ordered set of popular TLDs used for pairing and score bonuses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularTlds {
    ordered: Vec<String>,
    set: HashSet<String>,
}

impl PopularTlds {
    /// Build from any list; duplicates after the first occurrence are dropped
    pub fn new<I, S>(tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut set = HashSet::new();
        for tld in tlds {
            let tld = tld.into().trim().to_lowercase();
            if !tld.is_empty() && set.insert(tld.clone()) {
                ordered.push(tld);
            }
        }
        Self { ordered, set }
    }

    pub fn contains(&self, tld: &str) -> bool {
        self.set.contains(tld)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl Default for PopularTlds {
    fn default() -> Self {
        Self::new(DEFAULT_POPULAR_TLDS.iter().copied())
    }
}

/// Read-only view over a TLD list.
///
/// `by_length` keeps the source order inside each length bucket; `membership` maps every TLD to
/// its type. Both are built once and never touched again.
#[derive(Debug, Clone)]
pub struct TldCatalog {
    entries: Vec<TldEntry>,
    by_length: BTreeMap<usize, Vec<String>>,
    membership: HashMap<String, TldType>,
}

impl TldCatalog {
    /// Build a catalog, rejecting anything that is not lowercase ASCII letters
    pub fn new(entries: Vec<TldEntry>) -> Result<Self> {
        let tld_regex = Regex::new(r"^[a-z]+$")
            .map_err(|e| FindTheNameError::internal(e.to_string()))?;

        let mut kept = Vec::with_capacity(entries.len());
        let mut by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        let mut membership = HashMap::with_capacity(entries.len());

        for entry in entries {
            if !tld_regex.is_match(&entry.tld) {
                return Err(validation_error!("Invalid TLD '{}': expected lowercase ASCII letters", entry.tld));
            }
            if membership.contains_key(&entry.tld) {
                continue;
            }
            membership.insert(entry.tld.clone(), entry.tld_type);
            by_length
                .entry(entry.tld.len())
                .or_default()
                .push(entry.tld.clone());
            kept.push(entry);
        }

        Ok(Self {
            entries: kept,
            by_length,
            membership,
        })
    }

    /// Build from bare TLD strings, classifying each one
    pub fn from_tlds<I, S>(tlds: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = tlds
            .into_iter()
            .map(|t| {
                let tld = t.as_ref().trim().to_lowercase();
                let tld_type = classify_tld(&tld);
                TldEntry::new(tld, tld_type)
            })
            .collect();
        Self::new(entries)
    }

    /// Catalog over the compiled-in IANA list
    pub fn builtin() -> Result<Self> {
        Self::from_tlds(BUILTIN_TLDS.iter())
    }

    pub fn contains(&self, tld: &str) -> bool {
        self.membership.contains_key(tld)
    }

    pub fn tld_type(&self, tld: &str) -> Option<TldType> {
        self.membership.get(tld).copied()
    }

    /// Distinct TLD lengths, longest first
    pub fn lengths_desc(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_length.keys().rev().copied()
    }

    /// TLDs of exactly `len` characters, in source order
    pub fn with_length(&self, len: usize) -> &[String] {
        self.by_length.get(&len).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn entries(&self) -> &[TldEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count of entries per type, in ccTLD/gTLD/sTLD order
    pub fn type_counts(&self) -> [(TldType, usize); 3] {
        TldType::ALL.map(|t| (t, self.entries.iter().filter(|e| e.tld_type == t).count()))
    }
}
