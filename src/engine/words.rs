//! Curated word lists for the affix and wordplay strategies
//!
//! The built-in lists are defaults only; `WordLists` is what the engine reads, and it can be
//! replaced from files.

use std::path::Path;

use crate::error::{FindTheNameError, Result};

/// Words placed in front of the input ("getstream", "mystream")
pub const PREFIXES: &[&str] = &[
    // Calls to action
    "get", "go", "try", "use", "join", "meet", "ask", "buy", "hey", "hi",
    "hello", "say", "make", "let",
    // Possessive & article
    "my", "the", "we", "our", "your", "all",
    // Tech & brand style
    "i", "e", "x", "re", "un", "co", "up", "on", "pro", "neo",
    "super", "smart", "top", "best", "one", "via",
];

/// Words placed after the input ("streamly", "streamhub")
pub const SUFFIXES: &[&str] = &[
    // Brandable endings
    "ly", "ify", "fy", "io", "ia", "os", "oo", "zy", "ster", "ful",
    "ish", "er", "ist", "ium", "able", "ing", "ed",
    // Product words
    "app", "hub", "lab", "kit", "hq", "box", "base", "bay", "labs", "works",
    "now", "hero", "verse", "land", "spot", "zone", "nest", "stack", "flow",
    "wise", "craft", "mate", "pal", "go",
];

/// Companion words for wordplay combinations
pub const COMBINERS: &[&str] = &[
    // Motion & energy
    "beam", "bolt", "boost", "burst", "dash", "drift", "flash", "flow", "fly", "glide",
    "jump", "leap", "pulse", "rush", "spark", "spin", "surge", "swift", "zoom", "zip",
    // Places & things
    "base", "bay", "box", "camp", "cove", "den", "dock", "forge", "garden", "grove",
    "harbor", "haven", "hive", "hub", "lab", "land", "nest", "port", "shop", "yard",
    // Nature
    "bloom", "cloud", "leaf", "moon", "ocean", "peak", "river", "rock", "sky", "stone",
    "storm", "sun", "tide", "tree", "wave", "wind",
    // Character
    "bold", "bright", "brave", "clever", "cool", "fresh", "happy", "keen", "lucky", "merry",
    "neat", "prime", "pure", "quick", "smart", "snappy", "sunny", "wise", "zen",
    // Rhyme-friendly tails
    "dream", "team", "cream", "gleam", "scheme", "stream", "seam", "theme",
    "ready", "steady", "buddy", "daddy", "nation", "station", "motion", "potion",
    "ify", "ster", "tastic", "topia", "ville", "verse", "works", "wise",
];

/// The word lists one engine run works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub combiners: Vec<String>,
}

impl WordLists {
    /// Built-in curated lists
    pub fn builtin() -> Self {
        Self {
            prefixes: to_owned_list(PREFIXES),
            suffixes: to_owned_list(SUFFIXES),
            combiners: to_owned_list(COMBINERS),
        }
    }

    /// Replace the prefix list
    pub fn with_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.prefixes = clean_list(prefixes);
        self
    }

    /// Replace the suffix list
    pub fn with_suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.suffixes = clean_list(suffixes);
        self
    }

    /// Replace the combiner list
    pub fn with_combiners(mut self, combiners: Vec<String>) -> Self {
        self.combiners = clean_list(combiners);
        self
    }
}

impl Default for WordLists {
    fn default() -> Self {
        Self::builtin()
    }
}

fn to_owned_list(words: &[&str]) -> Vec<String> {
    clean_list(words.iter().map(|w| w.to_string()).collect())
}

/// Trim, lowercase, keep `[a-z0-9]+` only and drop repeats, preserving order
fn clean_list(words: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    words
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Load a word list from a file: either a JSON array of strings or one word per line
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        FindTheNameError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    let words: Vec<String> = if content.trim_start().starts_with('[') {
        serde_json::from_str(&content).map_err(|e| {
            FindTheNameError::parse(
                format!("{} is not a JSON string array: {}", path.display(), e),
                None,
            )
        })?
    } else {
        content
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_string())
            .collect()
    };

    Ok(clean_list(words))
}
