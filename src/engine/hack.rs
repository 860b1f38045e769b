//! Domain-hack detection: words whose tail is itself a TLD ("delicio.us")
//!
//! Multi-level hacks recurse into the part left of the dot ("st.re.am"). Recursion carries an
//! explicit depth and stops at `max_depth`, so a hostile catalog cannot blow the stack.

use super::scoring::{normalize, scale_score, score_domain_hack};
use super::EngineConfig;
use crate::tld::{PopularTlds, TldCatalog};
use crate::types::{StrategyName, Suggestion};

/// Default recursion cap for multi-level hacks
pub const MAX_HACK_DEPTH: usize = 3;

const MULTI_LEVEL_FACTOR: f64 = 0.85;
const MIN_SCORE: u8 = 10;

/// Every `prefix.tld` split of `word` where the tail is a catalog TLD.
///
/// TLD lengths are tried longest first. The prefix is never empty.
pub fn detect_single_level(word: &str, catalog: &TldCatalog, popular: &PopularTlds) -> Vec<Suggestion> {
    let word_len = word.len();

    catalog
        .lengths_desc()
        .filter(|&len| len < word_len)
        .filter_map(|len| {
            let split = word_len - len;
            if !word.is_char_boundary(split) {
                return None;
            }
            let (prefix, suffix) = word.split_at(split);
            catalog.contains(suffix).then(|| {
                let score = score_domain_hack(prefix, suffix, word, popular);
                Suggestion::new(prefix, suffix, StrategyName::DomainHack, score)
            })
        })
        .collect()
}

/// Hacks spanning two or more TLD labels ("st.re.am")
pub fn detect_multi_level(
    word: &str,
    catalog: &TldCatalog,
    popular: &PopularTlds,
    max_depth: usize,
) -> Vec<Suggestion> {
    hacks_from(word, catalog, popular, 0, max_depth)
        .into_iter()
        .filter(|s| s.is_multi_level)
        .collect()
}

/// Single-level hacks of `word` followed by everything nested inside their prefixes.
fn hacks_from(
    word: &str,
    catalog: &TldCatalog,
    popular: &PopularTlds,
    depth: usize,
    max_depth: usize,
) -> Vec<Suggestion> {
    let singles = detect_single_level(word, catalog, popular);
    if depth >= max_depth {
        return singles;
    }

    let mut nested = Vec::new();
    for outer in &singles {
        if outer.prefix.len() < 2 {
            continue;
        }
        for inner in hacks_from(&outer.prefix, catalog, popular, depth + 1, max_depth) {
            nested.push(splice(&inner, &outer.tld));
        }
    }

    let mut out = singles;
    out.extend(nested);
    out
}

/// Append `outer_tld` as a new final label
fn splice(inner: &Suggestion, outer_tld: &str) -> Suggestion {
    Suggestion {
        domain: format!("{}.{}", inner.domain, outer_tld),
        tld: outer_tld.to_string(),
        prefix: inner.prefix.clone(),
        strategy: StrategyName::DomainHack,
        score: scale_score(inner.score, MULTI_LEVEL_FACTOR, MIN_SCORE),
        is_multi_level: true,
    }
}

/// Domain-hack strategy: single-level hits first, then multi-level ones. No dedup here.
pub fn find_domain_hacks(input: &str, catalog: &TldCatalog, config: &EngineConfig) -> Vec<Suggestion> {
    let word = normalize(input);
    if word.len() < 2 {
        return Vec::new();
    }
    hacks_from(&word, catalog, &config.popular, 0, config.max_hack_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> TldCatalog {
        TldCatalog::builtin().unwrap()
    }

    fn domains(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.domain.as_str()).collect()
    }

    #[test]
    fn test_single_level_known_words() {
        let catalog = builtin();
        let popular = PopularTlds::default();

        let hacks = detect_single_level("delicious", &catalog, &popular);
        assert!(domains(&hacks).contains(&"delicio.us"));

        let hacks = detect_single_level("stream", &catalog, &popular);
        assert!(domains(&hacks).contains(&"stre.am"));

        for (word, expected) in [("genius", "geni.us"), ("famous", "famo.us"), ("focus", "foc.us"), ("paris", "par.is")] {
            let hacks = detect_single_level(word, &catalog, &popular);
            assert!(domains(&hacks).contains(&expected), "{} missing {}", word, expected);
        }
    }

    #[test]
    fn test_single_level_no_match() {
        let catalog = builtin();
        let hacks = detect_single_level("cloud", &catalog, &PopularTlds::default());
        assert!(hacks.is_empty());
    }

    #[test]
    fn test_single_level_fields() {
        let catalog = TldCatalog::from_tlds(["us", "ous", "com"]).unwrap();
        let hacks = detect_single_level("famous", &catalog, &PopularTlds::default());
        // longest TLD first
        assert_eq!(domains(&hacks), vec!["fam.ous", "famo.us"]);
        let hack = &hacks[1];
        assert_eq!(hack.prefix, "famo");
        assert_eq!(hack.tld, "us");
        assert_eq!(hack.strategy, StrategyName::DomainHack);
        assert!(!hack.is_multi_level);
    }

    #[test]
    fn test_prefix_never_empty() {
        let catalog = TldCatalog::from_tlds(["us", "am"]).unwrap();
        assert!(detect_single_level("us", &catalog, &PopularTlds::default()).is_empty());
        assert!(detect_single_level("", &catalog, &PopularTlds::default()).is_empty());
    }

    #[test]
    fn test_multi_level_splices_inner_hack() {
        let catalog = TldCatalog::from_tlds(["am", "re"]).unwrap();
        let popular = PopularTlds::default();
        let multi = detect_multi_level("stream", &catalog, &popular, MAX_HACK_DEPTH);
        assert_eq!(multi.len(), 1);

        let hack = &multi[0];
        assert_eq!(hack.domain, "st.re.am");
        assert_eq!(hack.tld, "am");
        assert_eq!(hack.prefix, "st");
        assert!(hack.is_multi_level);

        let inner = detect_single_level("stre", &catalog, &popular);
        let expected = scale_score(inner[0].score, 0.85, 10);
        assert_eq!(hack.score, expected);
    }

    #[test]
    fn test_find_domain_hacks_orders_single_first() {
        let catalog = builtin();
        let config = EngineConfig::default();
        let hacks = find_domain_hacks("Stream!", &catalog, &config);
        assert_eq!(hacks[0].domain, "stre.am");
        let first_multi = hacks.iter().position(|s| s.is_multi_level).unwrap();
        assert!(hacks[..first_multi].iter().all(|s| !s.is_multi_level));
        assert!(hacks[first_multi..].iter().all(|s| s.is_multi_level));
        assert!(domains(&hacks).contains(&"st.re.am"));
    }

    #[test]
    fn test_recursion_is_bounded() {
        let catalog = TldCatalog::from_tlds(["a", "aa", "aaa"]).unwrap();
        let popular = PopularTlds::default();
        let word = "a".repeat(40);

        for max_depth in 0..=MAX_HACK_DEPTH {
            let hacks = hacks_from(&word, &catalog, &popular, 0, max_depth);
            assert!(!hacks.is_empty());
            for hack in &hacks {
                assert!(hack.label_count() <= max_depth + 2);
                assert_eq!(hack.domain.replace('.', ""), word);
                assert!(hack.score >= 10 && hack.score <= 100);
            }
        }

        let none = detect_multi_level(&word, &catalog, &popular, 0);
        assert!(none.is_empty());
    }

    #[test]
    fn test_short_input_is_empty() {
        let catalog = builtin();
        let config = EngineConfig::default();
        assert!(find_domain_hacks("", &catalog, &config).is_empty());
        assert!(find_domain_hacks("a", &catalog, &config).is_empty());
        assert!(find_domain_hacks("!!", &catalog, &config).is_empty());
    }
}
