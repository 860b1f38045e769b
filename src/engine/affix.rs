//! Prefix and suffix strategies: glue a curated word onto the input, then look for hacks

use super::hack::detect_single_level;
use super::scoring::{clamp_score, normalize, scale_score};
use super::EngineConfig;
use crate::tld::{PopularTlds, TldCatalog};
use crate::types::{StrategyName, Suggestion};

const AFFIX_HACK_FACTOR: f64 = 0.9;
const MIN_SCORE: u8 = 10;

/// Suffixes that read as product names on their own
const PRODUCT_SUFFIXES: &[&str] = &["app", "hub", "lab", "kit", "hq"];

/// Where the affix goes relative to the word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Before,
    After,
}

impl Placement {
    fn strategy(self) -> StrategyName {
        match self {
            Placement::Before => StrategyName::Prefix,
            Placement::After => StrategyName::Suffix,
        }
    }

    fn combine(self, affix: &str, word: &str) -> String {
        match self {
            Placement::Before => format!("{}{}", affix, word),
            Placement::After => format!("{}{}", word, affix),
        }
    }
}

/// Prefix strategy ("getstream.com", "mystre.am")
pub fn find_prefix_suggestions(input: &str, catalog: &TldCatalog, config: &EngineConfig) -> Vec<Suggestion> {
    find_affix_suggestions(input, catalog, config, &config.words.prefixes, Placement::Before)
}

/// Suffix strategy ("streamly.com", "streamhub.io")
pub fn find_suffix_suggestions(input: &str, catalog: &TldCatalog, config: &EngineConfig) -> Vec<Suggestion> {
    find_affix_suggestions(input, catalog, config, &config.words.suffixes, Placement::After)
}

fn find_affix_suggestions(
    input: &str,
    catalog: &TldCatalog,
    config: &EngineConfig,
    affixes: &[String],
    placement: Placement,
) -> Vec<Suggestion> {
    let word = normalize(input);
    if word.is_empty() {
        return Vec::new();
    }

    let strategy = placement.strategy();
    let mut results = Vec::new();

    for affix in affixes {
        let combined = placement.combine(affix, &word);

        for hack in detect_single_level(&combined, catalog, &config.popular) {
            let score = scale_score(hack.score, AFFIX_HACK_FACTOR, MIN_SCORE);
            results.push(hack.retagged(strategy, score));
        }

        for tld in config.popular.iter() {
            // already covered by the hack above
            if combined.ends_with(tld) {
                continue;
            }
            let score = score_affix(affix, &combined, tld, &config.popular, placement);
            results.push(Suggestion::new(combined.as_str(), tld, strategy, score));
        }
    }

    results
}

fn score_affix(
    affix: &str,
    combined: &str,
    tld: &str,
    popular: &PopularTlds,
    placement: Placement,
) -> u8 {
    let mut score: u32 = 30;

    if combined.len() <= 6 {
        score += 20;
    } else if combined.len() <= 10 {
        score += 10;
    }

    if popular.contains(tld) {
        score += 10;
    }

    if affix.len() <= 3 {
        score += 10;
    }

    if placement == Placement::After && PRODUCT_SUFFIXES.contains(&affix) {
        score += 5;
    }

    match tld {
        "com" => score += 10,
        "io" | "dev" | "app" => score += 5,
        _ => {}
    }

    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::words::WordLists;

    fn config_with(prefixes: &[&str], suffixes: &[&str]) -> EngineConfig {
        let words = WordLists::builtin()
            .with_prefixes(prefixes.iter().map(|s| s.to_string()).collect())
            .with_suffixes(suffixes.iter().map(|s| s.to_string()).collect());
        EngineConfig {
            words,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_prefix_direct_pairs() {
        let catalog = TldCatalog::from_tlds(["com", "io", "am"]).unwrap();
        let config = config_with(&["go"], &[]);
        let results = find_prefix_suggestions("Stream", &catalog, &config);

        let getcom = results.iter().find(|s| s.domain == "gostream.com").unwrap();
        // 30 + 10 (len 8) + 10 popular + 10 short affix + 10 com
        assert_eq!(getcom.score, 70);
        assert_eq!(getcom.prefix, "gostream");
        assert_eq!(getcom.strategy, StrategyName::Prefix);

        let io = results.iter().find(|s| s.domain == "gostream.io").unwrap();
        assert_eq!(io.score, 65);
    }

    #[test]
    fn test_prefix_hack_is_discounted_and_not_duplicated() {
        let catalog = TldCatalog::from_tlds(["com", "am"]).unwrap();
        let config = config_with(&["go"], &[]);
        let results = find_prefix_suggestions("stream", &catalog, &config);

        let hack = results.iter().find(|s| s.domain == "gostre.am").unwrap();
        let raw = detect_single_level("gostream", &catalog, &config.popular);
        assert_eq!(hack.score, scale_score(raw[0].score, 0.9, 10));
        assert_eq!(hack.strategy, StrategyName::Prefix);

        // "gostream" ends with "am", so no "gostream.am" direct pairing
        assert!(!results.iter().any(|s| s.domain == "gostream.am"));
    }

    #[test]
    fn test_suffix_product_bonus() {
        let catalog = TldCatalog::from_tlds(["com"]).unwrap();
        let config = config_with(&[], &["hub", "ful"]);
        let results = find_suffix_suggestions("zen", &catalog, &config);

        let hub = results.iter().find(|s| s.domain == "zenhub.com").unwrap();
        // 30 + 20 (len 6) + 10 + 10 + 5 product + 10 com = 85
        assert_eq!(hub.score, 85);
        let ful = results.iter().find(|s| s.domain == "zenful.com").unwrap();
        assert_eq!(ful.score, 80);
        assert_eq!(ful.strategy, StrategyName::Suffix);
    }

    #[test]
    fn test_long_combination_scores() {
        let popular = PopularTlds::default();
        // 30 + 0 (len > 10) + 10 popular + 0 long affix + 0
        assert_eq!(score_affix("super", "superextralongword", "ly", &popular, Placement::Before), 40);
        // non-popular TLD
        assert_eq!(score_affix("go", "gox", "zz", &popular, Placement::Before), 60);
    }

    #[test]
    fn test_empty_input() {
        let catalog = TldCatalog::builtin().unwrap();
        let config = EngineConfig::default();
        assert!(find_prefix_suggestions("", &catalog, &config).is_empty());
        assert!(find_suffix_suggestions("???", &catalog, &config).is_empty());
    }

    #[test]
    fn test_scores_in_range() {
        let catalog = TldCatalog::builtin().unwrap();
        let config = EngineConfig::default();
        for s in find_suffix_suggestions("focus", &catalog, &config) {
            assert!(s.score <= 100);
            assert!(s.domain.ends_with(&format!(".{}", s.tld)));
        }
    }
}
