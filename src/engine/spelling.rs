//! Alternate-spelling strategy: phonetic substitutions ("phone" -> "fone")

use std::collections::HashSet;

use super::hack::detect_single_level;
use super::scoring::{clamp_score, normalize, sort_by_score};
use super::EngineConfig;
use crate::tld::{PopularTlds, TldCatalog};
use crate::types::{StrategyName, Suggestion};

const MAX_RESULTS: usize = 100;

/// (from, to) pairs, applied in order
pub const SUBSTITUTION_RULES: &[(&str, &str)] = &[
    ("ph", "f"),
    ("f", "ph"),
    ("y", "i"),
    ("i", "y"),
    ("c", "k"),
    ("s", "z"),
    ("z", "s"),
    ("cks", "x"),
    ("ck", "k"),
    ("oo", "u"),
    ("ee", "i"),
    ("ight", "ite"),
    ("ite", "ight"),
];

/// One variant per rule match, with exactly that occurrence replaced.
///
/// Matches of a rule never overlap; variants keep first-generated order.
pub fn spelling_variants(word: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut variants = Vec::new();

    for (from, to) in SUBSTITUTION_RULES {
        for (pos, _) in word.match_indices(from) {
            let variant = format!("{}{}{}", &word[..pos], to, &word[pos + from.len()..]);
            if variant != word && variant.len() >= 2 && seen.insert(variant.clone()) {
                variants.push(variant);
            }
        }
    }

    variants
}

fn score_variant(variant: &str, tld: &str, is_hack: bool, popular: &PopularTlds) -> u8 {
    let mut score: u32 = 40;
    if popular.contains(tld) {
        score += 5;
    }
    if is_hack {
        score += 10;
    }
    if variant.len() <= 6 {
        score += 5;
    } else if variant.len() <= 10 {
        score += 2;
    }
    clamp_score(score)
}

/// Alternate-spelling strategy
pub fn find_alt_spelling_suggestions(input: &str, catalog: &TldCatalog, config: &EngineConfig) -> Vec<Suggestion> {
    let word = normalize(input);
    if word.len() < 2 {
        return Vec::new();
    }

    let popular = &config.popular;
    let mut results = Vec::new();

    for variant in spelling_variants(&word) {
        for tld in popular.iter() {
            let score = score_variant(&variant, tld, false, popular);
            results.push(Suggestion::new(variant.as_str(), tld, StrategyName::AltSpelling, score));
        }

        for hack in detect_single_level(&variant, catalog, popular) {
            let score = score_variant(&hack.prefix, &hack.tld, true, popular);
            results.push(hack.retagged(StrategyName::AltSpelling, score));
        }
    }

    sort_by_score(&mut results);
    results.truncate(MAX_RESULTS);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_substitutions() {
        let variants = spelling_variants("phone");
        assert_eq!(variants, vec!["fone"]);

        let variants = spelling_variants("fly");
        assert_eq!(variants, vec!["phly", "fli"]);
    }

    #[test]
    fn test_each_occurrence_separately() {
        let variants = spelling_variants("sass");
        // s -> z at each non-overlapping position
        assert!(variants.contains(&"zass".to_string()));
        assert!(variants.contains(&"sazs".to_string()));
        assert!(variants.contains(&"sasz".to_string()));
        assert!(!variants.contains(&"zazz".to_string()));
    }

    #[test]
    fn test_non_overlapping_matches() {
        let variants = spelling_variants("ooo");
        assert_eq!(variants, vec!["uo"]);
    }

    #[test]
    fn test_multi_char_rules() {
        let variants = spelling_variants("night");
        assert!(variants.contains(&"nite".to_string()));
        assert!(variants.contains(&"nyght".to_string()));

        let variants = spelling_variants("socks");
        assert!(variants.contains(&"sox".to_string()));
        assert!(variants.contains(&"soks".to_string()));
    }

    #[test]
    fn test_no_rules_apply() {
        assert!(spelling_variants("tram").is_empty());
        let catalog = TldCatalog::builtin().unwrap();
        let config = EngineConfig::default();
        assert!(find_alt_spelling_suggestions("tram", &catalog, &config).is_empty());
    }

    #[test]
    fn test_capped_at_one_hundred() {
        let catalog = TldCatalog::builtin().unwrap();
        let config = EngineConfig::default();
        let variants = spelling_variants("physics");
        assert_eq!(variants, vec!["fysics", "phisics", "physycs", "physiks", "phyzics", "physicz"]);
        assert!(variants.len() * config.popular.len() > 100);

        let results = find_alt_spelling_suggestions("physics", &catalog, &config);
        assert_eq!(results.len(), 100);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_find_alt_spelling_suggestions() {
        let catalog = TldCatalog::builtin().unwrap();
        let config = EngineConfig::default();
        let results = find_alt_spelling_suggestions("Focus", &catalog, &config);

        assert!(results.len() <= 100);
        assert!(results.iter().all(|s| s.strategy == StrategyName::AltSpelling));
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));

        // c -> k
        let kom = results.iter().find(|s| s.domain == "fokus.com").unwrap();
        // 40 + 5 popular + 5 short
        assert_eq!(kom.score, 50);
        // hack on a variant: "phocus" -> "phoc.us"
        let hack = results.iter().find(|s| s.domain == "phoc.us").unwrap();
        // 40 + 5 + 10 hack + 5
        assert_eq!(hack.score, 60);
    }
}
