//! Abbreviation strategy: shortened forms of the word paired with TLDs

use std::collections::HashSet;

use super::hack::detect_single_level;
use super::scoring::{clamp_score, is_vowel, normalize, sort_by_score};
use super::EngineConfig;
use crate::tld::{PopularTlds, TldCatalog};
use crate::types::{StrategyName, Suggestion};

const TRUNCATE_LENGTHS: [usize; 4] = [3, 4, 5, 6];
const MAX_RESULTS: usize = 100;

/// First character kept, remaining vowels dropped ("stream" -> "strm")
pub fn drop_vowels(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => std::iter::once(first)
            .chain(chars.filter(|c| !is_vowel(*c)))
            .collect(),
        None => String::new(),
    }
}

/// Leading plus trailing consonant run ("stream" -> "strm", "rhythm" -> "rhythm").
///
/// Returns an empty string when the combination is shorter than two characters.
pub fn consonant_cluster(word: &str) -> String {
    let leading: String = word.chars().take_while(|c| !is_vowel(*c)).collect();
    let trailing_rev: Vec<char> = word.chars().rev().take_while(|c| !is_vowel(*c)).collect();
    let trailing: String = trailing_rev.into_iter().rev().collect();

    if leading == trailing {
        return leading;
    }
    let combined = format!("{}{}", leading, trailing);
    if combined.len() >= 2 {
        combined
    } else {
        String::new()
    }
}

/// First letter of each word when the raw input has two or more words
pub fn initials(input: &str) -> String {
    let words: Vec<&str> = input
        .trim()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .collect();
    if words.len() < 2 {
        return String::new();
    }
    let raw: String = words.iter().filter_map(|w| w.chars().next()).collect();
    normalize(&raw)
}

fn score_abbreviation(abbrev: &str, tld: &str, is_hack: bool, popular: &PopularTlds) -> u8 {
    let mut score: u32 = 40;
    if popular.contains(tld) {
        score += 5;
    }
    if is_hack {
        score += 10;
    }
    if abbrev.len() <= 4 {
        score += 10;
    } else if abbrev.len() <= 6 {
        score += 5;
    }
    clamp_score(score)
}

/// Candidate abbreviations in generation order, each at most once
pub fn abbreviations(input: &str) -> Vec<String> {
    let word = normalize(input);
    if word.len() < 2 {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut accept = |abbrev: String| {
        if abbrev.len() >= 2 && abbrev != word && seen.insert(abbrev.clone()) {
            out.push(abbrev);
        }
    };

    accept(drop_vowels(&word));
    for n in TRUNCATE_LENGTHS {
        if n < word.len() {
            accept(word[..n].to_string());
        }
    }
    accept(initials(input));
    accept(consonant_cluster(&word));

    out
}

/// Abbreviation strategy
pub fn find_abbreviation_suggestions(input: &str, catalog: &TldCatalog, config: &EngineConfig) -> Vec<Suggestion> {
    let popular = &config.popular;
    let mut results = Vec::new();

    for abbrev in abbreviations(input) {
        for tld in popular.iter() {
            let score = score_abbreviation(&abbrev, tld, false, popular);
            results.push(Suggestion::new(abbrev.as_str(), tld, StrategyName::Abbreviation, score));
        }

        for hack in detect_single_level(&abbrev, catalog, popular) {
            let score = score_abbreviation(&hack.prefix, &hack.tld, true, popular);
            results.push(hack.retagged(StrategyName::Abbreviation, score));
        }
    }

    sort_by_score(&mut results);
    results.truncate(MAX_RESULTS);
    results
}
