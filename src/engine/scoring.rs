//! Normalization, heuristic scoring, dedup and capping shared by every strategy

use std::collections::HashMap;

use crate::tld::PopularTlds;
use crate::types::Suggestion;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Default aggregator cap
pub const DEFAULT_MAX_RESULTS: usize = 500;

/// Lowercase and drop everything outside `[a-z0-9]`
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .flat_map(|c| c.to_lowercase())
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn has_vowel(s: &str) -> bool {
    s.chars().any(is_vowel)
}

/// Whether `prefix.tld` reads naturally across the dot.
///
/// A repeated character across the junction is never clean; a vowel/consonant switch always is;
/// two of the same class pass only for short words.
pub fn is_clean_boundary(prefix: &str, tld: &str, full: &str) -> bool {
    let (Some(last), Some(first)) = (prefix.chars().last(), tld.chars().next()) else {
        return false;
    };
    if last == first {
        return false;
    }
    if is_vowel(last) != is_vowel(first) {
        return true;
    }
    full.chars().count() <= 12
}

/// Score a `prefix.tld` split of `full_word`, 0..=100
pub fn score_domain_hack(prefix: &str, tld: &str, full_word: &str, popular: &PopularTlds) -> u8 {
    let mut score: u32 = 50;

    if is_clean_boundary(prefix, tld, full_word) {
        score += 30;
    }

    let prefix_len = prefix.chars().count();
    if has_vowel(prefix) || prefix_len <= 2 {
        score += 20;
    }

    if popular.contains(tld) {
        score += 10;
    }

    if prefix_len <= 4 {
        score += 10;
    } else if prefix_len <= 6 {
        score += 5;
    }

    clamp_score(score)
}

/// Scale a score by `factor`, rounding half up, never below `floor`
pub fn scale_score(score: u8, factor: f64, floor: u8) -> u8 {
    let scaled = (f64::from(score) * factor).round() as u32;
    clamp_score(scaled.max(u32::from(floor)))
}

pub(crate) fn clamp_score(score: u32) -> u8 {
    score.min(100) as u8
}

/// Merge records sharing a domain, keeping the highest score.
///
/// Ties keep the record seen first; output follows first-seen key order.
pub fn deduplicate(suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    let mut index: HashMap<String, usize> = HashMap::with_capacity(suggestions.len());
    let mut unique: Vec<Suggestion> = Vec::with_capacity(suggestions.len());

    for suggestion in suggestions {
        match index.get(suggestion.key()) {
            Some(&i) => {
                if suggestion.score > unique[i].score {
                    unique[i] = suggestion;
                }
            }
            None => {
                index.insert(suggestion.key().to_string(), unique.len());
                unique.push(suggestion);
            }
        }
    }

    unique
}

/// Stable sort by descending score
pub fn sort_by_score(suggestions: &mut [Suggestion]) {
    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Best `max` suggestions, highest score first
pub fn cap(mut suggestions: Vec<Suggestion>, max: usize) -> Vec<Suggestion> {
    sort_by_score(&mut suggestions);
    suggestions.truncate(max);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StrategyName;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Hello, World!"), "helloworld");
        assert_eq!(normalize("  Web-3 Stack_"), "web3stack");
        assert_eq!(normalize("Ünïcode ✓"), "ncode");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["Delicious", "café au lait", "ABC-123_x", "İstanbul", "ß"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
            assert!(once.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_has_vowel() {
        assert!(has_vowel("stre"));
        assert!(!has_vowel("strm"));
        assert!(!has_vowel(""));
    }

    #[test]
    fn test_clean_boundary() {
        assert!(!is_clean_boundary("", "us", "us"));
        // repeated character across the dot
        assert!(!is_clean_boundary("bus", "ss", "busss"));
        // consonant -> vowel
        assert!(is_clean_boundary("foc", "us", "focus"));
        assert!(is_clean_boundary("stre", "am", "stream"));
        // both vowels, short word
        assert!(is_clean_boundary("delicio", "us", "delicious"));
        // both consonants, long word
        assert!(!is_clean_boundary("abcdefghijkl", "mn", "abcdefghijklmn"));
        assert!(is_clean_boundary("abcdefghij", "mn", "abcdefghijmn"));
    }

    #[test]
    fn test_score_domain_hack() {
        let popular = PopularTlds::default();
        // 50 + 30 clean + 20 vowel + 10 popular + 10 short
        assert_eq!(score_domain_hack("stre", "am", "stream", &popular), 100);
        // 50 + 30 + 20 + 10 popular, prefix of 7 gets no length bonus
        assert_eq!(score_domain_hack("delicio", "us", "delicious", &popular), 100);
        // 50 + 0 (repeat) + 0 (no vowel, len 3) + 0 + 10
        assert_eq!(score_domain_hack("brr", "rs", "brrrs", &popular), 60);
        // 50 + 30 + 20 (len <= 2) + 0 + 10
        assert_eq!(score_domain_hack("st", "re", "stre", &popular), 100);
        assert_eq!(score_domain_hack("xyzzyx", "cc", "xyzzyxcc", &popular), 50 + 30 + 5);
    }

    #[test]
    fn test_scale_score() {
        assert_eq!(scale_score(100, 0.9, 10), 90);
        assert_eq!(scale_score(85, 0.85, 10), 72);
        assert_eq!(scale_score(5, 0.9, 10), 10);
    }

    #[test]
    fn test_deduplicate_keeps_highest() {
        let input = vec![
            Suggestion::new("stre", "am", StrategyName::Prefix, 70),
            Suggestion::new("delicio", "us", StrategyName::DomainHack, 90),
            Suggestion::new("stre", "am", StrategyName::DomainHack, 95),
            Suggestion::new("stre", "am", StrategyName::Suffix, 95),
        ];
        let out = deduplicate(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].domain, "stre.am");
        assert_eq!(out[0].score, 95);
        assert_eq!(out[0].strategy, StrategyName::DomainHack);
        assert_eq!(out[1].domain, "delicio.us");
    }

    #[test]
    fn test_deduplicate_keeps_distinct_multi_level() {
        let mut a = Suggestion::new("st", "re", StrategyName::DomainHack, 80);
        a.domain = "st.re.am".to_string();
        a.tld = "am".to_string();
        a.is_multi_level = true;
        let mut b = a.clone();
        b.domain = "st.re.am.us".to_string();
        b.tld = "us".to_string();
        let out = deduplicate(vec![a, b]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_cap() {
        let input: Vec<Suggestion> = (0..20u8)
            .map(|i| Suggestion::new(format!("w{}", i), "com", StrategyName::Prefix, i * 5))
            .collect();
        let out = cap(input, 5);
        assert_eq!(out.len(), 5);
        let scores: Vec<u8> = out.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![95, 90, 85, 80, 75]);

        assert!(cap(Vec::new(), 5).is_empty());
        assert_eq!(cap(vec![Suggestion::new("a", "io", StrategyName::Prefix, 1)], 0).len(), 0);
    }
}
