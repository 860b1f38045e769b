//! WordPlay strategy: the word joined with combiner words, favouring alliteration and rhyme

use super::scoring::{clamp_score, normalize, sort_by_score};
use super::EngineConfig;
use crate::tld::{PopularTlds, TldCatalog};
use crate::types::{StrategyName, Suggestion};

const MAX_RESULTS: usize = 100;

/// How a combiner relates to the input word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combination {
    /// Same first letter ("stream" + "spark")
    Alliterative,
    /// Same ending ("stream" + "dream")
    Rhyming,
    Regular,
}

impl Combination {
    /// Combinations emitted per direction
    fn per_direction_cap(self) -> usize {
        match self {
            Combination::Alliterative => 50,
            Combination::Rhyming => 30,
            Combination::Regular => 20,
        }
    }

    fn bonus(self) -> u32 {
        match self {
            Combination::Alliterative => 10,
            Combination::Rhyming => 5,
            Combination::Regular => 0,
        }
    }
}

/// Last three characters, or last two for shorter strings
fn rhyme_tail(s: &str) -> &str {
    let n = if s.chars().count() >= 3 { 3 } else { 2 };
    let start = s.char_indices().rev().nth(n - 1).map_or(0, |(i, _)| i);
    &s[start..]
}

/// Classify `combiner` against `word`; `None` when they are the same word
pub fn classify(word: &str, combiner: &str) -> Option<Combination> {
    if word == combiner {
        return None;
    }
    if word.chars().next().is_some() && word.chars().next() == combiner.chars().next() {
        Some(Combination::Alliterative)
    } else if rhyme_tail(word) == rhyme_tail(combiner) {
        Some(Combination::Rhyming)
    } else {
        Some(Combination::Regular)
    }
}

/// Combiners grouped by class; regular ones shortest first
pub fn partition_combiners<'a>(word: &str, combiners: &'a [String]) -> [(Combination, Vec<&'a str>); 3] {
    let mut alliterative = Vec::new();
    let mut rhyming = Vec::new();
    let mut regular = Vec::new();

    for combiner in combiners {
        match classify(word, combiner) {
            Some(Combination::Alliterative) => alliterative.push(combiner.as_str()),
            Some(Combination::Rhyming) => rhyming.push(combiner.as_str()),
            Some(Combination::Regular) => regular.push(combiner.as_str()),
            None => {}
        }
    }
    regular.sort_by_key(|w| w.len());

    [
        (Combination::Alliterative, alliterative),
        (Combination::Rhyming, rhyming),
        (Combination::Regular, regular),
    ]
}

fn score_combo(combo: &str, tld: &str, kind: Combination, popular: &PopularTlds) -> u8 {
    let mut score: u32 = 35 + kind.bonus();
    if popular.contains(tld) {
        score += 5;
    }
    if combo.len() <= 8 {
        score += 5;
    } else if combo.len() <= 12 {
        score += 2;
    }
    clamp_score(score)
}

/// WordPlay strategy
pub fn find_word_play_suggestions(input: &str, _catalog: &TldCatalog, config: &EngineConfig) -> Vec<Suggestion> {
    let word = normalize(input);
    if word.len() < 2 {
        return Vec::new();
    }

    let popular = &config.popular;
    let mut results = Vec::new();

    for (kind, combiners) in partition_combiners(&word, &config.words.combiners) {
        let cap = kind.per_direction_cap();
        let after = combiners.iter().take(cap).map(|c| format!("{}{}", word, c));
        let before = combiners.iter().take(cap).map(|c| format!("{}{}", c, word));

        for combo in after.chain(before) {
            for tld in popular.iter() {
                let score = score_combo(&combo, tld, kind, popular);
                results.push(Suggestion::new(combo.as_str(), tld, StrategyName::WordPlay, score));
            }
        }
    }

    sort_by_score(&mut results);
    results.truncate(MAX_RESULTS);
    results
}
