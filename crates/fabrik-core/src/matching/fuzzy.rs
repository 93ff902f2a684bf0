//! Fuzzy strategy: unweighted mean of several string-similarity metrics.
//!
//! No single metric survives OCR noise on its own - Jaro-Winkler rewards
//! shared prefixes, Levenshtein punishes transpositions, token ratios
//! ignore word order - so the strategy averages them and lets the threshold
//! do the judging.

use strsim::{jaro_winkler, normalized_levenshtein, sorensen_dice};

use super::{Candidate, Query};
use crate::models::CatalogIndex;

pub(super) fn best(query: &Query, index: &CatalogIndex) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (pos, ie) in index.indexed().iter().enumerate() {
        let score = similarity(&query.normalized, &ie.normalized);
        if score > 0.0 && best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(Candidate { pos, score });
        }
    }

    best
}

/// Mean of six similarity metrics, scaled 0-100.
pub(super) fn similarity(a: &str, b: &str) -> f64 {
    let metrics = [
        normalized_levenshtein(a, b) * 100.0,
        jaro_winkler(a, b) * 100.0,
        sorensen_dice(a, b) * 100.0,
        partial_ratio(a, b),
        token_sort_ratio(a, b),
        token_set_ratio(a, b),
    ];
    metrics.iter().sum::<f64>() / metrics.len() as f64
}

fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b) * 100.0
}

/// Best ratio of the shorter string against every same-length window of
/// the longer one.
fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_len = short.chars().count();
    if short_len == 0 {
        return 0.0;
    }

    let long_chars: Vec<char> = long.chars().collect();
    let mut best = 0.0f64;
    for window in long_chars.windows(short_len) {
        let window: String = window.iter().collect();
        best = best.max(ratio(short, &window));
    }
    best
}

/// Ratio over alphabetically sorted tokens, neutralizing word order.
fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Ratio over the shared-token core versus each side's full token set.
fn token_set_ratio(a: &str, b: &str) -> f64 {
    let ta: Vec<&str> = a.split_whitespace().collect();
    let tb: Vec<&str> = b.split_whitespace().collect();

    let mut common: Vec<&str> = ta.iter().filter(|t| tb.contains(t)).copied().collect();
    common.sort_unstable();
    common.dedup();

    let mut only_a: Vec<&str> = ta.iter().filter(|t| !common.contains(t)).copied().collect();
    only_a.sort_unstable();
    only_a.dedup();
    let mut only_b: Vec<&str> = tb.iter().filter(|t| !common.contains(t)).copied().collect();
    only_b.sort_unstable();
    only_b.dedup();

    let base = common.join(" ");
    let with_a = join_nonempty(&base, &only_a.join(" "));
    let with_b = join_nonempty(&base, &only_b.join(" "));

    ratio(&base, &with_a)
        .max(ratio(&base, &with_b))
        .max(ratio(&with_a, &with_b))
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join_nonempty(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (false, false) => format!("{a} {b}"),
        (true, _) => b.to_string(),
        (_, true) => a.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_100() {
        assert!((similarity("cassia - 101", "cassia - 101") - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_typo_scores_high() {
        // OCR dropped one letter
        assert!(similarity("casia - 101", "cassia - 101") > 85.0);
    }

    #[test]
    fn test_unrelated_names_score_low() {
        assert!(similarity("new royal", "lucca plain ivory") < 50.0);
    }

    #[test]
    fn test_token_metrics_neutralize_word_order() {
        assert_eq!(token_sort_ratio("royal new", "new royal"), 100.0);
        assert_eq!(token_set_ratio("royal new", "new royal"), 100.0);
        // The character-level metrics still drag the mean down
        let s = similarity("royal new", "new royal");
        assert!(s > 60.0, "got {s}");
    }
}
