//! Substring / token-overlap strategy.

use std::collections::HashSet;

use super::{Candidate, Query};
use crate::models::CatalogIndex;
use crate::normalize::STOP_TOKENS;

pub(super) fn best(query: &Query, index: &CatalogIndex) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (pos, ie) in index.indexed().iter().enumerate() {
        let mut score: f64 = 0.0;

        // Whole-string containment in either direction
        if !query.normalized.is_empty()
            && (ie.normalized.contains(&query.normalized)
                || query.normalized.contains(&ie.normalized))
        {
            let coverage = query.normalized.len().min(ie.normalized.len()) as f64
                / query.normalized.len().max(ie.normalized.len()) as f64;
            score = (80.0 + coverage * 20.0).min(95.0);
        }

        // Token overlap with stop tokens removed
        let db_tokens: HashSet<&str> = ie
            .tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !STOP_TOKENS.contains(t))
            .collect();

        if !query.tokens.is_empty() && !db_tokens.is_empty() {
            let overlap = query
                .tokens
                .iter()
                .filter(|t| db_tokens.contains(t.as_str()))
                .count();
            if overlap > 0 {
                let union = query.tokens.len() + db_tokens.len() - overlap;
                let token_score = overlap as f64 / union as f64 * 90.0;
                score = score.max(token_score);
            }
        }

        if score > 0.0 && best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(Candidate { pos, score });
        }
    }

    best
}
