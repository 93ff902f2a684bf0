//! Prefix-based strategy.
//!
//! Catalog names frequently carry a supplier-code prefix ("A - NEW ROYAL
//! FABRIC") that invoice text never shows. This strategy compares identity
//! forms with the prefix stripped, and token sets with the known supplier
//! prefix tokens removed.

use std::collections::HashSet;

use super::{Candidate, Query};
use crate::models::CatalogIndex;
use crate::normalize::SUPPLIER_PREFIX_TOKENS;

pub(super) fn best(query: &Query, index: &CatalogIndex) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (pos, ie) in index.indexed().iter().enumerate() {
        let mut score: f64 = 0.0;

        // Identity containment with the supplier prefix removed
        if !query.identity.is_empty()
            && !ie.identity.is_empty()
            && (ie.identity.contains(&query.identity) || query.identity.contains(&ie.identity))
        {
            let coverage = query.identity.len().min(ie.identity.len()) as f64
                / query.identity.len().max(ie.identity.len()) as f64;
            score = (85.0 + coverage * 15.0).min(95.0);
        }

        // Significant token overlap once prefix tokens are dropped
        let db_tokens: HashSet<&str> = ie
            .tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !SUPPLIER_PREFIX_TOKENS.contains(t))
            .collect();

        if !query.tokens.is_empty() && !db_tokens.is_empty() {
            let overlap = query
                .tokens
                .iter()
                .filter(|t| db_tokens.contains(t.as_str()))
                .count();
            if overlap >= 2 {
                let union = query.tokens.len() + db_tokens.len() - overlap;
                let token_score = overlap as f64 / union as f64 * 95.0;
                score = score.max(token_score);
            }
        }

        if score > 0.0 && best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(Candidate { pos, score });
        }
    }

    best
}
