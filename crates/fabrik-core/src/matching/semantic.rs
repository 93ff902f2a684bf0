//! Semantic strategy: shared domain keyword classes.
//!
//! Scores only on material-type, color, and pattern keywords recognized in
//! the parsed name. Earned class weights over possible class weights, so a
//! name with zero recognized keywords always scores 0 - this strategy is a
//! last resort, not a general fallback.

use super::{Candidate, Query};
use crate::models::CatalogIndex;

const MATERIAL_TYPES: &[&str] = &[
    "cotton",
    "silk",
    "wool",
    "linen",
    "polyester",
    "rayon",
    "nylon",
    "acrylic",
];

const COLORS: &[&str] = &[
    "red", "blue", "green", "yellow", "black", "white", "brown", "pink", "purple", "orange",
    "gray", "grey",
];

const PATTERNS: &[&str] = &[
    "striped",
    "checked",
    "floral",
    "geometric",
    "solid",
    "print",
    "embroidery",
];

const TYPE_WEIGHT: f64 = 25.0;
const COLOR_WEIGHT: f64 = 20.0;
const PATTERN_WEIGHT: f64 = 15.0;

pub(super) fn best(query: &Query, index: &CatalogIndex) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (pos, ie) in index.indexed().iter().enumerate() {
        let mut possible = 0.0;
        let mut earned = 0.0;

        for token in &query.tokens {
            let weight = if MATERIAL_TYPES.contains(&token.as_str()) {
                TYPE_WEIGHT
            } else if COLORS.contains(&token.as_str()) {
                COLOR_WEIGHT
            } else if PATTERNS.contains(&token.as_str()) {
                PATTERN_WEIGHT
            } else {
                continue;
            };

            possible += weight;
            if ie.tokens.contains(token) {
                earned += weight;
            }
        }

        if possible == 0.0 {
            continue;
        }
        let score = earned / possible * 100.0;
        if score > 0.0 && best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(Candidate { pos, score });
        }
    }

    best
}
