//! Match results produced by the strategy cascade.

use serde::{Deserialize, Serialize};

use super::catalog::CatalogEntry;
use super::line::ParsedLine;

/// The strategy that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchAlgorithm {
    /// Normalized-name equality.
    Exact,
    /// Containment/token overlap after supplier-prefix removal.
    Prefix,
    /// Substring containment or token overlap.
    Substring,
    /// Averaged string-similarity metrics.
    Fuzzy,
    /// Shared domain keyword classes (material type, color, pattern).
    Semantic,
    /// No strategy produced a candidate above its threshold.
    None,
}

/// Coarse trust bucket derived from the winning strategy and score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    None,
    Low,
    Medium,
    High,
}

/// Outcome of matching one parsed line against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The invoice line that was matched.
    pub parsed: ParsedLine,

    /// Winning catalog entry, absent when nothing cleared a threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_entry: Option<CatalogEntry>,

    /// Winning strategy's score, 0-100.
    pub score: f64,

    /// Strategy that produced the match.
    pub algorithm: MatchAlgorithm,

    /// Trust bucket for the match.
    pub confidence: Confidence,
}

impl MatchResult {
    /// A no-match result for `parsed`.
    pub fn none(parsed: ParsedLine) -> Self {
        Self {
            parsed,
            matched_entry: None,
            score: 0.0,
            algorithm: MatchAlgorithm::None,
            confidence: Confidence::None,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.matched_entry.is_some()
    }
}
