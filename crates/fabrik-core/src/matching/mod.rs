//! Multi-strategy name matching engine.
//!
//! Strategies run in fixed priority order - exact, prefix, substring,
//! fuzzy, semantic - each scanning the full catalog and keeping only its
//! best-scoring candidate before the threshold test. The first strategy
//! whose best candidate clears its own threshold wins; strategies are never
//! blended. Within a strategy, ties on score go to the entry encountered
//! first in original catalog order (strictly-greater comparison), which
//! makes results independent of anything but catalog insertion order.

mod fuzzy;
mod prefix;
mod semantic;
mod substring;

use std::collections::HashSet;

use tracing::debug;

use crate::models::{
    CatalogIndex, Confidence, MatchAlgorithm, MatchResult, ParsedLine, SourceLayout,
};
use crate::normalize::{normalize, strip_for_identity, tokenize};

/// Precomputed comparison forms for one parsed name.
pub(crate) struct Query {
    pub(crate) normalized: String,
    pub(crate) identity: String,
    pub(crate) tokens: HashSet<String>,
}

impl Query {
    fn new(raw_name: &str) -> Self {
        Self {
            normalized: normalize(raw_name),
            identity: strip_for_identity(raw_name),
            tokens: tokenize(raw_name).into_iter().collect(),
        }
    }
}

/// Best candidate a strategy found, by catalog position.
pub(crate) struct Candidate {
    pub(crate) pos: usize,
    pub(crate) score: f64,
}

/// One strategy attempt, for external observability.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StrategyAttempt {
    /// Strategy that ran.
    pub strategy: MatchAlgorithm,
    /// Name of the strategy's best candidate, if it found one.
    pub candidate: Option<String>,
    /// Best candidate's score (0 when none was found).
    pub score: f64,
    /// Whether the candidate cleared the strategy's threshold.
    pub accepted: bool,
}

/// Consumer of per-strategy diagnostic events.
pub trait MatchObserver {
    fn on_attempt(&mut self, attempt: &StrategyAttempt);
}

/// Observer that discards all events.
pub struct NoopObserver;

impl MatchObserver for NoopObserver {
    fn on_attempt(&mut self, _attempt: &StrategyAttempt) {}
}

/// Collects attempts into a vec, mainly for tests and the CLI.
#[derive(Default)]
pub struct RecordingObserver {
    pub attempts: Vec<StrategyAttempt>,
}

impl MatchObserver for RecordingObserver {
    fn on_attempt(&mut self, attempt: &StrategyAttempt) {
        self.attempts.push(attempt.clone());
    }
}

type StrategyFn = fn(&Query, &CatalogIndex) -> Option<Candidate>;

/// The ordered cascade after the exact lookup: strategy, scorer,
/// acceptance threshold, and the score at which confidence steps up from
/// the strategy's lower tier.
const CASCADE: &[(MatchAlgorithm, StrategyFn, f64, (f64, Confidence, Confidence))] = &[
    (
        MatchAlgorithm::Prefix,
        prefix::best,
        70.0,
        (85.0, Confidence::High, Confidence::Medium),
    ),
    (
        MatchAlgorithm::Substring,
        substring::best,
        60.0,
        (85.0, Confidence::High, Confidence::Medium),
    ),
    (
        MatchAlgorithm::Fuzzy,
        fuzzy::best,
        70.0,
        (85.0, Confidence::High, Confidence::Medium),
    ),
    (
        MatchAlgorithm::Semantic,
        semantic::best,
        50.0,
        (70.0, Confidence::Medium, Confidence::Low),
    ),
];

/// Matching engine over a read-only catalog index.
///
/// `match_line` is a pure function of the parsed name and the index; the
/// engine holds no state between calls, so one engine may serve many
/// invoices and many engines may share one index across threads.
pub struct MatchEngine<'a> {
    index: &'a CatalogIndex,
}

impl<'a> MatchEngine<'a> {
    pub fn new(index: &'a CatalogIndex) -> Self {
        Self { index }
    }

    /// Match a parsed line against the catalog.
    pub fn match_line(&self, parsed: ParsedLine) -> MatchResult {
        self.match_line_observed(parsed, &mut NoopObserver)
    }

    /// Match a bare name (no quantities attached).
    pub fn match_name(&self, name: &str) -> MatchResult {
        self.match_line(ParsedLine::new(name, None, None, None, SourceLayout::Generic))
    }

    /// Match a parsed line, emitting a [`StrategyAttempt`] per strategy
    /// tried.
    pub fn match_line_observed(
        &self,
        parsed: ParsedLine,
        observer: &mut dyn MatchObserver,
    ) -> MatchResult {
        let query = Query::new(&parsed.raw_name);
        if query.normalized.is_empty() {
            return MatchResult::none(parsed);
        }

        // Exact first: normalized equality short-circuits the cascade
        if let Some(entry) = self.index.lookup_exact(&query.normalized) {
            let attempt = StrategyAttempt {
                strategy: MatchAlgorithm::Exact,
                candidate: Some(entry.name.clone()),
                score: 100.0,
                accepted: true,
            };
            debug!(name = %parsed.raw_name, matched = %entry.name, "exact match");
            observer.on_attempt(&attempt);

            return MatchResult {
                parsed,
                matched_entry: Some(entry.clone()),
                score: 100.0,
                algorithm: MatchAlgorithm::Exact,
                confidence: Confidence::High,
            };
        }
        observer.on_attempt(&StrategyAttempt {
            strategy: MatchAlgorithm::Exact,
            candidate: None,
            score: 0.0,
            accepted: false,
        });

        for &(algorithm, strategy, threshold, (step, upper, lower)) in CASCADE {
            let candidate = strategy(&query, self.index);

            let (entry, score) = match candidate {
                Some(c) => (&self.index.indexed()[c.pos].entry, c.score),
                None => {
                    observer.on_attempt(&StrategyAttempt {
                        strategy: algorithm,
                        candidate: None,
                        score: 0.0,
                        accepted: false,
                    });
                    continue;
                }
            };

            let accepted = score >= threshold;
            debug!(
                name = %parsed.raw_name,
                ?algorithm,
                candidate = %entry.name,
                score,
                accepted,
                "strategy attempt"
            );
            observer.on_attempt(&StrategyAttempt {
                strategy: algorithm,
                candidate: Some(entry.name.clone()),
                score,
                accepted,
            });

            if accepted {
                let confidence = if score >= step { upper } else { lower };
                return MatchResult {
                    parsed,
                    matched_entry: Some(entry.clone()),
                    score: score.clamp(0.0, 100.0),
                    algorithm,
                    confidence,
                };
            }
        }

        debug!(name = %parsed.raw_name, "no strategy cleared its threshold");
        MatchResult::none(parsed)
    }
}
