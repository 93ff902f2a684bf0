//! Core library for fabric invoice line extraction and catalog matching.
//!
//! This crate provides:
//! - Vendor-aware invoice line parsing (tabular, HSN-delimited, fixed-token
//!   and generic layouts) tolerant of OCR noise
//! - A multi-strategy name matcher (exact, prefix, substring, fuzzy,
//!   semantic) over a normalized catalog index
//! - Price deviation classification between invoice rates and catalog prices

pub mod error;
pub mod matching;
pub mod models;
pub mod normalize;
pub mod parse;
pub mod pipeline;
pub mod price;

pub use error::{CatalogError, Result};
pub use matching::{MatchEngine, MatchObserver, NoopObserver, RecordingObserver, StrategyAttempt};
pub use models::{
    CatalogEntry, CatalogIndex, CatalogSource, Confidence, MatchAlgorithm, MatchResult, ParsedLine,
    SourceLayout,
};
pub use parse::LineParser;
pub use pipeline::{analyze, summarize, ClassifiedLine, MatchSummary};
pub use price::{classify, PriceBucket, PriceVerdict};
