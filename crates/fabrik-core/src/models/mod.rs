//! Data models: catalog entries, parsed lines, and match results.

pub mod catalog;
pub mod line;
pub mod matching;

pub use catalog::{CatalogEntry, CatalogIndex, CatalogSource};
pub use line::{ParsedLine, SourceLayout};
pub use matching::{Confidence, MatchAlgorithm, MatchResult};
