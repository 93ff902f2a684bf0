//! Format-aware invoice line parser.
//!
//! Detection first: the text is scanned for vendor-identifying substrings in
//! fixed registration order and the first hit selects the layout extractor.
//! Unrecognized documents fall through to the generic extractor. Lines that
//! match no structure are silently skipped - a page of free text
//! legitimately contains non-item lines - and an itemless document is an
//! empty result, never an error.

pub mod clean;
mod fixed_token;
mod generic;
mod hsn;
pub(crate) mod patterns;
mod tabular;

use tracing::debug;

use crate::models::{ParsedLine, SourceLayout};

/// Default vendor indicators, in priority order. Indicator sets are
/// disjoint by construction; were an overlap ever introduced, the
/// earlier-registered layout would win.
const DEFAULT_INDICATORS: &[(SourceLayout, &[&str])] = &[
    (
        SourceLayout::TabularNumeric,
        &["sarom", "thakor ind estate", "vidhyavihar"],
    ),
    (
        SourceLayout::HsnDelimited,
        &["sujan impex", "fabrics & more"],
    ),
    (SourceLayout::FixedToken, &["home ideas", "ddecor"]),
];

/// Format-aware line parser.
pub struct LineParser {
    indicators: Vec<(SourceLayout, Vec<String>)>,
}

impl LineParser {
    /// Create a parser with the default vendor registrations.
    pub fn new() -> Self {
        Self {
            indicators: DEFAULT_INDICATORS
                .iter()
                .map(|(layout, needles)| {
                    (*layout, needles.iter().map(|n| n.to_string()).collect())
                })
                .collect(),
        }
    }

    /// Register an additional indicator for a layout. Registration order
    /// is detection priority.
    pub fn register_indicator(mut self, layout: SourceLayout, needle: impl Into<String>) -> Self {
        let needle = needle.into().to_lowercase();
        match self.indicators.iter_mut().find(|(l, _)| *l == layout) {
            Some((_, needles)) => needles.push(needle),
            None => self.indicators.push((layout, vec![needle])),
        }
        self
    }

    /// Detect the vendor layout from text content.
    pub fn detect_layout(&self, text: &str) -> SourceLayout {
        let haystack = text.to_lowercase();

        for (layout, needles) in &self.indicators {
            if let Some(hit) = needles.iter().find(|n| haystack.contains(n.as_str())) {
                debug!(?layout, indicator = %hit, "detected invoice layout");
                return *layout;
            }
        }

        debug!("no layout indicator found, using generic extractor");
        SourceLayout::Generic
    }

    /// Extract ordered line items from raw invoice text.
    pub fn parse(&self, text: &str) -> Vec<ParsedLine> {
        match self.detect_layout(text) {
            SourceLayout::TabularNumeric => tabular::extract(text),
            SourceLayout::HsnDelimited => hsn::extract(text),
            SourceLayout::FixedToken => fixed_token::extract(text),
            SourceLayout::Generic => generic::extract(text),
        }
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}
