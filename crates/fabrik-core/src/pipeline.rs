//! End-to-end pipeline: raw text in, classified line records out.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::matching::MatchEngine;
use crate::models::{CatalogIndex, Confidence, MatchResult};
use crate::parse::LineParser;
use crate::price::{self, PriceVerdict};

/// One fully processed invoice line: parse result, catalog match, and the
/// price verdict when both sides of the comparison exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// Match outcome (includes the parsed line).
    #[serde(flatten)]
    pub result: MatchResult,

    /// Price deviation, absent when the invoice rate or the catalog price
    /// is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceVerdict>,
}

/// Per-invoice tallies for batch reporting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total: usize,
    pub matched: usize,
    pub high_confidence: usize,
    pub medium_confidence: usize,
    pub low_confidence: usize,
    pub unmatched: usize,
}

/// Parse `text`, match every extracted line against `index`, and classify
/// price deviations.
///
/// An itemless document yields an empty vec; an empty catalog yields
/// all-NONE match results. Neither is an error.
pub fn analyze(text: &str, index: &CatalogIndex) -> Vec<ClassifiedLine> {
    let parser = LineParser::new();
    let engine = MatchEngine::new(index);

    let lines = parser.parse(text);
    info!(
        lines = lines.len(),
        catalog = index.len(),
        "matching extracted lines against catalog"
    );

    lines
        .into_iter()
        .map(|parsed| {
            let result = engine.match_line(parsed);
            let price = match (&result.parsed.rate, &result.matched_entry) {
                (Some(rate), Some(entry)) => Some(price::classify(*rate, entry.price)),
                _ => None,
            };
            ClassifiedLine { result, price }
        })
        .collect()
}

/// Tally confidence buckets over a processed invoice.
pub fn summarize(lines: &[ClassifiedLine]) -> MatchSummary {
    let mut summary = MatchSummary {
        total: lines.len(),
        ..Default::default()
    };

    for line in lines {
        match line.result.confidence {
            Confidence::High => summary.high_confidence += 1,
            Confidence::Medium => summary.medium_confidence += 1,
            Confidence::Low => summary.low_confidence += 1,
            Confidence::None => summary.unmatched += 1,
        }
        if line.result.is_matched() {
            summary.matched += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogEntry, MatchAlgorithm};
    use crate::price::PriceBucket;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn catalog() -> CatalogIndex {
        CatalogIndex::build(vec![
            CatalogEntry::new("A - Sarom Cassia 101", dec("720.00")),
            CatalogEntry::new("A - Sarom Alesia 711", dec("675.00")),
            CatalogEntry::new("A - NEW ROYAL FABRIC", dec("549.00")),
        ])
    }

    #[test]
    fn test_analyze_tabular_invoice_end_to_end() {
        let text = "\
TAX INVOICE
SAROM
CASSIA - 101 55169200 5% 4.15 Mtr 720.00 Mtr 2,988.00
ALESIA-711 55169200 5% 2.40 Mtr 675.00 Mtr 1,620.00
";
        let index = catalog();
        let lines = analyze(text, &index);

        assert_eq!(lines.len(), 2);

        let first = &lines[0];
        assert_eq!(first.result.parsed.raw_name, "CASSIA - 101");
        assert!(first.result.is_matched());
        let price = first.price.as_ref().unwrap();
        assert_eq!(price.bucket, PriceBucket::Exact);
        assert_eq!(price.difference, Decimal::ZERO);

        assert!(lines[1].result.is_matched());
    }

    #[test]
    fn test_analyze_flags_price_deviation() {
        let text = "SAROM\nCASSIA - 101 55169200 5% 4.15 Mtr 800.00 Mtr 3,320.00\n";
        let index = catalog();
        let lines = analyze(text, &index);

        assert_eq!(lines.len(), 1);
        let price = lines[0].price.as_ref().unwrap();
        // 80 over 720 is an 11.1% deviation
        assert_eq!(price.bucket, PriceBucket::Significant);
        assert_eq!(price.difference, dec("80.00"));
    }

    #[test]
    fn test_analyze_empty_catalog_is_degraded_not_fatal() {
        let text = "SAROM\nCASSIA - 101 55169200 5% 4.15 Mtr 720.00 Mtr 2,988.00\n";
        let index = CatalogIndex::build(Vec::new());
        let lines = analyze(text, &index);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].result.algorithm, MatchAlgorithm::None);
        assert!(lines[0].price.is_none());
    }

    #[test]
    fn test_analyze_itemless_text_is_empty() {
        let index = catalog();
        assert!(analyze("just a letter, nothing billable", &index).is_empty());
    }

    #[test]
    fn test_classified_line_json_shape() {
        let text = "SAROM\nCASSIA - 101 55169200 5% 4.15 Mtr 720.00 Mtr 2,988.00\n";
        let matched = analyze(text, &catalog());
        let value = serde_json::to_value(&matched[0]).unwrap();

        // The match result is flattened into the line record
        assert_eq!(value["parsed"]["raw_name"], "CASSIA - 101");
        assert_eq!(value["parsed"]["source_layout"], "tabular_numeric");
        assert_eq!(value["confidence"], "HIGH");
        assert_eq!(value["price"]["bucket"], "EXACT");

        let unmatched = analyze(text, &CatalogIndex::build(Vec::new()));
        let value = serde_json::to_value(&unmatched[0]).unwrap();
        assert_eq!(value["algorithm"], "NONE");
        // Absent optionals are omitted, not null
        assert!(value.get("matched_entry").is_none());
        assert!(value.get("price").is_none());
    }

    #[test]
    fn test_summarize_tallies() {
        let text = "\
SAROM
CASSIA - 101 55169200 5% 4.15 Mtr 720.00 Mtr 2,988.00
ZZGARBLEQX 55169200 5% 1.00 Mtr 100.00 Mtr 100.00
";
        let index = catalog();
        let lines = analyze(text, &index);
        let summary = summarize(&lines);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.unmatched, 1);
        assert_eq!(
            summary.high_confidence + summary.medium_confidence + summary.low_confidence,
            1
        );
    }
}
