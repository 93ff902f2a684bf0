//! Price deviation classification.
//!
//! Compares an invoice rate against the matched catalog price and maps the
//! percentage deviation onto a discrete status bucket. Thresholds are
//! evaluated in `Decimal` so the inclusive bucket boundaries are exact.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Discrete deviation buckets with inclusive upper bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceBucket {
    /// 0% deviation.
    Exact,
    /// <= 2%.
    Minor,
    /// <= 5%.
    Small,
    /// <= 10%.
    Moderate,
    /// <= 25%.
    Significant,
    /// > 25%.
    Major,
}

/// Classified price deviation for one matched line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceVerdict {
    /// Absolute difference between invoice rate and catalog price.
    pub difference: Decimal,

    /// Deviation as a percentage of the catalog price.
    pub difference_pct: f64,

    /// Deviation bucket.
    pub bucket: PriceBucket,
}

/// Classify the deviation of `invoice_rate` from `catalog_price`.
///
/// A zero catalog price yields a 0% deviation (EXACT when the rate is also
/// zero would be indistinguishable anyway, and a division here must not
/// panic). Pure and total over all inputs.
pub fn classify(invoice_rate: Decimal, catalog_price: Decimal) -> PriceVerdict {
    let difference = (invoice_rate - catalog_price).abs();

    let pct = if catalog_price.is_zero() {
        Decimal::ZERO
    } else {
        difference * Decimal::ONE_HUNDRED / catalog_price
    };

    let bucket = if pct.is_zero() {
        PriceBucket::Exact
    } else if pct <= Decimal::TWO {
        PriceBucket::Minor
    } else if pct <= Decimal::from(5) {
        PriceBucket::Small
    } else if pct <= Decimal::TEN {
        PriceBucket::Moderate
    } else if pct <= Decimal::from(25) {
        PriceBucket::Significant
    } else {
        PriceBucket::Major
    };

    PriceVerdict {
        difference,
        difference_pct: pct.to_f64().unwrap_or(0.0),
        bucket,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_identical_prices_are_exact() {
        let v = classify(dec("549.00"), dec("549.00"));
        assert_eq!(v.bucket, PriceBucket::Exact);
        assert_eq!(v.difference, Decimal::ZERO);
        assert_eq!(v.difference_pct, 0.0);
    }

    #[test]
    fn test_bucket_boundaries_inclusive() {
        let base = dec("100.00");
        // Each cut point classifies into the lower bucket, a hair above
        // falls into the next one
        assert_eq!(classify(dec("102.00"), base).bucket, PriceBucket::Minor);
        assert_eq!(classify(dec("102.01"), base).bucket, PriceBucket::Small);
        assert_eq!(classify(dec("105.00"), base).bucket, PriceBucket::Small);
        assert_eq!(classify(dec("105.01"), base).bucket, PriceBucket::Moderate);
        assert_eq!(classify(dec("110.00"), base).bucket, PriceBucket::Moderate);
        assert_eq!(classify(dec("110.01"), base).bucket, PriceBucket::Significant);
        assert_eq!(classify(dec("125.00"), base).bucket, PriceBucket::Significant);
        assert_eq!(classify(dec("125.01"), base).bucket, PriceBucket::Major);
    }

    #[test]
    fn test_deviation_is_symmetric() {
        let below = classify(dec("95.00"), dec("100.00"));
        let above = classify(dec("105.00"), dec("100.00"));
        assert_eq!(below.difference, above.difference);
        assert_eq!(below.bucket, above.bucket);
    }

    #[test]
    fn test_zero_catalog_price() {
        let v = classify(dec("720.00"), Decimal::ZERO);
        assert_eq!(v.difference_pct, 0.0);
        assert_eq!(v.bucket, PriceBucket::Exact);
    }
}
