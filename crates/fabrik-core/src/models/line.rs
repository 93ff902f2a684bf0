//! Parsed invoice line items.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

/// The vendor layout a line was extracted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceLayout {
    /// Fixed-width numeric columns: `qty Mtr rate Mtr amount`.
    TabularNumeric,
    /// Full lines delimited by an 8-digit HSN code.
    HsnDelimited,
    /// Whitespace-tokenized lines keyed by a 10-digit order number.
    FixedToken,
    /// Lowest-precision fallback for unrecognized layouts.
    Generic,
}

/// One line item extracted from invoice text.
///
/// Numeric fields that failed to parse (or parsed nonpositive) are `None`;
/// an unparsable field never fails the whole line. Never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedLine {
    /// Material name after cleaning, as found on the invoice.
    pub raw_name: String,

    /// Quantity in the invoice's unit (meters, pieces).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// Per-unit rate charged on the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,

    /// Line amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Layout the line was extracted with.
    pub source_layout: SourceLayout,
}

impl ParsedLine {
    /// Create a line, deriving `amount = quantity * rate` when both factors
    /// are present and the amount itself was not captured.
    pub fn new(
        raw_name: impl Into<String>,
        quantity: Option<f64>,
        rate: Option<Decimal>,
        amount: Option<Decimal>,
        source_layout: SourceLayout,
    ) -> Self {
        let amount = amount.or_else(|| {
            let qty = quantity.and_then(Decimal::from_f64)?;
            Some(qty * rate?)
        });

        Self {
            raw_name: raw_name.into(),
            quantity,
            rate,
            amount,
            source_layout,
        }
    }
}
