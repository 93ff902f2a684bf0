//! Candidate-name cleaning and lenient numeric parsing.

use rust_decimal::Decimal;

use super::patterns::*;

/// Conservative cleaner used by most layouts.
///
/// Strips boilerplate words, GSTIN-like codes, tax percentages and ordinal
/// prefixes while keeping the material details intact. Returns `None` when
/// the remainder is shorter than 3 characters or numeric/currency-only.
pub fn clean_name(name: &str) -> Option<String> {
    let mut s = name.to_string();

    for re in [
        &*NOISE_WORDS,
        &*GSTIN_LIKE,
        &*SIX_DIGITS,
        &*TAX_PERCENT,
        &*TRAILING_TAX_COLUMN,
        &*LEADING_ORDINAL,
        &*CURRENCY_FRAGMENT,
    ] {
        s = re.replace_all(&s, "").into_owned();
    }

    let s = MULTI_SPACE.replace_all(&s, " ");
    let s = EDGE_TRIM.replace_all(s.trim(), "").into_owned();

    if s.len() >= 3 && !NUMERIC_ONLY.is_match(&s) {
        Some(s)
    } else {
        None
    }
}

/// Aggressive cleaner for the tabular-numeric layout, whose OCR output is
/// dense with HSN codes, numeric columns and garbled alphanumeric runs.
pub fn clean_name_aggressive(name: &str) -> Option<String> {
    let mut s = name.to_string();

    for re in [
        &*TAX_PERCENT,
        &*EIGHT_DIGITS,
        &*SIX_SEVEN_DIGITS,
        &*SHORT_NUMBER,
        &*GSTIN_LIKE,
        &*ALNUM_JUNK,
        &*MIXED_JUNK,
    ] {
        s = re.replace_all(&s, " ").into_owned();
    }
    s = PUNCT_EXCEPT_HYPHEN.replace_all(&s, " ").into_owned();

    let s = MULTI_SPACE.replace_all(&s, " ");
    let s = s.trim();
    let s = s.trim_matches('-').trim().to_string();

    if s.len() >= 3 && !DIGITS_SPACES_ONLY.is_match(&s) {
        Some(s)
    } else {
        None
    }
}

/// Parse a money figure, tolerating thousands separators. Unparsable or
/// nonpositive values are treated as absent per the error model.
pub fn parse_money(s: &str) -> Option<Decimal> {
    let cleaned = s.replace(',', "");
    cleaned
        .parse::<Decimal>()
        .ok()
        .filter(|d| d.is_sign_positive() && !d.is_zero())
}

/// Parse a quantity; unparsable or nonpositive values are absent.
pub fn parse_quantity(s: &str) -> Option<f64> {
    s.replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite() && *q > 0.0)
}
