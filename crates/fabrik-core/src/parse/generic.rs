//! Generic fallback extractor for unrecognized layouts.
//!
//! Lowest-precision path: any line mixing letters and digits is a candidate
//! item, the longest leading alphabetic run its name. Rate and amount are
//! scanned for independently - on the candidate line first, then on the
//! one-off and two-off neighbors - because OCR line wrapping routinely
//! separates a name from its figures.

use rust_decimal::Decimal;
use tracing::debug;

use super::clean::{clean_name, parse_money, parse_quantity};
use super::patterns::{GENERIC_AMOUNT, GENERIC_NAME, GENERIC_NUMBER, GENERIC_RATE, HAS_DIGIT, HAS_LETTER};
use crate::models::{ParsedLine, SourceLayout};

pub(super) fn extract(text: &str) -> Vec<ParsedLine> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut items = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if line.len() < 10 {
            continue;
        }
        if !HAS_LETTER.is_match(line) || !HAS_DIGIT.is_match(line) {
            continue;
        }

        let Some(name) = GENERIC_NAME
            .captures(line)
            .and_then(|caps| clean_name(caps[1].trim()))
        else {
            continue;
        };

        let quantity = GENERIC_NUMBER
            .find(line)
            .and_then(|m| parse_quantity(m.as_str()));
        let (rate, amount) = scan_rate_amount(&lines, i);

        // Too little structure to trust a partial hit on this path
        let (Some(quantity), Some(rate), Some(amount)) = (quantity, rate, amount) else {
            continue;
        };

        debug!(%name, quantity, %rate, %amount, "generic item");
        items.push(ParsedLine::new(
            name,
            Some(quantity),
            Some(rate),
            Some(amount),
            SourceLayout::Generic,
        ));
    }

    debug!(count = items.len(), "generic extraction finished");
    items
}

/// Search the candidate line and its neighbors for a rate and an amount.
/// Order: the line itself, then +1, -1, +2, -2.
fn scan_rate_amount(lines: &[&str], current: usize) -> (Option<Decimal>, Option<Decimal>) {
    let mut rate = None;
    let mut amount = None;

    for offset in [0isize, 1, -1, 2, -2] {
        let Some(idx) = current.checked_add_signed(offset) else {
            continue;
        };
        let Some(line) = lines.get(idx) else {
            continue;
        };

        if rate.is_none() {
            rate = GENERIC_RATE
                .captures(line)
                .and_then(|caps| parse_money(&caps[1]));
        }
        if amount.is_none() {
            // A unit-marked rate must not double as the amount
            let without_rate = GENERIC_RATE.replace_all(line, " ");
            amount = GENERIC_AMOUNT.captures(&without_rate).and_then(|caps| {
                let figure = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3))?;
                parse_money(figure.as_str())
            });
        }
        if rate.is_some() && amount.is_some() {
            break;
        }
    }

    (rate, amount)
}
