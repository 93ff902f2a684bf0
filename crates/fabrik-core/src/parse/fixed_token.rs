//! Fixed-token-count layout extractor.
//!
//! Item lines open with a 10-digit order number and close with eight
//! right-aligned reference/numeric fields:
//! `<order> <description...> <sr> <rl/cl> <dc> <lr> <meters> <rate> <basic> <taxable>`.
//! Fields are read from the right; the description is whatever sits between
//! the order number and the trailing block. Lines with fewer than 11 tokens
//! are rejected outright rather than guessed at.

use tracing::debug;

use super::clean::{clean_name, parse_money, parse_quantity};
use super::patterns::FIXED_TOKEN_START;
use crate::models::{ParsedLine, SourceLayout};

/// Trailing fields after the description block.
const TRAILING_FIELDS: usize = 8;

/// Order number + at least a 2-token description + trailing fields.
const MIN_TOKENS: usize = 11;

pub(super) fn extract(text: &str) -> Vec<ParsedLine> {
    let mut items = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if !FIXED_TOKEN_START.is_match(line) {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < MIN_TOKENS {
            debug!(
                tokens = tokens.len(),
                "rejecting malformed fixed-token line"
            );
            continue;
        }

        let n = tokens.len();
        let quantity = parse_quantity(tokens[n - 4]);
        let rate = parse_money(tokens[n - 3]);
        let amount = parse_money(tokens[n - 2]);
        let description = tokens[1..n - TRAILING_FIELDS].join(" ");

        match clean_name(&description) {
            Some(name) => {
                debug!(order = tokens[0], %name, ?quantity, ?rate, ?amount, "fixed-token item");
                items.push(ParsedLine::new(
                    name,
                    quantity,
                    rate,
                    amount,
                    SourceLayout::FixedToken,
                ));
            }
            None => debug!(%description, "skipping item, name too short after cleaning"),
        }
    }

    debug!(count = items.len(), "fixed-token layout extraction finished");
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_order_lines() {
        let text = "\
Home Ideas DDECOR Dispatch Summary
4500123456 NEW ROYAL 1 RL 4567 LR98 3.90 549.00 2141.10 2248.16
4500123457 SATIN GLOW EMERALD 2 CL 4568 LR99 12.00 450.00 5400.00 5670.00
";
        let items = extract(text);
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].raw_name, "NEW ROYAL");
        assert_eq!(items[0].quantity, Some(3.9));
        assert_eq!(items[0].rate, Some("549.00".parse().unwrap()));
        assert_eq!(items[0].amount, Some("2141.10".parse().unwrap()));

        assert_eq!(items[1].raw_name, "SATIN GLOW EMERALD");
        assert_eq!(items[1].quantity, Some(12.0));
    }

    #[test]
    fn test_minimum_token_gate() {
        // 10 tokens: structurally plausible but below the gate
        let text = "4500123456 NEW ROYAL RL 4567 LR98 3.90 549.00 2141.10 2248.16\n";
        assert_eq!(extract(text).len(), 0);
    }

    #[test]
    fn test_malformed_numerics_become_absent() {
        let text = "4500123456 NEW ROYAL 1 RL 4567 LR98 x.xx 549.00 2141.10 2248.16\n";
        let items = extract(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, None);
        assert_eq!(items[0].rate, Some("549.00".parse().unwrap()));
        // Amount was captured directly, quantity absence does not void it
        assert_eq!(items[0].amount, Some("2141.10".parse().unwrap()));
    }
}
