//! HSN-code-delimited layout extractor.
//!
//! Item lines place an 8-digit HSN code between the description and the
//! quantity/rate/amount columns:
//! `Agora 3787 Rayure Biege 54079200 1.40 MTR 1,250.00 MTR 1,750.00`.
//! A single anchored pattern captures all five fields per physical line.

use tracing::debug;

use super::clean::{clean_name, parse_money, parse_quantity};
use super::patterns::{HSN_ITEM, MULTI_SPACE};
use crate::models::{ParsedLine, SourceLayout};

pub(super) fn extract(text: &str) -> Vec<ParsedLine> {
    let mut items = Vec::new();

    for caps in HSN_ITEM.captures_iter(text) {
        let desc = MULTI_SPACE.replace_all(caps["desc"].trim(), " ");
        let quantity = parse_quantity(&caps["qty"]);
        let rate = parse_money(&caps["rate"]);
        let amount = parse_money(&caps["amount"]);

        match clean_name(&desc) {
            Some(name) => {
                debug!(%name, hsn = &caps["hsn"], ?quantity, ?rate, ?amount, "hsn item");
                items.push(ParsedLine::new(
                    name,
                    quantity,
                    rate,
                    amount,
                    SourceLayout::HsnDelimited,
                ));
            }
            None => debug!(desc = %desc, "skipping item, name too short after cleaning"),
        }
    }

    debug!(count = items.len(), "hsn layout extraction finished");
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_item_lines() {
        let text = "\
Sujan Impex Pvt. Ltd. - Fabrics & More
Agora 3787 Rayure Biege 54079200 1.40 MTR 1,250.00 MTR 1,750.00
Lucca Plain Ivory 54079200 6.00 MTR 895.00 MTR 5,370.00
Total 7,120.00
";
        let items = extract(text);
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].raw_name, "Agora 3787 Rayure Biege");
        assert_eq!(items[0].quantity, Some(1.4));
        assert_eq!(items[0].rate, Some("1250.00".parse().unwrap()));
        assert_eq!(items[0].amount, Some("1750.00".parse().unwrap()));

        assert_eq!(items[1].raw_name, "Lucca Plain Ivory");
        assert_eq!(items[1].amount, Some("5370.00".parse().unwrap()));
    }

    #[test]
    fn test_lines_without_hsn_are_ignored() {
        let text = "Agora 3787 Rayure Biege 1.40 MTR 1,250.00 MTR 1,750.00\n";
        assert_eq!(extract(text).len(), 0);
    }
}
