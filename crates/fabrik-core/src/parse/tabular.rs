//! Tabular-numeric layout extractor.
//!
//! Item lines carry fixed-width numeric columns after the material name:
//! `CASSIA - 101 55169200 5% 4.15 Mtr 720.00 Mtr 2,988.00`. The unit glyphs
//! come out of OCR unreliably, so an ordered list of structural alternatives
//! is tried per line; the first that matches wins and everything before the
//! match is the candidate name.

use tracing::debug;

use super::clean::{clean_name_aggressive, parse_money, parse_quantity};
use super::patterns::TABULAR_ITEMS;
use crate::models::{ParsedLine, SourceLayout};

pub(super) fn extract(text: &str) -> Vec<ParsedLine> {
    let mut items = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.len() < 10 {
            continue;
        }

        for structure in TABULAR_ITEMS.iter() {
            let Some(caps) = structure.captures(line) else {
                continue;
            };

            let quantity = parse_quantity(&caps[1]);
            let rate = parse_money(&caps[2]);
            let amount = parse_money(&caps[3]);

            let name_part = &line[..caps.get(0).unwrap().start()];
            if let Some(name) = clean_name_aggressive(name_part.trim()) {
                debug!(%name, ?quantity, ?rate, ?amount, "tabular item");
                items.push(ParsedLine::new(
                    name,
                    quantity,
                    rate,
                    amount,
                    SourceLayout::TabularNumeric,
                ));
            }
            break;
        }
    }

    debug!(count = items.len(), "tabular layout extraction finished");
    items
}
