//! String canonicalization for name comparison.
//!
//! Two distinct canonical forms are used by the matching engine:
//! - [`normalize`] / [`tokenize`] produce the token-based form used by the
//!   substring, fuzzy, and semantic strategies;
//! - [`strip_for_identity`] produces a compact whitespace-free form used for
//!   identity comparisons against catalog names that carry a supplier-code
//!   prefix (e.g. `"A - NEW ROYAL FABRIC"`).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Tax percentage tokens like "5%" or "12%".
    static ref TAX_PERCENT: Regex = Regex::new(r"\b\d{1,2}%").unwrap();

    /// Registration-code shaped alphanumeric runs, e.g. a lowercased GSTIN
    /// fragment like "ab12cdefg34". Purely numeric HSN codes are handled by
    /// the digit rules instead.
    static ref CODE_LIKE: Regex = Regex::new(r"\b[a-z]{2}\d{2}[a-z]{5}\d{2}\b").unwrap();

    /// Isolated one or two digit numbers (column counts, tax rates, serials).
    static ref SHORT_NUMBER: Regex = Regex::new(r"\b\d{1,2}\b").unwrap();

    /// Any punctuation except hyphens.
    static ref PUNCT: Regex = Regex::new(r"[^\w\s\-]").unwrap();

    static ref MULTI_SPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref EDGE_HYPHENS: Regex = Regex::new(r"^-+|-+$").unwrap();

    /// Leading supplier-code prefix on catalog names, e.g. "A - ", "H- ".
    static ref SUPPLIER_CODE_PREFIX: Regex = Regex::new(r"(?i)^[a-z]\s*-\s*").unwrap();
}

/// Supplier prefix tokens ignored when comparing tokenized names.
pub const SUPPLIER_PREFIX_TOKENS: &[&str] = &["a", "h", "s", "home", "ddecor", "sujan", "agora"];

/// Stop tokens removed before token-overlap scoring.
pub const STOP_TOKENS: &[&str] = &["a", "h", "s", "home", "ddecor", "sujan"];

/// Canonicalize free text for comparison.
///
/// Lowercases, strips tax percentages, HSN-like codes, isolated 1-2 digit
/// numbers and punctuation (hyphens survive), then collapses whitespace and
/// trims leading/trailing hyphens. Idempotent.
pub fn normalize(text: &str) -> String {
    let mut s = text.to_lowercase();

    s = TAX_PERCENT.replace_all(&s, " ").into_owned();
    s = CODE_LIKE.replace_all(&s, " ").into_owned();
    s = SHORT_NUMBER.replace_all(&s, " ").into_owned();
    s = PUNCT.replace_all(&s, " ").into_owned();

    let s = MULTI_SPACE.replace_all(&s, " ");
    let s = s.trim();
    EDGE_HYPHENS.replace_all(s, "").trim().to_string()
}

/// Split normalized text into tokens, dropping tokens shorter than 2 chars.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|t| t.len() >= 2)
        .map(|t| t.to_string())
        .collect()
}

/// Compact identity form: lowercase, no whitespace, alphanumerics only.
pub fn strip_for_identity(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Remove a recognized supplier-code prefix ("A - ", "H - ") from a raw
/// catalog name. Names without such a prefix are returned unchanged.
pub fn strip_supplier_code_prefix(name: &str) -> &str {
    match SUPPLIER_CODE_PREFIX.find(name) {
        Some(m) => &name[m.end()..],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("NEW ROYAL"), "new royal");
        assert_eq!(normalize("  CASSIA - 101  "), "cassia - 101");
    }

    #[test]
    fn test_normalize_strips_noise() {
        // Tax percentage and short numbers are removed, 3+ digit codes stay
        assert_eq!(normalize("CASSIA - 101 5%"), "cassia - 101");
        assert_eq!(normalize("KEIBA 12 -912"), "keiba -912");
        // Punctuation other than hyphens is removed
        assert_eq!(normalize("Rayure, Biege!"), "rayure biege");
    }

    #[test]
    fn test_normalize_strips_code_like_runs() {
        assert_eq!(normalize("VELVET AB12CDEFG34 TOUCH"), "velvet touch");
    }

    #[test]
    fn test_normalize_edge_hyphens() {
        assert_eq!(normalize("- ALESIA-711 -"), "alesia-711");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t  "), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for s in [
            "NEW ROYAL",
            "A - Agora 3787 Rayure Beige",
            "CASSIA - 101 5% 55169200",
            "  weird   spacing -- here  ",
            "",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("NEW ROYAL"), vec!["new", "royal"]);
        // 1-char tokens (such as a bare hyphen) are dropped
        assert_eq!(tokenize("CASSIA - 101"), vec!["cassia", "101"]);
        assert_eq!(tokenize(""), Vec::<String>::new());
    }

    #[test]
    fn test_strip_for_identity() {
        assert_eq!(strip_for_identity("A - NEW ROYAL"), "anewroyal");
        assert_eq!(strip_for_identity("Alesia-711"), "alesia711");
        assert_eq!(strip_for_identity("  "), "");
    }

    #[test]
    fn test_strip_supplier_code_prefix() {
        assert_eq!(strip_supplier_code_prefix("A - NEW ROYAL"), "NEW ROYAL");
        assert_eq!(strip_supplier_code_prefix("H- Home DDecor"), "Home DDecor");
        // Multi-letter leading words are not prefixes
        assert_eq!(strip_supplier_code_prefix("CASSIA - 101"), "CASSIA - 101");
    }
}
