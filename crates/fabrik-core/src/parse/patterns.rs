//! Regex patterns for layout detection and line extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Tabular-numeric item structures, ordered most-specific first. OCR
    /// renders the unit token unreliably (`Mtr`, `My`, `Mu`, `Mtr~`,
    /// `Mtr"`, `Mtr,`), so several alternatives are tried per line and the
    /// first that matches wins.
    pub static ref TABULAR_ITEMS: Vec<Regex> = vec![
        Regex::new(
            r#"(?i)(\d+(?:\.\d+)?)\s*(?:Meter|Mtr~|Mtr,|Mtr"|Mtr|My)\s*(\d+(?:\.\d+)?)\s*(?:Meter|Mtr|Mu)\s*([\d,]+(?:\.\d+)?)"#
        ).unwrap(),
        Regex::new(
            r"(?i)(\d+(?:\.\d+)?)(?:Meter|Mtr)[,~-]\s*(\d+(?:\.\d+)?)\s*(?:Meter|Mtr)\s*([\d,]+(?:\.\d+)?)"
        ).unwrap(),
        Regex::new(
            r"(?i)(\d+(?:\.\d+)?)\s*Mtr-\s*(\d+(?:\.\d+)?)\s*Mu\s*([\d,]+(?:\.\d+)?)"
        ).unwrap(),
        // Last resort for heavily garbled unit glyphs
        Regex::new(
            r"(?i)(\d+(?:\.\d+)?)\s*Mtr[^\d]*(\d+(?:\.\d+)?)\s*Mtr\s*([\d,]+(?:\.\d+)?)"
        ).unwrap(),
    ];

    /// HSN-delimited item line: description, 8-digit HSN, quantity with
    /// unit, rate with unit, amount, anchored to a full physical line.
    pub static ref HSN_ITEM: Regex = Regex::new(
        r"(?mi)^(?P<desc>.+?)\s+(?P<hsn>\d{8})\s+(?P<qty>\d+(?:\.\d+)?)\s*(?:meters|meter|mtrs|mtr)\s+(?P<rate>[\d,]+(?:\.\d{2})?)\s*(?:meters|meter|mtrs|mtr)\s+(?P<amount>[\d,]+(?:\.\d{2})?)\s*$"
    ).unwrap();

    /// Fixed-token item lines are keyed by a leading 10-digit order number.
    pub static ref FIXED_TOKEN_START: Regex = Regex::new(r"^\d{10}\s").unwrap();

    /// Longest leading alphabetic run, used as the generic candidate name.
    pub static ref GENERIC_NAME: Regex = Regex::new(r"^([A-Za-z][A-Za-z\s\-]*)").unwrap();

    /// First number on a line (generic quantity).
    pub static ref GENERIC_NUMBER: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();

    /// Rate stated with its unit, e.g. "720.00 per Mtr" or "1250/Mtr".
    pub static ref GENERIC_RATE: Regex = Regex::new(
        r"(?i)(\d+(?:\.\d+)?)\s*(?:per|/)\s*(?:mtr|meter|pcs)"
    ).unwrap();

    /// Amount figure: currency-marked, thousands-separated, or a bare
    /// two-decimal figure, preferred in that order. Callers blank out rate
    /// expressions before scanning so "450.00 per Mtr" is never misread as
    /// an amount; integers and one-decimal figures stay excluded so a
    /// neighboring quantity is not.
    pub static ref GENERIC_AMOUNT: Regex = Regex::new(
        r"₹\s*([\d,]+(?:\.\d+)?)|\b(\d{1,3}(?:,\d{3})+(?:\.\d+)?)\b|\b(\d+\.\d{2})\b"
    ).unwrap();

    pub static ref HAS_LETTER: Regex = Regex::new(r"[A-Za-z]").unwrap();
    pub static ref HAS_DIGIT: Regex = Regex::new(r"\d").unwrap();
}

// Name-cleaning noise patterns.
lazy_static! {
    /// Invoice boilerplate words that leak into OCR'd descriptions.
    pub static ref NOISE_WORDS: Regex = Regex::new(
        r"(?i)\b(GSTIN|GST|IGST|CGST|SGST|Tax|Total|Sub[- ]?total|Grand Total|Invoice|Bill|Address|Ship To|PIN|Pincode|Phone|Mobile|Email)\b"
    ).unwrap();

    /// GSTIN-like registration numbers, e.g. "27AAACH7409R1Z5".
    pub static ref GSTIN_LIKE: Regex = Regex::new(
        r"(?i)\b\d{2}[A-Z]{5}\d{4}[A-Z][A-Z\d]Z[A-Z\d]\b"
    ).unwrap();

    pub static ref TAX_PERCENT: Regex = Regex::new(r"\b\d{1,2}%").unwrap();
    pub static ref SIX_DIGITS: Regex = Regex::new(r"\b\d{6}\b").unwrap();
    pub static ref EIGHT_DIGITS: Regex = Regex::new(r"\b\d{8}\b").unwrap();
    pub static ref SIX_SEVEN_DIGITS: Regex = Regex::new(r"\b\d{6,7}\b").unwrap();
    pub static ref SHORT_NUMBER: Regex = Regex::new(r"\b\d{1,2}\b").unwrap();

    /// Long alphanumeric OCR junk like "Isstegz00".
    pub static ref ALNUM_JUNK: Regex = Regex::new(r"\b[A-Za-z]{6,}\d{2,}\b").unwrap();
    pub static ref MIXED_JUNK: Regex = Regex::new(r"\b\d{2,}[A-Za-z]{3,}\d{2,}\b").unwrap();

    pub static ref TRAILING_TAX_COLUMN: Regex = Regex::new(r"\|\s*%[^|]*$").unwrap();
    pub static ref LEADING_ORDINAL: Regex = Regex::new(r"^\d+\s+").unwrap();
    pub static ref CURRENCY_FRAGMENT: Regex = Regex::new(r"[\$§]\d+").unwrap();

    pub static ref PUNCT_EXCEPT_HYPHEN: Regex = Regex::new(r"[^\w\s\-]").unwrap();
    pub static ref MULTI_SPACE: Regex = Regex::new(r"\s+").unwrap();
    pub static ref EDGE_TRIM: Regex = Regex::new(r"^[:\-\s|]+|[:\-\s|]+$").unwrap();

    /// A "name" that is only digits/currency/punctuation is noise.
    pub static ref NUMERIC_ONLY: Regex = Regex::new(r"^[₹\d\s.,/\-]+$").unwrap();
    pub static ref DIGITS_SPACES_ONLY: Regex = Regex::new(r"^[\d\s]+$").unwrap();
}
