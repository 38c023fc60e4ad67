use unicode_normalization::UnicodeNormalization;

/// Normalize link text scraped from HTML for matching.
///
/// NFC-normalizes so accented show names compare consistently, and collapses
/// the whitespace runs left over from HTML indentation into single spaces.
pub fn normalize_anchor_text(input: &str) -> String {
    let nfc: String = input.nfc().collect();
    nfc.split_whitespace().collect::<Vec<_>>().join(" ")
}
