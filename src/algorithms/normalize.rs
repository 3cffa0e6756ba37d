//! Text canonicalization applied before any comparison
//!
//! Matching operates on a canonical form: lowercase, canonically
//! decomposed, with combining diacritical marks and all whitespace
//! removed. The same function runs over every query token and every
//! rendered field value, so both sides of a comparison share one
//! alphabet.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block (U+0300..=U+036F).
#[inline]
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Canonicalize `text` for comparison.
///
/// Lowercases, applies Unicode canonical decomposition (NFD), strips
/// combining diacritical marks, and removes all whitespace. Total over
/// any string input and idempotent over its own output.
///
/// # Example
/// ```
/// use fuzzyscan::algorithms::normalize::normalize;
///
/// assert_eq!(normalize("Café au Lait"), "cafeaulait");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c) && !c.is_whitespace())
        .collect()
}
