use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strips diacritical marks from a string ("déjà" -> "deja").
///
/// The string is decomposed (NFD) and combining marks are dropped, which
/// covers the Latin-1 supplement and Latin Extended ranges used by account
/// and group labels.
pub fn deburr(input: &str) -> String {
    input.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Builds the case-insensitive, accent-insensitive key used to sort labels.
pub fn label_sort_key(label: &str) -> String {
    deburr(label).to_lowercase()
}
