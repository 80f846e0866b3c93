//! Name folding for tolerant champion lookups.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds a champion name (or a user query) into a comparison key.
///
/// The key is lowercase ASCII alphanumerics only. Accented letters are
/// decomposed and their marks dropped; everything else outside `[a-z0-9]`
/// (punctuation, whitespace, non-Latin scripts) is removed. So `"Kai'Sa"`,
/// `"kaisa"` and `"KAISA"` all fold to `"kaisa"`, while `"阿狸"` folds to `""`.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(char::is_ascii_alphanumeric)
        .collect()
}
