//! Tokenizing free-text champion lists such as `"Ahri, Zed;  Yasuo"`.

use regex::Regex;
use std::sync::LazyLock;

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;]+|\s{2,}").expect("separator pattern is valid"));

/// A single token of a champion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListToken<'a> {
    /// All-digit token, taken as a champion id without lookup.
    Id(u32),
    /// Anything else; resolved by name.
    Name(&'a str),
}

/// Splits on runs of `,`/`;` or on two or more whitespace characters.
///
/// Single spaces are kept so that `"Miss Fortune"` stays one token. Tokens are
/// trimmed and empty ones dropped.
pub fn split_champion_list(input: &str) -> Vec<&str> {
    SEPARATOR
        .split(input)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Classifies a token. Returns `None` for a digit run that overflows `u32`.
pub fn classify_token(token: &str) -> Option<ListToken<'_>> {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok().map(ListToken::Id)
    } else {
        Some(ListToken::Name(token))
    }
}
