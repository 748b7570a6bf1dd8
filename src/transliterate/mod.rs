//! Latin to runic transliteration
//!
//! A single left-to-right pass over the lowercased input. Digraphs win over
//! single letters at the same position; anything without a mapping is passed
//! through unchanged, so translation never fails.

pub mod rune_map;

pub use rune_map::{rune_for_char, rune_for_digraph, DIGRAPHS};

use crate::config::DEFAULT_FALLBACK_RUNES;

/// Translate text into a sequence of rune symbols.
///
/// Each symbol corresponds to one consumed unit of the lowercased input (a
/// digraph or a single character), so the result is never longer than the
/// lowercased input. Lowercasing can itself add characters: `İ` becomes
/// `i` plus a combining dot.
///
/// # Examples
/// ```
/// use rune_column_wasm::transliterate::translate;
///
/// assert_eq!(translate("thing"), vec!["ᚦ", "ᛁ", "ᛜ"]);
/// assert_eq!(translate("a1"), vec!["ᚨ", "1"]);
/// ```
pub fn translate(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.to_lowercase().chars().collect();
    let mut symbols = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() {
            if let Some(rune) = rune_for_digraph(chars[i], chars[i + 1]) {
                symbols.push(rune.to_string());
                i += 2;
                continue;
            }
        }

        match rune_for_char(chars[i]) {
            Some(rune) => symbols.push(rune.to_string()),
            None => symbols.push(chars[i].to_string()),
        }
        i += 1;
    }

    symbols
}

/// Translated text as one string, for the horizontal display
pub fn to_runes(text: &str) -> String {
    translate(text).concat()
}

/// Runes to show for `text`: the translation, or `fallback` when it is empty
pub fn display_runes_with(text: &str, fallback: &str) -> String {
    let runes = to_runes(text);
    if runes.is_empty() {
        fallback.to_string()
    } else {
        runes
    }
}

/// [`display_runes_with`] using the default fallback ᛁᚱᛗᛖᚠ
pub fn display_runes(text: &str) -> String {
    display_runes_with(text, DEFAULT_FALLBACK_RUNES)
}
