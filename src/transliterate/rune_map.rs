//! Latin → Elder Futhark lookup tables
//!
//! Accented vowels map to the rune of their base letter. `x` is the only entry
//! that expands to two runes.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Two-character sequences that merge into a single rune.
/// Checked before any single-character lookup at the same position.
pub const DIGRAPHS: [(&str, &str); 2] = [("th", "ᚦ"), ("ng", "ᛜ")];

const SINGLE_ENTRIES: &[(char, &str)] = &[
    ('a', "ᚨ"), ('á', "ᚨ"), ('ä', "ᚨ"),
    ('b', "ᛒ"),
    ('c', "ᚲ"), ('k', "ᚲ"), ('q', "ᚲ"),
    ('d', "ᛞ"),
    ('e', "ᛖ"), ('é', "ᛖ"),
    ('f', "ᚠ"),
    ('g', "ᚷ"),
    ('h', "ᚺ"),
    ('i', "ᛁ"), ('í', "ᛁ"), ('y', "ᛁ"),
    ('j', "ᛃ"),
    ('l', "ᛚ"),
    ('m', "ᛗ"),
    ('n', "ᚾ"),
    ('o', "ᛟ"), ('ó', "ᛟ"), ('ö', "ᛟ"),
    ('p', "ᛈ"),
    ('r', "ᚱ"),
    ('s', "ᛊ"),
    ('t', "ᛏ"),
    ('u', "ᚢ"), ('ú', "ᚢ"),
    ('v', "ᚹ"), ('w', "ᚹ"),
    ('x', "ᚲᛊ"),
    ('z', "ᛉ"),
    ('æ', "ᛇ"),
    ('þ', "ᚦ"), ('ð', "ᚦ"),
    ('ŋ', "ᛜ"),
];

static SINGLE_MAP: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| SINGLE_ENTRIES.iter().copied().collect());

/// Rune for a single lowercase character, if it has one
pub fn rune_for_char(c: char) -> Option<&'static str> {
    SINGLE_MAP.get(&c).copied()
}

/// Rune for a two-character digraph, if the pair is one
pub fn rune_for_digraph(first: char, second: char) -> Option<&'static str> {
    DIGRAPHS.iter().find_map(|(pair, rune)| {
        let mut chars = pair.chars();
        (chars.next() == Some(first) && chars.next() == Some(second)).then_some(*rune)
    })
}
