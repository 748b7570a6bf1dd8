//! Glyph sequence drawn in the vertical column

use serde::{Deserialize, Serialize};

use crate::transliterate::translate;

/// Ordered runes, one per drawn row.
///
/// Built from transliterated symbols split into characters, so a symbol such
/// as `ᚲᛊ` (from `x`) occupies two rows. Index is the only identity a glyph
/// has; nothing survives a rebuild except through position.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphSequence {
    glyphs: Vec<char>,
}

impl GlyphSequence {
    pub fn new(glyphs: Vec<char>) -> Self {
        Self { glyphs }
    }

    /// Split a rune string into one glyph per character
    pub fn from_runes(runes: &str) -> Self {
        Self {
            glyphs: runes.chars().collect(),
        }
    }

    /// Translate `text`, substituting `fallback` when nothing comes out
    pub fn from_text(text: &str, fallback: &str) -> Self {
        let glyphs: Vec<char> = translate(text)
            .iter()
            .flat_map(|symbol| symbol.chars())
            .collect();

        if glyphs.is_empty() {
            Self::from_runes(fallback)
        } else {
            Self { glyphs }
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.glyphs.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.iter().copied()
    }

    /// Concatenated glyphs, for the horizontal display
    pub fn as_text(&self) -> String {
        self.glyphs.iter().collect()
    }
}
