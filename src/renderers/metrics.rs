//! Per-rune visual corrections
//!
//! Noto Sans Runic glyphs have uneven side bearings and advance widths, so a
//! column of left-aligned runes looks ragged. Each entry nudges a rune
//! horizontally (as a percentage of glyph size) and stretches it
//! horizontally. Runes without an entry are drawn untouched.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Horizontal correction for one rune
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GlyphMetrics {
    /// Shift as a percentage of glyph size, positive to the right
    pub offset_percent: f64,
    /// Horizontal stretch factor (vertical scale is always 1)
    pub width_scale: f64,
}

impl GlyphMetrics {
    pub const NEUTRAL: GlyphMetrics = GlyphMetrics {
        offset_percent: 0.0,
        width_scale: 1.0,
    };

    /// Pixel shift for a given glyph size
    pub fn pixel_offset(&self, glyph_size: f64) -> f64 {
        self.offset_percent / 100.0 * glyph_size
    }
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

const OFFSET_PERCENTS: &[(char, f64)] = &[
    ('ᚾ', -11.0),
    ('ᚷ', 9.0),
    ('ᛟ', 5.0),
    ('ᛊ', 0.0),
    ('ᛖ', -0.8),
    ('ᛞ', -0.8),
    ('ᛁ', -0.1),
    ('ᛉ', 9.0),
    ('ᛇ', 12.5),
    ('ᛏ', 13.0),
    ('ᚢ', -1.5),
];

const WIDTH_SCALES: &[(char, f64)] = &[
    ('ᛖ', 1.055),
    ('ᚷ', 1.0),
    ('ᛞ', 1.06),
    ('ᛉ', 0.94),
    ('ᛟ', 1.14),
    ('ᛏ', 0.97),
    ('ᚢ', 1.135),
];

static METRICS: Lazy<HashMap<char, GlyphMetrics>> = Lazy::new(|| {
    let mut table: HashMap<char, GlyphMetrics> = HashMap::new();
    for &(rune, offset_percent) in OFFSET_PERCENTS {
        table.entry(rune).or_default().offset_percent = offset_percent;
    }
    for &(rune, width_scale) in WIDTH_SCALES {
        table.entry(rune).or_default().width_scale = width_scale;
    }
    table
});

/// Corrections for `glyph`, neutral when the table has no entry
pub fn metrics_for(glyph: char) -> GlyphMetrics {
    METRICS.get(&glyph).copied().unwrap_or(GlyphMetrics::NEUTRAL)
}
