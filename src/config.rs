//! Rendering configuration
//!
//! Every constant the column layout depends on lives here. The defaults are
//! the hand-tuned values for the Noto Sans Runic face; the host page may
//! override any of them through a JS object or a JSON string.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuneError};

/// Default font stack. Noto Sans Runic first, system fallbacks after.
pub const DEFAULT_FONT_FAMILY: &str = "'Noto Sans Runic', Arial, sans-serif";

/// Shown when the input translates to nothing.
pub const DEFAULT_FALLBACK_RUNES: &str = "ᛁᚱᛗᛖᚠ";

/// Layout and drawing parameters for the vertical column
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// CSS font family list used for every glyph
    pub font_family: String,

    /// CSS fill color for glyphs
    pub fill_color: String,

    /// Vertical advance between rows, as a fraction of glyph size
    pub line_height_factor: f64,

    /// Horizontal padding on each side of the column content
    pub column_padding: f64,

    /// Multiplier in `floor(height / count * size_factor)`
    pub size_factor: f64,

    pub min_glyph_size: f64,
    pub max_glyph_size: f64,

    /// Manual offsets are clamped to `[-offset_limit, offset_limit]`
    pub offset_limit: f64,

    /// Runes displayed when the input is empty
    pub fallback_runes: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            fill_color: "#ddd".to_string(),
            line_height_factor: 0.70,
            column_padding: 20.0,
            size_factor: 1.2,
            min_glyph_size: 20.0,
            max_glyph_size: 120.0,
            offset_limit: 100.0,
            fallback_runes: DEFAULT_FALLBACK_RUNES.to_string(),
        }
    }
}

impl RenderConfig {
    /// Parse a (possibly partial) JSON configuration and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a drawable column
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("lineHeightFactor", self.line_height_factor),
            ("sizeFactor", self.size_factor),
            ("minGlyphSize", self.min_glyph_size),
            ("maxGlyphSize", self.max_glyph_size),
            ("offsetLimit", self.offset_limit),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(RuneError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if !(self.column_padding.is_finite() && self.column_padding >= 0.0) {
            return Err(RuneError::InvalidConfig(format!(
                "columnPadding must be zero or positive, got {}",
                self.column_padding
            )));
        }

        if self.min_glyph_size > self.max_glyph_size {
            return Err(RuneError::InvalidConfig(format!(
                "minGlyphSize {} exceeds maxGlyphSize {}",
                self.min_glyph_size, self.max_glyph_size
            )));
        }

        if self.fallback_runes.is_empty() {
            return Err(RuneError::InvalidConfig(
                "fallbackRunes must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// CSS font shorthand for a glyph size in pixels
    pub fn font_for_size(&self, glyph_size: f64) -> String {
        format!("{}px {}", glyph_size, self.font_family)
    }
}
