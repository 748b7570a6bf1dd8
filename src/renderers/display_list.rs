//! Display list for the vertical rune column
//!
//! The layout engine produces a [`ColumnLayout`] with every position already
//! resolved; painting just replays it. The same structure is handed to
//! JavaScript for inspection.

use serde::{Deserialize, Serialize};

/// Vertical extent of one row, used for hit-testing
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RowBand {
    pub index: usize,
    pub top: f64,
    /// Text baseline (the glyph's vertical middle)
    pub baseline: f64,
    pub bottom: f64,
}

impl RowBand {
    /// Inclusive at both edges, so a point on a shared edge belongs to the
    /// upper row when bands are scanned top to bottom.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom
    }
}

/// First row containing `y`, if any
pub fn row_at(rows: &[RowBand], y: f64) -> Option<usize> {
    rows.iter().find(|row| row.contains(y)).map(|row| row.index)
}

/// One glyph with its final draw position
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacedGlyph {
    pub glyph: char,
    /// Draw origin after metric and manual offsets
    pub x: f64,
    pub y: f64,
    /// Horizontal stretch applied around the draw origin
    pub scale_x: f64,
    /// Manual offset included in `x`
    pub user_offset: f64,
}

/// Fully resolved column geometry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLayout {
    /// Uniform size shared by every glyph
    pub glyph_size: f64,
    /// CSS font shorthand used for measuring and drawing
    pub font: String,
    /// Distance between consecutive baselines
    pub line_advance: f64,
    /// Left edge of the padded column
    pub column_left: f64,
    /// Column width including padding on both sides
    pub column_width: f64,
    /// Left edge of glyph content before per-glyph corrections
    pub content_left: f64,
    pub glyphs: Vec<PlacedGlyph>,
    pub rows: Vec<RowBand>,
}

impl ColumnLayout {
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Row index under a surface-local y coordinate
    pub fn row_at(&self, y: f64) -> Option<usize> {
        row_at(&self.rows, y)
    }
}
