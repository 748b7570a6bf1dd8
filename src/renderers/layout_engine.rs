//! Layout Engine - positions runes in a single vertical column
//!
//! All glyphs in one render share a size derived from the glyph count and the
//! surface height. The column is as wide as its widest (width-corrected)
//! glyph plus padding and is centered on the surface; rows are spaced by a
//! fixed fraction of the glyph size and centered vertically. Per-glyph metric
//! corrections and manual offsets are then applied on top of the shared left
//! edge.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::models::{GlyphSequence, SurfaceSize, UserOffsets};

use super::display_list::{ColumnLayout, PlacedGlyph, RowBand};
use super::metrics::metrics_for;
use super::surface::GlyphSurface;

/// Computes and paints the vertical rune column
#[derive(Clone, Debug, Default)]
pub struct VerticalLayoutEngine {
    config: RenderConfig,
}

impl VerticalLayoutEngine {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Uniform glyph size: `floor(height / count * size_factor)` clamped to
    /// the configured bounds. A count of zero yields the maximum size on any
    /// surface with positive height.
    pub fn glyph_size(&self, count: usize, height: f64) -> f64 {
        let raw = (height / count as f64 * self.config.size_factor).floor();
        if raw.is_nan() {
            return self.config.min_glyph_size;
        }
        raw.clamp(self.config.min_glyph_size, self.config.max_glyph_size)
    }

    /// Distance between consecutive baselines at a glyph size
    pub fn line_advance(&self, glyph_size: f64) -> f64 {
        glyph_size * self.config.line_height_factor
    }

    /// Vertical bands for `count` rows on a surface of `height`.
    ///
    /// Needs no text measurement, so pointer hit-testing can use it directly.
    pub fn row_bands(&self, count: usize, height: f64) -> Vec<RowBand> {
        let advance = self.line_advance(self.glyph_size(count, height));
        let total_height = count as f64 * advance;
        let first_baseline = (height - total_height) / 2.0 + advance / 2.0;

        (0..count)
            .map(|index| {
                let baseline = first_baseline + index as f64 * advance;
                RowBand {
                    index,
                    top: baseline - advance / 2.0,
                    baseline,
                    bottom: baseline + advance / 2.0,
                }
            })
            .collect()
    }

    /// Resolve every glyph position.
    ///
    /// Sets the font and text style on `surface` so that measurement happens
    /// at the size the glyphs will be drawn at. Offsets missing for an index
    /// count as zero.
    pub fn compute_layout<S: GlyphSurface + ?Sized>(
        &self,
        glyphs: &GlyphSequence,
        size: SurfaceSize,
        offsets: &UserOffsets,
        surface: &mut S,
    ) -> Result<ColumnLayout> {
        let glyph_size = self.glyph_size(glyphs.len(), size.height);
        let font = self.config.font_for_size(glyph_size);

        surface.set_font(&font);
        surface.set_fill_color(&self.config.fill_color);
        surface.set_text_baseline("middle");
        surface.set_text_align("left");

        let mut content_width: f64 = 0.0;
        let mut buf = [0u8; 4];
        for glyph in glyphs.iter() {
            let natural = surface.measure_text(glyph.encode_utf8(&mut buf))?;
            content_width = content_width.max(natural * metrics_for(glyph).width_scale);
        }

        let padding = self.config.column_padding;
        let column_width = content_width + padding * 2.0;
        let column_left = (size.width - column_width) / 2.0;
        let content_left = column_left + padding;

        let rows = self.row_bands(glyphs.len(), size.height);
        let placed = glyphs
            .iter()
            .zip(rows.iter())
            .map(|(glyph, row)| {
                let metrics = metrics_for(glyph);
                let user_offset = offsets.get(row.index);
                PlacedGlyph {
                    glyph,
                    x: content_left + metrics.pixel_offset(glyph_size) + user_offset,
                    y: row.baseline,
                    scale_x: metrics.width_scale,
                    user_offset,
                }
            })
            .collect();

        Ok(ColumnLayout {
            glyph_size,
            font,
            line_advance: self.line_advance(glyph_size),
            column_left,
            column_width,
            content_left,
            glyphs: placed,
            rows,
        })
    }

    /// Replay a computed layout onto the surface.
    ///
    /// Each glyph is drawn at the origin of its own translated and
    /// horizontally stretched frame, so the stretch is centered on the draw
    /// position rather than on the surface origin.
    pub fn paint<S: GlyphSurface + ?Sized>(&self, layout: &ColumnLayout, surface: &mut S) -> Result<()> {
        let mut buf = [0u8; 4];
        for placed in &layout.glyphs {
            surface.save();
            let drawn = Self::paint_glyph(placed, surface, &mut buf);
            surface.restore();
            drawn?;
        }
        Ok(())
    }

    fn paint_glyph<S: GlyphSurface + ?Sized>(
        placed: &PlacedGlyph,
        surface: &mut S,
        buf: &mut [u8; 4],
    ) -> Result<()> {
        surface.translate(placed.x, placed.y)?;
        surface.scale(placed.scale_x, 1.0)?;
        surface.fill_text(placed.glyph.encode_utf8(buf), 0.0, 0.0)
    }

    /// Full clear-and-repaint of the column.
    ///
    /// Offsets are reconciled first: if their length no longer matches the
    /// glyph count they are reset to zeros before anything is drawn.
    pub fn render<S: GlyphSurface + ?Sized>(
        &self,
        glyphs: &GlyphSequence,
        size: SurfaceSize,
        offsets: &mut UserOffsets,
        surface: &mut S,
    ) -> Result<ColumnLayout> {
        offsets.reconcile(glyphs.len());
        surface.clear(size);

        let layout = self.compute_layout(glyphs, size, offsets, surface)?;
        self.paint(&layout, surface)?;
        Ok(layout)
    }
}
