//! Rune column state
//!
//! [`RuneColumn`] is the one place the mutable pieces live: the current glyph
//! sequence, the manual offsets, the drag gesture and the displayed surface
//! size. Each DOM event maps onto one method here; every method runs to
//! completion synchronously.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::interaction::DragController;
use crate::models::{GlyphSequence, SurfacePoint, SurfaceSize, UserOffsets};
use crate::renderers::{ColumnLayout, GlyphSurface, VerticalLayoutEngine};

/// Transliterated text, its vertical layout and the user's manual adjustments
#[derive(Clone, Debug)]
pub struct RuneColumn {
    engine: VerticalLayoutEngine,
    text: String,
    glyphs: GlyphSequence,
    offsets: UserOffsets,
    drag: DragController,
    size: SurfaceSize,
    layout: Option<ColumnLayout>,
}

impl RuneColumn {
    pub fn new(config: RenderConfig) -> Self {
        let glyphs = GlyphSequence::from_text("", &config.fallback_runes);
        let offsets = UserOffsets::new(config.offset_limit);
        Self {
            engine: VerticalLayoutEngine::new(config),
            text: String::new(),
            glyphs,
            offsets,
            drag: DragController::new(),
            size: SurfaceSize::default(),
            layout: None,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        self.engine.config()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn glyphs(&self) -> &GlyphSequence {
        &self.glyphs
    }

    pub fn offsets(&self) -> &UserOffsets {
        &self.offsets
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Layout from the most recent render
    pub fn layout(&self) -> Option<&ColumnLayout> {
        self.layout.as_ref()
    }

    /// Replace the input text and regenerate the glyph sequence.
    ///
    /// Offsets are left alone here; the next render discards them if the
    /// glyph count changed.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.glyphs = GlyphSequence::from_text(text, &self.engine.config().fallback_runes);
    }

    /// String for the horizontal display (fallback included)
    pub fn horizontal_text(&self) -> String {
        self.glyphs.as_text()
    }

    /// Record the displayed surface size in logical pixels
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    /// Clear and repaint the whole column
    pub fn render<S: GlyphSurface + ?Sized>(&mut self, surface: &mut S) -> Result<&ColumnLayout> {
        let layout = self
            .engine
            .render(&self.glyphs, self.size, &mut self.offsets, surface)?;
        Ok(&*self.layout.insert(layout))
    }

    /// Pointer pressed at a surface-local point. Returns true if a row was
    /// grabbed.
    pub fn pointer_down(&mut self, point: SurfacePoint) -> bool {
        let rows = self.engine.row_bands(self.glyphs.len(), self.size.height);
        self.drag.press(point, &rows, &self.offsets).is_some()
    }

    /// Pointer moved. Repaints synchronously when a drag is active and
    /// returns whether it did.
    pub fn pointer_move<S: GlyphSurface + ?Sized>(&mut self, x: f64, surface: &mut S) -> Result<bool> {
        if !self.drag.drag_to(x, &mut self.offsets) {
            return Ok(false);
        }
        self.render(surface)?;
        Ok(true)
    }

    /// Pointer released, left the surface, or the gesture was cancelled
    pub fn pointer_up(&mut self) {
        self.drag.release();
    }

    /// Zero every manual offset
    pub fn reset_offsets(&mut self) {
        self.offsets.reset();
    }
}

impl Default for RuneColumn {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
