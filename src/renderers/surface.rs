//! Drawing surface abstraction
//!
//! The layout engine only needs a handful of 2D context calls. They are
//! collected in [`GlyphSurface`] so the engine runs against the browser
//! canvas in production and against recording fakes in tests.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::error::{Result, RuneError};
use crate::models::SurfaceSize;

/// The subset of a 2D canvas context used to draw the rune column.
///
/// Coordinates are logical (CSS) pixels; any device pixel ratio scaling is
/// already part of the surface's base transform.
pub trait GlyphSurface {
    /// Clear the whole visible area
    fn clear(&mut self, size: SurfaceSize);

    fn set_font(&mut self, font: &str);

    fn set_fill_color(&mut self, color: &str);

    fn set_text_baseline(&mut self, baseline: &str);

    fn set_text_align(&mut self, align: &str);

    /// Advance width of `text` in the current font
    fn measure_text(&mut self, text: &str) -> Result<f64>;

    fn save(&mut self);

    fn restore(&mut self);

    fn translate(&mut self, x: f64, y: f64) -> Result<()>;

    fn scale(&mut self, x: f64, y: f64) -> Result<()>;

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<()>;
}

fn js_err(err: JsValue) -> RuneError {
    RuneError::surface(err)
}

// Inherent methods share names with the trait; call them fully qualified so
// the trait impl never recurses into itself.
impl GlyphSurface for CanvasRenderingContext2d {
    fn clear(&mut self, size: SurfaceSize) {
        CanvasRenderingContext2d::clear_rect(self, 0.0, 0.0, size.width, size.height);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn set_fill_color(&mut self, color: &str) {
        CanvasRenderingContext2d::set_fill_style_str(self, color);
    }

    fn set_text_baseline(&mut self, baseline: &str) {
        CanvasRenderingContext2d::set_text_baseline(self, baseline);
    }

    fn set_text_align(&mut self, align: &str) {
        CanvasRenderingContext2d::set_text_align(self, align);
    }

    fn measure_text(&mut self, text: &str) -> Result<f64> {
        CanvasRenderingContext2d::measure_text(self, text)
            .map(|metrics| metrics.width())
            .map_err(js_err)
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<()> {
        CanvasRenderingContext2d::translate(self, x, y).map_err(js_err)
    }

    fn scale(&mut self, x: f64, y: f64) -> Result<()> {
        CanvasRenderingContext2d::scale(self, x, y).map_err(js_err)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<()> {
        CanvasRenderingContext2d::fill_text(self, text, x, y).map_err(js_err)
    }
}
