//! Keeps the canvas backing store in step with its displayed size
//!
//! The only code that touches the backing resolution. Everything else draws
//! in logical pixels; the device pixel ratio is folded into the context's
//! base transform here.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{Result, RuneError};
use crate::models::{backing_dimensions, effective_pixel_ratio, SurfaceSize};

/// Current device pixel ratio, 1 when unavailable
pub fn device_pixel_ratio() -> f64 {
    effective_pixel_ratio(web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0))
}

/// Displayed size of the canvas in CSS pixels
pub fn displayed_size(canvas: &HtmlCanvasElement) -> SurfaceSize {
    SurfaceSize::new(canvas.offset_width() as f64, canvas.offset_height() as f64)
}

/// Resize the backing buffer to displayed size × pixel ratio and reset the
/// base transform. Returns the logical size to lay out against.
///
/// Resizing the buffer resets context state, and the transform is set
/// absolutely, so repeated calls never compound the scale.
pub fn sync_backing_store(canvas: &HtmlCanvasElement, context: &CanvasRenderingContext2d) -> Result<SurfaceSize> {
    let size = displayed_size(canvas);
    let dpr = device_pixel_ratio();
    let (width, height) = backing_dimensions(size, dpr);

    canvas.set_width(width);
    canvas.set_height(height);
    context
        .set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
        .map_err(RuneError::surface)?;

    log::debug!(
        "surface sync: {}x{} css px at dpr {} -> {}x{} backing",
        size.width,
        size.height,
        dpr,
        width,
        height
    );
    Ok(size)
}
