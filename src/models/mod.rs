//! Data model for the rune column
//!
//! - `glyph`: the ordered glyph sequence derived from input text
//! - `offsets`: per-glyph manual horizontal offsets
//! - `geometry`: surface sizes and points

pub mod geometry;
pub mod glyph;
pub mod offsets;

pub use geometry::{backing_dimensions, effective_pixel_ratio, SurfacePoint, SurfaceSize};
pub use glyph::GlyphSequence;
pub use offsets::{UserOffsets, DEFAULT_OFFSET_LIMIT};
