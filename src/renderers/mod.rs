//! Rendering for the vertical rune column
//!
//! `layout_engine` turns a glyph sequence into a [`ColumnLayout`] and paints
//! it onto any [`GlyphSurface`]; `metrics` holds the per-rune corrections.

pub mod display_list;
pub mod layout_engine;
pub mod metrics;
pub mod surface;

pub use display_list::{row_at, ColumnLayout, PlacedGlyph, RowBand};
pub use layout_engine::VerticalLayoutEngine;
pub use metrics::{metrics_for, GlyphMetrics};
pub use surface::GlyphSurface;
