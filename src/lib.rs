//! Rune Column WASM Module
//!
//! Transliterates Latin text into Elder Futhark runes and draws the result as
//! a vertical, hand-adjustable glyph column on a canvas, alongside a plain
//! inline rendering.

pub mod api;
pub mod column;
pub mod config;
pub mod error;
pub mod interaction;
pub mod models;
pub mod renderers;
pub mod transliterate;

// Re-export commonly used types
pub use column::RuneColumn;
pub use config::RenderConfig;
pub use error::RuneError;
pub use models::*;
pub use renderers::{ColumnLayout, GlyphSurface, VerticalLayoutEngine};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger already set: {}", err).into());
        }
    }

    log::info!("Rune column WASM module initialized");
}
