//! Rune Column WASM API
//!
//! Everything JavaScript calls lives here. The modules below only translate
//! between the DOM and [`crate::column::RuneColumn`]; no layout or
//! transliteration logic is implemented at this layer.
//!
//! # Module Structure
//!
//! - `helpers`: logging macros, serialization and element lookup
//! - `mount`: `mountRuneColumn` and the `RuneColumnHandle` it returns
//! - `surface_sync`: canvas backing store vs. device pixel ratio
//! - `translate`: direct access to the transliterator

pub mod helpers;
pub mod mount;
pub mod surface_sync;
pub mod translate;

pub use mount::{mount_rune_column, RuneColumnHandle};
pub use translate::{display_runes, translate_symbols, translate_to_runes};
