//! JavaScript access to the transliterator

use wasm_bindgen::prelude::*;

use crate::api::helpers::serialize;
use crate::transliterate;

/// Translate Latin text into runes. Empty input gives an empty string.
#[wasm_bindgen(js_name = translateToRunes)]
pub fn translate_to_runes(text: &str) -> String {
    transliterate::to_runes(text)
}

/// Runes as shown in the horizontal display (ᛁᚱᛗᛖᚠ for empty input)
#[wasm_bindgen(js_name = displayRunes)]
pub fn display_runes(text: &str) -> String {
    transliterate::display_runes(text)
}

/// Translated symbols as a JS array, one entry per consumed input unit
#[wasm_bindgen(js_name = translateSymbols)]
pub fn translate_symbols(text: &str) -> Result<JsValue, JsValue> {
    serialize(&transliterate::translate(text), "Symbol serialization error")
}
