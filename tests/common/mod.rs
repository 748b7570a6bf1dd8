//! Recording surface shared by the integration tests

#![allow(dead_code)]

use rune_column_wasm::error::Result;
use rune_column_wasm::{GlyphSurface, SurfaceSize};

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear(SurfaceSize),
    Font(String),
    Fill(String, f64, f64),
    Translate(f64, f64),
    Scale(f64, f64),
    Save,
    Restore,
}

/// Measures every glyph as 60% of the current font size
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
    font_px: f64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every fill since the last clear
    pub fn drawn_glyphs(&self) -> Vec<String> {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, Call::Clear(_)))
            .map(|i| i + 1)
            .unwrap_or(0);
        self.calls[start..]
            .iter()
            .filter_map(|c| match c {
                Call::Fill(text, _, _) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Clear(_))).count()
    }
}

impl GlyphSurface for RecordingSurface {
    fn clear(&mut self, size: SurfaceSize) {
        self.calls.push(Call::Clear(size));
    }

    fn set_font(&mut self, font: &str) {
        self.font_px = font
            .split("px")
            .next()
            .and_then(|px| px.trim().parse().ok())
            .unwrap_or(0.0);
        self.calls.push(Call::Font(font.to_string()));
    }

    fn set_fill_color(&mut self, _color: &str) {}

    fn set_text_baseline(&mut self, _baseline: &str) {}

    fn set_text_align(&mut self, _align: &str) {}

    fn measure_text(&mut self, _text: &str) -> Result<f64> {
        Ok(self.font_px * 0.6)
    }

    fn save(&mut self) {
        self.calls.push(Call::Save);
    }

    fn restore(&mut self) {
        self.calls.push(Call::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<()> {
        self.calls.push(Call::Translate(x, y));
        Ok(())
    }

    fn scale(&mut self, x: f64, y: f64) -> Result<()> {
        self.calls.push(Call::Scale(x, y));
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<()> {
        self.calls.push(Call::Fill(text.to_string(), x, y));
        Ok(())
    }
}
