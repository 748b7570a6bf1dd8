/// Rendering the rune column through a recording surface
mod common;

use common::{Call, RecordingSurface};
use rune_column_wasm::{RenderConfig, RuneColumn, SurfaceSize, VerticalLayoutEngine};

fn column(text: &str, width: f64, height: f64) -> RuneColumn {
    let mut column = RuneColumn::default();
    column.set_text(text);
    column.resize(SurfaceSize::new(width, height));
    column
}

#[test]
fn test_empty_input_draws_five_fallback_glyphs() {
    let mut column = column("", 300.0, 600.0);
    let mut surface = RecordingSurface::new();
    let layout = column.render(&mut surface).expect("render").clone();

    assert_eq!(column.horizontal_text(), "ᛁᚱᛗᛖᚠ");
    assert_eq!(layout.len(), 5);
    assert_eq!(surface.drawn_glyphs(), vec!["ᛁ", "ᚱ", "ᛗ", "ᛖ", "ᚠ"]);
}

#[test]
fn test_height_600_five_glyphs_size_120() {
    let mut column = column("", 300.0, 600.0);
    let mut surface = RecordingSurface::new();
    let layout = column.render(&mut surface).expect("render");

    assert_eq!(layout.glyph_size, 120.0);
    assert!(surface
        .calls
        .contains(&Call::Font("120px 'Noto Sans Runic', Arial, sans-serif".to_string())));
}

#[test]
fn test_glyph_size_formula_for_all_counts() {
    let engine = VerticalLayoutEngine::default();
    for n in 1..=60usize {
        for height in [10.0, 99.0, 333.0, 600.0, 1080.0] {
            let size = engine.glyph_size(n, height);
            assert!((20.0..=120.0).contains(&size));
            assert_eq!(size, (height / n as f64 * 1.2).floor().clamp(20.0, 120.0));
        }
    }
}

#[test]
fn test_every_render_starts_with_full_clear() {
    let mut column = column("rune", 200.0, 400.0);
    let mut surface = RecordingSurface::new();
    column.render(&mut surface).expect("first render");
    column.render(&mut surface).expect("second render");

    assert_eq!(surface.clear_count(), 2);
    let clear_positions: Vec<usize> = surface
        .calls
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c, Call::Clear(_)))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(clear_positions[0], 0);
    assert_eq!(surface.calls[0], Call::Clear(SurfaceSize::new(200.0, 400.0)));
}

#[test]
fn test_single_glyph_is_centered() {
    let mut column = column("f", 400.0, 400.0);
    let mut surface = RecordingSurface::new();
    let layout = column.render(&mut surface).expect("render");

    // ᚠ is neutral: size 120, measured 72 wide, column 72 + 40
    assert_eq!(layout.glyph_size, 120.0);
    assert!((layout.column_width - 112.0).abs() < 1e-9);
    assert!((layout.column_left - 144.0).abs() < 1e-9);
    assert!((layout.glyphs[0].x - 164.0).abs() < 1e-9);
    assert!((layout.glyphs[0].y - 200.0).abs() < 1e-9);
}

#[test]
fn test_length_change_resets_offsets() {
    let mut column = column("thing", 300.0, 600.0);
    let mut surface = RecordingSurface::new();
    column.render(&mut surface).expect("render");

    let row = column.layout().expect("layout").rows[1];
    assert!(column.pointer_down(rune_column_wasm::SurfacePoint::new(50.0, row.baseline)));
    column.pointer_move(80.0, &mut surface).expect("move");
    column.pointer_up();
    assert_eq!(column.offsets().get(1), 30.0);

    // Same glyph count: adjustments survive
    column.set_text("thong");
    column.render(&mut surface).expect("render");
    assert_eq!(column.offsets().get(1), 30.0);

    // Different glyph count: everything back to zero
    column.set_text("things");
    column.render(&mut surface).expect("render");
    assert_eq!(column.offsets().len(), 4);
    assert!(column.offsets().as_slice().iter().all(|v| *v == 0.0));
}

#[test]
fn test_custom_config_changes_geometry() {
    let config = RenderConfig::from_json(r#"{"lineHeightFactor": 1.0, "columnPadding": 0}"#)
        .expect("config");
    let mut column = RuneColumn::new(config);
    column.set_text("ab");
    column.resize(SurfaceSize::new(100.0, 100.0));

    let mut surface = RecordingSurface::new();
    let layout = column.render(&mut surface).expect("render");

    // floor(100 / 2 * 1.2) = 60
    assert_eq!(layout.glyph_size, 60.0);
    assert_eq!(layout.line_advance, 60.0);
    assert_eq!(layout.content_left, layout.column_left);
}

#[test]
fn test_layout_serializes_for_javascript() {
    let mut column = column("ok", 200.0, 200.0);
    let mut surface = RecordingSurface::new();
    let layout = column.render(&mut surface).expect("render");

    let json = serde_json::to_value(layout).expect("serialize");
    assert_eq!(json["glyphSize"], 120.0);
    assert_eq!(json["glyphs"][0]["glyph"], "ᛟ");
    assert_eq!(json["glyphs"][1]["scaleX"], 1.0);
    assert_eq!(json["rows"].as_array().map(Vec::len), Some(2));
}
