//! Attaches a [`RuneColumn`] to the page
//!
//! `mountRuneColumn` looks up the text input, the horizontal display and the
//! canvas by id, wires every DOM event to the matching `RuneColumn` method
//! and performs the initial sync and render. Shared state lives in an
//! `Rc<RefCell<_>>`; event closures are leaked for the lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Element, Event, EventTarget, HtmlCanvasElement,
    HtmlInputElement, MouseEvent, TouchEvent,
};

use crate::api::helpers::{deserialize, document, element_by_id, serialize, to_js_error};
use crate::api::surface_sync::sync_backing_store;
use crate::column::RuneColumn;
use crate::config::RenderConfig;
use crate::error::{Result, RuneError};
use crate::models::SurfacePoint;
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

/// Column state plus the elements it reads from and draws into
struct MountedColumn {
    column: RuneColumn,
    input: HtmlInputElement,
    horizontal: Element,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl MountedColumn {
    fn update_horizontal(&self) {
        let runes = self.column.horizontal_text();
        self.horizontal.set_text_content(Some(runes.as_str()));
    }

    fn redraw(&mut self) -> Result<()> {
        self.column.render(&mut self.context)?;
        Ok(())
    }

    /// Input changed: retranslate, then refresh both displays
    fn on_input(&mut self) -> Result<()> {
        self.column.set_text(&self.input.value());
        self.update_horizontal();
        self.redraw()
    }

    /// Resize, orientation change or first mount
    fn on_resize(&mut self) -> Result<()> {
        let size = sync_backing_store(&self.canvas, &self.context)?;
        self.column.resize(size);
        self.redraw()?;
        self.update_horizontal();
        Ok(())
    }

    fn local_point(&self, client_x: f64, client_y: f64) -> SurfacePoint {
        let rect = self.canvas.get_bounding_client_rect();
        SurfacePoint::from_client(client_x, client_y, rect.left(), rect.top())
    }

    fn on_press(&mut self, client_x: f64, client_y: f64) {
        let point = self.local_point(client_x, client_y);
        if self.column.pointer_down(point) {
            wasm_log!("drag started on row {:?}", self.column.drag().target());
        } else if !self.column.drag().is_dragging() {
            wasm_warn!("press at ({:.1}, {:.1}) hit no row", point.x, point.y);
        }
    }

    /// Returns true when a drag consumed the move
    fn on_move(&mut self, client_x: f64, client_y: f64) -> Result<bool> {
        let point = self.local_point(client_x, client_y);
        self.column.pointer_move(point.x, &mut self.context)
    }

    fn on_release(&mut self) {
        self.column.pointer_up();
    }
}

fn mouse_client_point(event: &Event) -> (f64, f64) {
    let mouse = event.unchecked_ref::<MouseEvent>();
    (mouse.client_x() as f64, mouse.client_y() as f64)
}

/// First active touch, or the first changed touch once all fingers lifted
fn touch_client_point(event: &Event) -> Option<(f64, f64)> {
    let touch_event = event.unchecked_ref::<TouchEvent>();
    let touch = touch_event
        .touches()
        .get(0)
        .or_else(|| touch_event.changed_touches().get(0))?;
    Some((touch.client_x() as f64, touch.client_y() as f64))
}

/// Register a non-passive listener so handlers may call `preventDefault`
fn listen(target: &EventTarget, event_type: &str, handler: impl FnMut(Event) + 'static) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(RuneError::dom)?;
    closure.forget();
    Ok(())
}

fn log_failure(context: &str, result: Result<()>) {
    if let Err(err) = result {
        wasm_error!("{}: {}", context, err);
    }
}

fn attach_listeners(state: &Rc<RefCell<MountedColumn>>) -> Result<()> {
    let (input, canvas) = {
        let mounted = state.borrow();
        (mounted.input.clone(), mounted.canvas.clone())
    };

    {
        let state = state.clone();
        listen(&input, "input", move |_event| {
            log_failure("input update failed", state.borrow_mut().on_input());
        })?;
    }

    for event_type in ["mousedown", "touchstart"] {
        let state = state.clone();
        let is_touch = event_type == "touchstart";
        listen(&canvas, event_type, move |event| {
            event.prevent_default();
            let point = if is_touch {
                touch_client_point(&event)
            } else {
                Some(mouse_client_point(&event))
            };
            if let Some((x, y)) = point {
                state.borrow_mut().on_press(x, y);
            }
        })?;
    }

    for event_type in ["mousemove", "touchmove"] {
        let state = state.clone();
        let is_touch = event_type == "touchmove";
        listen(&canvas, event_type, move |event| {
            let point = if is_touch {
                touch_client_point(&event)
            } else {
                Some(mouse_client_point(&event))
            };
            let Some((x, y)) = point else {
                return;
            };
            match state.borrow_mut().on_move(x, y) {
                Ok(true) => event.prevent_default(),
                Ok(false) => {}
                Err(err) => wasm_error!("drag redraw failed: {}", err),
            }
        })?;
    }

    for event_type in ["mouseup", "mouseleave", "touchend", "touchcancel"] {
        let state = state.clone();
        listen(&canvas, event_type, move |_event| {
            state.borrow_mut().on_release();
        })?;
    }

    let window: EventTarget = web_sys::window().ok_or(RuneError::NoWindow)?.into();
    for event_type in ["resize", "orientationchange"] {
        let state = state.clone();
        listen(&window, event_type, move |_event| {
            log_failure("surface sync failed", state.borrow_mut().on_resize());
        })?;
    }

    Ok(())
}

fn mount(input_id: &str, horizontal_id: &str, canvas_id: &str, config: RenderConfig) -> Result<RuneColumnHandle> {
    let document = document()?;
    let input: HtmlInputElement = element_by_id(&document, input_id, "HtmlInputElement")?;
    let horizontal: Element = element_by_id(&document, horizontal_id, "Element")?;
    let canvas: HtmlCanvasElement = element_by_id(&document, canvas_id, "HtmlCanvasElement")?;
    let context = canvas
        .get_context("2d")
        .map_err(RuneError::dom)?
        .ok_or(RuneError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| RuneError::ContextUnavailable)?;

    let mut column = RuneColumn::new(config);
    column.set_text(&input.value());

    let state = Rc::new(RefCell::new(MountedColumn {
        column,
        input,
        horizontal,
        canvas,
        context,
    }));

    attach_listeners(&state)?;
    state.borrow_mut().on_resize()?;

    Ok(RuneColumnHandle { inner: state })
}

/// Mount the rune column onto existing page elements.
///
/// # Parameters
/// - `input_id`: id of the `<input>` holding Latin text
/// - `horizontal_id`: id of the element showing the inline rune string
/// - `canvas_id`: id of the `<canvas>` for the vertical column
/// - `config`: optional partial `RenderConfig` object (camelCase keys)
#[wasm_bindgen(js_name = mountRuneColumn)]
pub fn mount_rune_column(
    input_id: &str,
    horizontal_id: &str,
    canvas_id: &str,
    config: JsValue,
) -> Result<RuneColumnHandle, JsValue> {
    wasm_info!(
        "mountRuneColumn called: input=#{}, horizontal=#{}, canvas=#{}",
        input_id,
        horizontal_id,
        canvas_id
    );

    let config = if config.is_undefined() || config.is_null() {
        RenderConfig::default()
    } else {
        deserialize::<RenderConfig>(config, "Config deserialization error")?
    };
    config.validate().map_err(to_js_error)?;

    let handle = mount(input_id, horizontal_id, canvas_id, config).map_err(to_js_error)?;
    wasm_info!("rune column mounted");
    Ok(handle)
}

/// JavaScript handle to a mounted column
#[wasm_bindgen]
pub struct RuneColumnHandle {
    inner: Rc<RefCell<MountedColumn>>,
}

#[wasm_bindgen]
impl RuneColumnHandle {
    /// Repaint the column
    pub fn redraw(&self) -> Result<(), JsValue> {
        self.inner.borrow_mut().redraw().map_err(to_js_error)
    }

    /// Replace the input text programmatically and refresh both displays
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&self, text: &str) -> Result<(), JsValue> {
        let mut mounted = self.inner.borrow_mut();
        mounted.input.set_value(text);
        mounted.on_input().map_err(to_js_error)
    }

    /// Zero every manual offset and repaint
    #[wasm_bindgen(js_name = resetOffsets)]
    pub fn reset_offsets(&self) -> Result<(), JsValue> {
        let mut mounted = self.inner.borrow_mut();
        mounted.column.reset_offsets();
        mounted.redraw().map_err(to_js_error)
    }

    /// Manual offsets in row order
    pub fn offsets(&self) -> Vec<f64> {
        self.inner.borrow().column.offsets().as_slice().to_vec()
    }

    /// Layout from the most recent render, or `null` before the first one
    pub fn layout(&self) -> Result<JsValue, JsValue> {
        match self.inner.borrow().column.layout() {
            Some(layout) => serialize(layout, "Layout serialization error"),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = glyphCount)]
    pub fn glyph_count(&self) -> usize {
        self.inner.borrow().column.glyphs().len()
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().column.drag().is_dragging()
    }
}
