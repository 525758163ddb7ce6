//! Browser binding: a canvas element as the host view, DOM touch events as input.
//!
//! The host JavaScript layer forwards `touchstart` / `touchmove` / `touchend` /
//! `touchcancel` to [`WebZoom`] and applies the six-entry matrix it receives
//! (for example through `CanvasRenderingContext2D.setTransform`).

use std::collections::HashMap;

use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, TouchEvent, TouchList};

use crate::config::{GestureConfig, ZoomConfig};
use crate::error::ConfigError;
use crate::geometry::{Point, Size};
use crate::touch::TouchPhase;
use crate::tracker::GestureTracker;
use crate::transform::Transform;
use crate::view::HostView;

/// [`HostView`] over a canvas element.
///
/// Touch positions are cached from the last DOM event that mentioned them,
/// converted from client coordinates into the canvas's local space.
pub struct CanvasView {
    canvas: HtmlCanvasElement,
    content: Option<Size>,
    touches: HashMap<i32, (Point, TouchPhase)>,
}

impl CanvasView {
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, content: None, touches: HashMap::new() }
    }

    pub fn set_content_size(&mut self, content: Option<Size>) {
        self.content = content;
    }

    /// Cache every touch in `list` at `phase`, returning their identifiers.
    pub fn record(&mut self, list: &TouchList, phase: TouchPhase) -> Vec<i32> {
        let rect = self.canvas.get_bounding_client_rect();
        let mut ids = Vec::new();
        for index in 0..list.length() {
            let Some(touch) = list.get(index) else {
                continue;
            };
            let point = Point::new(
                f64::from(touch.client_x()) - rect.left(),
                f64::from(touch.client_y()) - rect.top(),
            );
            self.touches.insert(touch.identifier(), (point, phase));
            ids.push(touch.identifier());
        }
        ids
    }

    /// Forget touches that have been fully processed.
    pub fn release(&mut self, ids: &[i32]) {
        for id in ids {
            self.touches.remove(id);
        }
    }
}

impl HostView for CanvasView {
    type TouchId = i32;

    fn viewport_size(&self) -> Size {
        Size::new(f64::from(self.canvas.client_width()), f64::from(self.canvas.client_height()))
    }

    fn content_size(&self) -> Option<Size> {
        self.content
    }

    fn touch_location(&self, touch: i32) -> Option<Point> {
        self.touches.get(&touch).map(|(point, _)| *point)
    }

    fn touch_phase(&self, touch: i32) -> TouchPhase {
        self.touches.get(&touch).map_or(TouchPhase::Cancelled, |(_, phase)| *phase)
    }

    fn enable_multi_touch(&mut self) {
        // Stop the browser from claiming pinch and pan for itself.
        if let Err(err) = self.canvas.style().set_property("touch-action", "none") {
            warn!(error = ?err, "could not disable native touch handling");
        }
    }
}

/// Pinch / pan / rotate zoom for a canvas, exported to JavaScript.
#[wasm_bindgen]
pub struct WebZoom {
    tracker: GestureTracker<CanvasView>,
}

#[wasm_bindgen]
impl WebZoom {
    /// Bind to `canvas`; `on_change` receives `[a, b, c, d, e, f]` on every change.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, on_change: js_sys::Function) -> WebZoom {
        let tracker = GestureTracker::new(CanvasView::new(canvas), move |t| notify(&on_change, t));
        Self { tracker }
    }

    pub fn enable(&mut self, pan: bool, scale: bool, rotate: bool) {
        self.tracker.enable(GestureConfig::new(pan, scale, rotate));
    }

    pub fn disable(&mut self) {
        self.tracker.disable();
    }

    /// Apply a JSON [`ZoomConfig`].
    ///
    /// # Errors
    ///
    /// Returns `"<code>: <message>"` when the configuration is rejected.
    pub fn configure(&mut self, json: &str) -> Result<(), JsValue> {
        let config = ZoomConfig::from_json(json).map_err(config_error)?;
        self.tracker.set_limits(config.limits);
        self.tracker.enable(config.gestures);
        Ok(())
    }

    /// Programmatic zoom; omitted values keep their current setting.
    pub fn set(&mut self, offset_x: Option<f64>, offset_y: Option<f64>, scale: Option<f64>, angle: Option<f64>) {
        let current = self.tracker.zoom().offset;
        let offset = (offset_x.is_some() || offset_y.is_some())
            .then(|| Size::new(offset_x.unwrap_or(current.w), offset_y.unwrap_or(current.h)));
        self.tracker.set(offset, scale, angle);
    }

    pub fn set_content_size(&mut self, width: f64, height: f64) {
        self.tracker.view_mut().set_content_size(Some(Size::new(width, height)));
    }

    pub fn clear_content(&mut self) {
        self.tracker.view_mut().set_content_size(None);
    }

    /// Committed transform as CSS `matrix()` text.
    #[must_use]
    pub fn css(&self) -> String {
        self.tracker.transform().to_css()
    }

    pub fn touch_start(&mut self, event: &TouchEvent) {
        let ids = self.tracker.view_mut().record(&event.changed_touches(), TouchPhase::Began);
        self.tracker.touches_began(&ids);
    }

    pub fn touch_move(&mut self, event: &TouchEvent) {
        let ids = self.tracker.view_mut().record(&event.changed_touches(), TouchPhase::Moved);
        self.tracker.touches_moved(&ids);
    }

    pub fn touch_end(&mut self, event: &TouchEvent) {
        self.finish(event, TouchPhase::Ended);
    }

    pub fn touch_cancel(&mut self, event: &TouchEvent) {
        self.finish(event, TouchPhase::Cancelled);
    }
}

impl WebZoom {
    fn finish(&mut self, event: &TouchEvent, phase: TouchPhase) {
        let ids = self.tracker.view_mut().record(&event.changed_touches(), phase);
        self.tracker.touches_ended(&ids);
        self.tracker.view_mut().release(&ids);
    }
}

fn notify(callback: &js_sys::Function, transform: Transform) {
    let entries: js_sys::Array = transform.to_array().iter().map(|v| JsValue::from_f64(*v)).collect();
    if let Err(err) = callback.call1(&JsValue::NULL, &entries) {
        warn!(error = ?err, "zoom change callback threw");
    }
}

fn config_error(err: ConfigError) -> JsValue {
    JsValue::from_str(&format!("{}: {err}", err.error_code()))
}
