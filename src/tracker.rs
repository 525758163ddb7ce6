//! Gesture state machine: touch batches in, clamped view transforms out.
//!
//! DESIGN
//! ======
//! The tracker holds a committed [`ZoomState`] and the active touch samples.
//! While fingers move, the delta between each sample's frozen start point and
//! its live location is folded onto the committed state and emitted, but the
//! committed state itself stays put. Whenever a finger joins or leaves, the
//! currently displayed state becomes the new committed state and every
//! surviving touch is re-sampled at its current location, so the next move
//! starts from a zero delta and the view never jumps.
//!
//! With two or more touches only the first two (in acquisition order) shape
//! the gesture; the first one is the pivot that stays pinned under its finger.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use tracing::{debug, trace, warn};

use crate::config::{GestureConfig, ZoomLimits};
use crate::geometry::{Point, Size};
use crate::touch::TouchSample;
use crate::transform::Transform;
use crate::view::HostView;
use crate::zoom::{Bounds, ZoomState};

/// Callback receiving every emitted transform.
pub type OnChange = Box<dyn FnMut(Transform)>;

/// Whether a gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// No touches are being tracked.
    Idle,
    /// At least one touch is down; deltas are measured from fixed start points.
    Tracking { touches: usize },
}

/// Folds multi-touch input from a [`HostView`] into a single view transform.
///
/// Constructing a tracker binds it to its view and change callback, so there
/// is no unbound state in which events could arrive.
pub struct GestureTracker<V: HostView> {
    view: V,
    on_change: OnChange,
    touches: Vec<TouchSample<V::TouchId>>,
    zoom: ZoomState,
    config: GestureConfig,
    limits: ZoomLimits,
}

impl<V: HostView> GestureTracker<V> {
    /// Bind a tracker to `view`, reporting transforms to `on_change`.
    ///
    /// Nothing is tracked until [`enable`](Self::enable) is called.
    pub fn new(view: V, on_change: impl FnMut(Transform) + 'static) -> Self {
        Self {
            view,
            on_change: Box::new(on_change),
            touches: Vec::new(),
            zoom: ZoomState::IDENTITY,
            config: GestureConfig::DISABLED,
            limits: ZoomLimits::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GestureConfig) -> Self {
        self.enable(config);
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: ZoomLimits) -> Self {
        self.limits = limits;
        self
    }

    // --- Configuration ---

    /// Replace the tracked gesture features.
    ///
    /// Scale or rotate tracking asks the host for multi-touch delivery.
    pub fn enable(&mut self, config: GestureConfig) {
        self.config = config;
        if config.needs_multi_touch() {
            self.view.enable_multi_touch();
        }
        debug!(pan = config.pan, scale = config.scale, rotate = config.rotate, "gestures enabled");
    }

    /// Stop tracking every feature. Touches are still recorded.
    pub fn disable(&mut self) {
        self.config = GestureConfig::DISABLED;
        debug!("gestures disabled");
    }

    pub fn set_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
    }

    /// Override any subset of the committed state and emit the result.
    ///
    /// Values are taken as given: programmatic zoom is not clamped.
    pub fn set(&mut self, offset: Option<Size>, scale: Option<f64>, angle: Option<f64>) {
        self.zoom = ZoomState {
            offset: offset.unwrap_or(self.zoom.offset),
            scale: scale.unwrap_or(self.zoom.scale),
            angle: angle.unwrap_or(self.zoom.angle),
        };
        debug!(zoom = ?self.zoom, "zoom set");
        self.emit(self.zoom);
    }

    // --- Touch events ---

    /// New touches arrived. Commits the displayed state and rebases every touch.
    pub fn touches_began(&mut self, touches: &[V::TouchId]) {
        self.zoom = self.gesture_zoom();
        self.touches = self.touches.iter().filter_map(|t| t.rebase(&self.view)).collect();

        for &id in touches {
            if self.touches.iter().any(|t| t.id() == id) {
                continue;
            }
            match TouchSample::acquire(id, &self.view) {
                Some(sample) => self.touches.push(sample),
                None => debug!(touch = ?id, "began touch has no location; skipped"),
            }
        }
        debug!(began = ?touches, active = self.touches.len(), "touches began");
    }

    /// Touches moved. Emits the committed state with the live gesture folded in.
    ///
    /// If any tracked touch ended without a matching end event, the move acts
    /// as an end: the tracker rebases and emits the new committed state.
    pub fn touches_moved(&mut self, _touches: &[V::TouchId]) {
        let zoom = match self.drop_ended(&[]) {
            Some(committed) => committed,
            None => self.gesture_zoom(),
        };
        trace!(zoom = ?zoom, "touches moved");
        self.emit(zoom);
    }

    /// Touches lifted or were cancelled. Commits and rebases the survivors.
    pub fn touches_ended(&mut self, touches: &[V::TouchId]) {
        self.drop_ended(touches);
    }

    // --- Queries ---

    /// The committed state (excludes any in-flight move delta).
    #[must_use]
    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.zoom.to_transform()
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    #[must_use]
    pub fn activity(&self) -> Activity {
        match self.touches.len() {
            0 => Activity::Idle,
            touches => Activity::Tracking { touches },
        }
    }

    #[must_use]
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access for hosts that refresh live touch data before forwarding events.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    // --- Internals ---

    /// Remove touches listed in `ended` or whose phase says they are gone.
    ///
    /// Returns the new committed state when anything was removed.
    fn drop_ended(&mut self, ended: &[V::TouchId]) -> Option<ZoomState> {
        let survivors: Vec<V::TouchId> = self
            .touches
            .iter()
            .map(TouchSample::id)
            .filter(|id| !ended.contains(id) && self.view.touch_phase(*id).is_active())
            .collect();
        if survivors.len() == self.touches.len() {
            return None;
        }

        self.zoom = self.gesture_zoom();
        self.touches = survivors
            .into_iter()
            .filter_map(|id| TouchSample::acquire(id, &self.view))
            .collect();
        debug!(active = self.touches.len(), zoom = ?self.zoom, "touches ended; rebased");
        Some(self.zoom)
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.view.viewport_size(), self.view.content_size())
    }

    /// The committed state with the live gesture applied.
    fn gesture_zoom(&self) -> ZoomState {
        let config = self.config;
        let (first, second) = match self.touches.as_slice() {
            [] => return self.zoom,
            [only] => {
                if !config.pan {
                    return self.zoom;
                }
                let delta = only.current(&self.view) - only.start();
                return self.zoom.pan(delta, &self.bounds());
            }
            [first, second, ..] => (first, second),
        };

        let (s1, e1) = (first.start(), first.current(&self.view));
        let (s2, e2) = (second.start(), second.current(&self.view));

        let scale = if config.scale { pinch_ratio(s1, s2, e1, e2) } else { 1.0 };
        let angle = if config.rotate { (e1 - e2).angle() - (s1 - s2).angle() } else { 0.0 };
        let offset = if config.pan { pivot_offset(s1, e1, scale, angle) } else { Size::ZERO };

        ZoomState::new(offset, scale, angle).compose(&self.zoom, &self.bounds(), self.limits)
    }

    fn emit(&mut self, zoom: ZoomState) {
        (self.on_change)(zoom.to_transform());
    }
}

/// Ratio of current to starting finger distance.
///
/// Coincident start points leave the ratio undefined; the frame keeps scale 1.
fn pinch_ratio(s1: Point, s2: Point, e1: Point, e2: Point) -> f64 {
    let start = s1.distance(s2);
    let ratio = e1.distance(e2) / start;
    if ratio.is_finite() {
        ratio
    } else {
        warn!(start_distance = start, "pinch started from coincident points; scale held");
        1.0
    }
}

/// Translation that lands `start` exactly on `end` after scaling and rotating.
fn pivot_offset(start: Point, end: Point, scale: f64, angle: f64) -> Size {
    let (sin, cos) = angle.sin_cos();
    Size {
        w: end.x - scale * (start.x * cos - start.y * sin),
        h: end.y - scale * (start.x * sin + start.y * cos),
    }
}
