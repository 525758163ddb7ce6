//! Host collaborator interface.
//!
//! The tracker never talks to a window system directly. Whatever owns the
//! rendered view implements [`HostView`] to report its size, the size of the
//! scene it draws, and where each live touch currently is.

#[cfg(test)]
#[path = "view_test.rs"]
pub(crate) mod view_test;

use std::fmt::Debug;

use crate::geometry::{Point, Size};
use crate::touch::TouchPhase;

pub trait HostView {
    /// Opaque, comparable identity of a touch for its whole lifetime.
    type TouchId: Copy + Eq + Debug;

    /// Current size of the visible viewport.
    fn viewport_size(&self) -> Size;

    /// Native size of the rendered content, or `None` for an empty scene.
    fn content_size(&self) -> Option<Size>;

    /// Current location of `touch` in view-local coordinates.
    fn touch_location(&self, touch: Self::TouchId) -> Option<Point>;

    /// Current phase of `touch`.
    fn touch_phase(&self, touch: Self::TouchId) -> TouchPhase;

    /// Ask the host to deliver simultaneous touches.
    fn enable_multi_touch(&mut self);
}
