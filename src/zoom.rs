//! Accumulated zoom state: offset, uniform scale and rotation.
//!
//! DESIGN
//! ======
//! A `ZoomState` is an immutable `(offset, scale, angle)` triple standing for
//! `translate(offset) · scale(scale) · rotate(angle)`. Restricting the view
//! transform to uniform scale plus rotation plus translation lets two states
//! compose without a matrix: scales multiply, angles add, and the inner
//! offset is carried through the outer rotation and scale.
//!
//! Composition clamps the scale first and then clamps the offset against the
//! clamped scale, so the offset bound always matches what will be rendered.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use crate::config::ZoomLimits;
use crate::geometry::Size;
use crate::transform::Transform;

/// Viewport and content extents the offset clamp is computed against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub viewport: Size,
    /// Native size of the rendered content; zero when the scene is empty.
    pub content: Size,
}

impl Bounds {
    /// Build bounds from host values, substituting a zero size for absent content.
    #[must_use]
    pub fn new(viewport: Size, content: Option<Size>) -> Self {
        Self { viewport, content: content.unwrap_or(Size::ZERO) }
    }
}

/// Offset / scale / angle triple applied on top of the identity view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub offset: Size,
    pub scale: f64,
    /// Rotation in radians. Never clamped.
    pub angle: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomState {
    pub const IDENTITY: Self = Self { offset: Size::ZERO, scale: 1.0, angle: 0.0 };

    #[must_use]
    pub fn new(offset: Size, scale: f64, angle: f64) -> Self {
        Self { offset, scale, angle }
    }

    /// `translate(offset) · scale(scale) · rotate(angle)`.
    #[must_use]
    pub fn to_transform(&self) -> Transform {
        Transform::translation(self.offset.w, self.offset.h)
            .scale(self.scale, self.scale)
            .rotate(self.angle)
    }

    /// Shift the offset by `delta`, keeping scale and angle.
    #[must_use]
    pub fn pan(&self, delta: Size, bounds: &Bounds) -> ZoomState {
        ZoomState {
            offset: clamp_offset(self.offset + delta, bounds, self.scale),
            scale: self.scale,
            angle: self.angle,
        }
    }

    /// Fold `self` (a momentary gesture delta) onto `committed`.
    ///
    /// The result maps a point through `committed` first and `self` second,
    /// with the scale clipped to `limits` and the offset clipped to the legal
    /// pan range at that clipped scale.
    #[must_use]
    pub fn compose(&self, committed: &ZoomState, bounds: &Bounds, limits: ZoomLimits) -> ZoomState {
        let scale = limits.clamp_scale(self.scale * committed.scale);
        let angle = self.angle + committed.angle;

        let (sin, cos) = self.angle.sin_cos();
        let inner = committed.offset;
        let offset = Size {
            w: self.offset.w + self.scale * (cos * inner.w - sin * inner.h),
            h: self.offset.h + self.scale * (sin * inner.w + cos * inner.h),
        };

        ZoomState { offset: clamp_offset(offset, bounds, scale), scale, angle }
    }
}

/// Clip `offset` into the legal pan range for content rendered at `scale`.
///
/// The content is fitted to the viewport width at scale 1. Horizontally the
/// scaled content must cover the viewport: `[vw - vw·scale, 0]`. Vertically the
/// content height is first re-scaled to the viewport width, and the range is
/// spanned by two candidate limits (one centred, one edge-anchored) taken in
/// whichever order they fall.
///
/// Zero-size content makes the vertical candidates NaN; comparisons against
/// NaN never succeed, so that axis passes through unclipped.
#[must_use]
pub fn clamp_offset(offset: Size, bounds: &Bounds, scale: f64) -> Size {
    let Bounds { viewport, content } = *bounds;

    let max_x = 0.0;
    let min_x = viewport.w - viewport.w * scale;

    let content_h_unscaled = content.h * viewport.w / content.w;
    let content_h = content_h_unscaled * scale;
    let top_limit = (content_h - viewport.h * scale) / 2.0;
    let bottom_limit = ((content_h_unscaled - viewport.h) / 2.0) * scale - (content_h - viewport.h / 2.0);

    let min_y = top_limit.min(bottom_limit);
    let max_y = top_limit.max(bottom_limit);

    Size { w: clip(offset.w, min_x, max_x), h: clip(offset.h, min_y, max_y) }
}

/// Comparison-based clip; unlike `f64::clamp` it tolerates NaN or inverted bounds.
fn clip(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
