//! Renderable 2D affine transform.
//!
//! Entries follow canvas / CSS order: a point `(x, y)` maps to
//! `(m11·x + m21·y + dx, m12·x + m22·y + dy)`.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde::Serialize;

use crate::geometry::Point;

/// A 2D affine matrix handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self { m11: 1.0, m12: 0.0, m21: 0.0, m22: 1.0, dx: 0.0, dy: 0.0 };

    #[must_use]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self { dx, dy, ..Self::IDENTITY }
    }

    #[must_use]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self { m11: sx, m22: sy, ..Self::IDENTITY }
    }

    /// Counter-clockwise rotation by `angle` radians (clockwise on a y-down screen).
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { m11: cos, m12: sin, m21: -sin, m22: cos, dx: 0.0, dy: 0.0 }
    }

    /// The transform that applies `inner` first, then `self`.
    #[must_use]
    pub fn concat(&self, inner: &Transform) -> Transform {
        Transform {
            m11: self.m11 * inner.m11 + self.m21 * inner.m12,
            m12: self.m12 * inner.m11 + self.m22 * inner.m12,
            m21: self.m11 * inner.m21 + self.m21 * inner.m22,
            m22: self.m12 * inner.m21 + self.m22 * inner.m22,
            dx: self.m11 * inner.dx + self.m21 * inner.dy + self.dx,
            dy: self.m12 * inner.dx + self.m22 * inner.dy + self.dy,
        }
    }

    // --- Chained builders (each step is applied in local coordinates) ---

    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Transform {
        self.concat(&Self::translation(dx, dy))
    }

    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Transform {
        self.concat(&Self::scaling(sx, sy))
    }

    #[must_use]
    pub fn rotate(&self, angle: f64) -> Transform {
        self.concat(&Self::rotation(angle))
    }

    /// Map a point through this transform.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: self.m11 * p.x + self.m21 * p.y + self.dx,
            y: self.m12 * p.x + self.m22 * p.y + self.dy,
        }
    }

    /// The six entries in `setTransform` / CSS `matrix()` order.
    #[must_use]
    pub fn to_array(&self) -> [f64; 6] {
        [self.m11, self.m12, self.m21, self.m22, self.dx, self.dy]
    }

    /// CSS `matrix(a, b, c, d, e, f)` function text.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("matrix({}, {}, {}, {}, {}, {})", self.m11, self.m12, self.m21, self.m22, self.dx, self.dy)
    }
}
