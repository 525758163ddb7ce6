//! Point and size primitives in view-local coordinates.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Sub};

/// A position in the host view's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }
}

/// A 2D extent or displacement.
///
/// Used both for viewport/content dimensions and for offsets (`w` is the
/// horizontal component, `h` the vertical one).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const ZERO: Self = Self { w: 0.0, h: 0.0 };

    #[must_use]
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.w.hypot(self.h)
    }

    /// Direction of the vector in radians, measured from the positive x axis.
    #[must_use]
    pub fn angle(self) -> f64 {
        self.h.atan2(self.w)
    }
}

impl Sub for Point {
    type Output = Size;

    fn sub(self, rhs: Point) -> Size {
        Size { w: self.x - rhs.x, h: self.y - rhs.y }
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size { w: self.w + rhs.w, h: self.h + rhs.h }
    }
}
