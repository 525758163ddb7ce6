//! Touch phases and touch samples with a frozen start point.

#[cfg(test)]
#[path = "touch_test.rs"]
mod touch_test;

use crate::geometry::Point;
use crate::view::HostView;

/// Lifecycle phase of a touch, ordered so that `phase >= Ended` means gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TouchPhase {
    Began,
    Moved,
    Stationary,
    Ended,
    Cancelled,
}

impl TouchPhase {
    /// Whether the touch is still on the surface.
    #[must_use]
    pub fn is_active(self) -> bool {
        self < Self::Ended
    }
}

/// A touch identity paired with the point it was at when sampled.
///
/// The start point is never updated. Rebasing a gesture replaces the sample
/// with a fresh one acquired at the touch's current location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample<Id> {
    id: Id,
    start: Point,
}

impl<Id: Copy + Eq> TouchSample<Id> {
    #[must_use]
    pub fn new(id: Id, start: Point) -> Self {
        Self { id, start }
    }

    /// Sample `id` at its current location, if the host still knows it.
    #[must_use]
    pub fn acquire<V>(id: Id, view: &V) -> Option<Self>
    where
        V: HostView<TouchId = Id>,
    {
        view.touch_location(id).map(|start| Self { id, start })
    }

    #[must_use]
    pub fn id(&self) -> Id {
        self.id
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Live location of the same touch; falls back to the start point once
    /// the host has forgotten it, which reads as no movement.
    #[must_use]
    pub fn current<V>(&self, view: &V) -> Point
    where
        V: HostView<TouchId = Id>,
    {
        view.touch_location(self.id).unwrap_or(self.start)
    }

    /// A fresh sample of the same touch starting where it is now.
    #[must_use]
    pub fn rebase<V>(&self, view: &V) -> Option<Self>
    where
        V: HostView<TouchId = Id>,
    {
        Self::acquire(self.id, view)
    }
}
