//! Shared numeric constants for the zoom crate.

// ── Scale limits ────────────────────────────────────────────────

/// Smallest committed scale: content fitted to the viewport width.
pub const MIN_SCALE: f64 = 1.0;

/// Largest committed scale reachable through a pinch.
pub const MAX_SCALE: f64 = 8.0;
