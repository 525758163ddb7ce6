//! Gesture feature flags and scale limits.
//!
//! Both are plain values: the tracker replaces its configuration wholesale on
//! `enable` / `disable` instead of flipping individual flags.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{MAX_SCALE, MIN_SCALE};
use crate::error::ConfigError;

/// Which gesture components feed into the emitted transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Single-finger drags pan; two-finger gestures keep the first finger pinned.
    pub pan: bool,
    /// Two-finger distance changes scale.
    pub scale: bool,
    /// Two-finger angle changes rotate.
    pub rotate: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self { pan: true, scale: true, rotate: false }
    }
}

impl GestureConfig {
    /// Nothing tracked; touches are recorded but never change the output.
    pub const DISABLED: Self = Self { pan: false, scale: false, rotate: false };

    #[must_use]
    pub fn new(pan: bool, scale: bool, rotate: bool) -> Self {
        Self { pan, scale, rotate }
    }

    /// Whether the host must deliver more than one simultaneous touch.
    #[must_use]
    pub fn needs_multi_touch(&self) -> bool {
        self.scale || self.rotate
    }
}

/// Bounds applied to the committed scale after every pinch.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min_scale: MIN_SCALE, max_scale: MAX_SCALE }
    }
}

impl ZoomLimits {
    /// Build validated limits.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLimits` unless both values are finite, `min_scale` is
    /// positive and `min_scale <= max_scale`.
    pub fn new(min_scale: f64, max_scale: f64) -> Result<Self, ConfigError> {
        Self { min_scale, max_scale }.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let Self { min_scale: min, max_scale: max } = self;
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
            return Err(ConfigError::InvalidLimits { min, max });
        }
        Ok(self)
    }

    /// Hard clamp (no rubber-banding) into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale > self.max_scale {
            self.max_scale
        } else if scale < self.min_scale {
            self.min_scale
        } else {
            scale
        }
    }
}

/// Complete tracker configuration as supplied by a host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub gestures: GestureConfig,
    pub limits: ZoomLimits,
}

impl ZoomConfig {
    /// Parse a JSON configuration; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Json` for malformed input and `InvalidLimits` for unusable
    /// scale limits.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ZoomConfig = serde_json::from_str(json)?;
        Ok(Self { limits: config.limits.validated()?, ..config })
    }
}
