// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tunables for a [`crate::CameraController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CameraConfig {
    /// Zoom-in limit in content units per display pixel.
    pub min_scale: f64,
    /// Content-space border kept between the content edge and the pan limit.
    pub margin: f64,
    /// Length of the tap-to-center animation, in seconds.
    pub tap_move_duration: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.4,
            margin: 20.0,
            tap_move_duration: 0.5,
        }
    }
}

impl CameraConfig {
    /// Sets [`CameraConfig::min_scale`].
    #[must_use]
    pub fn with_min_scale(mut self, min_scale: f64) -> Self {
        self.min_scale = min_scale;
        self
    }

    /// Sets [`CameraConfig::margin`].
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets [`CameraConfig::tap_move_duration`].
    #[must_use]
    pub fn with_tap_move_duration(mut self, seconds: f64) -> Self {
        self.tap_move_duration = seconds;
        self
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_scale > 0.0 && self.min_scale.is_finite()) {
            return Err(ConfigError::MinScale(self.min_scale));
        }
        if !(self.margin >= 0.0 && self.margin.is_finite()) {
            return Err(ConfigError::Margin(self.margin));
        }
        if !(self.tap_move_duration >= 0.0 && self.tap_move_duration.is_finite()) {
            return Err(ConfigError::TapMoveDuration(self.tap_move_duration));
        }
        Ok(())
    }
}

/// Rejected [`CameraConfig`] field.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `min_scale` must be finite and positive.
    #[error("min_scale must be finite and > 0, got {0}")]
    MinScale(f64),
    /// `margin` must be finite and non-negative.
    #[error("margin must be finite and >= 0, got {0}")]
    Margin(f64),
    /// `tap_move_duration` must be finite and non-negative.
    #[error("tap_move_duration must be finite and >= 0, got {0}")]
    TapMoveDuration(f64),
}
