// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture events and their translation into camera commands.

use kurbo::{Point, Size, Vec2};

use crate::camera::Camera;
use crate::display::ViewportDisplay;

/// Lifecycle phase of a discrete gesture sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// The recognizer has just recognized the gesture.
    Began,
    /// The gesture is in progress.
    Changed,
    /// The gesture finished normally.
    Ended,
    /// The gesture was aborted by the platform.
    Cancelled,
}

/// One raw gesture sample delivered by the display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Finger drag; `translation` is the display-space delta since the last
    /// consumed pan event.
    Pan {
        /// Display-space delta in pixels.
        translation: Vec2,
    },
    /// Single tap at a display-space location.
    Tap {
        /// Recognizer phase; only [`GesturePhase::Ended`] moves the camera.
        phase: GesturePhase,
        /// Touch location in display space.
        location: Point,
    },
    /// Two-finger pinch.
    Pinch {
        /// Number of touches currently down.
        touches: usize,
        /// Scale change since the last consumed pinch event (`> 1` means the
        /// fingers moved apart).
        scale_factor: f64,
        /// Display-space point between the fingers.
        anchor: Point,
    },
}

impl GestureEvent {
    /// Kind of gesture this sample belongs to.
    #[must_use]
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::Pan { .. } => GestureKind::Pan,
            Self::Tap { .. } => GestureKind::Tap,
            Self::Pinch { .. } => GestureKind::Pinch,
        }
    }
}

/// Gesture family, reported in debug snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    /// See [`GestureEvent::Pan`].
    Pan,
    /// See [`GestureEvent::Tap`].
    Tap,
    /// See [`GestureEvent::Pinch`].
    Pinch,
}

/// Camera mutation requested by a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraCommand {
    /// Move the camera by a content-space displacement, instantly.
    Displace(Vec2),
    /// Animate the camera center towards a content-space point.
    MoveTo {
        /// Destination in content space.
        target: Point,
        /// Animation length in seconds; `<= 0` moves instantly.
        duration: f64,
    },
    /// Set the scale (before clamping) while keeping the content under a
    /// display-space anchor stationary.
    ScaleAbout {
        /// Display-space anchor point.
        anchor: Point,
        /// Requested scale in content units per display pixel.
        scale: f64,
    },
}

/// Stateless mapping from [`GestureEvent`]s to [`CameraCommand`]s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureTranslator {
    /// Duration of the tap-to-center animation, in seconds.
    pub tap_move_duration: f64,
}

impl Default for GestureTranslator {
    fn default() -> Self {
        Self {
            tap_move_duration: 0.5,
        }
    }
}

impl GestureTranslator {
    /// Translates one gesture sample.
    ///
    /// Returns `None` for samples that must not move the camera: taps that
    /// have not ended, pinches with fewer than two touches, and samples
    /// carrying non-finite values.
    pub fn translate<D>(
        &self,
        event: &GestureEvent,
        camera: &Camera,
        viewport: Size,
        display: &D,
    ) -> Option<CameraCommand>
    where
        D: ViewportDisplay + ?Sized,
    {
        match *event {
            GestureEvent::Pan { translation } => {
                if !translation.is_finite() {
                    tracing::debug!("ignoring non-finite pan translation");
                    return None;
                }
                let s = camera.scale;
                let y_sign = display.axis_convention().pan_y_sign();
                Some(CameraCommand::Displace(Vec2::new(
                    -translation.x * s,
                    y_sign * translation.y * s,
                )))
            }
            GestureEvent::Tap { phase, location } => {
                if phase != GesturePhase::Ended {
                    return None;
                }
                if !location.is_finite() {
                    tracing::debug!("ignoring non-finite tap location");
                    return None;
                }
                let target = display.display_to_content(camera, viewport, location);
                Some(CameraCommand::MoveTo {
                    target,
                    duration: self.tap_move_duration,
                })
            }
            GestureEvent::Pinch {
                touches,
                scale_factor,
                anchor,
            } => {
                if touches < 2 {
                    tracing::debug!(touches, "ignoring pinch with fewer than two touches");
                    return None;
                }
                if !(scale_factor > 0.0 && scale_factor.is_finite()) || !anchor.is_finite() {
                    tracing::debug!(scale_factor, "ignoring malformed pinch sample");
                    return None;
                }
                // Extreme factors may overflow to `+inf` or underflow to zero;
                // keep the request positive so the controller clamps it.
                Some(CameraCommand::ScaleAbout {
                    anchor,
                    scale: (camera.scale / scale_factor).max(f64::MIN_POSITIVE),
                })
            }
        }
    }
}
