// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::animation::MoveAnimation;
use crate::camera::Camera;
use crate::config::{CameraConfig, ConfigError};
use crate::constraint::PanRange;
use crate::display::ViewportDisplay;
use crate::gesture::{CameraCommand, GestureEvent, GestureKind, GestureTranslator};
use crate::modes::MotionState;
use crate::zoom::{ZoomRange, is_usable_size};

/// Inbound event from the display, consumed by [`CameraController::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    /// The viewport changed size (display pixels).
    Resize(Size),
    /// The zoomable content's bounding rectangle changed.
    ContentChanged(Rect),
    /// A raw gesture sample.
    Gesture(GestureEvent),
}

/// Stateful owner of the [`Camera`].
///
/// The controller keeps three things true after every public call:
/// - `scale` lies in the [`ZoomRange`] for the current content and viewport.
/// - `position` lies in the [`PanRange`] derived from the *current* scale.
/// - The display has been told about every camera change, followed by
///   [`ViewportDisplay::constraints_settled`].
///
/// Both ranges are derived on demand from the content extent, viewport size
/// and scale, so they can never be stale.
#[derive(Clone, Debug)]
pub struct CameraController {
    config: CameraConfig,
    translator: GestureTranslator,
    camera: Camera,
    viewport: Option<Size>,
    content: Rect,
    animation: Option<MoveAnimation>,
    last_gesture: Option<GestureKind>,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::with_valid_config(CameraConfig::default())
    }
}

impl CameraController {
    /// Creates a detached controller after validating `config`.
    pub fn new(config: CameraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: CameraConfig) -> Self {
        Self {
            config,
            translator: GestureTranslator {
                tap_move_duration: config.tap_move_duration,
            },
            camera: Camera::default(),
            viewport: None,
            content: Rect::ZERO,
            animation: None,
            last_gesture: None,
        }
    }

    /// Attaches to a viewport showing `content`.
    ///
    /// The camera starts at scale `1.0` centered on the viewport center, and
    /// is then constrained. A zero-size viewport leaves the controller
    /// detached.
    pub fn attach<D>(&mut self, viewport: Size, content: Rect, display: &mut D)
    where
        D: ViewportDisplay + ?Sized,
    {
        if !is_usable_size(viewport) {
            tracing::debug!(
                width = viewport.width,
                height = viewport.height,
                "not attaching to empty viewport"
            );
            return;
        }
        self.viewport = Some(viewport);
        self.content = content.abs();
        self.animation = None;
        self.camera = Camera::new(Point::new(viewport.width * 0.5, viewport.height * 0.5), 1.0);
        self.constrain();
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            scale = self.camera.scale,
            "camera attached"
        );
        self.notify(display);
    }

    /// Returns `true` once [`CameraController::attach`] succeeded.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.viewport.is_some()
    }

    /// Routes one inbound event to its handler.
    pub fn dispatch<D>(&mut self, event: ViewportEvent, display: &mut D)
    where
        D: ViewportDisplay + ?Sized,
    {
        match event {
            ViewportEvent::Resize(size) => self.on_resize(size, display),
            ViewportEvent::ContentChanged(extent) => self.set_content_extent(extent, display),
            ViewportEvent::Gesture(gesture) => self.handle_gesture(&gesture, display),
        }
    }

    /// Handles a viewport size change.
    ///
    /// The scale is clamped into the new zoom range first, then the position
    /// into the pan range for that scale. Zero-size viewports are ignored.
    pub fn on_resize<D>(&mut self, size: Size, display: &mut D)
    where
        D: ViewportDisplay + ?Sized,
    {
        if !self.is_attached() {
            tracing::debug!("resize before attach ignored");
            return;
        }
        if !is_usable_size(size) {
            tracing::debug!(width = size.width, height = size.height, "ignoring empty viewport");
            return;
        }
        if self.viewport == Some(size) {
            return;
        }
        let before = self.camera;
        self.viewport = Some(size);
        self.settle(before, display);
    }

    /// Replaces the content extent and re-constrains the camera.
    pub fn set_content_extent<D>(&mut self, extent: Rect, display: &mut D)
    where
        D: ViewportDisplay + ?Sized,
    {
        let extent = extent.abs();
        if !extent.is_finite() {
            tracing::debug!("ignoring non-finite content extent");
            return;
        }
        if self.content == extent {
            return;
        }
        self.content = extent;
        if !self.is_attached() {
            return;
        }
        let before = self.camera;
        self.settle(before, display);
    }

    /// Translates a gesture sample and applies the resulting command.
    pub fn handle_gesture<D>(&mut self, gesture: &GestureEvent, display: &mut D)
    where
        D: ViewportDisplay + ?Sized,
    {
        let Some(viewport) = self.viewport else {
            tracing::debug!(kind = ?gesture.kind(), "gesture before attach ignored");
            return;
        };
        if let Some(command) = self
            .translator
            .translate(gesture, &self.camera, viewport, &*display)
        {
            self.last_gesture = Some(gesture.kind());
            self.apply(command, display);
        }
    }

    /// Applies a camera command.
    ///
    /// Pan and zoom commands cancel an in-flight tap animation and take
    /// effect from the camera's current position. Every command finishes by
    /// clamping the scale, re-deriving the pan range at the new scale, and
    /// clamping the position into it.
    pub fn apply<D>(&mut self, command: CameraCommand, display: &mut D)
    where
        D: ViewportDisplay + ?Sized,
    {
        let Some(viewport) = self.viewport else {
            tracing::debug!(?command, "command before attach ignored");
            return;
        };
        let before = self.camera;
        match command {
            CameraCommand::Displace(delta) => {
                if !delta.is_finite() {
                    tracing::debug!("ignoring non-finite displacement");
                    return;
                }
                self.cancel_animation();
                self.camera.position += delta;
            }
            CameraCommand::ScaleAbout { anchor, scale } => {
                // `+inf` is a valid request: it clamps to the zoom-out limit.
                if scale.is_nan() || scale <= 0.0 || !anchor.is_finite() {
                    tracing::debug!(scale, "ignoring malformed zoom");
                    return;
                }
                self.cancel_animation();
                let anchor_before = display.display_to_content(&self.camera, viewport, anchor);
                if let Some(range) = self.zoom_range() {
                    self.camera.scale = range.clamp(scale);
                }
                let anchor_after = display.display_to_content(&self.camera, viewport, anchor);
                self.camera.position += anchor_before - anchor_after;
            }
            CameraCommand::MoveTo { target, duration } => {
                if !target.is_finite() {
                    tracing::debug!("ignoring non-finite move target");
                    return;
                }
                if duration > 0.0 && duration.is_finite() {
                    tracing::trace!(x = target.x, y = target.y, duration, "starting camera move");
                    self.animation = Some(MoveAnimation::new(self.camera.position, target, duration));
                    return;
                }
                self.animation = None;
                self.camera.position = target;
            }
        }
        tracing::trace!(?command, "applied camera command");
        self.settle(before, display);
    }

    /// Advances an in-flight tap animation by `dt` seconds.
    ///
    /// Each tick moves the camera along the animation and clamps it into the
    /// current pan range. The controller returns to [`MotionState::Idle`] once
    /// the destination is reached.
    pub fn tick<D>(&mut self, dt: f64, display: &mut D)
    where
        D: ViewportDisplay + ?Sized,
    {
        if !(dt >= 0.0 && dt.is_finite()) {
            tracing::debug!(dt, "ignoring bad frame delta");
            return;
        }
        let Some(anim) = self.animation.as_mut() else {
            return;
        };
        let before = self.camera;
        self.camera.position = anim.advance(dt);
        if anim.is_finished() {
            self.animation = None;
        }
        self.settle(before, display);
    }

    /// Current camera transform.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Current viewport size, if attached.
    #[must_use]
    pub fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    /// Current content extent.
    #[must_use]
    pub fn content_extent(&self) -> Rect {
        self.content
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Whether a tap animation is in flight.
    #[must_use]
    pub fn motion_state(&self) -> MotionState {
        if self.animation.is_some() {
            MotionState::Animating
        } else {
            MotionState::Idle
        }
    }

    /// Zoom range for the current content and viewport.
    #[must_use]
    pub fn zoom_range(&self) -> Option<ZoomRange> {
        ZoomRange::derive(self.content, self.viewport?, self.config.min_scale)
    }

    /// Pan range at the current scale.
    #[must_use]
    pub fn pan_range(&self) -> Option<PanRange> {
        PanRange::derive(
            self.content,
            self.viewport?,
            self.camera.scale,
            self.config.margin,
        )
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            camera: self.camera,
            viewport: self.viewport,
            content_extent: self.content,
            zoom_range: self.zoom_range(),
            pan_range: self.pan_range(),
            motion_state: self.motion_state(),
            last_gesture: self.last_gesture,
        }
    }

    fn cancel_animation(&mut self) {
        if self.animation.take().is_some() {
            tracing::trace!("camera move interrupted");
        }
    }

    // Scale first, then the pan range at the new scale, then position.
    fn constrain(&mut self) {
        if let Some(range) = self.zoom_range() {
            self.camera.scale = range.clamp(self.camera.scale);
        }
        if let Some(range) = self.pan_range() {
            self.camera.position = range.clamp(self.camera.position);
        }
    }

    fn settle<D>(&mut self, before: Camera, display: &mut D)
    where
        D: ViewportDisplay + ?Sized,
    {
        self.constrain();
        if self.camera != before {
            self.notify(display);
        }
    }

    fn notify<D>(&self, display: &mut D)
    where
        D: ViewportDisplay + ?Sized,
    {
        display.set_camera_transform(&self.camera);
        display.constraints_settled(&self.camera);
    }
}

/// Debug snapshot of a [`CameraController`] state.
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// Current camera transform.
    pub camera: Camera,
    /// Viewport size, if attached.
    pub viewport: Option<Size>,
    /// Bounding rectangle of the zoomable content.
    pub content_extent: Rect,
    /// Zoom range for the current content and viewport.
    pub zoom_range: Option<ZoomRange>,
    /// Pan range at the current scale.
    pub pan_range: Option<PanRange>,
    /// Idle or animating.
    pub motion_state: MotionState,
    /// Kind of the last gesture handled while attached.
    pub last_gesture: Option<GestureKind>,
}
