// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_camera2d --heading-base-level=0

//! Understory Camera 2D: a touch-driven camera over a fixed content plane.
//!
//! This crate turns raw pan, tap and pinch gestures into a constrained camera
//! transform (translation + uniform scale). It focuses on:
//! - Zoom limits derived from the content size and the viewport size.
//! - Pan limits that keep the viewport on the content at the current zoom.
//! - Pinch zoom anchored at the point between the user's fingers.
//! - Tap-to-center moves, advanced by frame ticks and interrupted by new input.
//!
//! It does **not** own any scene graph or rendering backend. Callers are
//! expected to:
//! - Implement [`ViewportDisplay`] to receive camera transforms and
//!   "constraints settled" notifications.
//! - Feed resize, content and gesture events into
//!   [`CameraController::dispatch`].
//! - Call [`CameraController::tick`] once per frame while a move animates.
//!
//! ## Scale convention
//!
//! [`Camera::scale`] is measured in content units per display pixel. A larger
//! scale shows more content (zoomed out). [`ZoomRange::max`] is therefore the
//! furthest the camera may zoom *out*, and [`ZoomRange::min`] the furthest it
//! may zoom *in*.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_camera2d::{
//!     Camera, CameraController, GestureEvent, ViewportDisplay, ViewportEvent,
//! };
//!
//! struct Screen {
//!     camera: Camera,
//! }
//!
//! impl ViewportDisplay for Screen {
//!     fn set_camera_transform(&mut self, camera: &Camera) {
//!         self.camera = *camera;
//!     }
//! }
//!
//! let mut screen = Screen { camera: Camera::default() };
//! let mut controller = CameraController::default();
//!
//! let viewport = Size::new(1024.0, 768.0);
//! let content = Rect::new(-1024.0, -1024.0, 1024.0, 1024.0);
//! controller.attach(viewport, content, &mut screen);
//!
//! // Pinch the fingers together: zoom out, clamped to the content.
//! controller.dispatch(
//!     ViewportEvent::Gesture(GestureEvent::Pinch {
//!         touches: 2,
//!         scale_factor: 0.5,
//!         anchor: Point::new(512.0, 384.0),
//!     }),
//!     &mut screen,
//! );
//! assert_eq!(screen.camera.scale, 2.0);
//!
//! // Drag right: the camera moves left in content space.
//! let x = screen.camera.position.x;
//! controller.dispatch(
//!     ViewportEvent::Gesture(GestureEvent::Pan { translation: Vec2::new(5.0, 0.0) }),
//!     &mut screen,
//! );
//! assert_eq!(screen.camera.position.x, x - 10.0);
//! ```
//!
//! ## Design notes
//!
//! - The display supplies the display ↔ content projection; the default
//!   follows [`AxisConvention`], which also fixes the vertical pan sign.
//! - Zoom and pan ranges are derived on demand, never cached.
//! - All malformed input (empty viewports, one-finger pinches, non-finite
//!   values) is dropped with a `tracing` diagnostic; nothing panics.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod animation;
mod bounds;
mod camera;
mod config;
mod constraint;
mod controller;
mod display;
mod gesture;
mod modes;
mod overlay;
pub mod recognizer;
mod zoom;

pub use animation::MoveAnimation;
pub use bounds::{ContentLayer, ContentNodeId, content_extent};
pub use camera::Camera;
pub use config::{CameraConfig, ConfigError};
pub use constraint::PanRange;
pub use controller::{CameraController, CameraDebugInfo, ViewportEvent};
pub use display::ViewportDisplay;
pub use gesture::{CameraCommand, GestureEvent, GestureKind, GesturePhase, GestureTranslator};
pub use modes::{AxisConvention, MotionState};
pub use overlay::OverlayLayer;
pub use zoom::ZoomRange;
