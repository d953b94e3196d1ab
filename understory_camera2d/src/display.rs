// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use crate::camera::Camera;
use crate::modes::AxisConvention;

/// The rendering side a [`crate::CameraController`] drives.
///
/// Implementors present the scene with the camera transform they are given,
/// and provide the display ↔ content projection the controller uses for tap
/// targeting and pinch anchoring. The provided projection methods follow
/// [`ViewportDisplay::axis_convention`]; override them if the display uses
/// a different mapping.
pub trait ViewportDisplay {
    /// Vertical axis convention of the content plane.
    fn axis_convention(&self) -> AxisConvention {
        AxisConvention::default()
    }

    /// Applies a new camera transform. Called only when the camera changed.
    fn set_camera_transform(&mut self, camera: &Camera);

    /// Called after a camera change has been clamped and is stable.
    ///
    /// Screen-space overlays (see [`crate::OverlayLayer`]) should be laid out
    /// again from here.
    fn constraints_settled(&mut self, camera: &Camera) {
        let _ = camera;
    }

    /// Converts a display-space point into content space under `camera`.
    fn display_to_content(&self, camera: &Camera, viewport: Size, point: Point) -> Point {
        camera.display_to_content(viewport, self.axis_convention(), point)
    }

    /// Converts a content-space point into display space under `camera`.
    fn content_to_display(&self, camera: &Camera, viewport: Size, point: Point) -> Point {
        camera.content_to_display(viewport, self.axis_convention(), point)
    }
}
