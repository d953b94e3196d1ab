// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

use crate::modes::AxisConvention;

/// Camera transform over the content plane.
///
/// `position` is the content-space point shown at the center of the
/// viewport. `scale` is the number of content units covered by one display
/// pixel, so a larger scale shows more of the content (zoomed out) and a
/// smaller scale zooms in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Content-space point at the viewport center.
    pub position: Point,
    /// Content units per display pixel; always `> 0`.
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            scale: 1.0,
        }
    }
}

impl Camera {
    /// Creates a camera at `position` with the given `scale`.
    #[must_use]
    pub fn new(position: Point, scale: f64) -> Self {
        Self { position, scale }
    }

    /// Size of the viewport's footprint in content space at the current scale.
    #[must_use]
    pub fn footprint(&self, viewport: Size) -> Size {
        viewport * self.scale
    }

    /// Affine transform mapping display points into content space.
    #[must_use]
    pub fn display_to_content_transform(&self, viewport: Size, axis: AxisConvention) -> Affine {
        let center = Vec2::new(viewport.width * 0.5, viewport.height * 0.5);
        // Display → content: recenter on the viewport, scale (flipping y if
        // needed), then translate to the camera position.
        Affine::translate(self.position.to_vec2())
            * Affine::scale_non_uniform(self.scale, self.scale * axis.display_to_content_y())
            * Affine::translate(-center)
    }

    /// Affine transform mapping content points into display space.
    #[must_use]
    pub fn content_to_display_transform(&self, viewport: Size, axis: AxisConvention) -> Affine {
        self.display_to_content_transform(viewport, axis).inverse()
    }

    /// Converts a display-space point into content space.
    #[must_use]
    pub fn display_to_content(&self, viewport: Size, axis: AxisConvention, pt: Point) -> Point {
        self.display_to_content_transform(viewport, axis) * pt
    }

    /// Converts a content-space point into display space.
    #[must_use]
    pub fn content_to_display(&self, viewport: Size, axis: AxisConvention, pt: Point) -> Point {
        self.content_to_display_transform(viewport, axis) * pt
    }
}
