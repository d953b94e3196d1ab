// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// Allowed camera scale range for a content/viewport pairing.
///
/// Scales are expressed in content units per display pixel, so `max` is the
/// furthest the camera may zoom **out** and `min` is the furthest it may zoom
/// **in**. `min <= max` always holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomRange {
    /// Smallest allowed scale (most zoomed in).
    pub min: f64,
    /// Largest allowed scale (most zoomed out).
    pub max: f64,
}

impl ZoomRange {
    /// Range used for degenerate content: the camera is pinned at `1.0`.
    pub const UNIT: Self = Self { min: 1.0, max: 1.0 };

    /// Derives the zoom range from the content extent and viewport size.
    ///
    /// `max` is the scale at which the viewport footprint exactly frames the
    /// content along its tighter dimension. `min_floor` is the configured
    /// zoom-in limit; when the content is so small that `max` falls below it,
    /// the floor is lowered to `max`.
    ///
    /// Returns `None` when the viewport has a zero (or non-finite) dimension.
    /// Content with a zero dimension yields [`ZoomRange::UNIT`].
    #[must_use]
    pub fn derive(content: Rect, viewport: Size, min_floor: f64) -> Option<Self> {
        if !is_usable_size(viewport) {
            tracing::debug!(
                width = viewport.width,
                height = viewport.height,
                "skipping zoom range for empty viewport"
            );
            return None;
        }
        if content.width() <= 0.0 || content.height() <= 0.0 {
            return Some(Self::UNIT);
        }
        let max = (content.width() / viewport.width).min(content.height() / viewport.height);
        Some(Self {
            min: min_floor.min(max),
            max,
        })
    }

    /// Clamps `scale` into this range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies inside the range.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        self.min <= scale && scale <= self.max
    }
}

pub(crate) fn is_usable_size(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0 && size.is_finite()
}
