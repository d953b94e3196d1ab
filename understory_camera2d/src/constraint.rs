// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::zoom::is_usable_size;

/// Rectangle of camera positions permitted at a given scale.
///
/// Both spans are closed intervals `[lo, hi]` in content space with
/// `lo <= hi`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanRange {
    /// Allowed horizontal camera positions.
    pub x: (f64, f64),
    /// Allowed vertical camera positions.
    pub y: (f64, f64),
}

impl PanRange {
    /// A range holding exactly one position.
    #[must_use]
    pub fn point(p: Point) -> Self {
        Self {
            x: (p.x, p.x),
            y: (p.y, p.y),
        }
    }

    /// Derives the pan range for the camera at `scale`.
    ///
    /// The content extent is shrunk on each side by half the viewport's
    /// content-space footprint minus `margin`. The inset is capped at half
    /// the content extent, so when the footprint outgrows the content the
    /// range collapses onto the content center instead of inverting.
    ///
    /// Content with a zero dimension collapses the range to its center.
    /// Returns `None` for an unusable viewport.
    #[must_use]
    pub fn derive(content: Rect, viewport: Size, scale: f64, margin: f64) -> Option<Self> {
        if !is_usable_size(viewport) || !(scale > 0.0 && scale.is_finite()) {
            tracing::debug!(
                width = viewport.width,
                height = viewport.height,
                scale,
                "skipping pan range"
            );
            return None;
        }
        let content = content.abs();
        if content.width() <= 0.0 || content.height() <= 0.0 {
            return Some(Self::point(content.center()));
        }
        let footprint = viewport * scale;
        let x_inset = (footprint.width * 0.5 - margin).min(content.width() * 0.5);
        let y_inset = (footprint.height * 0.5 - margin).min(content.height() * 0.5);
        let inner = Rect::new(
            content.x0 + x_inset,
            content.y0 + y_inset,
            content.x1 - x_inset,
            content.y1 - y_inset,
        );
        Some(Self {
            x: ordered(inner.x0, inner.x1),
            y: ordered(inner.y0, inner.y1),
        })
    }

    /// Clamps `p` into the range.
    #[must_use]
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(self.x.0, self.x.1), p.y.clamp(self.y.0, self.y.1))
    }

    /// Returns `true` if `p` lies inside the range (inclusive).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (self.x.0..=self.x.1).contains(&p.x) && (self.y.0..=self.y.1).contains(&p.y)
    }

    /// The range as a content-space rectangle.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x.0, self.y.0, self.x.1, self.y.1)
    }
}

// Capping the inset at half the extent can leave `lo` a rounding step above
// `hi`; `clamp` would panic on that.
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, b) }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::PanRange;

    const CONTENT: Rect = Rect::new(-1024.0, -1024.0, 1024.0, 1024.0);
    const VIEWPORT: Size = Size::new(1024.0, 768.0);

    #[test]
    fn unit_scale_range() {
        let range = PanRange::derive(CONTENT, VIEWPORT, 1.0, 20.0).unwrap();
        // x inset: 512 - 20 = 492; y inset: 384 - 20 = 364.
        assert_eq!(range.x, (-532.0, 532.0));
        assert_eq!(range.y, (-660.0, 660.0));
    }

    #[test]
    fn zoomed_out_range_narrows() {
        let range = PanRange::derive(CONTENT, VIEWPORT, 2.0, 20.0).unwrap();
        assert_eq!(range.x, (-20.0, 20.0));
        assert_eq!(range.y, (-276.0, 276.0));
    }

    #[test]
    fn oversized_footprint_collapses_to_center() {
        let range = PanRange::derive(CONTENT, VIEWPORT, 10.0, 20.0).unwrap();
        assert_eq!(range, PanRange::point(Point::ORIGIN));
        assert_eq!(range.clamp(Point::new(400.0, -90.0)), Point::ORIGIN);
    }

    #[test]
    fn degenerate_content_is_single_point() {
        let content = Rect::new(30.0, 40.0, 30.0, 40.0);
        let range = PanRange::derive(content, VIEWPORT, 1.0, 20.0).unwrap();
        assert_eq!(range, PanRange::point(Point::new(30.0, 40.0)));
    }

    #[test]
    fn unusable_inputs_are_skipped() {
        assert!(PanRange::derive(CONTENT, Size::new(0.0, 10.0), 1.0, 20.0).is_none());
        assert!(PanRange::derive(CONTENT, VIEWPORT, 0.0, 20.0).is_none());
        assert!(PanRange::derive(CONTENT, VIEWPORT, f64::NAN, 20.0).is_none());
    }

    #[test]
    fn clamp_and_contains_agree() {
        let range = PanRange::derive(CONTENT, VIEWPORT, 1.0, 20.0).unwrap();
        let p = range.clamp(Point::new(5_000.0, -5_000.0));
        assert_eq!(p, Point::new(532.0, -660.0));
        assert!(range.contains(p));
        assert!(!range.contains(Point::new(533.0, 0.0)));
        assert_eq!(range.to_rect(), Rect::new(-532.0, -660.0, 532.0, 660.0));
    }
}
