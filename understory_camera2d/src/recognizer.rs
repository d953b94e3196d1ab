// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accumulators that turn cumulative recognizer samples into per-event deltas.
//!
//! Platform recognizers usually report pan translation and pinch scale as
//! totals since the gesture began. [`GestureTranslator`](crate::GestureTranslator)
//! works on increments, so each consumed sample resets the baseline: the
//! translation goes back to zero and the pinch scale back to `1.0`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use understory_camera2d::recognizer::{PanTracker, PinchTracker};
//!
//! let mut pan = PanTracker::default();
//! pan.start();
//! assert_eq!(pan.update(Vec2::new(4.0, 0.0)), Some(Vec2::new(4.0, 0.0)));
//! // The platform keeps accumulating; only the new part is returned.
//! assert_eq!(pan.update(Vec2::new(6.0, 1.0)), Some(Vec2::new(2.0, 1.0)));
//!
//! let mut pinch = PinchTracker::default();
//! pinch.start();
//! assert_eq!(pinch.update(2.0), Some(2.0));
//! assert_eq!(pinch.update(3.0), Some(1.5));
//! ```

use kurbo::Vec2;

/// Tracks the consumed part of a cumulative pan translation.
#[derive(Debug, Clone, Default, Copy)]
pub struct PanTracker {
    /// Cumulative translation already handed out, while a pan is active.
    pub consumed: Option<Vec2>,
}

impl PanTracker {
    /// Begin tracking a new pan with a zero baseline.
    pub fn start(&mut self) {
        self.consumed = Some(Vec2::ZERO);
    }

    /// Feed the platform's cumulative translation, returning the delta since
    /// the previous update.
    pub fn update(&mut self, cumulative: Vec2) -> Option<Vec2> {
        let consumed = self.consumed.as_mut()?;
        let delta = cumulative - *consumed;
        *consumed = cumulative;
        Some(delta)
    }

    /// End the pan and reset state.
    pub fn end(&mut self) {
        self.consumed = None;
    }

    /// Returns `true` while a pan is being tracked.
    pub fn is_active(&self) -> bool {
        self.consumed.is_some()
    }
}

/// Tracks the consumed part of a cumulative pinch scale.
#[derive(Debug, Clone, Default, Copy)]
pub struct PinchTracker {
    /// Cumulative scale already handed out, while a pinch is active.
    pub consumed: Option<f64>,
}

impl PinchTracker {
    /// Begin tracking a new pinch with a baseline of `1.0`.
    pub fn start(&mut self) {
        self.consumed = Some(1.0);
    }

    /// Feed the platform's cumulative scale, returning the incremental factor
    /// since the previous update.
    ///
    /// Non-positive or non-finite samples are dropped without moving the
    /// baseline.
    pub fn update(&mut self, cumulative: f64) -> Option<f64> {
        let consumed = self.consumed.as_mut()?;
        if !(cumulative > 0.0 && cumulative.is_finite()) {
            return None;
        }
        let factor = cumulative / *consumed;
        *consumed = cumulative;
        Some(factor)
    }

    /// End the pinch and reset state.
    pub fn end(&mut self) {
        self.consumed = None;
    }

    /// Returns `true` while a pinch is being tracked.
    pub fn is_active(&self) -> bool {
        self.consumed.is_some()
    }
}
