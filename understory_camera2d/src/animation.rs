// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Linear camera move from `from` to `to`, advanced by frame ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveAnimation {
    /// Camera position when the move started.
    pub from: Point,
    /// Destination in content space.
    pub to: Point,
    /// Total length in seconds.
    pub duration: f64,
    /// Time advanced so far, in seconds.
    pub elapsed: f64,
}

impl MoveAnimation {
    /// Starts a move of the given `duration`.
    #[must_use]
    pub fn new(from: Point, to: Point, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    /// Advances by `dt` seconds and returns the interpolated position.
    pub fn advance(&mut self, dt: f64) -> Point {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.position()
    }

    /// Position at the current elapsed time.
    #[must_use]
    pub fn position(&self) -> Point {
        self.from.lerp(self.to, self.progress())
    }

    /// Fraction of the move completed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Returns `true` once the destination has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}
