// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the content plane's vertical axis relates to display space.
///
/// Display (gesture) coordinates are always pixels with the origin at the
/// top-left corner of the viewport and `y` growing downwards. The content
/// plane may be authored either way; the convention decides the sign of the
/// vertical pan displacement and of the display ↔ content projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisConvention {
    /// Content `y` grows upwards (scene-graph style).
    ///
    /// Dragging a finger down the screen moves the camera up in content
    /// space, so the pan displacement keeps the sign of the display delta.
    #[default]
    ContentYUp,
    /// Content `y` grows downwards, like display space.
    ContentYDown,
}

impl AxisConvention {
    /// Multiplier applied to display-space `y` offsets when mapping them into
    /// content space.
    #[must_use]
    pub fn display_to_content_y(self) -> f64 {
        match self {
            Self::ContentYUp => -1.0,
            Self::ContentYDown => 1.0,
        }
    }

    /// Sign of the vertical camera displacement for a display-space pan.
    ///
    /// The camera moves opposite to the perceived content motion, so this is
    /// the negation of [`AxisConvention::display_to_content_y`].
    #[must_use]
    pub fn pan_y_sign(self) -> f64 {
        -self.display_to_content_y()
    }
}

/// Coarse motion state of a [`crate::CameraController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionState {
    /// No animation in flight; the camera only moves in response to input.
    #[default]
    Idle,
    /// A tap-to-center move is being advanced by [`crate::CameraController::tick`].
    Animating,
}
