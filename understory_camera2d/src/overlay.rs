// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::camera::Camera;
use crate::display::ViewportDisplay;

/// Screen-space markers pinned to content-space locations.
///
/// Pins follow the content as the camera pans and zooms, but are laid out in
/// display pixels, so whatever is drawn at them keeps a constant on-screen
/// size. Re-run [`OverlayLayer::layout`] from
/// [`ViewportDisplay::constraints_settled`].
#[derive(Clone, Debug)]
pub struct OverlayLayer<K> {
    pins: Vec<(K, Point)>,
}

impl<K> Default for OverlayLayer<K> {
    fn default() -> Self {
        Self { pins: Vec::new() }
    }
}

impl<K: Copy + PartialEq> OverlayLayer<K> {
    /// Creates an empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins `key` to a content-space point, replacing any previous pin.
    pub fn pin(&mut self, key: K, content: Point) {
        match self.pins.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = content,
            None => self.pins.push((key, content)),
        }
    }

    /// Removes the pin for `key`, returning its content-space point.
    pub fn unpin(&mut self, key: K) -> Option<Point> {
        let idx = self.pins.iter().position(|(k, _)| *k == key)?;
        Some(self.pins.swap_remove(idx).1)
    }

    /// Removes every pin.
    pub fn clear(&mut self) {
        self.pins.clear();
    }

    /// Number of pins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Returns `true` if nothing is pinned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Display-space position of every pin under `camera`.
    pub fn layout<D>(&self, camera: &Camera, viewport: Size, display: &D) -> Vec<(K, Point)>
    where
        D: ViewportDisplay + ?Sized,
    {
        self.pins
            .iter()
            .map(|&(key, p)| (key, display.content_to_display(camera, viewport, p)))
            .collect()
    }

    /// Like [`OverlayLayer::layout`], keeping only pins inside the viewport.
    pub fn layout_visible<D>(&self, camera: &Camera, viewport: Size, display: &D) -> Vec<(K, Point)>
    where
        D: ViewportDisplay + ?Sized,
    {
        let bounds = Rect::from_origin_size(Point::ORIGIN, viewport);
        let mut out = self.layout(camera, viewport, display);
        out.retain(|(_, p)| {
            (bounds.x0..=bounds.x1).contains(&p.x) && (bounds.y0..=bounds.y1).contains(&p.y)
        });
        out
    }
}
