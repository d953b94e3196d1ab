// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content extent: the bounding rectangle of everything that zooms.

use alloc::vec::Vec;

use kurbo::Rect;

/// Returns the smallest rectangle enclosing every frame in `frames`.
///
/// Frames are normalized first, so rectangles with flipped corners still
/// contribute their true extent. Empty input yields [`Rect::ZERO`], a
/// zero-size rectangle at the origin; callers downstream treat that as
/// degenerate content.
#[must_use]
pub fn content_extent<I>(frames: I) -> Rect
where
    I: IntoIterator<Item = Rect>,
{
    frames
        .into_iter()
        .map(|r| r.abs())
        .reduce(|acc, r| acc.union(r))
        .unwrap_or(Rect::ZERO)
}

/// Handle to a node stored in a [`ContentLayer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentNodeId(usize);

impl ContentNodeId {
    /// Slot index of this node inside its layer.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owned set of zoomable content frames, addressed by [`ContentNodeId`].
///
/// The layer never caches its extent: [`ContentLayer::extent`] recomputes the
/// union of the live frames on every call, so membership changes are always
/// reflected.
#[derive(Clone, Debug, Default)]
pub struct ContentLayer {
    slots: Vec<Option<Rect>>,
}

impl ContentLayer {
    /// Creates an empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with the given content-space frame.
    pub fn insert(&mut self, frame: Rect) -> ContentNodeId {
        if let Some(idx) = self.slots.iter().position(Option::is_none) {
            self.slots[idx] = Some(frame);
            return ContentNodeId(idx);
        }
        self.slots.push(Some(frame));
        ContentNodeId(self.slots.len() - 1)
    }

    /// Replaces the frame of `id`. Returns `false` if the node is gone.
    pub fn set_frame(&mut self, id: ContentNodeId, frame: Rect) -> bool {
        match self.slots.get_mut(id.index()) {
            Some(Some(slot)) => {
                *slot = frame;
                true
            }
            _ => {
                tracing::debug!(index = id.index(), "set_frame on missing content node");
                false
            }
        }
    }

    /// Removes `id`, returning its last frame.
    pub fn remove(&mut self, id: ContentNodeId) -> Option<Rect> {
        self.slots.get_mut(id.index()).and_then(Option::take)
    }

    /// Returns the frame of `id`, if present.
    #[must_use]
    pub fn get(&self, id: ContentNodeId) -> Option<Rect> {
        self.slots.get(id.index()).copied().flatten()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if the layer holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounding rectangle of every live node.
    #[must_use]
    pub fn extent(&self) -> Rect {
        content_extent(self.slots.iter().flatten().copied())
    }
}
