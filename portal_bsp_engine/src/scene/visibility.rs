//! Per-frame visibility state: the reachable-zone mask and the two draw
//! lists the walker fills.

use crate::level::{PolyFlags, ZoneMask};

/// One surface the walker decided to draw.
///
/// Records the node index (the polygon lives on the node) and the merged
/// surface + material flags at the moment of discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawNode {
    /// Index into `Model::nodes`
    pub node: u32,
    /// Merged surface and material flags
    pub flags: PolyFlags,
}

/// Output of one visibility walk.
///
/// `opaque` is in front-to-back view order and is submitted forward;
/// `translucent` is in the same discovery order and is submitted in
/// reverse, which yields back-to-front. The buffers are retained across
/// frames to avoid reallocating.
#[derive(Debug, Default)]
pub struct FrameVisibility {
    /// Zone containing the viewpoint for this walk
    pub view_zone: u8,
    /// Zones reachable from the viewpoint; grows as portals are crossed
    pub reachable: ZoneMask,
    /// Occluding surfaces, front-to-back
    pub opaque: Vec<DrawNode>,
    /// Non-occluding surfaces, front-to-back discovery order
    pub translucent: Vec<DrawNode>,
}

impl FrameVisibility {
    /// Empty state; `reset` must run before the first walk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare for a new walk from a viewpoint in `view_zone`.
    ///
    /// Reachability is seeded with the view zone alone; every other zone
    /// must be earned by crossing a portal surface.
    pub fn reset(&mut self, view_zone: u8) {
        self.view_zone = view_zone;
        self.reachable = ZoneMask::zone(view_zone);
        self.opaque.clear();
        self.translucent.clear();
    }
}

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod tests;
