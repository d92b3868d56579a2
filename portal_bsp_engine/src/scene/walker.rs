//! VisibilityWalker - the in-order BSP traversal.
//!
//! Visits nodes front-half-space first from the viewpoint, so opaque
//! surfaces come out front-to-back and the same list read backwards is a
//! correct back-to-front order for translucency. Subtrees are pruned by
//! the reachable-zone mask and by a frustum test against each node's
//! render bound. Portal surfaces grow the mask as they are discovered,
//! which is what makes the zone pruning incremental: geometry behind a
//! portal only survives pruning if the walk has already crossed that
//! portal this frame.

use glam::Vec3;
use crate::camera::{FrustumPlanes, Intersection};
use crate::level::{Model, PolyFlags};
use super::visibility::{DrawNode, FrameVisibility};

/// One traversal of a model's BSP from a fixed viewpoint.
///
/// Borrows the model and frustum for the duration of the walk; all
/// mutable output goes into the `FrameVisibility` passed to `walk`.
pub struct VisibilityWalker<'a> {
    model: &'a Model,
    frustum: &'a FrustumPlanes,
    view_location: Vec3,
    max_depth: usize,
    depth_exceeded: bool,
}

impl<'a> VisibilityWalker<'a> {
    /// Walker over `model` as seen from `view_location`.
    pub fn new(model: &'a Model, frustum: &'a FrustumPlanes, view_location: Vec3) -> Self {
        Self {
            model,
            frustum,
            view_location,
            // A well-formed tree is never deeper than its node count, so
            // this bound only trips on corrupt assets.
            max_depth: model.nodes.len(),
            depth_exceeded: false,
        }
    }

    /// Traverse from the root, filling `state`'s draw lists.
    pub fn walk(&mut self, state: &mut FrameVisibility) {
        if self.model.nodes.is_empty() {
            return;
        }
        self.visit(0, 0, state);
    }

    /// True if the depth bound was hit and a subtree was abandoned.
    pub fn depth_exceeded(&self) -> bool {
        self.depth_exceeded
    }

    fn visit(&mut self, index: usize, depth: usize, state: &mut FrameVisibility) {
        let node = &self.model.nodes[index];

        // Zone prune: nothing in this subtree is visible from any zone
        // reached so far.
        if !node.zone_mask.intersects(state.reachable) {
            return;
        }

        // Coarse frustum prune. Intersecting and Inside both continue;
        // only a definite Outside cuts the subtree.
        if let Some(bound) = node.render_bound_index() {
            if let Some(bbox) = self.model.bounds.get(bound) {
                if self.frustum.test(bbox) == Intersection::Outside {
                    return;
                }
            }
        }

        if depth >= self.max_depth {
            self.depth_exceeded = true;
            return;
        }

        // Pick the half-space containing the viewpoint as "front" so the
        // near side is always recursed first.
        let swapped = node.signed_distance(self.view_location) < 0.0;
        let mut front = node.front;
        let mut back = node.back;
        if swapped {
            std::mem::swap(&mut front, &mut back);
        }

        if front >= 0 {
            self.visit(front as usize, depth + 1, state);
        }

        // Emit this plane's surfaces between the two half-spaces; that
        // placement is what makes the output order exact.
        let mut poly = index;
        for _ in 0..self.model.nodes.len() {
            self.emit_surface(poly, swapped, state);
            match self.model.nodes[poly].next_coplanar() {
                Some(next) => poly = next,
                None => break,
            }
        }

        if back >= 0 {
            self.visit(back as usize, depth + 1, state);
        }
    }

    /// Classify one node's surface and append a draw record if it is
    /// drawable.
    fn emit_surface(&self, index: usize, swapped: bool, state: &mut FrameVisibility) {
        let node = &self.model.nodes[index];
        if node.is_degenerate() {
            return;
        }
        let Some(surface) = node.surface_index().and_then(|i| self.model.surfaces.get(i)) else {
            return;
        };

        let mut flags = surface.flags;
        if let Some(material) = self.model.surface_material(surface) {
            flags |= material.flags;
        }

        // Crossing a portal opens the zone on the far side of the plane.
        if flags.contains(PolyFlags::PORTAL) {
            let far_zone = if swapped { node.zone1 } else { node.zone0 };
            state.reachable.insert(far_zone);
        }

        // A sky boundary participates in portal expansion above but never
        // produces a draw record itself.
        if flags.contains(PolyFlags::FAKE_BACKDROP) {
            flags |= PolyFlags::INVISIBLE;
        }
        if flags.contains(PolyFlags::INVISIBLE) {
            return;
        }

        let record = DrawNode { node: index as u32, flags };
        if flags.contains(PolyFlags::NO_OCCLUDE) {
            state.translucent.push(record);
        } else {
            state.opaque.push(record);
        }
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
