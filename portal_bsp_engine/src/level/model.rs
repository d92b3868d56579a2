//! Model — the read-only static geometry tables, and Level, which pairs
//! the model with the dynamic actor set.
//!
//! All arrays are loaded once with the level and never mutated during
//! traversal; multiple frames may share them as long as each frame owns
//! its visibility state.

use glam::Vec3;
use slotmap::SlotMap;
use crate::engine_warn;
use super::actor::{Actor, ActorKey};
use super::bsp::{BoundingBox, BspNode, BspVert};
use super::surface::{BspSurface, Material};
use super::zone::{SkyViewpoint, Zone};

/// Static level geometry: BSP nodes and the tables they index.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// BSP nodes; index 0 is the root
    pub nodes: Vec<BspNode>,
    /// Surface table
    pub surfaces: Vec<BspSurface>,
    /// Material table
    pub materials: Vec<Material>,
    /// World-space points (polygon vertices, texture bases)
    pub points: Vec<Vec3>,
    /// World-space direction vectors (texture axes)
    pub vectors: Vec<Vec3>,
    /// Shared vertex pool referenced by node vertex ranges
    pub vertices: Vec<BspVert>,
    /// Render bounds for coarse culling
    pub bounds: Vec<BoundingBox>,
    /// Zone table; the index is the zone id
    pub zones: Vec<Zone>,
}

impl Model {
    /// Locate the zone enclosing a world point.
    ///
    /// Descends from the root, swapping front and back whenever the point
    /// is on the negative side of a node's plane, so "front" always names
    /// the half-space containing the point. Stops at the first leaf marker
    /// and returns the zone id on the occupied side.
    pub fn zone_at(&self, point: Vec3) -> u8 {
        if self.nodes.is_empty() {
            return 0;
        }

        let mut index = 0usize;
        // A well-formed tree never revisits a node, so the node count
        // bounds the descent.
        for _ in 0..self.nodes.len() {
            let node = &self.nodes[index];
            let swapped = node.signed_distance(point) < 0.0;
            let mut front = node.front;
            let mut back = node.back;
            if swapped {
                std::mem::swap(&mut front, &mut back);
            }

            if front >= 0 {
                index = front as usize;
            } else {
                return if swapped { node.zone0 } else { node.zone1 };
            }
        }

        engine_warn!(
            "portalbsp::Model",
            "zone_at descended through {} nodes without reaching a leaf",
            self.nodes.len()
        );
        0
    }

    /// Resolve the sky-pass viewpoint, if any zone designates one.
    ///
    /// Scans declared zones and takes the first sky-capable one; this is
    /// not per-surface-accurate but matches how levels author a single
    /// sky box.
    pub fn sky_viewpoint(&self) -> Option<&SkyViewpoint> {
        self.zones.iter().find_map(|zone| zone.sky_viewpoint())
    }

    /// Material referenced by a surface, if any.
    pub fn surface_material(&self, surface: &BspSurface) -> Option<&Material> {
        surface.material.and_then(|idx| self.materials.get(idx as usize))
    }

    /// Gather a node's polygon vertices into `out` as world-space points.
    ///
    /// `out` is cleared first; the composer reuses one scratch buffer
    /// across all submissions of a frame.
    pub fn gather_node_points(&self, node: &BspNode, out: &mut Vec<Vec3>) {
        out.clear();
        let start = node.vert_pool as usize;
        let end = start + node.num_vertices as usize;
        for vert in &self.vertices[start..end] {
            out.push(self.points[vert.point as usize]);
        }
    }
}

/// A loaded level: immutable geometry plus the dynamic actor set.
pub struct Level {
    /// Static geometry, read-only for the level's lifetime
    pub model: Model,
    /// Dynamic actors with stable keys
    pub actors: SlotMap<ActorKey, Actor>,
}

impl Level {
    /// Wrap a loaded model with an empty actor set.
    pub fn new(model: Model) -> Self {
        Self {
            model,
            actors: SlotMap::with_key(),
        }
    }

    /// Add an actor, returning its stable key.
    pub fn spawn(&mut self, actor: Actor) -> ActorKey {
        self.actors.insert(actor)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
