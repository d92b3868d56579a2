//! BSP tree node types.
//!
//! The tree is an immutable static asset: one splitting plane per node,
//! front/back child indices (negative = leaf), a coplanar sibling chain
//! for additional surfaces on the same plane, and zone bookkeeping used
//! by the portal visibility walk.

use glam::Vec3;
use super::zone::ZoneMask;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl BoundingBox {
    /// Box scaled about the origin then translated.
    ///
    /// This is the actor-culling box construction: rotation is
    /// deliberately not applied, and level content is authored against
    /// that approximation.
    pub fn scaled_translated(&self, scale: Vec3, translation: Vec3) -> BoundingBox {
        BoundingBox {
            min: self.min * scale + translation,
            max: self.max * scale + translation,
        }
    }

    /// Box translated without scaling (brush actors).
    pub fn translated(&self, translation: Vec3) -> BoundingBox {
        BoundingBox {
            min: self.min + translation,
            max: self.max + translation,
        }
    }
}

/// One vertex reference in the shared vertex pool.
#[derive(Debug, Clone, Copy)]
pub struct BspVert {
    /// Index into `Model::points`
    pub point: u32,
}

/// One node of the immutable static BSP tree.
///
/// Child, sibling, surface and bound fields use `-1` as the absent
/// sentinel, matching the on-disk asset layout; the accessor methods
/// expose them as `Option<usize>`.
#[derive(Debug, Clone)]
pub struct BspNode {
    /// Unit normal of the splitting plane
    pub normal: Vec3,
    /// Plane distance: a point p is on the positive side when
    /// `normal.dot(p) - distance >= 0`
    pub distance: f32,
    /// Front child node index (negative = leaf on the positive side)
    pub front: i32,
    /// Back child node index (negative = leaf on the negative side)
    pub back: i32,
    /// Next coplanar sibling carrying another surface on this plane
    pub coplanar: i32,
    /// Index into `Model::surfaces` (negative = structural-only split)
    pub surface: i32,
    /// First vertex of this node's polygon in `Model::vertices`
    pub vert_pool: u32,
    /// Vertex count (0 = degenerate node, emits nothing)
    pub num_vertices: u32,
    /// Zones from which this node (or its subtree) can be seen
    pub zone_mask: ZoneMask,
    /// Index into `Model::bounds` for coarse culling (negative = none)
    pub render_bound: i32,
    /// Zone id bordering the negative side of the plane
    pub zone0: u8,
    /// Zone id bordering the positive side of the plane
    pub zone1: u8,
}

impl BspNode {
    /// Signed distance of a point to this node's splitting plane.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// Front child index, if the front side has one.
    pub fn front_child(&self) -> Option<usize> {
        (self.front >= 0).then(|| self.front as usize)
    }

    /// Back child index, if the back side has one.
    pub fn back_child(&self) -> Option<usize> {
        (self.back >= 0).then(|| self.back as usize)
    }

    /// Next node in the coplanar sibling chain.
    pub fn next_coplanar(&self) -> Option<usize> {
        (self.coplanar >= 0).then(|| self.coplanar as usize)
    }

    /// Surface table index, if this node carries a surface.
    pub fn surface_index(&self) -> Option<usize> {
        (self.surface >= 0).then(|| self.surface as usize)
    }

    /// Render bound table index, if this node carries one.
    pub fn render_bound_index(&self) -> Option<usize> {
        (self.render_bound >= 0).then(|| self.render_bound as usize)
    }

    /// Structural-only splits carry no drawable polygon.
    pub fn is_degenerate(&self) -> bool {
        self.num_vertices == 0 || self.surface < 0
    }
}

#[cfg(test)]
#[path = "bsp_tests.rs"]
mod tests;
