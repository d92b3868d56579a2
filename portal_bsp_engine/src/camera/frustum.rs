//! FrustumPlanes — six clipping planes for visibility culling.
//!
//! Each plane is a Vec4 (A, B, C, D) where (A, B, C) is the unit
//! inward-pointing normal and D the signed distance. A point P is inside
//! the frustum when dot(plane, P_homogeneous) >= 0 for all six planes.
//!
//! Planes are extracted from the combined clip matrix
//! (projection * view * model) for the left-handed, zero-to-positive-w
//! clip convention used by the scene projection.

use glam::{Mat4, Vec3, Vec4};
use crate::level::BoundingBox;

/// Result of a 3-way frustum/box classification.
///
/// Used by the BSP traversal for coarse subtree culling:
/// - `Outside` → prune the subtree
/// - `Inside` → subtree fully visible, per-node tests still cheap enough to keep
/// - `Intersecting` → keep walking, conservative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intersection {
    /// Box is entirely outside the frustum
    Outside,
    /// Box partially overlaps the frustum (or the test could not prove more)
    Intersecting,
    /// Box is entirely inside the frustum
    Inside,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_TOP: usize = 2;
pub const PLANE_BOTTOM: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes for culling.
///
/// Each plane is (A, B, C, D) where Ax + By + Cz + D = 0 and the normal
/// (A, B, C) points inward (toward the visible volume).
#[derive(Debug, Clone, Copy)]
pub struct FrustumPlanes {
    /// Frustum planes: left, right, top, bottom, near, far
    pub planes: [Vec4; 6],
}

impl FrustumPlanes {
    /// Extract frustum planes from a clip matrix (projection * view * model).
    ///
    /// Row combinations follow the standard clip-plane identities for a
    /// left-handed projection with the 0..w clip range: the near plane is
    /// row 2 alone (0 <= z), the far plane row3 - row2 (z <= w).
    /// Each plane is normalized so that (A, B, C) is a unit vector.
    pub fn from_clip_matrix(clip: &Mat4) -> Self {
        let r0 = clip.row(0);
        let r1 = clip.row(1);
        let r2 = clip.row(2);
        let r3 = clip.row(3);

        let mut planes = [
            r3 + r0, // left:   -w <= x
            r3 - r0, // right:   x <= w
            r3 - r1, // top:     y <= w
            r3 + r1, // bottom: -w <= y
            r2,      // near:    0 <= z
            r3 - r2, // far:     z <= w
        ];

        // Normalize each plane
        for plane in &mut planes {
            let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Classify an axis-aligned box against the frustum (3-way test).
    ///
    /// Tests the positive support point (corner most aligned with the plane
    /// normal) and negative support point against each plane:
    /// - positive point outside any plane → `Outside` (early out)
    /// - negative point outside some plane → at most `Intersecting`
    /// - all negative points inside all planes → `Inside`
    ///
    /// The test is conservative: it may report `Intersecting` for a box
    /// that is actually outside (corner cases of the support-point test),
    /// but never `Outside` for a box that touches the frustum.
    pub fn test(&self, bbox: &BoundingBox) -> Intersection {
        let mut all_inside = true;

        for plane in &self.planes {
            let normal = Vec3::new(plane.x, plane.y, plane.z);

            // Positive support point: corner most in the direction of the normal
            let p_vertex = Vec3::new(
                if normal.x >= 0.0 { bbox.max.x } else { bbox.min.x },
                if normal.y >= 0.0 { bbox.max.y } else { bbox.min.y },
                if normal.z >= 0.0 { bbox.max.z } else { bbox.min.z },
            );

            // If the positive support point is outside, the whole box is outside
            if normal.dot(p_vertex) + plane.w < 0.0 {
                return Intersection::Outside;
            }

            // Negative support point: corner least in the direction of the normal
            let n_vertex = Vec3::new(
                if normal.x >= 0.0 { bbox.min.x } else { bbox.max.x },
                if normal.y >= 0.0 { bbox.min.y } else { bbox.max.y },
                if normal.z >= 0.0 { bbox.min.z } else { bbox.max.z },
            );

            // If the negative support point is outside, the box straddles this plane
            if normal.dot(n_vertex) + plane.w < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { Intersection::Inside } else { Intersection::Intersecting }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
