//! ViewContext — explicit per-frame camera state.
//!
//! Everything the composer and walker need from the engine is carried in
//! this value and threaded as a parameter: viewpoint location/rotation,
//! field of view, viewport, and the actor the camera is attached to (so
//! the actor pass can skip drawing it). No global engine state is consulted
//! during traversal.

use glam::{Mat4, Quat, Vec3, Vec4};
use crate::device::Viewport;
use crate::level::{ActorKey, SkyViewpoint};

/// World units: x forward, y right, z up. Device units: x right, y down,
/// z into the screen. This constant rotation converts between the two.
fn world_to_device() -> Mat4 {
    Mat4::from_cols(
        Vec4::new(0.0, 0.0, 1.0, 0.0),  // world +x -> device +z
        Vec4::new(1.0, 0.0, 0.0, 0.0),  // world +y -> device +x
        Vec4::new(0.0, -1.0, 0.0, 0.0), // world +z -> device -y
        Vec4::W,
    )
}

/// Per-frame camera state, provided by the engine/camera collaborator.
#[derive(Debug, Clone)]
pub struct ViewContext {
    /// Camera location in world space
    pub location: Vec3,
    /// Camera orientation in world space
    pub rotation: Quat,
    /// Horizontal field of view in degrees
    pub fov_degrees: f32,
    /// Target viewport
    pub viewport: Viewport,
    /// Actor the camera is attached to; skipped by the actor pass
    pub camera_actor: Option<ActorKey>,
}

impl ViewContext {
    /// World-to-view matrix for the primary pass.
    ///
    /// Composed right to left: translate the eye to the origin, undo the
    /// camera rotation, then convert world axes to device axes.
    pub fn world_to_view(&self) -> Mat4 {
        world_to_device()
            * Mat4::from_quat(self.rotation.inverse())
            * Mat4::from_translation(-self.location)
    }

    /// World-to-view matrix for the sky pass.
    ///
    /// The sky zone supplies the eye position and an orientation offset;
    /// the camera rotation still drives the view direction so the sky
    /// turns with the viewer.
    pub fn sky_to_view(&self, sky: &SkyViewpoint) -> Mat4 {
        world_to_device()
            * Mat4::from_quat(self.rotation.inverse())
            * Mat4::from_quat(sky.rotation)
            * Mat4::from_translation(-sky.location)
    }

    /// Perspective projection for the configured field of view and the
    /// viewport aspect ratio.
    ///
    /// Left-handed, 0..w clip range, near plane at 1 world unit, far plane
    /// at 32768 (level geometry never exceeds this extent).
    pub fn projection(&self) -> Mat4 {
        let fx = self.viewport.width as f32;
        let fy = self.viewport.height as f32;
        let aspect = fy / fx;
        let r_proj = (self.fov_degrees.to_radians() * 0.5).tan();
        frustum_lh_zo(-r_proj, r_proj, -aspect * r_proj, aspect * r_proj, 1.0, 32768.0)
    }
}

/// Off-center perspective frustum, left-handed, depth mapped to 0..w.
fn frustum_lh_zo(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rl = right - left;
    let tb = top - bottom;
    let fnr = far - near;
    Mat4::from_cols(
        Vec4::new(2.0 * near / rl, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * near / tb, 0.0, 0.0),
        Vec4::new(
            -(right + left) / rl,
            -(top + bottom) / tb,
            far / fnr,
            1.0,
        ),
        Vec4::new(0.0, 0.0, -far * near / fnr, 0.0),
    )
}

#[cfg(test)]
#[path = "view_context_tests.rs"]
mod tests;
