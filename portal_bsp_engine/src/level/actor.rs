//! Dynamic actors.
//!
//! Actors live outside the BSP: they are enumerated every frame by the
//! actor pass, classified by draw type, box-culled (mesh and brush types)
//! and dispatched to the device. Stored in a SlotMap so keys stay stable
//! across removals.

use glam::{Quat, Vec3};
use slotmap::new_key_type;
use super::bsp::BoundingBox;
use super::surface::TextureRef;

new_key_type! {
    /// Stable key for an Actor within a Level.
    pub struct ActorKey;
}

/// How an actor is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawType {
    /// Not rendered
    None,
    /// Animated mesh
    Mesh,
    /// Camera-facing sprite (never box-culled)
    Sprite,
    /// Static brush geometry
    Brush,
}

/// Mesh geometry reference for mesh-type actors.
#[derive(Debug, Clone, Copy)]
pub struct MeshGeometry {
    /// Local-space bounds of the mesh
    pub bounding_box: BoundingBox,
    /// Mesh scale applied to the bounds and at draw time
    pub scale: Vec3,
    /// Asset-system mesh id
    pub mesh_id: u64,
}

impl MeshGeometry {
    /// World-space culling box: bounds scaled then translated to the
    /// actor's location. The actor's rotation is not applied to the box.
    pub fn world_bounds(&self, location: Vec3) -> BoundingBox {
        self.bounding_box.scaled_translated(self.scale, location)
    }
}

/// Brush geometry reference for brush-type actors.
#[derive(Debug, Clone, Copy)]
pub struct BrushGeometry {
    /// Local-space bounds of the brush
    pub bounding_box: BoundingBox,
    /// Asset-system brush id
    pub brush_id: u64,
}

impl BrushGeometry {
    /// World-space culling box: bounds translated to the actor's location.
    pub fn world_bounds(&self, location: Vec3) -> BoundingBox {
        self.bounding_box.translated(location)
    }
}

/// One dynamic object in the level.
#[derive(Debug, Clone)]
pub struct Actor {
    /// World location
    pub location: Vec3,
    /// World orientation
    pub rotation: Quat,
    /// Hidden actors are never drawn
    pub hidden: bool,
    /// Collected into the corona overlay list every frame
    pub corona: bool,
    /// Skips the ambient light lookup (full bright)
    pub unlit: bool,
    /// Zone the actor currently occupies
    pub zone: u8,
    /// Draw classification
    pub draw_type: DrawType,
    /// Mesh geometry (required when draw_type is Mesh)
    pub mesh: Option<MeshGeometry>,
    /// Sprite texture (required when draw_type is Sprite)
    pub sprite: Option<TextureRef>,
    /// Brush geometry (required when draw_type is Brush)
    pub brush: Option<BrushGeometry>,
    /// Ambient light, sampled once per actor lifetime by the actor pass
    pub(crate) light: Option<Vec3>,
}

impl Actor {
    /// A non-rendered actor at a location.
    pub fn new(location: Vec3) -> Self {
        Self {
            location,
            rotation: Quat::IDENTITY,
            hidden: false,
            corona: false,
            unlit: false,
            zone: 0,
            draw_type: DrawType::None,
            mesh: None,
            sprite: None,
            brush: None,
            light: None,
        }
    }

    /// Cached ambient light, if the actor pass has sampled it.
    pub fn ambient_light(&self) -> Option<Vec3> {
        self.light
    }
}

#[cfg(test)]
#[path = "actor_tests.rs"]
mod tests;
