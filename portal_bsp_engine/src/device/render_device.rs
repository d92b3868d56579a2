//! RenderDevice trait and the payload types it consumes.

use glam::{Mat4, Quat, Vec2, Vec3};
use crate::error::Result;
use crate::level::{PolyFlags, TextureRef};

/// Target viewport in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Per-pass transform state handed to the device at `begin_frame`.
#[derive(Debug, Clone)]
pub struct SceneFrame {
    /// Target viewport
    pub viewport: Viewport,
    /// Object-to-world transform (identity for level geometry)
    pub object_to_world: Mat4,
    /// World-to-view transform for this pass's eye
    pub world_to_view: Mat4,
    /// Perspective projection (left-handed, 0..w clip)
    pub projection: Mat4,
    /// Field of view the projection was built from, in degrees
    pub fov_degrees: f32,
}

impl SceneFrame {
    /// Combined clip matrix used for frustum-plane extraction.
    pub fn clip_matrix(&self) -> Mat4 {
        self.projection * self.world_to_view * self.object_to_world
    }
}

/// Texture state for one sampled map of a surface submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureDescriptor {
    /// Device cache key (stable per texture)
    pub cache_id: u64,
    /// Pan offset in texels
    pub pan: Vec2,
    /// World units per texel along U and V
    pub scale: Vec2,
    /// Texel width
    pub width: u32,
    /// Texel height
    pub height: u32,
    /// The texture's pixels changed since the device last sampled it
    pub realtime_changed: bool,
}

impl TextureDescriptor {
    /// Descriptor for a texture reference with no pan.
    pub fn from_ref(texture: &TextureRef) -> Self {
        Self {
            cache_id: texture.cache_id,
            pan: Vec2::ZERO,
            scale: Vec2::splat(texture.draw_scale),
            width: texture.width,
            height: texture.height,
            realtime_changed: texture.realtime_changed,
        }
    }
}

/// Everything the device needs to draw one BSP surface.
#[derive(Debug, Clone, Default)]
pub struct SurfaceInfo {
    /// Merged surface + material flags
    pub flags: PolyFlags,
    /// Base texture
    pub texture: Option<TextureDescriptor>,
    /// Close-range detail overlay
    pub detail_texture: Option<TextureDescriptor>,
    /// Large-scale variation overlay
    pub macro_texture: Option<TextureDescriptor>,
    /// Precomputed lightmap (absent for unlit surfaces)
    pub lightmap: Option<TextureDescriptor>,
    /// Precomputed fogmap (absent for unlit surfaces or fogless zones)
    pub fogmap: Option<TextureDescriptor>,
}

/// World-space polygon plus its 2D texture-coordinate basis.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceFacet<'a> {
    /// Texture-space origin
    pub map_origin: Vec3,
    /// Texture U axis
    pub map_x: Vec3,
    /// Texture V axis
    pub map_y: Vec3,
    /// Polygon vertices in world space
    pub vertices: &'a [Vec3],
}

/// Draw payload for a mesh-type actor.
#[derive(Debug, Clone, Copy)]
pub struct MeshDraw {
    /// Actor world location
    pub location: Vec3,
    /// Actor world orientation
    pub rotation: Quat,
    /// Mesh scale
    pub scale: Vec3,
    /// Asset-system mesh id
    pub mesh_id: u64,
    /// Cached ambient light for the actor
    pub light: Vec3,
}

/// Draw payload for a sprite-type actor.
#[derive(Debug, Clone, Copy)]
pub struct SpriteDraw {
    /// Actor world location
    pub location: Vec3,
    /// Sprite texture
    pub texture: TextureDescriptor,
    /// Cached ambient light for the actor
    pub light: Vec3,
}

/// Draw payload for a brush-type actor.
#[derive(Debug, Clone, Copy)]
pub struct BrushDraw {
    /// Actor world location
    pub location: Vec3,
    /// Actor world orientation
    pub rotation: Quat,
    /// Asset-system brush id
    pub brush_id: u64,
    /// Cached ambient light for the actor
    pub light: Vec3,
}

/// Rasterization backend boundary.
///
/// Implementations must preserve submission order: the caller has already
/// established the only depth-correct ordering for translucency.
pub trait RenderDevice {
    /// Start a pass with the given transform state.
    fn begin_frame(&mut self, frame: &SceneFrame) -> Result<()>;

    /// Clear only the depth buffer (issued between the sky and main passes).
    fn clear_depth(&mut self, frame: &SceneFrame) -> Result<()>;

    /// Draw one BSP surface.
    fn draw_surface(
        &mut self,
        frame: &SceneFrame,
        surface: &SurfaceInfo,
        facet: &SurfaceFacet<'_>,
    ) -> Result<()>;

    /// Draw a mesh-type actor.
    fn draw_mesh(&mut self, frame: &SceneFrame, draw: &MeshDraw) -> Result<()>;

    /// Draw a sprite-type actor.
    fn draw_sprite(&mut self, frame: &SceneFrame, draw: &SpriteDraw) -> Result<()>;

    /// Draw a brush-type actor.
    fn draw_brush(&mut self, frame: &SceneFrame, draw: &BrushDraw) -> Result<()>;
}
