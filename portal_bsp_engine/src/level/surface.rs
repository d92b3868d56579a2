//! BSP surfaces and materials.
//!
//! A surface is the drawable skin of a BSP node: material reference,
//! accumulated draw-mode flags and the texture-space basis. Surfaces are
//! immutable per level load; the referenced material's animation flags
//! are toggled externally.

use bitflags::bitflags;

bitflags! {
    /// Draw-mode flags merged from surface and material at submission time.
    ///
    /// Only PORTAL / INVISIBLE / UNLIT / NO_OCCLUDE / FAKE_BACKDROP and the
    /// auto-pan bits carry semantics inside the visibility system; the
    /// remaining bits pass through to the render device untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolyFlags: u32 {
        /// Color-key masked texture
        const MASKED        = 1 << 0;
        /// Alpha-blended surface
        const TRANSLUCENT   = 1 << 1;
        /// Drawn from both sides
        const TWO_SIDED     = 1 << 2;
        /// Sky boundary: invisible in place, depth discarded behind it
        const FAKE_BACKDROP = 1 << 3;
        /// Texture pans automatically along U over time
        const AUTO_U_PAN    = 1 << 4;
        /// Texture pans automatically along V over time
        const AUTO_V_PAN    = 1 << 5;
        /// Surface does not occlude: submit in the translucent bucket
        const NO_OCCLUDE    = 1 << 6;
        /// Skip lightmap/fogmap lookup
        const UNLIT         = 1 << 7;
        /// Emits no draw record
        const INVISIBLE     = 1 << 8;
        /// Crossing this surface opens visibility into the adjoining zone
        const PORTAL        = 1 << 9;
    }
}

/// Reference to a texture owned by the asset system.
///
/// The cache id is stable for the texture's lifetime and is how the render
/// device keys its own texture cache.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureRef {
    /// Device cache key
    pub cache_id: u64,
    /// Texel width
    pub width: u32,
    /// Texel height
    pub height: u32,
    /// World units per texel
    pub draw_scale: f32,
    /// Set by live texture animation; cleared after the device sees it
    pub realtime_changed: bool,
}

/// Material referenced by surfaces.
#[derive(Debug, Clone)]
pub struct Material {
    /// Flags ORed into every surface using this material
    pub flags: PolyFlags,
    /// Base texture
    pub texture: TextureRef,
    /// Close-range detail overlay
    pub detail_texture: Option<TextureRef>,
    /// Large-scale variation overlay
    pub macro_texture: Option<TextureRef>,
}

/// One drawable surface of the BSP.
#[derive(Debug, Clone, Default)]
pub struct BspSurface {
    /// Index into `Model::materials` (None = untextured)
    pub material: Option<u32>,
    /// Surface-level draw flags
    pub flags: PolyFlags,
    /// Texture-space origin: index into `Model::points`
    pub base_point: u32,
    /// Texture U axis: index into `Model::vectors`
    pub texture_u: u32,
    /// Texture V axis: index into `Model::vectors`
    pub texture_v: u32,
    /// Texture pan offset along U
    pub pan_u: i32,
    /// Texture pan offset along V
    pub pan_v: i32,
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;
