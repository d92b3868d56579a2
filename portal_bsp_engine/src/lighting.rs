//! Lighting collaborator boundary.
//!
//! The visibility pass does not compute light: it asks a `LightProvider`
//! for per-actor ambient light (sampled once per actor lifetime) and for
//! precomputed lightmap/fogmap textures per surface submission.

use glam::Vec3;
use crate::device::{SurfaceFacet, TextureDescriptor};
use crate::level::{BspSurface, ZoneInfo};

/// Precomputed lighting lookup, implemented by the lightmap subsystem.
///
/// Methods take `&mut self` so implementations can cache built maps
/// keyed by surface index.
pub trait LightProvider {
    /// Ambient light at a world location inside a zone.
    fn ambient_light(&mut self, location: Vec3, zone: u8) -> Vec3;

    /// Lightmap texture for a surface, if the surface is lit.
    ///
    /// `zone` is the zone-describing actor bordering the surface's
    /// positive side, when one exists.
    fn surface_lightmap(
        &mut self,
        surface_index: usize,
        surface: &BspSurface,
        facet: &SurfaceFacet<'_>,
        zone: Option<&ZoneInfo>,
    ) -> Option<TextureDescriptor>;

    /// Fogmap texture for a surface, keyed by the viewer's zone.
    fn surface_fogmap(
        &mut self,
        surface_index: usize,
        surface: &BspSurface,
        facet: &SurfaceFacet<'_>,
        view_zone: u8,
    ) -> Option<TextureDescriptor>;
}

/// Full-bright lighting with no maps.
///
/// Stand-in provider for tools, tests and levels without baked light.
pub struct FlatLighting;

impl LightProvider for FlatLighting {
    fn ambient_light(&mut self, _location: Vec3, _zone: u8) -> Vec3 {
        Vec3::ONE
    }

    fn surface_lightmap(
        &mut self,
        _surface_index: usize,
        _surface: &BspSurface,
        _facet: &SurfaceFacet<'_>,
        _zone: Option<&ZoneInfo>,
    ) -> Option<TextureDescriptor> {
        None
    }

    fn surface_fogmap(
        &mut self,
        _surface_index: usize,
        _surface: &BspSurface,
        _facet: &SurfaceFacet<'_>,
        _view_zone: u8,
    ) -> Option<TextureDescriptor> {
        None
    }
}

#[cfg(test)]
#[path = "lighting_tests.rs"]
mod tests;
