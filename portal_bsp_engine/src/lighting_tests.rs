use glam::Vec3;
use super::*;
use crate::level::BspSurface;

#[test]
fn test_flat_lighting_is_full_bright() {
    let mut lights = FlatLighting;
    assert_eq!(lights.ambient_light(Vec3::new(10.0, -4.0, 2.0), 3), Vec3::ONE);
}

#[test]
fn test_flat_lighting_has_no_maps() {
    let mut lights = FlatLighting;
    let surface = BspSurface::default();
    let vertices = [Vec3::ZERO, Vec3::X, Vec3::Y];
    let facet = SurfaceFacet {
        map_origin: Vec3::ZERO,
        map_x: Vec3::X,
        map_y: Vec3::Y,
        vertices: &vertices,
    };

    assert!(lights.surface_lightmap(0, &surface, &facet, None).is_none());
    assert!(lights.surface_fogmap(0, &surface, &facet, 0).is_none());
}
