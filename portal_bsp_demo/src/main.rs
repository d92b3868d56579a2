//! Headless demo: builds a small two-room portal level, renders a few
//! frames into the recording device and logs what the visibility system
//! produced.

use portal_bsp_engine::engine_info;
use portal_bsp_engine::glam::{Quat, Vec3};
use portal_bsp_engine::portalbsp::camera::ViewContext;
use portal_bsp_engine::portalbsp::device::{RecordingDevice, Viewport};
use portal_bsp_engine::portalbsp::level::{
    Actor, BoundingBox, BspNode, BspSurface, BspVert, DrawType, Level, Material, MeshGeometry,
    Model, PolyFlags, SkyViewpoint, TextureRef, Zone, ZoneInfo, ZoneMask,
};
use portal_bsp_engine::portalbsp::lighting::FlatLighting;
use portal_bsp_engine::portalbsp::scene::SceneComposer;
use portal_bsp_engine::portalbsp::Result;

const SOURCE: &str = "portal_bsp_demo";

fn texture(cache_id: u64) -> TextureRef {
    TextureRef {
        cache_id,
        width: 128,
        height: 128,
        draw_scale: 1.0,
        realtime_changed: false,
    }
}

fn wall_node(distance: f32, surface: i32, mask: ZoneMask, zone: u8) -> BspNode {
    BspNode {
        normal: Vec3::X,
        distance,
        front: -1,
        back: -1,
        coplanar: -1,
        surface,
        vert_pool: 0,
        num_vertices: 4,
        zone_mask: mask,
        render_bound: -1,
        zone0: zone,
        zone1: zone,
    }
}

fn opaque_surface(material: u32) -> BspSurface {
    BspSurface {
        material: Some(material),
        ..BspSurface::default()
    }
}

fn plain_material(cache_id: u64) -> Material {
    Material {
        flags: PolyFlags::empty(),
        texture: texture(cache_id),
        detail_texture: None,
        macro_texture: None,
    }
}

/// Two rooms split at x = 0 by an invisible portal: zone 0 east, zone 1
/// west. Zone 1 doubles as the sky zone.
fn build_level() -> Level {
    let both = ZoneMask::zone(0).union(ZoneMask::zone(1));

    let mut divider = wall_node(0.0, 0, both, 0);
    divider.front = 1;
    divider.back = 2;
    divider.zone0 = 1;
    divider.zone1 = 0;

    let east_wall = wall_node(200.0, 1, ZoneMask::zone(0), 0);
    let west_wall = wall_node(-200.0, 2, ZoneMask::zone(1), 1);

    let model = Model {
        nodes: vec![divider, east_wall, west_wall],
        surfaces: vec![
            BspSurface {
                material: Some(0),
                flags: PolyFlags::PORTAL | PolyFlags::INVISIBLE,
                ..BspSurface::default()
            },
            opaque_surface(1),
            opaque_surface(2),
        ],
        materials: vec![plain_material(1), plain_material(2), plain_material(3)],
        points: vec![
            Vec3::ZERO,
            Vec3::new(0.0, -128.0, -128.0),
            Vec3::new(0.0, 128.0, -128.0),
            Vec3::new(0.0, 128.0, 128.0),
            Vec3::new(0.0, -128.0, 128.0),
        ],
        vectors: vec![Vec3::Y, Vec3::Z],
        vertices: vec![
            BspVert { point: 1 },
            BspVert { point: 2 },
            BspVert { point: 3 },
            BspVert { point: 4 },
        ],
        bounds: vec![],
        zones: vec![
            Zone::default(),
            Zone {
                actor: Some(ZoneInfo {
                    sky_viewpoint: Some(SkyViewpoint {
                        location: Vec3::new(-100.0, 0.0, 0.0),
                        rotation: Quat::IDENTITY,
                    }),
                    ..ZoneInfo::default()
                }),
            },
        ],
    };

    let mut level = Level::new(model);

    let mut crate_prop = Actor::new(Vec3::new(80.0, 20.0, 0.0));
    crate_prop.draw_type = DrawType::Mesh;
    crate_prop.mesh = Some(MeshGeometry {
        bounding_box: BoundingBox { min: Vec3::splat(-16.0), max: Vec3::splat(16.0) },
        scale: Vec3::ONE,
        mesh_id: 1,
    });
    level.spawn(crate_prop);

    let mut torch_flame = Actor::new(Vec3::new(60.0, -30.0, 40.0));
    torch_flame.draw_type = DrawType::Sprite;
    torch_flame.sprite = Some(texture(40));
    torch_flame.corona = true;
    torch_flame.unlit = true;
    level.spawn(torch_flame);

    level
}

fn run() -> Result<()> {
    let mut level = build_level();
    let view = ViewContext {
        location: Vec3::new(50.0, 0.0, 0.0),
        rotation: Quat::from_rotation_z(std::f32::consts::PI),
        fov_degrees: 90.0,
        viewport: Viewport { x: 0, y: 0, width: 800, height: 600 },
        camera_actor: None,
    };

    let mut composer = SceneComposer::new();
    let mut device = RecordingDevice::new();
    let mut lights = FlatLighting;

    engine_info!(
        SOURCE,
        "level built: {} nodes, {} zones, {} actors",
        level.model.nodes.len(),
        level.model.zones.len(),
        level.actors.len()
    );

    for frame in 0..3 {
        device.clear();
        composer.update(1.0 / 60.0);
        composer.draw_scene(&mut level, &view, &mut device, &mut lights)?;

        engine_info!(
            SOURCE,
            "frame {}: view zone {}, {} reachable zones, {} opaque, {} translucent, \
             {} device calls, {} coronas",
            frame,
            composer.visibility().view_zone,
            composer.visibility().reachable.len(),
            composer.visibility().opaque.len(),
            composer.visibility().translucent.len(),
            device.calls().len(),
            composer.corona_actors().len()
        );
    }

    engine_info!(SOURCE, "texture cache holds {} entries", device.texture_cache_len());
    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("demo failed: {error}");
        std::process::exit(1);
    }
}
