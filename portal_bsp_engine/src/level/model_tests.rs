use glam::{Quat, Vec3};
use super::*;
use crate::level::{SkyViewpoint, ZoneInfo, ZoneMask};

fn leaf_node(normal: Vec3, distance: f32, zone0: u8, zone1: u8) -> BspNode {
    BspNode {
        normal,
        distance,
        front: -1,
        back: -1,
        coplanar: -1,
        surface: -1,
        vert_pool: 0,
        num_vertices: 0,
        zone_mask: ZoneMask::ALL,
        render_bound: -1,
        zone0,
        zone1,
    }
}

// ============================================================================
// Model::zone_at
// ============================================================================

#[test]
fn test_zone_at_positive_side_returns_zone1() {
    let model = Model {
        nodes: vec![leaf_node(Vec3::X, 0.0, 3, 5)],
        ..Model::default()
    };
    assert_eq!(model.zone_at(Vec3::new(2.0, 0.0, 0.0)), 5);
}

#[test]
fn test_zone_at_negative_side_returns_zone0() {
    let model = Model {
        nodes: vec![leaf_node(Vec3::X, 0.0, 3, 5)],
        ..Model::default()
    };
    assert_eq!(model.zone_at(Vec3::new(-2.0, 0.0, 0.0)), 3);
}

#[test]
fn test_zone_at_descends_into_front_subtree() {
    // Root splits on x = 0 with a child subdividing the positive side on y = 0.
    let mut root = leaf_node(Vec3::X, 0.0, 1, 0);
    root.front = 1;
    let child = leaf_node(Vec3::Y, 0.0, 6, 7);

    let model = Model {
        nodes: vec![root, child],
        ..Model::default()
    };

    assert_eq!(model.zone_at(Vec3::new(1.0, 2.0, 0.0)), 7);
    assert_eq!(model.zone_at(Vec3::new(1.0, -2.0, 0.0)), 6);
    assert_eq!(model.zone_at(Vec3::new(-1.0, 0.0, 0.0)), 1);
}

#[test]
fn test_zone_at_empty_model() {
    let model = Model::default();
    assert_eq!(model.zone_at(Vec3::ZERO), 0);
}

#[test]
fn test_zone_at_survives_cyclic_tree() {
    // Self-referencing front child: the descent guard must terminate.
    let mut node = leaf_node(Vec3::X, 0.0, 3, 5);
    node.front = 0;
    let model = Model {
        nodes: vec![node],
        ..Model::default()
    };
    assert_eq!(model.zone_at(Vec3::new(1.0, 0.0, 0.0)), 0);
}

// ============================================================================
// Model::sky_viewpoint
// ============================================================================

#[test]
fn test_sky_viewpoint_takes_first_sky_zone() {
    let sky_a = SkyViewpoint { location: Vec3::new(1.0, 0.0, 0.0), rotation: Quat::IDENTITY };
    let sky_b = SkyViewpoint { location: Vec3::new(2.0, 0.0, 0.0), rotation: Quat::IDENTITY };

    let model = Model {
        zones: vec![
            Zone::default(),
            Zone { actor: Some(ZoneInfo { sky_viewpoint: Some(sky_a), ..ZoneInfo::default() }) },
            Zone { actor: Some(ZoneInfo { sky_viewpoint: Some(sky_b), ..ZoneInfo::default() }) },
        ],
        ..Model::default()
    };

    let sky = model.sky_viewpoint().expect("sky should resolve");
    assert_eq!(sky.location.x, 1.0);
}

#[test]
fn test_no_sky_viewpoint_without_sky_zones() {
    let model = Model {
        zones: vec![Zone::default(), Zone { actor: Some(ZoneInfo::default()) }],
        ..Model::default()
    };
    assert!(model.sky_viewpoint().is_none());
}

// ============================================================================
// Model::gather_node_points
// ============================================================================

#[test]
fn test_gather_node_points_resolves_vertex_pool() {
    let mut node = leaf_node(Vec3::X, 0.0, 0, 0);
    node.vert_pool = 1;
    node.num_vertices = 3;

    let model = Model {
        nodes: vec![node],
        points: vec![
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ],
        vertices: vec![
            BspVert { point: 0 },
            BspVert { point: 3 },
            BspVert { point: 1 },
            BspVert { point: 2 },
        ],
        ..Model::default()
    };

    let mut scratch = vec![Vec3::splat(9.0)]; // stale content must be cleared
    model.gather_node_points(&model.nodes[0], &mut scratch);

    assert_eq!(scratch.len(), 3);
    assert_eq!(scratch[0], Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(scratch[1], Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(scratch[2], Vec3::new(0.0, 1.0, 0.0));
}

// ============================================================================
// Level actor set
// ============================================================================

#[test]
fn test_spawn_returns_stable_keys() {
    let mut level = Level::new(Model::default());
    let a = level.spawn(Actor::new(Vec3::ZERO));
    let b = level.spawn(Actor::new(Vec3::X));

    level.actors.remove(a);
    assert!(level.actors.get(b).is_some());
    assert_eq!(level.actors[b].location, Vec3::X);
}
