use glam::{Quat, Vec3};
use super::*;

// ============================================================================
// ZoneMask set operations
// ============================================================================

#[test]
fn test_empty_mask() {
    let mask = ZoneMask::EMPTY;
    assert!(mask.is_empty());
    assert_eq!(mask.len(), 0);
    assert!(!mask.contains(0));
}

#[test]
fn test_single_zone_mask() {
    let mask = ZoneMask::zone(5);
    assert_eq!(mask.0, 1 << 5);
    assert!(mask.contains(5));
    assert!(!mask.contains(4));
    assert_eq!(mask.len(), 1);
}

#[test]
fn test_insert_and_contains() {
    let mut mask = ZoneMask::EMPTY;
    mask.insert(0);
    mask.insert(63);
    assert!(mask.contains(0));
    assert!(mask.contains(63));
    assert!(!mask.contains(32));
    assert_eq!(mask.len(), 2);
}

#[test]
fn test_intersects() {
    let a = ZoneMask::zone(3).union(ZoneMask::zone(7));
    let b = ZoneMask::zone(7);
    let c = ZoneMask::zone(8);
    assert!(a.intersects(b));
    assert!(!a.intersects(c));
    assert!(!a.intersects(ZoneMask::EMPTY));
}

#[test]
fn test_union() {
    let a = ZoneMask::zone(1);
    let b = ZoneMask::zone(2);
    let u = a.union(b);
    assert!(u.contains(1));
    assert!(u.contains(2));
    assert_eq!(u.len(), 2);
}

#[test]
fn test_highest_zone_id_fits() {
    // The documented limit: zone 63 is the last representable zone
    let mask = ZoneMask::zone(63);
    assert_eq!(mask.0, 1 << 63);
    assert!(ZoneMask::ALL.contains(63));
}

// ============================================================================
// Zone sky-viewpoint capability
// ============================================================================

#[test]
fn test_zone_without_actor_has_no_sky() {
    let zone = Zone::default();
    assert!(zone.sky_viewpoint().is_none());
}

#[test]
fn test_zone_with_plain_actor_has_no_sky() {
    let zone = Zone { actor: Some(ZoneInfo::default()) };
    assert!(zone.sky_viewpoint().is_none());
}

#[test]
fn test_zone_with_sky_viewpoint() {
    let zone = Zone {
        actor: Some(ZoneInfo {
            sky_viewpoint: Some(SkyViewpoint {
                location: Vec3::new(1.0, 2.0, 3.0),
                rotation: Quat::IDENTITY,
            }),
            ..ZoneInfo::default()
        }),
    };

    let sky = zone.sky_viewpoint().expect("sky viewpoint should resolve");
    assert_eq!(sky.location, Vec3::new(1.0, 2.0, 3.0));
}
