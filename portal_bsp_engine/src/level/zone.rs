//! Zones and zone masks.
//!
//! A zone is a portal-connected region of level space identified by a
//! small integer id. The visibility system treats a zone purely as a bit
//! position; zone-describing actors carry properties (sky linkage, fog,
//! gravity) consumed by other subsystems.

use glam::{Quat, Vec3};

/// Hard limit on zones per level: ids 0-63 so membership fits one u64.
pub const MAX_ZONES: usize = 64;

/// Set of zone ids, one bit per zone.
///
/// Used both for a node's zone membership (from which zones is this node
/// visible) and for the per-frame reachable-zone set grown through portals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneMask(pub u64);

impl ZoneMask {
    /// The empty set
    pub const EMPTY: ZoneMask = ZoneMask(0);

    /// All 64 zones
    pub const ALL: ZoneMask = ZoneMask(u64::MAX);

    /// Mask containing a single zone.
    ///
    /// Zone ids are bounded to 0-63 by level construction; the shift is
    /// masked so an out-of-range id cannot overflow.
    pub fn zone(id: u8) -> ZoneMask {
        ZoneMask(1u64 << (id & 63))
    }

    /// Add a zone to the set
    pub fn insert(&mut self, id: u8) {
        self.0 |= ZoneMask::zone(id).0;
    }

    /// Test whether a zone is in the set
    pub fn contains(&self, id: u8) -> bool {
        self.0 & ZoneMask::zone(id).0 != 0
    }

    /// Test whether the two sets share any zone
    pub fn intersects(&self, other: ZoneMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Set union
    pub fn union(&self, other: ZoneMask) -> ZoneMask {
        ZoneMask(self.0 | other.0)
    }

    /// Number of zones in the set
    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    /// True when no zone is set
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Viewpoint of a sky zone: the auxiliary eye used for the sky pass.
#[derive(Debug, Clone, Copy)]
pub struct SkyViewpoint {
    /// Eye location inside the sky box geometry
    pub location: Vec3,
    /// Orientation offset composed with the camera rotation
    pub rotation: Quat,
}

/// Properties of a zone-describing actor.
///
/// Fog and gravity are consumed by other subsystems; the renderer only
/// queries the sky-viewpoint capability.
#[derive(Debug, Clone)]
pub struct ZoneInfo {
    /// Distance fog color for geometry in this zone
    pub fog_color: Vec3,
    /// Distance fog density (0 = no fog)
    pub fog_density: f32,
    /// Gravity applied to actors in this zone
    pub gravity: Vec3,
    /// When present, this zone designates the sky-pass viewpoint
    pub sky_viewpoint: Option<SkyViewpoint>,
}

impl Default for ZoneInfo {
    fn default() -> Self {
        Self {
            fog_color: Vec3::ZERO,
            fog_density: 0.0,
            gravity: Vec3::new(0.0, 0.0, -950.0),
            sky_viewpoint: None,
        }
    }
}

/// One zone of the level. The id is the index in `Model::zones`.
#[derive(Debug, Clone, Default)]
pub struct Zone {
    /// Zone-describing actor, if one was placed in this zone
    pub actor: Option<ZoneInfo>,
}

impl Zone {
    /// Capability query: does this zone designate a sky viewpoint?
    pub fn sky_viewpoint(&self) -> Option<&SkyViewpoint> {
        self.actor.as_ref().and_then(|info| info.sky_viewpoint.as_ref())
    }
}

#[cfg(test)]
#[path = "zone_tests.rs"]
mod tests;
