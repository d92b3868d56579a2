//! Level module
//!
//! Read-only static level data (BSP nodes, surfaces, zones, materials)
//! and the dynamic actor set. Everything here arrives as a well-formed
//! asset at level load; construction/compilation of BSP trees is outside
//! this crate.

mod actor;
mod bsp;
mod model;
mod surface;
mod zone;

pub use actor::{Actor, ActorKey, BrushGeometry, DrawType, MeshGeometry};
pub use bsp::{BoundingBox, BspNode, BspVert};
pub use model::{Level, Model};
pub use surface::{BspSurface, Material, PolyFlags, TextureRef};
pub use zone::{SkyViewpoint, Zone, ZoneInfo, ZoneMask, MAX_ZONES};
