//! Device module - the boundary to the rasterization backend.
//!
//! The visibility system produces already-ordered, already-culled surface
//! descriptors; a `RenderDevice` implementation consumes them. Submission
//! order is part of the contract: opaque front-to-back, decals, translucent
//! back-to-front, then dynamic actors, with no device-side reordering.

mod recording;
mod render_device;

pub use recording::{DeviceCall, RecordingDevice};
pub use render_device::{
    BrushDraw, MeshDraw, RenderDevice, SceneFrame, SpriteDraw,
    SurfaceFacet, SurfaceInfo, TextureDescriptor, Viewport,
};
