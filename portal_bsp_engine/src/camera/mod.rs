//! Camera module
//!
//! Frustum plane extraction/classification and the explicit per-frame
//! view context threaded through the scene composer and walker.

mod frustum;
mod view_context;

pub use frustum::{
    FrustumPlanes, Intersection,
    PLANE_LEFT, PLANE_RIGHT, PLANE_TOP, PLANE_BOTTOM, PLANE_NEAR, PLANE_FAR,
};
pub use view_context::ViewContext;
