//! Scene module - per-frame visibility and draw ordering.
//!
//! `VisibilityWalker` traverses the BSP in view order, expanding zone
//! reachability through portals and bucketing surfaces into opaque
//! (front-to-back) and translucent (discovery-order, consumed reversed)
//! lists. `SceneComposer` owns the per-frame state and turns those lists
//! into `RenderDevice` submissions: sky pass, depth clear, main pass,
//! actor pass.

mod composer;
mod visibility;
mod walker;

pub use composer::SceneComposer;
pub use visibility::{DrawNode, FrameVisibility};
pub use walker::VisibilityWalker;
