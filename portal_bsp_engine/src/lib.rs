/*!
# PortalBSP Engine

Scene visibility and draw ordering for portal-connected BSP levels.

The crate walks an immutable Binary Space Partition tree from the active
viewpoint each frame, producing an exact painter's-algorithm submission
order (opaque front-to-back, translucent back-to-front) while growing the
set of reachable zones through portal surfaces. Rasterization is delegated
to a backend through the `RenderDevice` trait; a headless recording
implementation is provided for tests and tools.

## Architecture

- **FrustumPlanes**: six clip planes extracted from the view-projection matrix
- **Model**: read-only BSP node/surface/zone tables loaded with the level
- **VisibilityWalker**: viewpoint-relative in-order BSP traversal
- **SceneComposer**: per-frame orchestration (sky pass, main pass, actor pass)
- **RenderDevice**: trait boundary to the rasterization backend
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod level;
pub mod scene;
pub mod device;
pub mod lighting;

// Main portalbsp namespace module
pub mod portalbsp {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine logger host
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Level sub-module
    pub mod level {
        pub use crate::level::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Device sub-module
    pub mod device {
        pub use crate::device::*;
    }

    // Lighting sub-module
    pub mod lighting {
        pub use crate::lighting::*;
    }
}

// Re-export math library at crate root
pub use glam;
