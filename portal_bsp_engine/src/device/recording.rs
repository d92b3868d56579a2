//! RecordingDevice — headless RenderDevice for tests and tools.
//!
//! Records every submission in order so tests can assert the exact
//! sequence the composer produced. Also tracks distinct texture cache ids
//! the way a real device populates its texture cache.

use rustc_hash::FxHashSet;
use crate::error::Result;
use crate::level::PolyFlags;
use super::render_device::{
    BrushDraw, MeshDraw, RenderDevice, SceneFrame, SpriteDraw, SurfaceFacet, SurfaceInfo,
};

/// One recorded device call.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    /// `begin_frame`
    BeginFrame {
        /// FOV of the pass, distinguishes sky from main in recordings
        fov_degrees: f32,
    },
    /// `clear_depth`
    ClearDepth,
    /// `draw_surface`
    DrawSurface {
        /// Merged flags of the submission
        flags: PolyFlags,
        /// Facet vertex count
        vertex_count: usize,
        /// Base texture cache id
        texture: Option<u64>,
        /// Lightmap cache id
        lightmap: Option<u64>,
        /// Fogmap cache id
        fogmap: Option<u64>,
    },
    /// `draw_mesh`
    DrawMesh {
        /// Asset-system mesh id
        mesh_id: u64,
    },
    /// `draw_sprite`
    DrawSprite {
        /// Sprite texture cache id
        texture: u64,
    },
    /// `draw_brush`
    DrawBrush {
        /// Asset-system brush id
        brush_id: u64,
    },
}

/// Headless device recording calls in submission order.
#[derive(Default)]
pub struct RecordingDevice {
    calls: Vec<DeviceCall>,
    texture_cache: FxHashSet<u64>,
}

impl RecordingDevice {
    /// New empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls in submission order.
    pub fn calls(&self) -> &[DeviceCall] {
        &self.calls
    }

    /// Number of distinct texture cache ids seen.
    pub fn texture_cache_len(&self) -> usize {
        self.texture_cache.len()
    }

    /// Only the surface draws, in submission order.
    pub fn surface_calls(&self) -> impl Iterator<Item = &DeviceCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, DeviceCall::DrawSurface { .. }))
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.calls.clear();
        self.texture_cache.clear();
    }

    fn cache(&mut self, id: Option<u64>) {
        if let Some(id) = id {
            self.texture_cache.insert(id);
        }
    }
}

impl RenderDevice for RecordingDevice {
    fn begin_frame(&mut self, frame: &SceneFrame) -> Result<()> {
        self.calls.push(DeviceCall::BeginFrame { fov_degrees: frame.fov_degrees });
        Ok(())
    }

    fn clear_depth(&mut self, _frame: &SceneFrame) -> Result<()> {
        self.calls.push(DeviceCall::ClearDepth);
        Ok(())
    }

    fn draw_surface(
        &mut self,
        _frame: &SceneFrame,
        surface: &SurfaceInfo,
        facet: &SurfaceFacet<'_>,
    ) -> Result<()> {
        self.cache(surface.texture.map(|t| t.cache_id));
        self.cache(surface.detail_texture.map(|t| t.cache_id));
        self.cache(surface.macro_texture.map(|t| t.cache_id));
        self.cache(surface.lightmap.map(|t| t.cache_id));
        self.cache(surface.fogmap.map(|t| t.cache_id));

        self.calls.push(DeviceCall::DrawSurface {
            flags: surface.flags,
            vertex_count: facet.vertices.len(),
            texture: surface.texture.map(|t| t.cache_id),
            lightmap: surface.lightmap.map(|t| t.cache_id),
            fogmap: surface.fogmap.map(|t| t.cache_id),
        });
        Ok(())
    }

    fn draw_mesh(&mut self, _frame: &SceneFrame, draw: &MeshDraw) -> Result<()> {
        self.calls.push(DeviceCall::DrawMesh { mesh_id: draw.mesh_id });
        Ok(())
    }

    fn draw_sprite(&mut self, _frame: &SceneFrame, draw: &SpriteDraw) -> Result<()> {
        self.cache(Some(draw.texture.cache_id));
        self.calls.push(DeviceCall::DrawSprite { texture: draw.texture.cache_id });
        Ok(())
    }

    fn draw_brush(&mut self, _frame: &SceneFrame, draw: &BrushDraw) -> Result<()> {
        self.calls.push(DeviceCall::DrawBrush { brush_id: draw.brush_id });
        Ok(())
    }
}

#[cfg(test)]
#[path = "recording_tests.rs"]
mod tests;
