//! SceneComposer - turns a visibility walk into ordered device submissions.
//!
//! Owns the retained per-frame state (visibility buffers, corona list,
//! vertex scratch, pan clock) and runs the full frame: optional sky pass,
//! depth clear, main pass with opaque / decal / translucent stages, then
//! the dynamic actor pass. Geometry index tables (points, vectors, vertex
//! pool) are validated at level load, so submission indexes them directly.

use glam::{Mat4, Vec2, Vec3};
use crate::camera::{FrustumPlanes, Intersection, ViewContext};
use crate::device::{
    BrushDraw, MeshDraw, RenderDevice, SceneFrame, SpriteDraw, SurfaceFacet, SurfaceInfo,
    TextureDescriptor,
};
use crate::engine_warn;
use crate::error::Result;
use crate::level::{ActorKey, BspSurface, DrawType, Level, Model, PolyFlags, TextureRef};
use crate::lighting::LightProvider;
use super::visibility::{DrawNode, FrameVisibility};
use super::walker::VisibilityWalker;

/// Texels per second for AUTO_U_PAN / AUTO_V_PAN surfaces.
const AUTO_PAN_SPEED: f32 = 64.0;

/// Wrap point for the pan clock; keeps precision over long sessions.
const AUTO_PAN_WRAP: f32 = 1024.0;

/// Per-level frame orchestrator.
///
/// One composer serves one output viewport; its buffers are reused across
/// frames.
#[derive(Default)]
pub struct SceneComposer {
    visibility: FrameVisibility,
    corona_actors: Vec<ActorKey>,
    vertex_scratch: Vec<Vec3>,
    auto_pan: f32,
}

impl SceneComposer {
    /// Composer with empty retained state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance time-based texture panning.
    pub fn update(&mut self, delta_seconds: f32) {
        self.auto_pan = (self.auto_pan + delta_seconds * AUTO_PAN_SPEED) % AUTO_PAN_WRAP;
    }

    /// Visibility output of the most recent frame.
    pub fn visibility(&self) -> &FrameVisibility {
        &self.visibility
    }

    /// Corona-flagged actors collected by the most recent actor pass, in
    /// enumeration order. Rebuilt from scratch every frame.
    pub fn corona_actors(&self) -> &[ActorKey] {
        &self.corona_actors
    }

    /// Render one frame of the level through `device`.
    ///
    /// When a zone designates a sky viewpoint, the level is first drawn
    /// from that viewpoint, the depth buffer is cleared, and the main pass
    /// draws over the sky backdrop.
    pub fn draw_scene(
        &mut self,
        level: &mut Level,
        view: &ViewContext,
        device: &mut dyn RenderDevice,
        lights: &mut dyn LightProvider,
    ) -> Result<()> {
        if let Some(sky) = level.model.sky_viewpoint().copied() {
            let frame =
                self.draw_frame(level, view, sky.location, view.sky_to_view(&sky), device, lights)?;
            device.clear_depth(&frame)?;
        }

        self.draw_frame(level, view, view.location, view.world_to_view(), device, lights)?;
        Ok(())
    }

    /// One complete pass: walk, then submit opaque front-to-back, decals,
    /// translucent back-to-front, and finally the dynamic actors.
    fn draw_frame(
        &mut self,
        level: &mut Level,
        view: &ViewContext,
        eye: Vec3,
        world_to_view: Mat4,
        device: &mut dyn RenderDevice,
        lights: &mut dyn LightProvider,
    ) -> Result<SceneFrame> {
        let frame = SceneFrame {
            viewport: view.viewport,
            object_to_world: Mat4::IDENTITY,
            world_to_view,
            projection: view.projection(),
            fov_degrees: view.fov_degrees,
        };
        let frustum = FrustumPlanes::from_clip_matrix(&frame.clip_matrix());

        let view_zone = level.model.zone_at(eye);
        self.visibility.reset(view_zone);
        let mut walker = VisibilityWalker::new(&level.model, &frustum, eye);
        walker.walk(&mut self.visibility);
        if walker.depth_exceeded() {
            engine_warn!(
                "portalbsp::SceneComposer",
                "traversal exceeded the node-count depth bound ({} nodes); subtree abandoned",
                level.model.nodes.len()
            );
        }

        device.begin_frame(&frame)?;

        let opaque = std::mem::take(&mut self.visibility.opaque);
        for record in &opaque {
            self.draw_node_surface(&level.model, record, view_zone, &frame, device, lights)?;
        }
        self.visibility.opaque = opaque;

        self.draw_decals(&frame, device)?;

        let translucent = std::mem::take(&mut self.visibility.translucent);
        for record in translucent.iter().rev() {
            self.draw_node_surface(&level.model, record, view_zone, &frame, device, lights)?;
        }
        self.visibility.translucent = translucent;

        self.draw_actors(level, view, &frustum, &frame, device, lights)?;

        Ok(frame)
    }

    /// Decal overlay stage. Decal generation belongs to the projection
    /// subsystem; the stage is sequenced here so the submission contract
    /// (opaque, decals, translucent, actors) holds once it is wired up.
    fn draw_decals(&mut self, _frame: &SceneFrame, _device: &mut dyn RenderDevice) -> Result<()> {
        Ok(())
    }

    /// Submit one surface draw record to the device.
    fn draw_node_surface(
        &mut self,
        model: &Model,
        record: &DrawNode,
        view_zone: u8,
        frame: &SceneFrame,
        device: &mut dyn RenderDevice,
        lights: &mut dyn LightProvider,
    ) -> Result<()> {
        let node = &model.nodes[record.node as usize];
        let Some(surface) = node.surface_index().and_then(|i| model.surfaces.get(i)) else {
            return Ok(());
        };
        let flags = record.flags;

        let material = model.surface_material(surface);
        let texture = material.map(|m| self.surface_texture(&m.texture, surface, flags));
        let detail_texture = material
            .and_then(|m| m.detail_texture.as_ref())
            .map(TextureDescriptor::from_ref);
        let macro_texture = material
            .and_then(|m| m.macro_texture.as_ref())
            .map(TextureDescriptor::from_ref);

        model.gather_node_points(node, &mut self.vertex_scratch);
        let facet = SurfaceFacet {
            map_origin: model.points[surface.base_point as usize],
            map_x: model.vectors[surface.texture_u as usize],
            map_y: model.vectors[surface.texture_v as usize],
            vertices: &self.vertex_scratch,
        };

        let (lightmap, fogmap) = if flags.contains(PolyFlags::UNLIT) {
            (None, None)
        } else {
            // The zone bordering the surface's positive side owns its
            // light; fog follows the viewer's zone.
            let surface_index = node.surface as usize;
            let zone = model.zones.get(node.zone1 as usize).and_then(|z| z.actor.as_ref());
            (
                lights.surface_lightmap(surface_index, surface, &facet, zone),
                lights.surface_fogmap(surface_index, surface, &facet, view_zone),
            )
        };

        let info = SurfaceInfo {
            flags,
            texture,
            detail_texture,
            macro_texture,
            lightmap,
            fogmap,
        };
        device.draw_surface(frame, &info, &facet)
    }

    /// Base-texture descriptor with surface pan and the auto-pan clock
    /// applied.
    fn surface_texture(
        &self,
        texture: &TextureRef,
        surface: &BspSurface,
        flags: PolyFlags,
    ) -> TextureDescriptor {
        let mut desc = TextureDescriptor::from_ref(texture);
        desc.pan = Vec2::new(-(surface.pan_u as f32), -(surface.pan_v as f32));
        if flags.contains(PolyFlags::AUTO_U_PAN) {
            desc.pan.x -= self.auto_pan;
        }
        if flags.contains(PolyFlags::AUTO_V_PAN) {
            desc.pan.y -= self.auto_pan;
        }
        desc
    }

    /// Enumerate dynamic actors: rebuild the corona list, cache ambient
    /// light on first sight, box-cull mesh and brush actors, and submit
    /// the survivors.
    fn draw_actors(
        &mut self,
        level: &mut Level,
        view: &ViewContext,
        frustum: &FrustumPlanes,
        frame: &SceneFrame,
        device: &mut dyn RenderDevice,
        lights: &mut dyn LightProvider,
    ) -> Result<()> {
        self.corona_actors.clear();

        for (key, actor) in level.actors.iter_mut() {
            // Coronas are an overlay: collected even for actors the main
            // pass skips below.
            if actor.corona {
                self.corona_actors.push(key);
            }

            if actor.hidden || view.camera_actor == Some(key) {
                continue;
            }

            if actor.light.is_none() {
                actor.light = Some(if actor.unlit {
                    Vec3::ONE
                } else {
                    lights.ambient_light(actor.location, actor.zone)
                });
            }
            let light = actor.light.unwrap_or(Vec3::ONE);

            match actor.draw_type {
                DrawType::Mesh => {
                    let Some(mesh) = actor.mesh else { continue };
                    let bounds = mesh.world_bounds(actor.location);
                    if frustum.test(&bounds) != Intersection::Outside {
                        device.draw_mesh(frame, &MeshDraw {
                            location: actor.location,
                            rotation: actor.rotation,
                            scale: mesh.scale,
                            mesh_id: mesh.mesh_id,
                            light,
                        })?;
                    }
                }
                DrawType::Sprite => {
                    // Sprites are never box-culled.
                    let Some(texture) = actor.sprite else { continue };
                    device.draw_sprite(frame, &SpriteDraw {
                        location: actor.location,
                        texture: TextureDescriptor::from_ref(&texture),
                        light,
                    })?;
                }
                DrawType::Brush => {
                    let Some(brush) = actor.brush else { continue };
                    let bounds = brush.world_bounds(actor.location);
                    if frustum.test(&bounds) != Intersection::Outside {
                        device.draw_brush(frame, &BrushDraw {
                            location: actor.location,
                            rotation: actor.rotation,
                            brush_id: brush.brush_id,
                            light,
                        })?;
                    }
                }
                DrawType::None => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "composer_tests.rs"]
mod tests;
