use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::camera::{self, Projection};
use crate::render::{RenderCtx, RenderTarget};
use crate::shader::{self, ProgramDesc, ShaderError, ShaderStage};

const QUAD_VS: &str = include_str!("shaders/quad.vert.wgsl");
const QUAD_FS: &str = include_str!("shaders/quad.frag.wgsl");

/// Unit quad centered at the origin, 2 floats per vertex.
///
/// Triangle-strip order: the four corners produce two triangles sharing the
/// (-1,1)-(1,-1) edge.
pub const QUAD_POSITIONS: [f32; 8] = [
    1.0, 1.0, //
    -1.0, 1.0, //
    1.0, -1.0, //
    -1.0, -1.0, //
];

/// One RGBA color per corner, matching `QUAD_POSITIONS` vertex order:
/// white, red, green, blue.
pub const QUAD_COLORS: [f32; 16] = [
    1.0, 1.0, 1.0, 1.0, //
    1.0, 0.0, 0.0, 1.0, //
    0.0, 1.0, 0.0, 1.0, //
    0.0, 0.0, 1.0, 1.0, //
];

/// How far the quad sits in front of the camera, in view-space units.
const QUAD_DISTANCE: f32 = 6.0;

/// Renders one rotating quad: a single 4-vertex triangle-strip draw per frame.
///
/// GPU objects are built lazily on first use (the surface format is only
/// known at frame time) and cached. The render step itself is stateless given
/// its inputs: all animation state lives with the caller-held rotation angle.
#[derive(Default)]
pub struct QuadRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    scene_ubo: Option<wgpu::Buffer>,

    position_vbo: Option<wgpu::Buffer>,
    color_vbo: Option<wgpu::Buffer>,

    projection: Projection,
}

impl QuadRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the quad at `rotation_angle` radians into `target`.
    ///
    /// Per frame: recompute projection (aspect from the current viewport) and
    /// model-view (translate -6 on the view axis, then rotate about it),
    /// upload both matrices, bind the two static vertex buffers, and issue
    /// exactly one 4-vertex triangle-strip draw.
    ///
    /// Errors only on first use, if shader compilation or pipeline creation
    /// fails; such a failure is fatal and the caller should stop the session.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        rotation_angle: f32,
    ) -> Result<(), ShaderError> {
        self.ensure_pipeline(ctx)?;
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        let uniforms = SceneUniforms {
            projection: self.projection.matrix(ctx.viewport.aspect()).to_cols_array_2d(),
            model_view: camera::model_view(QUAD_DISTANCE, rotation_angle).to_cols_array_2d(),
        };
        if let Some(ubo) = self.scene_ubo.as_ref() {
            ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&uniforms));
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return Ok(()) };
        let Some(bind_group) = self.bind_group.as_ref() else { return Ok(()) };
        let Some(position_vbo) = self.position_vbo.as_ref() else { return Ok(()) };
        let Some(color_vbo) = self.color_vbo.as_ref() else { return Ok(()) };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("whirl quad pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, position_vbo.slice(..));
        rpass.set_vertex_buffer(1, color_vbo.slice(..));
        rpass.draw(0..4, 0..1);

        Ok(())
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) -> Result<(), ShaderError> {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return Ok(());
        }

        let vertex = shader::compile(ctx.device, ShaderStage::Vertex, QUAD_VS, "whirl quad vs")?;
        let fragment = shader::compile(ctx.device, ShaderStage::Fragment, QUAD_FS, "whirl quad fs")?;

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("whirl quad bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(
                                std::num::NonZeroU64::new(
                                    std::mem::size_of::<SceneUniforms>() as u64,
                                )
                                .unwrap(),
                            ),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("whirl quad pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = shader::link(
            ctx.device,
            ProgramDesc {
                label: "whirl quad pipeline",
                vertex: &vertex,
                fragment: &fragment,
                layout: &pipeline_layout,
                vertex_buffers: &[position_layout(), color_layout()],
                color_format: ctx.surface_format,
                depth_format: Some(ctx.depth_format),
                topology: wgpu::PrimitiveTopology::TriangleStrip,
            },
        )?;

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // Bindings reference the old layout; rebuild them lazily.
        self.bind_group = None;
        self.scene_ubo = None;

        Ok(())
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.position_vbo.is_some() && self.color_vbo.is_some() {
            return;
        }

        // Uploaded once; never rewritten (no COPY_DST).
        self.position_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("whirl quad position vbo"),
            contents: bytemuck::cast_slice(&QUAD_POSITIONS),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.color_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("whirl quad color vbo"),
            contents: bytemuck::cast_slice(&QUAD_COLORS),
            usage: wgpu::BufferUsages::VERTEX,
        }));
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.scene_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let scene_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("whirl quad scene ubo"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("whirl quad bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_ubo.as_entire_binding(),
            }],
        });

        self.scene_ubo = Some(scene_ubo);
        self.bind_group = Some(bind_group);
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct SceneUniforms {
    projection: [[f32; 4]; 4],
    model_view: [[f32; 4]; 4],
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x4];

fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: (2 * std::mem::size_of::<f32>()) as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}

fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: (4 * std::mem::size_of::<f32>()) as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &COLOR_ATTRS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn position_buffer_holds_the_four_corners_in_order() {
        assert_eq!(
            QUAD_POSITIONS,
            [1.0, 1.0, -1.0, 1.0, 1.0, -1.0, -1.0, -1.0]
        );
    }

    #[test]
    fn color_buffer_holds_white_red_green_blue() {
        let white = &QUAD_COLORS[0..4];
        let red = &QUAD_COLORS[4..8];
        let green = &QUAD_COLORS[8..12];
        let blue = &QUAD_COLORS[12..16];

        assert_eq!(white, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(red, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(green, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(blue, [0.0, 0.0, 1.0, 1.0]);
    }

    // ── shader sources ────────────────────────────────────────────────────

    #[test]
    fn vertex_source_declares_both_attributes_and_the_uniform_block() {
        assert!(QUAD_VS.contains("fn vs_main"));
        assert!(QUAD_VS.contains("@location(0) position: vec2<f32>"));
        assert!(QUAD_VS.contains("@location(1) color: vec4<f32>"));
        assert!(QUAD_VS.contains("projection: mat4x4<f32>"));
        assert!(QUAD_VS.contains("model_view: mat4x4<f32>"));
    }

    #[test]
    fn fragment_source_forwards_the_interpolated_color() {
        assert!(QUAD_FS.contains("fn fs_main"));
        assert!(QUAD_FS.contains("@location(0) color: vec4<f32>"));
    }

    // ── uniform layout ────────────────────────────────────────────────────

    #[test]
    fn scene_uniforms_are_two_tightly_packed_mat4s() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 128);
    }
}
