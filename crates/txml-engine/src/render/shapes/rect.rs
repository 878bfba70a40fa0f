use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawList;

use super::common::{
    create_viewport_ubo, quad_pipeline, viewport_ubo_entry, InstanceBuffer, QuadBuffers,
    ViewportUniform, QUAD_INDEX_COUNT,
};

/// Solid rectangle renderer.
///
/// Draws every `DrawCmd::Rect` of a draw list in one instanced call. Color is
/// expected to be linear premultiplied RGBA (`paint::Color`).
pub struct RectRenderer {
    gpu: Option<RectGpu>,
    instances: InstanceBuffer,
}

/// Resources that depend on the device and surface format.
struct RectGpu {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,
    quad: QuadBuffers,
}

impl Default for RectRenderer {
    fn default() -> Self {
        Self { gpu: None, instances: InstanceBuffer::new("txml rect instance vbo") }
    }
}

impl RectRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &DrawList) {
        let instances: Vec<RectInstance> = draw_list
            .rects()
            .map(|cmd| (cmd.rect.normalized(), cmd.color))
            .filter(|(r, _)| !r.is_empty())
            .map(|(r, c)| RectInstance {
                origin: [r.origin.x, r.origin.y],
                size: [r.size.x, r.size.y],
                color: c.to_array(),
            })
            .collect();

        if instances.is_empty() {
            return;
        }

        let gpu = match self.gpu.take() {
            Some(gpu) if gpu.format == ctx.surface_format => gpu,
            _ => RectGpu::new(ctx),
        };
        ctx.queue.write_buffer(&gpu.viewport_ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));

        if let Some(instance_vbo) = self.instances.upload(ctx, &instances) {
            let mut rpass = target.load_pass("txml rect pass");
            rpass.set_pipeline(&gpu.pipeline);
            rpass.set_bind_group(0, &gpu.bind_group, &[]);
            rpass.set_vertex_buffer(0, gpu.quad.vbo.slice(..));
            rpass.set_vertex_buffer(1, instance_vbo.slice(..));
            rpass.set_index_buffer(gpu.quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..QUAD_INDEX_COUNT, 0, 0..instances.len() as u32);
        }

        self.gpu = Some(gpu);
    }
}

impl RectGpu {
    fn new(ctx: &RenderCtx<'_>) -> Self {
        let bind_group_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("txml rect bgl"),
            entries: &[viewport_ubo_entry(0)],
        });

        let pipeline = quad_pipeline(
            ctx,
            "txml rect pipeline",
            include_str!("shaders/rect.wgsl"),
            &bind_group_layout,
            RectInstance::layout(),
        );

        let viewport_ubo = create_viewport_ubo(ctx, "txml rect viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("txml rect bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        Self {
            format: ctx.surface_format,
            pipeline,
            bind_group,
            viewport_ubo,
            quad: QuadBuffers::new(ctx, "txml rect quad"),
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct RectInstance {
    origin: [f32; 2],
    size: [f32; 2],
    color: [f32; 4],
}

impl RectInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RectInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
