use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawList;
use crate::text::{single_line, FontSystem};

use super::common::{
    create_viewport_ubo, quad_pipeline, viewport_ubo_entry, InstanceBuffer, QuadBuffers,
    ViewportUniform, QUAD_INDEX_COUNT,
};

// ── atlas constants ────────────────────────────────────────────────────────

const ATLAS_SIZE: u32 = 1024;
const GLYPH_PADDING: u32 = 1; // pixels between glyphs in the atlas

// ── glyph atlas ────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq)]
struct AtlasSlot {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

/// Shelf packer for the R8 glyph atlas.
///
/// Glyphs are placed left to right on the current shelf; a glyph that does
/// not fit horizontally opens a new shelf below the tallest glyph so far.
#[derive(Debug)]
struct ShelfPacker {
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl Default for ShelfPacker {
    fn default() -> Self {
        Self { cursor_x: GLYPH_PADDING, cursor_y: GLYPH_PADDING, row_height: 0, full: false }
    }
}

impl ShelfPacker {
    /// Reserves a `w`×`h` region and returns its top-left texel.
    fn allocate(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if self.full {
            return None;
        }

        if self.cursor_x + w + GLYPH_PADDING > ATLAS_SIZE {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }

        if self.cursor_y + h + GLYPH_PADDING > ATLAS_SIZE || w + 2 * GLYPH_PADDING > ATLAS_SIZE {
            log::warn!(
                "TextRenderer: glyph atlas is full ({ATLAS_SIZE}x{ATLAS_SIZE}); \
                 some glyphs will not be rendered"
            );
            self.full = true;
            return None;
        }

        let at = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(at)
    }
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Renderer for `DrawCmd::Text`.
///
/// Glyphs are rasterized with fontdue on first use and cached in a
/// `ATLAS_SIZE`² R8Unorm atlas for the renderer's lifetime, keyed by
/// `GlyphRasterConfig` (font, glyph index, pixel size). Each glyph becomes one
/// instanced quad tinted with the command's color.
pub struct TextRenderer {
    gpu: Option<TextGpu>,
    packer: ShelfPacker,
    glyph_cache: HashMap<GlyphRasterConfig, AtlasSlot>,
    instances: InstanceBuffer,
    layout: Layout<()>,
}

struct TextGpu {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,
    atlas: wgpu::Texture,
    quad: QuadBuffers,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            gpu: None,
            packer: ShelfPacker::default(),
            glyph_cache: HashMap::new(),
            instances: InstanceBuffer::new("txml text instance vbo"),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders all `DrawCmd::Text` entries in `draw_list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
        font_system: &FontSystem,
    ) {
        if draw_list.texts().next().is_none() {
            return;
        }

        let gpu = match self.gpu.take() {
            Some(gpu) if gpu.format == ctx.surface_format => gpu,
            stale => {
                // A new atlas texture starts empty; forget what the old one held.
                if stale.is_some() {
                    self.glyph_cache.clear();
                    self.packer = ShelfPacker::default();
                }
                TextGpu::new(ctx)
            }
        };

        let instances = self.build_instances(ctx, &gpu.atlas, draw_list, font_system);
        ctx.queue.write_buffer(&gpu.viewport_ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));

        if !instances.is_empty() {
            if let Some(instance_vbo) = self.instances.upload(ctx, &instances) {
                let mut rpass = target.load_pass("txml text pass");
                rpass.set_pipeline(&gpu.pipeline);
                rpass.set_bind_group(0, &gpu.bind_group, &[]);
                rpass.set_vertex_buffer(0, gpu.quad.vbo.slice(..));
                rpass.set_vertex_buffer(1, instance_vbo.slice(..));
                rpass.set_index_buffer(gpu.quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..QUAD_INDEX_COUNT, 0, 0..instances.len() as u32);
            }
        }

        self.gpu = Some(gpu);
    }

    fn build_instances(
        &mut self,
        ctx: &RenderCtx<'_>,
        atlas: &wgpu::Texture,
        draw_list: &DrawList,
        font_system: &FontSystem,
    ) -> Vec<GlyphInstance> {
        let mut instances = Vec::new();

        for cmd in draw_list.texts() {
            let Some(font) = font_system.get(cmd.font) else {
                log::warn!("TextRenderer: unknown FontId {:?}, skipping", cmd.font);
                continue;
            };

            self.layout.reset(&LayoutSettings {
                x: cmd.origin.x,
                y: cmd.origin.y,
                ..LayoutSettings::default()
            });
            self.layout.append(&[font], &TextStyle::new(&single_line(&cmd.text), cmd.size, 0));

            // Snapshot positions so the borrow on `self.layout` ends before
            // glyphs are uploaded through `&mut self`.
            let glyphs: Vec<(GlyphRasterConfig, f32, f32, usize, usize)> = self
                .layout
                .glyphs()
                .iter()
                .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
                .map(|g| (g.key, g.x, g.y, g.width, g.height))
                .collect();

            for (key, x, y, w, h) in glyphs {
                let slot = match self.glyph_cache.get(&key) {
                    Some(slot) => *slot,
                    None => {
                        let (metrics, bitmap) = font.rasterize_config(key);
                        let Some(slot) = self.upload_glyph(ctx, atlas, &bitmap, metrics.width as u32, metrics.height as u32) else {
                            continue;
                        };
                        self.glyph_cache.insert(key, slot);
                        slot
                    }
                };

                instances.push(GlyphInstance {
                    dst_min: [x, y],
                    dst_max: [x + w as f32, y + h as f32],
                    uv_min: slot.uv_min,
                    uv_max: slot.uv_max,
                    color: cmd.color.to_array(),
                });
            }
        }

        instances
    }

    fn upload_glyph(
        &mut self,
        ctx: &RenderCtx<'_>,
        atlas: &wgpu::Texture,
        bitmap: &[u8],
        w: u32,
        h: u32,
    ) -> Option<AtlasSlot> {
        if w == 0 || h == 0 {
            return None;
        }
        let (gx, gy) = self.packer.allocate(w, h)?;

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: atlas,
                mip_level: 0,
                origin: wgpu::Origin3d { x: gx, y: gy, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
        );

        let atlas_f = ATLAS_SIZE as f32;
        Some(AtlasSlot {
            uv_min: [gx as f32 / atlas_f, gy as f32 / atlas_f],
            uv_max: [(gx + w) as f32 / atlas_f, (gy + h) as f32 / atlas_f],
        })
    }
}

impl TextGpu {
    fn new(ctx: &RenderCtx<'_>) -> Self {
        let bind_group_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("txml text bgl"),
            entries: &[
                viewport_ubo_entry(0),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline = quad_pipeline(
            ctx,
            "txml text pipeline",
            include_str!("shaders/text.wgsl"),
            &bind_group_layout,
            GlyphInstance::layout(),
        );

        let atlas = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("txml text atlas"),
            size: wgpu::Extent3d { width: ATLAS_SIZE, height: ATLAS_SIZE, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let atlas_view = atlas.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("txml text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let viewport_ubo = create_viewport_ubo(ctx, "txml text viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("txml text bind group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: viewport_ubo.as_entire_binding() },
                wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::TextureView(&atlas_view) },
                wgpu::BindGroupEntry { binding: 2, resource: wgpu::BindingResource::Sampler(&sampler) },
            ],
        });

        Self {
            format: ctx.surface_format,
            pipeline,
            bind_group,
            viewport_ubo,
            atlas,
            quad: QuadBuffers::new(ctx, "txml text quad"),
        }
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  dst_min  [f32; 2]   loc 1
///  offset  8  dst_max  [f32; 2]   loc 2
///  offset 16  uv_min   [f32; 2]   loc 3
///  offset 24  uv_max   [f32; 2]   loc 4
///  offset 32  color    [f32; 4]   loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packer_fills_a_shelf_left_to_right() {
        let mut p = ShelfPacker::default();
        assert_eq!(p.allocate(10, 12), Some((1, 1)));
        assert_eq!(p.allocate(5, 20), Some((12, 1)));
    }

    #[test]
    fn packer_wraps_below_tallest_glyph() {
        let mut p = ShelfPacker::default();
        p.allocate(ATLAS_SIZE - 20, 30).unwrap();
        assert_eq!(p.allocate(30, 10), Some((1, 32)));
    }

    #[test]
    fn packer_reports_full_and_stays_full() {
        let mut p = ShelfPacker::default();
        assert!(p.allocate(10, ATLAS_SIZE).is_none());
        assert!(p.allocate(1, 1).is_none());
    }
}
