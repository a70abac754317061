//! [`DrawBackend`] implementation on top of wgpu.
//!
//! wgpu has no immediate draw calls, so the backend records each frame
//! instead of drawing it: uploads are appended to a CPU-side arena and draw
//! calls remember their offset into it. `restore_state` ends the frame by
//! writing the arena and the projection to the GPU in one go, and
//! [`WgpuBackend::render`] replays the draws into a render pass.

use std::ops::Range;
use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use glimmer_core::profiling::profile_scope;
use static_assertions::const_assert_eq;

use crate::backend::DrawBackend;
use crate::batch::DEFAULT_VERTEX_CAPACITY;
use crate::error::{DrawError, DrawResult};
use crate::graphics::GraphicsContext;
use crate::vertex::{PrimitiveKind, Vertex};

const OVERLAY_SHADER: &str = include_str!("shaders/overlay.wgsl");

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct OverlayUniform {
    projection: [[f32; 4]; 4],
    rcp_font_height: f32,
    _padding: [f32; 3],
}

const_assert_eq!(std::mem::size_of::<OverlayUniform>(), 80);

#[derive(Debug, Clone, PartialEq, Eq)]
struct GpuDraw {
    kind: PrimitiveKind,
    vertices: Range<u32>,
}

struct FontTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    rcp_height: f32,
}

/// Draws the overlay with wgpu.
///
/// Typical use:
///
/// ```ignore
/// let backend = WgpuBackend::new(graphics.clone(), surface_format);
/// let mut overlay = DrawContext::new(backend, DrawConfig::default());
///
/// overlay.render(width, height, 1.0, |ui| ui.draw_text(4.0, 4.0, 0xffffff, "hello"));
///
/// // inside a render pass that loads the existing frame
/// overlay.backend().render(&mut pass);
/// ```
pub struct WgpuBackend {
    context: Arc<GraphicsContext>,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    triangle_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    /// Capacity of `vertex_buffer` in vertices.
    vertex_buffer_capacity: usize,
    font: Option<FontTexture>,
    projection: Mat4,
    /// Vertices uploaded during the current frame.
    frame_vertices: Vec<Vertex>,
    /// Offset of the most recent upload in `frame_vertices`.
    upload_base: u32,
    frame_draws: Vec<GpuDraw>,
    /// Draws of the last completed frame, replayed by `render`.
    submitted: Vec<GpuDraw>,
}

impl WgpuBackend {
    /// Create a backend drawing into targets of `target_format`.
    pub fn new(context: Arc<GraphicsContext>, target_format: wgpu::TextureFormat) -> Self {
        let device = context.device();

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Overlay Uniform Buffer"),
            size: std::mem::size_of::<OverlayUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Overlay Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
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

        // Clamp to edge so out-of-atlas uvs land on the opaque last texel.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Overlay Font Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Overlay Shader"),
            source: wgpu::ShaderSource::Wgsl(OVERLAY_SHADER.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Overlay Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let triangle_pipeline = create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            target_format,
            PrimitiveKind::Triangles,
        );
        let line_pipeline = create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            target_format,
            PrimitiveKind::Lines,
        );

        let vertex_buffer = create_vertex_buffer(device, DEFAULT_VERTEX_CAPACITY);

        Self {
            context,
            bind_group_layout,
            sampler,
            triangle_pipeline,
            line_pipeline,
            uniform_buffer,
            vertex_buffer,
            vertex_buffer_capacity: DEFAULT_VERTEX_CAPACITY,
            font: None,
            projection: Mat4::IDENTITY,
            frame_vertices: Vec::with_capacity(DEFAULT_VERTEX_CAPACITY),
            upload_base: 0,
            frame_draws: Vec::new(),
            submitted: Vec::new(),
        }
    }

    /// Number of draw calls `render` will issue.
    pub fn draw_count(&self) -> usize {
        self.submitted.len()
    }

    /// Number of vertices written to the GPU for the last frame.
    pub fn vertex_count(&self) -> u32 {
        self.submitted.last().map_or(0, |draw| draw.vertices.end)
    }

    /// Replay the last completed frame into `pass`.
    ///
    /// The pass should load rather than clear its color attachment so the
    /// overlay lands on top of the host's frame. Does nothing before the font
    /// texture exists.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        profile_scope!("overlay_render");

        let Some(font) = &self.font else {
            return;
        };
        if self.submitted.is_empty() {
            return;
        }

        pass.push_debug_group("WgpuBackend::render");
        pass.set_bind_group(0, &font.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

        let mut bound = None;
        for draw in &self.submitted {
            if bound != Some(draw.kind) {
                pass.set_pipeline(self.pipeline(draw.kind));
                bound = Some(draw.kind);
            }
            pass.draw(draw.vertices.clone(), 0..1);
        }
        pass.pop_debug_group();
    }

    fn pipeline(&self, kind: PrimitiveKind) -> &wgpu::RenderPipeline {
        match kind {
            PrimitiveKind::Lines => &self.line_pipeline,
            PrimitiveKind::Triangles => &self.triangle_pipeline,
        }
    }

    /// Write the frame's vertices and uniforms to the GPU.
    fn commit_frame(&mut self) {
        profile_scope!("overlay_commit");

        if self.frame_vertices.len() > self.vertex_buffer_capacity {
            let capacity = self.frame_vertices.len().next_power_of_two();
            tracing::debug!(
                "Growing overlay vertex buffer: {} -> {} vertices",
                self.vertex_buffer_capacity,
                capacity
            );
            self.vertex_buffer = create_vertex_buffer(self.context.device(), capacity);
            self.vertex_buffer_capacity = capacity;
        }

        if !self.frame_vertices.is_empty() {
            self.context.queue().write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(&self.frame_vertices),
            );
        }

        let uniform = OverlayUniform {
            projection: self.projection.to_cols_array_2d(),
            rcp_font_height: self.font.as_ref().map_or(0.0, |font| font.rcp_height),
            _padding: [0.0; 3],
        };
        self.context
            .queue()
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniform));

        self.submitted = std::mem::take(&mut self.frame_draws);
        tracing::trace!(
            "Committed overlay frame: {} vertices, {} draws",
            self.frame_vertices.len(),
            self.submitted.len()
        );
    }
}

impl DrawBackend for WgpuBackend {
    fn create_font_texture(&mut self, width: u32, height: u32, texels: &[u8]) -> DrawResult<()> {
        let max = self.context.device().limits().max_texture_dimension_2d;
        if width > max || height > max {
            return Err(DrawError::TextureCreation(format!(
                "{}x{} exceeds the device limit of {}",
                width, height, max
            )));
        }
        if texels.len() != width as usize * height as usize * 4 {
            return Err(DrawError::TextureCreation(format!(
                "expected {} bytes of RGBA8 texels but got {}",
                width as usize * height as usize * 4,
                texels.len()
            )));
        }

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = self.context.device().create_texture(&wgpu::TextureDescriptor {
            label: Some("Overlay Font Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.context.queue().write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            texels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * 4),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = self.context.device().create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Overlay Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: self.uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        tracing::debug!("Created {}x{} overlay font texture", width, height);
        self.font = Some(FontTexture {
            _texture: texture,
            bind_group,
            rcp_height: 1.0 / height as f32,
        });
        Ok(())
    }

    fn set_projection(&mut self, projection: &Mat4) {
        self.projection = *projection;
    }

    fn save_state(&mut self) {
        self.frame_vertices.clear();
        self.frame_draws.clear();
        self.upload_base = 0;
    }

    fn restore_state(&mut self) {
        self.commit_frame();
    }

    fn upload_vertices(&mut self, vertices: &[Vertex]) {
        self.upload_base = self.frame_vertices.len() as u32;
        self.frame_vertices.extend_from_slice(vertices);
    }

    fn draw(&mut self, kind: PrimitiveKind, vertex_count: u32, first_vertex: u32) {
        let start = self.upload_base + first_vertex;
        self.frame_draws.push(GpuDraw {
            kind,
            vertices: start..start + vertex_count,
        });
    }
}

impl std::fmt::Debug for WgpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WgpuBackend")
            .field("vertex_buffer_capacity", &self.vertex_buffer_capacity)
            .field("has_font", &self.font.is_some())
            .field("submitted_draws", &self.submitted.len())
            .finish_non_exhaustive()
    }
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Overlay Vertex Buffer"),
        size: capacity as u64 * Vertex::SIZE,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    target_format: wgpu::TextureFormat,
    kind: PrimitiveKind,
) -> wgpu::RenderPipeline {
    let (label, topology) = match kind {
        PrimitiveKind::Lines => ("Overlay Line Pipeline", wgpu::PrimitiveTopology::LineList),
        PrimitiveKind::Triangles => (
            "Overlay Triangle Pipeline",
            wgpu::PrimitiveTopology::TriangleList,
        ),
    };

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: target_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
