use crate::constants::CLEAR_COLOR;
use tree_core::{Camera, Scene};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
pub mod instances;

use helpers::QuadPipelineDesc;
use instances::{shader_time, FoliageInstance, SceneUniforms, SpriteInstance};

const TREE_WGSL: &str = include_str!("../shaders/tree.wgsl");

const SPRITE_ATTRS: [wgpu::VertexAttribute; 8] = wgpu::vertex_attr_array![
    1 => Float32x3,
    2 => Float32,
    3 => Float32x4,
    4 => Float32x3,
    5 => Float32,
    6 => Float32x2,
    7 => Uint32,
    8 => Uint32,
];
const FOLIAGE_ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
    1 => Float32x3,
    2 => Float32,
    3 => Float32x3,
];

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sprite_pipeline: wgpu::RenderPipeline,
    foliage_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    sprite_vb: wgpu::Buffer,
    sprite_capacity: usize,
    foliage_vb: wgpu::Buffer,
    foliage_count: u32,
    depth_view: wgpu::TextureView,
    sprites: Vec<SpriteInstance>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, scene: &Scene) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (_, depth_view) = helpers::create_depth_texture(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tree_shader"),
            source: wgpu::ShaderSource::Wgsl(TREE_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let sprite_pipeline = helpers::make_quad_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            QuadPipelineDesc {
                label: "sprite_pipeline",
                vs_entry: "vs_sprite",
                fs_entry: "fs_sprite",
                instance_layout: wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<SpriteInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &SPRITE_ATTRS,
                },
                blend: wgpu::BlendState::ALPHA_BLENDING,
                depth_write: true,
            },
        );
        let foliage_pipeline = helpers::make_quad_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            QuadPipelineDesc {
                label: "foliage_pipeline",
                vs_entry: "vs_foliage",
                fs_entry: "fs_foliage",
                instance_layout: wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<FoliageInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &FOLIAGE_ATTRS,
                },
                blend: wgpu::BlendState::ALPHA_BLENDING,
                depth_write: false,
            },
        );

        // Two triangles covering [-0.5, 0.5]^2
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let sprite_capacity = instances::sprite_capacity(scene).max(1);
        let sprite_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sprite_vb"),
            size: (std::mem::size_of::<SpriteInstance>() * sprite_capacity) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let mut foliage_data = instances::pack_foliage(&scene.foliage);
        let foliage_count = foliage_data.len() as u32;
        if foliage_data.is_empty() {
            // zero-sized vertex buffers are rejected
            foliage_data.push(bytemuck::Zeroable::zeroed());
        }
        let foliage_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("foliage_vb"),
            contents: bytemuck::cast_slice(&foliage_data),
            usage: wgpu::BufferUsages::VERTEX,
        });
        log::info!(
            "[gpu] format={:?} sprites={} foliage={}",
            format,
            sprite_capacity,
            foliage_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            sprite_pipeline,
            foliage_pipeline,
            uniform_buffer,
            bind_group,
            quad_vb,
            sprite_vb,
            sprite_capacity,
            foliage_vb,
            foliage_count,
            depth_view,
            sprites: Vec::with_capacity(sprite_capacity),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (_, depth_view) = helpers::create_depth_texture(&self.device, width, height);
            self.depth_view = depth_view;
        }
    }

    pub fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        instances::pack_sprites(scene, &mut self.sprites);
        let sprite_count = self.sprites.len().min(self.sprite_capacity);
        let uniforms = SceneUniforms::new(camera, shader_time(scene.elapsed()), &scene.foliage);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        if sprite_count > 0 {
            self.queue.write_buffer(
                &self.sprite_vb,
                0,
                bytemuck::cast_slice(&self.sprites[..sprite_count]),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));

            // Opaque-ish sprites write depth; the needle cloud only tests against it
            if sprite_count > 0 {
                rpass.set_pipeline(&self.sprite_pipeline);
                rpass.set_vertex_buffer(1, self.sprite_vb.slice(..));
                rpass.draw(0..6, 0..sprite_count as u32);
            }
            if self.foliage_count > 0 {
                rpass.set_pipeline(&self.foliage_pipeline);
                rpass.set_vertex_buffer(1, self.foliage_vb.slice(..));
                rpass.draw(0..6, 0..self.foliage_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
