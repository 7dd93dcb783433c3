use glam::{Mat4, Vec3};
use viz_core::{
    MeshData, SceneState, AMBIENT_INTENSITY, DIRECTIONAL_INTENSITY, DIRECTIONAL_POSITION,
    DOT_COUNT, DOT_RADIUS,
};
use web_sys as web;
use wgpu::util::DeviceExt;

const DOT_SHADER: &str = r#"
struct DotUniforms {
  view_proj: mat4x4<f32>,
  group: mat4x4<f32>,
  cam_right: vec4<f32>,
  cam_up: vec4<f32>,
};
@group(0) @binding(0) var<uniform> u: DotUniforms;

struct VsOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) color: vec4<f32>,
  @location(1) local: vec2<f32>,
};

@vertex
fn vs_main(
  @location(0) v_pos: vec2<f32>,
  @location(1) i_pos: vec3<f32>,
  @location(2) i_scale: f32,
  @location(3) i_color: vec4<f32>,
) -> VsOut {
  let center = (u.group * vec4<f32>(i_pos, 1.0)).xyz;
  // camera-facing quad corner
  let corner = (u.cam_right.xyz * v_pos.x + u.cam_up.xyz * v_pos.y) * i_scale;
  var out: VsOut;
  out.pos = u.view_proj * vec4<f32>(center + corner, 1.0);
  out.color = i_color;
  out.local = v_pos;
  return out;
}

@fragment
fn fs_main(inf: VsOut) -> @location(0) vec4<f32> {
  // Circular mask within the quad (unit circle of radius 0.5)
  let r = length(inf.local);
  let shape_alpha = 1.0 - smoothstep(0.48, 0.5, r);
  return vec4<f32>(inf.color.rgb, shape_alpha * inf.color.a);
}
"#;

const MODEL_SHADER: &str = r#"
struct ModelUniforms {
  view_proj: mat4x4<f32>,
  model: mat4x4<f32>,
  color: vec4<f32>,
  light: vec4<f32>,      // xyz direction toward the light, w ambient intensity
  intensity: vec4<f32>,  // x directional intensity
};
@group(0) @binding(0) var<uniform> u: ModelUniforms;

struct VsOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) normal: vec3<f32>,
};

@vertex
fn vs_main(
  @location(0) v_pos: vec3<f32>,
  @location(1) v_norm: vec3<f32>,
) -> VsOut {
  let world = u.model * vec4<f32>(v_pos, 1.0);
  var out: VsOut;
  out.pos = u.view_proj * world;
  // uniform scale, so the model matrix rotates normals correctly
  out.normal = (u.model * vec4<f32>(v_norm, 0.0)).xyz;
  return out;
}

@fragment
fn fs_main(inf: VsOut) -> @location(0) vec4<f32> {
  let len = length(inf.normal);
  let n = select(vec3<f32>(0.0, 1.0, 0.0), inf.normal / max(len, 1e-5), len > 1e-5);
  let diffuse = max(dot(n, normalize(u.light.xyz)), 0.0) * u.intensity.x;
  let lit = u.light.w + diffuse;
  return vec4<f32>(u.color.rgb * lit, 1.0);
}
"#;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct DotUniforms {
    view_proj: [[f32; 4]; 4],
    group: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ModelUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
    light: [f32; 4],
    intensity: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct DotInstance {
    pos: [f32; 3],
    scale: f32,
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ModelVertex {
    position: [f32; 3],
    normal: [f32; 3],
}

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

pub struct GpuState {
    // the surface owns its canvas handle, so no borrowed lifetime
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    dot_pipeline: wgpu::RenderPipeline,
    dot_uniform_buffer: wgpu::Buffer,
    dot_bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,

    model_pipeline: wgpu::RenderPipeline,
    model_uniform_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
    model_vb: Option<wgpu::Buffer>,
    model_ib: Option<wgpu::Buffer>,
    model_index_count: u32,

    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, width, height);

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bgl"),
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
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        // ----- Dot sprites -----
        let dot_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("dot_shader"),
            source: wgpu::ShaderSource::Wgsl(DOT_SHADER.into()),
        });
        let dot_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("dot_uniforms"),
            size: std::mem::size_of::<DotUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let dot_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("dot_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: dot_uniform_buffer.as_entire_binding(),
            }],
        });
        // Quad vertex buffer (two triangles)
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<DotInstance>() * DOT_COUNT) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let dot_vertex_buffers = [
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<DotInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                ],
            },
        ];
        let dot_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("dot_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &dot_shader,
                entry_point: Some("vs_main"),
                buffers: &dot_vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            // dots test against the model but never occlude each other
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &dot_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // ----- Model mesh -----
        let model_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("model_shader"),
            source: wgpu::ShaderSource::Wgsl(MODEL_SHADER.into()),
        });
        let model_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("model_uniforms"),
            size: std::mem::size_of::<ModelUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let model_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("model_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: model_uniform_buffer.as_entire_binding(),
            }],
        });
        let model_vertex_buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ModelVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        }];
        let model_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("model_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &model_shader,
                entry_point: Some("vs_main"),
                buffers: &model_vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &model_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            dot_pipeline,
            dot_uniform_buffer,
            dot_bind_group,
            quad_vb,
            instance_vb,
            model_pipeline,
            model_uniform_buffer,
            model_bind_group,
            model_vb: None,
            model_ib: None,
            model_index_count: 0,
            depth_view,
            width,
            height,
        })
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
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    fn upload_model(&mut self, mesh: &MeshData) {
        let vertices: Vec<ModelVertex> = mesh
            .positions
            .iter()
            .zip(mesh.normals.iter())
            .map(|(&position, &normal)| ModelVertex { position, normal })
            .collect();
        self.model_vb = Some(self.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("model_vb"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));
        self.model_ib = Some(self.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("model_ib"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));
        self.model_index_count = mesh.indices.len() as u32;
        log::info!(
            "model geometry uploaded: {} vertices, {} indices",
            vertices.len(),
            self.model_index_count
        );
    }

    /// Draw one frame of the scene. An absent model or cloud simply
    /// contributes nothing to the pass.
    pub fn render(&mut self, scene: &SceneState) -> Result<(), wgpu::SurfaceError> {
        if let Some(model) = &scene.model {
            if self.model_vb.is_none() {
                self.upload_model(&model.mesh);
            }
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

        let view_proj = scene.camera.view_proj().to_cols_array_2d();
        let (cam_right, cam_up) = camera_basis(&scene.camera.eye, &scene.camera.target);

        let mut instance_count = 0u32;
        if let Some(cloud) = &scene.cloud {
            self.queue.write_buffer(
                &self.dot_uniform_buffer,
                0,
                bytemuck::bytes_of(&DotUniforms {
                    view_proj,
                    group: Mat4::from_rotation_y(cloud.spin).to_cols_array_2d(),
                    cam_right: [cam_right.x, cam_right.y, cam_right.z, 0.0],
                    cam_up: [cam_up.x, cam_up.y, cam_up.z, 0.0],
                }),
            );
            let instances: Vec<DotInstance> = cloud
                .dots
                .iter()
                .map(|dot| {
                    let [r, g, b] = dot.color.to_f32();
                    DotInstance {
                        pos: dot.position.to_array(),
                        scale: DOT_RADIUS * 2.0,
                        color: [r, g, b, 1.0],
                    }
                })
                .collect();
            self.queue
                .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&instances));
            instance_count = instances.len() as u32;
        }

        if let Some(model) = &scene.model {
            let [r, g, b] = model.material.color.to_f32();
            let light_dir = Vec3::from(DIRECTIONAL_POSITION).normalize();
            self.queue.write_buffer(
                &self.model_uniform_buffer,
                0,
                bytemuck::bytes_of(&ModelUniforms {
                    view_proj,
                    model: model.transform().to_cols_array_2d(),
                    color: [r, g, b, 1.0],
                    light: [light_dir.x, light_dir.y, light_dir.z, AMBIENT_INTENSITY],
                    intensity: [DIRECTIONAL_INTENSITY, 0.0, 0.0, 0.0],
                }),
            );
        }

        let clear = scene.background.to_f32();
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("rpass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: clear[0] as f64,
                        g: clear[1] as f64,
                        b: clear[2] as f64,
                        a: 1.0,
                    }),
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

        if let (Some(vb), Some(ib)) = (&self.model_vb, &self.model_ib) {
            if scene.model.is_some() && self.model_index_count > 0 {
                rpass.set_pipeline(&self.model_pipeline);
                rpass.set_bind_group(0, &self.model_bind_group, &[]);
                rpass.set_vertex_buffer(0, vb.slice(..));
                rpass.set_index_buffer(ib.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..self.model_index_count, 0, 0..1);
            }
        }

        if instance_count > 0 {
            rpass.set_pipeline(&self.dot_pipeline);
            rpass.set_bind_group(0, &self.dot_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..instance_count);
        }

        drop(rpass);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

fn camera_basis(eye: &Vec3, target: &Vec3) -> (Vec3, Vec3) {
    let forward = (*target - *eye).normalize();
    let right = forward.cross(Vec3::Y).normalize();
    let up = right.cross(forward);
    (right, up)
}
