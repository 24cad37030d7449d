use crate::constants::{
    AMBIENT_LIGHT, ATMOSPHERE_ALPHA, ATMOSPHERE_RADIUS, ATMOSPHERE_TINT, CLEAR_COLOR,
    CLOUDS_MAP_URL, CLOUDS_RADIUS, CLOUDS_TINT, EARTH_MAP_URL, EARTH_TINT, GLOBE_RADIUS,
    POINT_LIGHT, WATER_RADIUS, WATER_TINT,
};
use crate::geo;
use glam::{Mat4, Vec3};
use web_sys as web;

mod helpers;
mod scene;
mod texture;

pub(crate) use scene::MarkerInstance;

// ===================== WebGPU state =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    scene: scene::SceneResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    cam_eye: Vec3,
    view_proj: Mat4,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
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
            .unwrap_or(caps.formats[0]);
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

        let depth_view = helpers::create_depth_texture(&device, width, height);

        // The two map assets. The land/water mask falls back to all-water
        // (a plain blue globe); the cloud alpha map falls back to clear sky.
        let earth_map = texture::load_or_fallback(
            &device,
            &queue,
            EARTH_MAP_URL,
            "earth_map",
            [0xff, 0xff, 0xff, 0xff],
        )
        .await;
        let clouds_map = texture::load_or_fallback(
            &device,
            &queue,
            CLOUDS_MAP_URL,
            "clouds_map",
            [0x00, 0x00, 0x00, 0xff],
        )
        .await;
        let white = texture::white_pixel(&device, &queue);

        let scene = scene::create_scene_resources(
            &device,
            format,
            &earth_map,
            &clouds_map,
            &white,
            geo::JOURNEY.len(),
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            scene,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
            cam_eye: Vec3::ZERO,
            view_proj: Mat4::IDENTITY,
            time_accum: 0.0,
        })
    }

    pub fn set_camera(&mut self, eye: Vec3, view_proj: Mat4) {
        self.cam_eye = eye;
        self.view_proj = view_proj;
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
            self.depth_view = helpers::create_depth_texture(&self.device, width, height);
        }
    }

    pub fn render(
        &mut self,
        dt_sec: f32,
        spin: f32,
        clouds_spin: f32,
        instances: &[scene::MarkerInstance],
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let globals = scene::Globals {
            view_proj: self.view_proj.to_cols_array_2d(),
            camera_pos: [self.cam_eye.x, self.cam_eye.y, self.cam_eye.z, 1.0],
            lighting: [AMBIENT_LIGHT, POINT_LIGHT, self.time_accum, 0.0],
        };
        self.queue
            .write_buffer(&self.scene.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let shell_uniforms = |radius: f32, yaw: f32, tint: [f32; 3], alpha: f32| {
            scene::ShellUniforms {
                model: (Mat4::from_rotation_y(yaw) * Mat4::from_scale(Vec3::splat(radius)))
                    .to_cols_array_2d(),
                tint: [tint[0], tint[1], tint[2], alpha],
            }
        };
        self.queue.write_buffer(
            &self.scene.water.uniform_buffer,
            0,
            bytemuck::bytes_of(&shell_uniforms(WATER_RADIUS, spin, WATER_TINT, 1.0)),
        );
        self.queue.write_buffer(
            &self.scene.earth.uniform_buffer,
            0,
            bytemuck::bytes_of(&shell_uniforms(GLOBE_RADIUS, spin, EARTH_TINT, 1.0)),
        );
        self.queue.write_buffer(
            &self.scene.clouds.uniform_buffer,
            0,
            bytemuck::bytes_of(&shell_uniforms(
                CLOUDS_RADIUS,
                spin + clouds_spin,
                CLOUDS_TINT,
                1.0,
            )),
        );
        self.queue.write_buffer(
            &self.scene.atmosphere.uniform_buffer,
            0,
            bytemuck::bytes_of(&shell_uniforms(
                ATMOSPHERE_RADIUS,
                spin,
                ATMOSPHERE_TINT,
                ATMOSPHERE_ALPHA,
            )),
        );

        // Paths rotate with the globe as a single white instance.
        let tube = scene::MarkerInstance {
            model: Mat4::from_rotation_y(spin).to_cols_array_2d(),
            color: [1.0, 1.0, 1.0, 1.0],
        };
        self.queue
            .write_buffer(&self.scene.tube_instance, 0, bytemuck::bytes_of(&tube));
        if !instances.is_empty() {
            self.queue.write_buffer(
                &self.scene.marker_instances,
                0,
                bytemuck::cast_slice(instances),
            );
        }

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

            rpass.set_bind_group(0, &self.scene.globals_bg, &[]);

            // Opaque and blended shells, inner to outer; markers and paths
            // slot in before the translucent outer shells.
            for shell in [&self.scene.water, &self.scene.earth] {
                rpass.set_pipeline(&shell.pipeline);
                rpass.set_bind_group(1, &shell.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.scene.sphere.vertex_buffer.slice(..));
                rpass.set_index_buffer(
                    self.scene.sphere.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                rpass.draw_indexed(0..self.scene.sphere.index_count, 0, 0..1);
            }

            rpass.set_pipeline(&self.scene.unlit_pipeline);
            if !instances.is_empty() {
                rpass.set_vertex_buffer(0, self.scene.marker.vertex_buffer.slice(..));
                rpass.set_vertex_buffer(1, self.scene.marker_instances.slice(..));
                rpass.set_index_buffer(
                    self.scene.marker.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                rpass.draw_indexed(
                    0..self.scene.marker.index_count,
                    0,
                    0..instances.len() as u32,
                );
            }
            rpass.set_vertex_buffer(0, self.scene.tubes.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.scene.tube_instance.slice(..));
            rpass.set_index_buffer(
                self.scene.tubes.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            rpass.draw_indexed(0..self.scene.tubes.index_count, 0, 0..1);

            for shell in [&self.scene.clouds, &self.scene.atmosphere] {
                rpass.set_pipeline(&shell.pipeline);
                rpass.set_bind_group(1, &shell.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.scene.sphere.vertex_buffer.slice(..));
                rpass.set_index_buffer(
                    self.scene.sphere.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                rpass.draw_indexed(0..self.scene.sphere.index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
