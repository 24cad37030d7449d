use super::helpers::{self, GpuMesh, MeshPipelineDesc};
use crate::constants::{
    MARKER_HEIGHT, MARKER_RADIUS, MARKER_SEGMENTS, SPHERE_SEGMENTS, TUBE_RADIAL_SEGMENTS,
    TUBE_RADIUS, TUBE_SEGMENTS,
};
use crate::geo;
use crate::mesh;

// Shaders bundled as string constants
static GLOBE_WGSL: &str = include_str!("../../shaders/globe.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) camera_pos: [f32; 4],
    // x: ambient, y: point light, z: time, w: unused
    pub(crate) lighting: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ShellUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) tint: [f32; 4],
}

/// Per-marker instance data: a model matrix (spin, placement, hover scale
/// baked in) and a color.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MarkerInstance {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

/// One concentric globe shell: its uniforms, texture binding and pipeline.
pub(crate) struct ShellDraw {
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) pipeline: wgpu::RenderPipeline,
}

pub(crate) struct SceneResources {
    pub(crate) globals_buffer: wgpu::Buffer,
    pub(crate) globals_bg: wgpu::BindGroup,

    pub(crate) sphere: GpuMesh,
    pub(crate) marker: GpuMesh,
    pub(crate) tubes: GpuMesh,

    pub(crate) water: ShellDraw,
    pub(crate) earth: ShellDraw,
    pub(crate) clouds: ShellDraw,
    pub(crate) atmosphere: ShellDraw,

    pub(crate) unlit_pipeline: wgpu::RenderPipeline,
    pub(crate) marker_instances: wgpu::Buffer,
    pub(crate) tube_instance: wgpu::Buffer,
}

fn shell_uniform_buffer(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<ShellUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

#[allow(clippy::too_many_arguments)]
fn build_shell(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    pipeline: wgpu::RenderPipeline,
    label: &str,
    map: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> ShellDraw {
    let uniform_buffer = shell_uniform_buffer(device, label);
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(map),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });
    ShellDraw {
        uniform_buffer,
        bind_group,
        pipeline,
    }
}

/// Merge the flight arcs between consecutive journey stops into one mesh.
fn journey_tubes() -> mesh::MeshData {
    let mut tubes = mesh::MeshData::default();
    let mut prev: Option<&geo::Location> = None;
    for loc in geo::JOURNEY.iter() {
        if let Some(p) = prev {
            let samples = geo::catmull_rom(&geo::arc_points(p, loc), TUBE_SEGMENTS);
            tubes.append(&mesh::tube(&samples, TUBE_RADIUS, TUBE_RADIAL_SEGMENTS));
        }
        prev = Some(loc);
    }
    tubes
}

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    earth_map: &wgpu::TextureView,
    clouds_map: &wgpu::TextureView,
    white: &wgpu::TextureView,
    marker_count: usize,
) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("globe_shader"),
        source: wgpu::ShaderSource::Wgsl(GLOBE_WGSL.into()),
    });

    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("map_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });

    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("globals_bgl"),
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
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("shell_bgl"),
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
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
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

    let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("globals"),
        size: std::mem::size_of::<Globals>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("globals_bg"),
        layout: &bgl0,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: globals_buffer.as_entire_binding(),
        }],
    });

    let shell_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("shell_pl"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let unlit_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("unlit_pl"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });

    let shell_pipeline = |label, fs_entry, blend, cull, depth_write| {
        helpers::make_mesh_pipeline(
            device,
            &shell_pl,
            &shader,
            MeshPipelineDesc {
                label,
                fs_entry,
                format: surface_format,
                blend,
                cull,
                depth_write,
                instanced: false,
            },
        )
    };

    let water = build_shell(
        device,
        &bgl1,
        shell_pipeline("water", "fs_water", None, Some(wgpu::Face::Back), true),
        "water",
        earth_map,
        &sampler,
    );
    let earth = build_shell(
        device,
        &bgl1,
        shell_pipeline(
            "earth",
            "fs_earth",
            Some(wgpu::BlendState::ALPHA_BLENDING),
            Some(wgpu::Face::Back),
            true,
        ),
        "earth",
        earth_map,
        &sampler,
    );
    let clouds = build_shell(
        device,
        &bgl1,
        shell_pipeline(
            "clouds",
            "fs_clouds",
            Some(wgpu::BlendState::ALPHA_BLENDING),
            Some(wgpu::Face::Back),
            false,
        ),
        "clouds",
        clouds_map,
        &sampler,
    );
    // Back faces only, so the atmosphere reads as a rim behind the globe.
    let atmosphere = build_shell(
        device,
        &bgl1,
        shell_pipeline(
            "atmosphere",
            "fs_atmo",
            Some(wgpu::BlendState::ALPHA_BLENDING),
            Some(wgpu::Face::Front),
            false,
        ),
        "atmosphere",
        white,
        &sampler,
    );

    let unlit_pipeline = helpers::make_mesh_pipeline(
        device,
        &unlit_pl,
        &shader,
        MeshPipelineDesc {
            label: "unlit",
            fs_entry: "fs_unlit",
            format: surface_format,
            blend: None,
            cull: None,
            depth_write: true,
            instanced: true,
        },
    );

    let sphere = helpers::upload_mesh(
        device,
        "sphere",
        &mesh::uv_sphere(SPHERE_SEGMENTS, SPHERE_SEGMENTS),
    );
    let marker = helpers::upload_mesh(
        device,
        "marker",
        &mesh::marker_disc(MARKER_RADIUS, MARKER_HEIGHT, MARKER_SEGMENTS),
    );
    let tubes = helpers::upload_mesh(device, "tubes", &journey_tubes());

    let instance_size = std::mem::size_of::<MarkerInstance>() as u64;
    let marker_instances = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("marker_instances"),
        size: instance_size * marker_count.max(1) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let tube_instance = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("tube_instance"),
        size: instance_size,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    SceneResources {
        globals_buffer,
        globals_bg,
        sphere,
        marker,
        tubes,
        water,
        earth,
        clouds,
        atmosphere,
        unlit_pipeline,
        marker_instances,
        tube_instance,
    }
}
