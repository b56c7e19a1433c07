//! Renderer setup and the per-frame draw pass.

use super::mesh::GpuMesh;
use super::renderer_data::{RendererData, MODEL_BINDING_SIZE, MODEL_UNIFORM_STRIDE};
use super::texture::{create_sampler, GpuTexture};
use super::uniforms::{ModelUniforms, SceneUniforms};
use super::vertex::Vertex;
use crate::constants::{CASE_TEXTURE_PATH, DEPTH_FORMAT, LOGO_TEXTURE_PATH};
use crate::error::ViewerError;
use crate::scene::{DrawRecord, MeshKind};
use crate::shader::{self, ShaderSet, FRAGMENT_ENTRY, VERTEX_ENTRY};
use std::path::Path;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

/// Uniform names the renderer depends on. A stage that compiled without one
/// of these (the compiler eliminated it, or the source was edited) renders
/// incorrectly but must not abort, so the miss is logged and ignored.
const VERTEX_BINDINGS: [&str; 2] = ["scene", "object"];
const FRAGMENT_BINDINGS: [&str; 4] = ["scene", "object", "uTexture", "uSampler"];

/// Build the whole renderer: GPU acquisition, shader program, pipeline,
/// meshes, textures and the pre-filled uniform tables.
pub async fn init(window: Arc<Window>, records: Vec<DrawRecord>) -> anyhow::Result<RendererData> {
    let shaders = shader::compile_program(shader::PHONG_VERTEX, shader::PHONG_FRAGMENT)?;
    warn_missing_bindings(&shaders);

    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
    let size = window.inner_size();
    let surface = instance
        .create_surface(window)
        .map_err(ViewerError::Surface)?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or(ViewerError::NoAdapter)?;
    log::info!("using adapter: {}", adapter.get_info().name);

    let (device, queue) = adapter
        .request_device(
            &wgpu::DeviceDescriptor {
                label: Some("viewer device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
            },
            None,
        )
        .await
        .map_err(ViewerError::DeviceRequest)?;

    let caps = surface.get_capabilities(&adapter);
    let format = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first().copied())
        .ok_or(ViewerError::NoAdapter)?;
    let config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::Fifo,
        alpha_mode: wgpu::CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);
    let depth_view = create_depth_view(&device, &config);

    // Bind group layouts: 0 = per-frame scene, 1 = per-record model
    // (dynamic offset), 2 = texture + sampler.
    let scene_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene uniforms layout"),
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
    let model_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("model uniforms layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: MODEL_BINDING_SIZE,
            },
            count: None,
        }],
    });
    let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("texture layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });

    let pipeline = create_pipeline(
        &device,
        &shaders,
        format,
        &[&scene_layout, &model_layout, &texture_layout],
    );

    let scene_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene uniforms"),
        layout: &scene_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: scene_buffer.as_entire_binding(),
        }],
    });

    let model_buffer = create_model_buffer(&device, &records);
    let model_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("model uniforms"),
        layout: &model_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &model_buffer,
                offset: 0,
                size: MODEL_BINDING_SIZE,
            }),
        }],
    });

    let sampler = create_sampler(&device);
    let white = GpuTexture::white(&device, &queue);
    let case = GpuTexture::from_path(&device, &queue, Path::new(CASE_TEXTURE_PATH))?;
    let logo = GpuTexture::from_path(&device, &queue, Path::new(LOGO_TEXTURE_PATH))?;
    let white_bind_group = texture_bind_group(&device, &texture_layout, &white, &sampler, "white");
    let case_bind_group = texture_bind_group(&device, &texture_layout, &case, &sampler, "case");
    let logo_bind_group = texture_bind_group(&device, &texture_layout, &logo, &sampler, "logo");

    let plane = GpuMesh::for_kind(&device, MeshKind::Plane);
    let box_mesh = GpuMesh::for_kind(&device, MeshKind::Box);

    log::info!("renderer ready: {} draw records", records.len());

    Ok(RendererData {
        surface,
        device,
        queue,
        config,
        depth_view,
        pipeline,
        scene_buffer,
        scene_bind_group,
        model_bind_group,
        white_bind_group,
        case_bind_group,
        logo_bind_group,
        plane,
        box_mesh,
        records,
    })
}

/// Reconfigure the surface and depth buffer after a window resize (or a
/// lost surface, which reuses the current size).
pub fn resize(data: &mut RendererData, width: u32, height: u32) {
    if width == 0 || height == 0 {
        return;
    }
    data.config.width = width;
    data.config.height = height;
    data.surface.configure(&data.device, &data.config);
    data.depth_view = create_depth_view(&data.device, &data.config);
}

/// Draw one frame: upload the per-frame uniforms, then walk the draw table.
pub fn render_frame(
    data: &RendererData,
    scene: &SceneUniforms,
) -> Result<(), wgpu::SurfaceError> {
    data.queue
        .write_buffer(&data.scene_buffer, 0, bytemuck::bytes_of(scene));

    let frame = data.surface.get_current_texture()?;
    let view = frame
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = data
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame encoder"),
        });
    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &data.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&data.pipeline);
        pass.set_bind_group(0, &data.scene_bind_group, &[]);
        for (index, record) in data.records.iter().enumerate() {
            let offset = (index as wgpu::BufferAddress * MODEL_UNIFORM_STRIDE) as u32;
            pass.set_bind_group(1, &data.model_bind_group, &[offset]);
            pass.set_bind_group(2, data.texture_bind_group(record.texture), &[]);
            let mesh = data.mesh(record.mesh);
            pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            pass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }

    data.queue.submit(std::iter::once(encoder.finish()));
    frame.present();
    Ok(())
}

fn warn_missing_bindings(shaders: &ShaderSet) {
    for name in VERTEX_BINDINGS {
        if !shader::has_binding(&shaders.vertex, name) {
            log::warn!("vertex stage has no binding named {name}; writes to it are dropped");
        }
    }
    for name in FRAGMENT_BINDINGS {
        if !shader::has_binding(&shaders.fragment, name) {
            log::warn!("fragment stage has no binding named {name}; writes to it are dropped");
        }
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    shaders: &ShaderSet,
    format: wgpu::TextureFormat,
    layouts: &[&wgpu::BindGroupLayout],
) -> wgpu::RenderPipeline {
    let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("phong vertex"),
        source: wgpu::ShaderSource::Wgsl(shaders.vertex.source.as_str().into()),
    });
    let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("phong fragment"),
        source: wgpu::ShaderSource::Wgsl(shaders.fragment.source.as_str().into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene pipeline layout"),
        bind_group_layouts: layouts,
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &vertex_module,
            entry_point: VERTEX_ENTRY,
            buffers: &[Vertex::layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &fragment_module,
            entry_point: FRAGMENT_ENTRY,
            targets: &[Some(color_target(format))],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // Planes are viewed from both sides, so no culling.
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    })
}

/// Color target with standard alpha blending. The logo decal's transparent
/// background relies on it; the opaque draws write alpha 1 and are
/// unaffected.
fn color_target(format: wgpu::TextureFormat) -> wgpu::ColorTargetState {
    wgpu::ColorTargetState {
        format,
        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
        write_mask: wgpu::ColorWrites::ALL,
    }
}

fn create_depth_view(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth buffer"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

/// Pack every record's uniforms into one buffer, one aligned slot each.
/// The scene is static so this is written exactly once.
fn create_model_buffer(device: &wgpu::Device, records: &[DrawRecord]) -> wgpu::Buffer {
    let stride = MODEL_UNIFORM_STRIDE as usize;
    let mut bytes = vec![0u8; records.len().max(1) * stride];
    for (index, record) in records.iter().enumerate() {
        let uniforms = ModelUniforms::from_record(record);
        let start = index * stride;
        let end = start + std::mem::size_of::<ModelUniforms>();
        bytes[start..end].copy_from_slice(bytemuck::bytes_of(&uniforms));
    }
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("model uniforms"),
        contents: &bytes,
        usage: wgpu::BufferUsages::UNIFORM,
    })
}

fn texture_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    texture: &GpuTexture,
    sampler: &wgpu::Sampler,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&texture.view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_target_blends_alpha() {
        let target = color_target(wgpu::TextureFormat::Bgra8UnormSrgb);
        assert_eq!(target.blend, Some(wgpu::BlendState::ALPHA_BLENDING));
        assert_eq!(target.write_mask, wgpu::ColorWrites::ALL);
    }
}
