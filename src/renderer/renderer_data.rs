//! Renderer state.

use super::mesh::GpuMesh;
use super::uniforms::ModelUniforms;
use crate::scene::{DrawRecord, MeshKind, TextureSlot};

/// Slot stride for the per-record uniform buffer. Covers `ModelUniforms`
/// rounded up to the guaranteed dynamic-offset alignment.
pub const MODEL_UNIFORM_STRIDE: wgpu::BufferAddress = 256;

/// Bound size of one model uniform slot.
pub const MODEL_BINDING_SIZE: Option<wgpu::BufferSize> =
    wgpu::BufferSize::new(std::mem::size_of::<ModelUniforms>() as u64);

/// Everything the frame loop needs, created once at startup.
pub struct RendererData {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub depth_view: wgpu::TextureView,
    pub pipeline: wgpu::RenderPipeline,
    /// Per-frame uniforms, rewritten before every frame.
    pub scene_buffer: wgpu::Buffer,
    pub scene_bind_group: wgpu::BindGroup,
    /// Per-record uniforms, written once; indexed by dynamic offset.
    pub model_bind_group: wgpu::BindGroup,
    pub white_bind_group: wgpu::BindGroup,
    pub case_bind_group: wgpu::BindGroup,
    pub logo_bind_group: wgpu::BindGroup,
    pub plane: GpuMesh,
    pub box_mesh: GpuMesh,
    pub records: Vec<DrawRecord>,
}

impl RendererData {
    pub fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    pub fn mesh(&self, kind: MeshKind) -> &GpuMesh {
        match kind {
            MeshKind::Plane => &self.plane,
            MeshKind::Box => &self.box_mesh,
        }
    }

    pub fn texture_bind_group(&self, slot: TextureSlot) -> &wgpu::BindGroup {
        match slot {
            TextureSlot::None => &self.white_bind_group,
            TextureSlot::Case => &self.case_bind_group,
            TextureSlot::Logo => &self.logo_bind_group,
        }
    }
}
