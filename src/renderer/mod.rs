//! wgpu renderer: pipeline, meshes, textures, uniforms and the frame loop.

pub mod mesh;
pub mod renderer_data;
pub mod renderer_operations;
pub mod texture;
pub mod uniforms;
pub mod vertex;

pub use renderer_data::RendererData;
pub use renderer_operations::{init, render_frame, resize};
pub use uniforms::{ModelUniforms, Projection, SceneUniforms};
pub use vertex::Vertex;
