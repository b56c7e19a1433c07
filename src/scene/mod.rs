//! The static desk scene: draw records and their transform math.

pub mod scene_data;
pub mod scene_operations;

pub use scene_data::{desk_scene, DrawRecord, MeshKind, TextureSlot};
pub use scene_operations::{model_matrix, normal_matrix};
