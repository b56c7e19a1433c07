//! Shader program lifecycle.
//!
//! Split data-oriented: `shader_data` holds the stage sources and compiled
//! stage types, `shader_operations` holds the pure compile / link /
//! reflection functions. GPU module and pipeline creation happens in the
//! renderer, after a `ShaderSet` has been obtained here.

pub mod shader_data;
pub mod shader_operations;

pub use shader_data::{
    CompiledStage, ShaderSet, FRAGMENT_ENTRY, PHONG_FRAGMENT, PHONG_VERTEX, VERTEX_ENTRY,
};
pub use shader_operations::{binding_names, compile_program, has_binding};
