//! Shader data structures.
//!
//! A `CompiledStage` owns one parsed and validated shader stage; a
//! `ShaderSet` is the pair the renderer builds its pipeline from. A set can
//! only be obtained through `shader_operations::compile_program`, so holding
//! one implies both stages compiled and their interfaces link.

/// Built-in Phong vertex stage source.
pub const PHONG_VERTEX: &str = include_str!("phong_vert.wgsl");

/// Built-in Phong fragment stage source.
pub const PHONG_FRAGMENT: &str = include_str!("phong_frag.wgsl");

/// Entry point names the renderer dispatches.
pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// One parsed, validated shader stage.
pub struct CompiledStage {
    pub stage: naga::ShaderStage,
    /// The source text, kept for module creation and diagnostics.
    pub source: String,
    /// The parsed IR, used for link checking and reflection.
    pub module: naga::Module,
}

/// A matched vertex + fragment stage pair.
pub struct ShaderSet {
    pub vertex: CompiledStage,
    pub fragment: CompiledStage,
}
