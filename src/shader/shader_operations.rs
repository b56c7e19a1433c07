//! Shader operations: per-stage compilation, link checking, reflection.
//!
//! Compilation runs entirely on the CPU through naga (the same compiler
//! wgpu uses internally), so a broken stage is caught and reported with its
//! full annotated diagnostic before any GPU object is created. The link
//! step verifies that the fragment stage's inputs are satisfied by the
//! vertex stage's outputs, location by location.

use super::shader_data::{CompiledStage, ShaderSet};
use crate::error::ShaderError;
use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::{Binding, Handle, Module, ShaderStage, Type, TypeInner};
use std::collections::BTreeMap;

/// Compile both stages and link-check their interfaces.
///
/// Fails fast: a vertex diagnostic suppresses fragment compilation, and a
/// failed stage suppresses linking, mirroring the classic GL program build.
pub fn compile_program(vertex_src: &str, fragment_src: &str) -> Result<ShaderSet, ShaderError> {
    let vertex = compile_stage(ShaderStage::Vertex, vertex_src)
        .map_err(ShaderError::VertexCompilation)?;
    let fragment = compile_stage(ShaderStage::Fragment, fragment_src)
        .map_err(ShaderError::FragmentCompilation)?;

    link_stages(&vertex, &fragment)?;

    Ok(ShaderSet { vertex, fragment })
}

/// Parse and validate a single stage. The error is the diagnostic log.
fn compile_stage(stage: ShaderStage, source: &str) -> Result<CompiledStage, String> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| e.emit_to_string(source))?;

    Validator::new(ValidationFlags::all(), Capabilities::default())
        .validate(&module)
        .map_err(|e| e.emit_to_string(source))?;

    if entry_point(&module, stage).is_none() {
        return Err(format!("module declares no {stage:?} entry point"));
    }

    Ok(CompiledStage {
        stage,
        source: source.to_string(),
        module,
    })
}

/// Verify the vertex stage writes every location the fragment stage reads,
/// with matching types.
fn link_stages(vertex: &CompiledStage, fragment: &CompiledStage) -> Result<(), ShaderError> {
    let vs = entry_point(&vertex.module, ShaderStage::Vertex)
        .ok_or_else(|| ShaderError::Linking("vertex entry point missing".into()))?;
    let fs = entry_point(&fragment.module, ShaderStage::Fragment)
        .ok_or_else(|| ShaderError::Linking("fragment entry point missing".into()))?;

    let outputs = output_locations(&vertex.module, vs);
    let inputs = input_locations(&fragment.module, fs);

    let mut problems = Vec::new();
    for (location, wanted) in &inputs {
        match outputs.get(location) {
            None => problems.push(format!(
                "fragment input @location({location}) ({wanted}) has no vertex output"
            )),
            Some(provided) if provided != wanted => problems.push(format!(
                "@location({location}): vertex writes {provided}, fragment expects {wanted}"
            )),
            Some(_) => {}
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ShaderError::Linking(problems.join("\n")))
    }
}

/// Names of all resource bindings (uniform blocks, textures, samplers)
/// declared by a compiled stage. Used by the renderer to warn about
/// uniforms it expects but the compiler dropped.
pub fn binding_names(stage: &CompiledStage) -> Vec<String> {
    stage
        .module
        .global_variables
        .iter()
        .filter(|(_, var)| var.binding.is_some())
        .filter_map(|(_, var)| var.name.clone())
        .collect()
}

/// Whether a stage declares a resource binding with the given name.
pub fn has_binding(stage: &CompiledStage, name: &str) -> bool {
    binding_names(stage).iter().any(|n| n == name)
}

fn entry_point(module: &Module, stage: ShaderStage) -> Option<&naga::EntryPoint> {
    module.entry_points.iter().find(|ep| ep.stage == stage)
}

fn output_locations(module: &Module, ep: &naga::EntryPoint) -> BTreeMap<u32, String> {
    let mut out = BTreeMap::new();
    if let Some(result) = &ep.function.result {
        collect_io(module, result.ty, result.binding.as_ref(), &mut out);
    }
    out
}

fn input_locations(module: &Module, ep: &naga::EntryPoint) -> BTreeMap<u32, String> {
    let mut out = BTreeMap::new();
    for arg in &ep.function.arguments {
        collect_io(module, arg.ty, arg.binding.as_ref(), &mut out);
    }
    out
}

/// Record `location -> type` for one IO value, flattening structs.
/// Builtins (clip position etc.) are not part of the stage interface.
fn collect_io(
    module: &Module,
    ty: Handle<Type>,
    binding: Option<&Binding>,
    out: &mut BTreeMap<u32, String>,
) {
    match binding {
        Some(Binding::Location { location, .. }) => {
            out.insert(*location, type_token(module, ty));
        }
        Some(Binding::BuiltIn(_)) => {}
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect_io(module, member.ty, member.binding.as_ref(), out);
                }
            }
        }
    }
}

fn type_token(module: &Module, ty: Handle<Type>) -> String {
    match &module.types[ty].inner {
        TypeInner::Scalar(scalar) => scalar_token(scalar).to_string(),
        TypeInner::Vector { size, scalar } => {
            format!("vec{}<{}>", *size as u8, scalar_token(scalar))
        }
        other => format!("{other:?}"),
    }
}

fn scalar_token(scalar: &naga::Scalar) -> &'static str {
    match (scalar.kind, scalar.width) {
        (naga::ScalarKind::Float, 4) => "f32",
        (naga::ScalarKind::Sint, 4) => "i32",
        (naga::ScalarKind::Uint, 4) => "u32",
        (naga::ScalarKind::Bool, _) => "bool",
        _ => "scalar",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::shader_data::{PHONG_FRAGMENT, PHONG_VERTEX};

    const TRIVIAL_VERTEX: &str = r#"
        struct VsOut {
            @builtin(position) pos: vec4<f32>,
            @location(0) color: vec3<f32>,
        }
        @vertex
        fn vs_main(@location(0) position: vec3<f32>) -> VsOut {
            var out: VsOut;
            out.pos = vec4<f32>(position, 1.0);
            out.color = position;
            return out;
        }
    "#;

    const TRIVIAL_FRAGMENT: &str = r#"
        @fragment
        fn fs_main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
            return vec4<f32>(color, 1.0);
        }
    "#;

    #[test]
    fn builtin_sources_compile_and_link() {
        let set = compile_program(PHONG_VERTEX, PHONG_FRAGMENT)
            .expect("built-in Phong stages must build");
        assert_eq!(set.vertex.stage, ShaderStage::Vertex);
        assert_eq!(set.fragment.stage, ShaderStage::Fragment);
    }

    #[test]
    fn trivial_sources_compile_and_link() {
        assert!(compile_program(TRIVIAL_VERTEX, TRIVIAL_FRAGMENT).is_ok());
    }

    #[test]
    fn broken_vertex_reports_vertex_compilation() {
        let err = compile_program("@vertex fn vs_main( {", TRIVIAL_FRAGMENT)
            .err()
            .expect("must fail");
        match err {
            ShaderError::VertexCompilation(log) => assert!(!log.is_empty()),
            other => panic!("expected VertexCompilation, got {other:?}"),
        }
    }

    #[test]
    fn broken_fragment_reports_fragment_compilation() {
        let err = compile_program(TRIVIAL_VERTEX, "@fragment fn fs_main() -> f32 {}")
            .err()
            .expect("must fail");
        match err {
            ShaderError::FragmentCompilation(log) => assert!(!log.is_empty()),
            other => panic!("expected FragmentCompilation, got {other:?}"),
        }
    }

    #[test]
    fn vertex_failure_suppresses_fragment_diagnostics() {
        // Both stages are broken; only the vertex diagnostic may surface.
        let err = compile_program("nonsense", "also nonsense").err().expect("must fail");
        assert!(matches!(err, ShaderError::VertexCompilation(_)));
    }

    #[test]
    fn missing_entry_point_is_a_compile_error() {
        let err = compile_program(TRIVIAL_FRAGMENT, TRIVIAL_FRAGMENT)
            .err()
            .expect("must fail");
        match err {
            ShaderError::VertexCompilation(log) => {
                assert!(log.contains("entry point"), "log was: {log}")
            }
            other => panic!("expected VertexCompilation, got {other:?}"),
        }
    }

    #[test]
    fn unsatisfied_varying_reports_linking() {
        let fragment = r#"
            @fragment
            fn fs_main(@location(3) extra: vec2<f32>) -> @location(0) vec4<f32> {
                return vec4<f32>(extra, 0.0, 1.0);
            }
        "#;
        let err = compile_program(TRIVIAL_VERTEX, fragment).err().expect("must fail");
        match err {
            ShaderError::Linking(log) => assert!(log.contains("location(3)"), "log was: {log}"),
            other => panic!("expected Linking, got {other:?}"),
        }
    }

    #[test]
    fn varying_type_mismatch_reports_linking() {
        let fragment = r#"
            @fragment
            fn fs_main(@location(0) color: vec2<f32>) -> @location(0) vec4<f32> {
                return vec4<f32>(color, 0.0, 1.0);
            }
        "#;
        let err = compile_program(TRIVIAL_VERTEX, fragment).err().expect("must fail");
        assert!(matches!(err, ShaderError::Linking(_)));
    }

    #[test]
    fn extra_vertex_outputs_are_allowed() {
        let fragment = r#"
            @fragment
            fn fs_main() -> @location(0) vec4<f32> {
                return vec4<f32>(1.0, 0.0, 1.0, 1.0);
            }
        "#;
        assert!(compile_program(TRIVIAL_VERTEX, fragment).is_ok());
    }

    #[test]
    fn reflection_sees_uniform_contract() {
        let set = compile_program(PHONG_VERTEX, PHONG_FRAGMENT).expect("must build");
        for name in ["scene", "object"] {
            assert!(has_binding(&set.vertex, name), "vertex missing {name}");
            assert!(has_binding(&set.fragment, name), "fragment missing {name}");
        }
        for name in ["uTexture", "uSampler"] {
            assert!(has_binding(&set.fragment, name), "fragment missing {name}");
        }
        assert!(!has_binding(&set.vertex, "uTexture"));
    }
}
