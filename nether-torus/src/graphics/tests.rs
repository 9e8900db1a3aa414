//! Tests for shader compilation, program linking and location lookup
//!
//! Everything here runs through naga only; no GPU device is required.

use super::*;

const PASSTHROUGH_VS: &str = r#"
@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position, 1.0);
}
"#;

const SOLID_FS: &str = r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 0.5, 0.25, 1.0);
}
"#;

fn torus_program() -> Program {
    let vs = compile_shader(TORUS_VERTEX_WGSL, ShaderStage::Vertex).unwrap();
    let fs = compile_shader(TORUS_FRAGMENT_WGSL, ShaderStage::Fragment).unwrap();
    link_program(vs, fs).unwrap()
}

// =============================================================================
// Shader compilation
// =============================================================================

#[test]
fn test_compile_bundled_shaders() {
    let vs = compile_shader(TORUS_VERTEX_WGSL, ShaderStage::Vertex).unwrap();
    assert_eq!(vs.stage(), ShaderStage::Vertex);
    assert_eq!(vs.entry_point(), "vs_main");

    let fs = compile_shader(TORUS_FRAGMENT_WGSL, ShaderStage::Fragment).unwrap();
    assert_eq!(fs.stage(), ShaderStage::Fragment);
    assert_eq!(fs.entry_point(), "fs_main");
    assert_eq!(fs.source(), TORUS_FRAGMENT_WGSL);
}

#[test]
fn test_compile_syntax_error_carries_log_and_source() {
    let source = "@vertex fn vs_main( -> @builtin(position) vec4<f32> {";
    let err = compile_shader(source, ShaderStage::Vertex).unwrap_err();

    assert_eq!(err.stage, ShaderStage::Vertex);
    assert!(!err.log.is_empty());
    assert_eq!(err.source_code, source);

    let message = err.to_string();
    assert!(message.starts_with("vertex shader compile failed"));
    assert!(message.ends_with(source));
}

#[test]
fn test_compile_type_error() {
    let source = r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    let x: f32 = 1u;
    return vec4<f32>(x);
}
"#;
    let err = compile_shader(source, ShaderStage::Fragment).unwrap_err();
    assert_eq!(err.stage, ShaderStage::Fragment);
    assert!(!err.log.is_empty());
}

#[test]
fn test_compile_missing_entry_point() {
    // Valid WGSL, but only a fragment entry point
    let err = compile_shader(SOLID_FS, ShaderStage::Vertex).unwrap_err();
    assert!(err.log.contains("no @vertex entry point"));

    let err = compile_shader("fn helper() -> f32 { return 1.0; }", ShaderStage::Fragment)
        .unwrap_err();
    assert!(err.log.contains("no @fragment entry point"));
}

#[test]
fn test_stage_display() {
    assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
    assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    assert_eq!(ShaderStage::Vertex.to_wgpu(), wgpu::ShaderStages::VERTEX);
}

// =============================================================================
// Program linking
// =============================================================================

#[test]
fn test_link_bundled_program() {
    let program = torus_program();

    let attributes = program.attributes();
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes[0].name, "position");
    assert_eq!(attributes[0].location, 0);
    assert_eq!(attributes[0].format, wgpu::VertexFormat::Float32x3);
    assert_eq!(attributes[1].name, "normal");
    assert_eq!(attributes[1].location, 1);

    let uniforms = program.uniforms();
    assert_eq!(uniforms.len(), 2);
    assert_eq!(uniforms[0].name, "camera");
    assert_eq!(uniforms[0].visibility, wgpu::ShaderStages::VERTEX);
    assert_eq!(uniforms[1].name, "light");
    assert_eq!(uniforms[1].visibility, wgpu::ShaderStages::FRAGMENT);
}

#[test]
fn test_link_simple_program() {
    let vs = compile_shader(PASSTHROUGH_VS, ShaderStage::Vertex).unwrap();
    let fs = compile_shader(SOLID_FS, ShaderStage::Fragment).unwrap();
    let program = link_program(vs, fs).unwrap();

    assert_eq!(program.attributes().len(), 1);
    assert!(program.uniforms().is_empty());
}

#[test]
fn test_link_rejects_swapped_stages() {
    let vs = compile_shader(PASSTHROUGH_VS, ShaderStage::Vertex).unwrap();
    let fs = compile_shader(SOLID_FS, ShaderStage::Fragment).unwrap();

    let err = link_program(fs, vs).unwrap_err();
    assert!(err.log.contains("expected a vertex shader, got fragment"));
    assert!(err.log.contains("expected a fragment shader, got vertex"));
    assert!(err.to_string().starts_with("program link failed"));
}

#[test]
fn test_link_rejects_unwritten_fragment_input() {
    let fs = r#"
@fragment
fn fs_main(@location(0) color: vec4<f32>) -> @location(0) vec4<f32> {
    return color;
}
"#;
    let vs = compile_shader(PASSTHROUGH_VS, ShaderStage::Vertex).unwrap();
    let fs = compile_shader(fs, ShaderStage::Fragment).unwrap();

    let err = link_program(vs, fs).unwrap_err();
    assert!(err.log.contains("fragment input 'color' at location 0"));
}

#[test]
fn test_link_rejects_interstage_type_mismatch() {
    // Vertex writes vec3 at location 0, fragment reads vec4
    let fs = r#"
@fragment
fn fs_main(@location(0) world_normal: vec4<f32>) -> @location(0) vec4<f32> {
    return world_normal;
}
"#;
    let vs = compile_shader(TORUS_VERTEX_WGSL, ShaderStage::Vertex).unwrap();
    let fs = compile_shader(fs, ShaderStage::Fragment).unwrap();

    let err = link_program(vs, fs).unwrap_err();
    assert!(err.log.contains("type mismatch at location 0"));
}

#[test]
fn test_link_rejects_binding_conflict() {
    // Fragment puts a different uniform on the camera's bind point
    let fs = r#"
struct Tint {
    color: vec4<f32>,
}

@group(0) @binding(0) var<uniform> tint: Tint;

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return tint.color;
}
"#;
    let vs = compile_shader(TORUS_VERTEX_WGSL, ShaderStage::Vertex).unwrap();
    let fs = compile_shader(fs, ShaderStage::Fragment).unwrap();

    let err = link_program(vs, fs).unwrap_err();
    assert!(err.log.contains("binding conflict at @group(0) @binding(0)"));
}

#[test]
fn test_link_merges_shared_binding() {
    let vs = r#"
struct Params {
    scale: f32,
}

@group(0) @binding(0) var<uniform> params: Params;

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position * params.scale, 1.0);
}
"#;
    let fs = r#"
struct Params {
    scale: f32,
}

@group(0) @binding(0) var<uniform> params: Params;

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(params.scale);
}
"#;
    let vs = compile_shader(vs, ShaderStage::Vertex).unwrap();
    let fs = compile_shader(fs, ShaderStage::Fragment).unwrap();
    let program = link_program(vs, fs).unwrap();

    assert_eq!(program.uniforms().len(), 1);
    assert_eq!(
        program.uniforms()[0].visibility,
        wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT
    );
}

#[test]
fn test_integer_attribute_format() {
    let vs = r#"
@vertex
fn vs_main(@location(0) id: u32, @location(1) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position, f32(id));
}
"#;
    let vs = compile_shader(vs, ShaderStage::Vertex).unwrap();
    let fs = compile_shader(SOLID_FS, ShaderStage::Fragment).unwrap();
    let program = link_program(vs, fs).unwrap();

    assert_eq!(program.attributes()[0].format, wgpu::VertexFormat::Uint32);
    assert_eq!(program.attributes()[1].format, wgpu::VertexFormat::Float32x3);
}

#[test]
fn test_struct_vertex_input_names() {
    let vs = r#"
struct VertexInput {
    @location(3) uv: vec2<f32>,
    @location(0) position: vec3<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> @builtin(position) vec4<f32> {
    return vec4<f32>(in.position + vec3<f32>(in.uv, 0.0), 1.0);
}
"#;
    let vs = compile_shader(vs, ShaderStage::Vertex).unwrap();
    let fs = compile_shader(SOLID_FS, ShaderStage::Fragment).unwrap();
    let program = link_program(vs, fs).unwrap();

    // Sorted by location, named after the struct members
    let names: Vec<&str> = program.attributes().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["position", "uv"]);
    assert_eq!(program.attribute_location("uv"), Some(3));
    assert_eq!(program.attributes()[1].format, wgpu::VertexFormat::Float32x2);
}

// =============================================================================
// Location lookup
// =============================================================================

#[test]
fn test_attribute_locations() {
    let program = torus_program();
    let locs = get_attrib_locations(&program, &["position", "normal", "uv"]);

    assert_eq!(locs.len(), 3);
    assert_eq!(locs["position"], Some(0));
    assert_eq!(locs["normal"], Some(1));
    assert_eq!(locs["uv"], None);
}

#[test]
fn test_uniform_locations() {
    let program = torus_program();
    let locs = program.uniform_locations(&["camera", "light", "fog"]);

    assert_eq!(locs["camera"], Some(UniformLocation { group: 0, binding: 0 }));
    assert_eq!(locs["light"], Some(UniformLocation { group: 0, binding: 1 }));
    assert_eq!(locs["fog"], None);
}

#[test]
fn test_locations_accept_owned_names() {
    let program = torus_program();
    let names = vec!["normal".to_string()];
    let locs = program.attribute_locations(names.as_slice());
    assert_eq!(locs["normal"], Some(1));

    let locs = get_uniform_locations(&program, names.as_slice());
    assert_eq!(locs["normal"], None);
}

#[test]
fn test_vertex_buffer_attributes_one_per_slot() {
    let program = torus_program();
    let attributes = program.vertex_buffer_attributes();

    assert_eq!(attributes.len(), 2);
    for (attribute, location) in attributes.iter().zip([0, 1]) {
        assert_eq!(attribute.offset, 0);
        assert_eq!(attribute.shader_location, location);
        assert_eq!(attribute.format.size(), 12);
    }
}

#[test]
fn test_pipeline_targets_default() {
    let targets = PipelineTargets::default();
    assert_eq!(targets.color_format, wgpu::TextureFormat::Rgba8UnormSrgb);
    assert_eq!(targets.depth_format, Some(wgpu::TextureFormat::Depth24Plus));
}
