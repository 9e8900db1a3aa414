//! Shaders command - compile, link and reflect a WGSL program

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use nether_torus::graphics::{
    Program, ShaderStage, TORUS_FRAGMENT_WGSL, TORUS_VERTEX_WGSL, compile_shader, link_program,
};

/// Arguments for the shaders command
#[derive(Args)]
pub struct ShadersArgs {
    /// Vertex shader WGSL file (defaults to the bundled torus shader)
    #[arg(long)]
    pub vertex: Option<PathBuf>,

    /// Fragment shader WGSL file (defaults to the bundled torus shader)
    #[arg(long)]
    pub fragment: Option<PathBuf>,
}

fn read_source(path: Option<&Path>, bundled: &str) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read shader: {}", path.display())),
        None => Ok(bundled.to_string()),
    }
}

/// Compile and link the selected shader pair
fn build_program(args: &ShadersArgs) -> Result<Program> {
    let vertex_source = read_source(args.vertex.as_deref(), TORUS_VERTEX_WGSL)?;
    let fragment_source = read_source(args.fragment.as_deref(), TORUS_FRAGMENT_WGSL)?;

    let vertex = compile_shader(&vertex_source, ShaderStage::Vertex)?;
    let fragment = compile_shader(&fragment_source, ShaderStage::Fragment)?;
    Ok(link_program(vertex, fragment)?)
}

/// Human-readable attribute and uniform tables
fn describe(program: &Program) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Entry points: {} / {}\n",
        program.vertex().entry_point(),
        program.fragment().entry_point()
    ));

    out.push_str("Attributes:\n");
    for attribute in program.attributes() {
        out.push_str(&format!(
            "  @location({}) {}: {:?}\n",
            attribute.location, attribute.name, attribute.format
        ));
    }

    out.push_str("Uniforms:\n");
    for uniform in program.uniforms() {
        out.push_str(&format!(
            "  @group({}) @binding({}) {}: {:?}\n",
            uniform.location.group, uniform.location.binding, uniform.name, uniform.visibility
        ));
    }

    out
}

/// Execute the shaders command
pub fn execute(args: ShadersArgs) -> Result<()> {
    let program = build_program(&args)?;
    print!("{}", describe(&program));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_program_description() {
        let args = ShadersArgs {
            vertex: None,
            fragment: None,
        };
        let text = describe(&build_program(&args).unwrap());

        assert!(text.contains("Entry points: vs_main / fs_main"));
        assert!(text.contains("@location(0) position: Float32x3"));
        assert!(text.contains("@location(1) normal: Float32x3"));
        assert!(text.contains("@group(0) @binding(0) camera"));
        assert!(text.contains("@group(0) @binding(1) light"));
    }

    #[test]
    fn test_compile_error_surfaces_stage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.wgsl");
        std::fs::write(&path, "@fragment fn fs_main( {").unwrap();

        let args = ShadersArgs {
            vertex: None,
            fragment: Some(path),
        };
        let err = build_program(&args).unwrap_err();
        assert!(err.to_string().starts_with("fragment shader compile failed"));
    }

    #[test]
    fn test_missing_shader_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = ShadersArgs {
            vertex: Some(dir.path().join("missing.wgsl")),
            fragment: None,
        };
        let err = build_program(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to read shader"));
    }
}
