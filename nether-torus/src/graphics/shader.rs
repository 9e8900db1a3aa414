//! WGSL shader compilation
//!
//! Shaders are parsed and validated with naga up front. The checked source is
//! handed to wgpu only when a device-side module is needed.

use std::fmt;

use super::error::ShaderCompileError;

/// Bundled torus vertex shader (`vs_main`, locations 0 = position, 1 = normal)
pub const TORUS_VERTEX_WGSL: &str = include_str!("../../shaders/torus_vs.wgsl");

/// Bundled torus fragment shader (`fs_main`, directional light)
pub const TORUS_FRAGMENT_WGSL: &str = include_str!("../../shaders/torus_fs.wgsl");

/// Programmable pipeline stage a shader is compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub(crate) fn to_naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }

    /// Visibility flag for bind group layouts
    pub fn to_wgpu(self) -> wgpu::ShaderStages {
        match self {
            ShaderStage::Vertex => wgpu::ShaderStages::VERTEX,
            ShaderStage::Fragment => wgpu::ShaderStages::FRAGMENT,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// A validated WGSL shader for a single stage
#[derive(Debug, Clone)]
pub struct Shader {
    stage: ShaderStage,
    entry_point: String,
    source: String,
    module: naga::Module,
}

impl Shader {
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// Name of the first entry point for this shader's stage
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn module(&self) -> &naga::Module {
        &self.module
    }

    /// naga entry point backing [`Self::entry_point`]
    pub(crate) fn naga_entry_point(&self) -> Option<&naga::EntryPoint> {
        let stage = self.stage.to_naga();
        self.module
            .entry_points
            .iter()
            .find(|ep| ep.stage == stage && ep.name == self.entry_point)
    }

    /// Create the device-side shader module
    pub fn create_module(&self, device: &wgpu::Device, label: &str) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(self.source.as_str().into()),
        })
    }
}

/// Compile a WGSL shader for the given stage
///
/// Fails when the source does not parse, does not validate, or has no entry
/// point for `stage`. The error carries naga's diagnostic and the source text.
pub fn compile_shader(source: &str, stage: ShaderStage) -> Result<Shader, ShaderCompileError> {
    // Parse the WGSL source
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| ShaderCompileError::new(stage, e.emit_to_string(source), source))?;

    // Validate the module
    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| ShaderCompileError::new(stage, e.emit_to_string(source), source))?;

    let naga_stage = stage.to_naga();
    let entry_point = module
        .entry_points
        .iter()
        .find(|ep| ep.stage == naga_stage)
        .map(|ep| ep.name.clone())
        .ok_or_else(|| {
            ShaderCompileError::new(stage, format!("no @{} entry point found", stage), source)
        })?;

    tracing::debug!("Compiled {} shader (entry point '{}')", stage, entry_point);

    Ok(Shader {
        stage,
        entry_point,
        source: source.to_string(),
        module,
    })
}
