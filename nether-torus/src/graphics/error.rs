use super::shader::ShaderStage;

/// Shader failed to parse, validate, or lacks an entry point for its stage
///
/// Carries the naga diagnostic and the offending source for display.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{stage} shader compile failed\n{log}\n{source_code}")]
pub struct ShaderCompileError {
    pub stage: ShaderStage,
    /// Compiler diagnostic
    pub log: String,
    /// The WGSL that failed
    pub source_code: String,
}

impl ShaderCompileError {
    pub(crate) fn new(stage: ShaderStage, log: impl Into<String>, source_code: &str) -> Self {
        Self {
            stage,
            log: log.into(),
            source_code: source_code.to_string(),
        }
    }
}

/// Vertex and fragment shaders cannot be combined into a program
#[derive(Debug, Clone, thiserror::Error)]
#[error("program link failed\n{log}")]
pub struct ProgramLinkError {
    /// One line per interface problem
    pub log: String,
}
