//! wgpu resource helpers
//!
//! Thin wrappers for the handful of graphics objects a torus needs:
//! - Static vertex/index buffers ([`create_vertex_buffer`], [`create_index_buffer`])
//! - WGSL shaders compiled and validated with naga ([`compile_shader`])
//! - Vertex + fragment programs with interface checks ([`link_program`])
//! - Attribute/uniform location lookup ([`get_attrib_locations`], [`get_uniform_locations`])
//!
//! Compile and link run entirely on the CPU through naga, so shader errors surface
//! before any device exists. Device-backed calls must run on the thread that owns
//! the wgpu device.

mod buffer;
mod context;
mod error;
mod program;
mod reflect;
mod shader;

#[cfg(test)]
mod tests;

pub use buffer::{MeshBuffers, create_index_buffer, create_vertex_buffer};
pub use context::GpuContext;
pub use error::{ProgramLinkError, ShaderCompileError};
pub use program::{PipelineTargets, Program, link_program};
pub use reflect::{
    UniformBinding, UniformLocation, VertexAttribute, get_attrib_locations, get_uniform_locations,
};
pub use shader::{Shader, ShaderStage, TORUS_FRAGMENT_WGSL, TORUS_VERTEX_WGSL, compile_shader};
