//! Shader interface reflection
//!
//! Pulls stage inputs/outputs and resource bindings out of naga modules. These
//! feed both the link checks and the name -> location lookups.

use hashbrown::HashMap;
use naga::{Binding, Handle, ScalarKind, Type, TypeInner, VectorSize};

use super::program::Program;

/// A user-defined stage input or output (`@location(n)`)
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StageVariable {
    pub name: String,
    pub location: u32,
    pub inner: TypeInner,
}

/// Collect located variables from an argument or result, descending one struct level
pub(crate) fn collect_locations(
    module: &naga::Module,
    name: Option<&String>,
    ty: Handle<Type>,
    binding: Option<&Binding>,
    out: &mut Vec<StageVariable>,
) {
    match binding {
        Some(Binding::Location { location, .. }) => out.push(StageVariable {
            name: name.cloned().unwrap_or_default(),
            location: *location,
            inner: module.types[ty].inner.clone(),
        }),
        Some(Binding::BuiltIn(_)) => {}
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect_locations(module, member.name.as_ref(), member.ty, member.binding.as_ref(), out);
                }
            }
        }
    }
}

/// Inputs of an entry point, sorted by location
pub(crate) fn entry_inputs(module: &naga::Module, ep: &naga::EntryPoint) -> Vec<StageVariable> {
    let mut out = Vec::new();
    for arg in &ep.function.arguments {
        collect_locations(module, arg.name.as_ref(), arg.ty, arg.binding.as_ref(), &mut out);
    }
    out.sort_by_key(|v| v.location);
    out
}

/// Outputs of an entry point, sorted by location
pub(crate) fn entry_outputs(module: &naga::Module, ep: &naga::EntryPoint) -> Vec<StageVariable> {
    let mut out = Vec::new();
    if let Some(result) = &ep.function.result {
        collect_locations(module, None, result.ty, result.binding.as_ref(), &mut out);
    }
    out.sort_by_key(|v| v.location);
    out
}

/// Vertex buffer format for a vertex input type
pub(crate) fn vertex_format(inner: &TypeInner) -> Option<wgpu::VertexFormat> {
    use wgpu::VertexFormat as F;

    match *inner {
        TypeInner::Scalar(scalar) => match (scalar.kind, scalar.width) {
            (ScalarKind::Float, 4) => Some(F::Float32),
            (ScalarKind::Sint, 4) => Some(F::Sint32),
            (ScalarKind::Uint, 4) => Some(F::Uint32),
            _ => None,
        },
        TypeInner::Vector { size, scalar } => match (size, scalar.kind, scalar.width) {
            (VectorSize::Bi, ScalarKind::Float, 4) => Some(F::Float32x2),
            (VectorSize::Tri, ScalarKind::Float, 4) => Some(F::Float32x3),
            (VectorSize::Quad, ScalarKind::Float, 4) => Some(F::Float32x4),
            (VectorSize::Bi, ScalarKind::Sint, 4) => Some(F::Sint32x2),
            (VectorSize::Tri, ScalarKind::Sint, 4) => Some(F::Sint32x3),
            (VectorSize::Quad, ScalarKind::Sint, 4) => Some(F::Sint32x4),
            (VectorSize::Bi, ScalarKind::Uint, 4) => Some(F::Uint32x2),
            (VectorSize::Tri, ScalarKind::Uint, 4) => Some(F::Uint32x3),
            (VectorSize::Quad, ScalarKind::Uint, 4) => Some(F::Uint32x4),
            _ => None,
        },
        _ => None,
    }
}

/// Bind point of a resource variable (`@group(g) @binding(b)`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniformLocation {
    pub group: u32,
    pub binding: u32,
}

/// A resource variable visible to a program
#[derive(Debug, Clone, PartialEq)]
pub struct UniformBinding {
    pub name: String,
    pub location: UniformLocation,
    /// Stages that declare this binding
    pub visibility: wgpu::ShaderStages,
    pub(crate) space: naga::AddressSpace,
}

/// Resource variables of a module (uniforms, storage, textures, samplers)
pub(crate) fn resource_bindings(
    module: &naga::Module,
    visibility: wgpu::ShaderStages,
) -> Vec<UniformBinding> {
    let mut out: Vec<UniformBinding> = module
        .global_variables
        .iter()
        .filter_map(|(_, var)| {
            let binding = var.binding.as_ref()?;
            Some(UniformBinding {
                name: var.name.clone().unwrap_or_default(),
                location: UniformLocation {
                    group: binding.group,
                    binding: binding.binding,
                },
                visibility,
                space: var.space,
            })
        })
        .collect();
    out.sort_by_key(|u| u.location);
    out
}

/// A vertex shader input with its buffer format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexAttribute {
    pub name: String,
    pub location: u32,
    pub format: wgpu::VertexFormat,
}

/// Look up attribute locations by name
///
/// Names the vertex shader does not declare map to `None`.
pub fn get_attrib_locations<S: AsRef<str>>(
    program: &Program,
    names: &[S],
) -> HashMap<String, Option<u32>> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            (name.to_string(), program.attribute_location(name))
        })
        .collect()
}

/// Look up uniform (resource binding) locations by name
///
/// Names neither stage declares map to `None`.
pub fn get_uniform_locations<S: AsRef<str>>(
    program: &Program,
    names: &[S],
) -> HashMap<String, Option<UniformLocation>> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            (name.to_string(), program.uniform_location(name))
        })
        .collect()
}
