//! Program linking and pipeline creation
//!
//! A [`Program`] is a vertex + fragment shader pair whose interfaces have been
//! checked against each other. It owns the reflected attribute and uniform
//! tables and can build a wgpu render pipeline on demand.

use super::error::ProgramLinkError;
use super::reflect::{
    UniformBinding, UniformLocation, VertexAttribute, entry_inputs, entry_outputs,
    resource_bindings, vertex_format,
};
use super::shader::{Shader, ShaderStage};

/// Render target formats for [`Program::create_pipeline`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineTargets {
    pub color_format: wgpu::TextureFormat,
    /// Depth buffer format, `None` to render without depth testing
    pub depth_format: Option<wgpu::TextureFormat>,
}

impl Default for PipelineTargets {
    fn default() -> Self {
        Self {
            color_format: wgpu::TextureFormat::Rgba8UnormSrgb,
            depth_format: Some(wgpu::TextureFormat::Depth24Plus),
        }
    }
}

/// Linked vertex + fragment shader pair
#[derive(Debug, Clone)]
pub struct Program {
    vertex: Shader,
    fragment: Shader,
    /// Vertex inputs, sorted by location
    attributes: Vec<VertexAttribute>,
    /// Resource bindings from both stages, sorted by location
    uniforms: Vec<UniformBinding>,
}

/// Link a vertex and a fragment shader into a program
///
/// Checks performed:
/// - Each shader was compiled for the right stage
/// - Every vertex input has a type usable as a vertex buffer attribute
/// - Every fragment input location is written by the vertex shader with the same type
/// - A bind point used by both stages names the same variable in the same address space
///
/// All problems are reported together in [`ProgramLinkError::log`].
pub fn link_program(vertex: Shader, fragment: Shader) -> Result<Program, ProgramLinkError> {
    let mut problems = Vec::new();

    if vertex.stage() != ShaderStage::Vertex {
        problems.push(format!("expected a vertex shader, got {}", vertex.stage()));
    }
    if fragment.stage() != ShaderStage::Fragment {
        problems.push(format!("expected a fragment shader, got {}", fragment.stage()));
    }
    if !problems.is_empty() {
        return Err(ProgramLinkError {
            log: problems.join("\n"),
        });
    }

    let (Some(vs_entry), Some(fs_entry)) = (vertex.naga_entry_point(), fragment.naga_entry_point())
    else {
        return Err(ProgramLinkError {
            log: "shader entry point missing from compiled module".to_string(),
        });
    };

    // Vertex inputs become buffer attributes
    let mut attributes = Vec::new();
    for input in entry_inputs(vertex.module(), vs_entry) {
        match vertex_format(&input.inner) {
            Some(format) => attributes.push(VertexAttribute {
                name: input.name,
                location: input.location,
                format,
            }),
            None => problems.push(format!(
                "vertex input '{}' at location {} has no vertex buffer format ({:?})",
                input.name, input.location, input.inner
            )),
        }
    }

    // Interstage interface
    let outputs = entry_outputs(vertex.module(), vs_entry);
    for input in entry_inputs(fragment.module(), fs_entry) {
        match outputs.iter().find(|o| o.location == input.location) {
            None => problems.push(format!(
                "fragment input '{}' at location {} is not written by the vertex shader",
                input.name, input.location
            )),
            Some(output) if output.inner != input.inner => problems.push(format!(
                "type mismatch at location {}: vertex writes {:?}, fragment reads {:?}",
                input.location, output.inner, input.inner
            )),
            Some(_) => {}
        }
    }

    // Resource bindings shared across stages
    let mut uniforms = resource_bindings(vertex.module(), vertex.stage().to_wgpu());
    for binding in resource_bindings(fragment.module(), fragment.stage().to_wgpu()) {
        match uniforms.iter_mut().find(|u| u.location == binding.location) {
            None => uniforms.push(binding),
            Some(existing) if existing.name == binding.name && existing.space == binding.space => {
                existing.visibility |= binding.visibility;
            }
            Some(existing) => problems.push(format!(
                "binding conflict at @group({}) @binding({}): vertex declares '{}' ({:?}), fragment declares '{}' ({:?})",
                binding.location.group,
                binding.location.binding,
                existing.name,
                existing.space,
                binding.name,
                binding.space
            )),
        }
    }
    uniforms.sort_by_key(|u| u.location);

    if !problems.is_empty() {
        return Err(ProgramLinkError {
            log: problems.join("\n"),
        });
    }

    tracing::debug!(
        "Linked program: {} attributes, {} bindings",
        attributes.len(),
        uniforms.len()
    );

    Ok(Program {
        vertex,
        fragment,
        attributes,
        uniforms,
    })
}

impl Program {
    pub fn vertex(&self) -> &Shader {
        &self.vertex
    }

    pub fn fragment(&self) -> &Shader {
        &self.fragment
    }

    /// Vertex attributes in location order
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Resource bindings in (group, binding) order
    pub fn uniforms(&self) -> &[UniformBinding] {
        &self.uniforms
    }

    /// Location of a vertex attribute, `None` if the vertex shader has no such input
    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.location)
    }

    /// Bind point of a resource variable, `None` if neither stage declares it
    pub fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        self.uniforms
            .iter()
            .find(|u| u.name == name)
            .map(|u| u.location)
    }

    /// Name -> location table for the given attribute names
    pub fn attribute_locations<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> hashbrown::HashMap<String, Option<u32>> {
        super::reflect::get_attrib_locations(self, names)
    }

    /// Name -> bind point table for the given uniform names
    pub fn uniform_locations<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> hashbrown::HashMap<String, Option<UniformLocation>> {
        super::reflect::get_uniform_locations(self, names)
    }

    /// One wgpu attribute per vertex buffer slot, in location order
    ///
    /// Each attribute lives in its own tightly packed buffer at offset 0, so
    /// positions and normals can be bound as separate buffers.
    pub fn vertex_buffer_attributes(&self) -> Vec<wgpu::VertexAttribute> {
        self.attributes
            .iter()
            .map(|a| wgpu::VertexAttribute {
                format: a.format,
                offset: 0,
                shader_location: a.location,
            })
            .collect()
    }

    /// Create a triangle-list render pipeline for this program
    ///
    /// Front faces are counter-clockwise and back faces are culled, matching the
    /// torus index winding. The layout is derived from the shaders.
    pub fn create_pipeline(
        &self,
        device: &wgpu::Device,
        targets: &PipelineTargets,
    ) -> wgpu::RenderPipeline {
        let vertex_module = self.vertex.create_module(device, "Torus Vertex Shader");
        let fragment_module = self.fragment.create_module(device, "Torus Fragment Shader");

        let attributes = self.vertex_buffer_attributes();
        let buffers: Vec<wgpu::VertexBufferLayout> = attributes
            .iter()
            .map(|attribute| wgpu::VertexBufferLayout {
                array_stride: attribute.format.size(),
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: std::slice::from_ref(attribute),
            })
            .collect();

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Torus Pipeline"),
            layout: None,
            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some(self.vertex.entry_point()),
                buffers: &buffers,
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Some(self.fragment.entry_point()),
                targets: &[Some(wgpu::ColorTargetState {
                    format: targets.color_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: targets.depth_format.map(|format| wgpu::DepthStencilState {
                format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }
}
