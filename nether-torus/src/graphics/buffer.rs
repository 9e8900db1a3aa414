//! Static vertex and index buffers

use wgpu::util::DeviceExt;

use crate::procedural::TorusMesh;

/// Create a static vertex buffer from f32 data
pub fn create_vertex_buffer(device: &wgpu::Device, label: &str, data: &[f32]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(data),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

/// Create a static index buffer from u16 data
///
/// Bind with [`wgpu::IndexFormat::Uint16`].
pub fn create_index_buffer(device: &wgpu::Device, label: &str, data: &[u16]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(data),
        usage: wgpu::BufferUsages::INDEX,
    })
}

/// GPU copy of a torus mesh
///
/// Positions and normals are separate buffers (slots 0 and 1 of the torus
/// pipeline), indices are u16.
pub struct MeshBuffers {
    pub positions: wgpu::Buffer,
    pub normals: wgpu::Buffer,
    pub indices: wgpu::Buffer,
    /// Number of indices to draw
    pub index_count: u32,
}

impl MeshBuffers {
    /// Upload all three mesh buffers
    pub fn upload(device: &wgpu::Device, mesh: &TorusMesh) -> Self {
        let positions = create_vertex_buffer(device, "Torus Positions", mesh.flat_positions());
        let normals = create_vertex_buffer(device, "Torus Normals", mesh.flat_normals());
        let indices = create_index_buffer(device, "Torus Indices", &mesh.indices);

        tracing::debug!(
            "Uploaded torus: {} vertices, {} indices",
            mesh.vertex_count(),
            mesh.indices.len()
        );

        Self {
            positions,
            normals,
            indices,
            index_count: mesh.indices.len() as u32,
        }
    }

    /// Total bytes across the three buffers
    pub fn byte_size(&self) -> u64 {
        self.positions.size() + self.normals.size() + self.indices.size()
    }
}
