//! Torus mesh types
//!
//! Output buffers, generation parameters and the opt-in validation error.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Smallest segment count that still closes into a ring.
pub const MIN_SEGMENTS: u32 = 3;

/// Largest vertex count addressable by u16 indices.
pub const MAX_VERTICES: u64 = u16::MAX as u64 + 1;

/// Generated torus mesh (unpacked f32 format)
///
/// Three parallel buffers that always describe the same vertex count.
/// Vertex order is major ring outer, minor ring inner; see [`super::vertex_index`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TorusMesh {
    /// Triangle indices, six per quad (u16 for GPU compatibility)
    pub indices: Vec<u16>,
    /// Vertex positions as [x, y, z]
    pub positions: Vec<[f32; 3]>,
    /// Unit normals pointing away from the ring center, as [x, y, z]
    pub normals: Vec<[f32; 3]>,
}

impl TorusMesh {
    /// Create an empty mesh with room for `vertex_count` vertices and their quads
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            indices: Vec::with_capacity(6 * vertex_count),
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
        }
    }

    /// Append a vertex, rounding the double-precision inputs to f32
    pub(super) fn add_vertex(&mut self, position: DVec3, normal: DVec3) {
        let position = position.as_vec3();
        let normal = normal.as_vec3();
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
    }

    /// Append a quad as two triangles sharing the `v10`-`v01` diagonal
    ///
    /// Emitted order is `[v00, v10, v01, v11, v01, v10]`.
    pub(super) fn add_quad(&mut self, v00: u16, v10: u16, v01: u16, v11: u16) {
        self.indices.extend_from_slice(&[v00, v10, v01, v11, v01, v10]);
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positions as a flat `[x0, y0, z0, x1, ...]` slice
    pub fn flat_positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normals as a flat `[x0, y0, z0, x1, ...]` slice
    pub fn flat_normals(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }
}

/// Torus generation parameters
///
/// Serializable so it can live in the `[mesh]` section of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorusParams {
    /// Distance from torus center to tube center (default: 1.0)
    #[serde(default = "default_major_radius")]
    pub major_radius: f64,
    /// Tube radius (default: 0.4)
    #[serde(default = "default_minor_radius")]
    pub minor_radius: f64,
    /// Segments around the major ring (default: 48)
    #[serde(default = "default_major_segments")]
    pub major_segments: u32,
    /// Segments around the tube (default: 24)
    #[serde(default = "default_minor_segments")]
    pub minor_segments: u32,
}

fn default_major_radius() -> f64 {
    1.0
}
fn default_minor_radius() -> f64 {
    0.4
}
fn default_major_segments() -> u32 {
    48
}
fn default_minor_segments() -> u32 {
    24
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            major_radius: default_major_radius(),
            minor_radius: default_minor_radius(),
            major_segments: default_major_segments(),
            minor_segments: default_minor_segments(),
        }
    }
}

impl TorusParams {
    pub fn new(major_radius: f64, minor_radius: f64, major_segments: u32, minor_segments: u32) -> Self {
        Self {
            major_radius,
            minor_radius,
            major_segments,
            minor_segments,
        }
    }

    /// Number of vertices this torus will have
    pub fn vertex_count(&self) -> u64 {
        self.major_segments as u64 * self.minor_segments as u64
    }

    /// Check that the parameters describe a closed, indexable surface
    ///
    /// [`super::generate_torus`] never calls this; degenerate input there produces
    /// degenerate output (NaN normals for a zero tube radius, wrapped indices past
    /// 65536 vertices).
    pub fn validate(&self) -> Result<(), TorusError> {
        check_radius("major_radius", self.major_radius)?;
        check_radius("minor_radius", self.minor_radius)?;
        check_segments("major_segments", self.major_segments)?;
        check_segments("minor_segments", self.minor_segments)?;

        let vertices = self.vertex_count();
        if vertices > MAX_VERTICES {
            return Err(TorusError::TooManyVertices { vertices });
        }

        Ok(())
    }

    /// Generate the mesh without validation
    pub fn build(&self) -> TorusMesh {
        super::generate_torus(
            self.major_radius,
            self.minor_radius,
            self.major_segments,
            self.minor_segments,
        )
    }

    /// Validate, then generate the mesh
    pub fn build_checked(&self) -> Result<TorusMesh, TorusError> {
        self.validate()?;
        Ok(self.build())
    }
}

fn check_radius(name: &'static str, value: f64) -> Result<(), TorusError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TorusError::InvalidRadius { name, value })
    }
}

fn check_segments(name: &'static str, value: u32) -> Result<(), TorusError> {
    if value < MIN_SEGMENTS {
        Err(TorusError::TooFewSegments { name, value })
    } else {
        Ok(())
    }
}

/// Rejected torus parameters (only produced by [`TorusParams::validate`])
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TorusError {
    /// Radius is zero, negative, NaN or infinite
    #[error("{name} must be a finite value > 0.0 (got {value})")]
    InvalidRadius { name: &'static str, value: f64 },

    /// Too few segments to close the ring
    #[error("{name} must be at least {min} (got {value})", min = MIN_SEGMENTS)]
    TooFewSegments { name: &'static str, value: u32 },

    /// Vertex count does not fit u16 indices
    #[error("torus has {vertices} vertices, u16 indices address at most 65536")]
    TooManyVertices { vertices: u64 },
}
