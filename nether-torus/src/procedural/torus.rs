//! Torus generator

use glam::{DVec3, Vec3};
use std::f64::consts::TAU;
use tracing::debug;

use super::types::TorusMesh;

/// Linear index of the vertex at minor index `mii` on major ring `mai`
///
/// Both vertex emission and quad emission go through this mapping. Values past
/// `u16::MAX` wrap.
#[inline]
pub fn vertex_index(mii: u32, mai: u32, minor_segments: u32) -> u16 {
    mai.wrapping_mul(minor_segments).wrapping_add(mii) as u16
}

/// Angle of major ring `mai`. The major ring sweeps in the negative direction.
#[inline]
fn major_angle(mai: u32, major_segments: u32) -> f64 {
    let step = TAU / major_segments as f64;
    -(mai as f64) * step
}

/// Tube center for the given major angle (on the XZ plane)
#[inline]
fn center_at(major_radius: f64, ang_ma: f64) -> DVec3 {
    DVec3::new(major_radius * ang_ma.cos(), 0.0, major_radius * ang_ma.sin())
}

/// Center of the tube cross-section on major ring `mai`
///
/// Every vertex of that ring sits `minor_radius` away from this point.
pub fn ring_center(major_radius: f64, major_segments: u32, mai: u32) -> Vec3 {
    center_at(major_radius, major_angle(mai, major_segments)).as_vec3()
}

/// Generate an unwrapped torus around the Y axis
///
/// # Arguments
/// * `major_radius` - Distance from torus center to tube center
/// * `minor_radius` - Tube radius
/// * `major_segments` - Segments around the major ring
/// * `minor_segments` - Segments around the tube
///
/// # Returns
/// Mesh with `major_segments * minor_segments` vertices and
/// `6 * major_segments * minor_segments` indices. Vertices are not duplicated
/// at the seams; the last ring and the last tube step connect back to index 0.
///
/// No validation is done here. A zero `minor_radius` yields NaN normals,
/// zero segments yield an empty mesh, and more than 65536 vertices wrap the
/// u16 indices. Use [`super::TorusParams::build_checked`] to reject such input.
pub fn generate_torus(
    major_radius: f64,
    minor_radius: f64,
    major_segments: u32,
    minor_segments: u32,
) -> TorusMesh {
    let step_minor = TAU / minor_segments as f64;

    let vertex_count = major_segments as usize * minor_segments as usize;
    let mut mesh = TorusMesh::with_capacity(vertex_count);

    // Vertices: major ring outer, tube inner
    for mai in 0..major_segments {
        let ang_ma = major_angle(mai, major_segments);
        let (sin_ma, cos_ma) = ang_ma.sin_cos();
        let center = center_at(major_radius, ang_ma);

        for mii in 0..minor_segments {
            let ang_mi = mii as f64 * step_minor;
            let minor_x = major_radius + minor_radius * ang_mi.cos();
            let position = DVec3::new(
                minor_x * cos_ma,
                minor_radius * ang_mi.sin(),
                minor_x * sin_ma,
            );

            let dir = position - center;
            let normal = dir / dir.length();

            mesh.add_vertex(position, normal);
        }
    }

    // Quads: wrap the last ring and the last tube step back to 0
    for mai in 0..major_segments {
        let maj = if mai + 1 == major_segments { 0 } else { mai + 1 };
        for mii in 0..minor_segments {
            let mij = if mii + 1 == minor_segments { 0 } else { mii + 1 };
            mesh.add_quad(
                vertex_index(mii, mai, minor_segments),
                vertex_index(mii, maj, minor_segments),
                vertex_index(mij, mai, minor_segments),
                vertex_index(mij, maj, minor_segments),
            );
        }
    }

    debug!(
        "Generated torus: {} vertices, {} indices ({}x{} segments)",
        mesh.vertex_count(),
        mesh.indices.len(),
        major_segments,
        minor_segments
    );

    mesh
}
