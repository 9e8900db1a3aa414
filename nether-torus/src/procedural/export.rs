//! Mesh export (Wavefront OBJ and flat-array JSON)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use super::types::TorusMesh;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Wavefront OBJ with `v`, `vn` and `f a//a` faces
    #[default]
    Obj,
    /// `{ "indices", "positions", "normals" }` with flat arrays
    Json,
}

impl ExportFormat {
    /// File extension (without the dot)
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Obj => "obj",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "obj" => Ok(ExportFormat::Obj),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format '{}' (expected obj or json)", other)),
        }
    }
}

/// Write a mesh as Wavefront OBJ
///
/// Faces keep the generator's triangle order and winding. OBJ indices are
/// 1-based, and each face corner references the same position and normal.
pub fn write_obj<W: Write>(mesh: &TorusMesh, mut writer: W) -> io::Result<()> {
    writeln!(writer, "# nether-torus")?;
    writeln!(
        writer,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;

    for [x, y, z] in &mesh.positions {
        writeln!(writer, "v {} {} {}", x, y, z)?;
    }
    for [x, y, z] in &mesh.normals {
        writeln!(writer, "vn {} {} {}", x, y, z)?;
    }

    for tri in mesh.indices.chunks_exact(3) {
        let a = tri[0] as u32 + 1;
        let b = tri[1] as u32 + 1;
        let c = tri[2] as u32 + 1;
        writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }

    writer.flush()
}

#[derive(Serialize)]
struct FlatMesh<'a> {
    indices: &'a [u16],
    positions: &'a [f32],
    normals: &'a [f32],
}

/// Write a mesh as JSON with flat `indices`, `positions` and `normals` arrays
pub fn write_json<W: Write>(mesh: &TorusMesh, mut writer: W) -> io::Result<()> {
    let flat = FlatMesh {
        indices: &mesh.indices,
        positions: mesh.flat_positions(),
        normals: mesh.flat_normals(),
    };
    serde_json::to_writer(&mut writer, &flat).map_err(io::Error::other)?;
    writeln!(writer)?;
    writer.flush()
}

/// Write a mesh in the given format
pub fn write_mesh<W: Write>(mesh: &TorusMesh, format: ExportFormat, writer: W) -> io::Result<()> {
    match format {
        ExportFormat::Obj => write_obj(mesh, writer),
        ExportFormat::Json => write_json(mesh, writer),
    }
}
