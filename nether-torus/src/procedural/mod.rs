//! Procedural torus generation
//!
//! The torus is fully unwrapped: `major_segments * minor_segments` vertices with
//! no duplicated seam, closed by wrapping the ring indices when emitting quads.

mod export;
mod torus;
mod types;


pub use export::{ExportFormat, write_json, write_mesh, write_obj};
pub use torus::{generate_torus, ring_center, vertex_index};
pub use types::{MAX_VERTICES, MIN_SEGMENTS, TorusError, TorusMesh, TorusParams};
