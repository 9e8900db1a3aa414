//! Nether Torus: procedural torus meshes and wgpu resource helpers
//!
//! Two independent halves:
//!
//! - [`procedural`] builds an unwrapped torus (positions, normals, u16 indices)
//!   with a fixed vertex order and quad winding that downstream renderers rely on.
//! - [`graphics`] wraps the small amount of wgpu/naga plumbing needed to get that
//!   mesh on screen: static vertex/index buffers, WGSL compile + link checks,
//!   and attribute/uniform location reflection.
//!
//! # Usage
//!
//! ```
//! use nether_torus::procedural::generate_torus;
//!
//! let mesh = generate_torus(2.0, 1.0, 3, 3);
//! assert_eq!(mesh.vertex_count(), 9);
//! assert_eq!(mesh.indices.len(), 54);
//! assert_eq!(mesh.positions[0], [3.0, 0.0, 0.0]);
//! ```

pub mod config;
pub mod graphics;
pub mod procedural;

pub use procedural::{TorusError, TorusMesh, TorusParams, generate_torus};
