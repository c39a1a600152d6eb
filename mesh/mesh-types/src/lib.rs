//! Core mesh types for topological mesh cleanup.
//!
//! This crate provides the foundational types shared by the I/O and repair
//! crates:
//!
//! - [`Vertex`] - A point in 3D space, identified by its position in the vertex list
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//! - [`Edge`] - An undirected edge, stored with the smaller index first
//! - [`HalfEdge`] - A directed edge induced by a face's winding
//!
//! # Winding
//!
//! A face `[a, b, c]` is an ordered triple. Its rotations `[b, c, a]` and
//! `[c, a, b]` describe the same oriented triangle; the reversed triple
//! `[a, c, b]` describes the opposite orientation. The face contributes the
//! half-edges `(a, b)`, `(b, c)` and `(c, a)`.
//!
//! Two faces sharing an undirected edge are consistently oriented iff they
//! traverse it in opposite directions.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Edge, IndexedMesh, MeshTopology, Vertex, half_edges};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert_eq!(half_edges([0, 1, 2])[2], (2, 0));
//! assert_eq!(Edge::new(2, 0), Edge::new(0, 2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod edge;
mod mesh;
mod traits;
mod vertex;

pub use edge::{Edge, HalfEdge, face_edges, half_edges, opposite_edge};
pub use mesh::{Face, IndexedMesh};
pub use traits::MeshTopology;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;
