//! Topological cleanup for indexed triangle meshes.
//!
//! Surfaces extracted from volume data often carry local defects that break
//! downstream geometry processing. This crate removes the offending faces
//! until the mesh has:
//! - Consistent winding: no directed edge is used by two faces
//! - Clean boundaries: no vertex joins more than two boundary edges
//! - No hourglass vertices: the faces around each vertex form one fan
//!
//! Nothing is ever flipped, moved or filled in; faces that cannot be made
//! consistent are discarded and counted.
//!
//! # Pipeline
//!
//! [`repair_mesh`] runs the stages in order, each also available on its own:
//! 1. [`orient_faces`] propagates the first face's winding breadth-first
//! 2. [`remove_junction_faces`] then [`remove_hourglass_faces`]
//! 3. [`compact_mesh`] drops unreferenced vertices
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, Vertex};
//! use mesh_repair::{validate_topology, repair_mesh, RepairParams};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//! mesh.faces.push([1, 2, 3]); // walks edge 1->2 like the first face
//!
//! let report = validate_topology(&mesh);
//! assert!(!report.is_clean());
//!
//! let outcome = repair_mesh(&mesh, &RepairParams::default()).unwrap();
//! assert_eq!(outcome.mesh.faces.len(), 1);
//! assert!(validate_topology(&outcome.mesh).is_clean());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
mod boundary;
mod compact;
mod error;
mod hourglass;
mod orient;
mod params;
mod repair;
mod validate;

pub use adjacency::MeshAdjacency;
pub use boundary::{boundary_degrees, find_junction_vertices, remove_junction_faces};
pub use compact::compact_mesh;
pub use error::{RepairError, RepairResult};
pub use hourglass::{count_components, find_hourglass_vertices, remove_hourglass_faces};
pub use orient::{Orientation, orient_faces};
pub use params::{CleanupMode, RepairParams};
pub use repair::{RepairOutcome, RepairSummary, repair_mesh};
pub use validate::{TopologyReport, validate_topology};
