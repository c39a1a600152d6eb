//! Topology validation and health reporting.
//!
//! Checks the properties the cleanup pipeline establishes, without changing
//! the mesh.

use hashbrown::HashSet;
use mesh_types::{HalfEdge, IndexedMesh, half_edges};

use crate::adjacency::MeshAdjacency;
use crate::boundary::find_junction_vertices;
use crate::hourglass::find_hourglass_vertices;

/// Report of topology validation results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologyReport {
    /// Total number of vertices.
    pub vertex_count: usize,
    /// Total number of faces.
    pub face_count: usize,
    /// Number of distinct undirected edges.
    pub edge_count: usize,

    /// Number of boundary edges (edges with only one adjacent face).
    pub boundary_edge_count: usize,
    /// Number of non-manifold edges (edges with more than two adjacent faces).
    pub non_manifold_edge_count: usize,
    /// Number of directed half-edges already used by an earlier face.
    pub duplicate_half_edges: usize,

    /// Vertices with more than two incident boundary edges, sorted.
    pub junction_vertices: Vec<u32>,
    /// Vertices whose surrounding faces split into several fans, sorted.
    pub hourglass_vertices: Vec<u32>,
    /// Number of vertices no face references.
    pub unreferenced_vertices: usize,
    /// Number of face corners referencing a missing vertex.
    pub out_of_range_indices: usize,
}

impl TopologyReport {
    /// Check if the mesh is consistently oriented, free of junction and
    /// hourglass vertices, and densely indexed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicate_half_edges == 0
            && self.junction_vertices.is_empty()
            && self.hourglass_vertices.is_empty()
            && self.unreferenced_vertices == 0
            && self.out_of_range_indices == 0
    }

    /// Get a count of total issues found.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.duplicate_half_edges
            + self.junction_vertices.len()
            + self.hourglass_vertices.len()
            + self.unreferenced_vertices
            + self.out_of_range_indices
    }
}

impl std::fmt::Display for TopologyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Topology Report:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Faces: {}", self.face_count)?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(f, "  Boundary edges: {}", self.boundary_edge_count)?;
        writeln!(f, "  Non-manifold edges: {}", self.non_manifold_edge_count)?;
        write!(
            f,
            "  Status: {}",
            if self.is_clean() { "Clean" } else { "Needs repair" }
        )?;

        if !self.is_clean() {
            writeln!(f)?;
            write!(f, "  Issues:")?;
            if self.duplicate_half_edges > 0 {
                write!(f, "\n    Duplicate half-edges: {}", self.duplicate_half_edges)?;
            }
            if !self.junction_vertices.is_empty() {
                write!(
                    f,
                    "\n    Junction vertices: {}",
                    self.junction_vertices.len()
                )?;
            }
            if !self.hourglass_vertices.is_empty() {
                write!(
                    f,
                    "\n    Hourglass vertices: {}",
                    self.hourglass_vertices.len()
                )?;
            }
            if self.unreferenced_vertices > 0 {
                write!(
                    f,
                    "\n    Unreferenced vertices: {}",
                    self.unreferenced_vertices
                )?;
            }
            if self.out_of_range_indices > 0 {
                write!(
                    f,
                    "\n    Out-of-range indices: {}",
                    self.out_of_range_indices
                )?;
            }
        }

        Ok(())
    }
}

/// Validate mesh topology and return a report of any issues.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex};
/// use mesh_repair::validate_topology;
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// let report = validate_topology(&mesh);
/// assert_eq!(report.boundary_edge_count, 3);
/// assert!(report.is_clean());
/// ```
#[must_use]
pub fn validate_topology(mesh: &IndexedMesh) -> TopologyReport {
    let adjacency = MeshAdjacency::build(&mesh.faces);
    let vertex_count = mesh.vertices.len();

    let out_of_range_indices = mesh
        .faces
        .iter()
        .flatten()
        .filter(|&&v| v as usize >= vertex_count)
        .count();

    TopologyReport {
        vertex_count,
        face_count: mesh.faces.len(),
        edge_count: adjacency.edge_count(),
        boundary_edge_count: adjacency.boundary_edge_count(),
        non_manifold_edge_count: adjacency.non_manifold_edge_count(),
        duplicate_half_edges: count_duplicate_half_edges(mesh),
        junction_vertices: find_junction_vertices(&mesh.faces),
        hourglass_vertices: find_hourglass_vertices(&mesh.faces, false),
        unreferenced_vertices: vertex_count - mesh.referenced_vertex_count(),
        out_of_range_indices,
    }
}

fn count_duplicate_half_edges(mesh: &IndexedMesh) -> usize {
    let mut seen: HashSet<HalfEdge> = HashSet::with_capacity(mesh.faces.len() * 3);
    mesh.faces
        .iter()
        .flat_map(|&face| half_edges(face))
        .filter(|&he| !seen.insert(he))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::Vertex;

    fn mesh_with_faces(vertex_count: u32, faces: Vec<[u32; 3]>) -> IndexedMesh {
        let vertices = (0..vertex_count)
            .map(|i| Vertex::from_coords(f64::from(i), 0.0, f64::from(i % 2)))
            .collect();
        IndexedMesh::from_parts(vertices, faces)
    }

    #[test]
    fn tetrahedron_is_clean() {
        let mesh = mesh_with_faces(4, vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]]);
        let report = validate_topology(&mesh);

        assert!(report.is_clean());
        assert_eq!(report.edge_count, 6);
        assert_eq!(report.boundary_edge_count, 0);
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn empty_mesh_is_clean() {
        assert!(validate_topology(&IndexedMesh::new()).is_clean());
    }

    #[test]
    fn opposite_winding_is_reported() {
        let mesh = mesh_with_faces(4, vec![[0, 1, 2], [1, 2, 3]]);
        let report = validate_topology(&mesh);
        assert_eq!(report.duplicate_half_edges, 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn bowtie_is_reported() {
        let mesh = mesh_with_faces(5, vec![[0, 1, 2], [0, 3, 4]]);
        let report = validate_topology(&mesh);
        assert_eq!(report.junction_vertices, vec![0]);
        assert_eq!(report.hourglass_vertices, vec![0]);
        assert_eq!(report.issue_count(), 2);
    }

    #[test]
    fn stray_and_missing_vertices_are_reported() {
        let mesh = mesh_with_faces(5, vec![[0, 1, 2], [0, 2, 9]]);
        let report = validate_topology(&mesh);
        assert_eq!(report.unreferenced_vertices, 2);
        assert_eq!(report.out_of_range_indices, 1);
    }

    #[test]
    fn report_display() {
        let mesh = mesh_with_faces(4, vec![[0, 1, 2], [1, 2, 3]]);
        let display = validate_topology(&mesh).to_string();

        assert!(display.contains("Faces: 2"));
        assert!(display.contains("Needs repair"));
        assert!(display.contains("Duplicate half-edges: 1"));
    }
}
