//! Mesh adjacency data structures.
//!
//! Provides edge-to-face lookups and the face neighbour graph used for
//! orientation propagation.

use hashbrown::HashMap;
use mesh_types::{Edge, Face, face_edges};

/// Adjacency information for a list of triangles.
///
/// Two faces are neighbours when they share an undirected edge that no other
/// face uses. Edges used by a single face are boundary edges; edges used by
/// three or more faces are non-manifold and connect nothing.
///
/// Edges are kept in the order they are first met while scanning faces
/// `(a,b)`, `(b,c)`, `(c,a)` in input order. Neighbour lists are filled by
/// walking the shared edges in that order, so a face's neighbours are
/// ordered by when each shared edge first appeared anywhere in the input,
/// not by the face's own corner order.
#[derive(Debug, Clone)]
pub struct MeshAdjacency {
    /// Undirected edges in first-seen order, each with the faces using it.
    edges: Vec<(Edge, Vec<usize>)>,
    /// Position of each edge in `edges`.
    edge_index: HashMap<Edge, usize>,
    /// Neighbouring faces of each face.
    neighbors: Vec<Vec<usize>>,
}

impl MeshAdjacency {
    /// Build adjacency information from a list of faces.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_repair::MeshAdjacency;
    ///
    /// let faces = vec![[0, 1, 2], [1, 3, 2]];
    /// let adj = MeshAdjacency::build(&faces);
    ///
    /// assert_eq!(adj.boundary_edge_count(), 4);
    /// assert_eq!(adj.neighbors(0), &[1]);
    /// ```
    #[must_use]
    pub fn build(faces: &[Face]) -> Self {
        let mut edges: Vec<(Edge, Vec<usize>)> = Vec::with_capacity(faces.len() * 2);
        let mut edge_index: HashMap<Edge, usize> = HashMap::with_capacity(faces.len() * 2);

        for (face_idx, &face) in faces.iter().enumerate() {
            for edge in face_edges(face) {
                let slot = *edge_index.entry(edge).or_insert_with(|| {
                    edges.push((edge, Vec::with_capacity(2)));
                    edges.len() - 1
                });
                edges[slot].1.push(face_idx);
            }
        }

        let mut neighbors = vec![Vec::new(); faces.len()];
        for (_, users) in &edges {
            if let &[f0, f1] = users.as_slice() {
                if f0 != f1 {
                    neighbors[f0].push(f1);
                    neighbors[f1].push(f0);
                }
            }
        }

        Self {
            edges,
            edge_index,
            neighbors,
        }
    }

    /// Get the neighbouring faces of a face.
    ///
    /// Returns an empty slice for an unknown face.
    #[must_use]
    pub fn neighbors(&self, face: usize) -> &[usize] {
        self.neighbors.get(face).map_or(&[], Vec::as_slice)
    }

    /// Get faces adjacent to an edge, in either direction.
    ///
    /// Returns `None` if the edge doesn't exist in the mesh.
    #[must_use]
    pub fn faces_for_edge(&self, v0: u32, v1: u32) -> Option<&[usize]> {
        self.edge_index
            .get(&Edge::new(v0, v1))
            .map(|&slot| self.edges[slot].1.as_slice())
    }

    /// Iterate over all boundary edges (edges with exactly one adjacent face),
    /// in first-seen order.
    pub fn boundary_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges
            .iter()
            .filter(|(_, faces)| faces.len() == 1)
            .map(|&(edge, _)| edge)
    }

    /// Count the number of boundary edges.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.boundary_edges().count()
    }

    /// Iterate over all non-manifold edges (edges with more than two adjacent
    /// faces), in first-seen order.
    pub fn non_manifold_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges
            .iter()
            .filter(|(_, faces)| faces.len() > 2)
            .map(|&(edge, _)| edge)
    }

    /// Count the number of non-manifold edges.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.non_manifold_edges().count()
    }

    /// Check if every edge has at most two adjacent faces.
    #[must_use]
    pub fn is_manifold(&self) -> bool {
        self.edges.iter().all(|(_, faces)| faces.len() <= 2)
    }

    /// Check if the mesh is watertight (no boundary edges).
    #[must_use]
    pub fn is_watertight(&self) -> bool {
        self.edges.iter().all(|(_, faces)| faces.len() >= 2)
    }

    /// Get the total number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of faces the adjacency was built from.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.neighbors.len()
    }
}
