//! Indexed triangle mesh.

use crate::{MeshTopology, Vertex};

/// A triangle as three vertex indices; order encodes winding.
pub type Face = [u32; 3];

/// An indexed triangle mesh.
///
/// Stores vertices and faces separately, with faces referencing vertices by
/// index. Every face index is expected to be smaller than the vertex count;
/// [`IndexedMesh::first_invalid_index`] reports the first one that is not.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, MeshTopology, Vertex};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// assert!(mesh.first_invalid_index().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<Face>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, MeshTopology, Vertex};
    ///
    /// let vertices = vec![
    ///     Vertex::from_coords(0.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 0.0, 0.0),
    ///     Vertex::from_coords(0.0, 1.0, 0.0),
    /// ];
    /// let mesh = IndexedMesh::from_parts(vertices, vec![[0, 1, 2]]);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Create a mesh from raw coordinate and index data.
    ///
    /// * `positions` - Flat array `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `indices` - Flat array `[a0, b0, c0, a1, b1, c1, ...]`
    ///
    /// Returns an empty mesh if either length is not divisible by 3.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, MeshTopology};
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let mesh = IndexedMesh::from_raw(&positions, &[0, 1, 2]);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Vertex::from_coords(c[0], c[1], c[2]))
            .collect();

        let faces = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Self { vertices, faces }
    }

    /// Find the first face index that does not reference a vertex.
    ///
    /// Returns `(face_position, index)` for the first offending corner in
    /// face order, or `None` if every index is in range.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, Vertex};
    ///
    /// let mut mesh = IndexedMesh::new();
    /// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
    /// mesh.faces.push([0, 0, 4]);
    /// assert_eq!(mesh.first_invalid_index(), Some((0, 4)));
    /// ```
    #[must_use]
    pub fn first_invalid_index(&self) -> Option<(usize, u32)> {
        let vertex_count = self.vertices.len();
        self.faces.iter().enumerate().find_map(|(face_idx, face)| {
            face.iter()
                .find(|&&v| v as usize >= vertex_count)
                .map(|&v| (face_idx, v))
        })
    }

    /// Count vertices referenced by at least one face.
    #[must_use]
    pub fn referenced_vertex_count(&self) -> usize {
        let mut seen = vec![false; self.vertices.len()];
        let mut count = 0;
        for &v in self.faces.iter().flatten() {
            if let Some(slot) = seen.get_mut(v as usize) {
                if !*slot {
                    *slot = true;
                    count += 1;
                }
            }
        }
        count
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> IndexedMesh {
        let positions = [
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            1.0, 1.0, 0.0, //
            0.0, 1.0, 0.0,
        ];
        IndexedMesh::from_raw(&positions, &[0, 1, 2, 0, 2, 3])
    }

    #[test]
    fn mesh_is_empty() {
        let mut mesh = IndexedMesh::new();
        assert!(mesh.is_empty());

        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        assert!(mesh.is_empty()); // no faces

        mesh.faces.push([0, 0, 0]);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn mesh_from_raw() {
        let mesh = unit_square();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.faces[1], [0, 2, 3]);
    }

    #[test]
    fn mesh_from_raw_rejects_ragged_input() {
        let mesh = IndexedMesh::from_raw(&[0.0, 1.0], &[0, 1, 2]);
        assert_eq!(mesh, IndexedMesh::new());
    }

    #[test]
    fn invalid_index_reports_first_offender() {
        let mut mesh = unit_square();
        assert_eq!(mesh.first_invalid_index(), None);

        mesh.faces.push([0, 9, 12]);
        mesh.faces.push([7, 0, 1]);
        assert_eq!(mesh.first_invalid_index(), Some((2, 9)));
    }

    #[test]
    fn referenced_vertices_ignore_strays() {
        let mut mesh = unit_square();
        mesh.vertices.push(Vertex::from_coords(5.0, 5.0, 5.0));
        assert_eq!(mesh.referenced_vertex_count(), 4);

        mesh.faces.clear();
        assert_eq!(mesh.referenced_vertex_count(), 0);
    }
}
