//! Traits for mesh types.

/// Element counts reported for a mesh before and after cleanup.
pub trait MeshTopology {
    /// Get the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Get the number of faces (triangles).
    fn face_count(&self) -> usize;

    /// Check if the mesh has no faces.
    fn is_empty(&self) -> bool {
        self.face_count() == 0
    }
}
