//! Index compaction.

use mesh_types::{Face, IndexedMesh, Vertex};

use crate::error::{RepairError, RepairResult};

/// Build a mesh holding only the vertices referenced by `faces`.
///
/// New indices are handed out in the order vertices are first met while
/// scanning faces corner by corner, so the result does not depend on any
/// hashing order. Faces keep their order and winding.
///
/// # Errors
///
/// Returns [`RepairError::InvalidIndex`] if a face references a vertex
/// outside `vertices`.
///
/// # Example
///
/// ```
/// use mesh_repair::compact_mesh;
/// use mesh_types::Vertex;
///
/// let vertices: Vec<Vertex> = (0..5).map(|i| Vertex::from_coords(f64::from(i), 0.0, 0.0)).collect();
/// let mesh = compact_mesh(&vertices, &[[4, 2, 3]]).unwrap();
///
/// assert_eq!(mesh.faces, vec![[0, 1, 2]]);
/// assert_eq!(mesh.vertices[0].coords(), [4.0, 0.0, 0.0]);
/// ```
pub fn compact_mesh(vertices: &[Vertex], faces: &[Face]) -> RepairResult<IndexedMesh> {
    let mut remap: Vec<Option<u32>> = vec![None; vertices.len()];
    let mut mesh = IndexedMesh::with_capacity(vertices.len().min(faces.len() * 3), faces.len());

    for (face_idx, face) in faces.iter().enumerate() {
        let mut compacted = [0_u32; 3];
        for (slot, &v) in compacted.iter_mut().zip(face) {
            let entry = remap
                .get_mut(v as usize)
                .ok_or(RepairError::InvalidIndex {
                    face: face_idx,
                    index: v,
                    vertex_count: vertices.len(),
                })?;

            *slot = match *entry {
                Some(new_index) => new_index,
                None => {
                    // Bounded by the number of distinct u32 indices seen.
                    #[allow(clippy::cast_possible_truncation)]
                    let new_index = mesh.vertices.len() as u32;
                    mesh.vertices.push(vertices[v as usize]);
                    *entry = Some(new_index);
                    new_index
                }
            };
        }
        mesh.faces.push(compacted);
    }

    Ok(mesh)
}
