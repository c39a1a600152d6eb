//! Boundary junction detection.
//!
//! A vertex where more than two boundary edges meet joins several boundary
//! loops, e.g. two surface sheets touching at a single point. Every face
//! around such a vertex is removed.

use hashbrown::{HashMap, HashSet};
use mesh_types::{Edge, Face, face_edges};
use tracing::debug;

/// Count boundary edges incident to each vertex.
///
/// An edge is a boundary edge when exactly one face uses it. Vertices with
/// no boundary edges are absent from the map.
///
/// # Example
///
/// ```
/// use mesh_repair::boundary_degrees;
///
/// let degrees = boundary_degrees(&[[0, 1, 2]]);
/// assert_eq!(degrees[&0], 2);
/// ```
#[must_use]
pub fn boundary_degrees(faces: &[Face]) -> HashMap<u32, usize> {
    let mut edge_uses: HashMap<Edge, usize> = HashMap::with_capacity(faces.len() * 2);
    for &face in faces {
        for edge in face_edges(face) {
            *edge_uses.entry(edge).or_insert(0) += 1;
        }
    }

    let mut degrees: HashMap<u32, usize> = HashMap::new();
    for (edge, _) in edge_uses.iter().filter(|&(_, &uses)| uses == 1) {
        *degrees.entry(edge.v0).or_insert(0) += 1;
        *degrees.entry(edge.v1).or_insert(0) += 1;
    }
    degrees
}

/// Find vertices with more than two incident boundary edges, sorted.
#[must_use]
pub fn find_junction_vertices(faces: &[Face]) -> Vec<u32> {
    let mut junctions: Vec<u32> = boundary_degrees(faces)
        .into_iter()
        .filter(|&(_, degree)| degree > 2)
        .map(|(v, _)| v)
        .collect();
    junctions.sort_unstable();
    junctions
}

/// Remove every face that touches a boundary junction vertex.
///
/// This is a single pass: removing faces can create new junctions, which are
/// left in place.
///
/// # Example
///
/// ```
/// use mesh_repair::remove_junction_faces;
///
/// // Two triangles touching at vertex 0 only.
/// let faces = remove_junction_faces(&[[0, 1, 2], [0, 3, 4]]);
/// assert!(faces.is_empty());
/// ```
#[must_use]
pub fn remove_junction_faces(faces: &[Face]) -> Vec<Face> {
    let junctions: HashSet<u32> = find_junction_vertices(faces).into_iter().collect();
    if junctions.is_empty() {
        return faces.to_vec();
    }

    let kept = drop_faces_touching(faces, &junctions);
    debug!(
        junctions = junctions.len(),
        dropped = faces.len() - kept.len(),
        "Removed faces at boundary junctions"
    );
    kept
}

/// Keep faces that reference none of `vertices`, preserving order.
pub(crate) fn drop_faces_touching(faces: &[Face], vertices: &HashSet<u32>) -> Vec<Face> {
    faces
        .iter()
        .filter(|face| !face.iter().any(|v| vertices.contains(v)))
        .copied()
        .collect()
}
