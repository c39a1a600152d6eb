//! Winding propagation across face neighbours.
//!
//! The first face fixes the orientation of everything reachable from it.
//! Faces are visited breadth-first; a face is kept only if none of its
//! directed half-edges has been claimed by an earlier kept face, so two kept
//! faces never traverse a shared edge in the same direction.

use std::collections::VecDeque;

use hashbrown::HashSet;
use mesh_types::{Face, HalfEdge, half_edges};
use tracing::debug;

use crate::adjacency::MeshAdjacency;

/// Faces that survived orientation, with counts of the ones that did not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Orientation {
    /// Kept faces in traversal order.
    pub faces: Vec<Face>,
    /// Faces not connected to the first face through manifold edges.
    pub unreachable: usize,
    /// Faces dropped because one of their half-edges was already claimed.
    pub conflicting: usize,
}

impl Orientation {
    /// Total number of faces dropped.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.unreachable + self.conflicting
    }
}

/// Propagate a consistent winding from the first face.
///
/// Traversal is FIFO over [`MeshAdjacency`] neighbours starting at face 0;
/// the output lists kept faces in the order they were visited. No face is
/// ever flipped.
///
/// # Example
///
/// ```
/// use mesh_repair::orient_faces;
///
/// // The second face walks edge (1, 2) in the same direction as the first.
/// let result = orient_faces(&[[0, 1, 2], [1, 2, 3]]);
/// assert_eq!(result.faces, vec![[0, 1, 2]]);
/// assert_eq!(result.conflicting, 1);
/// ```
#[must_use]
pub fn orient_faces(faces: &[Face]) -> Orientation {
    if faces.is_empty() {
        return Orientation::default();
    }

    let adjacency = MeshAdjacency::build(faces);

    let mut queued = vec![false; faces.len()];
    let mut queue = VecDeque::from([0_usize]);
    queued[0] = true;

    let mut committed: HashSet<HalfEdge> = HashSet::with_capacity(faces.len() * 3);
    let mut kept = Vec::with_capacity(faces.len());
    let mut visited = 0;
    let mut conflicting = 0;

    while let Some(face_idx) = queue.pop_front() {
        visited += 1;

        let face = faces[face_idx];
        let edges = half_edges(face);
        if edges.iter().any(|he| committed.contains(he)) {
            conflicting += 1;
        } else {
            committed.extend(edges);
            kept.push(face);
        }

        // Neighbours of dropped faces are still explored.
        for &next in adjacency.neighbors(face_idx) {
            if !queued[next] {
                queued[next] = true;
                queue.push_back(next);
            }
        }
    }

    let unreachable = faces.len() - visited;
    debug!(
        kept = kept.len(),
        unreachable, conflicting, "Orientation propagated"
    );

    Orientation {
        faces: kept,
        unreachable,
        conflicting,
    }
}
