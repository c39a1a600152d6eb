//! Hourglass vertex detection.
//!
//! The faces around a manifold vertex form a single fan: their edges
//! opposite the vertex link up into one path or cycle. When those opposite
//! edges fall into several disconnected pieces, the surface pinches through
//! the vertex like an hourglass.

use hashbrown::{HashMap, HashSet};
use mesh_types::{Edge, Face, opposite_edge};
use rayon::prelude::*;
use tracing::debug;

use crate::boundary::drop_faces_touching;

/// Count connected components of the graph formed by `edges`.
///
/// Only vertices that appear in some edge are nodes, so an empty edge list
/// has zero components.
///
/// # Example
///
/// ```
/// use mesh_repair::count_components;
/// use mesh_types::Edge;
///
/// let edges = [Edge::new(1, 2), Edge::new(2, 3), Edge::new(7, 8)];
/// assert_eq!(count_components(&edges), 2);
/// assert_eq!(count_components(&[]), 0);
/// ```
#[must_use]
pub fn count_components(edges: &[Edge]) -> usize {
    let mut graph: HashMap<u32, Vec<u32>> = HashMap::with_capacity(edges.len() * 2);
    for edge in edges {
        graph.entry(edge.v0).or_default().push(edge.v1);
        graph.entry(edge.v1).or_default().push(edge.v0);
    }

    let mut visited: HashSet<u32> = HashSet::with_capacity(graph.len());
    let mut stack = Vec::new();
    let mut components = 0;

    for &start in graph.keys() {
        if !visited.insert(start) {
            continue;
        }
        components += 1;

        stack.push(start);
        while let Some(node) = stack.pop() {
            for &next in graph.get(&node).map_or(&[][..], Vec::as_slice) {
                if visited.insert(next) {
                    stack.push(next);
                }
            }
        }
    }

    components
}

/// Find vertices whose opposite edges form more than one component, sorted.
///
/// With `parallel` set, the per-vertex checks run on the rayon thread pool.
/// The result does not depend on it.
#[must_use]
pub fn find_hourglass_vertices(faces: &[Face], parallel: bool) -> Vec<u32> {
    let mut opposite: HashMap<u32, Vec<Edge>> = HashMap::new();
    for &face in faces {
        for (corner, &v) in face.iter().enumerate() {
            opposite
                .entry(v)
                .or_default()
                .push(opposite_edge(face, corner));
        }
    }

    let fans: Vec<(u32, Vec<Edge>)> = opposite.into_iter().collect();
    let is_hourglass = |(_, edges): &&(u32, Vec<Edge>)| count_components(edges) > 1;

    let mut hourglasses: Vec<u32> = if parallel {
        fans.par_iter()
            .filter(is_hourglass)
            .map(|&(v, _)| v)
            .collect()
    } else {
        fans.iter().filter(is_hourglass).map(|&(v, _)| v).collect()
    };
    hourglasses.sort_unstable();
    hourglasses
}

/// Remove every face that touches an hourglass vertex.
///
/// Like [`remove_junction_faces`](crate::remove_junction_faces) this is a
/// single pass.
///
/// # Example
///
/// ```
/// use mesh_repair::remove_hourglass_faces;
///
/// // Two fans meeting only at vertex 0.
/// let faces = vec![[0, 1, 2], [0, 2, 3], [0, 4, 5], [0, 5, 6]];
/// assert!(remove_hourglass_faces(&faces, false).is_empty());
/// ```
#[must_use]
pub fn remove_hourglass_faces(faces: &[Face], parallel: bool) -> Vec<Face> {
    let hourglasses: HashSet<u32> = find_hourglass_vertices(faces, parallel)
        .into_iter()
        .collect();
    if hourglasses.is_empty() {
        return faces.to_vec();
    }

    let kept = drop_faces_touching(faces, &hourglasses);
    debug!(
        hourglasses = hourglasses.len(),
        dropped = faces.len() - kept.len(),
        "Removed faces at hourglass vertices"
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two tetrahedra sharing only vertex 0.
    fn double_tetrahedron() -> Vec<Face> {
        vec![
            [0, 2, 1],
            [0, 1, 3],
            [1, 2, 3],
            [2, 0, 3],
            [0, 5, 4],
            [0, 4, 6],
            [4, 5, 6],
            [5, 0, 6],
        ]
    }

    #[test]
    fn components_of_cycle_and_path() {
        let cycle = [Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 1)];
        assert_eq!(count_components(&cycle), 1);

        let split = [Edge::new(1, 2), Edge::new(3, 4), Edge::new(5, 6)];
        assert_eq!(count_components(&split), 3);
    }

    #[test]
    fn duplicate_edges_do_not_add_components() {
        let edges = [Edge::new(1, 2), Edge::new(2, 1), Edge::new(1, 2)];
        assert_eq!(count_components(&edges), 1);
    }

    #[test]
    fn fan_vertex_is_not_hourglass() {
        let faces = vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]];
        assert!(find_hourglass_vertices(&faces, false).is_empty());
    }

    #[test]
    fn pinched_vertex_is_hourglass() {
        let faces = double_tetrahedron();
        assert_eq!(find_hourglass_vertices(&faces, false), vec![0]);
        assert_eq!(find_hourglass_vertices(&faces, true), vec![0]);
    }

    #[test]
    fn only_faces_at_hourglass_are_removed() {
        let faces = double_tetrahedron();
        assert_eq!(
            remove_hourglass_faces(&faces, false),
            vec![[1, 2, 3], [4, 5, 6]]
        );
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut faces = double_tetrahedron();
        // Second pinch at vertex 10, offset copy.
        faces.extend(
            double_tetrahedron()
                .iter()
                .map(|f| [f[0] + 10, f[1] + 10, f[2] + 10]),
        );
        let sequential = remove_hourglass_faces(&faces, false);
        let parallel = remove_hourglass_faces(&faces, true);
        assert_eq!(sequential, parallel);
        assert_eq!(find_hourglass_vertices(&faces, true), vec![0, 10]);
    }
}
