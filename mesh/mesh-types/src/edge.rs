//! Undirected edges and directed half-edges.

use crate::mesh::Face;

/// A directed edge `(from, to)` induced by a face's winding.
pub type HalfEdge = (u32, u32);

/// An undirected edge between two vertices.
///
/// The endpoints are stored normalized so that `v0 <= v1`, which makes
/// `Edge::new(a, b) == Edge::new(b, a)` and lets edges be used as map keys.
///
/// # Example
///
/// ```
/// use mesh_types::Edge;
///
/// let edge = Edge::new(7, 3);
/// assert_eq!(edge.v0, 3);
/// assert_eq!(edge.v1, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// Smaller endpoint.
    pub v0: u32,
    /// Larger endpoint.
    pub v1: u32,
}

impl Edge {
    /// Create an edge, normalizing endpoint order.
    #[inline]
    #[must_use]
    pub const fn new(a: u32, b: u32) -> Self {
        if a < b {
            Self { v0: a, v1: b }
        } else {
            Self { v0: b, v1: a }
        }
    }
}

/// The three half-edges of a face, in winding order.
#[inline]
#[must_use]
pub const fn half_edges(face: Face) -> [HalfEdge; 3] {
    let [a, b, c] = face;
    [(a, b), (b, c), (c, a)]
}

/// The three undirected edges of a face, in winding order.
///
/// Edge `i` runs from corner `i` to corner `(i + 1) % 3`.
#[inline]
#[must_use]
pub const fn face_edges(face: Face) -> [Edge; 3] {
    let [a, b, c] = face;
    [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]
}

/// The edge opposite corner `corner` (0, 1 or 2) of a face.
///
/// Paired with the corner's vertex this describes the face as seen from
/// that vertex: for `[a, b, c]`, corner 0 (`a`) is opposite `{b, c}`.
#[inline]
#[must_use]
pub const fn opposite_edge(face: Face, corner: usize) -> Edge {
    let [a, b, c] = face;
    match corner % 3 {
        0 => Edge::new(b, c),
        1 => Edge::new(c, a),
        _ => Edge::new(a, b),
    }
}
