//! Error types for mesh repair operations.

use thiserror::Error;

/// Result type for repair operations.
pub type RepairResult<T> = Result<T, RepairError>;

/// Errors that can occur during mesh repair.
///
/// Faces dropped for topological reasons are not errors; they are counted in
/// [`RepairSummary`](crate::RepairSummary).
#[derive(Debug, Error)]
pub enum RepairError {
    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index} (mesh has {vertex_count} vertices)")]
    InvalidIndex {
        /// Position of the offending face.
        face: usize,
        /// The invalid index.
        index: u32,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },

    /// Repair parameters are unusable.
    #[error("invalid repair parameters: {reason}")]
    InvalidParams {
        /// Why the parameters were rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_index_message() {
        let err = RepairError::InvalidIndex {
            face: 3,
            index: 10,
            vertex_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "face 3 references vertex 10 (mesh has 4 vertices)"
        );
    }
}
