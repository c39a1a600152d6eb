//! The cleanup pipeline.
//!
//! Runs orientation, junction and hourglass removal, and compaction in that
//! order, and records how many faces each stage dropped.

use mesh_types::IndexedMesh;
use tracing::{debug, info, warn};

use crate::boundary::remove_junction_faces;
use crate::compact::compact_mesh;
use crate::error::{RepairError, RepairResult};
use crate::hourglass::remove_hourglass_faces;
use crate::orient::orient_faces;
use crate::params::{CleanupMode, RepairParams};

/// Repaired mesh together with what was done to it.
#[derive(Debug, Clone)]
pub struct RepairOutcome {
    /// The repaired mesh.
    pub mesh: IndexedMesh,
    /// Per-stage counts.
    pub summary: RepairSummary,
}

/// Counts recorded by [`repair_mesh`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairSummary {
    /// Number of vertices before repair.
    pub initial_vertices: usize,
    /// Number of faces before repair.
    pub initial_faces: usize,
    /// Number of vertices after repair.
    pub final_vertices: usize,
    /// Number of faces after repair.
    pub final_faces: usize,
    /// Faces not reachable from the first face.
    pub unreachable_faces: usize,
    /// Faces whose winding conflicted with an earlier face.
    pub conflicting_faces: usize,
    /// Faces removed around boundary junction vertices.
    pub junction_faces: usize,
    /// Faces removed around hourglass vertices.
    pub hourglass_faces: usize,
    /// Vertices dropped by compaction.
    pub vertices_removed: usize,
    /// Number of junction/hourglass cleanup passes run.
    pub cleanup_passes: usize,
}

impl RepairSummary {
    /// Total number of faces removed.
    #[must_use]
    pub const fn faces_removed(&self) -> usize {
        self.unreachable_faces + self.conflicting_faces + self.junction_faces + self.hourglass_faces
    }

    /// Check if any repairs were performed.
    #[must_use]
    pub const fn had_changes(&self) -> bool {
        self.faces_removed() > 0 || self.vertices_removed > 0
    }
}

impl std::fmt::Display for RepairSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repair: {} verts ({} removed), {} faces ({} unreachable, {} conflicting, {} junction, {} hourglass) in {} cleanup pass{}",
            self.final_vertices,
            self.vertices_removed,
            self.final_faces,
            self.unreachable_faces,
            self.conflicting_faces,
            self.junction_faces,
            self.hourglass_faces,
            self.cleanup_passes,
            if self.cleanup_passes == 1 { "" } else { "es" }
        )
    }
}

/// Run the cleanup pipeline on a mesh.
///
/// This performs:
/// 1. Index validation
/// 2. Winding propagation from the first face ([`orient_faces`](crate::orient_faces))
/// 3. Junction then hourglass removal, repeated per [`CleanupMode`]
/// 4. Index compaction ([`compact_mesh`](crate::compact_mesh))
///
/// The input is not modified.
///
/// # Errors
///
/// Returns [`RepairError::InvalidIndex`] if a face references a missing
/// vertex, and [`RepairError::InvalidParams`] for an
/// [`CleanupMode::UntilStable`] limit of zero.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex};
/// use mesh_repair::{repair_mesh, RepairParams};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(9.0, 9.0, 9.0)); // unreferenced
/// mesh.faces.push([0, 1, 2]);
///
/// let outcome = repair_mesh(&mesh, &RepairParams::default()).unwrap();
/// assert_eq!(outcome.mesh.vertices.len(), 3);
/// assert_eq!(outcome.summary.vertices_removed, 1);
/// ```
pub fn repair_mesh(mesh: &IndexedMesh, params: &RepairParams) -> RepairResult<RepairOutcome> {
    let max_passes = params.cleanup_mode.max_passes();
    if max_passes == 0 {
        return Err(RepairError::InvalidParams {
            reason: "cleanup needs at least one pass".to_string(),
        });
    }

    if let Some((face, index)) = mesh.first_invalid_index() {
        return Err(RepairError::InvalidIndex {
            face,
            index,
            vertex_count: mesh.vertices.len(),
        });
    }

    let orientation = orient_faces(&mesh.faces);
    if orientation.unreachable > 0 {
        warn!(
            faces = orientation.unreachable,
            "Dropped faces not connected to the first face"
        );
    }
    if orientation.conflicting > 0 {
        warn!(
            faces = orientation.conflicting,
            "Dropped faces with conflicting winding"
        );
    }

    let mut faces = orientation.faces;
    let mut junction_faces = 0;
    let mut hourglass_faces = 0;
    let mut cleanup_passes = 0;

    loop {
        cleanup_passes += 1;

        let without_junctions = remove_junction_faces(&faces);
        let junction_dropped = faces.len() - without_junctions.len();
        let without_hourglasses = remove_hourglass_faces(&without_junctions, params.parallel);
        let hourglass_dropped = without_junctions.len() - without_hourglasses.len();

        faces = without_hourglasses;
        junction_faces += junction_dropped;
        hourglass_faces += hourglass_dropped;

        debug!(
            pass = cleanup_passes,
            junction_dropped, hourglass_dropped, "Cleanup pass complete"
        );

        if junction_dropped + hourglass_dropped == 0 {
            break;
        }
        if cleanup_passes >= max_passes {
            if matches!(params.cleanup_mode, CleanupMode::UntilStable { .. }) {
                warn!(max_passes, "Cleanup stopped before reaching a stable mesh");
            }
            break;
        }
    }

    if junction_faces > 0 {
        warn!(faces = junction_faces, "Dropped faces at boundary junctions");
    }
    if hourglass_faces > 0 {
        warn!(faces = hourglass_faces, "Dropped faces at hourglass vertices");
    }

    let repaired = compact_mesh(&mesh.vertices, &faces)?;

    let summary = RepairSummary {
        initial_vertices: mesh.vertices.len(),
        initial_faces: mesh.faces.len(),
        final_vertices: repaired.vertices.len(),
        final_faces: repaired.faces.len(),
        unreachable_faces: orientation.unreachable,
        conflicting_faces: orientation.conflicting,
        junction_faces,
        hourglass_faces,
        vertices_removed: mesh.vertices.len() - repaired.vertices.len(),
        cleanup_passes,
    };

    info!(
        vertices = summary.final_vertices,
        faces = summary.final_faces,
        faces_removed = summary.faces_removed(),
        vertices_removed = summary.vertices_removed,
        "Mesh repair complete"
    );

    Ok(RepairOutcome {
        mesh: repaired,
        summary,
    })
}
