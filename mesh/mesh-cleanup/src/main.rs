//! Command-line mesh cleanup.
//!
//! Reads a text mesh, makes its winding consistent, removes faces around
//! boundary junction and hourglass vertices, drops unreferenced vertices and
//! writes the result.
//!
//! ```text
//! mesh-cleanup --input-file surface.txt --output-file surface-clean.txt
//! ```
//!
//! Progress is logged to stderr. The output file is only replaced once the
//! whole mesh has been written.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mesh_io::{load_text_mesh, save_text_mesh};
use mesh_repair::{RepairParams, repair_mesh, validate_topology};
use mesh_types::MeshTopology;
use tracing::{Level, info, warn};

/// Clean up the topology of a triangle mesh
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input mesh file
    #[arg(short, long)]
    input_file: PathBuf,

    /// Output mesh file
    #[arg(short, long)]
    output_file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let mesh = load_text_mesh(&args.input_file)
        .with_context(|| format!("failed to read mesh from {}", args.input_file.display()))?;
    info!(
        path = %args.input_file.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Loaded mesh"
    );

    let before = validate_topology(&mesh);
    if !before.is_clean() {
        info!(issues = before.issue_count(), "Input needs repair");
    }

    let outcome = repair_mesh(&mesh, &RepairParams::default()).context("mesh repair failed")?;
    info!("{}", outcome.summary);

    if outcome.mesh.is_empty() && !mesh.is_empty() {
        warn!("Cleanup removed every face");
    }

    let after = validate_topology(&outcome.mesh);
    if !after.is_clean() {
        warn!("Single-pass cleanup left defects\n{after}");
    }

    save_text_mesh(&outcome.mesh, &args.output_file)
        .with_context(|| format!("failed to write mesh to {}", args.output_file.display()))?;
    info!(
        path = %args.output_file.display(),
        vertices = outcome.mesh.vertex_count(),
        faces = outcome.mesh.face_count(),
        "Wrote mesh"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn short_and_long_flags() {
        let args = Args::parse_from(["mesh-cleanup", "-i", "in.txt", "--output-file", "out.txt"]);
        assert_eq!(args.input_file, PathBuf::from("in.txt"));
        assert_eq!(args.output_file, PathBuf::from("out.txt"));
    }

    #[test]
    fn both_files_are_required() {
        assert!(Args::try_parse_from(["mesh-cleanup", "-i", "in.txt"]).is_err());
    }
}
