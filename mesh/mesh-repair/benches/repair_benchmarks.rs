//! Benchmarks for mesh-repair operations.
//!
//! Run with: cargo bench -p mesh-repair
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh-repair -- --save-baseline main
//! 2. After changes: cargo bench -p mesh-repair -- --baseline main

#![allow(missing_docs, clippy::cast_possible_truncation)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mesh_repair::{
    MeshAdjacency, RepairParams, find_hourglass_vertices, orient_faces, repair_mesh,
    validate_topology,
};
use mesh_types::{IndexedMesh, Vertex};

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// Create a wavy `n x n` cell grid with two triangles per cell.
fn create_grid(n: u32) -> IndexedMesh {
    let side = n + 1;
    let mut mesh = IndexedMesh::with_capacity((side * side) as usize, (2 * n * n) as usize);

    for j in 0..side {
        for i in 0..side {
            let (x, y) = (f64::from(i), f64::from(j));
            mesh.vertices
                .push(Vertex::from_coords(x, y, (x * 0.3).sin() * (y * 0.2).cos()));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let v = j * side + i;
            mesh.faces.push([v, v + 1, v + side + 1]);
            mesh.faces.push([v, v + side + 1, v + side]);
        }
    }

    mesh
}

/// Grid with every 13th face flipped and every 29th face removed, giving
/// winding conflicts, holes and boundary junctions to clean up.
fn create_damaged_grid(n: u32) -> IndexedMesh {
    let mut mesh = create_grid(n);
    mesh.faces = mesh
        .faces
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 29 != 28)
        .map(|(i, &[a, b, c])| if i % 13 == 12 { [c, b, a] } else { [a, b, c] })
        .collect();
    mesh
}

// =============================================================================
// Stage Benchmarks
// =============================================================================

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stages");

    for n in [32_u32, 128] {
        let mesh = create_damaged_grid(n);
        group.throughput(Throughput::Elements(mesh.faces.len() as u64));

        group.bench_with_input(BenchmarkId::new("adjacency", n), &mesh, |b, mesh| {
            b.iter(|| MeshAdjacency::build(black_box(&mesh.faces)));
        });

        group.bench_with_input(BenchmarkId::new("orient", n), &mesh, |b, mesh| {
            b.iter(|| orient_faces(black_box(&mesh.faces)));
        });

        group.bench_with_input(BenchmarkId::new("hourglass_seq", n), &mesh, |b, mesh| {
            b.iter(|| find_hourglass_vertices(black_box(&mesh.faces), false));
        });

        group.bench_with_input(BenchmarkId::new("hourglass_par", n), &mesh, |b, mesh| {
            b.iter(|| find_hourglass_vertices(black_box(&mesh.faces), true));
        });
    }

    group.finish();
}

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pipeline");

    for n in [32_u32, 128] {
        let mesh = create_damaged_grid(n);
        group.throughput(Throughput::Elements(mesh.faces.len() as u64));

        group.bench_with_input(BenchmarkId::new("single_pass", n), &mesh, |b, mesh| {
            let params = RepairParams::default();
            b.iter(|| repair_mesh(black_box(mesh), &params));
        });

        group.bench_with_input(BenchmarkId::new("until_stable", n), &mesh, |b, mesh| {
            let params = RepairParams::until_stable().with_parallel(true);
            b.iter(|| repair_mesh(black_box(mesh), &params));
        });

        group.bench_with_input(BenchmarkId::new("validate", n), &mesh, |b, mesh| {
            b.iter(|| validate_topology(black_box(mesh)));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_stages, bench_pipeline);
criterion_main!(benches);
