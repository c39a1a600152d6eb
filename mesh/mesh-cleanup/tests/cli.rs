//! End-to-end tests running the `mesh-cleanup` binary.

#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn run_cleanup(input: &Path, output: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mesh-cleanup"))
        .arg("--input-file")
        .arg(input)
        .arg("--output-file")
        .arg(output)
        .output()
        .unwrap()
}

#[test]
fn cleans_opposite_winding() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(
        &input,
        "4\n0 0 0\n1 0 0\n0 1 0\n1 1 0\n2\n0 1 2\n1 2 3\n",
    )
    .unwrap();

    let result = run_cleanup(&input, &output);
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "3\n0 0 0\n1 0 0\n0 1 0\n1\n0 1 2\n"
    );
    assert!(result.stdout.is_empty());
    assert!(!result.stderr.is_empty());
}

#[test]
fn clean_mesh_passes_through() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("square.txt");
    let output = dir.path().join("square-out.txt");
    let text = "4\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n2\n0 1 2\n0 2 3\n";
    std::fs::write(&input, text).unwrap();

    let result = run_cleanup(&input, &output);
    assert!(result.status.success());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), text);
}

#[test]
fn malformed_input_fails_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    let output = dir.path().join("never.txt");
    std::fs::write(&input, "3\n0 0 0\n1 zero 0\n0 1 0\n1\n0 1 2\n").unwrap();

    let result = run_cleanup(&input, &output);
    assert!(!result.status.success());
    assert!(!output.exists());

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("line 3"), "{stderr}");
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    let result = run_cleanup(&dir.path().join("absent.txt"), &dir.path().join("out.txt"));

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("file not found"));
}
