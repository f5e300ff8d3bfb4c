use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn invdex(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_invdex"))
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap()
}

#[test]
fn test_writes_letter_files_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("fileA"), "Cat dog").unwrap();
    fs::write(dir.path().join("fileB"), "dog dog bird").unwrap();
    fs::write(dir.path().join("input.txt"), "2\nfileA\nfileB\n").unwrap();

    let output = invdex(&["3", "2", "input.txt"], dir.path());

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("b.txt")).unwrap(),
        "bird:[2]\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("c.txt")).unwrap(),
        "cat:[1]\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("d.txt")).unwrap(),
        "dog:[1 2]\n"
    );
}

#[test]
fn test_missing_inputs_exit_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.txt"), "2\nmissing-a\nmissing-b\n").unwrap();

    let output = invdex(&["2", "2", "input.txt"], dir.path());
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing-a"), "{stderr}");

    let output = invdex(&["2", "2", "no-such-manifest.txt"], dir.path());
    assert!(output.status.success());
}

#[test]
fn test_zero_workers_exit_nonzero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.txt"), "0\n").unwrap();

    let output = invdex(&["0", "2", "input.txt"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
}

#[test]
fn test_json_summary() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("doc"), "hello world").unwrap();
    fs::write(dir.path().join("input.txt"), "1 doc").unwrap();
    fs::create_dir(dir.path().join("out")).unwrap();

    let output = invdex(
        &["1", "1", "input.txt", "-o", "out", "--summary", "-f", "json"],
        dir.path(),
    );
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["metrics"]["words_indexed"], 2);
    assert_eq!(report["metrics"]["letters_written"], 2);
    assert!(dir.path().join("out").join("h.txt").exists());
    assert!(dir.path().join("out").join("w.txt").exists());
}
