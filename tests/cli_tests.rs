//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const TWO_LEAF_ROOT: &str = "a3047514dd4deb62e5ee5810671a2af4183244c646819fc2bfc8b0b669daaf0b";

fn setup(leaves: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("leaves.txt"), leaves).unwrap();
    temp_dir
}

#[test]
fn test_root_command() {
    let temp_dir = setup("aaa\nbbb\n");

    Command::cargo_bin("audit-merkle")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["root", "leaves.txt", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(TWO_LEAF_ROOT));
}

#[test]
fn test_prove_then_verify() {
    let temp_dir = setup("aaa\nbbb\nccc\nddd\n");

    Command::cargo_bin("audit-merkle")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["prove", "leaves.txt", "--index", "2", "-o", "proof.json"])
        .assert()
        .success();

    assert!(temp_dir.path().join("proof.json").exists());

    Command::cargo_bin("audit-merkle")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["verify", "proof.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"));

    // Against an unrelated root the proof must be rejected
    Command::cargo_bin("audit-merkle")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["verify", "proof.json", "--root", TWO_LEAF_ROOT])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"));
}

#[test]
fn test_prove_out_of_range() {
    let temp_dir = setup("aaa\nbbb\n");

    Command::cargo_bin("audit-merkle")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["prove", "leaves.txt", "--index", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_empty_leaf_file() {
    let temp_dir = setup("");

    Command::cargo_bin("audit-merkle")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["root", "leaves.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty leaf sequence"));
}

#[test]
fn test_export_command() {
    let temp_dir = setup("aaa\nbbb\nccc\n");

    let output = Command::cargo_bin("audit-merkle")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["export", "leaves.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let levels = value["levels"].as_array().unwrap();
    assert_eq!(levels.len(), 3);
    assert_eq!(levels[0].as_array().unwrap().len(), 3);
    assert_eq!(levels[1].as_array().unwrap().len(), 2);
}

#[test]
fn test_config_selects_strategy() {
    let temp_dir = setup("aaa\nbbb\n");
    fs::write(
        temp_dir.path().join("plain.toml"),
        "[leaf]\nalgorithm = \"sha256\"\n\n[branch]\nalgorithm = \"sha256\"\n",
    )
    .unwrap();

    Command::cargo_bin("audit-merkle")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["--config", "plain.toml", "root", "leaves.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "6a0b1d67884e58786e97bc51544cbba4cc3e1279d8ff46da2fa32bcdb44a053e",
        ));
}

#[test]
fn test_unknown_algorithm_in_config() {
    let temp_dir = setup("aaa\n");
    fs::write(temp_dir.path().join("bad.toml"), "[leaf]\nalgorithm = \"md5\"\n").unwrap();

    Command::cargo_bin("audit-merkle")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["--config", "bad.toml", "root", "leaves.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported hash strategy"));
}
