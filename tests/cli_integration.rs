#![cfg(feature = "cli")]

use std::process::Command;
use tempfile::tempdir;

fn bin() -> String {
    env!("CARGO_BIN_EXE_sesdiff").to_string()
}

#[test]
fn cli_unified_diff_of_two_files() {
    let dir = tempdir().unwrap();
    let old = dir.path().join("old.txt");
    let new = dir.path().join("new.txt");

    std::fs::write(&old, "one\ntwo\nthree\n").unwrap();
    std::fs::write(&new, "one\n2\nthree\n").unwrap();

    let out = Command::new(bin())
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("@@ -1,3 +1,3 @@"), "{stdout}");
    assert!(stdout.contains("\n-two\n+2\n"), "{stdout}");
}

#[test]
fn cli_identical_files_exit_zero() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "same\n").unwrap();
    std::fs::write(&b, "same\n").unwrap();

    let out = Command::new(bin())
        .args(["diff", "--format", "unified"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn cli_plain_format() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "a\nb\nc\n").unwrap();
    std::fs::write(&b, "a\nx\nc\n").unwrap();

    let out = Command::new(bin())
        .args(["diff", "-f", "plain"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "  a\n- b\n+ x\n  c\n");
}

#[test]
fn cli_json_stats() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "").unwrap();
    std::fs::write(&b, "x\ny\n").unwrap();

    let out = Command::new(bin())
        .args(["--json", "stats"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));

    let doc: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(doc["stats"]["insert"], 2);
    assert_eq!(doc["stats"]["delete"], 0);
    assert_eq!(doc["new_lines"], 2);
}

#[test]
fn cli_missing_file_is_trouble() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    std::fs::write(&a, "x\n").unwrap();

    let out = Command::new(bin())
        .arg("diff")
        .arg(&a)
        .arg(dir.path().join("missing.txt"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("missing.txt"), "{stderr}");
}

#[test]
fn cli_max_lines_rejects_large_input() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "1\n2\n3\n4\n").unwrap();
    std::fs::write(&b, "1\n").unwrap();

    let out = Command::new(bin())
        .args(["stats", "--max-lines", "3"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn cli_config_works() {
    let out = Command::new(bin()).arg("config").output().unwrap();
    assert!(out.status.success());
}

#[test]
fn cli_json_diff_carries_ops_and_digests() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "a\nb\nc\n").unwrap();
    std::fs::write(&b, "a\nx\nc\n").unwrap();

    for flags in [&["diff", "--format", "json"][..], &["--json", "diff"][..]] {
        let out = Command::new(bin())
            .args(flags)
            .arg(&a)
            .arg(&b)
            .output()
            .unwrap();
        assert_eq!(out.status.code(), Some(1), "{flags:?}");

        let doc: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
        assert_eq!(doc["stats"]["edit_distance"], 2);
        let kinds: Vec<&str> = doc["ops"]
            .as_array()
            .unwrap()
            .iter()
            .map(|op| op["kind"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, ["equal", "delete", "insert", "equal"]);
        assert_eq!(doc["ops"][2]["text"], "x");
        assert_eq!(doc["ops"][2]["pos_b"], 1);

        if cfg!(feature = "file-io") {
            let old_sha = doc["old_sha256"].as_str().unwrap();
            let new_sha = doc["new_sha256"].as_str().unwrap();
            assert_eq!(old_sha.len(), 64);
            assert_ne!(old_sha, new_sha);
        }
    }
}
