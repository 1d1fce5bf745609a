use std::fs;
use std::path::{Path, PathBuf};

use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

const SAMPLE_GRAPH: &str = r#"digraph cflow {
    rankdir=TB;
    "main" -> "StartupA";
    "StartupA" -> "HelperB";
    "main" -> "WalWriterMain";
    "WalWriterMain" -> "WalFlush";
    "main" -> "pq_init";
}
"#;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

/// `split` writes one `<ROOT>.dot` artifact per root candidate and reports
/// each on stdout.
#[test]
fn split_writes_one_file_per_root() {
    let dir = tempdir().expect("tempdir");
    let input = write_file(dir.path(), "graph.dot", SAMPLE_GRAPH);

    assert_cmd::cargo::cargo_bin_cmd!("cflow-carver")
        .arg("split")
        .arg(&input)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("Generated: ").and(contains("main.dot")));

    assert!(dir.path().join("main.dot").exists());
    assert!(dir.path().join("WalWriterMain.dot").exists());
}

/// A graph without entry points is a valid empty result: success status,
/// a diagnostic, and no output files.
#[test]
fn split_succeeds_with_no_root_candidates() {
    let dir = tempdir().expect("tempdir");
    let input = write_file(dir.path(), "graph.dot", "    \"Alpha\" -> \"Beta\";\n");

    assert_cmd::cargo::cargo_bin_cmd!("cflow-carver")
        .arg("split")
        .arg(&input)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("No root candidates found"));

    assert!(!dir.path().join("Alpha.dot").exists());
    assert!(!dir.path().join("Beta.dot").exists());
}

/// Missing required argument is a usage error with nonzero status.
#[test]
fn split_without_input_is_a_usage_error() {
    assert_cmd::cargo::cargo_bin_cmd!("cflow-carver")
        .arg("split")
        .assert()
        .failure()
        .stderr(contains("Usage"));
}

#[test]
fn split_fails_for_unreadable_input() {
    assert_cmd::cargo::cargo_bin_cmd!("cflow-carver")
        .arg("split")
        .arg("no-such-file.dot")
        .assert()
        .failure();
}

#[test]
fn convert_prints_dot_to_stdout() {
    let dir = tempdir().expect("tempdir");
    let trace = write_file(
        dir.path(),
        "trace.txt",
        r"    1 main: int (int argc, char *argv[]), <src/main.c 71>
    2     StartupA: <>
",
    );

    assert_cmd::cargo::cargo_bin_cmd!("cflow-carver")
        .arg("convert")
        .arg(&trace)
        .assert()
        .success()
        .stdout(contains("digraph cflow {").and(contains("\"main\" -> \"StartupA\";")));
}

#[test]
fn filter_promotes_main_edges_and_drops_library_edges() {
    let dir = tempdir().expect("tempdir");
    let input = write_file(
        dir.path(),
        "graph.dot",
        r#"    "Postmaster" -> "pq_init";
    "main" -> "Postmaster";
"#,
    );

    assert_cmd::cargo::cargo_bin_cmd!("cflow-carver")
        .arg("filter")
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("\"main\" -> \"Postmaster\";").and(contains("pq_init").not()));
}

/// `roots --json` emits machine-readable summaries.
#[test]
fn roots_json_lists_candidates() {
    let dir = tempdir().expect("tempdir");
    let input = write_file(dir.path(), "graph.dot", SAMPLE_GRAPH);

    let assert = assert_cmd::cargo::cargo_bin_cmd!("cflow-carver")
        .arg("roots")
        .arg(&input)
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let roots: Vec<&str> =
        parsed.as_array().expect("array").iter().map(|v| v["root"].as_str().unwrap()).collect();
    assert_eq!(roots, vec!["WalWriterMain", "main"]);
}
