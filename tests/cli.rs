//! End-to-end runs of the `u-tsp` binary.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const CLASSIC: &str = "0 10 15 20\n10 0 35 25\n15 35 0 30\n20 25 30 0\n";

fn matrix_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write matrix");
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_u-tsp"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn approximate_only_by_default() {
    let file = matrix_file(CLASSIC);
    let output = run(&[file.path().to_str().expect("utf-8 path")]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "approx_tsp_cost: 95");
    assert!(lines[1].starts_with("approx_tsp_time: "));
    assert!(lines[1].ends_with(" s"));
}

#[test]
fn brute_force_flag_adds_exact_lines() {
    let file = matrix_file(CLASSIC);
    let path = file.path().to_str().expect("utf-8 path");
    for flag in ["-b", "--brute-force"] {
        let output = run(&[path, flag]);
        assert!(output.status.success());
        let lines = stdout_lines(&output);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "brute_force_cost: 80");
        assert!(lines[1].starts_with("brute_force_time: "));
        assert_eq!(lines[2], "approx_tsp_cost: 95");
    }
}

#[test]
fn tour_flag_prints_node_order() {
    let file = matrix_file(CLASSIC);
    let output = run(&[file.path().to_str().expect("utf-8 path"), "-b", "--tour"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[4], "brute_force_tour: 0 1 3 2 0");
    assert_eq!(lines[5], "approx_tsp_tour: 0 1 2 3 0");
}

#[test]
fn json_format() {
    let file = matrix_file(CLASSIC);
    let output = run(&[
        file.path().to_str().expect("utf-8 path"),
        "--brute-force",
        "--format",
        "json",
    ]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["exact"]["cost"], 80);
    assert_eq!(json["approximate"]["cost"], 95);
}

#[test]
fn missing_argument_exits_with_one() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn missing_file_exits_with_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.txt");
    let output = run(&[missing.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn empty_and_malformed_files_exit_with_one() {
    for contents in ["", "0 1\n1 zero\n", "0 1 2\n1 0 2\n"] {
        let file = matrix_file(contents);
        let output = run(&[file.path().to_str().expect("utf-8 path"), "-b"]);
        assert_eq!(output.status.code(), Some(1), "input {contents:?}");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn help_prints_usage_and_exits_with_zero() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--brute-force"));
}
