//! End-to-end tests for the `blocktree` binary.

use std::fs;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::{tempdir, NamedTempFile};

fn blocktree(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_blocktree"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to execute blocktree")
}

fn source_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(text.as_bytes()).expect("failed to write temp file");
    file
}

#[test]
fn test_dot_writes_sample_program() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("syntax_tree.dot");

    let output = blocktree(&["dot", "-o", out.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let dot = fs::read_to_string(&out).unwrap();
    assert!(dot.starts_with("digraph syntax_tree {\n"));
    assert!(dot.ends_with("\n}"));
    assert!(dot.contains("  node0 [label=\"block: None\"];"));
    assert!(dot.contains("  node7 [label=\"resta: None\"];"));
    assert_eq!(dot.matches("->").count(), 9);
}

#[test]
fn test_dot_from_file_to_stdout() {
    let file = source_file("{ y = 2;\n  y * 3; }\n");

    let output = blocktree(&[
        "dot",
        file.path().to_str().unwrap(),
        "--stdout",
        "--graph-name",
        "tree",
        "--start-id",
        "5",
    ]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Illegal character '\\n' at 1:9"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("digraph tree {"));
    assert!(stdout.contains("node5 -> node6;"));
    assert!(stdout.contains("node11 [label=\"num: 3\"];"));
}

#[test]
fn test_parse_prints_tree() {
    let output = blocktree(&["parse", "-e", "{ a = (1 + 2) * b; }"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "block: None\n  assign: None\n    ID: a\n    multi: None\n      suma: None\n        num: 1\n        num: 2\n      id: b\n"
    );
}

#[test]
fn test_syntax_error_fails() {
    let output = blocktree(&["parse", "-e", "{ x = 1;"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse '<inline>'"));
    assert!(stderr.contains("Syntax error at EOF"));
}

#[test]
fn test_illegal_character_is_warned_not_fatal() {
    let output = blocktree(&["parse", "-e", "{ x = 1 $; }"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Illegal character '$' at 1:9"));
}

#[test]
fn test_lex_lists_tokens() {
    let output = blocktree(&["lex", "-e", "{ n = 42; }"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<inline>:1:3 IDENT n"));
    assert!(stdout.contains("<inline>:1:7 NUMBER 42"));
    assert!(stdout.contains("Total tokens: 7"));
}

#[test]
fn test_missing_file_fails() {
    let output = blocktree(&["parse", "/nonexistent/input.blk"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read file"));
}

#[test]
fn test_start_id_overflow_fails_cleanly() {
    let output = blocktree(&[
        "dot",
        "-e",
        "{ x; }",
        "--stdout",
        "--start-id",
        "18446744073709551615",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to number the graph for '<inline>'"));
    assert!(stderr.contains("Node identities overflow"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_deeply_nested_input_fails_cleanly() {
    let depth = 100_000;
    let file = source_file(&format!("{{ x = {}1{}; }}", "(".repeat(depth), ")".repeat(depth)));

    let output = blocktree(&["parse", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nested deeper than"));
}
