//! CLI tests for the standalone demo binaries and `lineage run`.
//!
//! Spawns each binary and checks its stdout line by line and its exit code.

use std::process::{Command, Output};

use lineage::exit_codes;
use lineage::test_support::lines;

const HIERARCHICAL: &[&str] = &[
    "Dog actions:",
    "This animal eats food.",
    "The dog barks.",
    "",
    "Cat actions:",
    "This animal eats food.",
    "The cat meows.",
    "",
    "White Cat actions:",
    "This animal eats food.",
    "The cat meows.",
    "The white cat is white.",
    "",
    "Black Cat actions:",
    "This animal eats food.",
    "The cat meows.",
    "The black cat is black.",
];

const MULTI_LEVEL: &[&str] = &["I can eat.", "I can sleep.", "I can walk.", "I can bark."];

const MULTIPLE: &[&str] = &[
    "This is a vehicle.",
    "This is a device.",
    "This is a smart car.",
];

const SINGLE: &[&str] = &[
    "Color: Red",
    "Brand: Ford",
    "Model: Mustang",
    "Max speed is 200km/h",
];

fn spawn(bin: &str, args: &[&str]) -> Output {
    let temp = tempfile::tempdir().expect("tempdir");
    Command::new(bin)
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("spawn binary")
}

fn assert_prints(output: &Output, expected: &[&str]) {
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(lines(&output.stdout), expected);
    assert!(output.stderr.is_empty());
}

#[test]
fn hierarchical_binary_prints_four_sections() {
    let output = spawn(env!("CARGO_BIN_EXE_hierarchical-inheritance"), &[]);
    assert_prints(&output, HIERARCHICAL);
}

#[test]
fn multi_level_binary_prints_chain() {
    let output = spawn(env!("CARGO_BIN_EXE_multi-level-inheritance"), &[]);
    assert_prints(&output, MULTI_LEVEL);
}

#[test]
fn multiple_binary_prints_three_lines() {
    let output = spawn(env!("CARGO_BIN_EXE_multiple-inheritance"), &[]);
    assert_prints(&output, MULTIPLE);
}

#[test]
fn single_binary_prints_fields_between_behaviors() {
    let output = spawn(env!("CARGO_BIN_EXE_single-inheritance"), &[]);
    assert_prints(&output, SINGLE);
}

#[test]
fn lineage_run_matches_standalone_binaries() {
    let cases = [
        ("hierarchical", HIERARCHICAL),
        ("multi-level", MULTI_LEVEL),
        ("multiple", MULTIPLE),
        ("single", SINGLE),
    ];
    for (name, expected) in cases {
        let output = spawn(env!("CARGO_BIN_EXE_lineage"), &["run", name]);
        assert_prints(&output, expected);
    }
}

#[test]
fn tracing_does_not_touch_stdout() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_multiple-inheritance"))
        .current_dir(temp.path())
        .env("RUST_LOG", "lineage=trace")
        .output()
        .expect("spawn binary");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(lines(&output.stdout), MULTIPLE);
    assert!(String::from_utf8_lossy(&output.stderr).contains("running demo"));
}
