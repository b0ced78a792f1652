//! CLI tests for `lineage list`, `describe`, and `validate`, and for config
//! handling.

use std::fs;
use std::process::{Command, Output};

use lineage::config::CONFIG_FILE;
use lineage::exit_codes;
use lineage::test_support::lines;
use lineage::{Demo, TypeGraph};

fn lineage_in(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lineage"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("lineage")
}

#[test]
fn list_prints_every_demo() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = lineage_in(temp.path(), &["list"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let rows = lines(&output.stdout);
    assert_eq!(rows.len(), Demo::ALL.len());
    for (row, demo) in rows.iter().zip(Demo::ALL) {
        let columns: Vec<&str> = row.split('\t').collect();
        assert_eq!(columns[0], demo.name());
        assert_eq!(columns[1], demo.binary());
    }
}

#[test]
fn validate_reports_ok_per_demo() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = lineage_in(temp.path(), &["validate"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        lines(&output.stdout),
        vec![
            "ok: hierarchical",
            "ok: multi-level",
            "ok: multiple",
            "ok: single"
        ]
    );
}

#[test]
fn describe_text_is_default() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = lineage_in(temp.path(), &["describe", "multi-level"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        lines(&output.stdout),
        vec![
            "multi-level-inheritance (multi-level)",
            "Animal [eat, sleep]",
            "└── Mammal [walk]",
            "    └── Dog [bark]",
        ]
    );
}

#[test]
fn describe_json_round_trips_into_graph() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = lineage_in(temp.path(), &["describe", "multiple", "--format", "json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let graph: TypeGraph = serde_json::from_slice(&output.stdout).expect("parse graph json");
    assert_eq!(graph, Demo::Multiple.graph());
}

#[test]
fn config_sets_default_describe_format() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join(CONFIG_FILE),
        "[describe]\nformat = \"json\"\n",
    )
    .expect("write config");

    let output = lineage_in(temp.path(), &["describe", "single"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let graph: TypeGraph = serde_json::from_slice(&output.stdout).expect("parse graph json");
    assert_eq!(graph.types.len(), 2);

    let output = lineage_in(temp.path(), &["describe", "single", "--format", "text"]);
    assert_eq!(lines(&output.stdout)[0], "single-inheritance (single)");
}

#[test]
fn invalid_config_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join(CONFIG_FILE), "log_filter = \"\"\n").expect("write config");

    let output = lineage_in(temp.path(), &["run", "single"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("log_filter"));
}

#[test]
fn unknown_demo_is_rejected() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = lineage_in(temp.path(), &["run", "diamond"]);
    assert_ne!(output.status.code(), Some(exit_codes::OK));
    assert!(output.stdout.is_empty());
}
