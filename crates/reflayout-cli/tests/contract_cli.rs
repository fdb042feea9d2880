#![allow(deprecated)] // cargo_bin is deprecated but still supported by assert_cmd
//! Contract tests for the `reflayout` binary: stdout shapes and exit codes.
//! 0 = all records match, 1 = mismatch, 2 = configuration error.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn suites_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../reflayout-conformance/tests/suites")
}

fn reflayout() -> Command {
    let mut cmd = Command::cargo_bin("reflayout").expect("reflayout binary");
    cmd.env("RUST_LOG", "warn").env_remove("REFLAYOUT_SUITE");
    cmd
}

#[test]
fn run_builtin_passes() {
    reflayout()
        .arg("run")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("suite builtin"))
        .stdout(predicate::str::contains("rfc3339-conversion   3/3 passed"))
        .stdout(predicate::str::contains("layout-format        18/18 passed"))
        .stdout(predicate::str::contains("result: PASS (21 records)"));
}

#[test]
fn run_broken_suite_exits_one_and_lists_mismatches() {
    let suite = suites_dir().join("broken_expectations.yaml");
    reflayout()
        .args(["run", "--suite"])
        .arg(&suite)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL wrong year [2006]"))
        .stdout(predicate::str::contains("want=\"9AM\""))
        .stdout(predicate::str::contains("have=\"9PM\""))
        .stdout(predicate::str::contains("result: FAIL (3 mismatches of 4 records)"));
}

#[test]
fn run_suite_from_env() {
    let suite = suites_dir().join("pst_reference.yaml");
    reflayout()
        .arg("run")
        .env("REFLAYOUT_SUITE", &suite)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("suite pst-reference"));
}

#[test]
fn run_json_summary_on_stdout() {
    let output = reflayout()
        .args(["run", "--format", "json"])
        .output()
        .expect("run reflayout");
    assert_eq!(output.status.code(), Some(0));
    let v: Value = serde_json::from_slice(&output.stdout).expect("summary json");
    assert_eq!(v["schema_version"], 1);
    assert_eq!(v["exit_code"], 0);
    assert_eq!(v["reason_code"], "OK");
    assert_eq!(v["results"]["total"], 21);
    assert_eq!(v["provenance"]["suite"], "builtin");
}

#[test]
fn run_writes_summary_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("reports/summary.json");
    let suite = suites_dir().join("broken_expectations.yaml");
    reflayout()
        .args(["run", "--suite"])
        .arg(&suite)
        .arg("--output")
        .arg(&out)
        .assert()
        .code(1);
    let v: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v["reason_code"], "E_LAYOUT_MISMATCH");
    assert_eq!(v["results"]["failed"], 3);
}

#[test]
fn run_missing_suite_is_config_error() {
    let dir = tempdir().unwrap();
    reflayout()
        .args(["run", "--suite"])
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read suite"));
}

#[test]
fn run_unknown_layout_json_reason() {
    let dir = tempdir().unwrap();
    let suite = dir.path().join("unknown.yaml");
    fs::write(
        &suite,
        r#"
version: 1
name: unknown
instant: { unix_nanos: 0, zone: { name: UTC, offset_seconds: 0 } }
layouts:
  - { name: x, layout: "@NoSuchLayout", expected: "" }
"#,
    )
    .unwrap();
    let output = reflayout()
        .args(["run", "--format", "json", "--suite"])
        .arg(&suite)
        .output()
        .expect("run reflayout");
    assert_eq!(output.status.code(), Some(2));
    let v: Value = serde_json::from_slice(&output.stdout).expect("summary json");
    assert_eq!(v["reason_code"], "E_UNKNOWN_LAYOUT");
    assert!(v.get("results").is_none());
}

#[test]
fn format_named_layout() {
    reflayout()
        .args([
            "format",
            "--unix-nanos",
            "1233810057012345600",
            "--zone-name",
            "PST",
            "--offset",
            "-28800",
            "@RFC3339Nano",
        ])
        .assert()
        .code(0)
        .stdout("2009-02-04T21:00:57.0123456-08:00\n");
}

#[test]
fn format_literal_layout_defaults_to_utc() {
    reflayout()
        .args(["format", "--unix-nanos", "0", "Monday 2006-01-02 MST Z07:00"])
        .assert()
        .code(0)
        .stdout("Thursday 1970-01-01 UTC Z\n");
}

#[test]
fn format_rejects_bad_offset() {
    reflayout()
        .args(["format", "--unix-nanos", "0", "--offset", "90000", "15:04"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid --offset"));
}

#[test]
fn layouts_lists_every_name() {
    reflayout()
        .arg("layouts")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("RFC3339Nano  2006-01-02T15:04:05.999999999Z07:00"))
        .stdout(predicate::str::contains("Kitchen"))
        .stdout(predicate::str::contains("StampNano"));
}

#[test]
fn version_prints_package_version() {
    reflayout()
        .arg("version")
        .assert()
        .code(0)
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}
