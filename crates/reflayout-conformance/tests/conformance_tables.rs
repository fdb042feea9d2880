//! Contract tests for the conformance tables and suite files.
//! Every expected string here is part of the formatting contract; do not
//! edit one without a deliberate behavior change.

use std::path::{Path, PathBuf};

use reflayout_conformance::{
    check_layouts, check_rfc3339_conversion, exit_codes, fixed_instant, report::console, Suite,
    SuiteError, Summary, FORMAT_TESTS, RFC3339_FORMATS,
};
use reflayout_core::layout::named;
use reflayout_core::{FixedZone, Moment};

fn suite_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/suites")
        .join(name)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("reflayout_conformance=debug")
        .try_init();
}

#[test]
fn rfc3339_conversion_table() {
    init_tracing();
    let report = check_rfc3339_conversion(RFC3339_FORMATS).unwrap();
    assert_eq!(report.total, 3);
    assert!(report.mismatches.is_empty(), "{:#?}", report.mismatches);
}

#[test]
fn rfc3339_renders_zone_forms() {
    let rendered: Vec<String> = RFC3339_FORMATS
        .iter()
        .map(|r| r.instant().unwrap().format(named::RFC3339))
        .collect();
    assert!(rendered[0].ends_with('Z'));
    assert!(rendered[1].ends_with("-05:00"));
    assert!(rendered[2].ends_with("+04:20"));
}

#[test]
fn layout_table_against_fixed_instant() {
    init_tracing();
    let instant = fixed_instant().unwrap();
    let report = check_layouts(&instant, FORMAT_TESTS);
    assert_eq!(report.total, 18);
    assert!(report.mismatches.is_empty(), "{:#?}", report.mismatches);
}

#[test]
fn every_layout_record_individually() {
    let instant = fixed_instant().unwrap();
    for record in FORMAT_TESTS {
        assert_eq!(
            instant.format(&record.layout),
            record.expected,
            "{} expected {:?}",
            record.name,
            record.expected
        );
    }
}

#[test]
fn janet_is_not_a_month() {
    let instant = fixed_instant().unwrap();
    assert_eq!(
        instant.format("Hi Janet, the Month is January"),
        "Hi Janet, the Month is February"
    );
    assert_eq!(instant.format("Monday Monthly"), "Wednesday Monthly");
}

#[test]
fn two_digit_year() {
    let instant = fixed_instant().unwrap();
    assert_eq!(instant.format("06"), "09");
    assert_eq!(instant.format("06 01 02"), "09 02 04");
    assert_eq!(instant.format(named::RFC822), "04 Feb 09 21:00 PST");
}

#[test]
fn same_instant_same_output() {
    let a = fixed_instant().unwrap();
    let b = Moment::from_unix_nanos(1_233_810_057_012_345_600, FixedZone::new("PST", -28800).unwrap())
        .unwrap();
    for record in FORMAT_TESTS {
        assert_eq!(a.format(&record.layout), b.format(&record.layout));
        assert_eq!(a.format(&record.layout), a.format(&record.layout));
    }
}

#[test]
fn yaml_suite_matches_builtin_tables() {
    let suite = Suite::load(&suite_path("pst_reference.yaml")).unwrap();
    assert_eq!(suite.name, "pst-reference");
    let report = suite.run().unwrap();
    assert!(report.is_success(), "{}", console::render(&report));
    assert_eq!(report.total(), 20);
    assert_eq!(report.exit_code(), exit_codes::SUCCESS);
}

#[test]
fn broken_suite_reports_every_mismatch() {
    init_tracing();
    let suite = Suite::load(&suite_path("broken_expectations.yaml")).unwrap();
    let report = suite.run().unwrap();

    assert_eq!(report.total(), 4);
    assert_eq!(report.failed(), 3);
    assert_eq!(report.exit_code(), exit_codes::MISMATCH);

    let names: Vec<&str> = report
        .checks
        .iter()
        .flat_map(|c| c.mismatches.iter().map(|m| m.name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![
            "2008-09-17 20:04:26.000000000 UTC",
            "wrong year",
            "wrong meridiem"
        ]
    );

    let text = console::render(&report);
    assert!(text.contains("want=\"2010\""));
    assert!(text.contains("have=\"2009\""));
    assert!(text.ends_with("result: FAIL (3 mismatches of 4 records)\n"));

    let summary = Summary::from_report(&report);
    assert_eq!(summary.exit_code, 1);
    assert_eq!(summary.results.unwrap().failed, 3);
}

#[test]
fn missing_suite_file_is_io_error() {
    let err = Suite::load(&suite_path("does_not_exist.yaml")).unwrap_err();
    assert!(matches!(err, SuiteError::Io { .. }));
    assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
}

#[test]
fn parse_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "version: [not a number\n").unwrap();
    let err = Suite::load(&path).unwrap_err();
    match err {
        SuiteError::Parse { message } => assert!(message.contains("bad.yaml"), "{message}"),
        other => panic!("expected parse error, got {other:?}"),
    }
}
