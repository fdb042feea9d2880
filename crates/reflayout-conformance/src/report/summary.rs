//! summary.json output for `reflayout run --format json`.
//!
//! Downstream tooling should branch on `(schema_version, reason_code)`,
//! not on the process exit code.

use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::SuiteReport;
use crate::check::CheckReport;
use crate::error::{SuiteError, SuiteResult};

/// Current schema version for summary.json
pub const SCHEMA_VERSION: u32 = 1;

pub const REASON_OK: &str = "OK";
pub const REASON_MISMATCH: &str = "E_LAYOUT_MISMATCH";

/// Machine-readable outcome of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub schema_version: u32,

    /// Exit code: 0=pass, 1=mismatch, 2=config error
    pub exit_code: i32,

    /// Stable machine-readable reason code (e.g. "E_LAYOUT_MISMATCH")
    pub reason_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub provenance: Provenance,

    /// Absent when the suite never ran (config error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultsSummary>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<CheckReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provenance {
    /// reflayout version that produced this summary
    pub reflayout_version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,

    /// RFC3339, UTC
    pub generated_at: String,
}

impl Provenance {
    fn now(suite: Option<String>) -> Self {
        Self {
            reflayout_version: env!("CARGO_PKG_VERSION").to_string(),
            suite,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_report(report: &SuiteReport) -> Self {
        let (reason_code, message) = if report.is_success() {
            (REASON_OK, None)
        } else {
            (
                REASON_MISMATCH,
                Some(format!(
                    "{} of {} records rendered differently",
                    report.failed(),
                    report.total()
                )),
            )
        };
        Self {
            schema_version: SCHEMA_VERSION,
            exit_code: report.exit_code(),
            reason_code: reason_code.to_string(),
            message,
            provenance: Provenance::now(Some(report.suite.clone())),
            results: Some(ResultsSummary {
                total: report.total(),
                passed: report.passed(),
                failed: report.failed(),
            }),
            checks: report.checks.clone(),
        }
    }

    pub fn from_error(err: &SuiteError) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            exit_code: err.exit_code(),
            reason_code: err.reason_code().to_string(),
            message: Some(err.to_string()),
            provenance: Provenance::now(None),
            results: None,
            checks: Vec::new(),
        }
    }

    pub fn to_json(&self) -> SuiteResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SuiteError::Output {
            path: "<memory>".into(),
            message: e.to_string(),
        })
    }
}

/// Write summary.json to `path`, creating parent directories.
pub fn write_summary(summary: &Summary, path: &Path) -> SuiteResult<()> {
    let output_err = |message: String| SuiteError::Output {
        path: path.to_path_buf(),
        message,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| output_err(e.to_string()))?;
    }
    let json = summary.to_json()?;
    std::fs::write(path, json).map_err(|e| output_err(e.to_string()))
}
