//! The two conformance passes.
//!
//! Each pass compares every record and keeps going after a mismatch; the
//! caller gets one [`CheckReport`] listing all of them.

use reflayout_core::layout::named;
use reflayout_core::{LayoutResult, Moment};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::fixtures::{FormatTest, TimeFormatTest};

pub const RFC3339_CHECK: &str = "rfc3339-conversion";
pub const LAYOUT_CHECK: &str = "layout-format";

/// One record whose output differed from the expected string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub name: String,
    pub layout: String,
    pub expected: String,
    pub actual: String,
}

/// Outcome of one pass over a record table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub check: String,
    pub total: usize,
    pub mismatches: Vec<Mismatch>,
}

impl CheckReport {
    pub fn new(check: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            total: 0,
            mismatches: Vec::new(),
        }
    }

    /// Compare one record and remember it if it differs.
    pub fn record(&mut self, name: &str, layout: &str, expected: &str, actual: String) {
        self.total += 1;
        if actual == expected {
            debug!(check = %self.check, record = name, "match");
            return;
        }
        warn!(
            check = %self.check,
            record = name,
            expected,
            actual = %actual,
            "layout mismatch"
        );
        self.mismatches.push(Mismatch {
            name: name.to_string(),
            layout: layout.to_string(),
            expected: expected.to_string(),
            actual,
        });
    }

    pub fn failed(&self) -> usize {
        self.mismatches.len()
    }

    pub fn passed(&self) -> usize {
        self.total - self.mismatches.len()
    }

    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Format every record's instant with RFC3339 and compare.
///
/// All instants are built before any comparison, so an invalid record
/// fails the call up front instead of cutting the pass short.
pub fn check_rfc3339_conversion(records: &[TimeFormatTest]) -> LayoutResult<CheckReport> {
    let instants = records
        .iter()
        .map(TimeFormatTest::instant)
        .collect::<LayoutResult<Vec<_>>>()?;

    let mut report = CheckReport::new(RFC3339_CHECK);
    for (record, instant) in records.iter().zip(&instants) {
        report.record(
            &record.label(),
            named::RFC3339,
            &record.expected,
            instant.format(named::RFC3339),
        );
    }
    Ok(report)
}

/// Format one shared instant under every record's layout and compare.
pub fn check_layouts(instant: &Moment, records: &[FormatTest]) -> CheckReport {
    let mut report = CheckReport::new(LAYOUT_CHECK);
    for record in records {
        report.record(
            &record.name,
            &record.layout,
            &record.expected,
            instant.format(&record.layout),
        );
    }
    report
}
