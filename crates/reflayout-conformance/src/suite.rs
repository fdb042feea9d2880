//! Suites: the built-in fixture tables, or the same record shapes read
//! from a YAML file.
//!
//! ```yaml
//! version: 1
//! name: pst-reference
//! instant: { unix_nanos: 1233810057012345600, zone: { name: PST, offset_seconds: -28800 } }
//! conversions:
//!   - civil: { year: 2008, month: 9, day: 17, hour: 20, minute: 4, second: 26 }
//!     zone: { name: UTC, offset_seconds: 0 }
//!     expected: "2008-09-17T20:04:26Z"
//! layouts:
//!   - { name: Kitchen, layout: "@Kitchen", expected: "9:00PM" }
//! ```
//!
//! A layout starting with `@` names a predefined layout; `@@` escapes a
//! literal leading `@`.

use std::borrow::Cow;
use std::path::Path;

use reflayout_core::layout::named;
use reflayout_core::{LayoutError, Moment};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::check::{check_layouts, check_rfc3339_conversion};
use crate::error::{SuiteError, SuiteResult};
use crate::fixtures::{self, FormatTest, TimeFormatTest, ZoneSpec};
use crate::report::SuiteReport;

pub const SUITE_VERSION: u32 = 1;
pub const BUILTIN_SUITE: &str = "builtin";

/// Shared instant as written in a suite file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstantSpec {
    pub unix_nanos: i64,
    pub zone: ZoneSpec,
}

impl InstantSpec {
    pub fn to_moment(&self) -> Result<Moment, LayoutError> {
        Moment::from_unix_nanos(self.unix_nanos, self.zone.to_zone()?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct SuiteFile {
    version: u32,
    name: String,
    #[serde(default)]
    instant: Option<InstantSpec>,
    #[serde(default)]
    conversions: Vec<TimeFormatTest>,
    #[serde(default)]
    layouts: Vec<FormatTest>,
}

/// A validated suite, ready to run.
#[derive(Debug, Clone)]
pub struct Suite {
    pub name: String,
    pub instant: Option<Moment>,
    pub conversions: Vec<TimeFormatTest>,
    pub layouts: Vec<FormatTest>,
}

impl Suite {
    /// The built-in tables.
    pub fn builtin() -> SuiteResult<Self> {
        let instant =
            fixtures::fixed_instant().map_err(|e| SuiteError::instant("fixed instant", e))?;
        Ok(Self {
            name: BUILTIN_SUITE.to_string(),
            instant: Some(instant),
            conversions: fixtures::RFC3339_FORMATS.to_vec(),
            layouts: fixtures::FORMAT_TESTS.to_vec(),
        })
    }

    pub fn load(path: &Path) -> SuiteResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SuiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded suite file");
        Self::from_yaml_str(&content).map_err(|e| match e {
            SuiteError::Parse { message } => SuiteError::Parse {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        })
    }

    pub fn from_yaml_str(content: &str) -> SuiteResult<Self> {
        let file: SuiteFile = serde_yaml::from_str(content).map_err(|e| SuiteError::Parse {
            message: e.to_string(),
        })?;

        if file.version != SUITE_VERSION {
            return Err(SuiteError::UnsupportedVersion {
                found: file.version,
                expected: SUITE_VERSION,
            });
        }

        let instant = file
            .instant
            .map(|spec| spec.to_moment())
            .transpose()
            .map_err(|e| SuiteError::instant("instant", e))?;
        if instant.is_none() && !file.layouts.is_empty() {
            return Err(SuiteError::MissingInstant { suite: file.name });
        }

        for record in &file.conversions {
            record
                .instant()
                .map_err(|e| SuiteError::instant(format!("conversion '{}'", record.label()), e))?;
        }

        let layouts = file
            .layouts
            .into_iter()
            .map(|record| -> SuiteResult<FormatTest> {
                Ok(FormatTest {
                    layout: resolve_layout(&record.layout)?,
                    ..record
                })
            })
            .collect::<SuiteResult<Vec<_>>>()?;

        Ok(Self {
            name: file.name,
            instant,
            conversions: file.conversions,
            layouts,
        })
    }

    pub fn record_count(&self) -> usize {
        self.conversions.len() + self.layouts.len()
    }

    /// Run both passes. Mismatches are collected, never returned as errors.
    pub fn run(&self) -> SuiteResult<SuiteReport> {
        info!(suite = %self.name, records = self.record_count(), "running suite");
        let mut report = SuiteReport::new(&self.name);

        if !self.conversions.is_empty() {
            let conversions = check_rfc3339_conversion(&self.conversions)
                .map_err(|e| SuiteError::instant("conversions", e))?;
            report.checks.push(conversions);
        }
        if let Some(instant) = &self.instant {
            report.checks.push(check_layouts(instant, &self.layouts));
        }

        info!(
            suite = %self.name,
            passed = report.passed(),
            failed = report.failed(),
            "suite finished"
        );
        Ok(report)
    }
}

/// Resolve `@Name` to a predefined layout; anything else is literal.
///
/// ```
/// use reflayout_conformance::suite::resolve_layout;
///
/// assert_eq!(resolve_layout("@Kitchen").unwrap(), "3:04PM");
/// assert_eq!(resolve_layout("3pm").unwrap(), "3pm");
/// assert_eq!(resolve_layout("@@home").unwrap(), "@home");
/// assert!(resolve_layout("@Nope").is_err());
/// ```
pub fn resolve_layout(raw: &str) -> SuiteResult<Cow<'static, str>> {
    if let Some(escaped) = raw.strip_prefix("@@") {
        return Ok(Cow::Owned(format!("@{escaped}")));
    }
    match raw.strip_prefix('@') {
        Some(name) => named::lookup(name)
            .map(Cow::Borrowed)
            .ok_or_else(|| SuiteError::UnknownLayout {
                name: name.to_string(),
            }),
        None => Ok(Cow::Owned(raw.to_string())),
    }
}
