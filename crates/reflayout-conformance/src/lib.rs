//! Fixture-driven conformance checks for reference-time layouts.
//!
//! Two independent passes, both accumulate-and-report:
//!
//! - [`check_rfc3339_conversion`]: each record's instant formatted with
//!   RFC3339 must equal its expected string (UTC as `Z`, `-05:00`, `+04:20`).
//! - [`check_layouts`]: one shared instant (Wed Feb 4 21:00:57.0123456 PST
//!   2009) formatted under each record's layout.
//!
//! A mismatch is recorded and the pass continues; only broken input (an
//! unreadable suite, an unknown `@Name` layout, an impossible date) is an
//! error.
//!
//! # Quick Start
//!
//! ```
//! use reflayout_conformance::Suite;
//!
//! # fn example() -> reflayout_conformance::SuiteResult<()> {
//! let report = Suite::builtin()?.run()?;
//! assert!(report.is_success());
//! print!("{}", reflayout_conformance::report::console::render(&report));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod check;
pub mod error;
pub mod exit_codes;
pub mod fixtures;
pub mod report;
pub mod suite;

pub use check::{
    check_layouts, check_rfc3339_conversion, CheckReport, Mismatch, LAYOUT_CHECK, RFC3339_CHECK,
};
pub use error::{SuiteError, SuiteResult};
pub use fixtures::{
    fixed_instant, FormatTest, TimeFormatTest, ZoneSpec, FIXED_INSTANT_UNIX_NANOS, FORMAT_TESTS,
    RFC3339_FORMATS,
};
pub use report::summary::{write_summary, Summary};
pub use report::SuiteReport;
pub use suite::{resolve_layout, InstantSpec, Suite, SUITE_VERSION};
