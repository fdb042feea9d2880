use std::fmt::Write;

use super::SuiteReport;

/// Human-readable report. Deterministic, unit-testable.
#[must_use]
pub fn render(report: &SuiteReport) -> String {
    let mut out = String::new();
    // Writes into a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &SuiteReport) -> std::fmt::Result {
    writeln!(out, "suite {}", report.suite)?;
    for check in &report.checks {
        writeln!(
            out,
            "  {:<20} {}/{} passed",
            check.check,
            check.passed(),
            check.total
        )?;
        for m in &check.mismatches {
            writeln!(out, "    FAIL {} [{}]", m.name, m.layout)?;
            writeln!(out, "      want={:?}", m.expected)?;
            writeln!(out, "      have={:?}", m.actual)?;
        }
    }
    if report.is_success() {
        writeln!(out, "result: PASS ({} records)", report.total())
    } else {
        let noun = if report.failed() == 1 { "mismatch" } else { "mismatches" };
        writeln!(
            out,
            "result: FAIL ({} {} of {} records)",
            report.failed(),
            noun,
            report.total()
        )
    }
}
