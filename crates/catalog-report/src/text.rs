use std::fmt::Write;

use catalog_validate::{UsageReport, ValidationResult, Violation};

use crate::summary::Summary;

const NO_LOCATION: &str = "<input>";

/// Render one result: `PASS`, or `FAIL` followed by a numbered violation list.
pub fn render(result: &ValidationResult) -> String {
    let mut out = String::new();
    write_result(&mut out, result);
    out
}

/// Render a batch: one block per usage, then a summary line.
pub fn render_reports(reports: &[UsageReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let location = report.location.as_deref().unwrap_or(NO_LOCATION);
        let _ = write!(out, "{location}: {}: ", report.component);
        write_result(&mut out, &report.result);
    }

    let summary = Summary::from_reports(reports);
    if !reports.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "{} checked: {} passed, {} failed, {}",
        plural(summary.usages, "usage"),
        summary.passed,
        summary.failed,
        plural(summary.violations, "violation"),
    );
    out
}

fn write_result(out: &mut String, result: &ValidationResult) {
    match result {
        ValidationResult::Valid => out.push_str("PASS\n"),
        ValidationResult::Invalid(violations) => {
            let _ = writeln!(out, "FAIL ({})", plural(violations.len(), "violation"));
            for (idx, violation) in violations.iter().enumerate() {
                write_violation(out, idx + 1, violation);
            }
        }
    }
}

fn write_violation(out: &mut String, number: usize, violation: &Violation) {
    let _ = writeln!(
        out,
        "  {number}. [{}] {}",
        violation.code(),
        violation.message()
    );
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
