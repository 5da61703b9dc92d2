use std::collections::BTreeMap;

use serde::Serialize;

use catalog_validate::{Category, UsageReport};

/// Totals over a batch of usage reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub usages: usize,
    pub passed: usize,
    pub failed: usize,
    pub violations: usize,
    /// Violation counts per category; categories without violations are omitted.
    pub by_category: BTreeMap<Category, usize>,
}

impl Summary {
    pub fn from_reports(reports: &[UsageReport]) -> Self {
        let mut summary = Summary {
            usages: reports.len(),
            ..Summary::default()
        };
        for report in reports {
            let violations = report.result.violations();
            if violations.is_empty() {
                summary.passed += 1;
            } else {
                summary.failed += 1;
            }
            summary.violations += violations.len();
            for violation in violations {
                *summary.by_category.entry(violation.category()).or_default() += 1;
            }
        }
        summary
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
