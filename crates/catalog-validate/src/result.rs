use serde::{Deserialize, Serialize};

use crate::issue::Violation;

/// Outcome of validating one usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "violations", rename_all = "lowercase")]
pub enum ValidationResult {
    Valid,
    /// Never empty; ordered by check, then input order.
    Invalid(Vec<Violation>),
}

impl ValidationResult {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(violations)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(violations) => violations,
        }
    }
}

/// Validation result for one usage of a batch, with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageReport {
    pub location: Option<String>,
    pub component: String,
    pub result: ValidationResult,
}

impl UsageReport {
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }
}
