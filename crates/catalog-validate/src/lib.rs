//! Conformance validation of component usages against the design catalog.
//!
//! Four check families run for every usage, in order:
//!
//! - **Resolution**: the component name must be in the registry
//! - **Props**: variant and supplied props must be declared and admitted
//! - **Presence**: required props without a documented default must be supplied
//! - **Accessibility**: supplied metrics must meet touch target, contrast
//!   and ARIA constraints
//!
//! Findings are data, never errors: every failure is collected into the
//! [`ValidationResult`].
//!
//! # Example
//!
//! ```ignore
//! use catalog_standards::Catalog;
//! use catalog_validate::Validator;
//!
//! let catalog = Catalog::builtin()?;
//! let validator = Validator::new(&catalog);
//! for violation in validator.validate(&usage).violations() {
//!     println!("[{}] {}", violation.code(), violation.message());
//! }
//! ```

mod checks;
mod issue;
mod result;
pub mod rules;

use catalog_model::CandidateUsage;
use catalog_standards::{Catalog, ComponentRegistry, TokenStore};

pub use issue::{Expected, Finding, MetricKind, Violation};
pub use result::{UsageReport, ValidationResult};
pub use rules::Category;

/// Validates usages against an immutable catalog snapshot.
///
/// Holds only shared borrows, so one validator can be used from many
/// threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    registry: &'a ComponentRegistry,
    tokens: &'a TokenStore,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::from_parts(&catalog.registry, &catalog.tokens)
    }

    pub fn from_parts(registry: &'a ComponentRegistry, tokens: &'a TokenStore) -> Self {
        Self { registry, tokens }
    }

    /// Run every check against one usage.
    pub fn validate(&self, usage: &CandidateUsage) -> ValidationResult {
        let violations = checks::run_all(self.registry, self.tokens, usage);
        tracing::debug!(
            component = %usage.component,
            violations = violations.len(),
            "usage validated"
        );
        ValidationResult::from_violations(violations)
    }

    /// Validate a batch, one report per usage in input order.
    pub fn validate_all<'u>(
        &self,
        usages: impl IntoIterator<Item = &'u CandidateUsage>,
    ) -> Vec<UsageReport> {
        usages
            .into_iter()
            .map(|usage| UsageReport {
                location: usage.location.clone(),
                component: usage.component.clone(),
                result: self.validate(usage),
            })
            .collect()
    }
}

/// Validate one usage against a catalog.
pub fn validate(catalog: &Catalog, usage: &CandidateUsage) -> ValidationResult {
    Validator::new(catalog).validate(usage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn validator_is_send_and_sync() {
        assert_send_sync::<Validator<'static>>();
        assert_send_sync::<ValidationResult>();
    }
}
