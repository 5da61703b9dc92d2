//! Check families, run in a fixed order.

pub mod accessibility;
pub mod component;
pub mod props;
pub mod required;

use catalog_model::CandidateUsage;
use catalog_standards::{ComponentRegistry, TokenStore};

use crate::issue::Violation;

/// Run every check against one usage.
///
/// An unresolved component short-circuits: its violation is the only one.
pub fn run_all(
    registry: &ComponentRegistry,
    tokens: &TokenStore,
    usage: &CandidateUsage,
) -> Vec<Violation> {
    let descriptor = match component::resolve(registry, usage) {
        Ok(descriptor) => descriptor,
        Err(violation) => return vec![violation],
    };

    let mut violations = props::check(registry, descriptor, usage);
    violations.extend(required::check(descriptor, usage));
    violations.extend(accessibility::check(tokens, descriptor, usage));
    violations
}
