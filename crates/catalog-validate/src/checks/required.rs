//! Required prop presence.

use catalog_model::{CandidateUsage, ComponentDescriptor};

use crate::issue::Violation;

/// Flag required props without a documented default that were not supplied,
/// in descriptor order.
pub fn check(descriptor: &ComponentDescriptor, usage: &CandidateUsage) -> Vec<Violation> {
    descriptor
        .props
        .iter()
        .filter(|prop| prop.must_be_supplied() && !usage.props.contains_key(&prop.name))
        .map(|prop| Violation::MissingRequiredProp {
            component: descriptor.name.clone(),
            prop: prop.name.clone(),
        })
        .collect()
}
