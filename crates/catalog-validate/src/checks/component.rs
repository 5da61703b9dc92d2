//! Component resolution.

use catalog_model::{CandidateUsage, ComponentDescriptor};
use catalog_standards::ComponentRegistry;

use crate::issue::Violation;

pub fn resolve<'r>(
    registry: &'r ComponentRegistry,
    usage: &CandidateUsage,
) -> Result<&'r ComponentDescriptor, Violation> {
    registry.describe(&usage.component).map_err(|_| {
        tracing::debug!(component = %usage.component, "component does not resolve");
        Violation::UnknownComponent {
            component: usage.component.clone(),
        }
    })
}
