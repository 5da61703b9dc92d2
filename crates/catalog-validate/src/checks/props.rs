//! Prop and variant checks.
//!
//! The chosen variant is checked first, then every supplied prop in input
//! order. Values are compared against what the descriptor admits in the
//! usage's platform context.

use serde_json::Value;

use catalog_model::{CandidateUsage, ComponentDescriptor, Platform, PropDescriptor, PropType};
use catalog_standards::ComponentRegistry;

use crate::issue::{Expected, Violation};

const VARIANT: &str = "variant";

pub fn check(
    registry: &ComponentRegistry,
    descriptor: &ComponentDescriptor,
    usage: &CandidateUsage,
) -> Vec<Violation> {
    let context = usage.platform;
    let mut violations = Vec::new();

    if let Some(chosen) = chosen_variant(descriptor, usage, &mut violations) {
        // A component that declares its own `variant` prop checks it like any
        // other prop, whichever way the usage supplied it.
        let violation = match descriptor.prop(VARIANT) {
            Some(prop) => check_value(registry, descriptor, prop, &chosen, context),
            None => check_variant(descriptor, &chosen, context),
        };
        violations.extend(violation);
    }

    for (name, value) in usage.props.iter().filter(|(name, _)| *name != VARIANT) {
        let violation = match descriptor.prop(name) {
            Some(prop) => check_value(registry, descriptor, prop, value, context),
            None => Some(Violation::UnknownProp {
                component: descriptor.name.clone(),
                prop: name.clone(),
            }),
        };
        violations.extend(violation);
    }

    tracing::debug!(
        component = %descriptor.name,
        violations = violations.len(),
        "props checked"
    );
    violations
}

/// Merges the `variant` field and a `variant` key in `props` into one value.
///
/// The field wins; a `props.variant` that disagrees with it is reported once.
fn chosen_variant(
    descriptor: &ComponentDescriptor,
    usage: &CandidateUsage,
    violations: &mut Vec<Violation>,
) -> Option<Value> {
    let field = usage.variant.clone().map(Value::String);
    match (field, usage.props.get(VARIANT)) {
        (Some(field), Some(prop)) => {
            if *prop != field {
                violations.push(Violation::InvalidPropValue {
                    component: descriptor.name.clone(),
                    prop: VARIANT.to_string(),
                    value: prop.to_string(),
                    expected: Expected::SameAs(field.to_string()),
                });
            }
            Some(field)
        }
        (Some(field), None) => Some(field),
        (None, prop) => prop.cloned(),
    }
}

fn check_variant(
    descriptor: &ComponentDescriptor,
    value: &Value,
    context: Option<Platform>,
) -> Option<Violation> {
    if descriptor.variants.is_empty() {
        return Some(Violation::UnknownProp {
            component: descriptor.name.clone(),
            prop: VARIANT.to_string(),
        });
    }

    let admitted = descriptor.variants_in(context);
    match value.as_str() {
        Some(name) if admitted.contains(&name) => None,
        _ => Some(Violation::InvalidPropValue {
            component: descriptor.name.clone(),
            prop: VARIANT.to_string(),
            value: value.to_string(),
            expected: Expected::OneOf(admitted.into_iter().map(String::from).collect()),
        }),
    }
}

fn check_value(
    registry: &ComponentRegistry,
    descriptor: &ComponentDescriptor,
    prop: &PropDescriptor,
    value: &Value,
    context: Option<Platform>,
) -> Option<Violation> {
    let expected = match prop.prop_type {
        PropType::StringEnum => {
            let allowed = prop.allowed_in(context);
            match value.as_str() {
                Some(chosen) if allowed.contains(&chosen) => return None,
                _ => Expected::OneOf(allowed.into_iter().map(String::from).collect()),
            }
        }
        PropType::ComponentReference => match value.as_str() {
            Some(name) if registry.contains(name) => return None,
            _ => Expected::Component,
        },
        PropType::Boolean if value.is_boolean() => return None,
        PropType::Number if value.is_number() => return None,
        PropType::String | PropType::FunctionReference if value.is_string() => return None,
        other => Expected::Type(other),
    };

    Some(Violation::InvalidPropValue {
        component: descriptor.name.clone(),
        prop: prop.name.clone(),
        value: value.to_string(),
        expected,
    })
}
