//! Universally quantified properties of the validator.

use std::sync::LazyLock;

use catalog_model::{CandidateUsage, Platform};
use catalog_standards::Catalog;
use catalog_validate::{ValidationResult, Validator, Violation};
use proptest::prelude::*;
use serde_json::Value;

static CATALOG: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::builtin().expect("builtin catalog"));

fn json_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-zA-Z]{0,10}".prop_map(Value::from),
    ]
}

fn platform() -> impl Strategy<Value = Option<Platform>> {
    prop_oneof![
        Just(None),
        Just(Some(Platform::Mobile)),
        Just(Some(Platform::Web)),
    ]
}

fn any_usage() -> impl Strategy<Value = CandidateUsage> {
    let names: Vec<String> = CATALOG.registry.names().map(str::to_string).collect();
    (
        prop_oneof![prop::sample::select(names), "[A-Z][a-z]{1,12}"],
        prop::option::of("[a-z]{3,10}"),
        prop::collection::vec(("[a-zA-Z]{1,10}", json_value()), 0..6),
        platform(),
    )
        .prop_map(|(component, variant, props, platform)| {
            let mut usage = CandidateUsage::new(component);
            usage.variant = variant;
            usage.platform = platform;
            for (name, value) in props {
                usage = usage.with_prop(name, value);
            }
            usage
        })
}

fn valid_button() -> impl Strategy<Value = CandidateUsage> {
    (
        prop::option::of(prop::sample::select(vec![
            "primary",
            "secondary",
            "tertiary",
            "destructive",
        ])),
        prop::option::of(prop::sample::select(vec!["small", "medium", "large"])),
        prop::option::of(any::<bool>()),
        prop::option::of("[A-Za-z ]{1,20}"),
        platform(),
    )
        .prop_map(|(variant, size, disabled, label, platform)| {
            let mut usage = CandidateUsage::new("Button");
            usage.variant = variant.map(str::to_string);
            usage.platform = platform;
            if let Some(size) = size {
                usage = usage.with_prop("size", size);
            }
            if let Some(disabled) = disabled {
                usage = usage.with_prop("disabled", disabled);
            }
            if let Some(label) = label {
                usage = usage.with_prop("label", label);
            }
            usage
        })
}

proptest! {
    #[test]
    fn unknown_component_yields_exactly_one_violation(
        name in "[A-Z][a-zA-Z]{0,15}",
        usage in any_usage(),
    ) {
        prop_assume!(!CATALOG.registry.contains(&name));
        let mut usage = usage;
        usage.component = name.clone();

        let result = Validator::new(&CATALOG).validate(&usage);
        prop_assert_eq!(
            result,
            ValidationResult::Invalid(vec![Violation::UnknownComponent { component: name }])
        );
    }

    #[test]
    fn conforming_buttons_are_valid(usage in valid_button()) {
        let result = Validator::new(&CATALOG).validate(&usage);
        prop_assert!(result.is_valid(), "{:?}", result);
    }

    #[test]
    fn validation_is_idempotent(usage in any_usage()) {
        let validator = Validator::new(&CATALOG);
        let first = validator.validate(&usage);
        let second = validator.validate(&usage);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn invalid_results_are_never_empty(usage in any_usage()) {
        let result = Validator::new(&CATALOG).validate(&usage);
        match result {
            ValidationResult::Valid => {}
            ValidationResult::Invalid(violations) => prop_assert!(!violations.is_empty()),
        }
    }
}
