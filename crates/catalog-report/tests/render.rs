use catalog_model::CandidateUsage;
use catalog_report::{Summary, render, render_json, render_reports};
use catalog_standards::Catalog;
use catalog_validate::{Category, UsageReport, Validator};

fn checkout_reports() -> Vec<UsageReport> {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let usages = vec![
        CandidateUsage::new("Button")
            .with_variant("primary")
            .with_location("screens/checkout.json#/0"),
        CandidateUsage::new("Button")
            .with_variant("huge")
            .with_location("screens/checkout.json#/1"),
        CandidateUsage::new("ListItem").with_location("screens/checkout.json#/2"),
    ];
    Validator::new(&catalog).validate_all(&usages)
}

#[test]
fn batch_text_report() {
    let reports = checkout_reports();
    insta::assert_snapshot!(render_reports(&reports), @r#"
    screens/checkout.json#/0: Button: PASS
    screens/checkout.json#/1: Button: FAIL (1 violation)
      1. [InvalidPropValue] Button.variant: "huge" is not one of {primary, secondary, tertiary, destructive}
    screens/checkout.json#/2: ListItem: FAIL (1 violation)
      1. [MissingRequiredProp] ListItem is missing required prop 'title'

    3 usages checked: 1 passed, 2 failed, 2 violations
    "#);
}

#[test]
fn single_result_text() {
    let reports = checkout_reports();
    assert_eq!(render(&reports[0].result), "PASS\n");
    assert_eq!(
        render(&reports[2].result),
        "FAIL (1 violation)\n  1. [MissingRequiredProp] ListItem is missing required prop 'title'\n"
    );
}

#[test]
fn summary_counts_by_category() {
    let summary = Summary::from_reports(&checkout_reports());
    assert_eq!(summary.usages, 3);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 2);
    assert!(!summary.all_passed());
    assert_eq!(summary.by_category.get(&Category::Props), Some(&1));
    assert_eq!(summary.by_category.get(&Category::Presence), Some(&1));
    assert_eq!(summary.by_category.get(&Category::Accessibility), None);
}

#[test]
fn json_report_is_machine_readable() {
    let json = render_json(&checkout_reports()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["summary"]["failed"], 2);
    assert_eq!(value["summary"]["by_category"]["presence"], 1);

    let results = value["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["status"], "valid");
    assert_eq!(results[0]["violations"].as_array().unwrap().len(), 0);

    let violation = &results[1]["violations"][0];
    assert_eq!(violation["code"], "InvalidPropValue");
    assert_eq!(violation["category"], "props");
    assert_eq!(violation["prop"], "variant");
    assert_eq!(
        violation["detail"]["InvalidPropValue"]["expected"]["value"][3],
        "destructive"
    );

    assert_eq!(results[2]["location"], "screens/checkout.json#/2");
}
