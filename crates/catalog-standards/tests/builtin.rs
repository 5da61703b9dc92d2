use catalog_model::{ConstraintKind, Platform, PropType, TokenCategory};
use catalog_standards::{Catalog, CatalogError};

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog")
}

#[test]
fn button_variants_in_declaration_order() {
    let catalog = catalog();
    let variants: Vec<&str> = catalog
        .registry
        .variants_for("Button")
        .unwrap()
        .iter()
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(
        variants,
        vec!["primary", "secondary", "tertiary", "destructive", "ghost"]
    );

    let button = catalog.registry.describe("Button").unwrap();
    assert_eq!(
        button.variants_in(None),
        vec!["primary", "secondary", "tertiary", "destructive"]
    );
    assert_eq!(button.variant("ghost").unwrap().platform, Platform::Web);
}

#[test]
fn list_item_title_is_required() {
    let catalog = catalog();
    let list_item = catalog.registry.describe("ListItem").unwrap();
    let title = list_item.prop("title").unwrap();
    assert!(title.required);
    assert!(title.must_be_supplied());
    assert_eq!(title.prop_type, PropType::String);

    let required: Vec<&str> = list_item
        .props
        .iter()
        .filter(|p| p.must_be_supplied())
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(required, vec!["title"]);
}

#[test]
fn card_padding_defaults_to_medium() {
    let catalog = catalog();
    let padding = catalog
        .registry
        .describe("Card")
        .unwrap()
        .prop("padding")
        .unwrap();
    assert_eq!(padding.default.as_deref(), Some("medium"));
    assert!(!padding.required);
    assert_eq!(
        padding.allowed_in(None),
        vec!["none", "small", "medium", "large"]
    );
}

#[test]
fn button_has_touch_target_and_contrast_constraints() {
    let catalog = catalog();
    let button = catalog.registry.describe("Button").unwrap();
    let kinds: Vec<&ConstraintKind> = button.accessibility.iter().map(|c| &c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            &ConstraintKind::MinTouchTarget { min_px: 44.0 },
            &ConstraintKind::ContrastRatio { min_ratio: 4.5 },
        ]
    );
}

#[test]
fn platform_specific_components() {
    let catalog = catalog();
    assert_eq!(
        catalog.registry.describe("DataTable").unwrap().platform,
        Platform::Web
    );
    assert_eq!(
        catalog.registry.describe("BottomSheet").unwrap().platform,
        Platform::Mobile
    );
}

#[test]
fn unknown_component_is_an_error() {
    let catalog = catalog();
    let err = catalog.registry.describe("SuperButton").unwrap_err();
    assert!(matches!(err, CatalogError::UnknownComponent { ref name } if name == "SuperButton"));
    assert_eq!(err.to_string(), "unknown component: SuperButton");
}

#[test]
fn token_categories_are_populated_in_order() {
    let catalog = catalog();
    let spacing: Vec<&str> = catalog
        .tokens
        .all_of_category(TokenCategory::Spacing)
        .iter()
        .take(3)
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(spacing, vec!["spacing.xxs", "spacing.xs", "spacing.sm"]);

    for category in TokenCategory::ALL {
        assert!(
            !catalog.tokens.all_of_category(category).is_empty(),
            "no tokens for {category}"
        );
    }
}

#[test]
fn touch_target_tokens_resolve_to_pixels() {
    let catalog = catalog();
    assert_eq!(
        catalog.tokens.resolve_pixels("size.touch-target.ios").unwrap(),
        44.0
    );
    assert_eq!(
        catalog
            .tokens
            .resolve_pixels("size.touch-target.android")
            .unwrap(),
        48.0
    );
    assert!(matches!(
        catalog.tokens.lookup("size.touch-target.watch"),
        Err(CatalogError::NotFound { .. })
    ));
}

#[test]
fn builtin_records_manifest_pins() {
    let catalog = catalog();
    let summary = catalog.summary(None);
    assert_eq!(summary.file_count, 5);
    assert_eq!(
        summary.manifest_pins.as_ref().map(|p| p.catalog.as_str()),
        Some("2026.10")
    );
    assert_eq!(summary.component_count, catalog.registry.len());
}
