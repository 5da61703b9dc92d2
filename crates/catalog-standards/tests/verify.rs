use std::fs;
use std::path::Path;

use catalog_standards::hash::sha256_hex;
use catalog_standards::{Catalog, CatalogError, DoctorReport, SharedCatalog};

const TOKENS: &str = "Name,Category,Value,Description
color.primary,color,#1967D2,Primary
color.surface,color,#FFFFFF,Surface
spacing.md,spacing,16px,Default padding
";

const COMPONENTS: &str = "Component,Platform,Description,States
Button,both,Triggers an action,default;pressed
ListItem,both,Row,default
";

const VARIANTS: &str = "Component,Variant,Platform,Description
Button,primary,both,Main
Button,ghost,web,Toolbar
";

const PROPS: &str = "Component,Prop,Type,Allowed Values,Required,Default,Description
Button,size,enum,small;medium;large,no,medium,Scale
ListItem,title,string,,yes,,Primary text
";

const ACCESSIBILITY: &str = "Component,Kind,Threshold,Platform,Scope,Notes
Button,min-touch-target,44,both,always,Hit area
";

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn write_catalog(dir: &Path, files: &[(&str, &str, &str)]) {
    let mut manifest = String::from(
        "[manifest]\nschema = \"design-catalog.manifest\"\nschema_version = 1\n\n[pins]\ncatalog = \"test\"\nsources = [\"component-library.md\"]\n",
    );
    for (role, name, contents) in files {
        write(&dir.join(name), contents);
        manifest.push_str(&format!(
            "\n[[files]]\npath = \"{name}\"\nsha256 = \"{}\"\nkind = \"csv\"\nrole = \"{role}\"\n",
            sha256_hex(contents.as_bytes())
        ));
    }
    write(&dir.join("manifest.toml"), &manifest);
}

fn standard_files() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("tokens", "tokens.csv", TOKENS),
        ("components", "components.csv", COMPONENTS),
        ("variants", "variants.csv", VARIANTS),
        ("props", "props.csv", PROPS),
        ("accessibility", "accessibility.csv", ACCESSIBILITY),
    ]
}

#[test]
fn verify_and_doctor_counts_are_stable() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), &standard_files());

    let (catalog, summary) = Catalog::verify_and_load(dir.path()).expect("verify catalog");
    assert_eq!(summary.token_count, 3);
    assert!(catalog.registry.contains("ListItem"));

    let report = DoctorReport::from_catalog(&catalog, &summary);
    assert_eq!(report.files.len(), 5);
    assert_eq!(report.components[1].required_props, vec!["title".to_string()]);
    insta::assert_json_snapshot!(report.counts, @r#"
    {
      "files": 5,
      "tokens": 3,
      "tokens_by_category": {
        "color": 2,
        "duration": 0,
        "elevation": 0,
        "spacing": 1,
        "typography": 0
      },
      "components": 2,
      "variants": 2,
      "props": 2,
      "constraints": 1
    }
    "#);
}

#[test]
fn shipped_catalog_directory_verifies() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let (catalog, summary) = Catalog::verify_and_load(&dir).expect("verify shipped catalog");
    let builtin = Catalog::builtin().unwrap();
    assert_eq!(summary.component_count, builtin.registry.len());
    assert_eq!(catalog.tokens.len(), builtin.tokens.len());
}

#[test]
fn sha_mismatch_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), &standard_files());
    fs::write(dir.path().join("tokens.csv"), "Name,Category,Value\n").unwrap();

    let err = Catalog::verify_and_load(dir.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Sha256Mismatch { .. }), "{err}");
}

#[test]
fn unexpected_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), &standard_files());
    write(&dir.path().join("notes/draft.csv"), "x\n");

    let err = Catalog::verify_and_load(dir.path()).unwrap_err();
    assert!(matches!(err, CatalogError::UnexpectedFile { .. }), "{err}");
}

#[test]
fn missing_role_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut files = standard_files();
    files.retain(|(role, _, _)| *role != "accessibility");
    write_catalog(dir.path(), &files);

    let err = Catalog::verify_and_load(dir.path()).unwrap_err();
    assert!(matches!(err, CatalogError::MissingRole { ref role } if role == "accessibility"));
}

#[test]
fn duplicate_component_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut files = standard_files();
    files[1] = (
        "components",
        "components.csv",
        "Component,Platform,Description,States\nButton,both,A,\nButton,web,B,\n",
    );
    write_catalog(dir.path(), &files);

    let err = Catalog::verify_and_load(dir.path()).unwrap_err();
    assert_eq!(err.to_string(), "duplicate component definition: Button");
}

#[test]
fn duplicate_variant_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut files = standard_files();
    files[2] = (
        "variants",
        "variants.csv",
        "Component,Variant,Platform,Description\nButton,primary,both,A\nButton,primary,web,B\n",
    );
    write_catalog(dir.path(), &files);

    let err = Catalog::verify_and_load(dir.path()).unwrap_err();
    assert_eq!(err.to_string(), "duplicate variant definition: Button.primary");
}

#[test]
fn rows_for_undeclared_components_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut files = standard_files();
    files[3] = (
        "props",
        "props.csv",
        "Component,Prop,Type,Allowed Values,Required,Default,Description\nChip,label,string,,no,,\n",
    );
    write_catalog(dir.path(), &files);

    let err = Catalog::verify_and_load(dir.path()).unwrap_err();
    assert!(
        matches!(err, CatalogError::UndeclaredComponent { ref component, .. } if component == "Chip")
    );
}

#[test]
fn invalid_category_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let mut files = standard_files();
    files[0] = (
        "tokens",
        "tokens.csv",
        "Name,Category,Value,Description\nspacing.md,spacing,16px,\nopacity.half,opacity,0.5,\n",
    );
    write_catalog(dir.path(), &files);

    let err = Catalog::verify_and_load(dir.path()).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidValue { line: 3, .. }), "{err}");
}

#[test]
fn reload_publishes_without_touching_earlier_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), &standard_files());

    let shared = SharedCatalog::new(Catalog::builtin().unwrap());
    let before = shared.snapshot();
    let summary = shared.reload_from(dir.path()).expect("reload");
    assert_eq!(summary.token_count, 3);

    let after = shared.snapshot();
    assert_eq!(after.registry.len(), 2);
    assert!(!after.registry.contains("Card"));
    assert!(before.registry.contains("Card"));
    assert!(before.registry.len() > after.registry.len());

    // A broken directory leaves the reloaded catalog published.
    fs::remove_file(dir.path().join("props.csv")).unwrap();
    assert!(shared.reload_from(dir.path()).is_err());
    assert!(std::sync::Arc::ptr_eq(&after, &shared.snapshot()));
}
