use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use catalog_model::{Platform, TokenCategory};
use catalog_report::{Summary, render_json, render_reports};
use catalog_standards::paths::catalog_root;
use catalog_standards::{Catalog, DoctorReport};
use catalog_validate::Validator;

use catalog_cli::input::load_usages;
use catalog_cli::source::load_catalog;

use crate::cli::{ReportFormatArg, ValidateArgs};
use crate::summary::{
    components_table, constraints_table, props_table, tokens_table, variants_table,
    violations_table,
};

/// Validate every input file; returns true when all usages conform.
pub fn run_validate(args: &ValidateArgs, catalog_dir: Option<&Path>) -> Result<bool> {
    let catalog = load_catalog(catalog_dir)?;
    let platform = args.platform.map(Platform::from);

    let mut usages = Vec::new();
    for path in &args.files {
        let loaded = load_usages(path, platform)?;
        debug!(path = %path.display(), usages = loaded.len(), "usages loaded");
        usages.extend(loaded);
    }

    let reports = Validator::new(&catalog).validate_all(&usages);
    let summary = Summary::from_reports(&reports);
    info!(
        usages = summary.usages,
        failed = summary.failed,
        violations = summary.violations,
        "validation finished"
    );

    match args.format {
        ReportFormatArg::Text => {
            print!("{}", render_reports(&reports));
            if summary.violations > 0 {
                println!("{}", violations_table(&summary));
            }
        }
        ReportFormatArg::Json => {
            println!("{}", render_json(&reports).context("serialize report")?);
        }
    }
    Ok(summary.all_passed())
}

/// Verify a catalog directory and print its doctor report.
pub fn run_verify(dir: Option<&Path>, catalog_dir: Option<&Path>) -> Result<()> {
    let dir = dir
        .or(catalog_dir)
        .map(Path::to_path_buf)
        .unwrap_or_else(catalog_root);
    let (catalog, summary) = Catalog::verify_and_load(&dir)
        .with_context(|| format!("verify catalog {}", dir.display()))?;
    let report = DoctorReport::from_catalog(&catalog, &summary);
    let json = serde_json::to_string_pretty(&report).context("serialize doctor report")?;
    println!("{json}");
    Ok(())
}

pub fn run_tokens(category: Option<TokenCategory>, catalog_dir: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog_dir)?;
    let table = match category {
        Some(category) => tokens_table(catalog.tokens.all_of_category(category)),
        None => tokens_table(catalog.tokens.iter()),
    };
    println!("{table}");
    Ok(())
}

pub fn run_components(catalog_dir: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog_dir)?;
    println!("{}", components_table(catalog.registry.iter()));
    Ok(())
}

pub fn run_describe(name: &str, catalog_dir: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog_dir)?;
    let component = catalog.registry.describe(name)?;

    println!("{} ({})", component.name, component.platform);
    if let Some(description) = &component.description {
        println!("{description}");
    }
    if !component.states.is_empty() {
        println!("States: {}", component.states.join(", "));
    }
    if !component.props.is_empty() {
        println!();
        println!("Props:");
        println!("{}", props_table(&component.props));
    }
    if !component.variants.is_empty() {
        println!();
        println!("Variants:");
        println!("{}", variants_table(component));
    }
    if !component.accessibility.is_empty() {
        println!();
        println!("Accessibility:");
        println!("{}", constraints_table(&component.accessibility));
    }
    Ok(())
}
