//! Table rendering for catalog listings.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_model::{
    AccessibilityConstraint, ComponentDescriptor, ConstraintKind, ConstraintScope, Platform,
    PropDescriptor, Token,
};
use catalog_report::Summary;
use catalog_validate::Category;

pub fn tokens_table<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Token"),
        header_cell("Category"),
        header_cell("Value"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for token in tokens {
        table.add_row(vec![
            Cell::new(&token.name).add_attribute(Attribute::Bold),
            Cell::new(token.category),
            Cell::new(&token.value),
            optional_cell(token.description.as_deref()),
        ]);
    }
    table
}

pub fn components_table<'a>(components: impl IntoIterator<Item = &'a ComponentDescriptor>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Component"),
        header_cell("Platform"),
        header_cell("Variants"),
        header_cell("Props"),
        header_cell("Constraints"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for component in components {
        let variants: Vec<&str> = component.variants.iter().map(|v| v.name.as_str()).collect();
        table.add_row(vec![
            Cell::new(&component.name)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            platform_cell(component.platform),
            optional_cell(Some(variants.join(", ").as_str()).filter(|s| !s.is_empty())),
            Cell::new(component.props.len()),
            Cell::new(component.accessibility.len()),
        ]);
    }
    table
}

pub fn props_table(props: &[PropDescriptor]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Prop"),
        header_cell("Type"),
        header_cell("Allowed"),
        header_cell("Required"),
        header_cell("Default"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for prop in props {
        let allowed: Vec<String> = prop
            .allowed_values
            .iter()
            .map(|allowed| match allowed.platform {
                Platform::Both => allowed.value.clone(),
                platform => format!("{} ({platform})", allowed.value),
            })
            .collect();
        table.add_row(vec![
            Cell::new(&prop.name).add_attribute(Attribute::Bold),
            Cell::new(prop.prop_type),
            optional_cell(Some(allowed.join(", ").as_str()).filter(|s| !s.is_empty())),
            if prop.must_be_supplied() {
                Cell::new("yes").fg(Color::Yellow).add_attribute(Attribute::Bold)
            } else {
                dim_cell("no")
            },
            optional_cell(prop.default.as_deref()),
            optional_cell(prop.description.as_deref()),
        ]);
    }
    table
}

pub fn variants_table(component: &ComponentDescriptor) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variant"),
        header_cell("Platform"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for variant in &component.variants {
        table.add_row(vec![
            Cell::new(&variant.name).add_attribute(Attribute::Bold),
            platform_cell(variant.platform),
            optional_cell(variant.description.as_deref()),
        ]);
    }
    table
}

pub fn constraints_table(constraints: &[AccessibilityConstraint]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Constraint"),
        header_cell("Threshold"),
        header_cell("Platform"),
        header_cell("Scope"),
    ]);
    apply_table_style(&mut table);
    for constraint in constraints {
        let threshold = match &constraint.kind {
            ConstraintKind::MinTouchTarget { min_px } => format!("{min_px}px"),
            ConstraintKind::ContrastRatio { min_ratio } => format!("{min_ratio}:1"),
            ConstraintKind::AriaAttributeRequired { attribute } => attribute.clone(),
        };
        table.add_row(vec![
            Cell::new(constraint.kind.label()),
            Cell::new(threshold),
            platform_cell(constraint.platform),
            match constraint.scope {
                ConstraintScope::Always => Cell::new("always"),
                ConstraintScope::Interactive => Cell::new("interactive"),
            },
        ]);
    }
    table
}

/// Violation totals per category for a validated batch.
pub fn violations_table(summary: &Summary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Violations")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for category in Category::ALL {
        let count = summary.by_category.get(&category).copied().unwrap_or(0);
        table.add_row(vec![Cell::new(category), count_cell(count)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn platform_cell(platform: Platform) -> Cell {
    match platform {
        Platform::Both => dim_cell(platform),
        Platform::Mobile => Cell::new(platform).fg(Color::Green),
        Platform::Web => Cell::new(platform).fg(Color::Blue),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
