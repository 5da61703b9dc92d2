#![deny(unsafe_code)]

use std::path::Path;

use catalog_model::{AccessibilityConstraint, ConstraintKind, ConstraintScope, Platform};

use super::{get_string, header_index, invalid_value, missing_field, read_records, required_header};
use crate::error::CatalogError;

#[derive(Debug, Clone)]
pub struct ConstraintRow {
    pub component: String,
    pub constraint: AccessibilityConstraint,
}

/// Parses `accessibility.csv` (`Component,Kind,Threshold,Platform,Scope,Notes`).
pub fn parse_accessibility_csv(
    bytes: &[u8],
    path: &Path,
) -> Result<Vec<ConstraintRow>, CatalogError> {
    let (headers, rows) = read_records(bytes, path)?;

    let idx_component = required_header(&headers, "Component", path)?;
    let idx_kind = required_header(&headers, "Kind", path)?;
    let idx_threshold = required_header(&headers, "Threshold", path)?;
    let idx_platform = header_index(&headers, "Platform");
    let idx_scope = header_index(&headers, "Scope");

    let mut results = Vec::with_capacity(rows.len());
    for row in &rows {
        let component = get_string(row, Some(idx_component))
            .ok_or_else(|| missing_field(path, row, "Component"))?;
        let kind = get_string(row, Some(idx_kind)).ok_or_else(|| missing_field(path, row, "Kind"))?;
        let threshold = get_string(row, Some(idx_threshold))
            .ok_or_else(|| missing_field(path, row, "Threshold"))?;

        let kind = ConstraintKind::parse(&kind, &threshold).map_err(|e| invalid_value(path, row, e))?;
        let platform = get_string(row, idx_platform)
            .unwrap_or_default()
            .parse::<Platform>()
            .map_err(|e| invalid_value(path, row, e))?;
        let scope = get_string(row, idx_scope)
            .unwrap_or_default()
            .parse::<ConstraintScope>()
            .map_err(|e| invalid_value(path, row, e))?;

        results.push(ConstraintRow {
            component,
            constraint: AccessibilityConstraint {
                kind,
                platform,
                scope,
            },
        });
    }
    Ok(results)
}
