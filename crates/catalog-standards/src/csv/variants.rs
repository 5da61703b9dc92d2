#![deny(unsafe_code)]

use std::path::Path;

use catalog_model::{Platform, VariantDescriptor};

use super::{get_string, header_index, invalid_value, missing_field, read_records, required_header};
use crate::error::CatalogError;

#[derive(Debug, Clone)]
pub struct VariantRow {
    pub component: String,
    pub variant: VariantDescriptor,
}

pub fn parse_variants_csv(bytes: &[u8], path: &Path) -> Result<Vec<VariantRow>, CatalogError> {
    let (headers, rows) = read_records(bytes, path)?;

    let idx_component = required_header(&headers, "Component", path)?;
    let idx_variant = required_header(&headers, "Variant", path)?;
    let idx_platform = header_index(&headers, "Platform");
    let idx_description = header_index(&headers, "Description");

    let mut results = Vec::with_capacity(rows.len());
    for row in &rows {
        let component = get_string(row, Some(idx_component))
            .ok_or_else(|| missing_field(path, row, "Component"))?;
        let name =
            get_string(row, Some(idx_variant)).ok_or_else(|| missing_field(path, row, "Variant"))?;
        let platform = get_string(row, idx_platform)
            .unwrap_or_default()
            .parse::<Platform>()
            .map_err(|e| invalid_value(path, row, e))?;

        results.push(VariantRow {
            component,
            variant: VariantDescriptor {
                name,
                description: get_string(row, idx_description),
                platform,
            },
        });
    }
    Ok(results)
}
