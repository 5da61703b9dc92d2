#![deny(unsafe_code)]

use std::path::Path;

use catalog_model::Platform;

use super::{
    get_string, header_index, invalid_value, missing_field, read_records, required_header,
    split_list,
};
use crate::error::CatalogError;

/// One row of `components.csv`.
#[derive(Debug, Clone)]
pub struct ComponentRow {
    pub name: String,
    pub platform: Platform,
    pub description: Option<String>,
    pub states: Vec<String>,
}

pub fn parse_components_csv(bytes: &[u8], path: &Path) -> Result<Vec<ComponentRow>, CatalogError> {
    let (headers, rows) = read_records(bytes, path)?;

    let idx_name = required_header(&headers, "Component", path)?;
    let idx_platform = header_index(&headers, "Platform");
    let idx_description = header_index(&headers, "Description");
    let idx_states = header_index(&headers, "States");

    let mut results = Vec::with_capacity(rows.len());
    for row in &rows {
        let name =
            get_string(row, Some(idx_name)).ok_or_else(|| missing_field(path, row, "Component"))?;
        let platform = get_string(row, idx_platform)
            .unwrap_or_default()
            .parse::<Platform>()
            .map_err(|e| invalid_value(path, row, e))?;

        results.push(ComponentRow {
            name,
            platform,
            description: get_string(row, idx_description),
            states: split_list(get_string(row, idx_states)),
        });
    }
    Ok(results)
}
