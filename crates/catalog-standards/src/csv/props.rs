#![deny(unsafe_code)]

use std::path::Path;

use catalog_model::{AllowedValue, ModelError, Platform, PropDescriptor, PropType};

use super::{
    get_string, header_index, invalid_value, missing_field, parse_yes_no, read_records,
    required_header, split_list,
};
use crate::error::CatalogError;

#[derive(Debug, Clone)]
pub struct PropRow {
    pub component: String,
    pub prop: PropDescriptor,
}

/// Splits `ghost@web` into the value and its platform restriction.
fn parse_allowed_value(raw: &str) -> Result<AllowedValue, ModelError> {
    match raw.rsplit_once('@') {
        Some((value, platform)) => Ok(AllowedValue {
            value: value.trim().to_string(),
            platform: platform.parse()?,
        }),
        None => Ok(AllowedValue {
            value: raw.trim().to_string(),
            platform: Platform::Both,
        }),
    }
}

/// Parses `props.csv` (`Component,Prop,Type,Allowed Values,Required,Default,Description`).
pub fn parse_props_csv(bytes: &[u8], path: &Path) -> Result<Vec<PropRow>, CatalogError> {
    let (headers, rows) = read_records(bytes, path)?;

    let idx_component = required_header(&headers, "Component", path)?;
    let idx_prop = required_header(&headers, "Prop", path)?;
    let idx_type = required_header(&headers, "Type", path)?;
    let idx_allowed = header_index(&headers, "Allowed Values");
    let idx_required = header_index(&headers, "Required");
    let idx_default = header_index(&headers, "Default");
    let idx_description = header_index(&headers, "Description");

    let mut results = Vec::with_capacity(rows.len());
    for row in &rows {
        let component = get_string(row, Some(idx_component))
            .ok_or_else(|| missing_field(path, row, "Component"))?;
        let name = get_string(row, Some(idx_prop)).ok_or_else(|| missing_field(path, row, "Prop"))?;
        let prop_type = get_string(row, Some(idx_type))
            .ok_or_else(|| missing_field(path, row, "Type"))?
            .parse::<PropType>()
            .map_err(|e| invalid_value(path, row, e))?;

        let allowed_values = split_list(get_string(row, idx_allowed))
            .iter()
            .map(String::as_str)
            .map(parse_allowed_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| invalid_value(path, row, e))?;
        if prop_type == PropType::StringEnum && allowed_values.is_empty() {
            return Err(CatalogError::Csv {
                path: path.to_path_buf(),
                message: format!("{component}.{name} is an enum without allowed values"),
            });
        }

        let required = parse_yes_no(get_string(row, idx_required).as_deref());

        results.push(PropRow {
            component,
            prop: PropDescriptor {
                name,
                prop_type,
                allowed_values,
                required,
                default: get_string(row, idx_default),
                description: get_string(row, idx_description),
            },
        });
    }
    Ok(results)
}
