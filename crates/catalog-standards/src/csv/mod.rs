//! Parsers for the catalog CSV extracts.
//!
//! Each parser takes the raw bytes plus the path they came from (used only
//! for error messages) so embedded and on-disk catalogs share one code path.

#![deny(unsafe_code)]

pub mod accessibility;
pub mod components;
pub mod props;
pub mod tokens;
pub mod variants;

use std::path::Path;

use catalog_model::ModelError;

use crate::error::CatalogError;

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_matches('\u{feff}').trim() == name)
}

fn required_header(
    headers: &csv::StringRecord,
    name: &str,
    path: &Path,
) -> Result<usize, CatalogError> {
    header_index(headers, name).ok_or_else(|| CatalogError::Csv {
        path: path.to_path_buf(),
        message: format!("missing header: {name}"),
    })
}

fn get_string(row: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

fn split_list(value: Option<String>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    value
        .split(';')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}

fn parse_yes_no(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("yes" | "y" | "true" | "required")
    )
}

fn read_records(
    bytes: &[u8],
    path: &Path,
) -> Result<(csv::StringRecord, Vec<csv::StringRecord>), CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| CatalogError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| CatalogError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push(row);
    }
    Ok((headers, rows))
}

fn line_of(row: &csv::StringRecord) -> u64 {
    row.position().map(|pos| pos.line()).unwrap_or_default()
}

fn invalid_value(path: &Path, row: &csv::StringRecord, source: ModelError) -> CatalogError {
    CatalogError::InvalidValue {
        path: path.to_path_buf(),
        line: line_of(row),
        source,
    }
}

fn missing_field(path: &Path, row: &csv::StringRecord, field: &str) -> CatalogError {
    CatalogError::Csv {
        path: path.to_path_buf(),
        message: format!("line {}: missing {field}", line_of(row)),
    }
}
