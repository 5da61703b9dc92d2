#![deny(unsafe_code)]

use std::path::Path;

use catalog_model::{Token, TokenCategory, TokenValue};

use super::{get_string, invalid_value, missing_field, read_records, required_header};
use crate::error::CatalogError;

/// Parses `tokens.csv` (`Name,Category,Value,Description`) in declaration order.
pub fn parse_tokens_csv(bytes: &[u8], path: &Path) -> Result<Vec<Token>, CatalogError> {
    let (headers, rows) = read_records(bytes, path)?;

    let idx_name = required_header(&headers, "Name", path)?;
    let idx_category = required_header(&headers, "Category", path)?;
    let idx_value = required_header(&headers, "Value", path)?;
    let idx_description = super::header_index(&headers, "Description");

    let mut tokens = Vec::with_capacity(rows.len());
    for row in &rows {
        let name = get_string(row, Some(idx_name)).ok_or_else(|| missing_field(path, row, "Name"))?;
        let category = get_string(row, Some(idx_category))
            .ok_or_else(|| missing_field(path, row, "Category"))?
            .parse::<TokenCategory>()
            .map_err(|e| invalid_value(path, row, e))?;
        let value = get_string(row, Some(idx_value))
            .ok_or_else(|| missing_field(path, row, "Value"))?;

        tokens.push(Token {
            name,
            category,
            value: TokenValue::parse(&value),
            description: get_string(row, idx_description),
        });
    }
    Ok(tokens)
}
