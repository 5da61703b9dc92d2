//! Token Store: the immutable set of design tokens.

use std::collections::HashMap;

use catalog_model::{Rgb, Token, TokenCategory, parse_pixels};

use crate::error::CatalogError;

/// Read-only mapping from token name to token, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    tokens: Vec<Token>,
    by_name: HashMap<String, usize>,
}

impl TokenStore {
    /// Build the store, rejecting duplicate token names.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self, CatalogError> {
        let mut by_name = HashMap::with_capacity(tokens.len());
        for (idx, token) in tokens.iter().enumerate() {
            if by_name.insert(token.name.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateDefinition {
                    kind: "token",
                    identifier: token.name.clone(),
                });
            }
        }
        Ok(Self { tokens, by_name })
    }

    pub fn lookup(&self, name: &str) -> Result<&Token, CatalogError> {
        self.by_name
            .get(name)
            .map(|&idx| &self.tokens[idx])
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })
    }

    /// Tokens of one category in declaration order.
    pub fn all_of_category(&self, category: TokenCategory) -> Vec<&Token> {
        self.tokens
            .iter()
            .filter(|token| token.category == category)
            .collect()
    }

    /// Resolve a hex literal or the name of a color token.
    pub fn resolve_color(&self, reference: &str) -> Result<Rgb, CatalogError> {
        self.resolve_color_alpha(reference).map(|(color, _)| color)
    }

    /// Like [`TokenStore::resolve_color`], keeping the alpha channel.
    pub fn resolve_color_alpha(&self, reference: &str) -> Result<(Rgb, u8), CatalogError> {
        if let Some(color) = Rgb::from_hex_alpha(reference) {
            return Ok(color);
        }
        self.lookup(reference.trim())?
            .value
            .as_color_alpha()
            .ok_or_else(|| CatalogError::NotFound {
                name: reference.to_string(),
            })
    }

    /// Resolve a dimension literal or the name of a length token to logical pixels.
    pub fn resolve_pixels(&self, reference: &str) -> Result<f64, CatalogError> {
        if let Some(px) = parse_pixels(reference) {
            return Ok(px);
        }
        self.lookup(reference.trim())?
            .value
            .as_pixels()
            .ok_or_else(|| CatalogError::NotFound {
                name: reference.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
