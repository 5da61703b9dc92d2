//! Design tokens: named, immutable design constants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;
use crate::dimension::parse_pixels;
use crate::error::ModelError;

/// Token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Color,
    Spacing,
    Typography,
    Duration,
    Elevation,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 5] = [
        TokenCategory::Color,
        TokenCategory::Spacing,
        TokenCategory::Typography,
        TokenCategory::Duration,
        TokenCategory::Elevation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Typography => "typography",
            TokenCategory::Duration => "duration",
            TokenCategory::Elevation => "elevation",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "color" | "colour" => Ok(TokenCategory::Color),
            "spacing" | "size" | "sizing" => Ok(TokenCategory::Spacing),
            "typography" | "type" => Ok(TokenCategory::Typography),
            "duration" | "motion" => Ok(TokenCategory::Duration),
            "elevation" | "shadow" => Ok(TokenCategory::Elevation),
            _ => Err(ModelError::InvalidTokenCategory(s.to_string())),
        }
    }
}

/// A token value: a number with an optional unit, or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Measure { value: f64, unit: String },
    Text(String),
}

impl TokenValue {
    /// Classify raw text from the catalog (`16px` and `200ms` are measures, `#1A73E8` is text).
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_alphabetic() || c == '%')
            .unwrap_or(trimmed.len());
        let (number, unit) = trimmed.split_at(split);
        match number.trim().parse::<f64>() {
            Ok(value) if !number.trim().is_empty() && value.is_finite() => TokenValue::Measure {
                value,
                unit: unit.trim().to_string(),
            },
            _ => TokenValue::Text(trimmed.to_string()),
        }
    }

    pub fn as_color(&self) -> Option<Rgb> {
        self.as_color_alpha().map(|(color, _)| color)
    }

    /// Color and alpha channel, if the value is a hex color.
    pub fn as_color_alpha(&self) -> Option<(Rgb, u8)> {
        match self {
            TokenValue::Text(text) => Rgb::from_hex_alpha(text),
            TokenValue::Measure { .. } => None,
        }
    }

    /// Logical pixel size, if the value is a length.
    pub fn as_pixels(&self) -> Option<f64> {
        match self {
            TokenValue::Measure { .. } => parse_pixels(&self.to_string()),
            TokenValue::Text(_) => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Measure { value, unit } => write!(f, "{value}{unit}"),
            TokenValue::Text(text) => f.write_str(text),
        }
    }
}

/// A named design constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub category: TokenCategory,
    pub value: TokenValue,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_keep_unit() {
        assert_eq!(
            TokenValue::parse("16px"),
            TokenValue::Measure {
                value: 16.0,
                unit: "px".to_string()
            }
        );
        assert_eq!(
            TokenValue::parse("1.5"),
            TokenValue::Measure {
                value: 1.5,
                unit: String::new()
            }
        );
        assert_eq!(TokenValue::parse("250ms").to_string(), "250ms");
    }

    #[test]
    fn hex_colors_are_text() {
        let value = TokenValue::parse("#1A73E8");
        assert_eq!(value, TokenValue::Text("#1A73E8".to_string()));
        assert_eq!(value.as_color(), Some(Rgb::new(0x1A, 0x73, 0xE8)));
        assert_eq!(value.as_pixels(), None);
    }

    #[test]
    fn durations_are_not_pixels() {
        assert_eq!(TokenValue::parse("150ms").as_pixels(), None);
        assert_eq!(TokenValue::parse("48dp").as_pixels(), Some(48.0));
    }

    #[test]
    fn category_aliases() {
        assert_eq!("Colour".parse::<TokenCategory>().unwrap(), TokenCategory::Color);
        assert_eq!("motion".parse::<TokenCategory>().unwrap(), TokenCategory::Duration);
        assert!("opacity".parse::<TokenCategory>().is_err());
    }
}
