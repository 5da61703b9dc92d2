//! Component descriptors: variants, props and accessibility constraints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::platform::Platform;

/// A named stylistic or behavioral mode of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDescriptor {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub platform: Platform,
}

/// Declared type of a prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropType {
    /// One of a closed set of strings.
    StringEnum,
    Boolean,
    Number,
    /// Free text.
    String,
    /// Name of a handler (`onPress`, `onClick`).
    FunctionReference,
    /// Name of another catalog component (icons, leading/trailing slots).
    ComponentReference,
}

impl PropType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropType::StringEnum => "string-enum",
            PropType::Boolean => "boolean",
            PropType::Number => "number",
            PropType::String => "string",
            PropType::FunctionReference => "function-reference",
            PropType::ComponentReference => "component-reference",
        }
    }
}

impl fmt::Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enum" | "string-enum" => Ok(PropType::StringEnum),
            "boolean" | "bool" => Ok(PropType::Boolean),
            "number" => Ok(PropType::Number),
            "string" | "text" => Ok(PropType::String),
            "function" | "function-reference" => Ok(PropType::FunctionReference),
            "component" | "component-reference" | "node" => Ok(PropType::ComponentReference),
            _ => Err(ModelError::InvalidPropType(s.to_string())),
        }
    }
}

/// An allowed enum value, optionally restricted to one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedValue {
    pub value: String,
    #[serde(default)]
    pub platform: Platform,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropDescriptor {
    pub name: String,
    pub prop_type: PropType,
    #[serde(default)]
    pub allowed_values: Vec<AllowedValue>,
    #[serde(default)]
    pub required: bool,
    /// Default stated by the documentation, if any.
    pub default: Option<String>,
    pub description: Option<String>,
}

impl PropDescriptor {
    /// Allowed enum values admitted in a platform context, in declaration order.
    pub fn allowed_in(&self, context: Option<Platform>) -> Vec<&str> {
        self.allowed_values
            .iter()
            .filter(|allowed| allowed.platform.admits(context))
            .map(|allowed| allowed.value.as_str())
            .collect()
    }

    /// A required prop without a documented default must be supplied.
    pub fn must_be_supplied(&self) -> bool {
        self.required && self.default.is_none()
    }
}

/// When an accessibility constraint applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintScope {
    #[default]
    Always,
    /// Only when the usage wires up a function-reference prop.
    Interactive,
}

impl FromStr for ConstraintScope {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "always" => Ok(ConstraintScope::Always),
            "interactive" => Ok(ConstraintScope::Interactive),
            _ => Err(ModelError::InvalidConstraintScope(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ConstraintKind {
    MinTouchTarget { min_px: f64 },
    ContrastRatio { min_ratio: f64 },
    AriaAttributeRequired { attribute: String },
}

impl ConstraintKind {
    /// Build a constraint from the catalog's `Kind` and `Threshold` columns.
    pub fn parse(kind: &str, threshold: &str) -> Result<Self, ModelError> {
        let kind_norm = kind.trim().to_ascii_lowercase();
        let invalid = || ModelError::InvalidThreshold {
            kind: kind_norm.clone(),
            value: threshold.to_string(),
        };
        match kind_norm.as_str() {
            "min-touch-target" => {
                let min_px = crate::dimension::parse_pixels(threshold).ok_or_else(invalid)?;
                Ok(ConstraintKind::MinTouchTarget { min_px })
            }
            "contrast-ratio" => {
                let min_ratio = threshold
                    .trim()
                    .trim_end_matches(":1")
                    .parse::<f64>()
                    .map_err(|_| invalid())?;
                Ok(ConstraintKind::ContrastRatio { min_ratio })
            }
            "aria-attribute-required" => {
                let attribute = threshold.trim();
                if attribute.is_empty() {
                    return Err(invalid());
                }
                Ok(ConstraintKind::AriaAttributeRequired {
                    attribute: attribute.to_string(),
                })
            }
            _ => Err(ModelError::InvalidConstraintKind(kind.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConstraintKind::MinTouchTarget { .. } => "min-touch-target",
            ConstraintKind::ContrastRatio { .. } => "contrast-ratio",
            ConstraintKind::AriaAttributeRequired { .. } => "aria-attribute-required",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityConstraint {
    #[serde(flatten)]
    pub kind: ConstraintKind,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub scope: ConstraintScope,
}

/// Structured metadata for one documented component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub name: String,
    pub platform: Platform,
    pub description: Option<String>,
    pub variants: Vec<VariantDescriptor>,
    pub props: Vec<PropDescriptor>,
    pub states: Vec<String>,
    pub accessibility: Vec<AccessibilityConstraint>,
}

impl ComponentDescriptor {
    pub fn prop(&self, name: &str) -> Option<&PropDescriptor> {
        self.props.iter().find(|prop| prop.name == name)
    }

    pub fn variant(&self, name: &str) -> Option<&VariantDescriptor> {
        self.variants.iter().find(|variant| variant.name == name)
    }

    /// Variant names admitted in a platform context, in declaration order.
    pub fn variants_in(&self, context: Option<Platform>) -> Vec<&str> {
        self.variants
            .iter()
            .filter(|variant| variant.platform.admits(context))
            .map(|variant| variant.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_kinds_parse_thresholds() {
        assert_eq!(
            ConstraintKind::parse("min-touch-target", "44pt").unwrap(),
            ConstraintKind::MinTouchTarget { min_px: 44.0 }
        );
        assert_eq!(
            ConstraintKind::parse("Contrast-Ratio", "4.5:1").unwrap(),
            ConstraintKind::ContrastRatio { min_ratio: 4.5 }
        );
        assert_eq!(
            ConstraintKind::parse("aria-attribute-required", "aria-label").unwrap(),
            ConstraintKind::AriaAttributeRequired {
                attribute: "aria-label".to_string()
            }
        );
        assert!(ConstraintKind::parse("min-touch-target", "big").is_err());
        assert!(matches!(
            ConstraintKind::parse("focus-ring", "2px"),
            Err(ModelError::InvalidConstraintKind(_))
        ));
    }

    #[test]
    fn allowed_values_filter_by_platform() {
        let prop = PropDescriptor {
            name: "size".to_string(),
            prop_type: PropType::StringEnum,
            allowed_values: vec![
                AllowedValue {
                    value: "small".to_string(),
                    platform: Platform::Both,
                },
                AllowedValue {
                    value: "compact".to_string(),
                    platform: Platform::Web,
                },
            ],
            required: false,
            default: None,
            description: None,
        };
        assert_eq!(prop.allowed_in(None), vec!["small"]);
        assert_eq!(prop.allowed_in(Some(Platform::Web)), vec!["small", "compact"]);
    }

    #[test]
    fn documented_default_satisfies_required() {
        let prop = PropDescriptor {
            name: "padding".to_string(),
            prop_type: PropType::StringEnum,
            allowed_values: vec![],
            required: true,
            default: Some("medium".to_string()),
            description: None,
        };
        assert!(!prop.must_be_supplied());
    }
}
