//! Violation types.
//!
//! Each variant carries only the data its message needs; codes and
//! categories are derived from the variant.

use serde::{Deserialize, Serialize};

use catalog_model::{Platform, PropType, Rgb};

use crate::rules::Category;

/// What an invalid prop value should have been.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Expected {
    /// One of the values admitted in the usage's platform context.
    OneOf(Vec<String>),
    /// A JSON value of the declared prop type.
    Type(PropType),
    /// The name of a component in the catalog.
    Component,
    /// The variant already chosen through the usage's `variant` field.
    SameAs(String),
}

/// Kind of token a metric must reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Length,
    Color,
}

impl MetricKind {
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Length => "length",
            MetricKind::Color => "color",
        }
    }
}

/// The measured failure behind an accessibility violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "kebab-case")]
pub enum Finding {
    /// `dimension` is `width` or `height`.
    TouchTarget {
        dimension: String,
        actual_px: f64,
        min_px: f64,
    },
    Contrast {
        foreground: Rgb,
        background: Rgb,
        ratio: f64,
        min_ratio: f64,
    },
    MissingAria { attribute: String },
}

/// A single conformance failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Violation {
    // Resolution
    /// Component name is not in the registry
    UnknownComponent { component: String },

    // Props
    /// Prop (or variant) the component does not declare
    UnknownProp { component: String, prop: String },
    /// Prop value outside the declared set or of the wrong type
    InvalidPropValue {
        component: String,
        prop: String,
        /// JSON rendering of the supplied value.
        value: String,
        expected: Expected,
    },

    // Presence
    /// Required prop without a documented default was not supplied
    MissingRequiredProp { component: String, prop: String },

    // Accessibility
    /// A supplied metric fails a documented accessibility constraint
    AccessibilityViolation {
        component: String,
        platform: Platform,
        finding: Finding,
    },
    /// A metric names a token that does not exist or has the wrong kind
    NotFound {
        component: String,
        metric: String,
        reference: String,
        expected: MetricKind,
    },
}

impl Violation {
    /// Taxonomy name.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::UnknownComponent { .. } => "UnknownComponent",
            Violation::UnknownProp { .. } => "UnknownProp",
            Violation::InvalidPropValue { .. } => "InvalidPropValue",
            Violation::MissingRequiredProp { .. } => "MissingRequiredProp",
            Violation::AccessibilityViolation { .. } => "AccessibilityViolation",
            Violation::NotFound { .. } => "NotFound",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Violation::UnknownComponent { .. } => Category::Resolution,
            Violation::UnknownProp { .. } => Category::Props,
            Violation::InvalidPropValue { .. } => Category::Props,
            Violation::MissingRequiredProp { .. } => Category::Presence,
            Violation::AccessibilityViolation { .. } => Category::Accessibility,
            Violation::NotFound { .. } => Category::Accessibility,
        }
    }

    /// Component named by the usage (every violation has one).
    pub fn component(&self) -> &str {
        match self {
            Violation::UnknownComponent { component } => component,
            Violation::UnknownProp { component, .. } => component,
            Violation::InvalidPropValue { component, .. } => component,
            Violation::MissingRequiredProp { component, .. } => component,
            Violation::AccessibilityViolation { component, .. } => component,
            Violation::NotFound { component, .. } => component,
        }
    }

    /// Prop the violation is about, if any.
    pub fn prop(&self) -> Option<&str> {
        match self {
            Violation::UnknownProp { prop, .. }
            | Violation::InvalidPropValue { prop, .. }
            | Violation::MissingRequiredProp { prop, .. } => Some(prop),
            _ => None,
        }
    }

    /// Format message with violation-specific data.
    pub fn message(&self) -> String {
        match self {
            Violation::UnknownComponent { component } => {
                format!("unknown component: {component}")
            }

            Violation::UnknownProp { component, prop } => {
                format!("{component} has no prop '{prop}'")
            }

            Violation::InvalidPropValue {
                component,
                prop,
                value,
                expected,
            } => match expected {
                Expected::OneOf(allowed) => format!(
                    "{component}.{prop}: {value} is not one of {{{}}}",
                    allowed.join(", ")
                ),
                Expected::Type(prop_type) => {
                    format!("{component}.{prop}: {value} is not a {prop_type} value")
                }
                Expected::Component => {
                    format!("{component}.{prop}: {value} is not a catalog component")
                }
                Expected::SameAs(chosen) => format!(
                    "{component}.{prop}: {value} conflicts with the chosen variant {chosen}"
                ),
            },

            Violation::MissingRequiredProp { component, prop } => {
                format!("{component} is missing required prop '{prop}'")
            }

            Violation::AccessibilityViolation {
                component, finding, ..
            } => match finding {
                Finding::TouchTarget {
                    dimension,
                    actual_px,
                    min_px,
                } => format!(
                    "{component} {dimension} {actual_px}px is below the minimum touch target of {min_px}px"
                ),
                Finding::Contrast {
                    foreground,
                    background,
                    ratio,
                    min_ratio,
                } => format!(
                    "{component} contrast ratio {ratio:.2}:1 ({foreground} on {background}) is below the minimum {min_ratio}:1"
                ),
                Finding::MissingAria { attribute } => {
                    format!("{component} is missing required ARIA attribute {attribute}")
                }
            },

            Violation::NotFound {
                component,
                metric,
                reference,
                expected,
            } => format!(
                "{component} metrics.{metric}: '{reference}' is neither a literal nor a {} token",
                expected.label()
            ),
        }
    }
}
