//! Candidate usages: concrete component instantiations to be checked.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::platform::Platform;

/// A size metric as exported by design tools: a bare number or text
/// (`"44px"`, `"2.75rem"`, or a token name such as `"size.touch-target"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(value) => write!(f, "{value}"),
            MetricValue::Text(text) => f.write_str(text),
        }
    }
}

/// Sizing, color and ARIA information supplied alongside a usage.
///
/// Every field is optional; accessibility checks only run on what is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageMetrics {
    #[serde(default)]
    pub width: Option<MetricValue>,
    #[serde(default)]
    pub height: Option<MetricValue>,
    /// Hex color or color token name.
    #[serde(default)]
    pub foreground: Option<String>,
    /// Hex color or color token name.
    #[serde(default)]
    pub background: Option<String>,
    /// ARIA attributes present on the rendered element.
    #[serde(default)]
    pub aria: Option<BTreeMap<String, String>>,
}

/// A concrete instantiation of a catalog component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateUsage {
    pub component: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Prop values in input order.
    #[serde(default)]
    pub props: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<UsageMetrics>,
    /// Where the usage came from (file and JSON pointer, design-file node id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl CandidateUsage {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            variant: None,
            props: Map::new(),
            platform: None,
            metrics: None,
            location: None,
        }
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn with_metrics(mut self, metrics: UsageMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
