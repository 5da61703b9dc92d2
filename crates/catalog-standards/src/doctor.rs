#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::catalog::{Catalog, VerifySummary};
use crate::manifest::{ManifestFile, Pins};

#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorReport {
    pub schema: String,
    pub schema_version: u32,
    pub pins: Option<Pins>,
    pub files: Vec<ManifestFile>,
    pub counts: DoctorCounts,
    pub components: Vec<DoctorComponent>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorCounts {
    pub files: usize,
    pub tokens: usize,
    pub tokens_by_category: BTreeMap<String, usize>,
    pub components: usize,
    pub variants: usize,
    pub props: usize,
    pub constraints: usize,
}

/// Per-component overview, sorted by name.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorComponent {
    pub name: String,
    pub platform: String,
    pub variants: usize,
    pub props: usize,
    pub required_props: Vec<String>,
    pub constraints: usize,
}

impl DoctorReport {
    pub fn from_catalog(catalog: &Catalog, summary: &VerifySummary) -> Self {
        let components = catalog
            .registry
            .iter()
            .map(|descriptor| DoctorComponent {
                name: descriptor.name.clone(),
                platform: descriptor.platform.to_string(),
                variants: descriptor.variants.len(),
                props: descriptor.props.len(),
                required_props: descriptor
                    .props
                    .iter()
                    .filter(|prop| prop.must_be_supplied())
                    .map(|prop| prop.name.clone())
                    .collect(),
                constraints: descriptor.accessibility.len(),
            })
            .collect();

        Self {
            schema: "design-catalog.doctor".to_string(),
            schema_version: 1,
            pins: summary.manifest_pins.clone(),
            files: catalog.files.clone(),
            counts: DoctorCounts {
                files: summary.file_count,
                tokens: summary.token_count,
                tokens_by_category: summary.tokens_by_category.clone(),
                components: summary.component_count,
                variants: summary.variant_count,
                props: summary.prop_count,
                constraints: summary.constraint_count,
            },
            components,
        }
    }
}
