//! Component Descriptor Registry.
//!
//! Built once from the catalog extracts and never mutated afterwards.
//! Construction is the only place integrity is enforced: duplicate component
//! names and duplicate variant names within a component are rejected.

#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use catalog_model::{ComponentDescriptor, VariantDescriptor};

use crate::csv::accessibility::ConstraintRow;
use crate::csv::components::ComponentRow;
use crate::csv::props::PropRow;
use crate::csv::variants::VariantRow;
use crate::error::CatalogError;

#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<String, ComponentDescriptor>,
}

impl ComponentRegistry {
    /// Build the registry from fully formed descriptors.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = ComponentDescriptor>,
    ) -> Result<Self, CatalogError> {
        let mut components = BTreeMap::new();
        for descriptor in descriptors {
            check_unique_variants(&descriptor)?;
            if components.contains_key(&descriptor.name) {
                return Err(CatalogError::DuplicateDefinition {
                    kind: "component",
                    identifier: descriptor.name,
                });
            }
            components.insert(descriptor.name.clone(), descriptor);
        }
        Ok(Self { components })
    }

    /// Assemble descriptors from the per-file rows and build the registry.
    pub fn from_rows(
        components: Vec<ComponentRow>,
        variants: Vec<VariantRow>,
        props: Vec<PropRow>,
        constraints: Vec<ConstraintRow>,
    ) -> Result<Self, CatalogError> {
        let mut order: Vec<String> = Vec::with_capacity(components.len());
        let mut by_name: BTreeMap<String, ComponentDescriptor> = BTreeMap::new();

        for row in components {
            if by_name.contains_key(&row.name) {
                return Err(CatalogError::DuplicateDefinition {
                    kind: "component",
                    identifier: row.name,
                });
            }
            order.push(row.name.clone());
            by_name.insert(
                row.name.clone(),
                ComponentDescriptor {
                    name: row.name,
                    platform: row.platform,
                    description: row.description,
                    variants: Vec::new(),
                    props: Vec::new(),
                    states: row.states,
                    accessibility: Vec::new(),
                },
            );
        }

        for row in variants {
            let descriptor = declared(&mut by_name, &row.component, "variants")?;
            descriptor.variants.push(row.variant);
        }
        for row in props {
            let descriptor = declared(&mut by_name, &row.component, "props")?;
            descriptor.props.push(row.prop);
        }
        for row in constraints {
            let descriptor = declared(&mut by_name, &row.component, "accessibility")?;
            descriptor.accessibility.push(row.constraint);
        }

        Self::from_descriptors(order.into_iter().filter_map(|name| by_name.remove(&name)))
    }

    pub fn describe(&self, name: &str) -> Result<&ComponentDescriptor, CatalogError> {
        self.components
            .get(name)
            .ok_or_else(|| CatalogError::UnknownComponent {
                name: name.to_string(),
            })
    }

    pub fn variants_for(&self, name: &str) -> Result<&[VariantDescriptor], CatalogError> {
        self.describe(name)
            .map(|descriptor| descriptor.variants.as_slice())
    }

    pub fn get(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Component names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.components.values()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

fn declared<'a>(
    by_name: &'a mut BTreeMap<String, ComponentDescriptor>,
    component: &str,
    role: &str,
) -> Result<&'a mut ComponentDescriptor, CatalogError> {
    by_name
        .get_mut(component)
        .ok_or_else(|| CatalogError::UndeclaredComponent {
            role: role.to_string(),
            component: component.to_string(),
        })
}

fn check_unique_variants(descriptor: &ComponentDescriptor) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for variant in &descriptor.variants {
        if !seen.insert(variant.name.as_str()) {
            return Err(CatalogError::DuplicateDefinition {
                kind: "variant",
                identifier: format!("{}.{}", descriptor.name, variant.name),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::Platform;

    fn descriptor(name: &str, variants: &[&str]) -> ComponentDescriptor {
        ComponentDescriptor {
            name: name.to_string(),
            platform: Platform::Both,
            description: None,
            variants: variants
                .iter()
                .map(|v| VariantDescriptor {
                    name: v.to_string(),
                    description: None,
                    platform: Platform::Both,
                })
                .collect(),
            props: vec![],
            states: vec![],
            accessibility: vec![],
        }
    }

    #[test]
    fn duplicate_component_names_the_component() {
        let err = ComponentRegistry::from_descriptors(vec![
            descriptor("Button", &["primary"]),
            descriptor("Button", &["secondary"]),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate component definition: Button");
    }

    #[test]
    fn duplicate_variant_names_component_and_variant() {
        let err =
            ComponentRegistry::from_descriptors(vec![descriptor("Badge", &["info", "info"])])
                .unwrap_err();
        assert_eq!(err.to_string(), "duplicate variant definition: Badge.info");
    }

    #[test]
    fn same_variant_name_on_different_components_is_fine() {
        let registry = ComponentRegistry::from_descriptors(vec![
            descriptor("Badge", &["info"]),
            descriptor("Toast", &["info"]),
        ])
        .unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.variants_for("Toast").unwrap()[0].name, "info");
    }

    #[test]
    fn describe_unknown_component() {
        let registry = ComponentRegistry::from_descriptors(vec![descriptor("Card", &[])]).unwrap();
        assert!(matches!(
            registry.describe("SuperButton"),
            Err(CatalogError::UnknownComponent { .. })
        ));
        assert!(registry.variants_for("SuperButton").is_err());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Card"]);
    }
}
