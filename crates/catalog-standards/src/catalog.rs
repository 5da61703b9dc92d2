#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

use catalog_model::TokenCategory;
use tracing::{debug, info};

use crate::csv::accessibility::parse_accessibility_csv;
use crate::csv::components::parse_components_csv;
use crate::csv::props::parse_props_csv;
use crate::csv::tokens::parse_tokens_csv;
use crate::csv::variants::parse_variants_csv;
use crate::embedded;
use crate::error::CatalogError;
use crate::hash::sha256_hex;
use crate::manifest::{Manifest, ManifestFile, Pins};
use crate::registry::ComponentRegistry;
use crate::tokens::TokenStore;

pub const MANIFEST_SCHEMA: &str = "design-catalog.manifest";

const REQUIRED_ROLES: &[&str] = &["tokens", "components", "variants", "props", "accessibility"];

const ALLOWED_KINDS: &[&str] = &["csv", "md", "other"];

/// Raw CSV text for each catalog role.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSources<'a> {
    pub tokens: &'a str,
    pub components: &'a str,
    pub variants: &'a str,
    pub props: &'a str,
    pub accessibility: &'a str,
}

impl CatalogSources<'static> {
    pub fn builtin() -> Self {
        Self {
            tokens: embedded::TOKENS,
            components: embedded::COMPONENTS,
            variants: embedded::VARIANTS,
            props: embedded::PROPS,
            accessibility: embedded::ACCESSIBILITY,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct VerifySummary {
    pub catalog_dir: Option<PathBuf>,
    pub manifest_pins: Option<Pins>,
    pub file_count: usize,
    pub token_count: usize,
    pub tokens_by_category: BTreeMap<String, usize>,
    pub component_count: usize,
    pub variant_count: usize,
    pub prop_count: usize,
    pub constraint_count: usize,
}

/// The loaded Token Store and Component Registry.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub manifest: Option<Manifest>,
    pub files: Vec<ManifestFile>,
    pub tokens: TokenStore,
    pub registry: ComponentRegistry,
}

impl Catalog {
    /// Verify a catalog directory against its `manifest.toml` and load it.
    pub fn verify_and_load(catalog_dir: &Path) -> Result<(Self, VerifySummary), CatalogError> {
        let manifest = load_manifest(&catalog_dir.join("manifest.toml"))?;

        validate_manifest(&manifest, catalog_dir)?;

        let mut files = manifest.files.clone();
        files.sort_by(|a, b| a.path.cmp(&b.path));

        let mut contents: BTreeMap<String, (PathBuf, Vec<u8>)> = BTreeMap::new();
        for file in &files {
            let (path, bytes) = verify_file(catalog_dir, file)?;
            debug!(path = %path.display(), role = %file.role, "verified catalog file");
            contents.insert(file.role.clone(), (path, bytes));
        }

        let (tokens_path, tokens) = role_contents(&contents, "tokens")?;
        let (components_path, components) = role_contents(&contents, "components")?;
        let (variants_path, variants) = role_contents(&contents, "variants")?;
        let (props_path, props) = role_contents(&contents, "props")?;
        let (accessibility_path, accessibility) = role_contents(&contents, "accessibility")?;

        let tokens = TokenStore::from_tokens(parse_tokens_csv(tokens, tokens_path)?)?;
        let registry = ComponentRegistry::from_rows(
            parse_components_csv(components, components_path)?,
            parse_variants_csv(variants, variants_path)?,
            parse_props_csv(props, props_path)?,
            parse_accessibility_csv(accessibility, accessibility_path)?,
        )?;

        let catalog = Self {
            manifest: Some(manifest),
            files,
            tokens,
            registry,
        };
        let summary = catalog.summary(Some(catalog_dir));
        info!(
            catalog_dir = %catalog_dir.display(),
            tokens = summary.token_count,
            components = summary.component_count,
            "catalog verified and loaded"
        );
        Ok((catalog, summary))
    }

    /// Build the catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        let origin = Path::new("<builtin>/manifest.toml");
        let manifest: Manifest =
            toml::from_str(embedded::MANIFEST).map_err(|e| CatalogError::Toml {
                path: origin.to_path_buf(),
                source: e,
            })?;
        let mut catalog = Self::from_csv_sources(CatalogSources::builtin())?;
        catalog.files = manifest.files.clone();
        catalog.manifest = Some(manifest);
        Ok(catalog)
    }

    /// Build a catalog from in-memory CSV text without a manifest.
    pub fn from_csv_sources(sources: CatalogSources<'_>) -> Result<Self, CatalogError> {
        let origin = |name: &str| PathBuf::from(format!("<builtin>/{name}.csv"));

        let tokens = TokenStore::from_tokens(parse_tokens_csv(
            sources.tokens.as_bytes(),
            &origin("tokens"),
        )?)?;
        let registry = ComponentRegistry::from_rows(
            parse_components_csv(sources.components.as_bytes(), &origin("components"))?,
            parse_variants_csv(sources.variants.as_bytes(), &origin("variants"))?,
            parse_props_csv(sources.props.as_bytes(), &origin("props"))?,
            parse_accessibility_csv(sources.accessibility.as_bytes(), &origin("accessibility"))?,
        )?;
        debug!(
            tokens = tokens.len(),
            components = registry.len(),
            "catalog built from sources"
        );

        Ok(Self {
            manifest: None,
            files: Vec::new(),
            tokens,
            registry,
        })
    }

    pub fn summary(&self, catalog_dir: Option<&Path>) -> VerifySummary {
        let mut tokens_by_category = BTreeMap::new();
        for category in TokenCategory::ALL {
            tokens_by_category.insert(
                category.as_str().to_string(),
                self.tokens.all_of_category(category).len(),
            );
        }
        VerifySummary {
            catalog_dir: catalog_dir.map(Path::to_path_buf),
            manifest_pins: self.manifest.as_ref().map(|m| m.pins.clone()),
            file_count: self.files.len(),
            token_count: self.tokens.len(),
            tokens_by_category,
            component_count: self.registry.len(),
            variant_count: self.registry.iter().map(|c| c.variants.len()).sum(),
            prop_count: self.registry.iter().map(|c| c.props.len()).sum(),
            constraint_count: self.registry.iter().map(|c| c.accessibility.len()).sum(),
        }
    }
}

fn role_contents<'a>(
    contents: &'a BTreeMap<String, (PathBuf, Vec<u8>)>,
    role: &str,
) -> Result<&'a (PathBuf, Vec<u8>), CatalogError> {
    contents.get(role).ok_or_else(|| CatalogError::MissingRole {
        role: role.to_string(),
    })
}

fn load_manifest(path: &Path) -> Result<Manifest, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| CatalogError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

fn validate_manifest(manifest: &Manifest, catalog_dir: &Path) -> Result<(), CatalogError> {
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(CatalogError::InvalidManifest {
            message: format!("unsupported schema: {}", manifest.manifest.schema),
        });
    }
    if manifest.manifest.schema_version != 1 {
        return Err(CatalogError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                manifest.manifest.schema_version
            ),
        });
    }

    let mut roles: BTreeSet<&str> = BTreeSet::new();
    let mut manifest_paths: BTreeSet<PathBuf> = BTreeSet::new();

    for file in &manifest.files {
        if !roles.insert(file.role.as_str()) {
            return Err(CatalogError::DuplicateRole {
                role: file.role.clone(),
            });
        }

        if !ALLOWED_KINDS.contains(&file.kind.as_str()) {
            return Err(CatalogError::InvalidManifest {
                message: format!("unsupported kind '{}' for {}", file.kind, file.path),
            });
        }

        validate_sha(&file.sha256, &file.path)?;

        let path = validate_path(&file.path)?;
        manifest_paths.insert(normalize_path(&path));
    }

    for role in REQUIRED_ROLES {
        if !roles.contains(role) {
            return Err(CatalogError::MissingRole {
                role: role.to_string(),
            });
        }
    }

    for path in list_files_under(catalog_dir)? {
        if path == Path::new("manifest.toml") {
            continue;
        }
        if !manifest_paths.contains(&normalize_path(&path)) {
            return Err(CatalogError::UnexpectedFile {
                path: catalog_dir.join(path),
            });
        }
    }

    Ok(())
}

fn verify_file(
    catalog_dir: &Path,
    file: &ManifestFile,
) -> Result<(PathBuf, Vec<u8>), CatalogError> {
    let full_path = catalog_dir.join(&file.path);
    let bytes = std::fs::read(&full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::MissingFile {
                path: full_path.clone(),
            }
        } else {
            CatalogError::io(full_path.clone(), e)
        }
    })?;

    let actual = sha256_hex(&bytes);
    let expected = file.sha256.to_ascii_lowercase();
    if actual != expected {
        return Err(CatalogError::Sha256Mismatch {
            path: full_path,
            expected,
            actual,
        });
    }
    Ok((full_path, bytes))
}

fn validate_sha(sha: &str, path: &str) -> Result<(), CatalogError> {
    if sha.len() != 64 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CatalogError::InvalidSha256 {
            path: PathBuf::from(path),
            message: "sha256 must be 64 hex characters".to_string(),
        });
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<PathBuf, CatalogError> {
    if path.contains('\\') {
        return Err(CatalogError::InvalidPath {
            path: PathBuf::from(path),
            message: "manifest path must use '/' separators".to_string(),
        });
    }

    let p = PathBuf::from(path);
    if p.is_absolute() {
        return Err(CatalogError::InvalidPath {
            path: p,
            message: "manifest path must be relative".to_string(),
        });
    }

    if p.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(CatalogError::InvalidPath {
            path: p,
            message: "manifest path must not traverse out of the catalog directory".to_string(),
        });
    }

    Ok(p)
}

fn list_files_under(root: &Path) -> Result<BTreeSet<PathBuf>, CatalogError> {
    let mut stack = vec![root.to_path_buf()];
    let mut files = BTreeSet::new();

    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).map_err(|e| CatalogError::io(&dir, e))? {
            let entry = entry.map_err(|e| CatalogError::io(&dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.is_file() {
                let rel = path
                    .strip_prefix(root)
                    .map_err(|e| CatalogError::InvalidPath {
                        path: path.clone(),
                        message: format!("failed to relativize path: {e}"),
                    })?
                    .to_path_buf();
                files.insert(rel);
            }
        }
    }

    Ok(files)
}

fn normalize_path(p: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in p.components() {
        match c {
            Component::CurDir => {}
            _ => out.push(c.as_os_str()),
        }
    }
    out
}
