#![deny(unsafe_code)]

pub mod catalog;
pub mod csv;
pub mod doctor;
pub mod embedded;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod paths;
pub mod registry;
pub mod shared;
pub mod tokens;

pub use crate::catalog::{Catalog, CatalogSources, VerifySummary};
pub use crate::doctor::DoctorReport;
pub use crate::error::CatalogError;
pub use crate::paths::{CATALOG_ENV_VAR, catalog_root};
pub use crate::registry::ComponentRegistry;
pub use crate::shared::SharedCatalog;
pub use crate::tokens::TokenStore;
