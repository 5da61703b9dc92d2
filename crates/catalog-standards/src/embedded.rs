//! Embedded default catalog.
//!
//! The catalog CSVs are compiled in with `include_str!()` so the CLI and the
//! tests can build a catalog without touching the filesystem.

pub const MANIFEST: &str = include_str!("../data/manifest.toml");

pub const TOKENS: &str = include_str!("../data/tokens.csv");

pub const COMPONENTS: &str = include_str!("../data/components.csv");

pub const VARIANTS: &str = include_str!("../data/variants.csv");

pub const PROPS: &str = include_str!("../data/props.csv");

pub const ACCESSIBILITY: &str = include_str!("../data/accessibility.csv");
