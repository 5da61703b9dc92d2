//! Rendering of validation results.
//!
//! - [`render`]: one result as a `PASS`/`FAIL` line with numbered violations
//! - [`render_reports`]: a batch with source locations and a summary line
//! - [`render_json`]: machine-readable output for tooling

mod json;
mod summary;
mod text;

pub use json::render_json;
pub use summary::Summary;
pub use text::{render, render_reports};
