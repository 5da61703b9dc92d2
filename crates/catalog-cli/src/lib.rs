//! Library components of the `design-catalog` CLI.

pub mod exit;
pub mod input;
pub mod logging;
pub mod source;
