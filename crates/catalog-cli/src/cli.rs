//! CLI argument definitions for `design-catalog`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use catalog_model::{Platform, TokenCategory};

#[derive(Parser)]
#[command(
    name = "design-catalog",
    version,
    about = "Validate UI component usages against the design catalog",
    long_about = "Validate UI component usages against the design catalog.\n\n\
                  Checks component names, variants, props, required props and\n\
                  accessibility metrics against the documented tokens and components."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Catalog directory with manifest.toml (default: $DESIGN_CATALOG_DIR, then the built-in catalog).
    #[arg(long = "catalog", value_name = "DIR", global = true)]
    pub catalog: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate component usages from one or more JSON files.
    Validate(ValidateArgs),

    /// Verify a catalog directory against its manifest and print a doctor report.
    Verify(VerifyArgs),

    /// List design tokens in declaration order.
    Tokens(TokensArgs),

    /// List documented components.
    Components,

    /// Show props, variants and accessibility constraints of one component.
    Describe(DescribeArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// JSON files holding an array of usages or an object with an `elements` array.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Platform context for usages that do not name one.
    #[arg(long = "platform", value_enum)]
    pub platform: Option<PlatformArg>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct VerifyArgs {
    /// Catalog directory (default: --catalog, $DESIGN_CATALOG_DIR, then the shipped data directory).
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TokensArgs {
    /// Only list tokens of this category.
    #[arg(long = "category", value_enum)]
    pub category: Option<CategoryArg>,
}

#[derive(Parser)]
pub struct DescribeArgs {
    /// Component name, e.g. Button.
    #[arg(value_name = "COMPONENT")]
    pub component: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PlatformArg {
    Mobile,
    Web,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Mobile => Platform::Mobile,
            PlatformArg::Web => Platform::Web,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Color,
    Spacing,
    Typography,
    Duration,
    Elevation,
}

impl From<CategoryArg> for TokenCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Color => TokenCategory::Color,
            CategoryArg::Spacing => TokenCategory::Spacing,
            CategoryArg::Typography => TokenCategory::Typography,
            CategoryArg::Duration => TokenCategory::Duration,
            CategoryArg::Elevation => TokenCategory::Elevation,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
