//! design-catalog CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use catalog_cli::exit;
use catalog_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_components, run_describe, run_tokens, run_validate, run_verify};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(exit::ERROR);
    }

    let catalog_dir = cli.catalog.as_deref();
    let outcome = match &cli.command {
        Command::Validate(args) => run_validate(args, catalog_dir),
        Command::Verify(args) => run_verify(args.dir.as_deref(), catalog_dir).map(|()| true),
        Command::Tokens(args) => {
            run_tokens(args.category.map(Into::into), catalog_dir).map(|()| true)
        }
        Command::Components => run_components(catalog_dir).map(|()| true),
        Command::Describe(args) => run_describe(&args.component, catalog_dir).map(|()| true),
    };

    if let Err(error) = &outcome {
        eprintln!("error: {error:#}");
    }
    std::process::exit(exit::code_for(&outcome));
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
