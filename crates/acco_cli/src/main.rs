//! acco CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Configuration error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands, ConfigLoadError, Context};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const CONFIG_ERROR: u8 = 3;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = log_filter(cli.verbose, cli.quiet);
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = Context::load(cli.config.as_deref(), cli.json).and_then(|ctx| match cli.command {
        Commands::Battle(args) => commands::battle::execute(args, &ctx),
        Commands::Duel(args) => commands::duel::execute(args, &ctx),
        Commands::Stack(args) => commands::stack::execute(args, &ctx),
        Commands::Histogram(args) => commands::text::histogram(args, &ctx),
        Commands::Words(args) => commands::text::words(args, &ctx),
        Commands::Invert(args) => commands::text::invert(args, &ctx),
        Commands::Reverse(args) => commands::text::reverse(args, &ctx),
        Commands::Log(args) => commands::log::execute(args, &ctx),
    });

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Build the log filter. `RUST_LOG` wins unless `--verbose` or `--quiet` is given.
fn log_filter(verbose: bool, quiet: bool) -> EnvFilter {
    let level = if verbose {
        "acco=debug"
    } else if quiet {
        "acco=warn"
    } else {
        "acco=info"
    };

    match EnvFilter::try_from_default_env() {
        Ok(filter) if !verbose && !quiet => filter,
        _ => EnvFilter::new(format!("warn,{}", level)),
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    use acco_core::CoreError;

    if e.downcast_ref::<ConfigLoadError>().is_some() {
        return ExitCodes::CONFIG_ERROR;
    }

    match e.downcast_ref::<CoreError>() {
        Some(CoreError::InvalidConfig { .. } | CoreError::Toml(_) | CoreError::Yaml(_)) => {
            ExitCodes::CONFIG_ERROR
        }
        Some(CoreError::UnknownCharacterKind(_) | CoreError::InvalidName(_)) => ExitCodes::INVALID_ARGS,
        _ => ExitCodes::GENERAL_ERROR,
    }
}
