//! CLI command definitions.
//!
//! Each subcommand runs one of the library's exercises once and prints the
//! result to the console.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use acco_core::PlaygroundConfig;

pub mod battle;
pub mod duel;
pub mod log;
pub mod stack;
pub mod text;

/// acco - stack, battle and string exercises
#[derive(Parser)]
#[command(name = "acco")]
#[command(version, about = "acco - stack, battle and string exercises")]
#[command(long_about = r#"
Runs the acco exercises once and prints the results.

COMMANDS:
  battle     → One strike between two fresh characters
  duel       → Alternate strikes until someone is defeated
  stack      → Push values onto a stack, then pop them all
  histogram  → Character histogram of a text
  words      → Count the words in a text
  invert     → Turn "Last, First" into "First Last"
  reverse    → Reverse every word in a text
  log        → Write a line through the shared logger

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Configuration error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML or YAML config file
    #[arg(short, long, global = true, env = "ACCO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Let the first character strike the second once
    Battle(battle::BattleArgs),

    /// Alternate strikes until one character is defeated
    Duel(duel::DuelArgs),

    /// Push values onto a stack and pop them back off
    Stack(stack::StackArgs),

    /// Print a character histogram
    Histogram(text::TextArgs),

    /// Count words
    Words(text::TextArgs),

    /// Invert a "Last, First" name
    Invert(text::TextArgs),

    /// Reverse each word
    Reverse(text::TextArgs),

    /// Log a line through the shared logger
    Log(text::TextArgs),
}

/// Failure to read, parse or validate the `--config` file.
#[derive(Debug, thiserror::Error)]
#[error("Failed to load config {}", .0.display())]
pub struct ConfigLoadError(pub PathBuf);

/// Settings shared by every command.
pub struct Context {
    pub config: PlaygroundConfig,
    pub json: bool,
}

impl Context {
    pub fn load(config_path: Option<&Path>, json: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => PlaygroundConfig::from_file(path)
                .with_context(|| ConfigLoadError(path.to_path_buf()))?,
            None => PlaygroundConfig::default(),
        };
        debug!("Using config: {:?}", config);
        Ok(Self { config, json })
    }

    /// Print `value` as JSON, or fall back to the given text lines.
    pub fn emit<T: Serialize>(&self, value: &T, lines: &[String]) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            for line in lines {
                println!("{}", line);
            }
        }
        Ok(())
    }
}
