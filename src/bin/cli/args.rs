//! CLI Argument Structures
//!
//! Argument definitions and command structures for the errknow binary.

use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use errknow::OutputFormat;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Look up OS error numbers and names
#[derive(Parser)]
#[command(name = "errknow")]
#[command(version = VERSION)]
#[command(about = "Look up OS error numbers and names, with suggestions for typos")]
#[command(long_about = "
Resolve error numbers or symbolic names to their code, name and description.
Names that are not found get \"did you mean\" suggestions.

Common Usage:

  # Look up by number or by name
  errknow 2 EACCES

  # List every error known on this platform
  errknow

  # Aligned columns with a header
  errknow --format aligned ENOENT EPERM

  # A typo gets suggestions on stderr
  errknow ENOENTZZZ
")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub lookup: LookupArgs,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate an errknow configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

#[derive(Args, Default)]
pub struct LookupArgs {
    /// Error numbers or names to look up (every known error when omitted)
    #[arg(
        value_name = "ERROR",
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub tokens: Vec<OsString>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub matching: MatchingArgs,
}

/// Output formatting overrides
#[derive(Args, Default)]
pub struct OutputArgs {
    /// Row format for found errors
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Do not print a column header
    #[arg(long)]
    pub no_header: bool,

    /// Highlight names and headers with colors
    #[arg(long)]
    pub color: bool,
}

/// Suggestion tuning overrides
#[derive(Args, Default)]
pub struct MatchingArgs {
    /// Do not suggest similar names for unknown ones
    #[arg(long)]
    pub no_suggest: bool,

    /// Names shorter than this never get suggestions [default: 4]
    #[arg(long)]
    pub min_len: Option<usize>,

    /// Largest edit distance for a suggestion [default: 2]
    #[arg(long)]
    pub max_distance: Option<usize>,

    /// Show at most this many suggestions
    #[arg(long)]
    pub max_suggestions: Option<usize>,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".errknow.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to configuration file to validate
    #[arg(short, long, required = true)]
    pub config: PathBuf,
}
