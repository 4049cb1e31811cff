//! errknow CLI - look up OS error numbers and names.

use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Lookup diagnostics share stderr with logs, so stay quiet by default.
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None => cli::lookup_command(cli.lookup)?,
        Some(Commands::PrintDefaultConfig) => cli::print_default_config()?,
        Some(Commands::InitConfig(args)) => cli::init_config(args)?,
        Some(Commands::ValidateConfig(args)) => cli::validate_config(args)?,
    }

    Ok(())
}
