//! Configuration management commands.
//!
//! Initialization, validation, and printing of the default configuration.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use crate::cli::args::{InitConfigArgs, ValidateConfigArgs};
use crate::cli::config_layer::load_configuration;
use errknow::ErrknowConfig;

/// Print default configuration in YAML format
pub fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default errknow configuration".dimmed());
    println!(
        "{}",
        "# Save this to .errknow.yml or pass it with --config".dimmed()
    );
    println!();

    let yaml_output = serde_yaml::to_string(&ErrknowConfig::default())?;
    println!("{}", yaml_output);

    Ok(())
}

/// Row type for the settings table.
#[derive(Tabled)]
struct SettingRow {
    setting: &'static str,
    description: &'static str,
}

/// Initialize a configuration file with defaults
pub fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Configuration file already exists: {}. Use --force to overwrite or choose a different name with --output",
            args.output.display()
        ));
    }

    ErrknowConfig::default().to_yaml_file(&args.output)?;

    println!(
        "{} {}",
        "Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "Key settings you can customize:".bright_blue().bold());

    let rows = [
        SettingRow {
            setting: "matching.enabled",
            description: "Suggest similar names for unknown ones (default: true)",
        },
        SettingRow {
            setting: "matching.min_len",
            description: "Shortest name that gets suggestions (default: 4)",
        },
        SettingRow {
            setting: "matching.max_distance",
            description: "Largest edit distance for a suggestion (default: 2)",
        },
        SettingRow {
            setting: "matching.max_suggestions",
            description: "Cap on suggestions per name (default: unlimited)",
        },
        SettingRow {
            setting: "output.format",
            description: "plain, aligned, table or jsonl (default: plain)",
        },
    ];

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);

    Ok(())
}

/// Validate an errknow configuration file
pub fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    let config = load_configuration(Some(&args.config)).map_err(|e| {
        eprintln!("{} {}", "Configuration validation failed:".red(), e);
        e
    })?;

    println!(
        "{} {}",
        "Configuration file is valid:".bright_green().bold(),
        args.config.display().to_string().cyan()
    );
    println!();
    println!("{}", serde_yaml::to_string(&config)?);

    Ok(())
}
