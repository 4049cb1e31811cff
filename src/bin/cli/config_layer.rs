//! Configuration Layer Management
//!
//! Merges default configuration, an optional YAML file, and CLI overrides, in
//! that order of increasing priority.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::{LookupArgs, MatchingArgs, OutputArgs};
use errknow::core::config::DEFAULT_CONFIG_FILES;
use errknow::{ErrknowConfig, MatchingConfig, OutputConfig};

/// Trait for merging configuration layers
pub trait ConfigMerge<T> {
    /// Merge another layer into this one, with the other taking priority
    fn merge_with(&mut self, other: T);
}

impl ConfigMerge<&MatchingArgs> for MatchingConfig {
    fn merge_with(&mut self, args: &MatchingArgs) {
        if args.no_suggest {
            self.enabled = false;
        }
        if let Some(min_len) = args.min_len {
            self.min_len = min_len;
        }
        if let Some(max_distance) = args.max_distance {
            self.max_distance = max_distance;
        }
        if args.max_suggestions.is_some() {
            self.max_suggestions = args.max_suggestions;
        }
    }
}

impl ConfigMerge<&OutputArgs> for OutputConfig {
    fn merge_with(&mut self, args: &OutputArgs) {
        if let Some(format) = args.format {
            self.format = format;
        }
        if args.no_header {
            self.header = false;
        }
        if args.color {
            self.color = true;
        }
    }
}

impl ConfigMerge<&LookupArgs> for ErrknowConfig {
    fn merge_with(&mut self, args: &LookupArgs) {
        self.matching.merge_with(&args.matching);
        self.output.merge_with(&args.output);
    }
}

/// The config file to read: the explicit one, else a default in the
/// working directory if present.
fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    DEFAULT_CONFIG_FILES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

/// Load the file layer only, defaulting when there is no file.
pub fn load_configuration(explicit: Option<&Path>) -> anyhow::Result<ErrknowConfig> {
    let Some(path) = config_path(explicit) else {
        debug!("no configuration file, using defaults");
        return Ok(ErrknowConfig::default());
    };

    debug!(path = %path.display(), "loading configuration");
    let config = ErrknowConfig::from_yaml_file(&path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load configuration from {}: {}",
            path.display(),
            e
        )
    })?;

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;
    Ok(config)
}

/// Build the effective configuration for a lookup run.
pub fn build_layered_config(args: &LookupArgs) -> anyhow::Result<ErrknowConfig> {
    let mut config = load_configuration(args.config.as_deref())?;
    config.merge_with(args);

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;

    Ok(config)
}
