//! Configuration types and management for errknow.
//!
//! A configuration is the fuzzy-matching policy plus the output settings. It
//! can be loaded from YAML, overridden from the command line, and validated
//! before a run starts.

pub mod validation;


use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::errors::{ErrknowError, Result};
use crate::matching::SimilarityPolicy;

pub use validation::{validate_optional_positive_usize, validate_positive_usize};

/// File names searched in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = [".errknow.yml", ".errknow.yaml"];

/// Main configuration for an errknow run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrknowConfig {
    /// Fuzzy matching policy for names that do not resolve
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

impl ErrknowConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            ErrknowError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            ErrknowError::config(format!("Invalid YAML in {}: {e}", path.display()))
        })
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            ErrknowError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.matching.validate()?;
        Ok(())
    }
}

/// Fuzzy "did you mean" settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Offer suggestions when a name is not found
    #[serde(default = "MatchingConfig::default_enabled")]
    pub enabled: bool,

    /// Names shorter than this never fuzzy-match
    #[serde(default = "MatchingConfig::default_min_len")]
    pub min_len: usize,

    /// Largest edit distance still counted as a match
    #[serde(default = "MatchingConfig::default_max_distance")]
    pub max_distance: usize,

    /// Cap on the number of suggestions shown (unlimited when unset)
    #[serde(default)]
    pub max_suggestions: Option<usize>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            min_len: Self::default_min_len(),
            max_distance: Self::default_max_distance(),
            max_suggestions: None,
        }
    }
}

impl MatchingConfig {
    const fn default_enabled() -> bool {
        true
    }

    const fn default_min_len() -> usize {
        SimilarityPolicy::DEFAULT_MIN_LEN
    }

    const fn default_max_distance() -> usize {
        SimilarityPolicy::DEFAULT_MAX_DISTANCE
    }

    /// The similarity policy described by this section.
    pub fn policy(&self) -> SimilarityPolicy {
        SimilarityPolicy::new(self.min_len, self.max_distance)
    }

    /// Validate matching configuration
    pub fn validate(&self) -> Result<()> {
        validate_positive_usize(self.min_len, "matching.min_len")?;
        validate_optional_positive_usize(self.max_suggestions, "matching.max_suggestions")?;
        Ok(())
    }
}

/// How successful lookups are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<code> <name> <description>`, one per line
    #[default]
    Plain,
    /// Fixed-width columns under a single header
    Aligned,
    /// Boxed table rendered once every token is resolved
    Table,
    /// One JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// Whether this format prints a column header before the first row.
    pub const fn has_header(self) -> bool {
        matches!(self, Self::Aligned | Self::Table)
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Row format for successful lookups
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the column header for formats that have one
    #[serde(default = "OutputConfig::default_header")]
    pub header: bool,

    /// Highlight names and headers with ANSI colors
    #[serde(default)]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            header: Self::default_header(),
            color: false,
        }
    }
}

impl OutputConfig {
    const fn default_header() -> bool {
        true
    }
}
