//! CLI Command Implementations
//!
//! - lookup: resolve error numbers and names (the default command)
//! - config: configuration management commands

pub mod config;
pub mod lookup;

pub use config::{init_config, print_default_config, validate_config};
pub use lookup::lookup_command;
