//! Config Command
//!
//! Manage docweave configuration.
//!
//! Usage:
//!   docweave config show [-f json]
//!   docweave config path
//!   docweave config init [-g] [--force]

use crate::cli::Output;
use crate::config::ConfigLoader;
use crate::types::Result;

/// Show the merged effective configuration
pub fn show(format: &str) -> Result<()> {
    ConfigLoader::show_config(format)
}

/// Show configuration file paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Initialize a configuration file
pub fn init(global: bool, force: bool) -> Result<()> {
    let config_path = if global {
        ConfigLoader::init_global(force)?
    } else {
        ConfigLoader::init_project(force)?
    };

    let output = Output::new();
    output.success(&format!("Initialized {}", config_path.display()));
    Ok(())
}
