//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/docweave/config.toml)
//! 3. Project config (.docweave.toml in the working directory)
//! 4. Environment variables (DOCWEAVE_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use super::types::Config;
use crate::constants::config::{APP_NAME, ENV_PREFIX, PROJECT_CONFIG_FILE};
use crate::types::{DocError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain using Figment:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Merge global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        // Merge project config
        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // Merge environment variables (e.g., DOCWEAVE_DOCUMENT_TITLE -> document.title)
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split('_').lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| DocError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| DocError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to the global config directory (~/.config/docweave/)
    pub fn global_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get path to the project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(PROJECT_CONFIG_FILE)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Write a commented default config file at the global location
    pub fn init_global(force: bool) -> Result<PathBuf> {
        let dir = Self::global_dir().ok_or_else(|| {
            DocError::Config("cannot determine global config directory".to_string())
        })?;
        let config_path = dir.join("config.toml");

        if config_path.exists() && !force {
            return Err(DocError::Config(format!(
                "{} already exists (use --force to overwrite)",
                config_path.display()
            )));
        }

        fs::create_dir_all(&dir)?;
        fs::write(&config_path, Self::default_config_template())?;
        Ok(config_path)
    }

    /// Write a commented default config file at the project location
    pub fn init_project(force: bool) -> Result<PathBuf> {
        let config_path = Self::project_config_path();

        if config_path.exists() && !force {
            return Err(DocError::Config(format!(
                "{} already exists (use --force to overwrite)",
                config_path.display()
            )));
        }

        fs::write(&config_path, Self::default_config_template())?;
        Ok(config_path)
    }

    /// Print the merged effective configuration
    pub fn show_config(format: &str) -> Result<()> {
        let config = Self::load()?;
        match format {
            "json" => println!("{}", serde_json::to_string_pretty(&config)?),
            "toml" => println!("{}", Self::to_toml(&config)?),
            _ => {
                println!("# Effective configuration (defaults + global + project + env)\n");
                println!("{}", Self::to_toml(&config)?);
            }
        }
        Ok(())
    }

    /// Show configuration file paths
    pub fn show_path() {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    fn to_toml(config: &Config) -> Result<String> {
        toml::to_string_pretty(config).map_err(|e| DocError::Config(e.to_string()))
    }

    fn default_config_template() -> String {
        format!(
            r#"# docweave configuration
version = "{version}"

[document]
# README filename searched in each directory
readme = "README.md"
# Top-level heading of the aggregate document
title = "Project Root"
# Include the root directory's own README as the document header
include_root = false
# Destination path; omit to write to stdout
# output = "ARCHITECTURE.md"

[traversal]
# Resolve symlinked directories during the walk
follow_links = false
"#,
            version = crate::constants::config::CONFIG_VERSION
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
