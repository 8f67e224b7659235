//! Configuration management for stackignore.
//!
//! This module handles loading configuration from multiple sources:
//! - TOML configuration files following XDG Base Directory specification
//! - Environment variables (`STACKIGNORE_*`)
//! - CLI arguments
//!
//! Precedence when merging: CLI > environment > config file > defaults.
//!
//! ## Example
//!
//! ```rust
//! use stackignore::Config;
//!
//! let file_config = Config::load_from_file().unwrap();
//! let env_config = Config::load_from_env();
//!
//! // Merge configurations (env takes precedence)
//! let merged = file_config.merge(env_config);
//! println!("GitHub base URL: {}", merged.github_base_url());
//! ```

use crate::models::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Raw-content endpoint of the github/gitignore template repository.
pub const DEFAULT_GITHUB_BASE_URL: &str = "https://raw.githubusercontent.com/github/gitignore/main";

/// Batched template endpoint of the gitignore.io API.
pub const DEFAULT_API_BASE_URL: &str = "https://www.toptal.com/developers/gitignore/api";

/// Per-request timeout applied to both remote tiers.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration assembled from CLI arguments, environment
/// variables, config file, and defaults.
///
/// Every field is optional; resolved accessors apply the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding local fallback templates.
    pub templates_dir: Option<String>,
    /// Base URL for the per-identifier tier-1 provider.
    pub github_base_url: Option<String>,
    /// Base URL for the batched tier-2 provider.
    pub api_base_url: Option<String>,
    /// HTTP request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from the XDG config directory.
    ///
    /// A missing config file is not an error; it yields the default
    /// (all-unset) configuration.
    #[must_use = "this returns the loaded configuration which should be used"]
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
    }

    /// Load configuration from `STACKIGNORE_*` environment variables.
    #[must_use]
    pub fn load_from_env() -> Self {
        Self {
            templates_dir: std::env::var("STACKIGNORE_TEMPLATES_DIR").ok(),
            github_base_url: std::env::var("STACKIGNORE_GITHUB_BASE_URL").ok(),
            api_base_url: std::env::var("STACKIGNORE_API_BASE_URL").ok(),
            timeout_secs: std::env::var("STACKIGNORE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Extract the configuration-relevant fields from CLI arguments.
    #[must_use]
    pub fn from_args(args: &Args) -> Self {
        Self {
            templates_dir: args.templates_dir.clone(),
            ..Self::default()
        }
    }

    /// Merge two configurations; fields set in `other` take precedence.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            templates_dir: other.templates_dir.or(self.templates_dir),
            github_base_url: other.github_base_url.or(self.github_base_url),
            api_base_url: other.api_base_url.or(self.api_base_url),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Resolve the full configuration for one invocation:
    /// file, overridden by environment, overridden by CLI.
    pub fn resolve(args: &Args) -> Result<Self> {
        Ok(Self::load_from_file()?
            .merge(Self::load_from_env())
            .merge(Self::from_args(args)))
    }

    /// Resolved templates directory, defaulting to
    /// `<config dir>/stackignore/templates`.
    #[must_use]
    pub fn templates_dir(&self) -> PathBuf {
        match &self.templates_dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("stackignore")
                .join("templates"),
        }
    }

    /// Resolved tier-1 base URL.
    #[must_use]
    pub fn github_base_url(&self) -> String {
        self.github_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_GITHUB_BASE_URL.to_string())
    }

    /// Resolved tier-2 base URL.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        self.api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    /// Resolved HTTP timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Path of the config file under the XDG config directory.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("stackignore").join("config.toml"))
    }

    /// Write a commented sample config file, creating parent directories.
    ///
    /// Refuses to overwrite an existing config file.
    pub fn create_sample_config() -> Result<PathBuf> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            anyhow::bail!("Config file already exists: {}", config_path.display());
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let sample = format!(
            "# stackignore configuration\n\
             # All settings are optional.\n\n\
             # Directory holding local fallback templates (<stack>.gitignore files)\n\
             # templates_dir = \"/path/to/templates\"\n\n\
             # Remote template endpoints\n\
             # github_base_url = \"{DEFAULT_GITHUB_BASE_URL}\"\n\
             # api_base_url = \"{DEFAULT_API_BASE_URL}\"\n\n\
             # HTTP request timeout in seconds\n\
             # timeout_secs = {DEFAULT_TIMEOUT_SECS}\n"
        );

        fs::write(&config_path, sample)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;
        Ok(config_path)
    }
}
