//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MdripResult;
use crate::infrastructure::git::{DEFAULT_CLONE_BASE_URL, DEFAULT_GIT_PROGRAM};

use super::loader::{self, ConfigWarning};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter used when neither RUST_LOG nor `-v` says otherwise
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Remote repository configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Program used for cloning
    #[serde(default = "default_git")]
    pub git: String,

    /// Prepended to `owner/name` to form a clone url
    #[serde(default = "default_clone_base_url")]
    pub clone_base_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            git: default_git(),
            clone_base_url: default_clone_base_url(),
        }
    }
}

fn default_git() -> String {
    DEFAULT_GIT_PROGRAM.to_string()
}

fn default_clone_base_url() -> String {
    DEFAULT_CLONE_BASE_URL.to_string()
}

/// Tree dump configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpConfig {
    /// Bytes of content shown next to each file
    #[serde(default = "default_summary_width")]
    pub summary_width: usize,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            summary_width: default_summary_width(),
        }
    }
}

fn default_summary_width() -> usize {
    crate::application::DEFAULT_SUMMARY_WIDTH
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub dump: DumpConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MdripResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MdripResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the working directory, the user config
    /// directory, or defaults, then apply environment overrides.
    pub fn discover(explicit: Option<&Path>) -> MdripResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (MDRIP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
