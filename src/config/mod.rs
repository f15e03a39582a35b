//! Configuration module for mdrip
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MDRIP_*)
//! 3. `--config <file>`, else `./.mdrip.toml`, else `<config dir>/mdrip/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use types::{Config, DumpConfig, LogConfig, RemoteConfig};
