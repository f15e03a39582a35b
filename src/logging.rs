//! Logging System
//!
//! Structured logging through `tracing`, written to stderr so stdout stays
//! clean for tree dumps and code blocks.
//!
//! Filter priority (highest to lowest):
//! 1. `RUST_LOG`
//! 2. `-v` count on the command line
//! 3. `log.level` from configuration

use is_terminal::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{MdripError, MdripResult};

/// Filter directive for a `-v` count, if it says anything.
pub fn level_for_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Directive used when RUST_LOG is unset.
pub fn directive(verbose: u8, configured: &str) -> &str {
    level_for_verbosity(verbose).unwrap_or(configured)
}

fn build_env_filter(verbose: u8, configured: &str) -> MdripResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = directive(verbose, configured);
    EnvFilter::try_new(directive).map_err(|e| MdripError::InvalidLogFilter {
        directive: directive.to_string(),
        message: e.to_string(),
    })
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbose: u8, configured: &str) -> MdripResult<()> {
    let filter = build_env_filter(verbose, configured)?;
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);
    if tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialized");
    }
    Ok(())
}
