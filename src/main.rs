//! mdrip - extract labeled code blocks from markdown
//!
//! Usage: mdrip <COMMAND>
//!
//! Commands:
//!   tree    Print the document tree found at each path
//!   blocks  Print code blocks, optionally filtered by label
//!   render  Render documents as HTML

use anyhow::{Context, Result};
use clap::Parser;

use mdrip::{logging, Config};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) =
        Config::discover(cli.config.as_deref()).context("loading configuration")?;
    logging::init_logging(cli.verbose, &config.log.level)?;
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    match cli.command {
        Commands::Tree { paths } => commands::cmd_tree(&config, &paths),
        Commands::Blocks { paths, label, json } => {
            commands::cmd_blocks(&config, &paths, label.as_deref(), json)
        }
        Commands::Render { path } => commands::cmd_render(&config, &path),
    }
}
