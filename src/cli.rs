use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// mdrip - rip labeled code blocks out of markdown
#[derive(Parser, Debug)]
#[command(name = "mdrip")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "PATH may be a file, a folder, or a repo like gh:owner/name/sub/path.")]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./.mdrip.toml, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tree of documents found at each path
    Tree {
        #[arg(value_name = "PATH", default_value = ".")]
        paths: Vec<String>,
    },

    /// Print the code blocks found in each path's documents
    Blocks {
        #[arg(value_name = "PATH", default_value = ".")]
        paths: Vec<String>,

        /// Only blocks carrying this label
        #[arg(short, long)]
        label: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render every document under a path as HTML
    Render {
        #[arg(value_name = "PATH", default_value = ".")]
        path: String,
    },
}
