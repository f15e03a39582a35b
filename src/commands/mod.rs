//! Command handlers for the mdrip binary.

mod blocks;
mod render;
mod tree;

pub use blocks::cmd_blocks;
pub use render::cmd_render;
pub use tree::cmd_tree;

use anyhow::{Context, Result};

use mdrip::{Config, GitCli, LoadedTree, LocalFs, TreeLoader};

fn loader(config: &Config) -> TreeLoader<LocalFs, GitCli> {
    let cloner = GitCli::new(&config.remote.git, &config.remote.clone_base_url);
    TreeLoader::new(LocalFs::new(), cloner)
}

/// Load every argument; arguments holding no documents are skipped with a warning.
fn load_all(config: &Config, args: &[String]) -> Result<Vec<LoadedTree>> {
    let loader = loader(config);
    let mut trees = Vec::with_capacity(args.len());
    for arg in args {
        match loader
            .load_tree(arg)
            .with_context(|| format!("loading '{arg}'"))?
        {
            Some(tree) => trees.push(tree),
            None => tracing::warn!(path = %arg, "no markdown found"),
        }
    }
    Ok(trees)
}
