use anyhow::Result;

use mdrip::{dump, Config};

pub fn cmd_tree(config: &Config, paths: &[String]) -> Result<()> {
    for tree in super::load_all(config, paths)? {
        print!("{}", dump(&tree, config.dump.summary_width));
    }
    Ok(())
}
