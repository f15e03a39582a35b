use anyhow::Result;

use mdrip::{BlockAccumulator, CodeBlock, Config, Label, MarkdownParser, TreeNode};

pub fn cmd_blocks(
    config: &Config,
    paths: &[String],
    label: Option<&str>,
    json: bool,
) -> Result<()> {
    let trees = super::load_all(config, paths)?;

    let mut acc = BlockAccumulator::new(MarkdownParser::new());
    for tree in &trees {
        tree.accept(&mut acc);
    }
    if let Some(err) = acc.take_error() {
        return Err(err.into());
    }

    let label = label.map_or_else(Label::wildcard, Label::new);
    let selected = acc.blocks(&label);
    tracing::info!(count = selected.len(), label = %label, "selected code blocks");

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
    } else {
        for block in selected {
            print!("{}", render_block(block));
        }
    }
    Ok(())
}

fn render_block(block: &CodeBlock) -> String {
    let mut out = format!("# {} ({})\n", block.name(), block.file());
    out.push_str(block.code());
    if !block.code().ends_with('\n') {
        out.push('\n');
    }
    out
}
